//! Token stream to playback sequence expansion.

use crate::token::TabToken;

/// Expand tokens into uniform playback steps: `Some(pitch)` fires a note,
/// `None` is one step of silence.
///
/// Expansion per token: a note contributes its pitch then `length - 1`
/// silence steps; rests and holds contribute `length` silence steps (the two
/// are indistinguishable here); a beat is one silence step, a bar two, and a
/// line break two (phrase pause). Output order matches token order exactly,
/// with each token's contribution placed contiguously. Total and
/// deterministic.
pub fn to_note_sequence(tokens: &[TabToken]) -> Vec<Option<String>> {
    let mut sequence = Vec::new();
    for token in tokens {
        match token {
            TabToken::Note {
                pitch_name, length, ..
            } => {
                sequence.push(Some(pitch_name.clone()));
                for _ in 1..(*length).max(1) {
                    sequence.push(None);
                }
            }
            TabToken::Rest { length, .. } | TabToken::Hold { length, .. } => {
                for _ in 0..(*length).max(1) {
                    sequence.push(None);
                }
            }
            TabToken::Beat => sequence.push(None),
            TabToken::Bar | TabToken::LineBreak => {
                sequence.push(None);
                sequence.push(None);
            }
        }
    }
    sequence
}
