//! Token types for parsed tab notation.

use serde::Serialize;

/// A parsed unit of tab notation, emitted in source order.
///
/// `length` counts playback steps: 1 for the symbol itself plus one per
/// sustain dash. `Hold` is a standalone dash run with no preceding symbol;
/// it plays exactly like a `Rest` but renders differently, so the two stay
/// distinct tokens.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TabToken {
    /// A sounding note resolved to a concrete pitch name ("C#4").
    #[serde(rename_all = "camelCase")]
    Note {
        raw: String,
        pitch_name: String,
        length: u32,
    },
    /// Explicit silence (`0`, `x`, `_`).
    Rest { raw: String, length: u32 },
    /// A standalone dash run (`---`), one silent step per dash.
    Hold { raw: String, length: u32 },
    /// Light separator (`,`): one silent step.
    Beat,
    /// Strong separator (`|`): two silent steps, always followed by a
    /// `LineBreak` in the token stream.
    Bar,
    /// End of a source line that produced at least one token.
    #[serde(rename = "newline")]
    LineBreak,
}

impl TabToken {
    pub fn is_note(&self) -> bool {
        matches!(self, TabToken::Note { .. })
    }
}

/// Output of a parse: the token stream plus non-fatal diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResult {
    pub tokens: Vec<TabToken>,
    pub warnings: Vec<String>,
}
