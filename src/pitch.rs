//! Pitch resolution for tab notation.
//!
//! Both grammars resolve to MIDI note numbers (C4 = 60) relative to a
//! configurable base pitch, then to sharp-spelled note names like "C#4".

/// Semitone offset from the base pitch for each major-scale degree 1-7.
pub const MAJOR_DEGREE_TO_SEMITONE: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

const SEMITONE_TO_NAME: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Semitone offset within an octave for a note letter (case-insensitive).
pub fn letter_to_semitone(letter: char) -> Option<i32> {
    match letter.to_ascii_uppercase() {
        'C' => Some(0),
        'D' => Some(2),
        'E' => Some(4),
        'F' => Some(5),
        'G' => Some(7),
        'A' => Some(9),
        'B' => Some(11),
        _ => None,
    }
}

/// Convert a MIDI note number to its sharp-spelled name ("C#4").
///
/// Octave numbering follows the MIDI convention where octave `n` starts at
/// `12 * (n + 1)`, so 60 is "C4". Total over all integers.
pub fn midi_to_note_name(midi: i32) -> String {
    let semitone = midi.rem_euclid(12) as usize;
    let octave = midi.div_euclid(12) - 1;
    format!("{}{}", SEMITONE_TO_NAME[semitone], octave)
}

/// Which grammar a tab is written in: scale degrees 1-7 or letters A-G.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelType {
    #[default]
    Number,
    Letter,
}

impl LabelType {
    /// Map a stored label-type string. Anything other than "Letter" is
    /// treated as the Number grammar.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Letter" => LabelType::Letter,
            _ => LabelType::Number,
        }
    }
}

/// Default base pitch: middle C (C4).
pub const DEFAULT_BASE_MIDI: i32 = 60;

/// Read-only inputs to a parse.
///
/// The base pitch is the MIDI value that scale degree 1 resolves to, and
/// whose octave an octave-unspecified letter note defaults to. Callers build
/// this once from their settings and pass it down explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    pub label_type: LabelType,
    pub base_midi: i32,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            label_type: LabelType::Number,
            base_midi: DEFAULT_BASE_MIDI,
        }
    }
}

impl ParseConfig {
    pub fn new(label_type: LabelType, base_midi: i32) -> Self {
        Self {
            label_type,
            base_midi,
        }
    }

    /// Octave component of the base pitch (C4 -> 4).
    pub fn base_octave(&self) -> i32 {
        self.base_midi.div_euclid(12) - 1
    }
}
