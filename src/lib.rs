pub mod error;
pub mod layout;
pub mod parser;
pub mod pitch;
pub mod playback;
pub mod settings;
pub mod token;

pub use error::TabError;
pub use parser::{parse_tab, NO_NOTES_WARNING};
pub use pitch::{LabelType, ParseConfig};
pub use playback::{
    to_note_sequence, Instrument, PlaybackHandle, PlaybackOptions, PreviewPlayer, Soundbank,
};
pub use settings::Settings;
pub use token::{ParseResult, TabToken};

/// Parse tab content straight into a playback step sequence.
/// Convenience wrapper around [`parse_tab`] + [`to_note_sequence`].
pub fn sequence_tab(content: &str, config: &ParseConfig) -> Vec<Option<String>> {
    let result = parse_tab(content, config);
    to_note_sequence(&result.tokens)
}
