//! # Playback Module
//!
//! Turns a parsed token stream into something an instrument can play.
//!
//! ## Sub-modules
//! - `sequence` - expand tokens into fixed-duration pitch-or-silence steps
//! - `driver` - schedule those steps against a sample-based instrument
//!
//! ## Pipeline
//! ```rust
//! use std::sync::Arc;
//! use kalimba_tab::{parse_tab, to_note_sequence, ParseConfig};
//! use kalimba_tab::playback::{Instrument, PlaybackOptions, PreviewPlayer, Soundbank};
//!
//! struct Silent;
//! impl Instrument for Silent {
//!     fn play(&self, _pitch: &str, _gain: f32) {}
//! }
//!
//! let result = parse_tab("1 2 3", &ParseConfig::default());
//! let sequence = to_note_sequence(&result.tokens);
//!
//! let mut soundbank = Soundbank::new();
//! soundbank.register("Keylimba", 1.0, Arc::new(Silent));
//! let player = PreviewPlayer::new(soundbank);
//!
//! let handle = player.play(sequence, &PlaybackOptions::default()).unwrap();
//! handle.stop();
//! ```
//!
//! The sequencer is pure and total; the driver is the one concurrency-bearing
//! piece and owns the only hard failure in the crate (no instrument loaded).

mod driver;
mod sequence;


pub use driver::{
    Instrument, PlaybackHandle, PlaybackOptions, PreviewPlayer, Soundbank, DEFAULT_SOUNDFONT,
};
pub use sequence::to_note_sequence;
