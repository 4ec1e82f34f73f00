//! User preference document.
//!
//! The web app keeps these preferences in browser storage; here they travel
//! as an explicit YAML document so parse and playback calls stay pure and
//! testable instead of reading ambient state.

use serde::Deserialize;

use crate::error::TabError;
use crate::pitch::{LabelType, ParseConfig};
use crate::playback::{PlaybackOptions, DEFAULT_SOUNDFONT};

/// Lowest pitch of the instrument note table (A0); `base-note` indexes from
/// here, so 39 is middle C.
const A0_MIDI: i32 = 21;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Settings {
    /// Index of the base note counted from A0 (39 = C4).
    pub base_note: i32,
    /// Soundfont name for preview playback.
    pub soundfont: String,
    /// Playback volume percent, 0-100.
    pub volume: u8,
    /// Preview tempo in BPM.
    pub tempo: u32,
    /// "Number" or "Letter"; anything else reads as "Number".
    pub label_type: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_note: 39,
            soundfont: DEFAULT_SOUNDFONT.to_string(),
            volume: 75,
            tempo: 120,
            label_type: "Number".to_string(),
        }
    }
}

impl Settings {
    /// Parse a YAML settings document. Missing keys take their defaults.
    pub fn from_yaml(document: &str) -> Result<Self, TabError> {
        serde_yaml::from_str(document).map_err(|e| TabError::SettingsError(e.to_string()))
    }

    /// MIDI value of the configured base pitch.
    pub fn base_midi(&self) -> i32 {
        A0_MIDI + self.base_note
    }

    pub fn parse_config(&self) -> ParseConfig {
        ParseConfig::new(LabelType::from_label(&self.label_type), self.base_midi())
    }

    pub fn playback_options(&self) -> PlaybackOptions {
        PlaybackOptions {
            bpm: self.tempo,
            volume: self.volume,
            soundfont: self.soundfont.clone(),
        }
    }
}
