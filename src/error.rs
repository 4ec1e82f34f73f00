//! # Error Types
//!
//! Malformed tab fragments are never errors: the parser drops them silently
//! because tab content is free-form user text. Errors are reserved for
//! environment failures outside the parser's control.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabError {
    /// Invalid settings document.
    ///
    /// Occurs when the YAML preference document cannot be deserialized.
    #[error("Invalid settings: {0}")]
    SettingsError(String),

    /// The sample-based instrument engine is unavailable.
    ///
    /// This is the only hard failure in playback: without a registered
    /// instrument there is nothing to schedule notes against. It is always
    /// surfaced to the caller and never retried.
    #[error("Instrument engine is not loaded: {0}")]
    EngineUnavailable(String),
}
