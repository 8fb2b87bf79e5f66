//! Error types for settings loading.
//!
//! Interaction failures (connecting to empty space, unknown port names) are
//! no-ops rather than errors; the only fallible surface of the crate is
//! reading and writing the settings file.

use thiserror::Error;

/// Errors that can occur while loading or saving settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings parsed but hold values the editor cannot run with
    #[error("Invalid settings: {0}")]
    Invalid(String),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
