//! Error types for tempo.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by tempo.
///
/// Every variant is reported exactly once and never retried. Only
/// `SoundNotFound` is recoverable: the session machine degrades to the
/// builtin chime with a warning instead of aborting.
#[derive(Debug, Error)]
pub enum TempoError {
    /// A duration argument could not be parsed.
    #[error("invalid duration format: '{0}' (expected whole minutes or 'until HHMM')")]
    InvalidDuration(String),

    /// The config file could not be read, parsed, or written.
    #[error("configuration error: {0}")]
    Config(String),

    /// An unrecognized setting name was given to `config set`.
    #[error("unknown setting '{0}' (see 'tempo config show' for the list)")]
    UnknownSetting(String),

    /// A configured custom sound does not resolve to a readable file.
    #[error("sound file not found: {0}")]
    SoundNotFound(PathBuf),

    /// The audio device could not be opened or the sound failed to decode.
    #[error("audio playback failed: {0}")]
    Playback(String),

    /// Reading interactive input failed.
    #[error("failed to read input: {0}")]
    Input(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("serialization error: {0}")]
    Parse(#[from] serde_json::Error),
}
