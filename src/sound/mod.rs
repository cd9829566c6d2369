//! Completion sound selection and playback.
//!
//! The builtin chime is embedded in the binary; custom sounds come from a
//! file path configured relative to the user's home directory. Playback
//! blocks the caller until the sound has drained, so a session never
//! overlaps its own chime.

mod player;

pub use player::RodioPlayer;

use std::path::PathBuf;

use crate::config::{Config, SoundType};
use crate::error::TempoError;
use crate::session::SessionKind;

/// The embedded completion chime.
pub(crate) static CHIME: &[u8] = include_bytes!("../../assets/chime.wav");

/// Where a completion sound comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoundSource {
    /// The chime embedded in the binary.
    Builtin,
    /// A user-supplied file.
    Custom(PathBuf),
}

impl SoundSource {
    /// Pick the configured sound for a session kind.
    ///
    /// A kind configured for a custom sound with no path set falls back
    /// to the builtin chime.
    #[must_use]
    pub fn for_kind(kind: SessionKind, config: &Config) -> Self {
        let (sound_type, path) = match kind {
            SessionKind::Focus => (config.focus_sound_type, &config.custom_focus_sound),
            SessionKind::Break => (config.break_sound_type, &config.custom_break_sound),
        };

        match sound_type {
            SoundType::Default => Self::Builtin,
            SoundType::Custom => {
                if path.is_empty() {
                    Self::Builtin
                } else {
                    Self::Custom(resolve_home_relative(path))
                }
            }
        }
    }
}

/// Join a configured path onto `$HOME`; absolute paths pass through.
fn resolve_home_relative(path: &str) -> PathBuf {
    let candidate = PathBuf::from(path);
    if candidate.is_absolute() {
        return candidate;
    }

    std::env::var("HOME").map_or(candidate.clone(), |home| PathBuf::from(home).join(candidate))
}

/// Plays a sound to completion, blocking the caller.
#[cfg_attr(test, mockall::automock)]
pub trait SoundPlayer {
    /// Decode and play `source`, returning once playback has finished.
    ///
    /// # Errors
    ///
    /// `SoundNotFound` if a custom path does not resolve to a readable
    /// file (recoverable), `Playback` if the output device cannot be
    /// opened or the payload cannot be decoded (fatal).
    fn play(&mut self, source: &SoundSource) -> Result<(), TempoError>;
}
