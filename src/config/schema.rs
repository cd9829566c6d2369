//! The settings schema: every settable name in one table.
//!
//! The `config` command resolves public setting names through this enum,
//! so defaults, validation, and display all live in a single place rather
//! than being registered from scattered modules.

use crate::config::settings::{Config, SoundType};
use crate::error::TempoError;

/// A recognized setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    /// Default focus session length (`default_session_duration`).
    SessionDuration,
    /// Default break length (`default_break_duration`).
    BreakDuration,
    /// Custom focus sound path (`custom_focus_sound`).
    FocusSound,
    /// Custom break sound path (`custom_break_sound`).
    BreakSound,
    /// Focus sound selector (`focus_sound_type`).
    FocusSoundType,
    /// Break sound selector (`break_sound_type`).
    BreakSoundType,
}

impl Setting {
    /// All settings, in display order.
    pub const ALL: [Self; 6] = [
        Self::SessionDuration,
        Self::BreakDuration,
        Self::FocusSound,
        Self::BreakSound,
        Self::FocusSoundType,
        Self::BreakSoundType,
    ];

    /// Resolve a public setting name. Accepts both the short CLI name and
    /// the config-file key.
    ///
    /// # Errors
    ///
    /// Returns `UnknownSetting` for anything not in the table.
    pub fn parse(name: &str) -> Result<Self, TempoError> {
        match name.to_lowercase().as_str() {
            "session" | "default_session_duration" => Ok(Self::SessionDuration),
            "break" | "default_break_duration" => Ok(Self::BreakDuration),
            "focus-sound" | "custom_focus_sound" => Ok(Self::FocusSound),
            "break-sound" | "custom_break_sound" => Ok(Self::BreakSound),
            "focus-sound-type" | "focus_sound_type" => Ok(Self::FocusSoundType),
            "break-sound-type" | "break_sound_type" => Ok(Self::BreakSoundType),
            other => Err(TempoError::UnknownSetting(other.to_string())),
        }
    }

    /// The short CLI name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SessionDuration => "session",
            Self::BreakDuration => "break",
            Self::FocusSound => "focus-sound",
            Self::BreakSound => "break-sound",
            Self::FocusSoundType => "focus-sound-type",
            Self::BreakSoundType => "break-sound-type",
        }
    }

    /// Validate `value` and write it into `config`.
    ///
    /// # Errors
    ///
    /// Returns `Config` when the value fails this setting's validator.
    pub fn apply(self, config: &mut Config, value: &str) -> Result<(), TempoError> {
        match self {
            Self::SessionDuration => config.default_session_duration = parse_minutes(value)?,
            Self::BreakDuration => config.default_break_duration = parse_minutes(value)?,
            Self::FocusSound => config.custom_focus_sound = value.to_string(),
            Self::BreakSound => config.custom_break_sound = value.to_string(),
            Self::FocusSoundType => config.focus_sound_type = parse_sound_type(value)?,
            Self::BreakSoundType => config.break_sound_type = parse_sound_type(value)?,
        }
        Ok(())
    }

    /// The current value, formatted for display.
    #[must_use]
    pub fn current(self, config: &Config) -> String {
        match self {
            Self::SessionDuration => format!("{} minutes", config.default_session_duration),
            Self::BreakDuration => format!("{} minutes", config.default_break_duration),
            Self::FocusSound => display_path(&config.custom_focus_sound),
            Self::BreakSound => display_path(&config.custom_break_sound),
            Self::FocusSoundType => config.focus_sound_type.as_str().to_string(),
            Self::BreakSoundType => config.break_sound_type.as_str().to_string(),
        }
    }

    /// The default value, formatted for display.
    #[must_use]
    pub fn default_value(self) -> String {
        self.current(&Config::default())
    }
}

fn parse_minutes(value: &str) -> Result<u32, TempoError> {
    value.parse::<u32>().map_err(|_| {
        TempoError::Config(format!(
            "expected a whole number of minutes, got '{value}'"
        ))
    })
}

fn parse_sound_type(value: &str) -> Result<SoundType, TempoError> {
    SoundType::parse(value).ok_or_else(|| {
        TempoError::Config(format!(
            "expected 'default' or 'custom', got '{value}'"
        ))
    })
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "(unset)".to_string()
    } else {
        path.to_string()
    }
}
