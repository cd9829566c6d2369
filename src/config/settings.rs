//! Configuration settings for tempo.
//!
//! Settings are loaded from `~/.tempo/config.yaml`. A missing file yields
//! the defaults; only `tempo config set` writes the file.

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::error::TempoError;

/// How a session kind's completion sound is chosen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SoundType {
    /// The chime embedded in the binary.
    #[default]
    Default,
    /// A user-supplied sound file.
    Custom,
}

impl SoundType {
    /// Parse from a config value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    /// The value as it appears in the config file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Custom => "custom",
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default focus session length in minutes.
    #[serde(default = "default_session_duration")]
    pub default_session_duration: u32,
    /// Default break length in minutes.
    #[serde(default = "default_break_duration")]
    pub default_break_duration: u32,
    /// Custom focus completion sound, as a path relative to the home
    /// directory (absolute paths pass through). Empty means unset.
    #[serde(default)]
    pub custom_focus_sound: String,
    /// Custom break completion sound, same path rules.
    #[serde(default)]
    pub custom_break_sound: String,
    /// Which sound plays when a focus session ends.
    #[serde(default)]
    pub focus_sound_type: SoundType,
    /// Which sound plays when a break ends.
    #[serde(default)]
    pub break_sound_type: SoundType,
}

// Default value functions for serde
const fn default_session_duration() -> u32 {
    25
}

const fn default_break_duration() -> u32 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_session_duration: default_session_duration(),
            default_break_duration: default_break_duration(),
            custom_focus_sound: String::new(),
            custom_break_sound: String::new(),
            focus_sound_type: SoundType::default(),
            break_sound_type: SoundType::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, TempoError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, TempoError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TempoError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            TempoError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), TempoError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), TempoError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| TempoError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            TempoError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.default_session_duration, 25);
        assert_eq!(config.default_break_duration, 5);
        assert_eq!(config.focus_sound_type, SoundType::Default);
        assert_eq!(config.break_sound_type, SoundType::Default);
        assert!(config.custom_focus_sound.is_empty());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config.default_session_duration, 25);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.default_session_duration = 50;
        config.focus_sound_type = SoundType::Custom;
        config.custom_focus_sound = "sounds/gong.mp3".to_string();

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded.default_session_duration, 50);
        assert_eq!(loaded.focus_sound_type, SoundType::Custom);
        assert_eq!(loaded.custom_focus_sound, "sounds/gong.mp3");
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        // Write a partial config (only some fields)
        let partial_yaml = "default_break_duration: 10\n";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        // Custom value should be loaded
        assert_eq!(config.default_break_duration, 10);
        // Defaults should be used for missing fields
        assert_eq!(config.default_session_duration, 25);
        assert_eq!(config.break_sound_type, SoundType::Default);
    }

    #[test]
    fn test_sound_type_parse() {
        assert_eq!(SoundType::parse("default"), Some(SoundType::Default));
        assert_eq!(SoundType::parse("CUSTOM"), Some(SoundType::Custom));
        assert_eq!(SoundType::parse("loud"), None);
    }
}
