//! Game configuration
//!
//! Every field has a default, so an empty or missing config file is valid.
//! Command-line flags override individual fields after loading.

use crate::error::ConfigError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Runtime settings for a game session and its front ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Submissions allowed before the round is lost
    pub max_rounds: usize,
    /// How long the invalid-word signal stays raised
    pub invalid_word_flash_ms: u64,
    /// Delay between the end of a round and the end-of-round view
    pub reveal_delay_ms: u64,
    /// Calendar date of day 0
    pub start_date: NaiveDate,
    /// Where session state is kept between runs
    pub state_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rounds: 10,
            invalid_word_flash_ms: 500,
            reveal_delay_ms: 1000,
            start_date: NaiveDate::from_ymd_opt(2022, 8, 6).unwrap_or_default(),
            state_file: PathBuf::from("wordle_state.json"),
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read, is not valid TOML,
    /// or holds invalid values.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_owned(),
            source: e,
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_owned(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that the type system cannot
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` when `max_rounds` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rounds == 0 {
            return Err(ConfigError::Invalid("max_rounds must be at least 1".to_string()));
        }
        Ok(())
    }

    #[must_use]
    pub fn invalid_word_flash(&self) -> Duration {
        Duration::from_millis(self.invalid_word_flash_ms)
    }

    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.max_rounds, 10);
        assert_eq!(config.invalid_word_flash(), Duration::from_millis(500));
        assert_eq!(config.reveal_delay(), Duration::from_secs(1));
        assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2022, 8, 6).unwrap());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let file = write_config("max_rounds = 6\nstart_date = \"2024-01-01\"\n");
        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.max_rounds, 6);
        assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(config.reveal_delay_ms, 1000);
    }

    #[test]
    fn zero_rounds_is_rejected() {
        let file = write_config("max_rounds = 0\n");
        assert!(matches!(
            GameConfig::from_file(file.path()),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let file = write_config("max_rounds = \"many\"\n");
        assert!(matches!(
            GameConfig::from_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }
}
