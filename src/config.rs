//! Settings file
//!
//! An optional `settings.toml` in the data directory. Every field has a
//! default, so a missing or partial file is fine.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Cards generated per import when --count is not given
    pub cards_per_import: usize,
    /// Quiz length when --limit is not given
    pub quiz_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cards_per_import: 8,
            quiz_limit: 15,
        }
    }
}

impl Settings {
    /// Load settings.toml from the data directory, falling back to defaults
    /// when the file is absent.
    pub fn load(data_dir: &Path) -> Result<Self, ConfigError> {
        let path = data_dir.join("settings.toml");
        if !path.exists() {
            log::debug!("No settings.toml at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path()).unwrap();
        assert_eq!(settings.cards_per_import, 8);
        assert_eq!(settings.quiz_limit, 15);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("settings.toml"), "quiz_limit = 30\n").unwrap();

        let settings = Settings::load(dir.path()).unwrap();
        assert_eq!(settings.quiz_limit, 30);
        assert_eq!(settings.cards_per_import, 8);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("settings.toml"), "quiz_limit = \"lots\"\n").unwrap();
        assert!(matches!(
            Settings::load(dir.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
