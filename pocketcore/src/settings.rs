//! User settings, persisted as JSON in the platform config directory
//!
//! Only preferences live here. The calculation itself is never saved.

use crate::format::{Formatter, DEFAULT_SIGNIFICANT_DIGITS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SettingsError>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalcSettings {
    /// Significant digits for non-integral results (clamped to 1-15)
    #[serde(default = "default_significant_digits")]
    pub significant_digits: u8,
    /// Show the expression line above the display
    #[serde(default = "default_show_preview")]
    pub show_preview: bool,
}

fn default_significant_digits() -> u8 {
    DEFAULT_SIGNIFICANT_DIGITS as u8
}

fn default_show_preview() -> bool {
    true
}

impl Default for CalcSettings {
    fn default() -> Self {
        Self {
            significant_digits: default_significant_digits(),
            show_preview: default_show_preview(),
        }
    }
}

impl CalcSettings {
    pub fn config_path() -> PathBuf {
        config_dir("pocketcalc").join("settings.json")
    }

    pub fn formatter(&self) -> Formatter {
        Formatter::new(usize::from(self.significant_digits))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load from the default location. A missing file means defaults; a
    /// broken one is logged and replaced by defaults.
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load settings");
                Self::default()
            }
        }
    }

    pub fn save(&self) {
        let path = Self::config_path();
        if let Err(e) = self.save_to(&path) {
            tracing::warn!(path = %path.display(), error = %e, "failed to save settings");
        }
    }
}

/// Config directory for an app, falling back to the working directory.
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("org", "pocketcalc", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = CalcSettings::default();
        assert_eq!(settings.significant_digits, 10);
        assert!(settings.show_preview);
        assert_eq!(settings.formatter(), Formatter::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = CalcSettings {
            significant_digits: 6,
            show_preview: false,
        };
        settings.save_to(&path).unwrap();
        assert_eq!(CalcSettings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "show_preview": false }"#).unwrap();
        let settings = CalcSettings::load_from(&path).unwrap();
        assert_eq!(settings.significant_digits, 10);
        assert!(!settings.show_preview);
    }

    #[test]
    fn test_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(CalcSettings::load_from(&missing), Err(SettingsError::Io(_))));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(CalcSettings::load_from(&broken), Err(SettingsError::Json(_))));
    }

    #[test]
    fn test_formatter_is_clamped() {
        let settings = CalcSettings {
            significant_digits: 0,
            show_preview: true,
        };
        assert_eq!(settings.formatter().significant_digits(), 1);
    }
}
