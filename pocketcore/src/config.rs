//! Configuration for the pocket calculator
//!
//! A small JSON file under the platform config directory. The app only
//! reads it; calculator state itself is never written to disk.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("File not found: {0}")]
    NotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Default tracing filter when neither the config nor `RUST_LOG` set one.
pub const DEFAULT_LOG_FILTER: &str = "warn,pocketcalc=info,pocketcore=info";

/// Startup options for the calculator window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Start in dark mode
    pub dark_mode: bool,
    pub window_width: f32,
    pub window_height: f32,
    /// When false the exit dialog's "Exit" choice only logs
    pub exit_closes_window: bool,
    pub log_filter: String,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            window_width: 320.0,
            window_height: 520.0,
            exit_closes_window: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CalcConfig {
    /// Default location: `<config dir>/config.json`
    pub fn default_path() -> PathBuf {
        config_dir("pocketcalc").join("config.json")
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Platform config directory for an app
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("", "", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CalcConfig::default();
        assert!(!config.dark_mode);
        assert!(!config.exit_closes_window);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        assert!(matches!(CalcConfig::load(&path), Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "dark_mode": true, "window_width": 400 }"#).unwrap();

        let config = CalcConfig::load(&path).unwrap();
        assert!(config.dark_mode);
        assert_eq!(config.window_width, 400.0);
        assert_eq!(config.window_height, 520.0);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ dark_mode: yes").unwrap();

        assert!(matches!(CalcConfig::load(&path), Err(ConfigError::Json(_))));
    }
}
