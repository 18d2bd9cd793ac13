//! User settings for reaching the planning service.
//!
//! Settings are read from `$XDG_CONFIG_HOME/furrow/config.json` unless an
//! explicit file is given. A missing default file means "use defaults"; a
//! missing explicit file is an error.
//!
//! ```json
//! { "api_url": "http://127.0.0.1:8000", "timeout_secs": 5 }
//! ```

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{FurrowError, ResultExt, Result};

/// File name looked up under the XDG config directory.
pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the planning service; `None` means local generation only
    pub api_url: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: None,
            timeout_secs: 10,
        }
    }
}

impl Settings {
    /// Load settings from `path`, or from the XDG location when `None`.
    ///
    /// # Errors
    ///
    /// Returns `FurrowError::FileSystem` if an explicit file cannot be read
    /// and `FurrowError::Configuration` if a file is not valid settings JSON.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) => Self::from_file(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Read settings from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading settings from {}", path.display());
        let raw = std::fs::read_to_string(path).map_err(|e| FurrowError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&raw).with_context(format!("invalid settings in {}", path.display()))
    }

    /// Existing settings file under the XDG config directories, if any.
    pub fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("furrow").find_config_file(CONFIG_FILE)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api_url, None);
        assert_eq!(settings.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{"api_url": "http://127.0.0.1:9000"}"#).unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.api_url.as_deref(), Some("http://127.0.0.1:9000"));
        assert_eq!(settings.timeout_secs, 10);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let err = Settings::load(Some(&temp_dir.path().join("absent.json"))).unwrap_err();
        assert!(matches!(err, FurrowError::FileSystem { .. }));
    }

    #[test]
    fn test_malformed_file_is_a_configuration_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "timeout_secs = 3").unwrap();
        let err = Settings::load(Some(&path)).unwrap_err();
        assert!(matches!(err, FurrowError::Configuration { .. }));
    }
}
