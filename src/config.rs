use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TEMPERATURE: f64 = 0.2;

/// Runtime configuration, read from `~/.cvwallet/config.toml` when present.
///
/// The API key is optional here: the credential is resolved from the process
/// environment at analyze time, and this file is only the last fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    pub model: String,
    pub temperature: f64,
    pub api_key: Option<String>,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            api_key: None,
        }
    }
}

impl WalletConfig {
    /// Default config file location (`~/.cvwallet/config.toml`).
    pub fn default_path() -> Option<PathBuf> {
        directories::UserDirs::new().map(|u| u.home_dir().join(".cvwallet").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from an explicit path. A missing or unparsable file is an error
    /// here, unlike the default-location lookup.
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config: Self = toml::from_str(&raw)
            .map_err(|e| ConfigError::Load(format!("{}: {e}", path.display())))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = WalletConfig::default();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.api_key.is_none());
        assert!(config.temperature < 1.0);
    }

    #[test]
    fn loads_partial_toml_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "model = \"gemini-2.5-pro\"\n").unwrap();

        let config = WalletConfig::load_from(&path).unwrap();
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.temperature, DEFAULT_TEMPERATURE);
    }

    #[test]
    fn bad_toml_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "model = [not toml").unwrap();

        let err = WalletConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("config"));
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(WalletConfig::load_from(&path).is_err());
    }
}
