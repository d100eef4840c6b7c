//! Configuration for the extraction engine and backend client
//!
//! Loaded from a TOML file with environment overrides for the API
//! settings, so deployments can point the client at another backend
//! without touching the file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default backend base URL used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Environment variable overriding the API base URL
pub const ENV_API_URL: &str = "IDEAFORGE_API_URL";

/// Environment variable overriding the bearer token
pub const ENV_API_TOKEN: &str = "IDEAFORGE_API_TOKEN";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    /// Backend API settings
    pub api: ApiConfig,
}

/// Backend API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the platform REST API
    pub base_url: String,

    /// Bearer token attached to every request when present
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_string(), token: None }
    }
}

impl ForgeConfig {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        let config: Self = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    /// Resolve configuration the way the binary does
    ///
    /// An explicit path must exist; the default path is used when present;
    /// otherwise defaults apply. Environment overrides win in every case.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(explicit) => Self::from_file(explicit)?,
            None => match Self::default_path() {
                Some(default) if default.exists() => Self::from_file(&default)?,
                _ => Self::default(),
            },
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Default config file location under the user config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ideaforge").join("config.toml"))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(ENV_API_URL) {
            if !url.trim().is_empty() {
                self.api.base_url = url;
            }
        }
        if let Ok(token) = std::env::var(ENV_API_TOKEN) {
            if !token.trim().is_empty() {
                self.api.token = Some(token);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ForgeConfig::default();
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
        assert!(config.api.token.is_none());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = ForgeConfig::default();
        config.api.base_url = "https://platform.example.com/api".to_string();
        config.api.token = Some("secret".to_string());
        config.save(&path).unwrap();

        let loaded = ForgeConfig::from_file(&path).unwrap();
        assert_eq!(loaded.api.base_url, "https://platform.example.com/api");
        assert_eq!(loaded.api.token.as_deref(), Some("secret"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\ntoken = \"abc\"\n").unwrap();

        let loaded = ForgeConfig::from_file(&path).unwrap();
        assert_eq!(loaded.api.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(loaded.api.token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let missing = Path::new("/nonexistent/ideaforge.toml");
        assert!(ForgeConfig::from_file(missing).is_err());
    }
}
