//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the backend base URL
pub const API_URL_ENV: &str = "ADMISSION_API_URL";

/// Backend base URL used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// User configuration for the TUI
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct AdmissionConfig {
    /// Backend base URL
    pub api_base_url: Option<String>,
}

impl AdmissionConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "admission", "admission-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: AdmissionConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Resolve the backend base URL.
    ///
    /// Precedence: `env_override`, then the config file, then
    /// [`DEFAULT_API_URL`]. Empty values count as unset.
    pub fn base_url(&self, env_override: Option<String>) -> String {
        let url = env_override
            .filter(|url| !url.trim().is_empty())
            .or_else(|| {
                self.api_base_url
                    .clone()
                    .filter(|url| !url.trim().is_empty())
            })
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        url.trim().trim_end_matches('/').to_string()
    }
}
