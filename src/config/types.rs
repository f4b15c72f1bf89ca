//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{SyncError, SyncResult};

use super::loader::{self, ConfigWarning};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Gist API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

/// Locations of the mapping and ignore files.
///
/// Relative paths resolve against the working directory, not the scan folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesConfig {
    #[serde(default = "default_mapping_path")]
    pub mapping: PathBuf,

    #[serde(default = "default_ignore_path")]
    pub ignore: PathBuf,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            mapping: default_mapping_path(),
            ignore: default_ignore_path(),
        }
    }
}

fn default_mapping_path() -> PathBuf {
    PathBuf::from(".gists.toml")
}

fn default_ignore_path() -> PathBuf {
    PathBuf::from(".gistignore")
}

/// Script discovery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    ["py", "sh", "rb"].iter().map(|s| s.to_string()).collect()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Full configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file, discarding warnings
    pub fn load(path: &Path) -> SyncResult<Self> {
        Ok(Self::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> SyncResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }
}

/// Credentials and endpoint for the Gist API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub base_url: String,
    pub token: String,
}

/// Immutable runtime settings, built once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    pub mapping_path: PathBuf,
    pub ignore_path: PathBuf,
    pub extensions: Vec<String>,
}

impl Settings {
    /// Build settings from the process environment
    pub fn from_env(config: &Config) -> SyncResult<Self> {
        Self::from_env_impl(config, |key| std::env::var(key).ok())
    }

    /// Build settings with an injected environment lookup.
    ///
    /// `GITHUB_TOKEN` must be present and non-empty.
    pub fn from_env_impl<F>(config: &Config, get: F) -> SyncResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = get("GITHUB_TOKEN")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(SyncError::MissingToken)?;

        Ok(Self {
            api: ApiSettings {
                base_url: config.api.base_url.clone(),
                token,
            },
            mapping_path: config.files.mapping.clone(),
            ignore_path: config.files.ignore.clone(),
            extensions: config.scan.extensions.clone(),
        })
    }
}
