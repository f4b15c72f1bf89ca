//! Configuration module for gist-sync
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (`GITHUB_TOKEN`, `GIST_SYNC_API_URL`)
//! 3. Project config (`<folder>/.gist-sync.toml`)
//! 4. User config (`<config_dir>/gist-sync/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_or_default, load_or_default_impl, load_with_warnings, with_env_overrides, ConfigWarning,
    LoadedConfig, API_URL_ENV, PROJECT_CONFIG_FILE,
};
pub use types::{
    ApiConfig, ApiSettings, ColorMode, Config, FilesConfig, OutputConfig, ScanConfig, Settings,
    DEFAULT_API_URL,
};
