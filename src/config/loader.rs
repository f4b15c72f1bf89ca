//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{SyncError, SyncResult};

use super::types::Config;

/// Project config file name, looked up in the scan folder
pub const PROJECT_CONFIG_FILE: &str = ".gist-sync.toml";

/// Environment variable overriding `api.base_url`
pub const API_URL_ENV: &str = "GIST_SYNC_API_URL";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Configuration plus where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SyncResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SyncError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from the project config, the user config, or defaults.
///
/// Environment overrides are applied in every case.
pub fn load_or_default(folder: &Path) -> SyncResult<LoadedConfig> {
    let user_dir = dirs::config_dir().map(|dir| dir.join("gist-sync"));
    load_or_default_impl(folder, user_dir.as_deref(), |key| std::env::var(key).ok())
}

/// Like [`load_or_default`] with injected user config directory and environment.
pub fn load_or_default_impl<F>(
    folder: &Path,
    user_config_dir: Option<&Path>,
    get: F,
) -> SyncResult<LoadedConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let candidates = std::iter::once(folder.join(PROJECT_CONFIG_FILE))
        .chain(user_config_dir.map(|dir| dir.join("config.toml")));

    for path in candidates {
        if path.is_file() {
            debug!(path = %path.display(), "loading config");
            let (config, warnings) = load_with_warnings(&path)?;
            return Ok(LoadedConfig {
                config: with_env_overrides_impl(config, &get),
                source: Some(path),
                warnings,
            });
        }
    }

    Ok(LoadedConfig {
        config: with_env_overrides_impl(Config::default(), &get),
        source: None,
        warnings: Vec::new(),
    })
}

/// Apply environment variable overrides
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_impl(config, |key| std::env::var(key).ok())
}

fn with_env_overrides_impl<F>(mut config: Config, get: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = get(API_URL_ENV).filter(|u| !u.trim().is_empty()) {
        config.api.base_url = url.trim().to_string();
    }
    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "api",
        "base_url",
        "files",
        "mapping",
        "ignore",
        "scan",
        "extensions",
        "output",
        "color",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levenshtein_distances() {
        assert_eq!(levenshtein("color", "color"), 0);
        assert_eq!(levenshtein("colour", "color"), 1);
        assert_eq!(levenshtein("", "api"), 3);
    }

    #[test]
    fn suggest_key_finds_close_match() {
        assert_eq!(suggest_key("extentions"), Some("extensions".to_string()));
        assert_eq!(suggest_key("base_ur"), Some("base_url".to_string()));
        assert_eq!(suggest_key("completely_unrelated"), None);
    }

    #[test]
    fn find_line_number_is_one_based() {
        let content = "[api]\nbase_url = \"x\"\ncolour = 1\n";
        assert_eq!(find_line_number(content, "colour"), Some(3));
        assert_eq!(find_line_number(content, "missing"), None);
    }

    #[test]
    fn warning_display_includes_location_and_suggestion() {
        let warning = ConfigWarning {
            key: "colour".to_string(),
            file: PathBuf::from(".gist-sync.toml"),
            line: Some(4),
            suggestion: Some("color".to_string()),
        };
        assert_eq!(
            warning.to_string(),
            "unknown config key 'colour' in .gist-sync.toml:4 (did you mean 'color'?)"
        );
    }
}
