//! TOML Mapping Repository
//!
//! Implements the MappingRepository port using the `.gists.toml` format.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::entities::{Mapping, MappingEntry, MAPPING_VERSION};
use crate::domain::ports::{MappingError, MappingRepository, MappingResult};
use crate::infrastructure::fs::atomic_write;

/// TOML representation of a file entry
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlFileEntry {
    gist_id: String,
    #[serde(default)]
    url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TomlMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_sync: Option<DateTime<Utc>>,
}

/// TOML representation of the mapping file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlMapping {
    #[serde(default = "default_version")]
    version: u32,
    #[serde(default)]
    metadata: TomlMetadata,
    #[serde(default)]
    files: BTreeMap<String, TomlFileEntry>,
}

fn default_version() -> u32 {
    MAPPING_VERSION
}

/// TOML-based mapping repository bound to one file
pub struct TomlMappingRepository {
    path: PathBuf,
}

impl TomlMappingRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> MappingError {
        MappingError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl MappingRepository for TomlMappingRepository {
    fn load(&self) -> MappingResult<Mapping> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Mapping::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        let parsed: TomlMapping =
            toml::from_str(&content).map_err(|e| MappingError::InvalidFormat {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        let entries = parsed
            .files
            .into_iter()
            .map(|(name, entry)| (name, MappingEntry::new(entry.gist_id, entry.url)))
            .collect();

        Ok(Mapping::from_parts(
            parsed.version,
            parsed.metadata.last_sync,
            entries,
        ))
    }

    fn save(&self, mapping: &Mapping) -> MappingResult<()> {
        let files = mapping
            .entries()
            .map(|(name, entry)| {
                (
                    name.to_string(),
                    TomlFileEntry {
                        gist_id: entry.gist_id().to_string(),
                        url: entry.url().to_string(),
                    },
                )
            })
            .collect();

        let toml_mapping = TomlMapping {
            version: mapping.version(),
            metadata: TomlMetadata {
                last_sync: mapping.last_sync(),
            },
            files,
        };

        let content = toml::to_string_pretty(&toml_mapping)
            .map_err(|e| MappingError::Serialize(e.to_string()))?;
        atomic_write(&self.path, content.as_bytes()).map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), entries = mapping.len(), "wrote mapping file");
        Ok(())
    }
}
