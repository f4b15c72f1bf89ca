//! Mapping entity - links local file names to gists
//!
//! The mapping is a pure data structure - I/O is handled by MappingRepository.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

/// Current mapping file format version
pub const MAPPING_VERSION: u32 = 1;

/// Gist identity recorded for one file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    gist_id: String,
    url: String,
}

impl MappingEntry {
    pub fn new(gist_id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            gist_id: gist_id.into(),
            url: url.into(),
        }
    }

    pub fn gist_id(&self) -> &str {
        &self.gist_id
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Persisted file name → gist mapping, keyed by base name.
///
/// Entries are created or overwritten after every successful sync and never
/// removed automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    version: u32,
    last_sync: Option<DateTime<Utc>>,
    entries: BTreeMap<String, MappingEntry>,
}

impl Default for Mapping {
    fn default() -> Self {
        Self::new()
    }
}

impl Mapping {
    /// Create a new empty mapping
    pub fn new() -> Self {
        Self {
            version: MAPPING_VERSION,
            last_sync: None,
            entries: BTreeMap::new(),
        }
    }

    /// Rebuild a mapping from stored parts (used by repositories)
    pub fn from_parts(
        version: u32,
        last_sync: Option<DateTime<Utc>>,
        entries: BTreeMap<String, MappingEntry>,
    ) -> Self {
        Self {
            version,
            last_sync,
            entries,
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Whether the stored version is the one this build writes
    pub fn is_current_version(&self) -> bool {
        self.version == MAPPING_VERSION
    }

    pub fn last_sync(&self) -> Option<DateTime<Utc>> {
        self.last_sync
    }

    pub fn get(&self, file_name: &str) -> Option<&MappingEntry> {
        self.entries.get(file_name)
    }

    /// Record a confirmed gist for `file_name` and stamp the sync time.
    ///
    /// A recorded mapping is always written back at the current version.
    pub fn record(&mut self, file_name: impl Into<String>, gist_id: &str, url: &str) {
        self.record_at(file_name, gist_id, url, Utc::now());
    }

    pub fn record_at(
        &mut self,
        file_name: impl Into<String>,
        gist_id: &str,
        url: &str,
        at: DateTime<Utc>,
    ) {
        self.entries
            .insert(file_name.into(), MappingEntry::new(gist_id, url));
        self.version = MAPPING_VERSION;
        self.last_sync = Some(at);
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &MappingEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
