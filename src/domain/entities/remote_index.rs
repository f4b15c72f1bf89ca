//! Remote index - the merged view of known gists
//!
//! Built once per run from the API listing, then overlaid with the local
//! mapping. Mapping entries win on key collision: they may point at gists the
//! listing left out (pagination, visibility filtering, API unreachable).

use std::collections::BTreeMap;

use crate::domain::entities::Mapping;
use crate::domain::ports::RemoteGist;

/// A listed gist that did not make it into the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludedGist {
    pub id: String,
    pub reason: String,
}

/// File name → gist id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteIndex {
    ids: BTreeMap<String, String>,
}

impl RemoteIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index the private, single-file gists of a listing.
    ///
    /// Public gists are silently outside the managed set; multi-file and
    /// empty gists are reported back so the caller can warn about them.
    pub fn from_listing(gists: &[RemoteGist]) -> (Self, Vec<ExcludedGist>) {
        let mut index = Self::new();
        let mut excluded = Vec::new();

        for gist in gists.iter().filter(|g| !g.public) {
            match gist.single_file() {
                Ok(name) => {
                    index.ids.insert(name.to_string(), gist.id.clone());
                }
                Err(e) => excluded.push(ExcludedGist {
                    id: gist.id.clone(),
                    reason: e.to_string(),
                }),
            }
        }

        (index, excluded)
    }

    /// Overlay the local mapping; mapping entries replace listed ones.
    pub fn merge_mapping(&mut self, mapping: &Mapping) {
        for (name, entry) in mapping.entries() {
            self.ids.insert(name.to_string(), entry.gist_id().to_string());
        }
    }

    pub fn get(&self, file_name: &str) -> Option<&str> {
        self.ids.get(file_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
