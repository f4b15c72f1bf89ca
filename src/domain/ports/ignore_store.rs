//! IgnoreStore port - where `.gistignore` patterns live

use crate::domain::value_objects::{IgnoreError, IgnorePatterns};

/// Persistent, append-only set of ignore patterns.
pub trait IgnoreStore {
    /// Load all patterns; a missing file yields an empty set.
    fn load(&self) -> Result<IgnorePatterns, IgnoreError>;

    /// Append one pattern.
    fn append(&self, pattern: &str) -> Result<(), IgnoreError>;
}
