//! MappingRepository port - abstraction for mapping persistence
//!
//! The domain loads and saves the file-name → gist mapping without knowing
//! about TOML serialization details.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::Mapping;

/// Result type for mapping operations
pub type MappingResult<T> = Result<T, MappingError>;

/// Mapping operation errors
#[derive(Debug, Error)]
pub enum MappingError {
    /// Mapping file exists but cannot be parsed
    #[error("invalid mapping file {path}: {message}")]
    InvalidFormat { path: PathBuf, message: String },

    /// Mapping could not be serialized
    #[error("failed to serialize mapping: {0}")]
    Serialize(String),

    /// I/O error reading or writing the mapping file
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Abstract repository for the local mapping file.
///
/// The location is fixed when the repository is constructed.
pub trait MappingRepository {
    /// Load the mapping; a missing file yields an empty mapping.
    fn load(&self) -> MappingResult<Mapping>;

    /// Rewrite the whole mapping.
    fn save(&self, mapping: &Mapping) -> MappingResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_error_display() {
        let err = MappingError::InvalidFormat {
            path: PathBuf::from(".gists.toml"),
            message: "expected `=`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid mapping file .gists.toml: expected `=`"
        );
    }
}
