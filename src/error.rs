//! Error types for gist-sync
//!
//! Library code returns `SyncError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{GistError, MappingError};
use crate::domain::value_objects::IgnoreError;

/// Result type alias for gist-sync operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Main error type for gist-sync operations
#[derive(Error, Debug)]
pub enum SyncError {
    /// `GITHUB_TOKEN` is not set (or empty)
    #[error("GITHUB_TOKEN environment variable not set")]
    MissingToken,

    /// The token was rejected for a write (HTTP 403)
    #[error("GitHub token lacks required permissions to write gists ({path})")]
    PermissionDenied { path: PathBuf },

    /// A create/update call failed for a reason other than permissions
    #[error("failed to sync {path}: {source}")]
    Mutation {
        path: PathBuf,
        #[source]
        source: GistError,
    },

    /// Remote API error outside of a per-file mutation
    #[error(transparent)]
    Gist(#[from] GistError),

    /// Mapping file could not be read or written
    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// Ignore file could not be read or written
    #[error(transparent)]
    Ignore(#[from] IgnoreError),

    /// Configuration file is invalid
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Folder passed with `--folder` does not exist
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SyncError {
    /// Classify a per-file mutation failure, singling out HTTP 403.
    pub fn from_mutation(path: impl Into<PathBuf>, source: GistError) -> Self {
        let path = path.into();
        if source.is_forbidden() {
            SyncError::PermissionDenied { path }
        } else {
            SyncError::Mutation { path, source }
        }
    }
}
