//! Gist API Port
//!
//! The reconciler talks to the remote gist service only through this trait.
//! `infrastructure::github::GithubGistClient` is the production implementation.

use thiserror::Error;

/// Result type for gist API calls
pub type GistResult<T> = Result<T, GistError>;

/// Errors surfaced by a gist API implementation
#[derive(Debug, Error)]
pub enum GistError {
    /// The request never produced an HTTP response (DNS, TLS, connection, decoding)
    #[error("request failed: {message}")]
    Transport { message: String },

    /// The service answered with a non-success status
    #[error("api returned {status}: {body}")]
    Api { status: u16, body: String },

    /// The configured base URL could not be joined with an endpoint
    #[error("invalid url: {0}")]
    Url(String),

    /// A gist holds more than one file, so it has no single file-name key
    #[error("gist {id} holds {count} files; only single-file gists are managed")]
    MultiFile { id: String, count: usize },

    /// A gist came back without any file
    #[error("gist {id} has no files")]
    Empty { id: String },
}

impl GistError {
    /// HTTP status code, when the service answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            GistError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the token was rejected for lack of scope (HTTP 403)
    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }
}

/// One entry of the gist listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteGist {
    pub id: String,
    pub public: bool,
    pub url: String,
    /// File names in the order the service reported them
    pub files: Vec<String>,
}

impl RemoteGist {
    /// The file name of a single-file gist.
    ///
    /// Multi-file and empty gists are rejected; there is no meaningful
    /// "first" file to key them by.
    pub fn single_file(&self) -> GistResult<&str> {
        match self.files.as_slice() {
            [name] => Ok(name.as_str()),
            [] => Err(GistError::Empty {
                id: self.id.clone(),
            }),
            many => Err(GistError::MultiFile {
                id: self.id.clone(),
                count: many.len(),
            }),
        }
    }
}

/// Identity of a gist after a create or update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GistRef {
    pub id: String,
    pub url: String,
}

/// A single-file gist with its content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GistFile {
    pub id: String,
    pub url: String,
    pub file_name: String,
    pub content: String,
}

/// Remote gist service.
///
/// Every call blocks until the service answers; there is no retry.
pub trait GistApi {
    /// List the gists visible to the token (all pages).
    fn list(&self) -> GistResult<Vec<RemoteGist>>;

    /// Create a private gist holding one file.
    fn create(&self, file_name: &str, content: &str) -> GistResult<GistRef>;

    /// Replace the content of the file in an existing gist.
    fn update(&self, id: &str, file_name: &str, content: &str) -> GistResult<GistRef>;

    /// Fetch a gist with its single file's content.
    fn get(&self, id: &str) -> GistResult<GistFile>;
}
