//! Local file candidate

use std::io;
use std::path::{Path, PathBuf};

/// A local file considered for syncing.
///
/// The base name is the reconciliation key; content is read fresh each run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    path: PathBuf,
    name: String,
}

impl LocalFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base name used as the gist file name and mapping key
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read the file as UTF-8 text, rejecting anything that is not a regular file.
    pub fn read(&self) -> io::Result<String> {
        let metadata = std::fs::metadata(&self.path)?;
        if !metadata.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            ));
        }
        std::fs::read_to_string(&self.path)
    }
}
