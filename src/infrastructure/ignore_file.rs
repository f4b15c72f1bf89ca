//! `.gistignore` file store

use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::ports::IgnoreStore;
use crate::domain::value_objects::{IgnoreError, IgnorePatterns};

/// Ignore patterns stored one per line in a plain text file.
pub struct GistIgnoreFile {
    path: PathBuf,
}

impl GistIgnoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IgnoreStore for GistIgnoreFile {
    fn load(&self) -> Result<IgnorePatterns, IgnoreError> {
        IgnorePatterns::load(&self.path)
    }

    fn append(&self, pattern: &str) -> Result<(), IgnoreError> {
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(IgnoreError::Io)?;

        // Keep the new pattern on its own line if the file lacks a trailing newline.
        let len = file.metadata().map_err(IgnoreError::Io)?.len();
        let mut line = String::new();
        if len > 0 {
            let mut last = [0u8; 1];
            file.seek(SeekFrom::End(-1)).map_err(IgnoreError::Io)?;
            file.read_exact(&mut last).map_err(IgnoreError::Io)?;
            if last[0] != b'\n' {
                line.push('\n');
            }
        }
        line.push_str(pattern);
        line.push('\n');

        file.write_all(line.as_bytes()).map_err(IgnoreError::Io)?;
        debug!(path = %self.path.display(), pattern, "appended ignore pattern");
        Ok(())
    }
}
