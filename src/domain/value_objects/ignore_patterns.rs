//! Ignore patterns value object
//!
//! Handles loading and matching `.gistignore` patterns using gitignore glob
//! semantics. Patterns are matched against a file's base name.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Characters with glob meaning that must be escaped to match literally
const GLOB_META: &[char] = &['\\', '*', '?', '[', ']', '{', '}'];

/// Ordered patterns loaded from a `.gistignore` file.
#[derive(Debug)]
pub struct IgnorePatterns {
    source: PathBuf,
    patterns: Vec<String>,
    matcher: Gitignore,
}

impl Default for IgnorePatterns {
    fn default() -> Self {
        Self::empty()
    }
}

impl IgnorePatterns {
    /// Create an empty pattern set (matches nothing).
    pub fn empty() -> Self {
        Self {
            source: PathBuf::new(),
            patterns: Vec::new(),
            matcher: Gitignore::empty(),
        }
    }

    /// Load patterns from the ignore file at `path`.
    ///
    /// Returns `Ok(empty)` if the file doesn't exist.
    /// Returns `Err` if the file can't be read or contains invalid syntax.
    pub fn load(path: &Path) -> Result<Self, IgnoreError> {
        if !path.exists() {
            return Ok(Self::empty());
        }

        let content = fs::read_to_string(path).map_err(IgnoreError::Io)?;
        Self::from_content(path, &content)
    }

    /// Parse patterns from string content.
    pub fn from_content(source_path: &Path, content: &str) -> Result<Self, IgnoreError> {
        let mut patterns = Vec::new();

        for line in content.lines() {
            let trimmed = line.trim();
            // Skip empty lines and comments
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            if patterns.iter().any(|p| p == trimmed) {
                continue;
            }
            patterns.push(trimmed.to_string());
        }

        let matcher = build_matcher(source_path, &patterns)?;
        Ok(Self {
            source: source_path.to_path_buf(),
            patterns,
            matcher,
        })
    }

    /// Build a pattern that matches exactly `file_name`.
    ///
    /// A leading `#` or `!` and any glob metacharacter is backslash-escaped,
    /// so the pattern is neither a comment, a negation nor a wildcard.
    pub fn literal_pattern(file_name: &str) -> String {
        let mut pattern = String::with_capacity(file_name.len() + 2);
        for (idx, c) in file_name.chars().enumerate() {
            if (idx == 0 && (c == '#' || c == '!')) || GLOB_META.contains(&c) {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern
    }

    /// Add a pattern to the in-memory set.
    pub fn push(&mut self, pattern: &str) -> Result<(), IgnoreError> {
        let pattern = pattern.trim();
        if pattern.is_empty() || self.patterns.iter().any(|p| p == pattern) {
            return Ok(());
        }

        let mut patterns = self.patterns.clone();
        patterns.push(pattern.to_string());
        self.matcher = build_matcher(&self.source, &patterns)?;
        self.patterns = patterns;
        Ok(())
    }

    /// Check if a file name matches any pattern.
    pub fn is_ignored(&self, file_name: &str) -> bool {
        self.matcher.matched(Path::new(file_name), false).is_ignore()
    }

    /// Patterns in file order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Get the number of patterns loaded.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Check if this is an empty pattern set.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

fn build_matcher(source_path: &Path, patterns: &[String]) -> Result<Gitignore, IgnoreError> {
    let mut builder = GitignoreBuilder::new("");

    for (idx, pattern) in patterns.iter().enumerate() {
        if let Err(e) = builder.add_line(Some(source_path.to_path_buf()), pattern) {
            return Err(IgnoreError::InvalidPattern {
                path: source_path.to_path_buf(),
                index: idx + 1,
                pattern: pattern.clone(),
                message: e.to_string(),
            });
        }
    }

    builder
        .build()
        .map_err(|e| IgnoreError::BuildFailed(e.to_string()))
}

/// Errors that can occur when loading or extending ignore patterns.
#[derive(Debug)]
pub enum IgnoreError {
    /// A pattern has invalid syntax.
    InvalidPattern {
        path: PathBuf,
        index: usize,
        pattern: String,
        message: String,
    },
    /// Failed to build the gitignore matcher.
    BuildFailed(String),
    /// IO error reading or appending to the file.
    Io(std::io::Error),
}

impl fmt::Display for IgnoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern {
                path,
                index,
                pattern,
                message,
            } => {
                write!(
                    f,
                    "Invalid pattern #{} in {}: '{}' - {}",
                    index,
                    path.display(),
                    pattern,
                    message
                )
            }
            Self::BuildFailed(msg) => write!(f, "Failed to build ignore matcher: {}", msg),
            Self::Io(e) => write!(f, "IO error on ignore file: {}", e),
        }
    }
}

impl std::error::Error for IgnoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}
