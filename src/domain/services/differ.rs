//! Differ Domain Service
//!
//! Compares remote gist content with local file content for `--diff`.

use similar::{ChangeTag, TextDiff};

/// Result of comparing remote and local content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentDiff {
    /// Number of lines added locally
    pub additions: usize,
    /// Number of lines removed locally
    pub deletions: usize,
    /// Whether there are any changes
    pub has_changes: bool,
    /// Unified diff text, remote as "from" and local as "to"
    pub unified: String,
}

impl ContentDiff {
    /// Get a diff summary (e.g., "+5, -3")
    pub fn summary(&self) -> String {
        format!("+{}, -{}", self.additions, self.deletions)
    }
}

/// Differ service for computing content differences
#[derive(Debug, Clone, Copy, Default)]
pub struct Differ;

impl Differ {
    pub fn new() -> Self {
        Self
    }

    /// Compare remote and local content; line endings are significant.
    ///
    /// `label` names the file in the `(gist)` / `(local)` headers.
    pub fn compare(&self, label: &str, remote: &str, local: &str) -> ContentDiff {
        if remote == local {
            return ContentDiff::default();
        }

        let text_diff = TextDiff::from_lines(remote, local);
        let mut result = ContentDiff::default();

        for change in text_diff.iter_all_changes() {
            match change.tag() {
                ChangeTag::Delete => result.deletions += 1,
                ChangeTag::Insert => result.additions += 1,
                ChangeTag::Equal => {}
            }
        }

        result.has_changes = true;
        result.unified = text_diff
            .unified_diff()
            .header(&format!("{label} (gist)"), &format!("{label} (local)"))
            .to_string();
        result
    }
}
