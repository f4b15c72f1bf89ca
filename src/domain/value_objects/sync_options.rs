//! Mode flags for a sync run

/// Mode flags for a sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncOptions {
    /// Create gists for files that have none (respects `.gistignore`)
    pub create_new: bool,
    /// Report intended actions without mutating anything remote
    pub dry_run: bool,
    /// Ask the operator about every file that would be created
    pub interactive: bool,
    /// Fetch remote content first; skip unchanged files and show diffs
    pub show_diff: bool,
}

impl SyncOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_create_new(mut self, create_new: bool) -> Self {
        self.create_new = create_new;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn with_show_diff(mut self, show_diff: bool) -> Self {
        self.show_diff = show_diff;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_all_off() {
        let options = SyncOptions::new();
        assert!(!options.create_new);
        assert!(!options.dry_run);
        assert!(!options.interactive);
        assert!(!options.show_diff);
    }

    #[test]
    fn builder_sets_flags() {
        let options = SyncOptions::new()
            .with_create_new(true)
            .with_interactive(true);
        assert!(options.create_new);
        assert!(options.interactive);
        assert!(!options.dry_run);
    }
}
