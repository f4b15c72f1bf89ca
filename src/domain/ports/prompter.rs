//! Prompter Port
//!
//! Asks the operator what to do with a file that has no gist yet.
//! The terminal implementation reads a single keypress; tests script the answers.

use std::path::Path;

/// Operator's answer for an untracked file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptChoice {
    /// Create a gist for the file
    Upload,
    /// Add the file name to the ignore file
    Exclude,
    /// Leave the file alone this run; ask again next time
    Skip,
    /// Stop processing the remaining files
    Quit,
}

impl PromptChoice {
    /// Map a key to a choice (case-insensitive). Unknown keys yield `None`.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'u' => Some(PromptChoice::Upload),
            'x' => Some(PromptChoice::Exclude),
            's' => Some(PromptChoice::Skip),
            'q' => Some(PromptChoice::Quit),
            _ => None,
        }
    }
}

/// Trait for asking the operator about untracked files.
pub trait Prompter {
    /// Ask about a single file. Implementations loop until they get a valid
    /// answer; an unreadable input counts as `Quit`.
    fn prompt(&mut self, path: &Path) -> PromptChoice;
}

/// Prompter that answers every question the same way.
#[cfg(test)]
pub(crate) struct FixedPrompter(pub PromptChoice);

#[cfg(test)]
impl Prompter for FixedPrompter {
    fn prompt(&mut self, _path: &Path) -> PromptChoice {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_choices() {
        assert_eq!(PromptChoice::from_key('u'), Some(PromptChoice::Upload));
        assert_eq!(PromptChoice::from_key('X'), Some(PromptChoice::Exclude));
        assert_eq!(PromptChoice::from_key('s'), Some(PromptChoice::Skip));
        assert_eq!(PromptChoice::from_key('Q'), Some(PromptChoice::Quit));
        assert_eq!(PromptChoice::from_key('d'), None);
    }

    #[test]
    fn fixed_prompter_always_answers_the_same() {
        let mut prompter = FixedPrompter(PromptChoice::Skip);
        assert_eq!(prompter.prompt(Path::new("a.py")), PromptChoice::Skip);
        assert_eq!(prompter.prompt(Path::new("b.py")), PromptChoice::Skip);
    }
}
