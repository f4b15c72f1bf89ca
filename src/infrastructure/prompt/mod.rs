//! Prompter implementations

mod terminal;

pub use terminal::{key_to_choice, LinePrompter, TerminalPrompter};
