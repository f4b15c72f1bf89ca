//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `github/` - Gist API client (reqwest)
//! - `repositories/` - `.gists.toml` mapping repository
//! - `events/` - NDJSON event sink
//! - `prompt/` - Terminal prompters
//! - `fs/` - Atomic writes and script discovery

pub mod events;
pub mod fs;
pub mod github;
pub mod ignore_file;
pub mod prompt;
pub mod repositories;

// Re-export for convenience
pub use events::JsonEventSink;
pub use fs::{atomic_write, discover_scripts};
pub use github::GithubGistClient;
pub use ignore_file::GistIgnoreFile;
pub use prompt::{LinePrompter, TerminalPrompter};
pub use repositories::TomlMappingRepository;
