//! gist-sync - mirror local scripts to private GitHub gists
//!
//! Each local file maps to one single-file gist, keyed by base name. A run
//! lists the account's gists, overlays the `.gists.toml` mapping, and then
//! updates known gists, creates new ones on request, or asks the operator.
//! Local content always wins; nothing is pulled down.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{SyncOutcome, SyncUseCase};
pub use config::{Config, Settings};
pub use domain::entities::{LocalFile, Mapping, RemoteIndex};
pub use domain::ports::{GistApi, PromptChoice, Prompter, SyncEvent, SyncEventSink};
pub use domain::services::{ReconcileReport, Reconciler};
pub use domain::value_objects::SyncOptions;
pub use error::{SyncError, SyncResult};
