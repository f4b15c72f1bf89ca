//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod gist_api;
pub mod ignore_store;
pub mod mapping_repository;
pub mod prompter;
pub mod sync_events;

pub use gist_api::{GistApi, GistError, GistFile, GistRef, GistResult, RemoteGist};
pub use ignore_store::IgnoreStore;
pub use mapping_repository::{MappingError, MappingRepository, MappingResult};
#[cfg(test)]
pub(crate) use prompter::FixedPrompter;
pub use prompter::{PromptChoice, Prompter};
pub use sync_events::{NoopEventSink, SkipReason, SyncAction, SyncEvent, SyncEventSink};
