//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod ignore_patterns;
mod sync_options;

pub use ignore_patterns::{IgnoreError, IgnorePatterns};
pub use sync_options::SyncOptions;
