//! File System Helpers
//!
//! Atomic writes and script discovery.

mod atomic;
mod discovery;

pub use atomic::atomic_write;
pub use discovery::discover_scripts;
