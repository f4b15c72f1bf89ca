//! Domain Layer
//!
//! The reconciliation core of gist-sync.
//!
//! ## Structure
//!
//! - `entities/` - LocalFile, Mapping, RemoteIndex
//! - `value_objects/` - IgnorePatterns, SyncOptions
//! - `services/` - Reconciler, Differ
//! - `ports/` - Interface definitions for infrastructure
//!
//! All network, terminal and mapping-file access goes through trait-defined
//! ports, so the reconciliation policy runs against test doubles.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
