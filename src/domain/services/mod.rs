//! Domain Services
//!
//! Business logic that operates on domain entities through ports.

mod differ;
mod reconciler;

pub use differ::{ContentDiff, Differ};
pub use reconciler::{ReconcileReport, Reconciler};
