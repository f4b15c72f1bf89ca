//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Usage
//!
//! ```ignore
//! use gist_sync::presentation::factory;
//!
//! let use_case = factory::create_sync_use_case(&settings)?;
//! let outcome = use_case.execute(&files, options, &sink, &mut prompter)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen};
pub use factory::{create_sync_use_case, ProductionSyncUseCase};
