//! Domain Entities
//!
//! - `LocalFile` - A candidate file on disk
//! - `Mapping` - Persisted file name → gist links
//! - `RemoteIndex` - Merged view of known gists for one run

mod local_file;
mod mapping;
mod remote_index;

pub use local_file::LocalFile;
pub use mapping::{Mapping, MappingEntry, MAPPING_VERSION};
pub use remote_index::{ExcludedGist, RemoteIndex};
