//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod mapping;

pub use mapping::TomlMappingRepository;
