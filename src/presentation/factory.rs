//! Use case factory
//!
//! Wires the sync use case to its production adapters.

use crate::application::SyncUseCase;
use crate::config::Settings;
use crate::error::SyncResult;
use crate::infrastructure::{GistIgnoreFile, GithubGistClient, TomlMappingRepository};

/// Sync use case backed by the GitHub API and on-disk files
pub type ProductionSyncUseCase =
    SyncUseCase<GithubGistClient, TomlMappingRepository, GistIgnoreFile>;

/// Create a sync use case from runtime settings
pub fn create_sync_use_case(settings: &Settings) -> SyncResult<ProductionSyncUseCase> {
    let api = GithubGistClient::new(&settings.api)?;
    let mappings = TomlMappingRepository::new(&settings.mapping_path);
    let ignore_store = GistIgnoreFile::new(&settings.ignore_path);
    Ok(SyncUseCase::new(api, mappings, ignore_store))
}
