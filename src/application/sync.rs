//! Sync Use Case
//!
//! Orchestrates one run:
//! 1. Load the mapping file (warn on version mismatch)
//! 2. List gists, falling back to the mapping alone when listing fails
//! 3. Merge listing and mapping (mapping wins)
//! 4. Load ignore patterns when new gists may be created
//! 5. Reconcile every candidate file in order
//!
//! Business rules live in the domain `Reconciler`.

use tracing::{debug, info, warn};

use crate::domain::entities::{LocalFile, RemoteIndex, MAPPING_VERSION};
use crate::domain::ports::{
    GistApi, IgnoreStore, MappingRepository, Prompter, SyncEvent, SyncEventSink,
};
use crate::domain::services::{ReconcileReport, Reconciler};
use crate::domain::value_objects::{IgnorePatterns, SyncOptions};
use crate::error::SyncResult;

/// Result of a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncOutcome {
    pub report: ReconcileReport,
    /// Whether the gist listing was fetched successfully
    pub listing_available: bool,
    /// Size of the merged file name → gist index
    pub known_gists: usize,
}

/// Sync use case, parameterized by its ports
pub struct SyncUseCase<A, M, I>
where
    A: GistApi,
    M: MappingRepository,
    I: IgnoreStore,
{
    api: A,
    mappings: M,
    ignore_store: I,
}

impl<A, M, I> SyncUseCase<A, M, I>
where
    A: GistApi,
    M: MappingRepository,
    I: IgnoreStore,
{
    pub fn new(api: A, mappings: M, ignore_store: I) -> Self {
        Self {
            api,
            mappings,
            ignore_store,
        }
    }

    #[cfg(test)]
    pub(crate) fn api(&self) -> &A {
        &self.api
    }

    /// Run a sync over `files`.
    ///
    /// Returns early with the error on a failed create/update; everything
    /// synced before that point is already persisted.
    pub fn execute(
        &self,
        files: &[LocalFile],
        options: SyncOptions,
        events: &dyn SyncEventSink,
        prompter: &mut dyn Prompter,
    ) -> SyncResult<SyncOutcome> {
        let mut mapping = self.mappings.load()?;
        if !mapping.is_current_version() {
            warn!(found = mapping.version(), "mapping file version mismatch");
            events.on_event(SyncEvent::MappingVersionMismatch {
                found: mapping.version(),
                expected: MAPPING_VERSION,
            });
        }

        let (mut remote, listing_available) = self.fetch_index(events);
        remote.merge_mapping(&mapping);
        debug!(known = remote.len(), mapped = mapping.len(), "merged gist index");

        let mut ignore = if options.create_new {
            self.ignore_store.load()?
        } else {
            IgnorePatterns::empty()
        };

        events.on_event(SyncEvent::Started {
            file_count: files.len(),
            known_gists: remote.len(),
            dry_run: options.dry_run,
        });

        let reconciler = Reconciler::new(
            &self.api,
            &self.mappings,
            &self.ignore_store,
            events,
            options,
        );
        let report = reconciler.run(files, &remote, &mut mapping, &mut ignore, prompter)?;

        info!(
            created = report.created,
            updated = report.updated,
            unchanged = report.unchanged,
            skipped = report.skipped,
            "sync finished"
        );
        events.on_event(SyncEvent::Completed {
            created: report.created,
            updated: report.updated,
            unchanged: report.unchanged,
            skipped: report.skipped,
            dry_run: options.dry_run,
        });

        Ok(SyncOutcome {
            report,
            listing_available,
            known_gists: remote.len(),
        })
    }

    /// List remote gists. A failed listing is reported, not fatal.
    fn fetch_index(&self, events: &dyn SyncEventSink) -> (RemoteIndex, bool) {
        match self.api.list() {
            Ok(gists) => {
                debug!(count = gists.len(), "listed gists");
                let (index, excluded) = RemoteIndex::from_listing(&gists);
                for gist in excluded {
                    events.on_event(SyncEvent::ListingEntrySkipped {
                        id: gist.id,
                        reason: gist.reason,
                    });
                }
                (index, true)
            }
            Err(e) => {
                warn!(error = %e, "gist listing failed; using mapping file only");
                events.on_event(SyncEvent::ListingUnavailable {
                    error: e.to_string(),
                });
                (RemoteIndex::new(), false)
            }
        }
    }
}
