//! Reconciler Domain Service
//!
//! Decides, per local file and in input order, whether to update a known
//! gist, create a new one, skip, or ask the operator. Local content always
//! wins; nothing is ever pulled down.

use std::path::Path;

use tracing::debug;

use crate::domain::entities::{LocalFile, Mapping, RemoteIndex};
use crate::domain::ports::{
    GistApi, IgnoreStore, MappingRepository, PromptChoice, Prompter, SkipReason, SyncAction,
    SyncEvent, SyncEventSink,
};
use crate::domain::services::Differ;
use crate::domain::value_objects::{IgnorePatterns, SyncOptions};
use crate::error::{SyncError, SyncResult};

/// Counts for one reconciliation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub created: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub planned: usize,
    pub skipped: usize,
    pub excluded: usize,
    /// The operator quit before every file was handled
    pub quit: bool,
}

enum Flow {
    Continue,
    Quit,
}

/// Per-run reconciliation policy.
///
/// Holds borrowed collaborators only; state that changes during the run
/// (mapping, ignore set) is passed to `run`.
pub struct Reconciler<'a> {
    api: &'a dyn GistApi,
    mappings: &'a dyn MappingRepository,
    ignore_store: &'a dyn IgnoreStore,
    events: &'a dyn SyncEventSink,
    options: SyncOptions,
    differ: Differ,
}

impl<'a> Reconciler<'a> {
    pub fn new(
        api: &'a dyn GistApi,
        mappings: &'a dyn MappingRepository,
        ignore_store: &'a dyn IgnoreStore,
        events: &'a dyn SyncEventSink,
        options: SyncOptions,
    ) -> Self {
        Self {
            api,
            mappings,
            ignore_store,
            events,
            options,
            differ: Differ::new(),
        }
    }

    /// Reconcile `files` in order.
    ///
    /// Stops at the first failed create/update (returning the error) or when
    /// the operator quits. Work done before either point is kept.
    pub fn run(
        &self,
        files: &[LocalFile],
        remote: &RemoteIndex,
        mapping: &mut Mapping,
        ignore: &mut IgnorePatterns,
        prompter: &mut dyn Prompter,
    ) -> SyncResult<ReconcileReport> {
        let mut report = ReconcileReport::default();

        for (idx, file) in files.iter().enumerate() {
            let flow = self.reconcile_file(file, remote, mapping, ignore, prompter, &mut report)?;
            if let Flow::Quit = flow {
                report.quit = true;
                self.events.on_event(SyncEvent::Quit {
                    remaining: files.len() - idx - 1,
                });
                break;
            }
        }

        Ok(report)
    }

    fn reconcile_file(
        &self,
        file: &LocalFile,
        remote: &RemoteIndex,
        mapping: &mut Mapping,
        ignore: &mut IgnorePatterns,
        prompter: &mut dyn Prompter,
        report: &mut ReconcileReport,
    ) -> SyncResult<Flow> {
        let content = match file.read() {
            Ok(content) => content,
            Err(e) => {
                self.events.on_event(SyncEvent::NotAFile {
                    path: file.path().to_path_buf(),
                    reason: e.to_string(),
                });
                report.skipped += 1;
                return Ok(Flow::Continue);
            }
        };

        if let Some(gist_id) = remote.get(file.name()) {
            debug!(file = file.name(), gist_id, "known gist, update candidate");
            if self.options.show_diff && !self.has_remote_changes(file, gist_id, &content, mapping)? {
                report.unchanged += 1;
                return Ok(Flow::Continue);
            }
            self.push(file, &content, Some(gist_id), mapping, report)?;
            return Ok(Flow::Continue);
        }

        if !self.options.create_new {
            self.skip(file.path(), SkipReason::NoExistingGist, report);
            return Ok(Flow::Continue);
        }

        if ignore.is_ignored(file.name()) {
            debug!(file = file.name(), "matches ignore pattern");
            self.skip(file.path(), SkipReason::Ignored, report);
            return Ok(Flow::Continue);
        }

        if !self.options.interactive {
            self.push(file, &content, None, mapping, report)?;
            return Ok(Flow::Continue);
        }

        match prompter.prompt(file.path()) {
            PromptChoice::Upload => self.push(file, &content, None, mapping, report)?,
            PromptChoice::Exclude => {
                let pattern = IgnorePatterns::literal_pattern(file.name());
                self.ignore_store.append(&pattern)?;
                ignore.push(&pattern)?;
                report.excluded += 1;
                self.events.on_event(SyncEvent::Excluded {
                    path: file.path().to_path_buf(),
                    pattern,
                });
            }
            PromptChoice::Skip => self.skip(file.path(), SkipReason::Deferred, report),
            PromptChoice::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Diff-mode check. Returns `false` when the gist already holds `content`.
    ///
    /// A successful fetch re-confirms the gist id, so the mapping is persisted
    /// even under dry run. A failed fetch is reported and counts as changed.
    fn has_remote_changes(
        &self,
        file: &LocalFile,
        gist_id: &str,
        content: &str,
        mapping: &mut Mapping,
    ) -> SyncResult<bool> {
        let gist = match self.api.get(gist_id) {
            Ok(gist) => gist,
            Err(e) => {
                self.events.on_event(SyncEvent::DiffUnavailable {
                    path: file.path().to_path_buf(),
                    error: e.to_string(),
                });
                return Ok(true);
            }
        };

        self.persist(mapping, file.name(), &gist.id, &gist.url)?;

        let label = file.path().display().to_string();
        let diff = self.differ.compare(&label, &gist.content, content);
        if !diff.has_changes {
            self.events.on_event(SyncEvent::Unchanged {
                path: file.path().to_path_buf(),
            });
            return Ok(false);
        }

        debug!(file = file.name(), summary = %diff.summary(), "remote differs");
        self.events.on_event(SyncEvent::Diff {
            path: file.path().to_path_buf(),
            diff: diff.unified,
        });
        Ok(true)
    }

    fn push(
        &self,
        file: &LocalFile,
        content: &str,
        gist_id: Option<&str>,
        mapping: &mut Mapping,
        report: &mut ReconcileReport,
    ) -> SyncResult<()> {
        let action = if gist_id.is_some() {
            SyncAction::Update
        } else {
            SyncAction::Create
        };
        let path = file.path().to_path_buf();

        if self.options.dry_run {
            report.planned += 1;
            self.events.on_event(SyncEvent::Planned { path, action });
            return Ok(());
        }

        self.events.on_event(SyncEvent::MutationStarted {
            path: path.clone(),
            action,
        });

        let result = match gist_id {
            Some(id) => self.api.update(id, file.name(), content),
            None => self.api.create(file.name(), content),
        };

        let gist = match result {
            Ok(gist) => gist,
            Err(e) => {
                self.events.on_event(SyncEvent::MutationFailed {
                    path: path.clone(),
                    action,
                    error: e.to_string(),
                });
                return Err(SyncError::from_mutation(path, e));
            }
        };

        self.events.on_event(SyncEvent::Synced {
            path,
            action,
            url: gist.url.clone(),
        });
        match action {
            SyncAction::Create => report.created += 1,
            SyncAction::Update => report.updated += 1,
        }

        self.persist(mapping, file.name(), &gist.id, &gist.url)
    }

    fn persist(
        &self,
        mapping: &mut Mapping,
        file_name: &str,
        gist_id: &str,
        url: &str,
    ) -> SyncResult<()> {
        mapping.record(file_name, gist_id, url);
        self.mappings.save(mapping)?;
        debug!(file = file_name, gist_id, "mapping saved");
        Ok(())
    }

    fn skip(&self, path: &Path, reason: SkipReason, report: &mut ReconcileReport) {
        report.skipped += 1;
        self.events.on_event(SyncEvent::Skipped {
            path: path.to_path_buf(),
            reason,
        });
    }
}
