//! Sync Event Port
//!
//! Provides an observable interface for sync runs.
//! Enables console progress, NDJSON event streams, and test recording.

use std::fmt;
use std::path::PathBuf;

/// What a mutation does to the remote side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    Create,
    Update,
}

impl SyncAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncAction::Create => "create",
            SyncAction::Update => "update",
        }
    }
}

/// Why a file was left alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No gist is known for the file and creation is off
    NoExistingGist,
    /// No gist is known and the name matches `.gistignore`
    Ignored,
    /// The operator chose "skip" at the prompt
    Deferred,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::NoExistingGist => "no_existing_gist",
            SkipReason::Ignored => "ignored",
            SkipReason::Deferred => "deferred",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Ignored files are reported the same way as untracked ones.
            SkipReason::NoExistingGist | SkipReason::Ignored => write!(f, "no existing gist"),
            SkipReason::Deferred => write!(f, "will ask again next time"),
        }
    }
}

/// Event emitted during a sync run
#[derive(Debug, Clone, PartialEq)]
pub enum SyncEvent {
    /// Run started
    Started {
        file_count: usize,
        known_gists: usize,
        dry_run: bool,
    },

    /// The gist listing could not be fetched; only the mapping file is used
    ListingUnavailable { error: String },

    /// A listed gist was left out of the managed set
    ListingEntrySkipped { id: String, reason: String },

    /// The mapping file carries an unexpected version
    MappingVersionMismatch { found: u32, expected: u32 },

    /// Candidate is not a regular, readable file
    NotAFile { path: PathBuf, reason: String },

    /// Remote content equals local content (diff mode)
    Unchanged { path: PathBuf },

    /// Remote content differs from local content (diff mode)
    Diff { path: PathBuf, diff: String },

    /// Remote content could not be fetched for diffing; sync proceeds
    DiffUnavailable { path: PathBuf, error: String },

    /// Dry run: the action that would have been taken
    Planned { path: PathBuf, action: SyncAction },

    /// A create/update request is about to be sent
    MutationStarted { path: PathBuf, action: SyncAction },

    /// A create/update request succeeded
    Synced {
        path: PathBuf,
        action: SyncAction,
        url: String,
    },

    /// A create/update request failed
    MutationFailed {
        path: PathBuf,
        action: SyncAction,
        error: String,
    },

    /// File was skipped
    Skipped { path: PathBuf, reason: SkipReason },

    /// File name was appended to the ignore file
    Excluded { path: PathBuf, pattern: String },

    /// Operator quit; remaining files are untouched
    Quit { remaining: usize },

    /// Run completed
    Completed {
        created: usize,
        updated: usize,
        unchanged: usize,
        skipped: usize,
        dry_run: bool,
    },
}

/// Trait for receiving sync events
///
/// Implementations can be:
/// - ConsoleEventSink: human-readable progress in the terminal
/// - JsonEventSink: NDJSON event stream for scripting
/// - NoopEventSink: silent operation
pub trait SyncEventSink {
    /// Handle a sync event
    fn on_event(&self, event: SyncEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SyncEventSink for NoopEventSink {
    fn on_event(&self, _event: SyncEvent) {}
}
