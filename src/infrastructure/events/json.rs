//! JSON Event Sink
//!
//! Outputs sync events as NDJSON for scripting and CI consumption.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use serde_json::json;

use crate::domain::ports::{SyncEvent, SyncEventSink};

/// Event sink that writes one JSON object per line
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn path_str(path: &Path) -> String {
    path.display().to_string()
}

/// Convert an event into its NDJSON object.
pub fn event_to_json(event: &SyncEvent) -> serde_json::Value {
    match event {
        SyncEvent::Started {
            file_count,
            known_gists,
            dry_run,
        } => json!({
            "event": "start",
            "file_count": file_count,
            "known_gists": known_gists,
            "dry_run": dry_run,
        }),
        SyncEvent::ListingUnavailable { error } => json!({
            "event": "listing_unavailable",
            "error": error,
        }),
        SyncEvent::ListingEntrySkipped { id, reason } => json!({
            "event": "listing_entry_skipped",
            "gist_id": id,
            "reason": reason,
        }),
        SyncEvent::MappingVersionMismatch { found, expected } => json!({
            "event": "mapping_version_mismatch",
            "found": found,
            "expected": expected,
        }),
        SyncEvent::NotAFile { path, reason } => json!({
            "event": "not_a_file",
            "path": path_str(path),
            "reason": reason,
        }),
        SyncEvent::Unchanged { path } => json!({
            "event": "unchanged",
            "path": path_str(path),
        }),
        SyncEvent::Diff { path, diff } => json!({
            "event": "diff",
            "path": path_str(path),
            "diff": diff,
        }),
        SyncEvent::DiffUnavailable { path, error } => json!({
            "event": "diff_unavailable",
            "path": path_str(path),
            "error": error,
        }),
        SyncEvent::Planned { path, action } => json!({
            "event": "planned",
            "path": path_str(path),
            "action": action.as_str(),
        }),
        SyncEvent::MutationStarted { path, action } => json!({
            "event": "item_start",
            "path": path_str(path),
            "action": action.as_str(),
        }),
        SyncEvent::Synced { path, action, url } => json!({
            "event": "synced",
            "path": path_str(path),
            "action": action.as_str(),
            "url": url,
        }),
        SyncEvent::MutationFailed {
            path,
            action,
            error,
        } => json!({
            "event": "item_error",
            "path": path_str(path),
            "action": action.as_str(),
            "error": error,
        }),
        SyncEvent::Skipped { path, reason } => json!({
            "event": "skipped",
            "path": path_str(path),
            "reason": reason.as_str(),
        }),
        SyncEvent::Excluded { path, pattern } => json!({
            "event": "excluded",
            "path": path_str(path),
            "pattern": pattern,
        }),
        SyncEvent::Quit { remaining } => json!({
            "event": "quit",
            "remaining": remaining,
        }),
        SyncEvent::Completed {
            created,
            updated,
            unchanged,
            skipped,
            dry_run,
        } => json!({
            "event": "complete",
            "created": created,
            "updated": updated,
            "unchanged": unchanged,
            "skipped": skipped,
            "dry_run": dry_run,
        }),
    }
}

impl SyncEventSink for JsonEventSink {
    fn on_event(&self, event: SyncEvent) {
        self.write_event(event_to_json(&event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{SkipReason, SyncAction};
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn lines(buffer: &Arc<Mutex<Vec<u8>>>) -> Vec<serde_json::Value> {
        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn json_sink_writes_one_object_per_line() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(SyncEvent::Started {
            file_count: 3,
            known_gists: 1,
            dry_run: false,
        });
        sink.on_event(SyncEvent::Synced {
            path: PathBuf::from("a.py"),
            action: SyncAction::Create,
            url: "https://gist.github.com/X".to_string(),
        });

        let events = lines(&buffer);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["event"], "start");
        assert_eq!(events[0]["file_count"], 3);
        assert_eq!(events[1]["event"], "synced");
        assert_eq!(events[1]["action"], "create");
        assert_eq!(events[1]["url"], "https://gist.github.com/X");
    }

    #[test]
    fn skip_reason_uses_machine_name() {
        let value = event_to_json(&SyncEvent::Skipped {
            path: PathBuf::from("c.rb"),
            reason: SkipReason::Ignored,
        });
        assert_eq!(value["reason"], "ignored");
        assert_eq!(value["path"], "c.rb");
    }

    #[test]
    fn completed_event_carries_counts() {
        let value = event_to_json(&SyncEvent::Completed {
            created: 1,
            updated: 2,
            unchanged: 3,
            skipped: 4,
            dry_run: true,
        });
        assert_eq!(value["event"], "complete");
        assert_eq!(value["updated"], 2);
        assert_eq!(value["dry_run"], true);
    }
}
