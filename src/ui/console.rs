//! Human-readable sync progress

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::Stylize;

use gist_sync::domain::ports::{SyncAction, SyncEvent, SyncEventSink};

use crate::ui::components::diff::render_gist_diff;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::theme;

/// Console sink: progress on stdout, warnings and failures on stderr.
pub struct ConsoleEventSink {
    color: bool,
    unicode: bool,
    verbose: u8,
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn new(ui: &UiContext) -> Self {
        Self::with_writers(ui, io::stdout(), io::stderr())
    }

    pub fn with_writers<O, E>(ui: &UiContext, out: O, err: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            color: ui.color,
            unicode: ui.unicode,
            verbose: ui.verbose,
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
        }
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.color, self.unicode)
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            format!("{}", text.with(theme::colors::DIM))
        } else {
            text.to_string()
        }
    }

    fn print(&self, line: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{line}");
            let _ = out.flush();
        }
    }

    fn warn(&self, line: &str) {
        if let Ok(mut err) = self.err.lock() {
            let _ = writeln!(err, "{} {line}", self.icon(Icon::Warning));
            let _ = err.flush();
        }
    }

    fn fail(&self, line: &str) {
        if let Ok(mut err) = self.err.lock() {
            let _ = writeln!(err, "{} {line}", self.icon(Icon::Error));
            let _ = err.flush();
        }
    }
}

fn verb(action: SyncAction) -> (&'static str, &'static str) {
    match action {
        SyncAction::Create => ("Creating gist for", "Created gist for"),
        SyncAction::Update => ("Updating", "Updated"),
    }
}

impl SyncEventSink for ConsoleEventSink {
    fn on_event(&self, event: SyncEvent) {
        match event {
            SyncEvent::Started {
                file_count,
                known_gists,
                dry_run,
            } => {
                let suffix = if dry_run { " (dry run)" } else { "" };
                self.print(&format!(
                    "Syncing {file_count} file(s), {known_gists} known gist(s){suffix}"
                ));
            }
            SyncEvent::ListingUnavailable { error } => {
                self.warn(&format!(
                    "Could not list gists ({error}); using the mapping file only"
                ));
            }
            SyncEvent::ListingEntrySkipped { id, reason } => {
                if self.verbose > 0 {
                    self.warn(&format!("Ignoring gist {id}: {reason}"));
                }
            }
            SyncEvent::MappingVersionMismatch { found, expected } => {
                self.warn(&format!(
                    "Mapping file version mismatch. Expected {expected}, got {found}"
                ));
            }
            SyncEvent::NotAFile { path, reason } => {
                self.warn(&format!("{} is not a file ({reason}), skipping", path.display()));
            }
            SyncEvent::Unchanged { path } => {
                self.print(&format!(
                    "{} No changes for {}",
                    self.icon(Icon::Skip),
                    path.display()
                ));
            }
            SyncEvent::Diff { path, diff } => {
                let label = path.display().to_string();
                let rendered = render_gist_diff(&label, &diff, self.color);
                self.print(rendered.trim_end_matches('\n'));
            }
            SyncEvent::DiffUnavailable { path, error } => {
                self.warn(&format!(
                    "Could not fetch gist for {} ({error}); treating as changed",
                    path.display()
                ));
            }
            SyncEvent::Planned { path, action } => {
                let what = match action {
                    SyncAction::Create => "create gist for",
                    SyncAction::Update => "update",
                };
                self.print(&format!(
                    "{} Would {what} {}",
                    self.icon(Icon::Arrow),
                    path.display()
                ));
            }
            SyncEvent::MutationStarted { path, action } => {
                if self.verbose > 0 {
                    self.print(&format!(
                        "{} {} {}...",
                        self.icon(Icon::Progress),
                        verb(action).0,
                        path.display()
                    ));
                }
            }
            SyncEvent::Synced { path, action, url } => {
                self.print(&format!(
                    "{} {} {} {}",
                    self.icon(Icon::Success),
                    verb(action).1,
                    path.display(),
                    self.dim(&url)
                ));
            }
            SyncEvent::MutationFailed {
                path,
                action,
                error,
            } => {
                self.fail(&format!("Failed to {} {}: {error}", action.as_str(), path.display()));
            }
            SyncEvent::Skipped { path, reason } => {
                self.print(&format!(
                    "{} Skipping {} ({reason})",
                    self.icon(Icon::Skip),
                    path.display()
                ));
            }
            SyncEvent::Excluded { path, pattern } => {
                self.print(&format!(
                    "{} Excluded {} (added '{pattern}' to ignore file)",
                    self.icon(Icon::Skip),
                    path.display()
                ));
            }
            SyncEvent::Quit { remaining } => {
                self.print(&format!("Quitting; {remaining} file(s) left untouched"));
            }
            SyncEvent::Completed {
                created,
                updated,
                unchanged,
                skipped,
                dry_run,
            } => {
                if dry_run {
                    self.print("Dry run: no gists were changed");
                } else {
                    self.print(&format!(
                        "{created} created, {updated} updated, {unchanged} unchanged, {skipped} skipped"
                    ));
                }
            }
        }
    }
}
