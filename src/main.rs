//! gist-sync CLI - mirror local scripts to private GitHub gists
//!
//! Usage: gist-sync [--folder DIR] [--files F...] [--create-new] [--interactive]
//!                  [--diff] [--dry-run] [--json] [--color WHEN] [-v...]

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gist_sync::config::{self, ConfigWarning, Settings};
use gist_sync::domain::ports::SyncEventSink;
use gist_sync::infrastructure::{discover_scripts, JsonEventSink, TerminalPrompter};
use gist_sync::presentation::{create_sync_use_case, Cli};
use gist_sync::{LocalFile, SyncError};

mod ui;

use ui::console::ConsoleEventSink;
use ui::context::UiContext;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error::print_error(&err, cli.json);
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the `-v` level.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "gist_sync=warn",
        1 => "gist_sync=debug",
        _ => "gist_sync=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let folder = cli.scan_folder();
    if !folder.is_dir() {
        return Err(SyncError::DirectoryNotFound { path: folder }.into());
    }

    let loaded = config::load_or_default(&folder)?;
    if let Some(source) = &loaded.source {
        debug!(path = %source.display(), "using config file");
    }
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &loaded.config);
    report_config_warnings(&loaded.warnings, &ui);

    let settings = Settings::from_env(&loaded.config)?;
    let files = candidate_files(cli, &folder, &settings)?;

    let sink: Box<dyn SyncEventSink> = if ui.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::new(&ui))
    };
    let mut prompter = TerminalPrompter::new();

    let options = cli.sync_options();
    let use_case = create_sync_use_case(&settings)?;
    use_case.execute(&files, options, sink.as_ref(), &mut prompter)?;

    if !options.dry_run && !ui.json {
        println!("Sync complete.");
    }
    Ok(())
}

fn candidate_files(cli: &Cli, folder: &Path, settings: &Settings) -> Result<Vec<LocalFile>> {
    if !cli.files.is_empty() {
        return Ok(cli.files.iter().cloned().map(LocalFile::new).collect());
    }
    let reserved = [settings.mapping_path.clone(), settings.ignore_path.clone()];
    let files = discover_scripts(folder, &settings.extensions, &reserved)?;
    debug!(count = files.len(), folder = %folder.display(), "discovered scripts");
    Ok(files)
}

fn report_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    for warning in warnings {
        debug!(key = %warning.key, file = %warning.file.display(), "unknown config key");
        if ui.json {
            let _ = ui::json::emit(serde_json::json!({
                "event": "config_warning",
                "key": warning.key,
                "file": warning.file.display().to_string(),
                "line": warning.line,
                "suggestion": warning.suggestion,
            }));
        } else {
            let icon = ui::primitives::icon::Icon::Warning.colored(ui.color, ui.unicode);
            eprintln!("{icon} {warning}");
        }
    }
}
