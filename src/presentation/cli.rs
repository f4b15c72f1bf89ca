//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.

use std::path::PathBuf;

use clap::Parser;

use crate::config::ColorMode;
use crate::domain::value_objects::SyncOptions;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// gist-sync - keep local scripts mirrored as private GitHub gists
#[derive(Parser, Debug)]
#[command(name = "gist-sync")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Requires GITHUB_TOKEN with gist write access.")]
pub struct Cli {
    /// Folder to scan for scripts
    #[arg(long, value_name = "DIR")]
    pub folder: Option<PathBuf>,

    /// Sync only these files instead of scanning the folder
    #[arg(long, num_args = 1.., value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Show what would be done without touching gists
    #[arg(long)]
    pub dry_run: bool,

    /// Create gists for files that have none yet
    #[arg(long)]
    pub create_new: bool,

    /// Ask before creating each new gist
    #[arg(long)]
    pub interactive: bool,

    /// Show a diff against the gist before updating
    #[arg(long)]
    pub diff: bool,

    /// Emit NDJSON events instead of human-readable output
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn sync_options(&self) -> SyncOptions {
        SyncOptions::default()
            .with_create_new(self.create_new)
            .with_dry_run(self.dry_run)
            .with_interactive(self.interactive)
            .with_show_diff(self.diff)
    }

    /// Folder to scan, defaulting to the working directory
    pub fn scan_folder(&self) -> PathBuf {
        self.folder.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
