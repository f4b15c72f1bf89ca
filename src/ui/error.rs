use crossterm::style::Stylize;
use gist_sync::SyncError;

use crate::ui::primitives::icon::Icon;
use crate::ui::terminal::detect_capabilities;
use crate::ui::theme;

/// Error message plus optional remediation, rendered as a block.
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    message: String,
    fix: Vec<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fix: Vec::new(),
        }
    }

    pub fn with_fix(mut self, line: impl Into<String>) -> Self {
        self.fix.push(line.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let icon = Icon::Error.colored(supports_color, supports_unicode);
        let title = if supports_color {
            format!("{}", "ERROR".with(theme::colors::ERROR).bold())
        } else {
            "ERROR".to_string()
        };

        let mut out = format!("{icon} {title}: {}\n", self.message);
        if !self.fix.is_empty() {
            out.push('\n');
            for line in &self.fix {
                out.push_str("  ");
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }
}

fn sync_error_block(err: &SyncError) -> ErrorBlock {
    match err {
        SyncError::PermissionDenied { path } => ErrorBlock::new(format!(
            "GitHub token lacks required permissions to write gists (while syncing {})",
            path.display()
        ))
        .with_fix("For fine-grained tokens: enable \"Gists: Read and write\" permission")
        .with_fix("For classic tokens: enable the \"gist\" scope")
        .with_fix("Then export it again: export GITHUB_TOKEN=<token>"),
        SyncError::MissingToken => ErrorBlock::new(err.to_string())
            .with_fix("Create a token with gist access and run: export GITHUB_TOKEN=<token>"),
        SyncError::Mapping(source) => ErrorBlock::new(source.to_string())
            .with_fix("Fix or remove the mapping file; it is rebuilt from the gist listing"),
        other => ErrorBlock::new(other.to_string()),
    }
}

fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    match err.downcast_ref::<SyncError>() {
        Some(sync) => sync_error_block(sync).render(supports_color, supports_unicode),
        None => ErrorBlock::new(format!("{err:#}")).render(supports_color, supports_unicode),
    }
}

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = detect_capabilities();
    format_error_with(err, caps.supports_color, caps.supports_unicode)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let kind = match err.downcast_ref::<SyncError>() {
            Some(SyncError::PermissionDenied { .. }) => "permission_denied",
            Some(SyncError::MissingToken) => "missing_token",
            _ => "error",
        };
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "error",
            "kind": kind,
            "message": err.to_string(),
        }));
        return;
    }

    eprint!("{}", format_error(err));
}
