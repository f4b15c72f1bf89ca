use crossterm::style::Stylize;

use crate::ui::theme;

/// Render a unified diff under a `Diff for <path>:` heading, indented by two
/// spaces.
pub fn render_gist_diff(path: &str, unified: &str, supports_color: bool) -> String {
    let mut out = format!("Diff for {path}:\n");
    for line in unified.lines() {
        out.push_str("  ");
        out.push_str(&color_line(line, supports_color));
        out.push('\n');
    }
    out
}

fn color_line(line: &str, supports_color: bool) -> String {
    if !supports_color {
        return line.to_string();
    }

    let color = if line.starts_with("---") || line.starts_with("+++") || line.starts_with("@@") {
        theme::colors::INFO
    } else if line.starts_with('+') {
        theme::colors::SUCCESS
    } else if line.starts_with('-') {
        theme::colors::ERROR
    } else {
        theme::colors::DIM
    };
    format!("{}", line.with(color))
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIFIED: &str = "--- a.py (gist)\n+++ a.py (local)\n@@ -1 +1 @@\n-x = 1\n+x = 2\n";

    #[test]
    fn renders_heading_and_indents_every_line() {
        let rendered = render_gist_diff("a.py", UNIFIED, false);
        let mut lines = rendered.lines();

        assert_eq!(lines.next(), Some("Diff for a.py:"));
        assert!(lines.all(|l| l.starts_with("  ")));
    }

    #[test]
    fn keeps_change_markers() {
        let rendered = render_gist_diff("a.py", UNIFIED, false);
        assert!(rendered.contains("  -x = 1\n"));
        assert!(rendered.contains("  +x = 2\n"));
        assert!(rendered.contains("  --- a.py (gist)\n"));
    }
}
