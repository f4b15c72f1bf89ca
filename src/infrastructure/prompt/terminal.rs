//! Terminal prompters
//!
//! `TerminalPrompter` reads a single keypress in raw mode when stdin is a TTY
//! and falls back to line input otherwise (pipes, CI).

use std::io::{self, BufRead, Write};
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use is_terminal::IsTerminal;
use tracing::warn;

use crate::domain::ports::{PromptChoice, Prompter};

const QUESTION: &str =
    "[u]pload as gist, [x]clude (add to .gistignore), [s]kip (ask again next time), [q]uit? ";

/// Map a keyboard event to a choice.
///
/// Ctrl-C and Esc quit. Unknown keys yield `None` so the caller re-prompts.
pub fn key_to_choice(key: KeyEvent) -> Option<PromptChoice> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(PromptChoice::Quit)
        }
        KeyCode::Esc => Some(PromptChoice::Quit),
        KeyCode::Char(c) => PromptChoice::from_key(c),
        _ => None,
    }
}

fn choice_key(choice: PromptChoice) -> char {
    match choice {
        PromptChoice::Upload => 'u',
        PromptChoice::Exclude => 'x',
        PromptChoice::Skip => 's',
        PromptChoice::Quit => 'q',
    }
}

/// Interactive prompter bound to the process terminal.
///
/// Prompts go to stderr so stdout stays clean for `--json`.
pub struct TerminalPrompter {
    raw: bool,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            raw: io::stdin().is_terminal(),
        }
    }

    fn read_key(&self) -> io::Result<PromptChoice> {
        terminal::enable_raw_mode()?;
        let result = loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let Some(choice) = key_to_choice(key) {
                        break Ok(choice);
                    }
                }
                Ok(_) => {}
                Err(e) => break Err(e),
            }
        };
        terminal::disable_raw_mode()?;
        result
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn prompt(&mut self, path: &Path) -> PromptChoice {
        if !self.raw {
            let stdin = io::stdin();
            return LinePrompter::new(stdin.lock(), io::stderr()).prompt(path);
        }

        let mut err = io::stderr();
        let _ = write!(err, "File: {}\r\n{}", path.display(), QUESTION);
        let _ = err.flush();

        let choice = match self.read_key() {
            Ok(choice) => choice,
            Err(e) => {
                warn!(error = %e, "failed to read key; quitting");
                PromptChoice::Quit
            }
        };
        let _ = writeln!(err, "{}", choice_key(choice));
        choice
    }
}

/// Line-based prompter: one answer per line, first character decides.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn prompt(&mut self, path: &Path) -> PromptChoice {
        let _ = writeln!(self.output, "File: {}", path.display());
        loop {
            let _ = write!(self.output, "{QUESTION}");
            let _ = self.output.flush();

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                // EOF or read error
                Ok(0) | Err(_) => {
                    let _ = writeln!(self.output);
                    return PromptChoice::Quit;
                }
                Ok(_) => {}
            }

            if let Some(choice) = line.trim().chars().next().and_then(PromptChoice::from_key) {
                return choice;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn letters_map_case_insensitively() {
        assert_eq!(key_to_choice(key(KeyCode::Char('u'))), Some(PromptChoice::Upload));
        assert_eq!(key_to_choice(key(KeyCode::Char('X'))), Some(PromptChoice::Exclude));
        assert_eq!(key_to_choice(key(KeyCode::Char('s'))), Some(PromptChoice::Skip));
        assert_eq!(key_to_choice(key(KeyCode::Char('Q'))), Some(PromptChoice::Quit));
    }

    #[test]
    fn ctrl_c_and_esc_quit() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_choice(ctrl_c), Some(PromptChoice::Quit));
        assert_eq!(key_to_choice(key(KeyCode::Esc)), Some(PromptChoice::Quit));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(key_to_choice(key(KeyCode::Char('d'))), None);
        assert_eq!(key_to_choice(key(KeyCode::Char('c'))), None);
        assert_eq!(key_to_choice(key(KeyCode::Enter)), None);
    }

    #[test]
    fn line_prompter_reprompts_until_valid() {
        let mut output = Vec::new();
        let choice = {
            let mut prompter = LinePrompter::new(Cursor::new("d\n\nX\n"), &mut output);
            prompter.prompt(Path::new("c.rb"))
        };

        assert_eq!(choice, PromptChoice::Exclude);
        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("File: c.rb\n"));
        assert_eq!(text.matches("[u]pload as gist").count(), 3);
    }

    #[test]
    fn line_prompter_quits_on_eof() {
        let mut prompter = LinePrompter::new(Cursor::new(""), Vec::new());
        assert_eq!(prompter.prompt(Path::new("a.py")), PromptChoice::Quit);
    }
}
