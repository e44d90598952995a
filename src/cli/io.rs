use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::{
    theme::{ColorfulTheme, SimpleTheme, Theme},
    Input,
};

use crate::cli::output::{self, MessageKind, OutputPreferences};
use crate::errors::CliError;

/// How the console reads lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

impl CliMode {
    /// Script mode when `RENTOBUY_CLI_SCRIPT` is set or stdin is not a terminal.
    pub fn detect() -> Self {
        if std::env::var_os("RENTOBUY_CLI_SCRIPT").is_some() || !io::stdin().is_terminal() {
            CliMode::Script
        } else {
            CliMode::Interactive
        }
    }
}

/// Line-oriented user interaction used by the menus and flows.
pub trait Terminal {
    fn print(&mut self, kind: MessageKind, message: &str);

    fn blank_line(&mut self);

    /// Shows `prompt` and reads one line. End of input reads as an empty line.
    fn prompt_line(&mut self, prompt: &str) -> Result<String, CliError>;

    fn info(&mut self, message: &str) {
        self.print(MessageKind::Info, message);
    }

    fn success(&mut self, message: &str) {
        self.print(MessageKind::Success, message);
    }

    fn warning(&mut self, message: &str) {
        self.print(MessageKind::Warning, message);
    }

    fn error(&mut self, message: &str) {
        self.print(MessageKind::Error, message);
    }

    /// Reads a trimmed, lower-cased answer.
    fn prompt_choice(&mut self, prompt: &str) -> Result<String, CliError> {
        Ok(self.prompt_line(prompt)?.trim().to_lowercase())
    }

    /// Only an answer of exactly `y` confirms.
    fn confirm(&mut self, prompt: &str) -> Result<bool, CliError> {
        Ok(self.prompt_choice(prompt)? == "y")
    }
}

/// Terminal backed by the process stdin/stdout.
pub struct ConsoleTerminal {
    mode: CliMode,
    prefs: OutputPreferences,
    theme: Box<dyn Theme>,
}

impl ConsoleTerminal {
    pub fn new(mode: CliMode, prefs: OutputPreferences) -> Self {
        let theme: Box<dyn Theme> = if prefs.plain {
            Box::new(SimpleTheme)
        } else {
            Box::new(ColorfulTheme::default())
        };
        Self { mode, prefs, theme }
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    fn read_script_line(&self, prompt: &str) -> Result<String, CliError> {
        let mut stdout = io::stdout();
        write!(
            stdout,
            "{}",
            output::render(MessageKind::Prompt, prompt, &self.prefs)
        )?;
        stdout.flush()?;

        let mut bytes = Vec::new();
        let read = io::stdin().lock().read_until(b'\n', &mut bytes)?;
        if read == 0 {
            writeln!(stdout)?;
        }
        Ok(decode_line(&bytes))
    }
}

/// Undecodable bytes become replacement characters so the line still reaches
/// the menu's dispatch as ordinary (invalid) input.
fn decode_line(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_end_matches(['\r', '\n'])
        .to_string()
}

impl Terminal for ConsoleTerminal {
    fn print(&mut self, kind: MessageKind, message: &str) {
        println!("{}", output::render(kind, message, &self.prefs));
    }

    fn blank_line(&mut self) {
        println!();
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<String, CliError> {
        match self.mode {
            CliMode::Script => self.read_script_line(prompt),
            CliMode::Interactive => {
                let label = prompt.trim_end().trim_end_matches(':');
                let value = Input::<String>::with_theme(self.theme.as_ref())
                    .with_prompt(label)
                    .allow_empty(true)
                    .interact_text()?;
                Ok(value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_line_strips_line_endings() {
        assert_eq!(decode_line(b"alpha\r\n"), "alpha");
        assert_eq!(decode_line(b""), "");
    }

    #[test]
    fn decode_line_replaces_invalid_utf8() {
        let line = decode_line(b"\xff\xfe\n");
        assert_eq!(line, "\u{FFFD}\u{FFFD}");
    }
}
