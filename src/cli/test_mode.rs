use std::collections::VecDeque;

use crate::cli::io::Terminal;
use crate::cli::output::MessageKind;
use crate::errors::CliError;

/// A recorded line of terminal output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptLine {
    Message(MessageKind, String),
    Prompt(String),
    Blank,
}

/// Terminal that replays queued input lines and records everything shown.
///
/// Rendering is skipped entirely, so assertions see the raw message text.
/// Once the queue is empty every prompt reads an empty line, as at end of input.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    inputs: VecDeque<String>,
    transcript: Vec<TranscriptLine>,
}

impl ScriptedTerminal {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Input lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }

    pub fn transcript(&self) -> &[TranscriptLine] {
        &self.transcript
    }

    /// All message text, one entry per printed line, prompts included.
    pub fn lines(&self) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|line| match line {
                TranscriptLine::Message(_, text) | TranscriptLine::Prompt(text) => {
                    Some(text.as_str())
                }
                TranscriptLine::Blank => None,
            })
            .collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }

    pub fn count(&self, needle: &str) -> usize {
        self.lines()
            .iter()
            .filter(|line| line.contains(needle))
            .count()
    }

    /// Messages printed with the given kind.
    pub fn messages(&self, kind: MessageKind) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|line| match line {
                TranscriptLine::Message(found, text) if *found == kind => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Terminal for ScriptedTerminal {
    fn print(&mut self, kind: MessageKind, message: &str) {
        self.transcript
            .push(TranscriptLine::Message(kind, message.to_string()));
    }

    fn blank_line(&mut self) {
        self.transcript.push(TranscriptLine::Blank);
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<String, CliError> {
        self.transcript.push(TranscriptLine::Prompt(prompt.to_string()));
        Ok(self.inputs.pop_front().unwrap_or_default())
    }
}
