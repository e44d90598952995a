use colored::{Color, Colorize};
use std::fmt;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Title,
    Label,
    Item,
    Info,
    Success,
    Warning,
    Error,
    Prompt,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputPreferences {
    /// No ANSI styling at all.
    pub plain: bool,
    /// Bold instead of colour for emphasised kinds.
    pub high_contrast: bool,
}

// Monokai-style accents.
const PINK: Color = Color::TrueColor {
    r: 0xFF,
    g: 0x61,
    b: 0x88,
};
const CYAN: Color = Color::TrueColor {
    r: 0x5F,
    g: 0xD7,
    b: 0xFF,
};

/// Styles `message` for display. Never changes the text itself.
pub fn render(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let text = message.to_string();

    if prefs.plain {
        return text;
    }

    if prefs.high_contrast {
        return match kind {
            MessageKind::Title
            | MessageKind::Success
            | MessageKind::Warning
            | MessageKind::Error => text.bold().to_string(),
            _ => text,
        };
    }

    match kind {
        MessageKind::Title => text.color(PINK).bold().to_string(),
        MessageKind::Label | MessageKind::Prompt => text.color(CYAN).to_string(),
        MessageKind::Success => text.bright_green().to_string(),
        MessageKind::Warning => text.bright_yellow().to_string(),
        MessageKind::Error => text.bright_red().to_string(),
        MessageKind::Item | MessageKind::Info => text,
    }
}
