use chrono::Local;
use tracing::{debug, warn};

use crate::cli::io::Terminal;
use crate::cli::output::MessageKind;
use crate::errors::CliError;
use crate::storage::{ProfileEntry, ProfileStorage};

pub const BANNER: &str = "RENT vs BUY CALCULATOR";

/// What the caller should do once the menu is finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuDecision {
    /// Pre-populate the inputs from this profile.
    Load(String),
    /// Start from blank inputs.
    New,
    /// The user asked to leave; the owning process should exit.
    Quit,
}

impl MenuDecision {
    /// `(profile name or empty, quit requested)`.
    pub fn into_parts(self) -> (String, bool) {
        match self {
            MenuDecision::Load(name) => (name, false),
            MenuDecision::New => (String::new(), false),
            MenuDecision::Quit => (String::new(), true),
        }
    }

    pub fn profile(&self) -> Option<&str> {
        match self {
            MenuDecision::Load(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, MenuDecision::Quit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    /// Carries the profile list the main menu just showed.
    DeleteFlow { profiles: Vec<String> },
    Done(MenuDecision),
}

/// Profile selection menu driven as a loop over [`MenuState`].
///
/// Every return to [`MenuState::MainMenu`] re-reads the store and redraws, so
/// changes made in the delete flow show up immediately.
pub struct ProfileMenu<'a, S: ?Sized, T: ?Sized> {
    store: &'a S,
    terminal: &'a mut T,
}

impl<'a, S, T> ProfileMenu<'a, S, T>
where
    S: ProfileStorage + ?Sized,
    T: Terminal + ?Sized,
{
    pub fn new(store: &'a S, terminal: &'a mut T) -> Self {
        Self { store, terminal }
    }

    /// Runs from the main menu until a decision is reached.
    pub fn run(&mut self) -> Result<MenuDecision, CliError> {
        let mut state = MenuState::MainMenu;
        loop {
            state = match state {
                MenuState::Done(decision) => {
                    debug!(?decision, "profile menu finished");
                    return Ok(decision);
                }
                other => self.step(other)?,
            };
        }
    }

    /// Performs one transition.
    pub fn step(&mut self, state: MenuState) -> Result<MenuState, CliError> {
        match state {
            MenuState::MainMenu => self.main_menu(),
            MenuState::DeleteFlow { profiles } => self.delete_flow(&profiles),
            done @ MenuState::Done(_) => Ok(done),
        }
    }

    fn main_menu(&mut self) -> Result<MenuState, CliError> {
        self.terminal.blank_line();
        self.terminal.print(MessageKind::Title, BANNER);
        self.terminal.blank_line();

        let entries = match self.store.list_entries() {
            Ok(entries) => entries,
            Err(err) => {
                warn!(error = %err, "could not list profiles");
                self.terminal
                    .error(&format!("Error listing profiles: {err}"));
                return Ok(MenuState::Done(MenuDecision::New));
            }
        };

        if entries.is_empty() {
            self.terminal.print(
                MessageKind::Label,
                "No saved profiles found. Starting new calculation...",
            );
            self.terminal.blank_line();
            return Ok(MenuState::Done(MenuDecision::New));
        }

        self.render_profiles(&entries);
        let profiles: Vec<String> = entries.into_iter().map(|entry| entry.name).collect();

        let choice = self
            .terminal
            .prompt_choice("Your choice: ")?;
        debug!(choice = %choice, "main menu input");

        let next = match choice.as_str() {
            "q" => MenuState::Done(MenuDecision::Quit),
            "n" | "" => MenuState::Done(MenuDecision::New),
            "d" => MenuState::DeleteFlow { profiles },
            other => match parse_index(other, profiles.len()) {
                Some(index) => MenuState::Done(MenuDecision::Load(profiles[index].clone())),
                None => {
                    self.terminal
                        .warning("Invalid choice. Starting new calculation...");
                    MenuState::Done(MenuDecision::New)
                }
            },
        };
        Ok(next)
    }

    fn render_profiles(&mut self, entries: &[ProfileEntry]) {
        self.terminal.print(MessageKind::Label, "Available profiles:");
        for (position, entry) in entries.iter().enumerate() {
            let line = match entry.modified {
                Some(modified) => format!(
                    "  {}. {} (saved {})",
                    position + 1,
                    entry.name,
                    modified.with_timezone(&Local).format("%Y-%m-%d %H:%M")
                ),
                None => format!("  {}. {}", position + 1, entry.name),
            };
            self.terminal.print(MessageKind::Item, &line);
        }
        self.terminal.blank_line();

        self.terminal.print(MessageKind::Label, "Options:");
        for option in [
            "  Enter profile number to load",
            "  Press 'n' for new calculation",
            "  Press 'd' to delete a profile",
            "  Press 'q' to quit",
        ] {
            self.terminal.print(MessageKind::Item, option);
        }
        self.terminal.blank_line();
    }

    fn delete_flow(&mut self, profiles: &[String]) -> Result<MenuState, CliError> {
        self.terminal.blank_line();
        let choice = self
            .terminal
            .prompt_choice("Enter profile number to delete (or 'c' to cancel): ")?;

        if choice == "c" || choice.is_empty() {
            return Ok(MenuState::MainMenu);
        }

        let Some(index) = parse_index(&choice, profiles.len()) else {
            self.terminal.warning("Invalid choice. Returning to menu...");
            return Ok(MenuState::MainMenu);
        };

        let name = &profiles[index];
        if self
            .terminal
            .confirm(&format!("Delete profile '{name}'? (y/n): "))?
        {
            match self.store.delete(name) {
                Ok(()) => self.terminal.success(&format!("Profile '{name}' deleted.")),
                Err(err) => {
                    warn!(profile = %name, error = %err, "delete failed");
                    self.terminal
                        .error(&format!("Error deleting profile: {err}"));
                }
            }
        }

        Ok(MenuState::MainMenu)
    }
}

/// Maps a 1-based menu number onto a list index.
pub(crate) fn parse_index(choice: &str, len: usize) -> Option<usize> {
    let number: i64 = choice.trim().parse().ok()?;
    if number < 1 {
        return None;
    }
    let index = usize::try_from(number - 1).ok()?;
    (index < len).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_index_accepts_one_based_numbers_in_range() {
        assert_eq!(parse_index("1", 2), Some(0));
        assert_eq!(parse_index("2", 2), Some(1));
        assert_eq!(parse_index("3", 2), None);
        assert_eq!(parse_index("0", 2), None);
        assert_eq!(parse_index("-1", 2), None);
        assert_eq!(parse_index("two", 2), None);
        assert_eq!(parse_index("2x", 2), None);
        assert_eq!(parse_index("1", 0), None);
    }

    #[test]
    fn decision_parts_match_menu_contract() {
        assert_eq!(
            MenuDecision::Load("beta".into()).into_parts(),
            ("beta".to_string(), false)
        );
        assert_eq!(MenuDecision::New.into_parts(), (String::new(), false));
        assert_eq!(MenuDecision::Quit.into_parts(), (String::new(), true));
    }
}
