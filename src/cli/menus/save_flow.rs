use tracing::{info, warn};

use crate::cli::io::Terminal;
use crate::errors::CliError;
use crate::storage::{ProfileInputs, ProfileStorage};

/// How an offer to save the current inputs ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Declined,
    EmptyName,
    OverwriteDeclined,
    Saved(String),
    Failed(String),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved(_))
    }
}

/// Offers to persist `inputs` as a named profile.
///
/// There is no retry: an empty name or a declined overwrite ends the flow
/// without writing anything.
pub fn prompt_save_profile<S, T>(
    store: &S,
    terminal: &mut T,
    inputs: &ProfileInputs,
) -> Result<SaveOutcome, CliError>
where
    S: ProfileStorage + ?Sized,
    T: Terminal + ?Sized,
{
    terminal.blank_line();
    if !terminal.confirm("Save this configuration? (y/n): ")? {
        return Ok(SaveOutcome::Declined);
    }

    let name = terminal.prompt_line("Enter profile name: ")?.trim().to_string();
    if name.is_empty() {
        terminal.warning("Profile name cannot be empty. Configuration not saved.");
        return Ok(SaveOutcome::EmptyName);
    }

    let exists = store.exists(&name).unwrap_or_else(|err| {
        warn!(error = %err, "could not check for an existing profile");
        false
    });
    if exists
        && !terminal.confirm(&format!(
            "Profile '{name}' already exists. Overwrite? (y/n): "
        ))?
    {
        terminal.info("Configuration not saved.");
        return Ok(SaveOutcome::OverwriteDeclined);
    }

    match store.save(&name, inputs) {
        Ok(()) => {
            info!(profile = %name, overwrite = exists, "profile saved");
            terminal.success(&format!("Configuration saved as '{name}'"));
            Ok(SaveOutcome::Saved(name))
        }
        Err(err) => {
            warn!(profile = %name, error = %err, "save failed");
            let message = format!("Error saving profile: {err}");
            terminal.error(&message);
            Ok(SaveOutcome::Failed(message))
        }
    }
}
