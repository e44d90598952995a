use tracing::{info, warn};

use crate::cli::form::collect_inputs;
use crate::cli::io::{CliMode, ConsoleTerminal, Terminal};
use crate::cli::menus::{prompt_save_profile, MenuDecision, ProfileMenu, SaveOutcome};
use crate::cli::output::{MessageKind, OutputPreferences};
use crate::config::{Config, ConfigManager};
use crate::errors::CliError;
use crate::storage::{JsonProfileStore, ProfileInputs, ProfileStorage};

/// How a single pass through the session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Quit,
    Completed {
        inputs: ProfileInputs,
        save: SaveOutcome,
    },
}

/// Entry point used by the `rentobuy` binary.
pub fn run_cli() -> Result<(), CliError> {
    let config = load_config(&ConfigManager::new()).with_env_overrides();
    let mode = CliMode::detect();
    let prefs = OutputPreferences {
        plain: config.plain_output || mode == CliMode::Script,
        high_contrast: config.high_contrast,
    };
    info!(
        profiles_dir = %config.profiles_dir.display(),
        ?mode,
        "starting profile session"
    );

    let store = JsonProfileStore::new(&config.profiles_dir);
    let mut terminal = ConsoleTerminal::new(mode, prefs);
    run_session(&store, &mut terminal, &config.fields)?;
    Ok(())
}

/// Reads the stored config, writing defaults on first run.
///
/// An unreadable or malformed file is logged and replaced by defaults for this
/// run only; the file itself is left untouched.
fn load_config(manager: &ConfigManager) -> Config {
    if !manager.path().exists() {
        let config = Config::default();
        if let Err(err) = manager.save(&config) {
            warn!(path = %manager.path().display(), error = %err, "could not write default config");
        }
        return config;
    }
    match manager.load() {
        Ok(config) => config,
        Err(err) => {
            warn!(path = %manager.path().display(), error = %err, "ignoring unreadable config");
            Config::default()
        }
    }
}

/// Menu, then input form, then the offer to save.
///
/// A profile that cannot be loaded is reported and the form starts blank.
pub fn run_session<S, T>(
    store: &S,
    terminal: &mut T,
    fields: &[String],
) -> Result<SessionOutcome, CliError>
where
    S: ProfileStorage + ?Sized,
    T: Terminal + ?Sized,
{
    let decision = ProfileMenu::new(store, &mut *terminal).run()?;
    let defaults = match decision {
        MenuDecision::Quit => return Ok(SessionOutcome::Quit),
        MenuDecision::New => ProfileInputs::new(),
        MenuDecision::Load(name) => match store.load(&name) {
            Ok(inputs) => {
                terminal.success(&format!("Loaded profile '{name}'"));
                inputs
            }
            Err(err) => {
                warn!(profile = %name, error = %err, "falling back to blank inputs");
                terminal.error(&format!("Error loading profile: {err}"));
                terminal.info("Starting with blank inputs.");
                ProfileInputs::new()
            }
        },
    };

    terminal.blank_line();
    let inputs = collect_inputs(&mut *terminal, fields, &defaults)?;

    if !inputs.is_empty() {
        terminal.blank_line();
        terminal.print(MessageKind::Label, "Inputs:");
        for (key, value) in &inputs {
            terminal.print(MessageKind::Item, &format!("  {key}: {value}"));
        }
    }

    let save = prompt_save_profile(store, &mut *terminal, &inputs)?;
    Ok(SessionOutcome::Completed { inputs, save })
}
