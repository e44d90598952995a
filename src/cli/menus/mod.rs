pub mod profile_menu;
pub mod save_flow;

pub use profile_menu::{MenuDecision, MenuState, ProfileMenu};
pub use save_flow::{prompt_save_profile, SaveOutcome};
