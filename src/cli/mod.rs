pub mod form;
pub mod io;
pub mod menus;
pub mod output;
mod session;
pub mod test_mode;

pub use session::{run_cli, run_session, SessionOutcome};
