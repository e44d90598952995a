#![doc(test(attr(deny(warnings))))]

//! Saved input profiles for the rent vs buy calculator and the interactive
//! menu that selects, creates, saves and deletes them.

pub mod cli;
pub mod config;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("rentobuy tracing initialized.");
    });
}
