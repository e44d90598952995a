use std::io;

use thiserror::Error;

/// Failures reported by the profile store.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("profile `{0}` not found")]
    NotFound(String),
    #[error("profile `{name}` is corrupt: {reason}")]
    Corrupt { name: String, reason: String },
    #[error("invalid profile name `{0}`")]
    InvalidName(String),
}

impl ProfileError {
    /// Maps an I/O failure on a named profile, keeping a missing file distinct from
    /// an unusable store.
    pub(crate) fn from_io(name: &str, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            ProfileError::NotFound(name.to_string())
        } else {
            ProfileError::StoreUnavailable(err.to_string())
        }
    }
}

impl From<io::Error> for ProfileError {
    fn from(err: io::Error) -> Self {
        ProfileError::StoreUnavailable(err.to_string())
    }
}

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("prompt failed: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Config(err.to_string())
    }
}
