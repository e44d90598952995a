pub mod json_backend;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::errors::ProfileError;

pub type Result<T> = std::result::Result<T, ProfileError>;

/// Calculator inputs held by a profile. Values stay strings; the calculator
/// owns their interpretation.
pub type ProfileInputs = BTreeMap<String, String>;

/// A stored profile as seen from a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEntry {
    pub name: String,
    pub modified: Option<DateTime<Utc>>,
}

/// Abstraction over persistence backends capable of storing named input profiles.
pub trait ProfileStorage {
    /// Creates the backing location if it is missing. Safe to call repeatedly.
    fn ensure_ready(&self) -> Result<()>;

    /// Stored profiles sorted by name, with listing metadata.
    fn list_entries(&self) -> Result<Vec<ProfileEntry>>;

    fn load(&self, name: &str) -> Result<ProfileInputs>;

    /// Writes `inputs` under `name`, replacing any existing profile of that name.
    fn save(&self, name: &str, inputs: &ProfileInputs) -> Result<()>;

    /// Removes the profile. A missing profile reports [`ProfileError::NotFound`].
    fn delete(&self, name: &str) -> Result<()>;

    /// Stored profile names in lexicographic order.
    fn list(&self) -> Result<Vec<String>> {
        Ok(self
            .list_entries()?
            .into_iter()
            .map(|entry| entry.name)
            .collect())
    }

    fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.list()?.iter().any(|existing| existing == name))
    }
}

pub use json_backend::JsonProfileStore;
