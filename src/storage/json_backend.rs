use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::{
    errors::ProfileError,
    utils::{ensure_dir, tmp_path, write_atomic},
};

use super::{ProfileEntry, ProfileInputs, ProfileStorage, Result};

const PROFILE_EXTENSION: &str = "json";

/// Directory of `<name>.json` files, one per profile.
///
/// The directory is created lazily on the first operation that needs it.
#[derive(Debug, Clone)]
pub struct JsonProfileStore {
    root: PathBuf,
}

impl JsonProfileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn profile_path(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;
        Ok(self
            .root
            .join(format!("{}.{}", name, PROFILE_EXTENSION)))
    }
}

impl ProfileStorage for JsonProfileStore {
    fn ensure_ready(&self) -> Result<()> {
        ensure_dir(&self.root)?;
        Ok(())
    }

    fn list_entries(&self) -> Result<Vec<ProfileEntry>> {
        self.ensure_ready()?;
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                continue;
            }
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str().and_then(profile_name) else {
                continue;
            };
            // Only offer names that load and delete can address.
            if validate_name(name).is_err() {
                debug!(file = name, "skipping profile file with unusable name");
                continue;
            }
            let modified = entry
                .metadata()
                .and_then(|meta| meta.modified())
                .ok()
                .map(DateTime::<Utc>::from);
            entries.push(ProfileEntry {
                name: name.to_string(),
                modified,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        debug!(root = %self.root.display(), count = entries.len(), "listed profiles");
        Ok(entries)
    }

    fn load(&self, name: &str) -> Result<ProfileInputs> {
        let path = self.profile_path(name)?;
        let data = fs::read_to_string(&path).map_err(|err| ProfileError::from_io(name, err))?;
        let inputs: ProfileInputs =
            serde_json::from_str(&data).map_err(|err| ProfileError::Corrupt {
                name: name.to_string(),
                reason: err.to_string(),
            })?;
        debug!(profile = name, fields = inputs.len(), "loaded profile");
        Ok(inputs)
    }

    fn save(&self, name: &str, inputs: &ProfileInputs) -> Result<()> {
        let path = self.profile_path(name)?;
        self.ensure_ready()?;
        let json = serde_json::to_string_pretty(inputs)
            .map_err(|err| ProfileError::StoreUnavailable(err.to_string()))?;
        if let Err(err) = write_atomic(&path, &json) {
            warn!(path = %tmp_path(&path).display(), error = %err, "profile write failed");
            return Err(err.into());
        }
        debug!(profile = name, path = %path.display(), "saved profile");
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<()> {
        let path = self.profile_path(name)?;
        fs::remove_file(&path).map_err(|err| ProfileError::from_io(name, err))?;
        debug!(profile = name, "deleted profile");
        Ok(())
    }
}

/// Strips the profile extension from a directory entry name.
fn profile_name(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(PROFILE_EXTENSION)
        .and_then(|stem| stem.strip_suffix('.'))
        .filter(|stem| !stem.is_empty())
}

fn validate_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if invalid {
        return Err(ProfileError::InvalidName(name.to_string()));
    }
    Ok(())
}
