use std::{path::PathBuf, sync::Mutex};

use once_cell::sync::Lazy;
use rentobuy::storage::{JsonProfileStore, ProfileInputs, ProfileStorage};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a fresh directory that outlives the calling test.
#[allow(dead_code)]
pub fn temp_root() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Creates an isolated store whose directory does not exist yet.
#[allow(dead_code)]
pub fn setup_test_store() -> JsonProfileStore {
    JsonProfileStore::new(temp_root().join("profiles"))
}

/// Store pre-populated with one profile per name.
#[allow(dead_code)]
pub fn store_with_profiles(names: &[&str]) -> JsonProfileStore {
    let store = setup_test_store();
    for name in names {
        store
            .save(name, &sample_inputs(name))
            .expect("seed profile");
    }
    store
}

#[allow(dead_code)]
pub fn sample_inputs(label: &str) -> ProfileInputs {
    ProfileInputs::from([
        ("home_price".to_string(), "450k".to_string()),
        ("monthly_rent".to_string(), "2.1k".to_string()),
        ("label".to_string(), label.to_string()),
    ])
}
