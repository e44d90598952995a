mod common;

use std::fs;

use common::{sample_inputs, setup_test_store, store_with_profiles, temp_root};
use rentobuy::{
    errors::ProfileError,
    storage::{JsonProfileStore, ProfileInputs, ProfileStorage},
};

#[test]
fn save_then_load_returns_same_mapping() {
    let store = setup_test_store();
    let inputs = sample_inputs("round trip");
    store.save("household", &inputs).expect("save profile");
    let loaded = store.load("household").expect("load profile");
    assert_eq!(loaded, inputs);
}

#[test]
fn empty_mapping_round_trips() {
    let store = setup_test_store();
    store
        .save("blank", &ProfileInputs::new())
        .expect("save profile");
    assert!(store.load("blank").expect("load profile").is_empty());
}

#[test]
fn list_is_sorted_and_extension_stripped() {
    let store = store_with_profiles(&["b", "a", "c"]);
    assert_eq!(store.list().expect("list"), vec!["a", "b", "c"]);
}

#[test]
fn list_on_fresh_store_is_empty_and_creates_directory() {
    let store = setup_test_store();
    assert!(!store.root().exists());
    assert!(store.list().expect("list").is_empty());
    assert!(store.root().is_dir());
}

#[test]
fn list_skips_directories_and_foreign_files() {
    let store = store_with_profiles(&["alpha"]);
    fs::create_dir(store.root().join("nested.json")).expect("create subdir");
    fs::write(store.root().join("notes.txt"), "hello").expect("write notes");
    fs::write(store.root().join("beta.json.tmp"), "{}").expect("write staged file");
    assert_eq!(store.list().expect("list"), vec!["alpha"]);
}

#[test]
fn resaving_overwrites_existing_profile() {
    let store = store_with_profiles(&["alpha"]);
    let replacement = ProfileInputs::from([("home_price".to_string(), "1m".to_string())]);
    store.save("alpha", &replacement).expect("overwrite");
    assert_eq!(store.load("alpha").expect("load"), replacement);
    assert_eq!(store.list().expect("list"), vec!["alpha"]);
}

#[test]
fn second_delete_reports_not_found() {
    let store = store_with_profiles(&["alpha"]);
    store.delete("alpha").expect("first delete");
    let err = store.delete("alpha").expect_err("second delete must fail");
    assert!(matches!(err, ProfileError::NotFound(name) if name == "alpha"));
    assert!(store.list().expect("list").is_empty());
}

#[test]
fn loading_missing_profile_is_not_found() {
    let store = setup_test_store();
    let err = store.load("doesnotexist").expect_err("missing profile");
    assert!(matches!(err, ProfileError::NotFound(_)));
}

#[test]
fn malformed_content_is_corrupt() {
    let store = setup_test_store();
    store.ensure_ready().expect("ensure ready");
    fs::write(store.root().join("broken.json"), "not json").expect("write");
    fs::write(store.root().join("typed.json"), r#"{ "home_price": 450000 }"#).expect("write");

    for name in ["broken", "typed"] {
        let err = store.load(name).expect_err("corrupt profile");
        assert!(
            matches!(&err, ProfileError::Corrupt { name: found, .. } if found == name),
            "unexpected error for `{name}`: {err}"
        );
    }
}

#[test]
fn ensure_ready_twice_is_harmless() {
    let store = setup_test_store();
    store.ensure_ready().expect("first ensure");
    store.ensure_ready().expect("second ensure");
    assert!(store.root().is_dir());
    let parent = store.root().parent().expect("parent");
    let dirs = fs::read_dir(parent).expect("read parent").count();
    assert_eq!(dirs, 1);
}

#[test]
fn store_root_that_is_a_file_is_unavailable() {
    let root = temp_root().join("occupied");
    fs::write(&root, "not a directory").expect("write file");
    let store = JsonProfileStore::new(&root);

    assert!(matches!(
        store.list(),
        Err(ProfileError::StoreUnavailable(_))
    ));
    assert!(matches!(
        store.save("alpha", &sample_inputs("x")),
        Err(ProfileError::StoreUnavailable(_))
    ));
}

#[test]
fn saved_file_is_pretty_printed_in_key_order() {
    let store = setup_test_store();
    let inputs = ProfileInputs::from([
        ("z_last".to_string(), "1".to_string()),
        ("a_first".to_string(), "2".to_string()),
    ]);
    store.save("ordered", &inputs).expect("save");
    let text = fs::read_to_string(store.root().join("ordered.json")).expect("read");
    assert_eq!(text, "{\n  \"a_first\": \"2\",\n  \"z_last\": \"1\"\n}");
}

#[test]
fn path_like_names_are_rejected() {
    let store = setup_test_store();
    let err = store
        .save("../escape", &sample_inputs("x"))
        .expect_err("invalid name");
    assert!(matches!(err, ProfileError::InvalidName(_)));
}

#[cfg(unix)]
#[test]
fn listed_names_always_load() {
    let store = store_with_profiles(&["alpha"]);
    fs::write(store.root().join("a\\b.json"), "{}").expect("write backslash file");

    let names = store.list().expect("list");
    assert_eq!(names, vec!["alpha".to_string()]);
    for name in &names {
        store.load(name).expect("listed profile loads");
    }
}
