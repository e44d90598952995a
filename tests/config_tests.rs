use assert_fs::{prelude::*, TempDir};
use rentobuy::config::{Config, ConfigManager};
use std::path::PathBuf;

#[test]
fn config_manager_persists_and_loads_config() {
    let temp = TempDir::new().expect("temp dir");
    let manager = ConfigManager::with_base_dir(temp.path().join("home"));

    let mut config = Config::default();
    config.profiles_dir = PathBuf::from("/var/lib/rentobuy/profiles");
    config.fields = vec!["home_price".into()];
    config.plain_output = true;

    manager.save(&config).expect("save config");
    temp.child("home/config.json").assert(predicates::path::exists());
    temp.child("home/config.json.tmp")
        .assert(predicates::path::missing());

    assert_eq!(manager.load().expect("load config"), config);
}

#[test]
fn malformed_config_is_an_error() {
    let temp = TempDir::new().expect("temp dir");
    temp.child("config.json")
        .write_str("{ not json")
        .expect("write config");
    let manager = ConfigManager::with_base_dir(temp.path().to_path_buf());
    assert!(manager.load().is_err());
}
