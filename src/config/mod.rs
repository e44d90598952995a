use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::{
    errors::CliError,
    utils::{ensure_dir, write_atomic, PathResolver},
};

const DEFAULT_PROFILES_DIR: &str = ".rentobuy_profiles";
const PROFILES_DIR_ENV: &str = "RENTOBUY_PROFILES_DIR";

/// Input keys the calculator asks for, in prompt order.
const DEFAULT_FIELDS: &[&str] = &[
    "home_price",
    "down_payment",
    "mortgage_rate",
    "loan_duration",
    "property_tax_rate",
    "monthly_rent",
    "rent_increase",
    "appreciation_rate",
    "investment_return",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub profiles_dir: PathBuf,
    pub fields: Vec<String>,
    pub high_contrast: bool,
    pub plain_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profiles_dir: PathBuf::from(DEFAULT_PROFILES_DIR),
            fields: DEFAULT_FIELDS.iter().map(|field| field.to_string()).collect(),
            high_contrast: false,
            plain_output: false,
        }
    }
}

impl Config {
    /// Applies environment overrides on top of the persisted values.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(dir) = env::var_os(PROFILES_DIR_ENV) {
            self.profiles_dir = PathBuf::from(dir);
        }
        if env::var_os("NO_COLOR").is_some() {
            self.plain_output = true;
        }
        self
    }
}

/// Loads and persists [`Config`] as `config.json` under the application home.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(PathResolver::base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            path: PathResolver::config_file_in(&base),
        }
    }

    /// Returns the stored configuration, or defaults when none was saved yet.
    pub fn load(&self) -> Result<Config, CliError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), CliError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
