//! Configuration loading
//!
//! Reads `~/.config/autosuggest/config.toml` unless a path is given
//! explicitly. A missing default file is not an error.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AutosuggestError;

pub use types::{Config, InputConfig, MatchMode, SuggestionsConfig};

const CONFIG_DIR: &str = "autosuggest";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration from `explicit` or from the default location
pub fn load_config(explicit: Option<&Path>) -> Result<Config, AutosuggestError> {
    match explicit {
        Some(path) => load_config_from_path(path),
        None => match config_path() {
            Some(path) if path.exists() => load_config_from_path(&path),
            _ => Ok(Config::default()),
        },
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, AutosuggestError> {
    let contents = fs::read_to_string(path)?;
    parse_config_toml(&contents)
}

pub fn parse_config_toml(content: &str) -> Result<Config, AutosuggestError> {
    toml::from_str(content).map_err(|e| AutosuggestError::Config(e.message().to_string()))
}
