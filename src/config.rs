use crate::error::{Result, SemvError};
use crate::semver::DEFAULT_PREFIX;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for git-semv
///
/// Everything is optional; the defaults match plain `git semv` behavior.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Tag prefix stripped on parse and re-applied on output
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Remote that `--bump` pushes to
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Default pre-release label used when `--pre` is given without
    /// `--pre-name`
    #[serde(default)]
    pub pre_name: Option<String>,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prefix: default_prefix(),
            remote: default_remote(),
            pre_name: None,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitsemv.toml` in current directory
/// 3. `gitsemv.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// A file that exists but cannot be read or parsed is an error, not a
/// silent fallback.
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./gitsemv.toml").exists() {
        fs::read_to_string("./gitsemv.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("gitsemv.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str).map_err(|e| SemvError::config(e.to_string()))
}
