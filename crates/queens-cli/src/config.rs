//! CLI configuration.
//!
//! Values are layered, later sources winning:
//! built-in defaults, `queens.toml` (from `--config` or the platform config
//! directory), `QUEENS_*` environment variables, then command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::debug;
use serde::{Deserialize, Serialize};

use queens_store::{PlacementStore, STORE_FILE_NAME};

/// Name of the configuration file
pub const CONFIG_FILE_NAME: &str = "queens.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Location of the placement store; the platform data dir when unset
    pub store_path: Option<PathBuf>,
    /// Consult and fill the placement store
    pub cache_enabled: bool,
    /// Read from the store but never write to it
    pub read_only: bool,
    /// Enumerate all solutions on every core
    pub parallel: bool,
    /// Draw an ASCII board under each printed placement
    pub render_board: bool,
    /// Ask before enumerating boards larger than this
    pub max_exhaustive_n: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: None,
            cache_enabled: true,
            read_only: false,
            parallel: true,
            render_board: false,
            max_exhaustive_n: 13,
        }
    }
}

impl Config {
    /// Build the configuration from file and environment.
    ///
    /// An explicit `path` must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Default configuration file in the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "queens").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Override values from `QUEENS_STORE`, `QUEENS_NO_CACHE` and `QUEENS_PARALLEL`.
    pub fn apply_env<F>(&mut self, get: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(store) = get("QUEENS_STORE").filter(|s| !s.is_empty()) {
            self.store_path = Some(PathBuf::from(store));
        }
        if let Some(no_cache) = get("QUEENS_NO_CACHE").and_then(|v| parse_bool(&v)) {
            self.cache_enabled = !no_cache;
        }
        if let Some(parallel) = get("QUEENS_PARALLEL").and_then(|v| parse_bool(&v)) {
            self.parallel = parallel;
        }
    }

    /// Where the placement store lives.
    pub fn resolved_store_path(&self) -> PathBuf {
        self.store_path
            .clone()
            .or_else(PlacementStore::default_path)
            .unwrap_or_else(|| PathBuf::from(".queens").join(STORE_FILE_NAME))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
