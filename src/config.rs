//! User configuration management

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Tasks file used when neither the command line nor the config names one.
pub const DEFAULT_TASKS_FILE: &str = "tasks.json";

/// Overrides the directory holding `config.toml`.
pub const CONFIG_DIR_ENV: &str = "TASKMAN_CONFIG_DIR";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Tasks file location; `~/` expands to the home directory
    #[serde(default)]
    pub tasks_file: Option<String>,

    /// Keep a `.bak` copy of the previous tasks file on every save
    #[serde(default = "default_true")]
    pub backup: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tasks_file: None,
            backup: true,
        }
    }
}

fn default_true() -> bool {
    true
}

pub fn get_app_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    let config_dir = dirs::config_dir().ok_or_else(|| anyhow!("Cannot find config directory"))?;
    Ok(config_dir.join("taskman"))
}

fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(load_config()?.unwrap_or_default())
    }

    /// Configured tasks file with `~/` expanded.
    pub fn tasks_file_path(&self) -> Option<PathBuf> {
        self.tasks_file.as_deref().map(expand_home)
    }

    /// `explicit` (flag or env) wins, then the configured file, then `tasks.json`.
    pub fn resolve_tasks_file(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.tasks_file_path())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TASKS_FILE))
    }
}

pub fn load_config() -> Result<Option<Config>> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(Some(config))
}

#[cfg(test)]
pub(crate) fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}

fn expand_home(s: &str) -> PathBuf {
    if let Some(stripped) = s.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(s)
}
