//! Configuration file paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/gh-git-data/`
//! - macOS: `~/Library/Application Support/gh-git-data/`
//! - Windows: `%APPDATA%\gh-git-data\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "gh-git-data";
const LOCAL_CONFIG_FILE: &str = ".gh-git-data.toml";
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the application config directory (not created)
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get path to the global config file
pub fn global_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(GLOBAL_CONFIG_FILE))
}

/// Get path to the local config file (in CWD)
pub fn local_config_path() -> Result<PathBuf> {
    Ok(std::env::current_dir()?.join(LOCAL_CONFIG_FILE))
}
