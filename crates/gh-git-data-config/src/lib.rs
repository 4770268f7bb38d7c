//! Configuration for gh-git-data
//!
//! This crate provides:
//! - Config file discovery and loading (TOML)
//! - Client configuration (`ClientConfig`)
//! - Token resolution from environment and config

pub mod client_config;
pub mod config_file;
pub mod paths;

/// Default GitHub host (public GitHub)
pub const DEFAULT_HOST: &str = "github.com";

/// API base URL of public GitHub
pub const DEFAULT_API_URL: &str = "https://api.github.com";

pub use client_config::{token_env_key, ClientConfig};
pub use config_file::load_config_file;
pub use paths::{config_dir, global_config_path, local_config_path};
