//! Client configuration
//!
//! Configuration loaded from `.gh-git-data.toml`. Every field is optional in
//! the file; missing fields fall back to public GitHub defaults.

use crate::{DEFAULT_API_URL, DEFAULT_HOST};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// GitHub client configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// GitHub host (e.g. "github.com" or "ghe.example.com")
    #[serde(default = "default_host")]
    pub host: String,

    /// Explicit API base URL, overrides the one derived from `host`
    #[serde(default)]
    pub base_uri: Option<String>,

    /// Personal access token
    #[serde(default)]
    pub token: Option<String>,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            base_uri: None,
            token: None,
        }
    }
}

/// Name of the host-specific token env var
///
/// `ghe.example.com` becomes `GITHUB_TOKEN_GHE_EXAMPLE_COM`.
pub fn token_env_key(host: &str) -> String {
    format!(
        "GITHUB_TOKEN_{}",
        host.replace(['.', '-'], "_").to_uppercase()
    )
}

impl ClientConfig {
    /// Load config from CWD first, then the config directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded client config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default client config");
        Self::default()
    }

    /// Load config from an explicit path
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Whether this config targets public GitHub
    pub fn is_default_host(&self) -> bool {
        self.host == DEFAULT_HOST
    }

    /// API base URL for the configured host
    ///
    /// `base_uri` wins if set. Enterprise hosts use `https://{host}/api/v3`.
    pub fn api_base_url(&self) -> String {
        if let Some(uri) = &self.base_uri {
            return uri.trim_end_matches('/').to_string();
        }

        if self.is_default_host() {
            DEFAULT_API_URL.to_string()
        } else {
            format!("https://{}/api/v3", self.host)
        }
    }

    /// Resolve the token to authenticate with
    ///
    /// # Token Resolution Order
    ///
    /// 1. `GITHUB_TOKEN_{HOST}` env var (e.g., `GITHUB_TOKEN_GHE_EXAMPLE_COM`)
    /// 2. `token` from the config file
    /// 3. `GITHUB_TOKEN` or `GH_TOKEN` (github.com only)
    ///
    /// Returns `None` for anonymous access.
    pub fn resolve_token(&self) -> Option<String> {
        self.resolve_token_with(|key| std::env::var(key).ok())
    }

    fn resolve_token_with(&self, env: impl Fn(&str) -> Option<String>) -> Option<String> {
        let env_key = token_env_key(&self.host);
        if let Some(token) = env(&env_key).filter(|t| !t.is_empty()) {
            log::debug!("Using token from env var {} for host {}", env_key, self.host);
            return Some(token);
        }

        if let Some(token) = self.token.as_ref().filter(|t| !t.is_empty()) {
            log::debug!("Using token from config for host {}", self.host);
            return Some(token.clone());
        }

        if self.is_default_host() {
            let token = env("GITHUB_TOKEN")
                .filter(|t| !t.is_empty())
                .or_else(|| env("GH_TOKEN").filter(|t| !t.is_empty()));
            if token.is_some() {
                log::debug!("Using default token (GITHUB_TOKEN/GH_TOKEN) for github.com");
            }
            return token;
        }

        log::debug!("No token found for host {}, using anonymous access", self.host);
        None
    }
}
