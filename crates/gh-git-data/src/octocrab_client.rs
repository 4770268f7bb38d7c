//! Octocrab-based GitHub transport
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab
//! library. Requests go through octocrab's raw request methods so the
//! status code and body of failed calls reach the caller untouched.

use crate::client::GitHubClient;
use crate::error::{Error, Result};
use crate::git_data::GitDataClient;
use async_trait::async_trait;
use gh_git_data_config::ClientConfig;
use log::{debug, info};
use octocrab::Octocrab;
use std::sync::Arc;

/// GitHub transport backed by a shared octocrab instance
///
/// This client makes real API calls. Cloning is cheap and shares the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Build a client from configuration
    ///
    /// Uses the configured API base URL and the resolved token (anonymous
    /// if none is found).
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let base_url = config.api_base_url();
        info!("Creating GitHub client for {}", base_url);

        let mut builder = Octocrab::builder()
            .base_uri(base_url.as_str())
            .map_err(Error::Build)?;

        if let Some(token) = config.resolve_token() {
            builder = builder.personal_token(token);
        }

        let octocrab = builder.build().map_err(Error::Build)?;
        Ok(Self::new(Arc::new(octocrab)))
    }

    /// Get a reference to the underlying octocrab instance
    pub fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }

    /// Git data client scoped to `owner/repo`, sharing this transport
    pub fn git_data(&self, owner: &str, repo: &str) -> Result<GitDataClient<OctocrabClient>> {
        GitDataClient::new(Arc::new(self.clone()), owner, repo)
    }
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn get(&self, route: &str) -> Result<String> {
        debug!("GET {}", route);
        let response = self.octocrab._get(route).await?;
        let status = response.status().as_u16();
        let body = self.octocrab.body_to_string(response).await?;
        into_api_result(status, body)
    }

    async fn post(&self, route: &str, body: &serde_json::Value) -> Result<String> {
        debug!("POST {}", route);
        let response = self.octocrab._post(route, Some(body)).await?;
        let status = response.status().as_u16();
        let body = self.octocrab.body_to_string(response).await?;
        into_api_result(status, body)
    }

    async fn delete(&self, route: &str) -> Result<()> {
        debug!("DELETE {}", route);
        let response = self.octocrab._delete(route, None::<&()>).await?;
        let status = response.status().as_u16();
        let body = self.octocrab.body_to_string(response).await?;
        into_api_result(status, body).map(drop)
    }
}

/// Keep the body of 2xx responses, turn anything else into `Error::Api`
fn into_api_result(status: u16, body: String) -> Result<String> {
    if (200..300).contains(&status) {
        return Ok(body);
    }

    debug!("GitHub API returned {}: {}", status, body);
    Err(Error::Api { status, body })
}
