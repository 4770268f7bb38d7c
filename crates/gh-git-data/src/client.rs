//! GitHub transport trait
//!
//! This module defines the `GitHubClient` trait, the seam between typed
//! API clients such as `GitDataClient` and the HTTP layer underneath.

use crate::error::Result;
use async_trait::async_trait;

/// Raw GitHub REST transport
///
/// Routes are absolute API paths such as `/repos/{owner}/{repo}/git/refs`.
/// Implementations return the raw JSON body of a 2xx response and map any
/// other status to [`Error::Api`](crate::Error::Api) carrying the status and
/// raw body. Decoding into typed records is left to the caller.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so one client can be shared across
/// async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use gh_git_data::GitHubClient;
///
/// async fn default_branch_sha(client: &dyn GitHubClient) -> gh_git_data::Result<String> {
///     client.get("/repos/rust-lang/rust/git/refs/heads/master").await
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Issue a GET and return the response body
    async fn get(&self, route: &str) -> Result<String>;

    /// Issue a POST with a JSON body and return the response body
    async fn post(&self, route: &str, body: &serde_json::Value) -> Result<String>;

    /// Issue a DELETE, discarding any response body
    async fn delete(&self, route: &str) -> Result<()>;
}
