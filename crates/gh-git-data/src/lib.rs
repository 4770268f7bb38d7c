//! Typed client for the GitHub git data API
//!
//! This crate maps the git references and annotated tags endpoints of the
//! GitHub v3 REST API onto typed async methods. HTTP goes through the
//! `GitHubClient` trait, so the transport can be swapped in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │        GitDataClient (owner/repo scoped)        │
//! │  - get/create/delete references                 │
//! │  - get/create annotated tags                    │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubClient trait                 │
//! │  - get() / post() / delete()                    │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │ OctocrabClient  │
//!              │ (direct API)    │
//!              └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_git_data::{ClientConfig, OctocrabClient};
//!
//! # async fn example() -> gh_git_data::Result<()> {
//! let client = OctocrabClient::from_config(&ClientConfig::load())?;
//! let git = client.git_data("octocat", "Hello-World")?;
//!
//! for reference in git.list_matching_references("tags/v1").await? {
//!     println!("{} -> {}", reference.ref_name, reference.object.sha);
//! }
//!
//! git.create_annotated_tag("v1.2.0", "aa218f56", "Release 1.2.0", "Mona", "mona@example.com")
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod git_data;
#[cfg(test)]
pub(crate) mod mock;
pub mod octocrab_client;
pub mod ref_name;
pub mod types;

pub use client::GitHubClient;
pub use error::{Error, Result};
pub use git_data::{GitDataClient, RepoScope};
pub use octocrab_client::OctocrabClient;
pub use ref_name::{RefKind, RefName};
pub use types::{
    GitObject, NewAnnotatedTag, NewReference, NewTagger, ObjectType, Reference, Tag, Tagger,
    Verification,
};

pub use gh_git_data_config::{ClientConfig, DEFAULT_HOST};

// Re-export octocrab so consumers don't need to depend on it directly
pub use octocrab;
