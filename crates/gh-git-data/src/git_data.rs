//! Git data API client for references and tags
//!
//! Wraps a shared `GitHubClient` and scopes every call to one repository.
//! Each method formats a route, optionally serializes a body, and decodes
//! the response into the types from [`crate::types`].

use crate::client::GitHubClient;
use crate::error::{require_non_empty, Result};
use crate::ref_name::{RefKind, RefName};
use crate::types::{NewAnnotatedTag, NewReference, NewTagger, ObjectType, Reference, Tag};
use chrono::{SecondsFormat, Utc};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Owner and repository every call of a `GitDataClient` targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoScope {
    owner: String,
    repo: String,
}

impl RepoScope {
    /// Both parts must be non-empty
    pub fn new(owner: &str, repo: &str) -> Result<Self> {
        require_non_empty("owner", owner)?;
        require_non_empty("repo", repo)?;
        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// `/repos/{owner}/{repo}/git/{rest}`
    fn git_route(&self, rest: &str) -> String {
        format!("/repos/{}/{}/git/{}", self.owner, self.repo, rest)
    }
}

/// Client for the git references and tags endpoints of one repository
///
/// Construction performs no I/O. The client holds no mutable state, so it
/// can be cloned into concurrent tasks freely.
///
/// # Example
///
/// ```rust,no_run
/// use gh_git_data::{GitDataClient, OctocrabClient};
/// use std::sync::Arc;
///
/// # async fn example() -> gh_git_data::Result<()> {
/// let octocrab = octocrab::Octocrab::builder().build()?;
/// let transport = Arc::new(OctocrabClient::new(Arc::new(octocrab)));
/// let git = GitDataClient::new(transport, "octocat", "Hello-World")?;
///
/// let main = git.get_branch_reference("main").await?;
/// git.create_tag_reference("v1.0.0", &main.object.sha).await?;
/// # Ok(())
/// # }
/// ```
pub struct GitDataClient<C: GitHubClient + ?Sized> {
    github: Arc<C>,
    scope: RepoScope,
}

impl<C: GitHubClient + ?Sized> Clone for GitDataClient<C> {
    fn clone(&self) -> Self {
        Self {
            github: Arc::clone(&self.github),
            scope: self.scope.clone(),
        }
    }
}

impl<C: GitHubClient + ?Sized> std::fmt::Debug for GitDataClient<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitDataClient")
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

impl<C: GitHubClient + ?Sized> GitDataClient<C> {
    /// Create a client scoped to `owner/repo`
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` if `owner` or `repo` is empty.
    pub fn new(github: Arc<C>, owner: &str, repo: &str) -> Result<Self> {
        Ok(Self {
            github,
            scope: RepoScope::new(owner, repo)?,
        })
    }

    pub fn scope(&self) -> &RepoScope {
        &self.scope
    }

    /// Delete a git reference
    ///
    /// `reference` may be fully qualified (`refs/heads/x`) or relative to
    /// `refs/` (`heads/x`); a leading `refs/` is stripped.
    pub async fn delete_reference(&self, reference: &str) -> Result<()> {
        require_non_empty("reference", reference)?;
        self.delete_ref(&RefName::parse(reference)).await
    }

    /// Delete a branch, with or without a leading `refs/heads/`
    pub async fn delete_branch(&self, branch: &str) -> Result<()> {
        require_non_empty("branch", branch)?;
        self.delete_ref(&RefName::branch(branch)).await
    }

    /// Delete a tag reference, with or without a leading `refs/tags/`
    pub async fn delete_tag(&self, tag: &str) -> Result<()> {
        require_non_empty("tag", tag)?;
        self.delete_ref(&RefName::tag(tag)).await
    }

    async fn delete_ref(&self, reference: &RefName) -> Result<()> {
        let route = self.reference_route(reference);
        debug!(
            "Deleting reference {} in {}/{}",
            reference, self.scope.owner, self.scope.repo
        );
        self.github.delete(&route).await
    }

    /// Get a branch reference
    pub async fn get_branch_reference(&self, branch: &str) -> Result<Reference> {
        require_non_empty("branch", branch)?;
        let route = self.reference_route(&RefName::new(RefKind::Branch, branch));
        self.get_json(&route).await
    }

    /// Get a tag reference
    pub async fn get_tag_reference(&self, tag: &str) -> Result<Reference> {
        require_non_empty("tag", tag)?;
        let route = self.reference_route(&RefName::new(RefKind::Tag, tag));
        self.get_json(&route).await
    }

    /// Get an annotated tag object
    pub async fn get_tag(&self, tag: &str) -> Result<Tag> {
        require_non_empty("tag", tag)?;
        let route = self.scope.git_route(&format!("tags/{}", tag));
        self.get_json(&route).await
    }

    /// List references matching a pattern (e.g. `heads/feature`)
    ///
    /// Results keep the order GitHub returns them in.
    pub async fn list_matching_references(&self, pattern: &str) -> Result<Vec<Reference>> {
        require_non_empty("pattern", pattern)?;
        let route = self.scope.git_route(&format!("matching-refs/{}", pattern));
        let references: Vec<Reference> = self.get_json(&route).await?;
        debug!(
            "Found {} references matching '{}' in {}/{}",
            references.len(),
            pattern,
            self.scope.owner,
            self.scope.repo
        );
        Ok(references)
    }

    /// Create a reference from its fully qualified name
    pub async fn create_reference(&self, reference: &str, sha: &str) -> Result<Reference> {
        require_non_empty("reference", reference)?;
        require_non_empty("sha", sha)?;

        let route = self.scope.git_route("refs");
        let body = serde_json::to_value(NewReference {
            ref_name: reference,
            sha,
        })?;
        debug!("Creating reference {} at {}", reference, sha);
        self.post_json(&route, &body).await
    }

    /// Create a branch reference
    ///
    /// `branch` must not include `refs/heads/`; it is used verbatim.
    pub async fn create_branch_reference(&self, branch: &str, sha: &str) -> Result<Reference> {
        require_non_empty("branch", branch)?;
        self.create_scoped_reference(RefName::new(RefKind::Branch, branch), sha)
            .await
    }

    /// Create a tag reference
    ///
    /// `tag` must not include `refs/tags/`; it is used verbatim.
    pub async fn create_tag_reference(&self, tag: &str, sha: &str) -> Result<Reference> {
        require_non_empty("tag", tag)?;
        self.create_scoped_reference(RefName::new(RefKind::Tag, tag), sha)
            .await
    }

    async fn create_scoped_reference(&self, reference: RefName, sha: &str) -> Result<Reference> {
        if reference.is_double_prefixed() {
            // Sent anyway, the caller owns the name
            warn!(
                "Reference name '{}' already carries its refs/ prefix, creating '{}'",
                reference.short_name(),
                reference
            );
        }
        self.create_reference(&reference.full_name(), sha).await
    }

    /// Create an annotated tag
    ///
    /// First creates the tag reference `refs/tags/{tag}` at `sha`, then the
    /// annotated tag object tagging that commit. The tagger date is the
    /// instant this method is called.
    ///
    /// The two steps are not atomic: if creating the tag object fails, the
    /// reference from the first step is left in place and only the second
    /// error is returned. If the first step fails the tag object is never
    /// requested.
    pub async fn create_annotated_tag(
        &self,
        tag: &str,
        sha: &str,
        message: &str,
        tagger_name: &str,
        tagger_email: &str,
    ) -> Result<Tag> {
        require_non_empty("tag", tag)?;
        require_non_empty("sha", sha)?;
        require_non_empty("message", message)?;
        require_non_empty("tagger_name", tagger_name)?;
        require_non_empty("tagger_email", tagger_email)?;

        let body = serde_json::to_value(NewAnnotatedTag {
            tag,
            message,
            object: sha,
            object_type: ObjectType::Commit,
            tagger: NewTagger {
                name: tagger_name,
                email: tagger_email,
                date: Utc::now().to_rfc3339_opts(SecondsFormat::AutoSi, true),
            },
        })?;

        self.create_tag_reference(tag, sha).await?;

        let route = self.scope.git_route("tags");
        debug!("Creating annotated tag {} at {}", tag, sha);
        self.post_json(&route, &body).await
    }

    fn reference_route(&self, reference: &RefName) -> String {
        self.scope
            .git_route(&format!("refs/{}", reference.path_suffix()))
    }

    async fn get_json<T: DeserializeOwned>(&self, route: &str) -> Result<T> {
        let body = self.github.get(route).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        route: &str,
        body: &serde_json::Value,
    ) -> Result<T> {
        let response = self.github.post(route, body).await?;
        Ok(serde_json::from_str(&response)?)
    }
}
