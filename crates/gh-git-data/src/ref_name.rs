//! Git reference names
//!
//! Parses `refs/heads/main`, `heads/main` or `tags/v1` into a kind plus a
//! short name, so path building never has to juggle string prefixes.

use std::fmt;
use std::str::FromStr;

const REFS_PREFIX: &str = "refs/";
const HEADS: &str = "heads/";
const TAGS: &str = "tags/";

/// Namespace a reference lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefKind {
    /// `refs/heads/*`
    Branch,
    /// `refs/tags/*`
    Tag,
    /// Anything else below `refs/` (notes, pull, remotes, ...)
    Other,
}

impl RefKind {
    fn namespace(&self) -> &'static str {
        match self {
            RefKind::Branch => HEADS,
            RefKind::Tag => TAGS,
            RefKind::Other => "",
        }
    }
}

/// A reference split into its kind and short name
///
/// For `Other` the name is everything below `refs/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RefName {
    kind: RefKind,
    name: String,
}

impl RefName {
    /// Build a reference from a kind and a short name, taken verbatim
    pub fn new(kind: RefKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    /// Parse a full or `refs/`-relative reference name
    ///
    /// A single leading `refs/` is dropped, then `heads/` or `tags/` select
    /// the kind.
    pub fn parse(reference: &str) -> Self {
        let rest = reference.strip_prefix(REFS_PREFIX).unwrap_or(reference);
        if let Some(name) = rest.strip_prefix(HEADS) {
            Self::new(RefKind::Branch, name)
        } else if let Some(name) = rest.strip_prefix(TAGS) {
            Self::new(RefKind::Tag, name)
        } else {
            Self::new(RefKind::Other, rest)
        }
    }

    /// Branch reference; a leading `refs/heads/` is dropped
    pub fn branch(name: &str) -> Self {
        Self::new(RefKind::Branch, strip_full_prefix(name, HEADS))
    }

    /// Tag reference; a leading `refs/tags/` is dropped
    pub fn tag(name: &str) -> Self {
        Self::new(RefKind::Tag, strip_full_prefix(name, TAGS))
    }

    pub fn kind(&self) -> RefKind {
        self.kind
    }

    /// Name without namespace (`main` for `refs/heads/main`)
    pub fn short_name(&self) -> &str {
        &self.name
    }

    /// Path below `git/refs/` (`heads/main`)
    pub fn path_suffix(&self) -> String {
        format!("{}{}", self.kind.namespace(), self.name)
    }

    /// Whether the short name repeats its own namespace (`refs/heads/refs/heads/x`)
    pub fn is_double_prefixed(&self) -> bool {
        self.kind != RefKind::Other
            && self
                .name
                .strip_prefix(REFS_PREFIX)
                .is_some_and(|rest| rest.starts_with(self.kind.namespace()))
    }

    /// Fully qualified name (`refs/heads/main`)
    pub fn full_name(&self) -> String {
        format!("{}{}", REFS_PREFIX, self.path_suffix())
    }
}

fn strip_full_prefix<'a>(name: &'a str, namespace: &str) -> &'a str {
    name.strip_prefix(REFS_PREFIX)
        .and_then(|rest| rest.strip_prefix(namespace))
        .unwrap_or(name)
}

impl fmt::Display for RefName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

impl FromStr for RefName {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
