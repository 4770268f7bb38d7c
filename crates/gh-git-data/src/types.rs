//! GitHub git data transfer objects
//!
//! These types mirror the JSON of the GitHub v3 git data API for references
//! and annotated tags. Response types are decoded as-is and never mutated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A git reference (branch, tag or other ref)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Fully qualified name (e.g., "refs/heads/main")
    #[serde(rename = "ref")]
    pub ref_name: String,

    /// GraphQL node id
    #[serde(default)]
    pub node_id: Option<String>,

    /// API URL of the reference
    #[serde(default)]
    pub url: Option<String>,

    /// Object the reference points to
    pub object: GitObject,
}

/// Object a reference or tag points to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitObject {
    /// Object type
    #[serde(rename = "type")]
    pub object_type: ObjectType,

    /// Object SHA
    pub sha: String,

    /// API URL of the object
    #[serde(default)]
    pub url: Option<String>,
}

/// Git object type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    Commit,
    Tag,
    Tree,
    Blob,
    /// Type not known to this client
    #[serde(other)]
    Unknown,
}

/// An annotated tag object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name (e.g., "v1.0.0")
    pub tag: String,

    /// SHA of the tag object itself
    pub sha: String,

    /// GraphQL node id
    #[serde(default)]
    pub node_id: Option<String>,

    /// API URL of the tag object
    #[serde(default)]
    pub url: Option<String>,

    /// Tag message
    pub message: String,

    /// Who created the tag, and when
    pub tagger: Tagger,

    /// Tagged object
    pub object: GitObject,

    /// Signature verification, if GitHub computed one
    #[serde(default)]
    pub verification: Option<Verification>,
}

/// Tagger identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tagger {
    pub name: String,
    pub email: String,
    pub date: DateTime<Utc>,
}

/// Signature verification of a tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    pub verified: bool,
    pub reason: String,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub payload: Option<String>,
}

/// Body of `POST /repos/{owner}/{repo}/git/refs`
#[derive(Debug, Clone, Serialize)]
pub struct NewReference<'a> {
    #[serde(rename = "ref")]
    pub ref_name: &'a str,
    pub sha: &'a str,
}

/// Body of `POST /repos/{owner}/{repo}/git/tags`
#[derive(Debug, Clone, Serialize)]
pub struct NewAnnotatedTag<'a> {
    pub tag: &'a str,
    pub message: &'a str,
    /// SHA of the tagged object
    pub object: &'a str,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    pub tagger: NewTagger<'a>,
}

/// Tagger part of a new annotated tag
#[derive(Debug, Clone, Serialize)]
pub struct NewTagger<'a> {
    pub name: &'a str,
    pub email: &'a str,
    /// ISO-8601 timestamp
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_reference_deserialization() {
        let body = r#"{
            "ref": "refs/heads/featureA",
            "node_id": "MDM6UmVmcmVmcy9oZWFkcy9mZWF0dXJlQQ==",
            "url": "https://api.github.com/repos/octocat/Hello-World/git/refs/heads/featureA",
            "object": {
                "type": "commit",
                "sha": "aa218f56b14c9653891f9e74264a383fa43fefbd",
                "url": "https://api.github.com/repos/octocat/Hello-World/git/commits/aa218f56b14c9653891f9e74264a383fa43fefbd"
            }
        }"#;

        let reference: Reference = serde_json::from_str(body).unwrap();
        assert_eq!(reference.ref_name, "refs/heads/featureA");
        assert_eq!(reference.object.object_type, ObjectType::Commit);
        assert_eq!(
            reference.object.sha,
            "aa218f56b14c9653891f9e74264a383fa43fefbd"
        );
    }

    #[test]
    fn test_reference_without_optional_fields() {
        let body = r#"{"ref": "refs/tags/v1", "object": {"type": "tag", "sha": "abc"}}"#;
        let reference: Reference = serde_json::from_str(body).unwrap();
        assert_eq!(reference.object.object_type, ObjectType::Tag);
        assert!(reference.node_id.is_none());
        assert!(reference.object.url.is_none());
    }

    #[test]
    fn test_unknown_object_type() {
        let object: GitObject =
            serde_json::from_str(r#"{"type": "submodule", "sha": "abc"}"#).unwrap();
        assert_eq!(object.object_type, ObjectType::Unknown);
    }

    #[test]
    fn test_tag_deserialization() {
        let body = r#"{
            "node_id": "MDM6VGFnOTQwYmQzMzYyNDhlZmFlMGY5ZWU1YmM3YjJkNWM5ODU4ODdiMTZhYw==",
            "tag": "v0.0.1",
            "sha": "940bd336248efae0f9ee5bc7b2d5c985887b16ac",
            "url": "https://api.github.com/repos/octocat/Hello-World/git/tags/940bd336248efae0f9ee5bc7b2d5c985887b16ac",
            "message": "initial version",
            "tagger": {
                "name": "Monalisa Octocat",
                "email": "octocat@github.com",
                "date": "2014-11-07T22:01:45Z"
            },
            "object": {
                "type": "commit",
                "sha": "c3d0be41ecbe669545ee3e94d31ed9a4bc91ee3c",
                "url": "https://api.github.com/repos/octocat/Hello-World/git/commits/c3d0be41ecbe669545ee3e94d31ed9a4bc91ee3c"
            },
            "verification": {
                "verified": false,
                "reason": "unsigned",
                "signature": null,
                "payload": null
            }
        }"#;

        let tag: Tag = serde_json::from_str(body).unwrap();
        assert_eq!(tag.tag, "v0.0.1");
        assert_eq!(tag.message, "initial version");
        assert_eq!(tag.tagger.name, "Monalisa Octocat");
        assert_eq!(
            tag.tagger.date,
            Utc.with_ymd_and_hms(2014, 11, 7, 22, 1, 45).unwrap()
        );
        assert_eq!(tag.object.sha, "c3d0be41ecbe669545ee3e94d31ed9a4bc91ee3c");
        let verification = tag.verification.unwrap();
        assert!(!verification.verified);
        assert_eq!(verification.reason, "unsigned");
    }

    #[test]
    fn test_new_annotated_tag_wire_format() {
        let body = NewAnnotatedTag {
            tag: "v1",
            message: "msg",
            object: "abc123",
            object_type: ObjectType::Commit,
            tagger: NewTagger {
                name: "Name",
                email: "e@x.com",
                date: "2020-01-01T00:00:00Z".to_string(),
            },
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "tag": "v1",
                "message": "msg",
                "object": "abc123",
                "type": "commit",
                "tagger": {"name": "Name", "email": "e@x.com", "date": "2020-01-01T00:00:00Z"}
            })
        );
    }

    #[test]
    fn test_new_reference_wire_format() {
        let body = NewReference {
            ref_name: "refs/heads/x",
            sha: "abc",
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"ref": "refs/heads/x", "sha": "abc"})
        );
    }
}
