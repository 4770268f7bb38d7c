use thiserror::Error;

/// Errors returned by GitHub git data operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a response (connection, DNS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] octocrab::Error),

    /// GitHub answered with a non-2xx status.
    #[error("GitHub API returned status {status}: {body}")]
    Api { status: u16, body: String },

    /// The response body did not match the expected schema.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A required argument was empty.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The octocrab instance could not be built from configuration.
    #[error("failed to build GitHub client: {0}")]
    Build(#[source] octocrab::Error),
}

impl Error {
    /// HTTP status of an API error, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether GitHub reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Reject empty arguments before any request goes out
pub(crate) fn require_non_empty(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::InvalidArgument(format!("{} must not be empty", name)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status() {
        let err = Error::Api {
            status: 404,
            body: r#"{"message":"Not Found"}"#.to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            r#"GitHub API returned status 404: {"message":"Not Found"}"#
        );
    }

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("sha", "abc").is_ok());
        let err = require_non_empty("sha", "").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(ref m) if m == "sha must not be empty"));
        assert_eq!(err.status(), None);
    }
}
