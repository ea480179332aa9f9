//! Error Types
//!
//! Failures surfaced to the user as notices.

use thiserror::Error;

/// Anything that can go wrong talking to the tracker backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned {status}: {message}")]
    Http { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("{0}")]
    Rejected(String),
    #[error("missing CSRF token cookie")]
    MissingCsrfToken,
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Failures persisting the client config
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("local storage unavailable")]
    StorageUnavailable,
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Client-side form checks performed before any request is sent
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter note title")]
    EmptyTitle,
    #[error("Please select an application")]
    NoApplicationSelected,
    #[error("Please fill in the {0}")]
    MissingField(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_read_like_notices() {
        assert_eq!(ApiError::Rejected("bad date".into()).to_string(), "bad date");
        assert_eq!(
            ApiError::Http { status: 404, message: "Not Found".into() }.to_string(),
            "server returned 404: Not Found"
        );
        assert_eq!(ValidationError::EmptyTitle.to_string(), "Please enter note title");
        assert_eq!(ValidationError::MissingField("company name").to_string(), "Please fill in the company name");
        assert_eq!(
            ConfigError::Write("QuotaExceededError".into()).to_string(),
            "storage write failed: QuotaExceededError"
        );
    }
}
