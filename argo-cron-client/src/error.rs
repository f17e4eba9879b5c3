//! Error types for the cron workflow client.

use crate::runtime;
use thiserror::Error;

/// Errors that can occur when talking to the Argo server.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success response.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from server.
        message: String,
        /// Gateway error payload, when the body could be decoded as one.
        payload: Option<runtime::Error>,
    },

    /// Failed to deserialize response.
    #[error("Failed to deserialize response: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Missing or malformed configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status code of an [`ClientError::Api`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the server reported that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_exposes_status() {
        let err = ClientError::Api {
            status: 404,
            message: "cronworkflows.argoproj.io \"nightly\" not found".to_string(),
            payload: None,
        };
        assert_eq!(err.status(), Some(404));
        assert!(err.is_not_found());
    }

    #[test]
    fn config_error_has_no_status() {
        let err = ClientError::Config("ARGO_TOKEN is not set".to_string());
        assert_eq!(err.status(), None);
        assert!(!err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: ARGO_TOKEN is not set"
        );
    }
}
