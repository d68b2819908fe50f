//! Error types for PageBrief

use thiserror::Error;

/// Errors that can occur while producing a brief
#[derive(Debug, Error)]
pub enum BriefError {
    /// URL is missing
    #[error("URL parameter is required")]
    MissingUrl,

    /// No API key configured for the LLM provider
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    /// URL has invalid scheme
    #[error("Invalid URL: must start with http:// or https://")]
    InvalidUrlScheme,

    /// Failed to build HTTP client
    #[error("Failed to create HTTP client")]
    ClientBuildError(#[source] reqwest::Error),

    /// Request timed out waiting for first byte
    #[error("Request timed out: server did not respond in time")]
    FirstByteTimeout,

    /// Failed to connect to server
    #[error("Failed to connect to server")]
    ConnectError(#[source] reqwest::Error),

    /// Other request error
    #[error("Request failed: {0}")]
    RequestError(String),

    /// LLM provider answered with a non-success status
    #[error("LLM API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// LLM provider response could not be decoded
    #[error("Failed to parse LLM response: {0}")]
    Parse(String),

    /// LLM provider returned no choices
    #[error("LLM returned no choices")]
    EmptyCompletion,

    /// Tool result could not be encoded
    #[error("Failed to encode tool result")]
    Serialize(#[from] serde_json::Error),
}

impl BriefError {
    /// Create an error from a reqwest error
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            BriefError::FirstByteTimeout
        } else if err.is_connect() {
            BriefError::ConnectError(err)
        } else {
            BriefError::RequestError(err.to_string())
        }
    }

    /// True when the caller supplied bad input
    pub fn is_client_error(&self) -> bool {
        matches!(self, BriefError::MissingUrl | BriefError::InvalidUrlScheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BriefError::MissingUrl.to_string(),
            "URL parameter is required"
        );
        assert_eq!(
            BriefError::MissingApiKey.to_string(),
            "OPENAI_API_KEY is not set"
        );
        assert_eq!(
            BriefError::InvalidUrlScheme.to_string(),
            "Invalid URL: must start with http:// or https://"
        );
        assert_eq!(
            BriefError::Api {
                status: 401,
                message: "Incorrect API key provided".to_string()
            }
            .to_string(),
            "LLM API error (401): Incorrect API key provided"
        );
        assert_eq!(
            BriefError::EmptyCompletion.to_string(),
            "LLM returned no choices"
        );
    }

    #[test]
    fn test_client_errors() {
        assert!(BriefError::MissingUrl.is_client_error());
        assert!(BriefError::InvalidUrlScheme.is_client_error());
        assert!(!BriefError::MissingApiKey.is_client_error());
        assert!(!BriefError::FirstByteTimeout.is_client_error());
        assert!(!BriefError::Parse("bad".to_string()).is_client_error());
    }
}
