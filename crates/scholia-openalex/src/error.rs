//! Error types for the OpenAlex client

use scholia_domain::CollaboratorError;
use thiserror::Error;

/// OpenAlex operation errors
#[derive(Debug, Error)]
pub enum OpenAlexError {
    /// Connection error (network, DNS, timeout)
    #[error("Connection error: {0}")]
    Connection(String),

    /// The API answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Http {
        /// Status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// The API answered with an unexpected body
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for OpenAlexError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            OpenAlexError::Connection(e.to_string())
        } else if e.is_decode() {
            OpenAlexError::InvalidResponse(e.to_string())
        } else if let Some(status) = e.status() {
            OpenAlexError::Http {
                status: status.as_u16(),
                message: e.to_string(),
            }
        } else {
            OpenAlexError::Connection(e.to_string())
        }
    }
}

impl From<serde_json::Error> for OpenAlexError {
    fn from(e: serde_json::Error) -> Self {
        OpenAlexError::InvalidResponse(format!("JSON parsing error: {}", e))
    }
}

impl From<OpenAlexError> for CollaboratorError {
    fn from(e: OpenAlexError) -> Self {
        match e {
            OpenAlexError::InvalidResponse(_) => CollaboratorError::InvalidResponse(e.to_string()),
            OpenAlexError::Connection(_) | OpenAlexError::Http { .. } => {
                CollaboratorError::Unavailable(e.to_string())
            }
        }
    }
}
