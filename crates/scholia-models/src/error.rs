//! Error types for model backends

use scholia_domain::CollaboratorError;
use thiserror::Error;

/// Errors that can occur inside a model backend
#[derive(Error, Debug)]
pub enum ModelError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the backend
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Input the model cannot process
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<reqwest::Error> for ModelError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ModelError::InvalidResponse(e.to_string())
        } else {
            ModelError::Communication(e.to_string())
        }
    }
}

impl From<ModelError> for CollaboratorError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Communication(_) | ModelError::ModelNotAvailable(_) => {
                CollaboratorError::Unavailable(e.to_string())
            }
            ModelError::InvalidResponse(_) | ModelError::InvalidInput(_) => {
                CollaboratorError::InvalidResponse(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collaborator_error_mapping() {
        let err: CollaboratorError = ModelError::Communication("refused".into()).into();
        assert!(matches!(err, CollaboratorError::Unavailable(_)));

        let err: CollaboratorError = ModelError::InvalidResponse("not json".into()).into();
        assert!(matches!(err, CollaboratorError::InvalidResponse(msg) if msg.contains("not json")));
    }
}
