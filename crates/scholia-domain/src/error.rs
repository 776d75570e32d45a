//! Collaborator failure type
//!
//! Every collaborator trait in [`crate::traits`] reports failure through this
//! one type so the orchestrator can substitute a per-signal default without
//! knowing which backend produced the error.

use std::fmt;

/// Failure of an external collaborator call
#[derive(Debug, Clone, PartialEq)]
pub enum CollaboratorError {
    /// The backend could not be reached or refused the request
    Unavailable(String),

    /// The call exceeded its deadline
    Timeout,

    /// The backend answered with something that does not fit the contract
    InvalidResponse(String),
}

impl CollaboratorError {
    /// Short machine-friendly kind, used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            CollaboratorError::Unavailable(_) => "unavailable",
            CollaboratorError::Timeout => "timeout",
            CollaboratorError::InvalidResponse(_) => "invalid_response",
        }
    }
}

impl fmt::Display for CollaboratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollaboratorError::Unavailable(msg) => write!(f, "Collaborator unavailable: {}", msg),
            CollaboratorError::Timeout => write!(f, "Collaborator call timed out"),
            CollaboratorError::InvalidResponse(msg) => {
                write!(f, "Invalid collaborator response: {}", msg)
            }
        }
    }
}

impl std::error::Error for CollaboratorError {}
