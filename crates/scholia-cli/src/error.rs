//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analysis aborted
    #[error(transparent)]
    Analysis(#[from] scholia_analysis::AnalysisError),

    /// Manuscript could not be loaded
    #[error(transparent)]
    Extraction(#[from] scholia_extractor::ExtractorError),

    /// OpenAlex client could not be built
    #[error("OpenAlex error: {0}")]
    OpenAlex(#[from] scholia_openalex::OpenAlexError),

    /// Model provider could not be built
    #[error("Model error: {0}")]
    Model(#[from] scholia_models::ModelError),

    /// A collaborator call made directly by a command failed
    #[error("Lookup failed: {0}")]
    Lookup(#[from] scholia_domain::CollaboratorError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
