//! Error types for the analysis pipeline

use scholia_extractor::ExtractorError;
use thiserror::Error;

/// Errors that abort an analysis run
///
/// Collaborator failures are not listed here: they degrade a single signal
/// and are reported through `degraded_signals` instead.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A DOI-only run could not resolve its DOI
    #[error("No metadata found for DOI '{doi}'")]
    MetadataNotFound {
        /// The DOI as given by the caller
        doi: String,
    },

    /// Neither a document nor a DOI was supplied
    #[error("Nothing to analyze: supply a document, a DOI, or both")]
    NoInput,

    /// The document could not be read at all
    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractorError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;
