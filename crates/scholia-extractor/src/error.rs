//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur while loading a manuscript
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// File could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File type has no text adapter
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// File is not valid UTF-8 text
    #[error("Document is not valid UTF-8: {0}")]
    InvalidEncoding(String),

    /// Text exceeds maximum length
    #[error("Text too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for extractor operations
pub type Result<T> = std::result::Result<T, ExtractorError>;
