//! Trait definitions for external collaborators
//!
//! These traits define the boundaries between the analysis pipeline and the
//! services it consumes. Implementations live in `scholia-extractor`,
//! `scholia-models`, and `scholia-openalex`.
//!
//! All collaborator traits are synchronous and `Send + Sync`. The pipeline
//! moves each call onto a blocking thread and applies a timeout, so an
//! implementation may block on network or model I/O.

use crate::claim::SentenceLabel;
use crate::decay::DecayAnalysis;
use crate::error::CollaboratorError;
use crate::metadata::PaperMetadata;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One classified sentence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedSentence {
    /// The sentence as submitted
    pub sentence: String,
    /// Classifier label
    pub label: SentenceLabel,
    /// Classifier confidence in [0, 1]
    pub score: f64,
}

/// Splits body text into sentences
pub trait SentenceSegmenter: Send + Sync {
    /// Split text into trimmed, non-empty sentences in document order
    fn split_sentences(&self, text: &str) -> Vec<String>;
}

/// Zero-shot claim classification
///
/// Implemented by the infrastructure layer (scholia-models)
pub trait ClaimClassifier: Send + Sync {
    /// Classify a batch of sentences
    ///
    /// Must return exactly one result per input sentence, in input order.
    fn classify_batch(
        &self,
        sentences: &[String],
    ) -> Result<Vec<ClassifiedSentence>, CollaboratorError>;
}

/// Symmetric semantic relevance between two texts
pub trait RelevanceScorer: Send + Sync {
    /// Relevance in [0, 1]
    fn relevance(&self, text_a: &str, text_b: &str) -> Result<f64, CollaboratorError>;
}

/// Text embedding
pub trait Embedder: Send + Sync {
    /// Embed a text into a fixed-dimension vector
    fn embed(&self, text: &str) -> Result<Vec<f32>, CollaboratorError>;
}

/// Decay-type classification of a claim
pub trait DecayClassifier: Send + Sync {
    /// Analyze how quickly the claim is expected to go stale
    fn analyze(&self, sentence: &str) -> Result<DecayAnalysis, CollaboratorError>;
}

/// Third-party bibliographic metadata lookup
///
/// Implemented by the infrastructure layer (scholia-openalex)
pub trait MetadataSource: Send + Sync {
    /// Look up a paper by DOI; `Ok(None)` when the DOI is unknown
    fn resolve_doi(&self, doi: &str) -> Result<Option<PaperMetadata>, CollaboratorError>;

    /// Look up the best match for a title; `Ok(None)` when nothing matches
    fn resolve_title(&self, title: &str) -> Result<Option<PaperMetadata>, CollaboratorError>;

    /// Author identifiers for each work
    fn fetch_authors_for_works(
        &self,
        work_ids: &[String],
    ) -> Result<HashMap<String, Vec<String>>, CollaboratorError>;

    /// Abstract text for each work that has one
    fn fetch_abstracts_for_works(
        &self,
        work_ids: &[String],
    ) -> Result<HashMap<String, String>, CollaboratorError>;
}

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (scholia-models)
pub trait LlmProvider: Send + Sync {
    /// Error type for LLM operations
    type Error;

    /// Generate text completion
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;

    /// Generate with structured output (if supported)
    fn generate_structured(&self, prompt: &str, schema: &str) -> Result<String, Self::Error>;
}
