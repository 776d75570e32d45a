//! Scholia Model Collaborators
//!
//! Implementations of the collaborator traits from `scholia-domain` that
//! involve a model: embeddings, relevance, claim classification and decay
//! analysis.
//!
//! # Providers
//!
//! - `HashingEmbedder`: deterministic feature-hashing embeddings
//! - `EmbeddingRelevance`: relevance as embedding cosine similarity
//! - `HeuristicClassifier` / `LlmClassifier`: claim classification
//! - `HeuristicDecayClassifier` / `LlmDecayClassifier`: decay analysis
//! - `OllamaProvider`: local Ollama API integration
//! - `mock`: deterministic collaborators for testing

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classifier;
pub mod decay;
pub mod embedding;
pub mod error;
pub mod mock;
pub mod ollama;
pub mod parser;
pub mod prompt;
pub mod relevance;

pub use classifier::{HeuristicClassifier, LlmClassifier};
pub use decay::{HeuristicDecayClassifier, LlmDecayClassifier};
pub use embedding::HashingEmbedder;
pub use error::ModelError;
pub use mock::{
    MockClassifier, MockDecayClassifier, MockEmbedder, MockMetadataSource, MockProvider,
    MockRelevance,
};
pub use ollama::OllamaProvider;
pub use relevance::EmbeddingRelevance;
