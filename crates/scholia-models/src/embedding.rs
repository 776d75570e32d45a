//! Embedding model for text vectorization
//!
//! [`HashingEmbedder`] maps text to a fixed-dimension vector with signed
//! feature hashing over lower-cased word unigrams and bigrams. It needs no
//! model files and is fully deterministic, which keeps reports reproducible.
//! Texts sharing vocabulary land close together under cosine similarity.
//!
//! # Examples
//!
//! ```rust
//! use scholia_models::HashingEmbedder;
//! use scholia_domain::Embedder;
//!
//! let model = HashingEmbedder::new(256);
//! let embedding = model.embed("Sparse attention scales linearly").unwrap();
//! assert_eq!(embedding.len(), 256);
//!
//! // Same text always produces same embedding
//! assert_eq!(embedding, model.embed("Sparse attention scales linearly").unwrap());
//! ```

use crate::error::ModelError;
use scholia_domain::{CollaboratorError, Embedder};

/// Default embedding dimension
pub const DEFAULT_DIMENSION: usize = 384;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Words carrying no topical signal
const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "have", "in", "is",
    "it", "its", "of", "on", "or", "that", "the", "this", "to", "was", "were", "which", "with",
];

/// Deterministic feature-hashing embedder
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimension: usize,
}

impl HashingEmbedder {
    /// Create an embedder producing vectors of `dimension` components
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: dimension.max(1),
        }
    }

    /// Dimension of produced vectors
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    fn embed_text(&self, text: &str) -> Result<Vec<f32>, ModelError> {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Err(ModelError::InvalidInput(
                "Text has no embeddable tokens".to_string(),
            ));
        }

        let mut embedding = vec![0.0f32; self.dimension];
        for token in &tokens {
            self.add_feature(&mut embedding, token, 1.0);
        }
        for pair in tokens.windows(2) {
            self.add_feature(&mut embedding, &format!("{} {}", pair[0], pair[1]), 0.5);
        }

        // Normalize to unit length for cosine similarity
        let magnitude: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        if magnitude > 0.0 {
            for value in &mut embedding {
                *value /= magnitude;
            }
        }

        Ok(embedding)
    }

    fn add_feature(&self, embedding: &mut [f32], feature: &str, weight: f32) {
        let hash = fnv1a(feature.as_bytes());
        let idx = (hash % self.dimension as u64) as usize;
        let sign = if (hash >> 63) & 1 == 0 { 1.0 } else { -1.0 };
        embedding[idx] += sign * weight;
    }
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

impl Embedder for HashingEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, CollaboratorError> {
        self.embed_text(text).map_err(Into::into)
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .filter(|t| !STOPWORDS.contains(&t.as_str()))
        .collect()
}

fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET, |hash, b| {
        (hash ^ u64::from(*b)).wrapping_mul(FNV_PRIME)
    })
}
