//! Relevance scoring on top of an embedder

use scholia_domain::{cosine_similarity, CollaboratorError, Embedder, RelevanceScorer};

/// Relevance as the cosine similarity of two embeddings, floored at 0
///
/// # Examples
///
/// ```
/// use scholia_models::{EmbeddingRelevance, HashingEmbedder};
/// use scholia_domain::RelevanceScorer;
///
/// let scorer = EmbeddingRelevance::new(HashingEmbedder::default());
/// let score = scorer
///     .relevance("Dropout reduces overfitting", "Dropout: preventing overfitting in networks")
///     .unwrap();
/// assert!((0.0..=1.0).contains(&score));
/// ```
#[derive(Debug, Clone)]
pub struct EmbeddingRelevance<E> {
    embedder: E,
}

impl<E: Embedder> EmbeddingRelevance<E> {
    /// Wrap an embedder
    pub fn new(embedder: E) -> Self {
        Self { embedder }
    }
}

impl<E: Embedder> RelevanceScorer for EmbeddingRelevance<E> {
    fn relevance(&self, text_a: &str, text_b: &str) -> Result<f64, CollaboratorError> {
        let a = self.embedder.embed(text_a)?;
        let b = self.embedder.embed(text_b)?;
        Ok(f64::from(cosine_similarity(&a, &b)).clamp(0.0, 1.0))
    }
}
