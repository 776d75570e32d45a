//! Injected collaborator services
//!
//! Every service is built once by the caller and shared through an `Arc`.
//! Calls run on tokio's blocking pool under a per-call timeout, because the
//! collaborator traits are synchronous and may block on network or model I/O.

use scholia_domain::{
    ClaimClassifier, ClassifiedSentence, CollaboratorError, DecayAnalysis, DecayClassifier,
    Embedder, MetadataSource, PaperMetadata, RelevanceScorer, SentenceSegmenter,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The bundle of services one pipeline run consumes
#[derive(Clone)]
pub struct Collaborators {
    segmenter: Arc<dyn SentenceSegmenter>,
    classifier: Arc<dyn ClaimClassifier>,
    relevance: Arc<dyn RelevanceScorer>,
    embedder: Arc<dyn Embedder>,
    decay: Arc<dyn DecayClassifier>,
    metadata: Arc<dyn MetadataSource>,
    timeout: Duration,
}

impl Collaborators {
    /// Bundle the services
    pub fn new(
        segmenter: impl SentenceSegmenter + 'static,
        classifier: impl ClaimClassifier + 'static,
        relevance: impl RelevanceScorer + 'static,
        embedder: impl Embedder + 'static,
        decay: impl DecayClassifier + 'static,
        metadata: impl MetadataSource + 'static,
    ) -> Self {
        Self {
            segmenter: Arc::new(segmenter),
            classifier: Arc::new(classifier),
            relevance: Arc::new(relevance),
            embedder: Arc::new(embedder),
            decay: Arc::new(decay),
            metadata: Arc::new(metadata),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the per-call timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the metadata source
    pub fn with_metadata(mut self, metadata: impl MetadataSource + 'static) -> Self {
        self.metadata = Arc::new(metadata);
        self
    }

    /// Split text into sentences (local and cheap, so not offloaded)
    pub fn split_sentences(&self, text: &str) -> Vec<String> {
        self.segmenter.split_sentences(text)
    }

    /// Classify a batch of sentences
    ///
    /// Rejects answers that do not pair one result with each sentence or
    /// that carry a non-finite score. Scores are clamped to [0, 1].
    pub async fn classify(
        &self,
        sentences: Vec<String>,
    ) -> Result<Vec<ClassifiedSentence>, CollaboratorError> {
        let classifier = Arc::clone(&self.classifier);
        let expected = sentences.len();
        let mut results = self.call(move || classifier.classify_batch(&sentences)).await?;
        if results.len() != expected {
            return Err(CollaboratorError::InvalidResponse(format!(
                "classifier returned {} results for {} sentences",
                results.len(),
                expected
            )));
        }
        for result in &mut results {
            if !result.score.is_finite() {
                return Err(CollaboratorError::InvalidResponse(format!(
                    "classifier score {} is not a number",
                    result.score
                )));
            }
            result.score = result.score.clamp(0.0, 1.0);
        }
        Ok(results)
    }

    /// Relevance of two texts, clamped to [0, 1]
    pub async fn relevance(&self, text_a: &str, text_b: &str) -> Result<f64, CollaboratorError> {
        let scorer = Arc::clone(&self.relevance);
        let (a, b) = (text_a.to_string(), text_b.to_string());
        let score = self.call(move || scorer.relevance(&a, &b)).await?;
        if !score.is_finite() {
            return Err(CollaboratorError::InvalidResponse(format!(
                "relevance {} is not a number",
                score
            )));
        }
        Ok(score.clamp(0.0, 1.0))
    }

    /// Embed a text
    pub async fn embed(&self, text: &str) -> Result<Vec<f32>, CollaboratorError> {
        let embedder = Arc::clone(&self.embedder);
        let text = text.to_string();
        self.call(move || embedder.embed(&text)).await
    }

    /// Decay analysis of a claim
    pub async fn decay_analysis(&self, sentence: &str) -> Result<DecayAnalysis, CollaboratorError> {
        let decay = Arc::clone(&self.decay);
        let sentence = sentence.to_string();
        self.call(move || decay.analyze(&sentence)).await
    }

    /// Metadata for a DOI
    pub async fn resolve_doi(&self, doi: &str) -> Result<Option<PaperMetadata>, CollaboratorError> {
        let metadata = Arc::clone(&self.metadata);
        let doi = doi.to_string();
        self.call(move || metadata.resolve_doi(&doi)).await
    }

    /// Author identifiers of referenced works
    pub async fn authors_for_works(
        &self,
        work_ids: Vec<String>,
    ) -> Result<HashMap<String, Vec<String>>, CollaboratorError> {
        let metadata = Arc::clone(&self.metadata);
        self.call(move || metadata.fetch_authors_for_works(&work_ids)).await
    }

    /// Abstracts of referenced works
    pub async fn abstracts_for_works(
        &self,
        work_ids: Vec<String>,
    ) -> Result<HashMap<String, String>, CollaboratorError> {
        let metadata = Arc::clone(&self.metadata);
        self.call(move || metadata.fetch_abstracts_for_works(&work_ids)).await
    }

    async fn call<T, F>(&self, f: F) -> Result<T, CollaboratorError>
    where
        F: FnOnce() -> Result<T, CollaboratorError> + Send + 'static,
        T: Send + 'static,
    {
        match timeout(self.timeout, tokio::task::spawn_blocking(f)).await {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => Err(CollaboratorError::Unavailable(format!("Task join error: {}", e))),
            Err(_) => {
                debug!(timeout_ms = self.timeout.as_millis() as u64, "Collaborator call timed out");
                Err(CollaboratorError::Timeout)
            }
        }
    }
}
