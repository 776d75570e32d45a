//! Deterministic collaborators for testing
//!
//! Every mock returns pre-configured answers without touching a model or
//! the network, and can be told to fail so degradation paths can be tested.
//!
//! # Examples
//!
//! ```
//! use scholia_models::MockProvider;
//! use scholia_domain::LlmProvider;
//!
//! // Simple fixed response
//! let provider = MockProvider::new("Fixed response");
//! assert_eq!(provider.generate("any prompt").unwrap(), "Fixed response");
//!
//! // Multiple responses
//! let mut provider = MockProvider::default();
//! provider.add_response("prompt1", "response1");
//! assert_eq!(provider.generate("prompt1").unwrap(), "response1");
//! ```

use crate::error::ModelError;
use scholia_domain::{
    ClaimClassifier, ClassifiedSentence, CollaboratorError, DecayAnalysis, DecayClassifier,
    Embedder, LlmProvider, MetadataSource, PaperMetadata, RelevanceScorer, SentenceLabel,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn unavailable() -> CollaboratorError {
    CollaboratorError::Unavailable("mock configured to fail".to_string())
}

/// Mock LLM provider for deterministic testing
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        lock(&self.responses).insert(prompt.into(), response.into());
    }

    /// Configure to return an error for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        lock(&self.responses).insert(prompt.into(), "ERROR".to_string());
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        *lock(&self.call_count)
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProvider for MockProvider {
    type Error = ModelError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        *lock(&self.call_count) += 1;

        match lock(&self.responses).get(prompt) {
            Some(response) if response == "ERROR" => {
                Err(ModelError::Communication("Mock error".to_string()))
            }
            Some(response) => Ok(response.clone()),
            None => Ok(self.default_response.clone()),
        }
    }

    fn generate_structured(&self, prompt: &str, _schema: &str) -> Result<String, Self::Error> {
        self.generate(prompt)
    }
}

/// Classifier answering from a sentence table
#[derive(Debug, Clone)]
pub struct MockClassifier {
    labels: HashMap<String, (SentenceLabel, f64)>,
    default: (SentenceLabel, f64),
    fail: bool,
}

impl MockClassifier {
    /// Every sentence gets `label` with `score` unless configured otherwise
    pub fn new(label: SentenceLabel, score: f64) -> Self {
        Self {
            labels: HashMap::new(),
            default: (label, score),
            fail: false,
        }
    }

    /// Answer for one exact sentence
    pub fn with_label(mut self, sentence: impl Into<String>, label: SentenceLabel, score: f64) -> Self {
        self.labels.insert(sentence.into(), (label, score));
        self
    }

    /// A classifier whose every call fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(SentenceLabel::Other, 0.0)
        }
    }
}

impl ClaimClassifier for MockClassifier {
    fn classify_batch(
        &self,
        sentences: &[String],
    ) -> Result<Vec<ClassifiedSentence>, CollaboratorError> {
        if self.fail {
            return Err(unavailable());
        }
        Ok(sentences
            .iter()
            .map(|s| {
                let (label, score) = self.labels.get(s).copied().unwrap_or(self.default);
                ClassifiedSentence {
                    sentence: s.clone(),
                    label,
                    score,
                }
            })
            .collect())
    }
}

/// Relevance scorer answering from a table keyed by the second text
#[derive(Debug, Clone)]
pub struct MockRelevance {
    scores: HashMap<String, f64>,
    default: f64,
    fail: bool,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockRelevance {
    /// Every pair scores `default` unless configured otherwise
    pub fn new(default: f64) -> Self {
        Self {
            scores: HashMap::new(),
            default,
            fail: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Score for any claim compared against this reference text
    pub fn with_score(mut self, reference: impl Into<String>, score: f64) -> Self {
        self.scores.insert(reference.into(), score);
        self
    }

    /// A scorer whose every call fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(0.0)
        }
    }

    /// Every `(text_a, text_b)` pair scored so far
    pub fn calls(&self) -> Vec<(String, String)> {
        lock(&self.calls).clone()
    }
}

impl RelevanceScorer for MockRelevance {
    fn relevance(&self, text_a: &str, text_b: &str) -> Result<f64, CollaboratorError> {
        lock(&self.calls).push((text_a.to_string(), text_b.to_string()));
        if self.fail {
            return Err(unavailable());
        }
        Ok(self.scores.get(text_b).copied().unwrap_or(self.default))
    }
}

/// Embedder answering from a text table
#[derive(Debug, Clone)]
pub struct MockEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    default: Vec<f32>,
    fail: bool,
}

impl MockEmbedder {
    /// Every text embeds to `default` unless configured otherwise
    pub fn new(default: Vec<f32>) -> Self {
        Self {
            vectors: HashMap::new(),
            default,
            fail: false,
        }
    }

    /// Vector for one exact text
    pub fn with_vector(mut self, text: impl Into<String>, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.into(), vector);
        self
    }

    /// An embedder whose every call fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(Vec::new())
        }
    }
}

impl Embedder for MockEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, CollaboratorError> {
        if self.fail {
            return Err(unavailable());
        }
        Ok(self.vectors.get(text).cloned().unwrap_or_else(|| self.default.clone()))
    }
}

/// Decay classifier answering from a sentence table
#[derive(Debug, Clone, Default)]
pub struct MockDecayClassifier {
    analyses: HashMap<String, DecayAnalysis>,
    default: DecayAnalysis,
    fail: bool,
}

impl MockDecayClassifier {
    /// Every sentence gets `default` unless configured otherwise
    pub fn new(default: DecayAnalysis) -> Self {
        Self {
            analyses: HashMap::new(),
            default,
            fail: false,
        }
    }

    /// Answer for one exact sentence
    pub fn with_analysis(mut self, sentence: impl Into<String>, analysis: DecayAnalysis) -> Self {
        self.analyses.insert(sentence.into(), analysis);
        self
    }

    /// A classifier whose every call fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl DecayClassifier for MockDecayClassifier {
    fn analyze(&self, sentence: &str) -> Result<DecayAnalysis, CollaboratorError> {
        if self.fail {
            return Err(unavailable());
        }
        Ok(self
            .analyses
            .get(sentence)
            .cloned()
            .unwrap_or_else(|| self.default.clone()))
    }
}

/// In-memory metadata source
#[derive(Debug, Clone, Default)]
pub struct MockMetadataSource {
    by_doi: HashMap<String, PaperMetadata>,
    by_title: HashMap<String, PaperMetadata>,
    authors: HashMap<String, Vec<String>>,
    abstracts: HashMap<String, String>,
    fail_lookups: bool,
    fail_batches: bool,
    call_count: Arc<Mutex<usize>>,
}

impl MockMetadataSource {
    /// An empty source that knows no papers
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a paper under its DOI
    pub fn with_paper(mut self, doi: impl Into<String>, paper: PaperMetadata) -> Self {
        self.by_doi.insert(doi.into(), paper);
        self
    }

    /// Register a paper under an exact title
    pub fn with_title(mut self, title: impl Into<String>, paper: PaperMetadata) -> Self {
        self.by_title.insert(title.into(), paper);
        self
    }

    /// Register the author identifiers of a referenced work
    pub fn with_work_authors(mut self, work_id: impl Into<String>, authors: &[&str]) -> Self {
        self.authors
            .insert(work_id.into(), authors.iter().map(|a| a.to_string()).collect());
        self
    }

    /// Register the abstract of a referenced work
    pub fn with_abstract(mut self, work_id: impl Into<String>, text: impl Into<String>) -> Self {
        self.abstracts.insert(work_id.into(), text.into());
        self
    }

    /// Make DOI and title lookups fail
    pub fn failing_lookups(mut self) -> Self {
        self.fail_lookups = true;
        self
    }

    /// Make author and abstract batch fetches fail
    pub fn failing_batches(mut self) -> Self {
        self.fail_batches = true;
        self
    }

    /// Number of calls made against this source
    pub fn call_count(&self) -> usize {
        *lock(&self.call_count)
    }

    fn record_call(&self) {
        *lock(&self.call_count) += 1;
    }
}

impl MetadataSource for MockMetadataSource {
    fn resolve_doi(&self, doi: &str) -> Result<Option<PaperMetadata>, CollaboratorError> {
        self.record_call();
        if self.fail_lookups {
            return Err(unavailable());
        }
        Ok(self.by_doi.get(doi).cloned())
    }

    fn resolve_title(&self, title: &str) -> Result<Option<PaperMetadata>, CollaboratorError> {
        self.record_call();
        if self.fail_lookups {
            return Err(unavailable());
        }
        Ok(self.by_title.get(title).cloned())
    }

    fn fetch_authors_for_works(
        &self,
        work_ids: &[String],
    ) -> Result<HashMap<String, Vec<String>>, CollaboratorError> {
        self.record_call();
        if self.fail_batches {
            return Err(unavailable());
        }
        Ok(work_ids
            .iter()
            .filter_map(|id| self.authors.get(id).map(|a| (id.clone(), a.clone())))
            .collect())
    }

    fn fetch_abstracts_for_works(
        &self,
        work_ids: &[String],
    ) -> Result<HashMap<String, String>, CollaboratorError> {
        self.record_call();
        if self.fail_batches {
            return Err(unavailable());
        }
        Ok(work_ids
            .iter()
            .filter_map(|id| self.abstracts.get(id).map(|a| (id.clone(), a.clone())))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("hello", "world");

        assert_eq!(provider.generate("hello").unwrap(), "world");
        assert_eq!(provider.generate("unknown").unwrap(), "Default mock response");
        assert_eq!(provider.call_count(), 2);
    }

    #[test]
    fn test_mock_provider_error() {
        let mut provider = MockProvider::default();
        provider.add_error("bad prompt");
        assert!(matches!(
            provider.generate("bad prompt"),
            Err(ModelError::Communication(_))
        ));
    }

    #[test]
    fn test_mock_provider_clone_shares_count() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();
        provider1.generate("test").unwrap();
        assert_eq!(provider2.call_count(), 1);
    }

    #[test]
    fn test_mock_relevance_records_calls() {
        let scorer = MockRelevance::new(0.9).with_score("ref one", 0.1);
        assert_eq!(scorer.relevance("claim", "ref one").unwrap(), 0.1);
        assert_eq!(scorer.relevance("claim", "other").unwrap(), 0.9);
        assert_eq!(scorer.calls().len(), 2);
    }

    #[test]
    fn test_mock_metadata_batches_only_known_ids() {
        let source = MockMetadataSource::new().with_work_authors("W1", &["A1"]);
        let authors = source
            .fetch_authors_for_works(&["W1".to_string(), "W2".to_string()])
            .unwrap();
        assert_eq!(authors.len(), 1);
        assert_eq!(source.call_count(), 1);
    }

    #[test]
    fn test_failing_mocks() {
        assert!(MockClassifier::failing().classify_batch(&[]).is_err());
        assert!(MockEmbedder::failing().embed("x").is_err());
        assert!(MockDecayClassifier::failing().analyze("x").is_err());
        assert!(MockMetadataSource::new().failing_lookups().resolve_doi("10.1/x").is_err());
    }
}
