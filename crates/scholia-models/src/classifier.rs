//! Claim classifiers
//!
//! - [`HeuristicClassifier`]: lexical cues, no model required
//! - [`LlmClassifier`]: zero-shot labelling through any [`LlmProvider`]

use crate::parser::parse_classifications;
use crate::prompt::classification_prompt;
use crate::error::ModelError;
use scholia_domain::{
    ClaimClassifier, ClassifiedSentence, CollaboratorError, LlmProvider, SentenceLabel,
};
use std::fmt::Display;
use tracing::debug;

/// Default number of sentences per LLM call
pub const DEFAULT_BATCH_SIZE: usize = 16;

const HEDGES: &[&str] = &[
    "may", "might", "could", "possibly", "perhaps", "suggest", "suggests", "appear", "appears",
    "seem", "seems", "likely", "unclear", "some", "several", "various", "many", "often",
];

const FINDINGS: &[&str] = &[
    "achieve", "achieves", "achieved", "outperform", "outperforms", "demonstrate",
    "demonstrates", "show", "shows", "improve", "improves", "improved", "propose", "reduce",
    "reduces", "increase", "increases", "significant", "significantly", "results", "find",
];

const BACKGROUND: &[&str] = &[
    "has been",
    "have been",
    "is widely",
    "are widely",
    "traditionally",
    "in recent years",
    "commonly",
];

/// Classifies sentences from lexical cues
///
/// Hedging vocabulary makes a sentence vague, finding vocabulary or
/// quantities make it solid, and questions and background phrasing get their
/// own labels. Scores grow with the number of cues.
#[derive(Debug, Clone, Default)]
pub struct HeuristicClassifier;

impl HeuristicClassifier {
    /// Create a new heuristic classifier
    pub fn new() -> Self {
        Self
    }

    /// Classify one sentence
    pub fn classify(&self, sentence: &str) -> ClassifiedSentence {
        let lower = sentence.to_lowercase();
        let words: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        let count = |vocab: &[&str]| words.iter().filter(|w| vocab.contains(w)).count();
        let hedges = count(HEDGES);
        let quantities = sentence
            .split_whitespace()
            .filter(|t| t.chars().any(|c| c.is_ascii_digit()) && (t.contains('%') || t.contains('.')))
            .count();
        let findings = count(FINDINGS) + quantities;

        let (label, score) = if sentence.trim_end().ends_with('?') {
            (SentenceLabel::Question, 0.9)
        } else if hedges > 0 {
            (SentenceLabel::VagueClaim, 0.55 + 0.05 * hedges.min(3) as f64)
        } else if findings > 0 {
            (SentenceLabel::SolidClaim, 0.7 + 0.08 * findings.min(3) as f64)
        } else if BACKGROUND.iter().any(|b| lower.contains(b)) {
            (SentenceLabel::Background, 0.6)
        } else if words.contains(&"we") || words.contains(&"our") {
            (SentenceLabel::SolidClaim, 0.6)
        } else {
            (SentenceLabel::Other, 0.5)
        };

        ClassifiedSentence {
            sentence: sentence.to_string(),
            label,
            score,
        }
    }
}

impl ClaimClassifier for HeuristicClassifier {
    fn classify_batch(
        &self,
        sentences: &[String],
    ) -> Result<Vec<ClassifiedSentence>, CollaboratorError> {
        Ok(sentences.iter().map(|s| self.classify(s)).collect())
    }
}

/// Zero-shot classifier backed by an LLM
pub struct LlmClassifier<L> {
    llm: L,
    batch_size: usize,
}

impl<L> LlmClassifier<L> {
    /// Create a classifier with the default batch size
    pub fn new(llm: L) -> Self {
        Self {
            llm,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Set the number of sentences per LLM call
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }
}

impl<L> ClaimClassifier for LlmClassifier<L>
where
    L: LlmProvider,
    L::Error: Display,
{
    fn classify_batch(
        &self,
        sentences: &[String],
    ) -> Result<Vec<ClassifiedSentence>, CollaboratorError> {
        let mut results = Vec::with_capacity(sentences.len());
        for chunk in sentences.chunks(self.batch_size) {
            let prompt = classification_prompt(chunk);
            let response = self
                .llm
                .generate_structured(&prompt, "classification")
                .map_err(|e| ModelError::Communication(e.to_string()))?;
            debug!(batch = chunk.len(), "Classified sentence batch");
            results.extend(parse_classifications(&response, chunk)?);
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockProvider;

    fn label_of(sentence: &str) -> SentenceLabel {
        HeuristicClassifier::new().classify(sentence).label
    }

    #[test]
    fn test_heuristic_labels() {
        assert_eq!(label_of("We achieve 94.5% accuracy on CIFAR-10."), SentenceLabel::SolidClaim);
        assert_eq!(label_of("This may help in several settings."), SentenceLabel::VagueClaim);
        assert_eq!(label_of("Can attention replace recurrence?"), SentenceLabel::Question);
        assert_eq!(label_of("Attention has been studied extensively."), SentenceLabel::Background);
        assert_eq!(label_of("The weather is nice."), SentenceLabel::Other);
    }

    #[test]
    fn test_heuristic_scores_in_range() {
        let classifier = HeuristicClassifier::new();
        for sentence in [
            "We propose and demonstrate a method that improves results by 12%.",
            "Some many various several often cases.",
        ] {
            let score = classifier.classify(sentence).score;
            assert!((0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn test_heuristic_batch_preserves_order() {
        let sentences = vec!["Is it?".to_string(), "We show gains.".to_string()];
        let results = HeuristicClassifier::new().classify_batch(&sentences).unwrap();
        assert_eq!(results[0].sentence, "Is it?");
        assert_eq!(results[1].label, SentenceLabel::SolidClaim);
    }

    #[test]
    fn test_llm_classifier_batches() {
        let provider = MockProvider::new(r#"[{"label": "solid_claim", "score": 0.8}]"#);
        let classifier = LlmClassifier::new(provider.clone()).with_batch_size(1);
        let sentences = vec!["One.".to_string(), "Two.".to_string()];

        let results = classifier.classify_batch(&sentences).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].sentence, "Two.");
        assert_eq!(provider.call_count(), 2);
    }

    #[test]
    fn test_llm_classifier_rejects_short_answer() {
        let provider = MockProvider::new(r#"[{"label": "solid_claim", "score": 0.8}]"#);
        let classifier = LlmClassifier::new(provider);
        let sentences = vec!["One.".to_string(), "Two.".to_string()];

        let err = classifier.classify_batch(&sentences).unwrap_err();
        assert!(matches!(err, CollaboratorError::InvalidResponse(_)));
    }
}
