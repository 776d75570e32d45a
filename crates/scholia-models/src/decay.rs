//! Decay classifiers

use crate::error::ModelError;
use crate::parser::parse_decay_analysis;
use crate::prompt::decay_prompt;
use scholia_domain::{CollaboratorError, DecayAnalysis, DecayClassifier, DecayType, LlmProvider};
use std::fmt::Display;

const TIMELESS_CUES: &[&str] = &[
    "theorem", "lemma", "proof", "prove", "corollary", "axiom", "by definition",
];

const FAST_CUES: &[&str] = &[
    "benchmark",
    "leaderboard",
    "state-of-the-art",
    "sota",
    "accuracy",
    "top-1",
    "bleu",
    "f1",
    "price",
    "cost",
    "gpu",
    "parameters",
    "latest",
    "outperform",
];

const SLOW_CUES: &[&str] = &[
    "established",
    "well known",
    "well-known",
    "consistently",
    "decades",
    "fundamental",
];

const MEDIUM_CUES: &[&str] = &[
    "method",
    "framework",
    "architecture",
    "algorithm",
    "approach",
    "technique",
    "model",
    "tool",
];

/// Keyword-driven decay classifier
///
/// Checks cue lists in the order timeless, fast, slow, medium. Fast cues
/// are also reported as moving variables.
#[derive(Debug, Clone, Default)]
pub struct HeuristicDecayClassifier;

impl HeuristicDecayClassifier {
    /// Create a new heuristic decay classifier
    pub fn new() -> Self {
        Self
    }

    /// Classify one claim
    pub fn classify(&self, sentence: &str) -> DecayAnalysis {
        let lower = sentence.to_lowercase();
        let matched = |cues: &[&'static str]| -> Vec<&'static str> {
            cues.iter().copied().filter(|c| contains_word(&lower, c)).collect()
        };

        let timeless = matched(TIMELESS_CUES);
        let fast = matched(FAST_CUES);
        let slow = matched(SLOW_CUES);
        let medium = matched(MEDIUM_CUES);

        let (decay_type, cues, stress_test) = if !timeless.is_empty() {
            (DecayType::Timeless, timeless, "Only an error in the argument itself would invalidate it.")
        } else if !fast.is_empty() {
            (DecayType::Fast, fast.clone(), "A newer result on the same measure would supersede it.")
        } else if !slow.is_empty() {
            (DecayType::Slow, slow, "Contradicting replications over several years would be needed.")
        } else if !medium.is_empty() {
            (DecayType::Medium, medium, "A successor method becoming standard would date it.")
        } else {
            (DecayType::Unclassified, Vec::new(), "")
        };

        let reason = if cues.is_empty() {
            "No decay cues found".to_string()
        } else {
            format!("Matched {} cues: {}", decay_type, cues.join(", "))
        };

        DecayAnalysis {
            decay_type,
            reason,
            moving_variables: fast.into_iter().map(String::from).collect(),
            stress_test: stress_test.to_string(),
            consensus: String::new(),
        }
    }
}

impl DecayClassifier for HeuristicDecayClassifier {
    fn analyze(&self, sentence: &str) -> Result<DecayAnalysis, CollaboratorError> {
        Ok(self.classify(sentence))
    }
}

/// Decay classifier backed by an LLM
pub struct LlmDecayClassifier<L> {
    llm: L,
}

impl<L> LlmDecayClassifier<L> {
    /// Wrap an LLM provider
    pub fn new(llm: L) -> Self {
        Self { llm }
    }
}

impl<L> DecayClassifier for LlmDecayClassifier<L>
where
    L: LlmProvider,
    L::Error: Display,
{
    fn analyze(&self, sentence: &str) -> Result<DecayAnalysis, CollaboratorError> {
        let response = self
            .llm
            .generate_structured(&decay_prompt(sentence), "decay_analysis")
            .map_err(|e| ModelError::Communication(e.to_string()))?;
        Ok(parse_decay_analysis(&response)?)
    }
}

/// Whole-word (or whole-phrase) containment
fn contains_word(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + needle.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}
