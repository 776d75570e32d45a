//! Configuration for the analysis pipeline

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunable thresholds of the pipeline
///
/// Penalty caps and multipliers of the integrity score are fixed and live in
/// [`crate::scoring`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// A cited reference scoring below this relevance fails verification
    pub relevance_threshold: f64,

    /// A citation context below this cosine similarity is flagged
    pub false_citation_threshold: f64,

    /// Solid claims scoring below this are refined to vague
    pub vague_score_threshold: f64,

    /// Known datasets at least this old (years) with successors are outdated
    pub dataset_age_threshold: i32,

    /// Solid claims at or above this freshness earn the bonus
    pub freshness_bonus_threshold: f64,

    /// Timeout for one collaborator call (seconds)
    pub collaborator_timeout_secs: u64,

    /// Sentences shorter than this (characters) are never claims
    pub min_sentence_length: usize,

    /// Lines at the top of the body scanned for author names
    pub author_scan_lines: usize,
}

impl AnalysisConfig {
    /// Create a strict configuration (flags more, rewards less)
    pub fn strict() -> Self {
        Self {
            relevance_threshold: 0.4,
            false_citation_threshold: 0.4,
            vague_score_threshold: 0.75,
            dataset_age_threshold: 5,
            freshness_bonus_threshold: 90.0,
            ..Default::default()
        }
    }

    /// Create a lenient configuration
    pub fn lenient() -> Self {
        Self {
            relevance_threshold: 0.2,
            false_citation_threshold: 0.2,
            vague_score_threshold: 0.5,
            dataset_age_threshold: 12,
            freshness_bonus_threshold: 70.0,
            ..Default::default()
        }
    }

    /// Timeout for one collaborator call
    pub fn collaborator_timeout(&self) -> Duration {
        Duration::from_secs(self.collaborator_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("relevance_threshold", self.relevance_threshold),
            ("false_citation_threshold", self.false_citation_threshold),
            ("vague_score_threshold", self.vague_score_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be between 0.0 and 1.0", name));
            }
        }
        if !(0.0..=100.0).contains(&self.freshness_bonus_threshold) {
            return Err("freshness_bonus_threshold must be between 0 and 100".to_string());
        }
        if self.dataset_age_threshold < 1 {
            return Err("dataset_age_threshold must be at least 1".to_string());
        }
        if self.collaborator_timeout_secs == 0 {
            return Err("collaborator_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            relevance_threshold: 0.3,
            false_citation_threshold: 0.3,
            vague_score_threshold: 0.65,
            dataset_age_threshold: 8,
            freshness_bonus_threshold: 80.0,
            collaborator_timeout_secs: 30,
            min_sentence_length: 20,
            author_scan_lines: 20,
        }
    }
}
