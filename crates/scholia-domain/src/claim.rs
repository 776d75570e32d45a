//! Claim module - a classified body sentence and everything learned about it

use crate::decay::{DecayType, DEFAULT_HALF_LIFE_YEARS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label assigned to a sentence by the claim classifier
///
/// Only [`SentenceLabel::SolidClaim`] and [`SentenceLabel::VagueClaim`]
/// become claims; every other label is dropped by the claim adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceLabel {
    /// A concrete research finding
    SolidClaim,
    /// A hedged or unconfident assertion
    VagueClaim,
    /// A research question or hypothesis
    Question,
    /// A sentence that is mostly a citation
    Citation,
    /// Background information
    Background,
    /// Anything else
    Other,
}

impl SentenceLabel {
    /// Parse a classifier label
    ///
    /// Accepts the snake_case names as well as the short forms `solid` and
    /// `vague`. Unknown labels map to [`SentenceLabel::Other`].
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "solid_claim" | "solid" => SentenceLabel::SolidClaim,
            "vague_claim" | "vague" => SentenceLabel::VagueClaim,
            "question" => SentenceLabel::Question,
            "citation" => SentenceLabel::Citation,
            "background" => SentenceLabel::Background,
            _ => SentenceLabel::Other,
        }
    }

    /// Claim label for claim-like sentences, `None` otherwise
    pub fn claim_label(&self) -> Option<ClaimLabel> {
        match self {
            SentenceLabel::SolidClaim => Some(ClaimLabel::Solid),
            SentenceLabel::VagueClaim => Some(ClaimLabel::Vague),
            _ => None,
        }
    }
}

/// Final label of a claim after refinement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimLabel {
    /// A concrete research finding
    Solid,
    /// A hedged or unconfident assertion
    Vague,
}

impl ClaimLabel {
    /// Lower-case label
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimLabel::Solid => "solid",
            ClaimLabel::Vague => "vague",
        }
    }
}

impl fmt::Display for ClaimLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Freshness fields attached to a claim by the freshness evaluator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Freshness {
    /// Whether the cited evidence is older than the decay-adjusted half-life
    pub is_outdated: bool,

    /// Decay category reported by the decay collaborator
    pub decay_type: DecayType,

    /// Freshness in [0, 100]; 100 when no cited year is known
    pub freshness_score: f64,

    /// Publication years of the cited bibliography entries, in marker order
    pub cited_years: Vec<i32>,

    /// Half-life in years for the decay category
    pub half_life: f64,

    /// Collaborator explanation for the decay category
    pub reason: String,

    /// Volatile quantities the claim depends on
    pub moving_variables: Vec<String>,

    /// Collaborator stress test
    pub stress_test: String,

    /// Collaborator consensus note
    pub consensus: String,
}

impl Default for Freshness {
    fn default() -> Self {
        Self {
            is_outdated: false,
            decay_type: DecayType::Unclassified,
            freshness_score: 100.0,
            cited_years: Vec::new(),
            half_life: DEFAULT_HALF_LIFE_YEARS,
            reason: String::new(),
            moving_variables: Vec::new(),
            stress_test: String::new(),
            consensus: String::new(),
        }
    }
}

/// A claim - one body sentence classified as a research assertion
///
/// Created once by the claim adapter, then enriched by the verifier
/// (`verified`, `verification_note`, `relevance`) and by the freshness
/// evaluator (`freshness`). Serializes flat, with the freshness fields
/// alongside the verification fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Sentence text
    pub text: String,

    /// Solid or vague, after refinement
    pub label: ClaimLabel,

    /// Classifier confidence in [0, 1]
    pub score: f64,

    /// Verifier verdict
    pub verified: bool,

    /// Human-readable explanation of the verdict
    pub verification_note: String,

    /// Relevance of the marker that decided the verdict, if any was evaluated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance: Option<f64>,

    /// Freshness enrichment
    #[serde(flatten)]
    pub freshness: Freshness,
}

impl Claim {
    /// Create an unverified claim with default freshness
    ///
    /// # Examples
    ///
    /// ```
    /// use scholia_domain::{Claim, ClaimLabel};
    ///
    /// let claim = Claim::new("We achieve 94% accuracy [1].", ClaimLabel::Solid, 0.91);
    /// assert!(claim.is_solid());
    /// assert!(!claim.freshness.is_outdated);
    /// ```
    pub fn new(text: impl Into<String>, label: ClaimLabel, score: f64) -> Self {
        Self {
            text: text.into(),
            label,
            score,
            verified: false,
            verification_note: String::new(),
            relevance: None,
            freshness: Freshness::default(),
        }
    }

    /// Whether the claim is labelled solid
    pub fn is_solid(&self) -> bool {
        self.label == ClaimLabel::Solid
    }
}
