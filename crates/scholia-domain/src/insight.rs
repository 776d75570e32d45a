//! Qualitative findings: rigor, novelty, and the synthesized peer review

use serde::{Deserialize, Serialize};

/// Methodological rigor indicators found in the body text
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RigorReport {
    /// Ablation study or component analysis
    pub has_ablation: bool,
    /// Comparison against baselines or prior methods
    pub has_baselines: bool,
    /// Significance testing or variance reporting
    pub has_statistical_validation: bool,
    /// Code links, supplementary material, training details
    pub has_reproducibility: bool,
    /// Theorems, proofs, formal derivations
    pub has_methodological_depth: bool,
    /// Stated assumptions or constraints
    pub has_explicit_assumptions: bool,
    /// Matched ablation snippets
    pub ablation_mentions: Vec<String>,
    /// Matched baseline snippets
    pub baseline_mentions: Vec<String>,
    /// Matched statistical snippets
    pub statistical_indicators: Vec<String>,
    /// Matched reproducibility snippets
    pub repro_mentions: Vec<String>,
    /// Matched formal-method snippets
    pub math_mentions: Vec<String>,
    /// Matched assumption snippets
    pub assumption_mentions: Vec<String>,
}

/// Novelty indicators found in the body text
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NoveltyReport {
    /// Contribution sentences, each with the sentence that follows it
    pub contributions: Vec<String>,
    /// At least one contribution statement was found
    pub has_contribution_statement: bool,
    /// Novelty vocabulary found (novel, state-of-the-art, ...)
    pub novelty_keywords: Vec<String>,
    /// The paper states a gap in prior work
    pub has_scientific_gap: bool,
    /// Matched gap statements
    pub gap_mentions: Vec<String>,
    /// Contributions name a concrete technical artifact
    pub is_novelty_specific: bool,
}

/// Reviewer-style synthesis of all signals
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PeerReview {
    /// Positive findings
    pub strengths: Vec<String>,
    /// Gaps a reviewer would point out
    pub weaknesses: Vec<String>,
    /// Findings serious enough to question the paper's integrity
    pub red_flags: Vec<String>,
}
