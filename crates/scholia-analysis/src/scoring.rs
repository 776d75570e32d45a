//! Integrity Score Aggregator
//!
//! Starts from 100 and adds six named terms, each recorded in the
//! breakdown with its sign (penalties negative). The sum is clamped last.

use scholia_domain::{AnalysisMode, IntegrityBreakdown};
use tracing::info;

/// Score before any term is applied
pub const BASE_SCORE: f64 = 100.0;

/// Self-citation penalty per unit of ratio
pub const SELF_CITATION_WEIGHT: f64 = 30.0;
/// Largest self-citation penalty
pub const SELF_CITATION_CAP: f64 = 30.0;

/// Vague-claim penalty per unit of vague share
pub const VAGUE_WEIGHT: f64 = 35.0;
/// Largest vague-claim penalty
pub const VAGUE_CAP: f64 = 25.0;

/// Penalty per flagged false citation
pub const FALSE_CITATION_WEIGHT: f64 = 15.0;
/// Largest false-citation penalty
pub const FALSE_CITATION_CAP: f64 = 45.0;

/// Penalty per outdated dataset
pub const OUTDATED_DATASET_WEIGHT: f64 = 5.0;
/// Largest outdated-dataset penalty
pub const OUTDATED_DATASET_CAP: f64 = 15.0;

/// Penalty at zero average relevance
pub const LOW_RELEVANCE_WEIGHT: f64 = 20.0;

/// Bonus per fresh solid claim
pub const FRESHNESS_BONUS_WEIGHT: f64 = 2.0;
/// Largest freshness bonus
pub const FRESHNESS_BONUS_CAP: f64 = 10.0;

/// The signal magnitudes the score is computed from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreInputs {
    /// Self-citation ratio in `[0, 1]`
    pub self_citation_ratio: f64,
    /// Number of solid claims
    pub solid_claims: usize,
    /// Number of vague claims
    pub vague_claims: usize,
    /// Number of flagged false citations
    pub false_citations: usize,
    /// Number of outdated dataset warnings
    pub outdated_datasets: usize,
    /// Mean relevance over solid claims that recorded one
    ///
    /// Only numeric markers resolve to a bibliography entry, so a body
    /// citing solely in `(Author, Year)` form leaves this at zero and
    /// takes the full low-relevance penalty.
    pub avg_relevance: f64,
    /// Whether the body contains any citation marker
    pub has_citations: bool,
    /// Solid claims at or above the freshness bonus threshold
    pub fresh_solid_claims: usize,
}

/// Compute the integrity score and its breakdown
///
/// Returns no score and an empty breakdown when the mode forbids scoring.
/// The low-relevance term is recorded as zero when the body cites nothing.
pub fn score(mode: AnalysisMode, inputs: &ScoreInputs) -> (Option<f64>, IntegrityBreakdown) {
    let mut breakdown = IntegrityBreakdown::new();
    if !mode.is_scoreable() {
        info!(mode = %mode, "Mode does not allow scoring");
        return (None, breakdown);
    }

    let self_citation = (inputs.self_citation_ratio * SELF_CITATION_WEIGHT).min(SELF_CITATION_CAP);

    let total_claims = inputs.solid_claims + inputs.vague_claims;
    let vague = if total_claims == 0 {
        0.0
    } else {
        (inputs.vague_claims as f64 / total_claims as f64 * VAGUE_WEIGHT).min(VAGUE_CAP)
    };

    let false_citations =
        (inputs.false_citations as f64 * FALSE_CITATION_WEIGHT).min(FALSE_CITATION_CAP);
    let outdated =
        (inputs.outdated_datasets as f64 * OUTDATED_DATASET_WEIGHT).min(OUTDATED_DATASET_CAP);

    let low_relevance = if inputs.has_citations {
        (1.0 - inputs.avg_relevance.max(0.0)) * LOW_RELEVANCE_WEIGHT
    } else {
        0.0
    };

    let bonus =
        (inputs.fresh_solid_claims as f64 * FRESHNESS_BONUS_WEIGHT).min(FRESHNESS_BONUS_CAP);

    breakdown.push("self_citation", -self_citation);
    breakdown.push("vague_claims", -vague);
    breakdown.push("false_citations", -false_citations);
    breakdown.push("outdated_datasets", -outdated);
    breakdown.push("low_relevance", -low_relevance);
    breakdown.push("freshness_bonus", bonus);

    let score = (BASE_SCORE + breakdown.total()).clamp(0.0, 100.0);
    info!(score, "Integrity score computed");
    (Some(score), breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_unscoreable_modes() {
        let inputs = ScoreInputs::default();
        for mode in [AnalysisMode::DoiOnly, AnalysisMode::MatchedHybridWarn] {
            let (score, breakdown) = score(mode, &inputs);
            assert!(score.is_none());
            assert!(breakdown.is_empty());
        }
    }

    #[test]
    fn test_well_supported_paper() {
        let inputs = ScoreInputs {
            solid_claims: 2,
            avg_relevance: 0.85,
            has_citations: true,
            ..Default::default()
        };
        let (score, breakdown) = score(AnalysisMode::PdfOnly, &inputs);

        let names: Vec<&str> = breakdown.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "self_citation",
                "vague_claims",
                "false_citations",
                "outdated_datasets",
                "low_relevance",
                "freshness_bonus"
            ]
        );
        assert!(approx(breakdown.get("low_relevance").unwrap(), -3.0));
        assert!(approx(score.unwrap(), 97.0));
    }

    #[test]
    fn test_caps() {
        let inputs = ScoreInputs {
            self_citation_ratio: 1.0,
            solid_claims: 0,
            vague_claims: 10,
            false_citations: 9,
            outdated_datasets: 9,
            avg_relevance: 0.0,
            has_citations: true,
            fresh_solid_claims: 20,
        };
        let (score, breakdown) = score(AnalysisMode::MatchedHybrid, &inputs);

        assert_eq!(breakdown.get("self_citation"), Some(-30.0));
        assert_eq!(breakdown.get("vague_claims"), Some(-25.0));
        assert_eq!(breakdown.get("false_citations"), Some(-45.0));
        assert_eq!(breakdown.get("outdated_datasets"), Some(-15.0));
        assert_eq!(breakdown.get("low_relevance"), Some(-20.0));
        assert_eq!(breakdown.get("freshness_bonus"), Some(10.0));
        assert_eq!(score, Some(0.0));
    }

    #[test]
    fn test_low_relevance_needs_citations() {
        let inputs = ScoreInputs {
            solid_claims: 1,
            fresh_solid_claims: 1,
            ..Default::default()
        };
        let (score, breakdown) = score(AnalysisMode::PdfOnly, &inputs);
        assert_eq!(breakdown.get("low_relevance"), Some(0.0));
        assert_eq!(score, Some(100.0));
    }

    #[test]
    fn test_author_year_citations_take_full_relevance_penalty() {
        // Solid claims cited as (Author, Year) never record a relevance
        let inputs = ScoreInputs {
            solid_claims: 2,
            avg_relevance: 0.0,
            has_citations: true,
            ..Default::default()
        };
        let (score, breakdown) = score(AnalysisMode::PdfOnly, &inputs);
        assert_eq!(breakdown.get("low_relevance"), Some(-20.0));
        assert_eq!(score, Some(80.0));
    }

    #[test]
    fn test_negative_relevance_counts_as_zero() {
        let inputs = ScoreInputs {
            avg_relevance: -0.5,
            has_citations: true,
            ..Default::default()
        };
        let (_, breakdown) = score(AnalysisMode::PdfOnly, &inputs);
        assert_eq!(breakdown.get("low_relevance"), Some(-20.0));
    }

    proptest! {
        #[test]
        fn prop_score_is_clamped(
            ratio in 0.0f64..=1.0,
            solid in 0usize..1000,
            vague in 0usize..1000,
            false_citations in 0usize..1000,
            outdated in 0usize..1000,
            relevance in -1.0f64..=1.0,
            has_citations in any::<bool>(),
            fresh in 0usize..1000,
        ) {
            let inputs = ScoreInputs {
                self_citation_ratio: ratio,
                solid_claims: solid,
                vague_claims: vague,
                false_citations,
                outdated_datasets: outdated,
                avg_relevance: relevance,
                has_citations,
                fresh_solid_claims: fresh,
            };
            let (score, breakdown) = score(AnalysisMode::PdfOnly, &inputs);
            let score = score.unwrap();
            prop_assert!((0.0..=100.0).contains(&score));
            prop_assert_eq!(breakdown.len(), 6);
        }
    }
}
