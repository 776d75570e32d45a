//! Freshness Evaluator
//!
//! Combines the ages of a claim's cited references with the claim's decay
//! category. Each moving variable the decay classifier reports accelerates
//! decay by 20%.

use crate::citation_index::CitationIndex;
use crate::collaborators::Collaborators;
use scholia_domain::{Claim, DecayAnalysis, Freshness};
use scholia_extractor::extract_citation_contexts;
use tracing::warn;

/// Decay acceleration per moving variable
pub const ACCELERATION_PER_VARIABLE: f64 = 0.2;

/// Multiple of the effective half-life at which freshness reaches zero
pub const FRESHNESS_SPAN: f64 = 2.5;

/// Freshness of a claim citing references from `cited_years`
///
/// # Examples
///
/// ```
/// use scholia_analysis::freshness::compute_freshness;
/// use scholia_domain::{DecayAnalysis, DecayType};
///
/// let analysis = DecayAnalysis {
///     decay_type: DecayType::Medium,
///     ..Default::default()
/// };
/// let freshness = compute_freshness(&[2016], analysis, 2026);
/// assert!(freshness.is_outdated);
/// assert_eq!(freshness.freshness_score, 0.0);
/// ```
pub fn compute_freshness(
    cited_years: &[i32],
    analysis: DecayAnalysis,
    current_year: i32,
) -> Freshness {
    let half_life = analysis.decay_type.half_life();
    let mut freshness = Freshness {
        is_outdated: false,
        decay_type: analysis.decay_type,
        freshness_score: 100.0,
        cited_years: cited_years.to_vec(),
        half_life,
        reason: analysis.reason,
        moving_variables: analysis.moving_variables,
        stress_test: analysis.stress_test,
        consensus: analysis.consensus,
    };
    if cited_years.is_empty() {
        return freshness;
    }

    let mean_year =
        cited_years.iter().map(|&y| f64::from(y)).sum::<f64>() / cited_years.len() as f64;
    let age = f64::from(current_year) - mean_year;
    let accelerator = 1.0 + ACCELERATION_PER_VARIABLE * freshness.moving_variables.len() as f64;

    let span = half_life * FRESHNESS_SPAN / accelerator;
    freshness.freshness_score = (100.0 * (1.0 - age / span)).clamp(0.0, 100.0);
    freshness.is_outdated = age > half_life / accelerator;
    freshness
}

/// Years of the bibliography entries a claim cites, ordered by marker
pub fn cited_years(claim_text: &str, index: &CitationIndex) -> Vec<i32> {
    extract_citation_contexts(&[claim_text])
        .keys()
        .filter_map(|marker| index.year(marker))
        .collect()
}

/// Evaluate every claim in place
///
/// When the decay classifier fails for a claim, its freshness is computed
/// with an unclassified decay type. Returns whether any call failed.
pub async fn evaluate_all(
    claims: &mut [Claim],
    index: &CitationIndex,
    collaborators: &Collaborators,
    current_year: i32,
) -> bool {
    let mut degraded = false;
    for claim in claims.iter_mut() {
        let analysis = match collaborators.decay_analysis(&claim.text).await {
            Ok(analysis) => analysis,
            Err(e) => {
                warn!(error = %e, kind = e.kind(), "Decay analysis failed");
                degraded = true;
                DecayAnalysis::default()
            }
        };
        let years = cited_years(&claim.text, index);
        claim.freshness = compute_freshness(&years, analysis, current_year);
    }
    degraded
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use scholia_domain::{BibliographyEntry, CitationMarker, DecayType};

    fn analysis(decay_type: DecayType, moving: usize) -> DecayAnalysis {
        DecayAnalysis {
            decay_type,
            moving_variables: (0..moving).map(|i| format!("var{}", i)).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_years_is_fresh() {
        let freshness = compute_freshness(&[], analysis(DecayType::Fast, 3), 2026);
        assert!(!freshness.is_outdated);
        assert_eq!(freshness.freshness_score, 100.0);
        assert_eq!(freshness.half_life, 1.5);
        assert_eq!(freshness.decay_type, DecayType::Fast);
    }

    #[test]
    fn test_slow_claim_ages_gracefully() {
        // age 6, span 37.5 => 84
        let freshness = compute_freshness(&[2020], analysis(DecayType::Slow, 0), 2026);
        assert!(!freshness.is_outdated);
        assert!((freshness.freshness_score - 84.0).abs() < 1e-9);
    }

    #[test]
    fn test_moving_variables_accelerate_decay() {
        // Medium: half-life 4. Age 3 is fresh alone but outdated with
        // accelerator 1.4 (threshold 4 / 1.4 = 2.86)
        let plain = compute_freshness(&[2023], analysis(DecayType::Medium, 0), 2026);
        let moving = compute_freshness(&[2023], analysis(DecayType::Medium, 2), 2026);
        assert!(!plain.is_outdated);
        assert!(moving.is_outdated);
        assert!(moving.freshness_score < plain.freshness_score);
    }

    #[test]
    fn test_mean_of_cited_years() {
        // mean 2018, age 8, unclassified half-life 5, span 12.5 => 36
        let freshness =
            compute_freshness(&[2016, 2020], analysis(DecayType::Unclassified, 0), 2026);
        assert!(freshness.is_outdated);
        assert!((freshness.freshness_score - 36.0).abs() < 1e-9);
    }

    #[test]
    fn test_future_years_clamp_to_full_freshness() {
        let freshness = compute_freshness(&[2030], analysis(DecayType::Fast, 0), 2026);
        assert_eq!(freshness.freshness_score, 100.0);
        assert!(!freshness.is_outdated);
    }

    #[test]
    fn test_cited_years_expand_ranges() {
        let index = CitationIndex::build(
            vec![
                BibliographyEntry::new(CitationMarker::numeric(1), "A. 2010."),
                BibliographyEntry::new(CitationMarker::numeric(2), "B. 2012."),
                BibliographyEntry::new(CitationMarker::numeric(3), "C. no year."),
            ],
            None,
        );
        assert_eq!(cited_years("As shown [1-3].", &index), vec![2010, 2012]);
        assert!(cited_years("No citations here.", &index).is_empty());
    }

    fn decay_types() -> impl Strategy<Value = DecayType> {
        prop_oneof![
            Just(DecayType::Fast),
            Just(DecayType::Medium),
            Just(DecayType::Slow),
            Just(DecayType::Timeless),
            Just(DecayType::Unclassified),
        ]
    }

    proptest! {
        #[test]
        fn prop_current_year_citations_are_fresh(
            decay_type in decay_types(),
            moving in 0usize..6,
            count in 1usize..5,
            year in 1990i32..2100,
        ) {
            let years = vec![year; count];
            let freshness = compute_freshness(&years, analysis(decay_type, moving), year);
            prop_assert_eq!(freshness.freshness_score, 100.0);
            prop_assert!(!freshness.is_outdated);
        }

        #[test]
        fn prop_score_in_range(
            decay_type in decay_types(),
            moving in 0usize..10,
            years in proptest::collection::vec(1900i32..2100, 0..6),
            current in 1900i32..2100,
        ) {
            let freshness = compute_freshness(&years, analysis(decay_type, moving), current);
            prop_assert!((0.0..=100.0).contains(&freshness.freshness_score));
        }
    }
}
