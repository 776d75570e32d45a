//! Peer review synthesis
//!
//! Turns the rigor and novelty findings, a structure check of the body and
//! the integrity breakdown into reviewer-style strengths, weaknesses and
//! red flags.

use scholia_domain::{IntegrityBreakdown, NoveltyReport, PeerReview, RigorReport};

/// Sections a complete manuscript is expected to contain
const EXPECTED_SECTIONS: [&str; 4] = ["limitations", "conclusion", "future work", "related work"];

/// False-citation penalty above which the paper is flagged
const FALSE_CITATION_FLAG: f64 = 10.0;

/// Self-citation penalty above which the paper is flagged
const SELF_CITATION_FLAG: f64 = 20.0;

/// Build the review for one paper
///
/// Breakdown values are signed, so penalties are compared by magnitude.
pub fn generate_review(
    rigor: &RigorReport,
    novelty: &NoveltyReport,
    breakdown: &IntegrityBreakdown,
    text: &str,
) -> PeerReview {
    let mut review = PeerReview::default();

    let strengths = [
        (novelty.has_contribution_statement, "Clearly defined contribution statement found."),
        (
            novelty.is_novelty_specific,
            "Novelty claims are technically specific (not just generic boilerplate).",
        ),
        (
            novelty.has_scientific_gap,
            "Strong problem motivation; correctly identifies gaps in existing literature.",
        ),
        (rigor.has_ablation, "Includes ablation studies to verify component importance."),
        (rigor.has_baselines, "Compared against state-of-the-art baselines."),
        (
            rigor.has_statistical_validation,
            "Utilizes statistical validation (e.g., significance testing or variance reporting).",
        ),
        (
            rigor.has_reproducibility,
            "Reproducibility: Detected mentions of code, datasets, or training hyperparameters.",
        ),
        (
            rigor.has_methodological_depth,
            "Methodological Depth: Found formalized mathematical proofs or derivations.",
        ),
    ];
    review.strengths = strengths
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, s)| s.to_string())
        .collect();

    let weaknesses = [
        (
            rigor.has_ablation,
            "Lacks an explicit ablation study. It is difficult to assess the individual impact of proposed components.",
        ),
        (
            rigor.has_baselines,
            "Weak baseline comparison detected. Results might not be competitive with current state-of-the-art.",
        ),
        (
            rigor.has_statistical_validation,
            "No clear statistical significance testing or variance reports found. Performance gains might be marginal or due to chance.",
        ),
        (
            rigor.has_reproducibility,
            "Pre-submission Warning: No GitHub link or reproducibility section found. Highly recommended for top-tier acceptance.",
        ),
        (
            novelty.is_novelty_specific,
            "Contribution specificity is low. Consider detailing the exact architectural or algorithmic shift.",
        ),
        (
            novelty.has_scientific_gap,
            "Problem motivation is weak. The 'Why' behind this research gap is not clearly articulated.",
        ),
    ];
    review.weaknesses = weaknesses
        .iter()
        .filter(|(present, _)| !*present)
        .map(|(_, w)| w.to_string())
        .collect();

    let lower = text.to_lowercase();
    for section in EXPECTED_SECTIONS {
        if !lower.contains(section) {
            review.weaknesses.push(format!(
                "Structure Check: Potential missing or poorly labeled '{}' section.",
                capitalize(section)
            ));
        }
    }

    let penalty = |name: &str| -breakdown.get(name).unwrap_or(0.0);
    if penalty("false_citations") > FALSE_CITATION_FLAG {
        review.red_flags.push(
            "CRITICAL: High volume of contextual citation mismatches. This often correlates with LLM-hallucination or inaccurate literature review."
                .to_string(),
        );
    }
    if penalty("self_citation") > SELF_CITATION_FLAG {
        review.red_flags.push(
            "Heavy Self-Citation index. This can be flagged as 'Citation Gaming' by some reviewers."
                .to_string(),
        );
    }
    if penalty("outdated_datasets") > 0.0 {
        review.red_flags.push(
            "Usage of outdated/superseded benchmarks detected. Reviewers may question the relevance of performance gains on modern data."
                .to_string(),
        );
    }

    review
}

/// Upper-case the first letter and lower-case the rest
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
