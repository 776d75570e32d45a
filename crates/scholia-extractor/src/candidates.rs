//! Cheap pre-filter deciding which sentences are worth classifying

/// Structural filler typical of manuscripts
const FILLER_KEYWORDS: &[&str] = &[
    "figure", "table", "section", "chapter", "below", "following", "above", "et al.", "i.e.",
    "e.g.",
];

/// Vocabulary of research assertions
const CLAIM_INDICATORS: &[&str] = &[
    "propose",
    "method",
    "achieve",
    "result",
    "finding",
    "conclude",
    "demonstrate",
    "evidence",
    "significant",
    "superior",
    "improve",
];

/// Filler sentences at least this long are still considered
const FILLER_MAX_LEN: usize = 100;

/// Whether a sentence looks like a research claim
///
/// Short sentences that mention figures, tables or sections are rejected.
/// Otherwise a sentence qualifies if it uses claim vocabulary or speaks in
/// the first-person plural.
///
/// ```
/// use scholia_extractor::is_claim_like;
///
/// assert!(is_claim_like("We propose a sparse attention mechanism."));
/// assert!(!is_claim_like("Table 2 lists the hyperparameters."));
/// assert!(!is_claim_like("The sky is blue."));
/// ```
pub fn is_claim_like(sentence: &str) -> bool {
    let lower = sentence.trim().to_lowercase();

    if lower.len() < FILLER_MAX_LEN && FILLER_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return false;
    }

    if CLAIM_INDICATORS.iter().any(|k| lower.contains(k)) {
        return true;
    }

    lower.contains("we ") || lower.contains("our ")
}
