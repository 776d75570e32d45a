//! Self-citation ratio
//!
//! With metadata, a referenced work is a self-citation when it shares at
//! least one author identifier with the analyzed paper. Without metadata,
//! author surnames guessed from the top of the manuscript are searched in
//! the bibliography text.

use regex::Regex;
use scholia_domain::{PaperMetadata, SelfCitationMethod, SelfCitationReport};
use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

/// Runs of two to four capitalized words, as in "Jane Q. Smith"
static NAME_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][a-zA-Z'\-]+(?:\s+(?:[A-Z]\.|[A-Z][a-zA-Z'\-]+)){1,3}\b")
        .expect("valid regex")
});

/// Capitalized words that start name-like spans in headers but are not names
const NON_NAMES: &[&str] = &[
    "Abstract", "Introduction", "University", "Department", "Institute", "School",
    "College", "Laboratory", "Lab", "Research", "Center", "Centre", "Science", "Sciences",
    "Engineering", "Technology", "Computer", "Learning", "Deep", "Neural", "Network",
    "Networks", "Model", "Models", "Data", "Analysis", "Conference", "Journal",
    "Proceedings", "Email", "Keywords", "Inc", "Corporation", "Google", "Microsoft",
    "Meta", "The", "And", "For", "With", "Towards", "Using", "Via",
];

/// Ratio from referenced-work author sets
///
/// The denominator is the number of referenced works the metadata lists.
pub fn api_self_citation(
    metadata: &PaperMetadata,
    authors_by_work: &HashMap<String, Vec<String>>,
) -> SelfCitationReport {
    let own = metadata.author_ids();
    let count = metadata
        .referenced_work_ids
        .iter()
        .filter(|work| {
            authors_by_work
                .get(*work)
                .is_some_and(|authors| authors.iter().any(|a| own.contains(a.as_str())))
        })
        .count();
    SelfCitationReport::from_counts(
        count,
        metadata.referenced_work_ids.len(),
        SelfCitationMethod::Api,
    )
}

/// Plausible author surnames from the first `scan_lines` lines of the body
///
/// Each two-to-four word capitalized span contributes its last word.
pub fn extract_author_surnames(body: &str, scan_lines: usize) -> BTreeSet<String> {
    body.lines()
        .take(scan_lines)
        .flat_map(|line| NAME_SPAN.find_iter(line))
        .filter_map(|span| {
            let words: Vec<&str> = span.as_str().split_whitespace().collect();
            if words.iter().any(|w| NON_NAMES.contains(w)) {
                return None;
            }
            let surname = words.last()?.trim_end_matches('.');
            (surname.chars().count() > 1).then(|| surname.to_string())
        })
        .collect()
}

/// Ratio of bibliography entries mentioning any of the surnames
///
/// Matching is a case-insensitive substring test.
pub fn heuristic_self_citation<'a>(
    surnames: &BTreeSet<String>,
    bibliography: impl IntoIterator<Item = &'a str>,
) -> SelfCitationReport {
    let lowered: Vec<String> = surnames.iter().map(|s| s.to_lowercase()).collect();
    let mut total = 0;
    let mut count = 0;
    for entry in bibliography {
        total += 1;
        let entry = entry.to_lowercase();
        if lowered.iter().any(|s| entry.contains(s.as_str())) {
            count += 1;
        }
    }
    let method = if lowered.is_empty() {
        SelfCitationMethod::None
    } else {
        SelfCitationMethod::Heuristic
    };
    SelfCitationReport::from_counts(count, total, method)
}
