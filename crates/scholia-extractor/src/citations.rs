//! In-text citation markers and their context sentences

use regex::Regex;
use scholia_domain::CitationMarker;
use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

/// Author-year `(Smith, 2020)` / `(Doe et al., 2019)` or bracket `[1]`,
/// `[1, 2]`, `[1-3]`
static ANY_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\([A-Z][a-zA-Z\s]+(?:et al\.)?,\s*\d{4}\)|\[\d+(?:\s*[,\-–]\s*\d+)*\]",
    )
    .expect("valid regex")
});

static SINGLE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(\d+)\]").expect("valid regex"));

/// Ranges wider than this are treated as typos and only their endpoints kept
const MAX_RANGE_SPAN: u32 = 50;

/// Every citation marker in the text, first-seen order, without duplicates
///
/// ```
/// use scholia_extractor::extract_citation_markers;
///
/// let markers = extract_citation_markers("As in [2] and (Doe et al., 2019), see [1-3] and [2].");
/// let found: Vec<&str> = markers.iter().map(|m| m.as_str()).collect();
/// assert_eq!(found, vec!["[2]", "(Doe et al., 2019)", "[1-3]"]);
/// ```
pub fn extract_citation_markers(text: &str) -> Vec<CitationMarker> {
    dedup(ANY_MARKER.find_iter(text).map(|m| CitationMarker::new(m.as_str())))
}

/// Single-number bracket markers `[n]` in the text, first-seen order
///
/// Lists and ranges are not expanded: `[1, 2]` yields nothing.
pub fn numeric_markers(text: &str) -> Vec<CitationMarker> {
    dedup(
        SINGLE_NUMBER
            .captures_iter(text)
            .filter_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
            .map(CitationMarker::numeric),
    )
}

/// Map each cited reference to the sentences that cite it
///
/// Bracket lists and ranges are expanded to their individual numbers, so a
/// sentence citing `[1-3]` is a context of `[1]`, `[2]` and `[3]`. A sentence
/// appears at most once per marker.
pub fn extract_citation_contexts<S: AsRef<str>>(
    sentences: &[S],
) -> BTreeMap<CitationMarker, Vec<String>> {
    let mut contexts: BTreeMap<CitationMarker, Vec<String>> = BTreeMap::new();

    for sentence in sentences {
        let sentence = sentence.as_ref().trim();
        if sentence.is_empty() {
            continue;
        }
        let markers = dedup(
            ANY_MARKER
                .find_iter(sentence)
                .flat_map(|m| expand_marker(m.as_str())),
        );
        for marker in markers {
            contexts.entry(marker).or_default().push(sentence.to_string());
        }
    }

    contexts
}

/// Expand a raw marker into the references it denotes
fn expand_marker(raw: &str) -> Vec<CitationMarker> {
    let Some(inner) = raw.strip_prefix('[').and_then(|r| r.strip_suffix(']')) else {
        return vec![CitationMarker::new(raw)];
    };

    let mut out = Vec::new();
    for part in inner.split(',') {
        let part = part.trim();
        let bounds: Vec<u32> = part
            .split(['-', '–'])
            .filter_map(|n| n.trim().parse().ok())
            .collect();
        match bounds.as_slice() {
            [n] => out.push(CitationMarker::numeric(*n)),
            [lo, hi] if lo <= hi && hi - lo <= MAX_RANGE_SPAN => {
                out.extend((*lo..=*hi).map(CitationMarker::numeric));
            }
            [a, b] => {
                out.push(CitationMarker::numeric(*a));
                out.push(CitationMarker::numeric(*b));
            }
            _ => {}
        }
    }
    out
}

fn dedup(markers: impl Iterator<Item = CitationMarker>) -> Vec<CitationMarker> {
    let mut seen = HashSet::new();
    markers.filter(|m| seen.insert(m.clone())).collect()
}
