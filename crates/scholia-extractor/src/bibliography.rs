//! Reference-list parsing

use regex::Regex;
use scholia_domain::{BibliographyEntry, CitationMarker};
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::debug;

static SECTION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:references|bibliography)\.?[ \t]*$").expect("valid regex")
});

static ENTRY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(\d+)\]").expect("valid regex"));

static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("valid regex"));

/// Parse `[n] text` entries out of a reference section
///
/// The list starts after the last `References`/`Bibliography` heading line,
/// or at the last `[1]` when there is no heading. Each entry runs until the
/// next bracket number. Entry text is whitespace-collapsed. When a number
/// appears twice the later entry wins. Entries come back in marker order.
///
/// # Examples
///
/// ```
/// use scholia_extractor::parse_bibliography;
///
/// let entries = parse_bibliography("References\n[1] Smith, A. Paper.\n  2020.\n[2] Lee, B. 2019.");
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].full_text, "Smith, A. Paper. 2020.");
/// ```
pub fn parse_bibliography(text: &str) -> Vec<BibliographyEntry> {
    let start = match SECTION_HEADER.find_iter(text).last() {
        Some(m) => m.end(),
        None => match text.rfind("[1]") {
            Some(pos) => pos,
            None => return Vec::new(),
        },
    };
    let section = &text[start..];

    let markers: Vec<_> = ENTRY_MARKER.captures_iter(section).collect();
    let mut entries: BTreeMap<CitationMarker, String> = BTreeMap::new();

    for (i, caps) in markers.iter().enumerate() {
        let (Some(whole), Some(number)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let rest = &section[whole.end()..];
        if !rest.starts_with(char::is_whitespace) {
            continue;
        }
        let end = markers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map(|m| m.start())
            .unwrap_or(section.len());
        let content = collapse_whitespace(&section[whole.end()..end]);
        if content.is_empty() {
            continue;
        }
        let Ok(n) = number.as_str().parse::<u32>() else {
            continue;
        };
        entries.insert(CitationMarker::numeric(n), content);
    }

    debug!(entries = entries.len(), "Parsed bibliography");
    entries
        .into_iter()
        .map(|(marker, full_text)| BibliographyEntry::new(marker, full_text))
        .collect()
}

/// First four-digit year (1900-2099) in the text
pub fn first_year(text: &str) -> Option<i32> {
    YEAR.find(text).and_then(|m| m.as_str().parse().ok())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
