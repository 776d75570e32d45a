//! Citation markers and bibliography entries

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A normalized in-text citation token such as `[3]` or `(Smith, 2020)`
///
/// Normalization trims the token and collapses internal whitespace, so
/// `"[ 3 ]"` and `"[3]"` remain distinct but `"(Smith,  2020)"` and
/// `"(Smith, 2020)"` compare equal.
///
/// Ordering puts single-number bracket markers first, in numeric order, and
/// everything else after them in lexical order. This keeps `[2]` ahead of
/// `[10]` wherever markers are sorted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CitationMarker(String);

impl CitationMarker {
    /// Create a marker from raw text
    ///
    /// # Examples
    ///
    /// ```
    /// use scholia_domain::CitationMarker;
    ///
    /// let marker = CitationMarker::new("  (Smith,   2020) ");
    /// assert_eq!(marker.as_str(), "(Smith, 2020)");
    /// ```
    pub fn new(raw: &str) -> Self {
        Self(raw.split_whitespace().collect::<Vec<_>>().join(" "))
    }

    /// Create the bracket marker `[n]`
    pub fn numeric(n: u32) -> Self {
        Self(format!("[{}]", n))
    }

    /// The marker text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The reference number if this is a single-number bracket marker
    ///
    /// ```
    /// use scholia_domain::CitationMarker;
    ///
    /// assert_eq!(CitationMarker::new("[12]").number(), Some(12));
    /// assert_eq!(CitationMarker::new("[1, 2]").number(), None);
    /// ```
    pub fn number(&self) -> Option<u32> {
        self.0
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse().ok())
    }
}

impl fmt::Display for CitationMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Ord for CitationMarker {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.number(), other.number()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for CitationMarker {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One reference-list entry: marker plus its full bibliography text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BibliographyEntry {
    /// Marker the body text uses to cite this entry
    pub marker: CitationMarker,

    /// Whitespace-collapsed entry text
    pub full_text: String,
}

impl BibliographyEntry {
    /// Create a new entry
    pub fn new(marker: CitationMarker, full_text: impl Into<String>) -> Self {
        Self {
            marker,
            full_text: full_text.into(),
        }
    }
}
