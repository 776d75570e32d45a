//! DOI normalization

use regex::Regex;
use std::sync::LazyLock;

static DOI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)10\.\d{4,9}/[-._;()/:a-z0-9]+").expect("valid regex"));

/// Extract a lower-cased DOI from a raw string or URL
///
/// ```
/// use scholia_openalex::normalize_doi;
///
/// assert_eq!(
///     normalize_doi("https://doi.org/10.1038/NATURE14539").as_deref(),
///     Some("10.1038/nature14539")
/// );
/// assert_eq!(normalize_doi("not a doi"), None);
/// ```
pub fn normalize_doi(raw: &str) -> Option<String> {
    DOI.find(raw).map(|m| m.as_str().to_lowercase())
}
