//! Bibliographic metadata fetched for a DOI or title

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An author as known to the metadata source
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Author {
    /// Source-specific author identifier
    pub id: String,

    /// Display name
    pub name: String,
}

/// Externally fetched record describing the analyzed paper
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PaperMetadata {
    /// Source-specific work identifier
    #[serde(default)]
    pub id: Option<String>,

    /// Normalized DOI
    #[serde(default)]
    pub doi: Option<String>,

    /// Title as recorded by the source
    #[serde(default)]
    pub title: String,

    /// Publication year
    #[serde(default)]
    pub publication_year: Option<i32>,

    /// Number of works citing this paper
    #[serde(default)]
    pub cited_by_count: u64,

    /// Authors of this paper
    #[serde(default)]
    pub authors: Vec<Author>,

    /// Identifiers of the works in this paper's reference list, in list order
    #[serde(default)]
    pub referenced_work_ids: Vec<String>,
}

impl PaperMetadata {
    /// Identifiers of this paper's authors
    pub fn author_ids(&self) -> HashSet<&str> {
        self.authors.iter().map(|a| a.id.as_str()).collect()
    }

    /// Work identifier aligned with reference number `n` (1-based)
    ///
    /// Reference lists are numbered in the order the source reports them,
    /// so `[n]` maps to the n-th referenced work.
    pub fn work_for_reference(&self, n: u32) -> Option<&str> {
        let idx = usize::try_from(n).ok()?.checked_sub(1)?;
        self.referenced_work_ids.get(idx).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PaperMetadata {
        PaperMetadata {
            authors: vec![
                Author { id: "A1".into(), name: "Ada".into() },
                Author { id: "A2".into(), name: "Bo".into() },
            ],
            referenced_work_ids: vec!["W1".into(), "W2".into()],
            ..Default::default()
        }
    }

    #[test]
    fn test_author_ids() {
        let meta = sample();
        let ids = meta.author_ids();
        assert!(ids.contains("A1"));
        assert!(ids.contains("A2"));
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_work_for_reference() {
        let meta = sample();
        assert_eq!(meta.work_for_reference(1), Some("W1"));
        assert_eq!(meta.work_for_reference(2), Some("W2"));
        assert_eq!(meta.work_for_reference(0), None);
        assert_eq!(meta.work_for_reference(3), None);
    }
}
