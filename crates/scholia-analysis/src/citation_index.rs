//! Citation Index: marker to bibliography text, year and work lookup

use scholia_domain::{BibliographyEntry, CitationMarker, PaperMetadata};
use scholia_extractor::first_year;
use std::collections::BTreeMap;

/// Note recorded for a cited marker missing from the bibliography
pub const MISSING_ENTRY_NOTE: &str = "Full citation text not found in bibliography.";

#[derive(Debug, Clone, PartialEq)]
struct IndexedReference {
    full_text: String,
    year: Option<i32>,
    work_id: Option<String>,
}

/// Lookup from citation marker to everything known about the reference
///
/// Built once per run and read-only afterwards. Its size is the number of
/// distinct markers, never the number of citation occurrences.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CitationIndex {
    references: BTreeMap<CitationMarker, IndexedReference>,
}

impl CitationIndex {
    /// Index a parsed bibliography
    ///
    /// When metadata is available, numeric marker `[n]` is aligned with the
    /// n-th referenced work.
    pub fn build(entries: Vec<BibliographyEntry>, metadata: Option<&PaperMetadata>) -> Self {
        let mut references = BTreeMap::new();
        for entry in entries {
            let work_id = metadata
                .zip(entry.marker.number())
                .and_then(|(meta, n)| meta.work_for_reference(n))
                .map(str::to_string);
            let reference = IndexedReference {
                year: first_year(&entry.full_text),
                full_text: entry.full_text,
                work_id,
            };
            references.insert(entry.marker, reference);
        }
        Self { references }
    }

    /// Bibliography text of a marker
    pub fn text(&self, marker: &CitationMarker) -> Option<&str> {
        self.references.get(marker).map(|r| r.full_text.as_str())
    }

    /// Publication year found in the bibliography text
    pub fn year(&self, marker: &CitationMarker) -> Option<i32> {
        self.references.get(marker).and_then(|r| r.year)
    }

    /// Referenced-work identifier aligned with the marker
    pub fn work_id(&self, marker: &CitationMarker) -> Option<&str> {
        self.references.get(marker).and_then(|r| r.work_id.as_deref())
    }

    /// Whether the marker has a bibliography entry
    pub fn contains(&self, marker: &CitationMarker) -> bool {
        self.references.contains_key(marker)
    }

    /// Number of distinct references
    pub fn len(&self) -> usize {
        self.references.len()
    }

    /// Whether the bibliography is empty
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Entries sorted by marker
    pub fn entries(&self) -> Vec<BibliographyEntry> {
        self.references
            .iter()
            .map(|(marker, r)| BibliographyEntry::new(marker.clone(), r.full_text.clone()))
            .collect()
    }

    /// Bibliography texts, sorted by marker
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.references.values().map(|r| r.full_text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<BibliographyEntry> {
        vec![
            BibliographyEntry::new(CitationMarker::numeric(2), "Jones. Scaling laws. 2020."),
            BibliographyEntry::new(CitationMarker::numeric(1), "Smith and Lee. Deep nets. 2019."),
            BibliographyEntry::new(CitationMarker::numeric(3), "Undated preprint."),
        ]
    }

    #[test]
    fn test_lookup_by_marker() {
        let index = CitationIndex::build(entries(), None);
        assert_eq!(index.len(), 3);
        assert_eq!(
            index.text(&CitationMarker::numeric(2)),
            Some("Jones. Scaling laws. 2020.")
        );
        assert_eq!(index.year(&CitationMarker::numeric(1)), Some(2019));
        assert_eq!(index.year(&CitationMarker::numeric(3)), None);
        assert!(!index.contains(&CitationMarker::numeric(4)));
        assert!(index.work_id(&CitationMarker::numeric(1)).is_none());
    }

    #[test]
    fn test_entries_sorted_by_marker() {
        let index = CitationIndex::build(entries(), None);
        let markers: Vec<_> = index.entries().into_iter().map(|e| e.marker).collect();
        assert_eq!(
            markers,
            vec![
                CitationMarker::numeric(1),
                CitationMarker::numeric(2),
                CitationMarker::numeric(3)
            ]
        );
    }

    #[test]
    fn test_markers_align_with_referenced_works() {
        let meta = PaperMetadata {
            referenced_work_ids: vec!["W10".into(), "W20".into()],
            ..Default::default()
        };
        let index = CitationIndex::build(entries(), Some(&meta));
        assert_eq!(index.work_id(&CitationMarker::numeric(1)), Some("W10"));
        assert_eq!(index.work_id(&CitationMarker::numeric(2)), Some("W20"));
        assert_eq!(index.work_id(&CitationMarker::numeric(3)), None);
    }

    #[test]
    fn test_duplicate_markers_count_once() {
        let mut list = entries();
        list.push(BibliographyEntry::new(CitationMarker::numeric(1), "Replacement. 2021."));
        let index = CitationIndex::build(list, None);
        assert_eq!(index.len(), 3);
        assert_eq!(index.year(&CitationMarker::numeric(1)), Some(2021));
    }
}
