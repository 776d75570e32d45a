//! The analysis report and its integrity breakdown

use crate::citation::{BibliographyEntry, CitationMarker};
use crate::claim::Claim;
use crate::insight::{NoveltyReport, PeerReview, RigorReport};
use crate::metadata::PaperMetadata;
use crate::mode::AnalysisMode;
use crate::signals::{DatasetReport, FalseCitation, SelfCitationReport};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One named, signed contribution to the integrity score
///
/// Penalties are negative, bonuses positive.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownEntry {
    /// Term name
    pub name: String,
    /// Signed contribution
    pub value: f64,
}

/// Ordered mapping from term name to signed contribution
///
/// Serializes as a JSON object whose keys keep insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IntegrityBreakdown {
    entries: Vec<BreakdownEntry>,
}

impl IntegrityBreakdown {
    /// Create an empty breakdown
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a term, replacing the value of an existing term with the same name
    pub fn push(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.value = value,
            None => self.entries.push(BreakdownEntry { name, value }),
        }
    }

    /// Value of a term
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.value)
    }

    /// Terms in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &BreakdownEntry> {
        self.entries.iter()
    }

    /// Number of terms
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no terms were recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all signed contributions
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.value).sum()
    }
}

impl Serialize for IntegrityBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.value)?;
        }
        map.end()
    }
}

/// A cited marker with its resolved bibliography text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CitationRecord {
    /// The marker
    pub id: CitationMarker,
    /// Bibliography text, or a note that none was found
    pub full_text: String,
}

/// The final, immutable result of one analysis run
///
/// Every field is always present. Signals that were gated off by the mode or
/// degraded by a collaborator failure appear as empty collections, zero
/// counts, or a `null` score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Trust state chosen for this run
    pub analysis_mode: AnalysisMode,

    /// Title from metadata when available, else the document's guessed title
    pub title: Option<String>,

    /// Resolved metadata, when a DOI resolved
    pub paper: Option<PaperMetadata>,

    /// Score in [0, 100], `null` when the mode forbids scoring
    pub integrity_score: Option<f64>,

    /// Signed terms that produced the score, empty when unscored
    pub integrity_breakdown: IntegrityBreakdown,

    /// Claims labelled solid, in document order
    pub solid_claims: Vec<Claim>,

    /// Claims labelled vague, in document order
    pub vague_claims: Vec<Claim>,

    /// Mean verifier relevance over solid claims that had one
    pub avg_relevance: f64,

    /// Number of distinct references
    pub citation_count: usize,

    /// Resolved bibliography texts cited in the body, deduplicated
    pub citation_list: Vec<String>,

    /// Every cited marker with its bibliography text
    pub detailed_citations: Vec<CitationRecord>,

    /// Parsed bibliography, sorted by marker
    pub bibliography: Vec<BibliographyEntry>,

    /// Self-citation signal
    pub self_citation: SelfCitationReport,

    /// False-citation signal
    pub false_citations: Vec<FalseCitation>,

    /// Dataset freshness signal
    pub datasets: DatasetReport,

    /// Rigor indicators
    pub rigor: RigorReport,

    /// Novelty indicators
    pub novelty: NoveltyReport,

    /// Reviewer-style synthesis
    pub review: PeerReview,

    /// Signals that fell back to their default after a collaborator failure
    pub degraded_signals: Vec<String>,
}

impl AnalysisReport {
    /// Empty report for a mode, with nothing analyzed yet
    pub fn empty(analysis_mode: AnalysisMode) -> Self {
        Self {
            analysis_mode,
            title: None,
            paper: None,
            integrity_score: None,
            integrity_breakdown: IntegrityBreakdown::new(),
            solid_claims: Vec::new(),
            vague_claims: Vec::new(),
            avg_relevance: 0.0,
            citation_count: 0,
            citation_list: Vec::new(),
            detailed_citations: Vec::new(),
            bibliography: Vec::new(),
            self_citation: SelfCitationReport::default(),
            false_citations: Vec::new(),
            datasets: DatasetReport::default(),
            rigor: RigorReport::default(),
            novelty: NoveltyReport::default(),
            review: PeerReview::default(),
            degraded_signals: Vec::new(),
        }
    }
}
