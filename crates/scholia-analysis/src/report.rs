//! Report Assembler
//!
//! Composes the final report from every stage's output. Nothing here can
//! fail: absent signals are already empty collections or defaults.

use crate::citation_index::{CitationIndex, MISSING_ENTRY_NOTE};
use scholia_domain::{
    AnalysisMode, AnalysisReport, CitationMarker, CitationRecord, Claim, DatasetReport,
    FalseCitation, IntegrityBreakdown, NoveltyReport, PaperMetadata, PeerReview, RigorReport,
    SelfCitationReport,
};

/// Everything the pipeline produced for one run
#[derive(Debug, Clone)]
pub struct ReportParts {
    /// Selected mode
    pub mode: AnalysisMode,
    /// Title guessed from the document
    pub title_guess: Option<String>,
    /// Resolved metadata, when the mode uses it
    pub metadata: Option<PaperMetadata>,
    /// Verified and freshness-evaluated claims
    pub claims: Vec<Claim>,
    /// Distinct citation markers in the trusted body, first-seen order
    pub markers: Vec<CitationMarker>,
    /// The run's citation index
    pub index: CitationIndex,
    /// Self-citation signal
    pub self_citation: SelfCitationReport,
    /// False-citation signal
    pub false_citations: Vec<FalseCitation>,
    /// Dataset signal
    pub datasets: DatasetReport,
    /// Rigor indicators
    pub rigor: RigorReport,
    /// Novelty indicators
    pub novelty: NoveltyReport,
    /// Synthesized review
    pub review: PeerReview,
    /// Integrity score
    pub integrity_score: Option<f64>,
    /// Integrity breakdown
    pub integrity_breakdown: IntegrityBreakdown,
    /// Signals that fell back to defaults
    pub degraded_signals: Vec<String>,
}

/// Mean relevance over solid claims that recorded one, zero if none did
pub fn average_relevance(claims: &[Claim]) -> f64 {
    let scores: Vec<f64> = claims
        .iter()
        .filter(|c| c.is_solid())
        .filter_map(|c| c.relevance)
        .collect();
    if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    }
}

/// Cited references, deduplicated by bibliography text
///
/// Markers missing from the bibliography are listed by their literal text.
pub fn citation_list(markers: &[CitationMarker], index: &CitationIndex) -> Vec<String> {
    let mut list: Vec<String> = Vec::new();
    for marker in markers {
        let resolved = index.text(marker).unwrap_or(marker.as_str());
        if !list.iter().any(|c| c == resolved) {
            list.push(resolved.to_string());
        }
    }
    list
}

/// One record per cited marker, with a note for unresolved ones
pub fn detailed_citations(
    markers: &[CitationMarker],
    index: &CitationIndex,
) -> Vec<CitationRecord> {
    markers
        .iter()
        .map(|marker| CitationRecord {
            id: marker.clone(),
            full_text: index.text(marker).unwrap_or(MISSING_ENTRY_NOTE).to_string(),
        })
        .collect()
}

/// Build the report
pub fn assemble(parts: ReportParts) -> AnalysisReport {
    let title = parts
        .metadata
        .as_ref()
        .map(|m| m.title.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .or(parts.title_guess);

    let citation_count = if parts.index.is_empty() {
        parts.markers.len()
    } else {
        parts.index.len()
    };

    let avg_relevance = average_relevance(&parts.claims);
    let (solid_claims, vague_claims): (Vec<Claim>, Vec<Claim>) =
        parts.claims.into_iter().partition(Claim::is_solid);

    let mut degraded_signals: Vec<String> = Vec::new();
    for signal in parts.degraded_signals {
        if !degraded_signals.contains(&signal) {
            degraded_signals.push(signal);
        }
    }

    AnalysisReport {
        analysis_mode: parts.mode,
        title,
        paper: parts.metadata,
        integrity_score: parts.integrity_score,
        integrity_breakdown: parts.integrity_breakdown,
        solid_claims,
        vague_claims,
        avg_relevance,
        citation_count,
        citation_list: citation_list(&parts.markers, &parts.index),
        detailed_citations: detailed_citations(&parts.markers, &parts.index),
        bibliography: parts.index.entries(),
        self_citation: parts.self_citation,
        false_citations: parts.false_citations,
        datasets: parts.datasets,
        rigor: parts.rigor,
        novelty: parts.novelty,
        review: parts.review,
        degraded_signals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scholia_domain::{BibliographyEntry, ClaimLabel};

    fn index() -> CitationIndex {
        CitationIndex::build(
            vec![
                BibliographyEntry::new(CitationMarker::numeric(1), "Smith. Deep nets. 2019."),
                BibliographyEntry::new(CitationMarker::numeric(2), "Jones. Scaling. 2020."),
            ],
            None,
        )
    }

    fn parts(mode: AnalysisMode) -> ReportParts {
        ReportParts {
            mode,
            title_guess: None,
            metadata: None,
            claims: Vec::new(),
            markers: Vec::new(),
            index: CitationIndex::default(),
            self_citation: SelfCitationReport::default(),
            false_citations: Vec::new(),
            datasets: DatasetReport::default(),
            rigor: RigorReport::default(),
            novelty: NoveltyReport::default(),
            review: PeerReview::default(),
            integrity_score: None,
            integrity_breakdown: IntegrityBreakdown::new(),
            degraded_signals: Vec::new(),
        }
    }

    fn claim(label: ClaimLabel, relevance: Option<f64>) -> Claim {
        let mut claim = Claim::new("We show a result [1].", label, 0.9);
        claim.relevance = relevance;
        claim
    }

    #[test]
    fn test_average_relevance_uses_solid_claims() {
        let claims = vec![
            claim(ClaimLabel::Solid, Some(0.9)),
            claim(ClaimLabel::Solid, Some(0.8)),
            claim(ClaimLabel::Solid, None),
            claim(ClaimLabel::Vague, Some(0.1)),
        ];
        assert!((average_relevance(&claims) - 0.85).abs() < 1e-9);
        assert_eq!(average_relevance(&[]), 0.0);
    }

    #[test]
    fn test_citation_list_dedups_by_text() {
        let index = CitationIndex::build(
            vec![
                BibliographyEntry::new(CitationMarker::numeric(1), "Smith. Deep nets. 2019."),
                BibliographyEntry::new(CitationMarker::numeric(2), "Jones. Scaling. 2020."),
                BibliographyEntry::new(CitationMarker::numeric(3), "Jones. Scaling. 2020."),
            ],
            None,
        );
        let markers = vec![
            CitationMarker::numeric(2),
            CitationMarker::numeric(9),
            CitationMarker::numeric(1),
            CitationMarker::numeric(3),
        ];

        assert_eq!(
            citation_list(&markers, &index),
            vec![
                "Jones. Scaling. 2020.".to_string(),
                "[9]".to_string(),
                "Smith. Deep nets. 2019.".to_string(),
            ]
        );

        let detailed = detailed_citations(&markers, &index);
        assert_eq!(detailed.len(), 4);
        assert_eq!(detailed[1].full_text, MISSING_ENTRY_NOTE);
        assert_eq!(detailed[2].full_text, "Smith. Deep nets. 2019.");
    }

    #[test]
    fn test_empty_parts_give_empty_report() {
        let report = assemble(parts(AnalysisMode::DoiOnly));
        assert_eq!(report, AnalysisReport::empty(AnalysisMode::DoiOnly));
    }

    #[test]
    fn test_assemble_splits_claims_and_prefers_metadata_title() {
        let mut parts = parts(AnalysisMode::MatchedHybrid);
        parts.title_guess = Some("guessed title".into());
        parts.metadata = Some(PaperMetadata {
            title: "Sparse Attention at Scale".into(),
            ..Default::default()
        });
        parts.claims = vec![
            claim(ClaimLabel::Solid, Some(0.5)),
            claim(ClaimLabel::Vague, None),
        ];
        parts.index = index();
        parts.markers = vec![CitationMarker::numeric(1)];
        parts.degraded_signals = vec!["abstracts".into(), "abstracts".into()];

        let report = assemble(parts);
        assert_eq!(report.title.as_deref(), Some("Sparse Attention at Scale"));
        assert_eq!(report.solid_claims.len(), 1);
        assert_eq!(report.vague_claims.len(), 1);
        assert_eq!(report.avg_relevance, 0.5);
        assert_eq!(report.citation_count, 2);
        assert_eq!(report.bibliography.len(), 2);
        assert_eq!(report.degraded_signals, vec!["abstracts".to_string()]);
    }

    #[test]
    fn test_citation_count_falls_back_to_markers() {
        let mut parts = parts(AnalysisMode::PdfOnly);
        parts.markers = vec![CitationMarker::numeric(1), CitationMarker::new("(Smith, 2020)")];
        parts.title_guess = Some("A Guess".into());
        let report = assemble(parts);
        assert_eq!(report.citation_count, 2);
        assert_eq!(report.title.as_deref(), Some("A Guess"));
    }
}
