//! The analysis orchestrator
//!
//! Runs every stage in order for one request: mode resolution, citation
//! index, claims, verification, freshness, integrity signals, scoring,
//! review, assembly. Collaborator failures degrade a single signal; only
//! the mode decision can abort a run.

use crate::citation_index::CitationIndex;
use crate::claims::extract_claims;
use crate::collaborators::Collaborators;
use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::freshness::evaluate_all;
use crate::mode::resolve_mode;
use crate::novelty::analyze_novelty;
use crate::report::{assemble, average_relevance, ReportParts};
use crate::review::generate_review;
use crate::rigor::analyze_rigor;
use crate::scoring::{score, ScoreInputs};
use crate::signals::{
    api_self_citation, comparison_targets, detect_false_citations, extract_author_surnames,
    heuristic_self_citation, DatasetCatalog,
};
use crate::verifier::verify_all;
use scholia_domain::{
    AnalysisReport, CitationMarker, Claim, FalseCitation, PaperMetadata, PeerReview,
    SelfCitationReport,
};
use scholia_extractor::{
    extract_citation_contexts, extract_citation_markers, guess_title, load_document,
    parse_bibliography, Document, ExtractorConfig,
};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use tracing::{debug, field, info, info_span, warn, Instrument, Span};
use uuid::Uuid;

/// What to analyze
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    /// Extracted manuscript text
    pub document: Option<Document>,
    /// DOI of the paper
    pub doi: Option<String>,
    /// File the document came from, used for the title fallback
    pub source_path: Option<PathBuf>,
    /// Year ages are measured against
    pub current_year: i32,
}

impl AnalysisRequest {
    /// An empty request measured against `current_year`
    pub fn new(current_year: i32) -> Self {
        Self {
            document: None,
            doi: None,
            source_path: None,
            current_year,
        }
    }

    /// Load a manuscript from disk
    pub fn from_path(path: &Path, config: &ExtractorConfig, current_year: i32) -> Result<Self> {
        let document = load_document(path, config)?;
        Ok(Self {
            document: Some(document),
            source_path: Some(path.to_path_buf()),
            ..Self::new(current_year)
        })
    }

    /// Attach an already extracted document
    pub fn with_document(mut self, document: Document) -> Self {
        self.document = Some(document);
        self
    }

    /// Attach a DOI
    pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
        self.doi = Some(doi.into());
        self
    }
}

/// Runs analysis requests against one set of collaborators
pub struct Analyzer {
    collaborators: Collaborators,
    config: AnalysisConfig,
    catalog: DatasetCatalog,
}

impl Analyzer {
    /// Create an analyzer
    ///
    /// The configured collaborator timeout replaces the bundle's.
    pub fn new(collaborators: Collaborators, config: AnalysisConfig) -> Result<Self> {
        config.validate().map_err(AnalysisError::Config)?;
        Ok(Self {
            collaborators: collaborators.with_timeout(config.collaborator_timeout()),
            config,
            catalog: DatasetCatalog::builtin(),
        })
    }

    /// Use a different dataset catalog
    pub fn with_catalog(mut self, catalog: DatasetCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Active configuration
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze one request
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::NoInput`] when neither a document nor a DOI is given
    /// - [`AnalysisError::MetadataNotFound`] when a DOI-only request does not
    ///   resolve
    pub async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisReport> {
        let span = info_span!("analysis", run_id = %Uuid::now_v7(), mode = field::Empty);
        self.run(request, span.clone()).instrument(span).await
    }

    async fn run(&self, request: AnalysisRequest, span: Span) -> Result<AnalysisReport> {
        let mut degraded: Vec<String> = Vec::new();

        let title_guess = request
            .document
            .as_ref()
            .and_then(|d| guess_title(&d.body, request.source_path.as_deref()));
        let resolution = resolve_mode(
            request.document.is_some(),
            request.doi.as_deref(),
            title_guess.as_deref(),
            &self.collaborators,
        )
        .await?;
        let mode = resolution.mode;
        let metadata = resolution.metadata;
        span.record("mode", mode.as_str());
        if resolution.lookup_failed {
            degraded.push("metadata".to_string());
        }

        let trusted = request.document.filter(|_| mode.trusts_document());
        let entries = trusted
            .as_ref()
            .map(|d| parse_bibliography(d.bibliography_source()))
            .unwrap_or_default();
        let index = CitationIndex::build(entries, metadata.as_ref());
        info!(references = index.len(), "Citation index built");

        let body = trusted.as_ref().map(|d| d.body.as_str());
        let self_citation = self
            .self_citation(metadata.as_ref(), body, &index, &mut degraded)
            .await;

        let mut parts = ReportParts {
            mode,
            title_guess,
            metadata,
            claims: Vec::new(),
            markers: Vec::new(),
            index,
            self_citation,
            false_citations: Vec::new(),
            datasets: Default::default(),
            rigor: Default::default(),
            novelty: Default::default(),
            review: PeerReview::default(),
            integrity_score: None,
            integrity_breakdown: Default::default(),
            degraded_signals: Vec::new(),
        };

        if let Some(body) = body {
            parts.claims = self
                .claims(body, &parts.index, request.current_year, &mut degraded)
                .await;

            let sentences = self.collaborators.split_sentences(body);
            let contexts = extract_citation_contexts(&sentences);
            parts.markers = extract_citation_markers(body);
            parts.false_citations = self
                .false_citations(&contexts, &parts.index, &mut degraded)
                .await;

            let found = self.catalog.extract(body);
            parts.datasets = self.catalog.analyze(
                &found,
                request.current_year,
                self.config.dataset_age_threshold,
            );
            parts.rigor = analyze_rigor(body);
            parts.novelty = analyze_novelty(&sentences, body);
        }

        let inputs = self.score_inputs(&parts);
        let (integrity_score, breakdown) = score(mode, &inputs);
        if let Some(body) = body {
            parts.review = generate_review(&parts.rigor, &parts.novelty, &breakdown, body);
        }
        parts.integrity_score = integrity_score;
        parts.integrity_breakdown = breakdown;
        parts.degraded_signals = degraded;

        let report = assemble(parts);
        info!(
            mode = %report.analysis_mode,
            solid = report.solid_claims.len(),
            vague = report.vague_claims.len(),
            score = ?report.integrity_score,
            degraded = report.degraded_signals.len(),
            "Analysis complete"
        );
        Ok(report)
    }

    async fn claims(
        &self,
        body: &str,
        index: &CitationIndex,
        current_year: i32,
        degraded: &mut Vec<String>,
    ) -> Vec<Claim> {
        let mut claims = match extract_claims(
            &self.collaborators,
            body,
            self.config.min_sentence_length,
            self.config.vague_score_threshold,
        )
        .await
        {
            Ok(claims) => claims,
            Err(e) => {
                warn!(error = %e, kind = e.kind(), signal = "claims", "Claim classification failed");
                degraded.push("claims".to_string());
                return Vec::new();
            }
        };

        if verify_all(
            &mut claims,
            index,
            &self.collaborators,
            self.config.relevance_threshold,
        )
        .await
        {
            degraded.push("claim_verification".to_string());
        }
        if evaluate_all(&mut claims, index, &self.collaborators, current_year).await {
            degraded.push("freshness".to_string());
        }
        claims
    }

    /// API ratio when the metadata lists referenced works, otherwise the
    /// surname heuristic over the trusted body
    async fn self_citation(
        &self,
        metadata: Option<&PaperMetadata>,
        body: Option<&str>,
        index: &CitationIndex,
        degraded: &mut Vec<String>,
    ) -> SelfCitationReport {
        if let Some(meta) = metadata.filter(|m| !m.referenced_work_ids.is_empty()) {
            match self
                .collaborators
                .authors_for_works(meta.referenced_work_ids.clone())
                .await
            {
                Ok(authors) => return api_self_citation(meta, &authors),
                Err(e) => {
                    warn!(error = %e, kind = e.kind(), signal = "self_citation", "Author lookup failed");
                    degraded.push("self_citation".to_string());
                }
            }
        }

        match body {
            Some(body) => {
                let surnames = extract_author_surnames(body, self.config.author_scan_lines);
                debug!(surnames = surnames.len(), "Guessed author surnames");
                heuristic_self_citation(&surnames, index.texts())
            }
            None => SelfCitationReport::default(),
        }
    }

    async fn false_citations(
        &self,
        contexts: &BTreeMap<CitationMarker, Vec<String>>,
        index: &CitationIndex,
        degraded: &mut Vec<String>,
    ) -> Vec<FalseCitation> {
        if contexts.is_empty() {
            return Vec::new();
        }

        let work_ids: Vec<String> = contexts
            .keys()
            .filter_map(|marker| index.work_id(marker))
            .map(str::to_string)
            .collect();
        let mut abstracts = HashMap::new();
        if !work_ids.is_empty() {
            match self.collaborators.abstracts_for_works(work_ids).await {
                Ok(found) => abstracts = found,
                Err(e) => {
                    warn!(error = %e, kind = e.kind(), signal = "abstracts", "Abstract lookup failed");
                    degraded.push("abstracts".to_string());
                }
            }
        }

        let targets = comparison_targets(contexts, index, &abstracts);
        match detect_false_citations(
            contexts,
            &targets,
            &self.collaborators,
            self.config.false_citation_threshold,
        )
        .await
        {
            Ok(flagged) => flagged,
            Err(e) => {
                warn!(error = %e, kind = e.kind(), signal = "false_citations", "False-citation check failed");
                degraded.push("false_citations".to_string());
                Vec::new()
            }
        }
    }

    fn score_inputs(&self, parts: &ReportParts) -> ScoreInputs {
        let solid: Vec<&Claim> = parts.claims.iter().filter(|c| c.is_solid()).collect();
        ScoreInputs {
            self_citation_ratio: parts.self_citation.ratio,
            solid_claims: solid.len(),
            vague_claims: parts.claims.len() - solid.len(),
            false_citations: parts.false_citations.len(),
            outdated_datasets: parts.datasets.outdated_warnings.len(),
            avg_relevance: average_relevance(&parts.claims),
            has_citations: !parts.markers.is_empty(),
            fresh_solid_claims: solid
                .iter()
                .filter(|c| c.freshness.freshness_score >= self.config.freshness_bonus_threshold)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scholia_domain::{AnalysisMode, SentenceLabel};
    use scholia_extractor::RuleSegmenter;
    use scholia_models::{
        MockClassifier, MockDecayClassifier, MockEmbedder, MockMetadataSource, MockRelevance,
    };

    fn analyzer(metadata: MockMetadataSource) -> Analyzer {
        let collaborators = Collaborators::new(
            RuleSegmenter::new(),
            MockClassifier::new(SentenceLabel::SolidClaim, 0.9),
            MockRelevance::new(0.9),
            MockEmbedder::new(vec![1.0, 0.0]),
            MockDecayClassifier::default(),
            metadata,
        );
        Analyzer::new(collaborators, AnalysisConfig::default()).unwrap()
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let collaborators = Collaborators::new(
            RuleSegmenter::new(),
            MockClassifier::new(SentenceLabel::SolidClaim, 0.9),
            MockRelevance::new(0.9),
            MockEmbedder::new(vec![1.0]),
            MockDecayClassifier::default(),
            MockMetadataSource::new(),
        );
        let config = AnalysisConfig {
            relevance_threshold: 2.0,
            ..Default::default()
        };
        assert!(matches!(
            Analyzer::new(collaborators, config),
            Err(AnalysisError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_request_is_rejected() {
        let result = analyzer(MockMetadataSource::new())
            .analyze(AnalysisRequest::new(2026))
            .await;
        assert!(matches!(result, Err(AnalysisError::NoInput)));
    }

    #[tokio::test]
    async fn test_empty_document_still_produces_report() {
        let request = AnalysisRequest::new(2026).with_document(Document::default());
        let report = analyzer(MockMetadataSource::new())
            .analyze(request)
            .await
            .unwrap();

        assert_eq!(report.analysis_mode, AnalysisMode::PdfOnly);
        assert!(report.solid_claims.is_empty());
        assert_eq!(report.citation_count, 0);
        assert_eq!(report.integrity_breakdown.get("low_relevance"), Some(0.0));
        assert_eq!(report.integrity_score, Some(100.0));
    }
}
