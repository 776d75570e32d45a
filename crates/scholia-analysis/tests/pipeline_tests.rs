//! End-to-end pipeline tests with deterministic collaborators

use scholia_analysis::{AnalysisConfig, AnalysisError, AnalysisRequest, Analyzer, Collaborators};
use scholia_domain::{
    AnalysisMode, Author, ComparisonSource, PaperMetadata, SelfCitationMethod, SentenceLabel,
};
use scholia_extractor::{Document, ExtractorConfig, RuleSegmenter};
use scholia_models::{
    MockClassifier, MockDecayClassifier, MockEmbedder, MockMetadataSource, MockRelevance,
};

const YEAR: i32 = 2026;
const DOI: &str = "10.5555/sparse.2024";
const TITLE: &str = "Linear Sparse Kernels for Long Inputs";
const REF_1: &str = "Vaswani, A. Attention is all you need. NeurIPS, 2017.";
const REF_2: &str = "Beltagy, I. Longformer: the long-document transformer. arXiv, 2020.";
const CLAIM_1: &str = "We propose a sparse attention method that scales linearly with length [1].";
const CLAIM_2: &str = "Our results improve accuracy over dense attention baselines [2].";

fn manuscript() -> String {
    format!(
        "{TITLE}\n\nJane Smith and Wei Chen\n\nAbstract\n\n{CLAIM_1} {CLAIM_2}\n\n\
         References\n[1] {REF_1}\n[2] {REF_2}\n"
    )
}

fn document() -> Document {
    Document::from_text(&manuscript(), &ExtractorConfig::default())
}

fn relevance() -> MockRelevance {
    MockRelevance::new(0.5)
        .with_score(REF_1, 0.9)
        .with_score(REF_2, 0.8)
}

fn collaborators(metadata: MockMetadataSource) -> Collaborators {
    Collaborators::new(
        RuleSegmenter::new(),
        MockClassifier::new(SentenceLabel::SolidClaim, 0.9),
        relevance(),
        MockEmbedder::new(vec![1.0, 0.0]),
        MockDecayClassifier::default(),
        metadata,
    )
}

fn analyzer(collaborators: Collaborators) -> Analyzer {
    Analyzer::new(collaborators, AnalysisConfig::default()).unwrap()
}

fn paper(title: &str) -> PaperMetadata {
    PaperMetadata {
        id: Some("W100".into()),
        doi: Some(DOI.into()),
        title: title.into(),
        cited_by_count: 42,
        authors: vec![Author {
            id: "A1".into(),
            name: "Jane Smith".into(),
        }],
        referenced_work_ids: vec!["W1".into(), "W2".into()],
        ..Default::default()
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_manuscript_splits_into_body_and_references() {
    let document = document();
    assert!(document.body.ends_with(CLAIM_2));
    assert!(document.references.contains(REF_2));
}

#[tokio::test]
async fn test_well_supported_document() {
    let request = AnalysisRequest::new(YEAR).with_document(document());
    let report = analyzer(collaborators(MockMetadataSource::new()))
        .analyze(request)
        .await
        .unwrap();

    assert_eq!(report.analysis_mode, AnalysisMode::PdfOnly);
    assert_eq!(report.title.as_deref(), Some(TITLE));
    assert_eq!(report.solid_claims.len(), 2);
    assert!(report.vague_claims.is_empty());
    assert!(report.solid_claims.iter().all(|c| c.verified));
    assert_eq!(
        report.solid_claims[0].verification_note,
        "Verified with [1] (Relevance: 0.90)"
    );
    assert!(approx(report.avg_relevance, 0.85));

    let breakdown = &report.integrity_breakdown;
    assert_eq!(breakdown.get("self_citation"), Some(0.0));
    assert_eq!(breakdown.get("vague_claims"), Some(0.0));
    assert_eq!(breakdown.get("false_citations"), Some(0.0));
    assert_eq!(breakdown.get("outdated_datasets"), Some(0.0));
    assert!(approx(breakdown.get("low_relevance").unwrap(), -3.0));
    // Cited work from 2017 and 2020 is too old for the bonus in 2026
    assert_eq!(breakdown.get("freshness_bonus"), Some(0.0));
    assert!(approx(report.integrity_score.unwrap(), 97.0));

    assert_eq!(report.citation_count, 2);
    assert_eq!(report.citation_list, vec![REF_1.to_string(), REF_2.to_string()]);
    assert_eq!(report.self_citation.method, SelfCitationMethod::Heuristic);
    assert_eq!(report.self_citation.ratio, 0.0);
    assert!(report.false_citations.is_empty());
    assert!(report.degraded_signals.is_empty());
}

#[tokio::test]
async fn test_reruns_are_identical() {
    let analyzer = analyzer(collaborators(MockMetadataSource::new()));
    let first = analyzer
        .analyze(AnalysisRequest::new(YEAR).with_document(document()))
        .await
        .unwrap();
    let second = analyzer
        .analyze(AnalysisRequest::new(YEAR).with_document(document()))
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[tokio::test]
async fn test_doi_only_is_not_scored() {
    let source = MockMetadataSource::new()
        .with_paper(DOI, paper(TITLE))
        .with_work_authors("W1", &["A1", "A7"])
        .with_work_authors("W2", &["A9"]);
    let report = analyzer(collaborators(source))
        .analyze(AnalysisRequest::new(YEAR).with_doi(DOI))
        .await
        .unwrap();

    assert_eq!(report.analysis_mode, AnalysisMode::DoiOnly);
    assert!(report.integrity_score.is_none());
    assert!(report.integrity_breakdown.is_empty());
    assert!(report.solid_claims.is_empty());
    assert_eq!(report.title.as_deref(), Some(TITLE));
    assert_eq!(report.paper.as_ref().map(|p| p.cited_by_count), Some(42));
    assert_eq!(report.self_citation.method, SelfCitationMethod::Api);
    assert_eq!(report.self_citation.ratio, 0.5);

    let json = serde_json::to_value(&report).unwrap();
    assert!(json["integrity_score"].is_null());
}

#[tokio::test]
async fn test_unresolved_doi_only_request_fails() {
    let result = analyzer(collaborators(MockMetadataSource::new()))
        .analyze(AnalysisRequest::new(YEAR).with_doi(DOI))
        .await;

    match result {
        Err(AnalysisError::MetadataNotFound { doi }) => assert_eq!(doi, DOI),
        other => panic!("Unexpected result: {:?}", other.map(|r| r.analysis_mode)),
    }
}

#[tokio::test]
async fn test_title_mismatch_discards_document() {
    let source = MockMetadataSource::new().with_paper(DOI, paper("Protein Folding with Graph Networks"));
    let request = AnalysisRequest::new(YEAR)
        .with_document(document())
        .with_doi(DOI);
    let report = analyzer(collaborators(source)).analyze(request).await.unwrap();

    assert_eq!(report.analysis_mode, AnalysisMode::MatchedHybridWarn);
    assert!(report.integrity_score.is_none());
    assert!(report.solid_claims.is_empty());
    assert!(report.bibliography.is_empty());
    assert_eq!(report.citation_count, 0);
    assert!(report.review.strengths.is_empty() && report.review.weaknesses.is_empty());
    assert_eq!(
        report.title.as_deref(),
        Some("Protein Folding with Graph Networks")
    );
}

#[tokio::test]
async fn test_matched_hybrid_uses_metadata_signals() {
    let abstract_1 = "We study protein folding with graph networks.";
    let source = MockMetadataSource::new()
        .with_paper(DOI, paper(TITLE))
        .with_work_authors("W2", &["A1"])
        .with_abstract("W1", abstract_1);
    let collaborators = Collaborators::new(
        RuleSegmenter::new(),
        MockClassifier::new(SentenceLabel::SolidClaim, 0.9),
        relevance(),
        MockEmbedder::new(vec![1.0, 0.0]).with_vector(abstract_1, vec![0.0, 1.0]),
        MockDecayClassifier::default(),
        source,
    );
    let request = AnalysisRequest::new(YEAR)
        .with_document(document())
        .with_doi(DOI);
    let report = analyzer(collaborators).analyze(request).await.unwrap();

    assert_eq!(report.analysis_mode, AnalysisMode::MatchedHybrid);
    assert_eq!(report.self_citation.method, SelfCitationMethod::Api);
    assert_eq!(report.self_citation.ratio, 0.5);

    assert_eq!(report.false_citations.len(), 1);
    let flagged = &report.false_citations[0];
    assert_eq!(flagged.citation.as_str(), "[1]");
    assert_eq!(flagged.context, CLAIM_1);
    assert_eq!(flagged.source, ComparisonSource::Abstract);

    let breakdown = &report.integrity_breakdown;
    assert_eq!(breakdown.get("self_citation"), Some(-15.0));
    assert_eq!(breakdown.get("false_citations"), Some(-15.0));
    assert!(approx(report.integrity_score.unwrap(), 67.0));
}

#[tokio::test]
async fn test_failed_batch_fetches_fall_back_to_body() {
    let source = MockMetadataSource::new()
        .with_paper(DOI, paper(TITLE))
        .with_work_authors("W2", &["A1"])
        .with_abstract("W1", "We study protein folding with graph networks.")
        .failing_batches();
    let collaborators = Collaborators::new(
        RuleSegmenter::new(),
        MockClassifier::new(SentenceLabel::SolidClaim, 0.9),
        relevance(),
        MockEmbedder::new(vec![1.0, 0.0]).with_vector(REF_1, vec![0.0, 1.0]),
        MockDecayClassifier::default(),
        source,
    );
    let request = AnalysisRequest::new(YEAR)
        .with_document(document())
        .with_doi(DOI);
    let report = analyzer(collaborators).analyze(request).await.unwrap();

    assert_eq!(report.analysis_mode, AnalysisMode::MatchedHybrid);
    assert_eq!(
        report.degraded_signals,
        vec!["self_citation".to_string(), "abstracts".to_string()]
    );

    // Neither reference names an author of the manuscript
    assert_eq!(report.self_citation.method, SelfCitationMethod::Heuristic);
    assert_eq!(report.self_citation.count, 0);
    assert_eq!(report.self_citation.total, 2);

    assert_eq!(report.false_citations.len(), 1);
    let flagged = &report.false_citations[0];
    assert_eq!(flagged.citation.as_str(), "[1]");
    assert_eq!(flagged.source, ComparisonSource::Bibliography);

    let breakdown = &report.integrity_breakdown;
    assert_eq!(breakdown.get("self_citation"), Some(0.0));
    assert_eq!(breakdown.get("false_citations"), Some(-15.0));
    assert!(report.integrity_score.is_some());
}

#[tokio::test]
async fn test_heuristic_self_citation() {
    let text = format!(
        "{TITLE}\n\nJane Smith and Wei Chen\n\nAbstract\n\n{CLAIM_1} {CLAIM_2}\n\n\
         References\n[1] Smith, J. and Lee, K. Prior kernels. 2019.\n[2] Jones, 2020.\n"
    );
    let request = AnalysisRequest::new(YEAR)
        .with_document(Document::from_text(&text, &ExtractorConfig::default()));
    let report = analyzer(collaborators(MockMetadataSource::new()))
        .analyze(request)
        .await
        .unwrap();

    assert_eq!(report.self_citation.method, SelfCitationMethod::Heuristic);
    assert_eq!(report.self_citation.count, 1);
    assert_eq!(report.self_citation.total, 2);
    assert_eq!(report.self_citation.ratio, 0.5);
    assert_eq!(report.integrity_breakdown.get("self_citation"), Some(-15.0));
}

#[tokio::test]
async fn test_failing_collaborators_degrade_signals() {
    let collaborators = Collaborators::new(
        RuleSegmenter::new(),
        MockClassifier::failing(),
        relevance(),
        MockEmbedder::failing(),
        MockDecayClassifier::default(),
        MockMetadataSource::new().failing_lookups(),
    );
    let request = AnalysisRequest::new(YEAR)
        .with_document(document())
        .with_doi(DOI);
    let report = analyzer(collaborators).analyze(request).await.unwrap();

    assert_eq!(report.analysis_mode, AnalysisMode::PdfOnly);
    assert_eq!(
        report.degraded_signals,
        vec![
            "metadata".to_string(),
            "claims".to_string(),
            "false_citations".to_string()
        ]
    );
    assert!(report.solid_claims.is_empty());
    assert!(report.false_citations.is_empty());
    assert!(report.integrity_score.is_some());
}

#[tokio::test]
async fn test_failing_decay_and_relevance_keep_claims() {
    let collaborators = Collaborators::new(
        RuleSegmenter::new(),
        MockClassifier::new(SentenceLabel::SolidClaim, 0.9),
        MockRelevance::failing(),
        MockEmbedder::new(vec![1.0, 0.0]),
        MockDecayClassifier::failing(),
        MockMetadataSource::new(),
    );
    let report = analyzer(collaborators)
        .analyze(AnalysisRequest::new(YEAR).with_document(document()))
        .await
        .unwrap();

    assert_eq!(report.solid_claims.len(), 2);
    assert_eq!(
        report.degraded_signals,
        vec!["claim_verification".to_string(), "freshness".to_string()]
    );
    // No relevance recorded, so the full low-relevance penalty applies
    assert_eq!(report.integrity_breakdown.get("low_relevance"), Some(-20.0));
}
