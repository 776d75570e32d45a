//! Scholia Analysis
//!
//! The integrity-report pipeline: decides which evidence to trust, turns a
//! manuscript into verified claims, computes the integrity signals and
//! combines them into one score with an itemized breakdown.
//!
//! # Architecture
//!
//! ```text
//! Request → Mode Resolver → Citation Index → Claims → Verifier → Freshness
//!                                               ↓
//!          Report ← Review ← Score Aggregator ← Integrity Signals
//! ```
//!
//! The mode decides everything downstream: in `DOI_ONLY` and
//! `MATCHED_HYBRID_WARN` runs no body text is read and no score is produced.
//!
//! # Degradation
//!
//! Collaborators (classifier, relevance, embedder, decay classifier,
//! metadata source) are injected through [`Collaborators`]. When one fails
//! or times out, the affected signal falls back to its default and its name
//! is listed in the report's `degraded_signals`. Only a DOI-only request
//! whose DOI does not resolve aborts the run.
//!
//! # Example Usage
//!
//! ```no_run
//! use scholia_analysis::{AnalysisConfig, AnalysisRequest, Analyzer, Collaborators};
//! use scholia_extractor::{Document, ExtractorConfig, RuleSegmenter};
//! use scholia_models::{
//!     HashingEmbedder, HeuristicClassifier, HeuristicDecayClassifier, EmbeddingRelevance,
//! };
//! use scholia_openalex::OfflineSource;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let collaborators = Collaborators::new(
//!     RuleSegmenter::new(),
//!     HeuristicClassifier::new(),
//!     EmbeddingRelevance::new(HashingEmbedder::default()),
//!     HashingEmbedder::default(),
//!     HeuristicDecayClassifier::new(),
//!     OfflineSource,
//! );
//! let analyzer = Analyzer::new(collaborators, AnalysisConfig::default())?;
//!
//! let text = std::fs::read_to_string("paper.txt")?;
//! let document = Document::from_text(&text, &ExtractorConfig::default());
//! let report = analyzer
//!     .analyze(AnalysisRequest::new(2026).with_document(document))
//!     .await?;
//!
//! println!("Score: {:?}", report.integrity_score);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analyzer;
pub mod citation_index;
pub mod claims;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod freshness;
pub mod mode;
pub mod novelty;
pub mod report;
pub mod review;
pub mod rigor;
pub mod scoring;
pub mod signals;
pub mod verifier;

pub use analyzer::{AnalysisRequest, Analyzer};
pub use citation_index::CitationIndex;
pub use collaborators::Collaborators;
pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
pub use mode::{resolve_mode, select_mode, titles_match, DoiLookup, ModeResolution};
pub use scoring::{score, ScoreInputs};
pub use signals::DatasetCatalog;
