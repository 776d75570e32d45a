//! Scholia Domain Layer
//!
//! This crate contains the data model shared by every other Scholia crate.
//! It performs no I/O and depends only on `serde`, so that the report the
//! pipeline produces can be serialized by whichever boundary layer consumes it.
//!
//! ## Key Concepts
//!
//! - **Claim**: A body sentence classified as a solid or vague research assertion
//! - **Citation marker**: The literal in-text token (`[3]`, `(Smith, 2020)`)
//! - **Analysis mode**: Which evidence sources are trusted for a run
//! - **Integrity breakdown**: Named, signed contributions to the integrity score
//! - **Collaborators**: Trait seams for classification, similarity, decay
//!   analysis, and bibliographic metadata lookup
//!
//! ## Architecture
//!
//! - Pure data and trait definitions only
//! - Infrastructure implementations live in `scholia-models` and `scholia-openalex`
//! - Orchestration lives in `scholia-analysis`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod citation;
pub mod claim;
pub mod decay;
pub mod error;
pub mod insight;
pub mod metadata;
pub mod mode;
pub mod report;
pub mod signals;
pub mod traits;
pub mod vector;

// Re-exports for convenience
pub use citation::{BibliographyEntry, CitationMarker};
pub use claim::{Claim, ClaimLabel, Freshness, SentenceLabel};
pub use decay::{DecayAnalysis, DecayType};
pub use error::CollaboratorError;
pub use insight::{NoveltyReport, PeerReview, RigorReport};
pub use metadata::{Author, PaperMetadata};
pub use mode::AnalysisMode;
pub use report::{AnalysisReport, BreakdownEntry, CitationRecord, IntegrityBreakdown};
pub use signals::{
    ComparisonSource, DatasetReport, DatasetWarning, FalseCitation, MarketComparison,
    SelfCitationMethod, SelfCitationReport,
};
pub use traits::{
    ClaimClassifier, ClassifiedSentence, DecayClassifier, Embedder, LlmProvider, MetadataSource,
    RelevanceScorer, SentenceSegmenter,
};
pub use vector::cosine_similarity;
