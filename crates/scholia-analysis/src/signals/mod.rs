//! Integrity signals: self-citation, false citation, dataset freshness
//!
//! Each analyzer is independent of the others. Analyzers that consult a
//! collaborator return `Result<_, CollaboratorError>`; the orchestrator
//! substitutes the documented default on failure.

pub mod datasets;
pub mod false_citation;
pub mod self_citation;

pub use datasets::{DatasetCatalog, KnownDataset};
pub use false_citation::{comparison_targets, detect_false_citations, ComparisonTarget};
pub use self_citation::{api_self_citation, extract_author_surnames, heuristic_self_citation};
