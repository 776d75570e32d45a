//! Scholia Extractor
//!
//! Text adapters that turn a manuscript into the inputs of the analysis
//! pipeline.
//!
//! # Pipeline Inputs
//!
//! 1. **Document**: load the file and split it into body and references
//! 2. **Bibliography**: parse `[n] text` entries from the references
//! 3. **Citations**: find in-text markers and the sentences that carry them
//! 4. **Sentences**: segment the body and pre-filter claim candidates
//! 5. **Title**: guess the manuscript title for DOI cross-checking
//!
//! Nothing here calls a model or the network; every function is a pure
//! transformation of text.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bibliography;
pub mod candidates;
pub mod citations;
pub mod config;
pub mod document;
pub mod error;
pub mod segmenter;
pub mod title;

pub use bibliography::{first_year, parse_bibliography};
pub use candidates::is_claim_like;
pub use citations::{extract_citation_contexts, extract_citation_markers, numeric_markers};
pub use config::ExtractorConfig;
pub use document::{load_document, split_sections, Document};
pub use error::{ExtractorError, Result};
pub use segmenter::RuleSegmenter;
pub use title::guess_title;
