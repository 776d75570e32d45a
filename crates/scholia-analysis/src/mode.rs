//! Mode Resolver
//!
//! Decides once per run which evidence sources are trusted. The decision
//! itself ([`select_mode`]) is a pure function of what was supplied and what
//! the DOI lookup returned; [`resolve_mode`] performs the lookup.

use crate::collaborators::Collaborators;
use crate::error::{AnalysisError, Result};
use scholia_domain::{AnalysisMode, PaperMetadata};
use tracing::{info, warn};

/// Outcome of the DOI lookup, as far as mode selection cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoiLookup {
    /// No DOI was supplied
    NotRequested,
    /// A DOI was supplied but did not resolve
    NotFound,
    /// The DOI resolved; `title_match` compares the document's guessed title
    Found {
        /// The document title agrees with the metadata title
        title_match: bool,
    },
}

/// The trusted evidence for a run
#[derive(Debug, Clone, PartialEq)]
pub struct ModeResolution {
    /// Selected mode
    pub mode: AnalysisMode,
    /// Metadata, present only when the mode uses it
    pub metadata: Option<PaperMetadata>,
    /// The DOI lookup failed and a document-only run was substituted
    pub lookup_failed: bool,
}

/// Select the mode
///
/// Returns `None` when nothing usable was supplied: no input at all, or a
/// DOI without a document that did not resolve.
pub fn select_mode(has_document: bool, lookup: DoiLookup) -> Option<AnalysisMode> {
    match (has_document, lookup) {
        (false, DoiLookup::Found { .. }) => Some(AnalysisMode::DoiOnly),
        (false, _) => None,
        (true, DoiLookup::NotRequested | DoiLookup::NotFound) => Some(AnalysisMode::PdfOnly),
        (true, DoiLookup::Found { title_match: true }) => Some(AnalysisMode::MatchedHybrid),
        (true, DoiLookup::Found { title_match: false }) => Some(AnalysisMode::MatchedHybridWarn),
    }
}

/// Fuzzy title comparison
///
/// Both titles are lower-cased, stripped of punctuation and
/// whitespace-collapsed; they match when one contains the other. An empty
/// title never matches.
pub fn titles_match(a: &str, b: &str) -> bool {
    let a = normalize_title(a);
    let b = normalize_title(b);
    !a.is_empty() && !b.is_empty() && (a.contains(&b) || b.contains(&a))
}

fn normalize_title(title: &str) -> String {
    let cleaned: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolve the DOI (when given) and select the mode
///
/// A failed or empty lookup is fatal only when there is no document to fall
/// back on. A missing title guess counts as a mismatch.
pub async fn resolve_mode(
    has_document: bool,
    doi: Option<&str>,
    title_guess: Option<&str>,
    collaborators: &Collaborators,
) -> Result<ModeResolution> {
    let mut lookup_failed = false;
    let (lookup, metadata) = match doi {
        None => (DoiLookup::NotRequested, None),
        Some(doi) => match collaborators.resolve_doi(doi).await {
            Ok(Some(meta)) => {
                let title_match = title_guess.is_some_and(|guess| titles_match(guess, &meta.title));
                (DoiLookup::Found { title_match }, Some(meta))
            }
            Ok(None) => (DoiLookup::NotFound, None),
            Err(e) => {
                warn!(error = %e, kind = e.kind(), doi, "DOI lookup failed");
                lookup_failed = has_document;
                (DoiLookup::NotFound, None)
            }
        },
    };

    let mode = select_mode(has_document, lookup).ok_or_else(|| match doi {
        Some(doi) => AnalysisError::MetadataNotFound {
            doi: doi.to_string(),
        },
        None => AnalysisError::NoInput,
    })?;

    if lookup == DoiLookup::NotFound && has_document {
        info!("DOI did not resolve, analyzing the document alone");
    }
    if mode == AnalysisMode::MatchedHybridWarn {
        warn!("Document title does not match DOI metadata, discarding document text");
    }
    info!(mode = %mode, "Analysis mode selected");

    Ok(ModeResolution {
        mode,
        metadata: metadata.filter(|_| mode.uses_metadata()),
        lookup_failed,
    })
}
