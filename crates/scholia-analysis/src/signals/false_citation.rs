//! False-citation detection
//!
//! A citation is suspicious when the sentence citing it has almost nothing
//! in common with what the cited work is about. The cited work is
//! represented by its abstract when the metadata source has one, otherwise
//! by its bibliography text.

use crate::citation_index::CitationIndex;
use crate::collaborators::Collaborators;
use scholia_domain::{
    cosine_similarity, CitationMarker, CollaboratorError, ComparisonSource, FalseCitation,
};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Explanation attached to every flagged citation
pub const FALSE_CITATION_REASONING: &str =
    "Citation context sentence has very low semantic overlap with the cited paper's abstract.";

const SNIPPET_CHARS: usize = 200;

/// What a cited marker is compared against
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTarget {
    /// Text describing the cited work
    pub text: String,
    /// Where the text came from
    pub source: ComparisonSource,
}

/// Pick the comparison text for every marker with a known context
///
/// `abstracts` maps work identifiers to abstracts; markers aligned with a
/// work that has one use it, the rest fall back to their bibliography text.
pub fn comparison_targets(
    contexts: &BTreeMap<CitationMarker, Vec<String>>,
    index: &CitationIndex,
    abstracts: &HashMap<String, String>,
) -> BTreeMap<CitationMarker, ComparisonTarget> {
    contexts
        .keys()
        .filter_map(|marker| {
            let from_abstract = index
                .work_id(marker)
                .and_then(|work| abstracts.get(work))
                .filter(|text| !text.trim().is_empty())
                .map(|text| ComparisonTarget {
                    text: text.clone(),
                    source: ComparisonSource::Abstract,
                });
            let target = from_abstract.or_else(|| {
                index.text(marker).map(|text| ComparisonTarget {
                    text: text.to_string(),
                    source: ComparisonSource::Bibliography,
                })
            })?;
            Some((marker.clone(), target))
        })
        .collect()
}

/// Flag context sentences whose cosine similarity to the cited work falls
/// below `threshold`
///
/// Every target is embedded once; each context sentence is embedded once per
/// marker it cites.
pub async fn detect_false_citations(
    contexts: &BTreeMap<CitationMarker, Vec<String>>,
    targets: &BTreeMap<CitationMarker, ComparisonTarget>,
    collaborators: &Collaborators,
    threshold: f64,
) -> Result<Vec<FalseCitation>, CollaboratorError> {
    let mut flagged = Vec::new();

    for (marker, sentences) in contexts {
        let Some(target) = targets.get(marker) else {
            continue;
        };
        let target_vector = collaborators.embed(&target.text).await?;

        for sentence in sentences {
            let vector = collaborators.embed(sentence).await?;
            let similarity = f64::from(cosine_similarity(&vector, &target_vector));
            if similarity < threshold {
                flagged.push(FalseCitation {
                    citation: marker.clone(),
                    context: sentence.clone(),
                    abstract_snippet: snippet(&target.text),
                    similarity_score: similarity,
                    reasoning: FALSE_CITATION_REASONING.to_string(),
                    source: target.source,
                });
            }
        }
    }

    debug!(flagged = flagged.len(), "False-citation check complete");
    Ok(flagged)
}

fn snippet(text: &str) -> String {
    if text.chars().count() > SNIPPET_CHARS {
        let head: String = text.chars().take(SNIPPET_CHARS).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}
