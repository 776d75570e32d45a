//! Claim adapter: segmentation, candidate filtering, classification and
//! solid/vague refinement in one call

use crate::collaborators::Collaborators;
use scholia_domain::{Claim, ClaimLabel, ClassifiedSentence, CollaboratorError};
use scholia_extractor::is_claim_like;
use tracing::debug;

/// Words that make a claim vague regardless of its classifier score
pub const VAGUE_WORDS: [&str; 5] = ["many", "some", "various", "several", "often"];

/// Whether a sentence uses vague quantifiers (substring match, any case)
pub fn has_vague_wording(text: &str) -> bool {
    let lower = text.to_lowercase();
    VAGUE_WORDS.iter().any(|w| lower.contains(w))
}

/// Sentences worth sending to the classifier, in document order
pub fn candidate_sentences(sentences: &[String], min_length: usize) -> Vec<String> {
    sentences
        .iter()
        .filter(|s| s.chars().count() > min_length && is_claim_like(s))
        .cloned()
        .collect()
}

/// Turn classifier output into claims
///
/// Sentences not labelled as claims are dropped. A solid label is demoted to
/// vague when its score is below `vague_threshold` or the sentence uses
/// vague wording; a vague label is never promoted.
pub fn refine(classified: Vec<ClassifiedSentence>, vague_threshold: f64) -> Vec<Claim> {
    classified
        .into_iter()
        .filter_map(|c| {
            let label = match c.label.claim_label()? {
                ClaimLabel::Solid
                    if c.score < vague_threshold || has_vague_wording(&c.sentence) =>
                {
                    ClaimLabel::Vague
                }
                label => label,
            };
            Some(Claim::new(c.sentence, label, c.score))
        })
        .collect()
}

/// Extract refined claims from body text
pub async fn extract_claims(
    collaborators: &Collaborators,
    body: &str,
    min_sentence_length: usize,
    vague_threshold: f64,
) -> Result<Vec<Claim>, CollaboratorError> {
    let sentences = collaborators.split_sentences(body);
    let candidates = candidate_sentences(&sentences, min_sentence_length);
    debug!(
        sentences = sentences.len(),
        candidates = candidates.len(),
        "Selected claim candidates"
    );
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let classified = collaborators.classify(candidates).await?;
    let claims = refine(classified, vague_threshold);
    debug!(claims = claims.len(), "Classified claims");
    Ok(claims)
}
