//! Claim Verifier
//!
//! Checks each claim against the bibliography entries it cites. Markers are
//! evaluated in first-seen order and the first one below the relevance
//! threshold settles the verdict; later markers are never scored.

use crate::citation_index::CitationIndex;
use crate::collaborators::Collaborators;
use scholia_domain::{Claim, CollaboratorError};
use scholia_extractor::numeric_markers;
use tracing::warn;

/// Note for a claim that cites nothing resolvable
pub const NO_CITATION_NOTE: &str = "No specific citation linked in sentence.";

/// Note for a claim whose relevance could not be computed
pub const UNAVAILABLE_NOTE: &str = "Citation relevance could not be computed.";

/// Verify one claim in place
///
/// A claim with no resolvable marker stays verified: nothing links it to a
/// reference that could contradict it.
pub async fn verify_claim(
    claim: &mut Claim,
    index: &CitationIndex,
    collaborators: &Collaborators,
    threshold: f64,
) -> Result<(), CollaboratorError> {
    claim.verified = true;
    claim.verification_note = NO_CITATION_NOTE.to_string();
    claim.relevance = None;

    for marker in numeric_markers(&claim.text) {
        let Some(reference) = index.text(&marker) else {
            continue;
        };
        let score = collaborators.relevance(&claim.text, reference).await?;
        claim.relevance = Some(score);
        if score < threshold {
            claim.verified = false;
            claim.verification_note =
                format!("Possible Misalignment with {} (Relevance: {:.2})", marker, score);
            return Ok(());
        }
        claim.verification_note = format!("Verified with {} (Relevance: {:.2})", marker, score);
    }
    Ok(())
}

/// Verify every claim, degrading failed ones to an unverified-by-default note
///
/// Returns whether any claim failed.
pub async fn verify_all(
    claims: &mut [Claim],
    index: &CitationIndex,
    collaborators: &Collaborators,
    threshold: f64,
) -> bool {
    let mut degraded = false;
    for claim in claims.iter_mut() {
        if let Err(e) = verify_claim(claim, index, collaborators, threshold).await {
            warn!(error = %e, kind = e.kind(), "Claim verification failed");
            claim.verified = true;
            claim.verification_note = UNAVAILABLE_NOTE.to_string();
            claim.relevance = None;
            degraded = true;
        }
    }
    degraded
}

#[cfg(test)]
mod tests {
    use super::*;
    use scholia_domain::{BibliographyEntry, CitationMarker, ClaimLabel, SentenceLabel};
    use scholia_extractor::RuleSegmenter;
    use scholia_models::{
        MockClassifier, MockDecayClassifier, MockEmbedder, MockMetadataSource, MockRelevance,
    };

    const REF_ONE: &str = "Smith. Sparse attention. 2019.";
    const REF_TWO: &str = "Jones. Long context models. 2021.";

    fn index() -> CitationIndex {
        CitationIndex::build(
            vec![
                BibliographyEntry::new(CitationMarker::numeric(1), REF_ONE),
                BibliographyEntry::new(CitationMarker::numeric(2), REF_TWO),
            ],
            None,
        )
    }

    fn collaborators(relevance: MockRelevance) -> Collaborators {
        Collaborators::new(
            RuleSegmenter::new(),
            MockClassifier::new(SentenceLabel::SolidClaim, 0.9),
            relevance,
            MockEmbedder::new(vec![1.0]),
            MockDecayClassifier::default(),
            MockMetadataSource::new(),
        )
    }

    #[tokio::test]
    async fn test_first_low_marker_short_circuits() {
        let relevance = MockRelevance::new(0.5)
            .with_score(REF_ONE, 0.1)
            .with_score(REF_TWO, 0.9);
        let collaborators = collaborators(relevance.clone());
        let mut claim = Claim::new("Sparse attention scales [1] [2].", ClaimLabel::Solid, 0.9);

        verify_claim(&mut claim, &index(), &collaborators, 0.3)
            .await
            .unwrap();

        assert!(!claim.verified);
        assert_eq!(
            claim.verification_note,
            "Possible Misalignment with [1] (Relevance: 0.10)"
        );
        assert!(!claim.verification_note.contains("[2]"));
        assert_eq!(relevance.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_note_reflects_last_marker() {
        let relevance = MockRelevance::new(0.5)
            .with_score(REF_ONE, 0.9)
            .with_score(REF_TWO, 0.8);
        let collaborators = collaborators(relevance);
        let mut claim = Claim::new("Attention scales [1], [2].", ClaimLabel::Solid, 0.9);

        verify_claim(&mut claim, &index(), &collaborators, 0.3)
            .await
            .unwrap();

        assert!(claim.verified);
        assert_eq!(claim.verification_note, "Verified with [2] (Relevance: 0.80)");
        assert_eq!(claim.relevance, Some(0.8));
    }

    #[tokio::test]
    async fn test_unresolvable_markers_leave_claim_verified() {
        let relevance = MockRelevance::new(0.0);
        let collaborators = collaborators(relevance.clone());
        let mut claim = Claim::new("This was shown before [7].", ClaimLabel::Solid, 0.9);

        verify_claim(&mut claim, &index(), &collaborators, 0.3)
            .await
            .unwrap();

        assert!(claim.verified);
        assert_eq!(claim.verification_note, NO_CITATION_NOTE);
        assert!(claim.relevance.is_none());
        assert!(relevance.calls().is_empty());
    }

    #[tokio::test]
    async fn test_failure_degrades_claim() {
        let collaborators = collaborators(MockRelevance::failing());
        let mut claims = vec![Claim::new("It holds [1].", ClaimLabel::Solid, 0.9)];

        let degraded = verify_all(&mut claims, &index(), &collaborators, 0.3).await;

        assert!(degraded);
        assert!(claims[0].verified);
        assert_eq!(claims[0].verification_note, UNAVAILABLE_NOTE);
    }
}
