//! Collaborator wiring from configuration.

use crate::config::Config;
use crate::error::Result;
use scholia_analysis::Collaborators;
use scholia_extractor::RuleSegmenter;
use scholia_models::{
    EmbeddingRelevance, HashingEmbedder, HeuristicClassifier, HeuristicDecayClassifier,
    LlmClassifier, LlmDecayClassifier, OllamaProvider,
};
use scholia_openalex::{OfflineSource, OpenAlexClient};
use tracing::info;

/// Build the collaborator bundle for one CLI run
///
/// Offline runs never touch the network: metadata lookups answer "not
/// found" and classification stays heuristic even when Ollama is enabled.
///
/// Must be called outside the tokio runtime, since the OpenAlex and Ollama
/// clients are blocking.
pub fn build_collaborators(config: &Config, offline: bool) -> Result<Collaborators> {
    let relevance = EmbeddingRelevance::new(HashingEmbedder::default());
    let embedder = HashingEmbedder::default();

    let collaborators = if config.ollama.enabled && !offline {
        info!(endpoint = %config.ollama.endpoint, model = %config.ollama.model, "Using Ollama classifiers");
        let classifier = OllamaProvider::new(&config.ollama.endpoint, &config.ollama.model)?;
        let decay = OllamaProvider::new(&config.ollama.endpoint, &config.ollama.model)?;
        Collaborators::new(
            RuleSegmenter::new(),
            LlmClassifier::new(classifier),
            relevance,
            embedder,
            LlmDecayClassifier::new(decay),
            OfflineSource,
        )
    } else {
        Collaborators::new(
            RuleSegmenter::new(),
            HeuristicClassifier::new(),
            relevance,
            embedder,
            HeuristicDecayClassifier::new(),
            OfflineSource,
        )
    };

    if offline {
        info!("Offline run, metadata lookups disabled");
        return Ok(collaborators);
    }
    Ok(collaborators.with_metadata(OpenAlexClient::new(&config.openalex)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offline_heuristic_bundle() {
        let mut config = Config::default();
        config.ollama.enabled = true;
        assert!(build_collaborators(&config, true).is_ok());
    }

    #[test]
    fn test_online_bundle_builds_without_network() {
        assert!(build_collaborators(&Config::default(), false).is_ok());
    }
}
