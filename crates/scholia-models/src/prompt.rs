//! LLM prompts for sentence classification and decay analysis

const CLASSIFICATION_INSTRUCTIONS: &str = r#"You label sentences from a research manuscript.

For each numbered sentence choose exactly one label:
- "solid_claim": a concrete research finding or contribution
- "vague_claim": an assertion that is hedged, unquantified or unconfident
- "question": a research question or hypothesis
- "citation": a sentence that mostly reports what another work did
- "background": general background information
- "other": anything else

Give a confidence score between 0.0 and 1.0 for the chosen label."#;

const CLASSIFICATION_FORMAT: &str = r#"Respond with ONLY a JSON array containing one object per sentence, in the same order:
[{"label": "solid_claim", "score": 0.87}, ...]"#;

const DECAY_INSTRUCTIONS: &str = r#"You estimate how quickly a scientific claim goes stale.

Categories:
- "FAST": depends on benchmarks, leaderboards, prices, hardware or model versions
- "MEDIUM": depends on methods or tooling that are typically superseded within a few years
- "SLOW": an established empirical finding
- "TIMELESS": a mathematical, logical or definitional statement

List the moving variables the claim depends on (e.g. "ImageNet top-1 accuracy").
Describe what would have to change for the claim to stop holding (stress test),
and how settled the field considers the claim (consensus)."#;

const DECAY_FORMAT: &str = r#"Respond with ONLY a JSON object:
{"decay_type": "FAST", "reason": "...", "moving_variables": ["..."], "stress_test": "...", "consensus": "..."}"#;

/// Build a batch classification prompt
pub fn classification_prompt(sentences: &[String]) -> String {
    let mut prompt = String::new();
    prompt.push_str(CLASSIFICATION_INSTRUCTIONS);
    prompt.push_str("\n\nSentences:\n");
    for (i, sentence) in sentences.iter().enumerate() {
        prompt.push_str(&format!("{}. {}\n", i + 1, sentence));
    }
    prompt.push('\n');
    prompt.push_str(CLASSIFICATION_FORMAT);
    prompt
}

/// Build a decay-analysis prompt for one claim
pub fn decay_prompt(sentence: &str) -> String {
    format!(
        "{}\n\nClaim:\n---\n{}\n---\n\n{}",
        DECAY_INSTRUCTIONS, sentence, DECAY_FORMAT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_prompt_numbers_sentences() {
        let prompt = classification_prompt(&["First.".to_string(), "Second.".to_string()]);
        assert!(prompt.contains("1. First.\n2. Second.\n"));
        assert!(prompt.ends_with(CLASSIFICATION_FORMAT));
    }

    #[test]
    fn test_decay_prompt_contains_claim() {
        let prompt = decay_prompt("GPT-4 tops the leaderboard.");
        assert!(prompt.contains("---\nGPT-4 tops the leaderboard.\n---"));
        assert!(prompt.contains("TIMELESS"));
    }
}
