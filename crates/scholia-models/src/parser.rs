//! Parse LLM output into collaborator results

use crate::error::ModelError;
use scholia_domain::{ClassifiedSentence, DecayAnalysis, DecayType, SentenceLabel};
use serde_json::Value;
use tracing::warn;

/// Parse a batch classification response
///
/// Expects a JSON array with one `{"label": .., "score": ..}` object per
/// input sentence, in input order.
pub fn parse_classifications(
    response: &str,
    sentences: &[String],
) -> Result<Vec<ClassifiedSentence>, ModelError> {
    let json: Value = serde_json::from_str(&extract_json(response)?)
        .map_err(|e| ModelError::InvalidResponse(format!("JSON parse error: {}", e)))?;

    let items = json
        .as_array()
        .ok_or_else(|| ModelError::InvalidResponse("Expected JSON array".to_string()))?;

    if items.len() != sentences.len() {
        return Err(ModelError::InvalidResponse(format!(
            "Expected {} classifications, got {}",
            sentences.len(),
            items.len()
        )));
    }

    items
        .iter()
        .zip(sentences)
        .enumerate()
        .map(|(idx, (item, sentence))| {
            let obj = item.as_object().ok_or_else(|| {
                ModelError::InvalidResponse(format!("Classification {} is not an object", idx))
            })?;
            let label = obj
                .get("label")
                .and_then(Value::as_str)
                .map(SentenceLabel::parse)
                .ok_or_else(|| {
                    ModelError::InvalidResponse(format!("Classification {} has no label", idx))
                })?;
            let score = obj
                .get("score")
                .and_then(Value::as_f64)
                .filter(|s| s.is_finite())
                .ok_or_else(|| {
                    ModelError::InvalidResponse(format!("Classification {} has no score", idx))
                })?;
            Ok(ClassifiedSentence {
                sentence: sentence.clone(),
                label,
                score: score.clamp(0.0, 1.0),
            })
        })
        .collect()
}

/// Parse a decay-analysis response
///
/// Only `decay_type` is required; unknown categories become
/// [`DecayType::Unclassified`] and missing text fields are left empty.
pub fn parse_decay_analysis(response: &str) -> Result<DecayAnalysis, ModelError> {
    let json: Value = serde_json::from_str(&extract_json(response)?)
        .map_err(|e| ModelError::InvalidResponse(format!("JSON parse error: {}", e)))?;

    let obj = json
        .as_object()
        .ok_or_else(|| ModelError::InvalidResponse("Expected JSON object".to_string()))?;

    let decay_type = obj
        .get("decay_type")
        .and_then(Value::as_str)
        .map(DecayType::parse)
        .ok_or_else(|| ModelError::InvalidResponse("Missing 'decay_type'".to_string()))?;

    let text = |key: &str| {
        obj.get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .trim()
            .to_string()
    };

    let moving_variables = match obj.get("moving_variables") {
        Some(Value::Array(values)) => values
            .iter()
            .filter_map(Value::as_str)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            warn!("Ignoring non-array moving_variables: {}", other);
            Vec::new()
        }
    };

    Ok(DecayAnalysis {
        decay_type,
        reason: text("reason"),
        moving_variables,
        stress_test: text("stress_test"),
        consensus: text("consensus"),
    })
}

/// Extract JSON from response, handling markdown code blocks and chatter
pub fn extract_json(response: &str) -> Result<String, ModelError> {
    let trimmed = response.trim();

    // Check if wrapped in markdown code block
    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(ModelError::InvalidResponse("Empty code block".to_string()));
        }

        // Skip first line (```json or ```) and last line (```)
        let json_lines = &lines[1..lines.len().saturating_sub(1)];
        return Ok(json_lines.join("\n"));
    }

    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        return Ok(trimmed.to_string());
    }

    // Leading prose: take the outermost bracketed span
    let start = trimmed.find(['[', '{']);
    let end = trimmed.rfind([']', '}']);
    match (start, end) {
        (Some(s), Some(e)) if s < e => Ok(trimmed[s..=e].to_string()),
        _ => Err(ModelError::InvalidResponse(
            "No JSON found in response".to_string(),
        )),
    }
}
