//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Configuration for document loading and section splitting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Maximum document length (characters)
    pub max_text_length: usize,

    /// A bare `[1]` only starts the references when it lies in this trailing
    /// fraction of the text
    pub references_tail_fraction: f64,

    /// An inline `References` heading (not on its own line) only counts when
    /// it starts after this fraction of the text
    pub inline_header_fraction: f64,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_text_length == 0 {
            return Err("max_text_length must be greater than 0".to_string());
        }
        if !(0.0..=1.0).contains(&self.references_tail_fraction) {
            return Err("references_tail_fraction must be between 0.0 and 1.0".to_string());
        }
        if !(0.0..=1.0).contains(&self.inline_header_fraction) {
            return Err("inline_header_fraction must be between 0.0 and 1.0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_text_length: 2_000_000,
            references_tail_fraction: 0.5,
            inline_header_fraction: 0.7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ExtractorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_fraction() {
        let config = ExtractorConfig {
            references_tail_fraction: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_max_text_length() {
        let config = ExtractorConfig {
            max_text_length: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ExtractorConfig::from_toml("max_text_length = 1000").unwrap();
        assert_eq!(config.max_text_length, 1000);
        assert_eq!(config.references_tail_fraction, 0.5);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ExtractorConfig::default();
        let toml_str = config.to_toml().unwrap();
        assert_eq!(ExtractorConfig::from_toml(&toml_str).unwrap(), config);
    }
}
