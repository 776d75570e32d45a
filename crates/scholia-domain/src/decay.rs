//! Decay categories - how quickly a claim's truth is expected to go stale

use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-life used for categories the decay collaborator did not recognize
pub const DEFAULT_HALF_LIFE_YEARS: f64 = 5.0;

/// Coarse category of how fast a claim's supporting facts move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DecayType {
    /// Benchmarks, prices, leaderboards
    Fast,
    /// Methods and tooling that get superseded within a few years
    Medium,
    /// Established empirical findings
    Slow,
    /// Mathematical or definitional statements
    Timeless,
    /// Anything the collaborator returned that is not one of the above
    #[default]
    Unclassified,
}

impl DecayType {
    /// Half-life in years
    pub fn half_life(&self) -> f64 {
        match self {
            DecayType::Fast => 1.5,
            DecayType::Medium => 4.0,
            DecayType::Slow => 15.0,
            DecayType::Timeless => 100.0,
            DecayType::Unclassified => DEFAULT_HALF_LIFE_YEARS,
        }
    }

    /// Parse a collaborator label, case-insensitively
    ///
    /// ```
    /// use scholia_domain::DecayType;
    ///
    /// assert_eq!(DecayType::parse(" fast "), DecayType::Fast);
    /// assert_eq!(DecayType::parse("GLACIAL"), DecayType::Unclassified);
    /// ```
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "FAST" => DecayType::Fast,
            "MEDIUM" => DecayType::Medium,
            "SLOW" => DecayType::Slow,
            "TIMELESS" => DecayType::Timeless,
            _ => DecayType::Unclassified,
        }
    }

    /// Upper-case label
    pub fn as_str(&self) -> &'static str {
        match self {
            DecayType::Fast => "FAST",
            DecayType::Medium => "MEDIUM",
            DecayType::Slow => "SLOW",
            DecayType::Timeless => "TIMELESS",
            DecayType::Unclassified => "UNCLASSIFIED",
        }
    }
}

impl fmt::Display for DecayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the decay-classification collaborator for one sentence
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DecayAnalysis {
    /// Decay category
    pub decay_type: DecayType,

    /// Why the collaborator chose this category
    #[serde(default)]
    pub reason: String,

    /// Volatile quantities the claim depends on (benchmarks, prices, versions)
    #[serde(default)]
    pub moving_variables: Vec<String>,

    /// What would have to change for the claim to stop holding
    #[serde(default)]
    pub stress_test: String,

    /// How settled the field considers the claim
    #[serde(default)]
    pub consensus: String,
}
