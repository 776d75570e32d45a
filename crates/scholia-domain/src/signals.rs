//! Integrity signal results
//!
//! Each signal has a well-defined empty value so that a failed or skipped
//! analyzer still contributes a complete report.

use crate::citation::CitationMarker;
use serde::{Deserialize, Serialize};

/// How the self-citation ratio was computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfCitationMethod {
    /// Author identifiers from the metadata source
    Api,
    /// Surnames guessed from the document header
    Heuristic,
    /// Not computed
    #[default]
    None,
}

/// Self-citation signal
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelfCitationReport {
    /// `count / total`, 0 when `total` is 0
    pub ratio: f64,

    /// References sharing an author with the analyzed paper
    pub count: usize,

    /// References considered
    pub total: usize,

    /// Which path produced the numbers
    pub method: SelfCitationMethod,
}

impl SelfCitationReport {
    /// Build a report, defining the ratio as 0 for an empty denominator
    ///
    /// ```
    /// use scholia_domain::{SelfCitationMethod, SelfCitationReport};
    ///
    /// let report = SelfCitationReport::from_counts(1, 2, SelfCitationMethod::Heuristic);
    /// assert_eq!(report.ratio, 0.5);
    /// assert_eq!(SelfCitationReport::from_counts(0, 0, SelfCitationMethod::Api).ratio, 0.0);
    /// ```
    pub fn from_counts(count: usize, total: usize, method: SelfCitationMethod) -> Self {
        let ratio = if total == 0 {
            0.0
        } else {
            (count as f64 / total as f64).clamp(0.0, 1.0)
        };
        Self {
            ratio,
            count,
            total,
            method,
        }
    }
}

/// Where a false citation's comparison text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonSource {
    /// Abstract of the aligned referenced work
    Abstract,
    /// Raw bibliography entry text
    Bibliography,
}

/// A citing sentence whose reference does not appear to support it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FalseCitation {
    /// Marker that was cited
    pub citation: CitationMarker,

    /// The citing sentence
    pub context: String,

    /// Start of the comparison text
    pub abstract_snippet: String,

    /// Cosine similarity between sentence and comparison text
    pub similarity_score: f64,

    /// Fixed explanation
    pub reasoning: String,

    /// What the sentence was compared against
    pub source: ComparisonSource,
}

/// A known dataset flagged as outdated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetWarning {
    /// Dataset name as it appears in the knowledge base
    pub dataset: String,

    /// Human-readable explanation
    pub reason: String,
}

/// How the paper's datasets compare with what the field uses now
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MarketComparison {
    /// Most frequent domain among matched known datasets
    pub domain: String,

    /// Newest known datasets in that domain
    pub latest_available: Vec<String>,

    /// Newest known datasets the paper does not use
    pub missed: Vec<String>,

    /// One-sentence summary
    pub analysis: String,
}

/// Dataset freshness signal
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DatasetReport {
    /// Every dataset name found, known or not, in first-seen order
    pub datasets_found: Vec<String>,

    /// Outdated known datasets
    pub outdated_warnings: Vec<DatasetWarning>,

    /// Present when at least one known dataset was matched
    #[serde(default)]
    pub market_comparison: Option<MarketComparison>,
}
