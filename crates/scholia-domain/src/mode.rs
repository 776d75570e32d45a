//! Analysis mode - which evidence sources a run trusts

use serde::{Deserialize, Serialize};
use std::fmt;

/// Enumerated trust state chosen once per run
///
/// | Mode | Document text | Metadata | Scored |
/// |------|---------------|----------|--------|
/// | `DOI_ONLY` | none | yes | no |
/// | `PDF_ONLY` | trusted | no | yes |
/// | `MATCHED_HYBRID` | trusted | yes | yes |
/// | `MATCHED_HYBRID_WARN` | discarded | yes | no |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalysisMode {
    /// Only a DOI was supplied
    DoiOnly,
    /// Only a document was supplied, or its DOI did not resolve
    PdfOnly,
    /// Document and DOI agree on the title
    MatchedHybrid,
    /// Document title disagrees with the DOI's metadata
    MatchedHybridWarn,
}

impl AnalysisMode {
    /// Whether body-level analysis may read the document text
    pub fn trusts_document(&self) -> bool {
        matches!(self, AnalysisMode::PdfOnly | AnalysisMode::MatchedHybrid)
    }

    /// Whether an integrity score may be computed
    pub fn is_scoreable(&self) -> bool {
        self.trusts_document()
    }

    /// Whether resolved metadata is part of the evidence
    pub fn uses_metadata(&self) -> bool {
        !matches!(self, AnalysisMode::PdfOnly)
    }

    /// Upper-case label
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::DoiOnly => "DOI_ONLY",
            AnalysisMode::PdfOnly => "PDF_ONLY",
            AnalysisMode::MatchedHybrid => "MATCHED_HYBRID",
            AnalysisMode::MatchedHybridWarn => "MATCHED_HYBRID_WARN",
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
