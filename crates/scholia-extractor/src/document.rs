//! Document loading and body/references split

use crate::config::ExtractorConfig;
use crate::error::{ExtractorError, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

static HEADER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:references|bibliography)\.?[ \t]*$").expect("valid regex")
});

static HEADER_BEFORE_FIRST_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:references|bibliography)\.?\s*\[1\]").expect("valid regex")
});

static INLINE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:REFERENCES|References|BIBLIOGRAPHY|Bibliography)\b").expect("valid regex")
});

/// A manuscript split into body text and reference-list text
///
/// `references` is empty when no reference section could be located.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    /// Everything before the reference section
    pub body: String,
    /// The reference section, header included
    pub references: String,
}

impl Document {
    /// Split raw text into a document
    pub fn from_text(text: &str, config: &ExtractorConfig) -> Self {
        split_sections(text, config)
    }

    /// Whether the body has no text
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// Text the bibliography should be parsed from
    ///
    /// Falls back to the body when no reference section was found.
    pub fn bibliography_source(&self) -> &str {
        if self.references.trim().is_empty() {
            &self.body
        } else {
            &self.references
        }
    }
}

/// Split text at the start of its reference section
///
/// Candidates, in priority order:
/// 1. the last `References`/`Bibliography` line, or the last such heading
///    directly followed by `[1]` (whichever starts later)
/// 2. the last inline heading starting after `inline_header_fraction`
/// 3. the last `[1]` starting after `references_tail_fraction`
pub fn split_sections(text: &str, config: &ExtractorConfig) -> Document {
    let text = text.replace("\r\n", "\n");

    let split_at = find_reference_start(&text, config);

    match split_at {
        Some(idx) => {
            debug!(split_at = idx, len = text.len(), "Located reference section");
            Document {
                body: text[..idx].trim().to_string(),
                references: text[idx..].trim().to_string(),
            }
        }
        None => {
            debug!("No reference section found");
            Document {
                body: text.trim().to_string(),
                references: String::new(),
            }
        }
    }
}

fn find_reference_start(text: &str, config: &ExtractorConfig) -> Option<usize> {
    let heading = [&*HEADER_LINE, &*HEADER_BEFORE_FIRST_ENTRY]
        .iter()
        .filter_map(|re| re.find_iter(text).last().map(|m| m.start()))
        .max();
    if heading.is_some() {
        return heading;
    }

    let len = text.len() as f64;

    let inline = INLINE_HEADER
        .find_iter(text)
        .last()
        .map(|m| m.start())
        .filter(|&pos| pos as f64 > len * config.inline_header_fraction);
    if inline.is_some() {
        return inline;
    }

    text.rfind("[1]")
        .filter(|&pos| pos as f64 > len * config.references_tail_fraction)
}

/// Load a manuscript from disk
///
/// Plain-text formats are read as UTF-8. Binary formats (PDF, Word) have no
/// text adapter in this crate and are rejected with
/// [`ExtractorError::UnsupportedFormat`].
pub fn load_document(path: &Path, config: &ExtractorConfig) -> Result<Document> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    if matches!(extension.as_str(), "pdf" | "docx" | "doc") {
        return Err(ExtractorError::UnsupportedFormat(extension));
    }

    let bytes = std::fs::read(path)?;
    let text = String::from_utf8(bytes).map_err(|e| ExtractorError::InvalidEncoding(e.to_string()))?;

    let chars = text.chars().count();
    if chars > config.max_text_length {
        return Err(ExtractorError::TextTooLong(chars, config.max_text_length));
    }

    debug!(path = %path.display(), chars, "Loaded document");
    Ok(split_sections(&text, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config() -> ExtractorConfig {
        ExtractorConfig::default()
    }

    #[test]
    fn test_split_on_header_line() {
        let text = "Intro text.\nMore body.\n\nReferences\n[1] A. Smith. Paper. 2020.\n[2] B. Lee. Other. 2019.";
        let doc = split_sections(text, &config());

        assert_eq!(doc.body, "Intro text.\nMore body.");
        assert!(doc.references.starts_with("References"));
        assert!(doc.references.contains("[2] B. Lee"));
    }

    #[test]
    fn test_split_uses_last_header() {
        let text = "We cite references [1] here.\nReferences\nnot really\nBody continues.\nREFERENCES\n[1] Real entry.";
        let doc = split_sections(text, &config());
        assert!(doc.references.starts_with("REFERENCES"));
        assert!(doc.body.contains("Body continues."));
    }

    #[test]
    fn test_split_glued_header() {
        let text = "Body sentence one. Body sentence two. Bibliography. [1] Entry one 2018.";
        let doc = split_sections(text, &config());
        assert_eq!(doc.body, "Body sentence one. Body sentence two.");
        assert!(doc.references.starts_with("Bibliography."));
    }

    #[test]
    fn test_fallback_to_last_first_entry_in_tail() {
        let body = "Body text that is long enough to push the list into the tail. ".repeat(4);
        let text = format!("{}[1] Entry one 2020. [2] Entry two 2021.", body);
        let doc = split_sections(&text, &config());
        assert!(doc.references.starts_with("[1] Entry one"));
        assert!(!doc.body.contains("[1]"));
    }

    #[test]
    fn test_early_first_entry_is_not_references() {
        let text = format!("As shown in [1], results hold. {}", "More body text. ".repeat(10));
        let doc = split_sections(&text, &config());
        assert!(doc.references.is_empty());
        assert!(doc.body.contains("[1]"));
    }

    #[test]
    fn test_bibliography_source_falls_back_to_body() {
        let doc = Document {
            body: "body".into(),
            references: String::new(),
        };
        assert_eq!(doc.bibliography_source(), "body");
    }

    #[test]
    fn test_load_rejects_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paper.PDF");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        let err = load_document(&path, &config()).unwrap_err();
        assert!(matches!(err, ExtractorError::UnsupportedFormat(ext) if ext == "pdf"));
    }

    #[test]
    fn test_load_plain_text() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "Body line.\r\nReferences\r\n[1] Entry 2020.").unwrap();

        let doc = load_document(file.path(), &config()).unwrap();
        assert_eq!(doc.body, "Body line.");
        assert_eq!(doc.references, "References\n[1] Entry 2020.");
    }

    #[test]
    fn test_load_too_long() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "{}", "x".repeat(50)).unwrap();
        let config = ExtractorConfig {
            max_text_length: 10,
            ..Default::default()
        };

        let err = load_document(file.path(), &config).unwrap_err();
        assert!(matches!(err, ExtractorError::TextTooLong(50, 10)));
    }
}
