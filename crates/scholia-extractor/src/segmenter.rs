//! Rule-based sentence segmentation

use regex::Regex;
use scholia_domain::SentenceSegmenter;
use std::collections::HashSet;
use std::sync::LazyLock;

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n").expect("valid regex"));

/// Tokens that end in a period without ending a sentence
const ABBREVIATIONS: &[&str] = &[
    "al.", "approx.", "cf.", "ch.", "dr.", "e.g.", "eq.", "eqs.", "etc.", "fig.", "figs.", "i.e.",
    "mr.", "ms.", "no.", "pp.", "prof.", "ref.", "refs.", "resp.", "sec.", "tab.", "vol.", "vs.",
];

/// Splits text into sentences on terminal punctuation
///
/// A `.`, `!` or `?` ends a sentence when it is followed by whitespace and
/// the next word starts with an upper-case letter, a digit, a quote or an
/// opening bracket. Known abbreviations and single-letter initials never end
/// a sentence. Blank lines always do, so headings stay separate from the
/// paragraphs below them.
#[derive(Debug, Clone)]
pub struct RuleSegmenter {
    abbreviations: HashSet<&'static str>,
}

impl RuleSegmenter {
    /// Create a segmenter with the built-in abbreviation list
    pub fn new() -> Self {
        Self {
            abbreviations: ABBREVIATIONS.iter().copied().collect(),
        }
    }

    fn split_paragraph(&self, paragraph: &str, out: &mut Vec<String>) {
        let chars: Vec<(usize, char)> = paragraph.char_indices().collect();
        let mut start = 0;

        for (i, &(pos, c)) in chars.iter().enumerate() {
            if !matches!(c, '.' | '!' | '?') {
                continue;
            }
            let Some(&(_, after)) = chars.get(i + 1) else {
                continue;
            };
            if !after.is_whitespace() {
                continue;
            }
            let next_word_start = chars.get(i + 2).map(|&(_, n)| n);
            let starts_sentence = next_word_start.is_some_and(|n| {
                n.is_uppercase() || n.is_ascii_digit() || matches!(n, '"' | '\'' | '(' | '[' | '“')
            });
            if !starts_sentence {
                continue;
            }
            let end = pos + c.len_utf8();
            if c == '.' && self.is_abbreviation(&paragraph[start..end]) {
                continue;
            }
            push_trimmed(&paragraph[start..end], out);
            start = end;
        }

        push_trimmed(&paragraph[start..], out);
    }

    fn is_abbreviation(&self, sentence_so_far: &str) -> bool {
        let token = sentence_so_far
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or_default()
            .trim_start_matches(['(', '[', '"']);
        let lower = token.to_lowercase();
        if self.abbreviations.contains(lower.as_str()) {
            return true;
        }
        let mut letters = token.chars();
        matches!(
            (letters.next(), letters.next(), letters.next()),
            (Some(l), Some('.'), None) if l.is_uppercase()
        )
    }
}

impl Default for RuleSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSegmenter for RuleSegmenter {
    fn split_sentences(&self, text: &str) -> Vec<String> {
        let text = text.replace("\r\n", "\n");
        let mut sentences = Vec::new();
        for paragraph in PARAGRAPH_BREAK.split(&text) {
            let flat = paragraph.split_whitespace().collect::<Vec<_>>().join(" ");
            if !flat.is_empty() {
                self.split_paragraph(&flat, &mut sentences);
            }
        }
        sentences
    }
}

fn push_trimmed(sentence: &str, out: &mut Vec<String>) {
    let sentence = sentence.trim();
    if !sentence.is_empty() {
        out.push(sentence.to_string());
    }
}
