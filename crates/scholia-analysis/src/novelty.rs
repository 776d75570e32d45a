//! Novelty indicators: contribution statements, novelty vocabulary,
//! research-gap statements

use regex::Regex;
use scholia_domain::NoveltyReport;
use std::sync::LazyLock;

static CONTRIBUTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)our contributions|the novelty of (?:our|this) (?:paper|work|method)|specifically, we|to the best of our knowledge, (?:this is )?the first|we provide (?:the )?first",
    )
    .expect("valid regex")
});

static NOVELTY_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:novel(?:ty)?|state-of-the-art|sota|outperform\w*|superior|groundbreaking|pioneering)\b",
    )
    .expect("valid regex")
});

static GAP: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"however, existing (?:methods|works|approaches) (?:fail to|lack|suffer from)",
        r"a major limitation (?:of|is)",
        r"this gap (?:remains|is)",
        r"unsolved problem",
        r"it is (?:not yet|unclear|difficult to)",
        r"to address these (?:limitations|issues|challenges)",
    ]
    .iter()
    .map(|p| Regex::new(&format!("(?i){}", p)).expect("valid regex"))
    .collect()
});

/// Words that make a contribution statement technically concrete
const FEATURE_WORDS: [&str; 7] = [
    "algorithm",
    "framework",
    "architecture",
    "benchmark",
    "dataset",
    "proof",
    "optimization",
];

/// Contributions shorter than this many words are never specific
const SPECIFIC_MIN_WORDS: usize = 20;

/// Scan body sentences (and the joined body text) for novelty indicators
///
/// Each contribution is the matching sentence joined with the sentence
/// after it, when there is one.
pub fn analyze_novelty(sentences: &[String], text: &str) -> NoveltyReport {
    let mut contributions: Vec<String> = Vec::new();
    for (i, sentence) in sentences.iter().enumerate() {
        if !CONTRIBUTION.is_match(sentence) {
            continue;
        }
        let mut context = sentence.trim().to_string();
        if let Some(next) = sentences.get(i + 1) {
            context.push(' ');
            context.push_str(next.trim());
        }
        if !contributions.contains(&context) {
            contributions.push(context);
        }
    }

    let mut novelty_keywords: Vec<String> = Vec::new();
    for m in NOVELTY_WORDS.find_iter(text) {
        let word = m.as_str().to_lowercase();
        if !novelty_keywords.contains(&word) {
            novelty_keywords.push(word);
        }
    }

    let mut gap_mentions: Vec<String> = Vec::new();
    for pattern in GAP.iter() {
        for m in pattern.find_iter(text) {
            if !gap_mentions.iter().any(|g| g == m.as_str()) {
                gap_mentions.push(m.as_str().to_string());
            }
        }
    }

    let is_novelty_specific = is_specific(&contributions.join(" "));

    NoveltyReport {
        has_contribution_statement: !contributions.is_empty(),
        contributions,
        novelty_keywords,
        has_scientific_gap: !gap_mentions.is_empty(),
        gap_mentions,
        is_novelty_specific,
    }
}

fn is_specific(contribution_text: &str) -> bool {
    let lower = contribution_text.to_lowercase();
    FEATURE_WORDS.iter().any(|w| lower.contains(w))
        && contribution_text.split_whitespace().count() > SPECIFIC_MIN_WORDS
}
