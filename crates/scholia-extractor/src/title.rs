//! Title guessing for DOI cross-checks

use std::path::Path;

const MIN_TITLE_WORDS: usize = 4;
const MAX_TITLE_WORDS: usize = 25;

/// Guess the manuscript title
///
/// Takes the first non-empty body line with 4 to 25 words. Falls back to the
/// file name stem with underscores turned into spaces.
///
/// ```
/// use scholia_extractor::guess_title;
/// use std::path::Path;
///
/// let body = "arXiv preprint\nAttention Is All You Need\nAbstract";
/// assert_eq!(guess_title(body, None).as_deref(), Some("Attention Is All You Need"));
///
/// let fallback = guess_title("", Some(Path::new("/tmp/deep_residual_learning.txt")));
/// assert_eq!(fallback.as_deref(), Some("deep residual learning"));
/// ```
pub fn guess_title(body: &str, file_name: Option<&Path>) -> Option<String> {
    let from_body = body
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .find(|line| {
            let words = line.split_whitespace().count();
            (MIN_TITLE_WORDS..=MAX_TITLE_WORDS).contains(&words)
        })
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "));

    from_body.or_else(|| {
        file_name
            .and_then(|p| p.file_stem())
            .and_then(|s| s.to_str())
            .map(|s| s.replace('_', " ").trim().to_string())
            .filter(|s| !s.is_empty())
    })
}
