//! Dataset freshness
//!
//! Finds the datasets a paper evaluates on, flags known ones that have been
//! superseded, and compares the paper's choices with the newest datasets of
//! its primary domain.

use regex::Regex;
use scholia_domain::{DatasetReport, DatasetWarning, MarketComparison};
use serde::Deserialize;
use std::ops::Range;
use std::sync::LazyLock;
use tracing::debug;

const LATEST_SHOWN: usize = 5;
const MISSED_CONSIDERED: usize = 3;

/// Capitalized name directly followed by a bracket citation, e.g.
/// `Kinetics-700 [12]` or `Something Something (SSv2) [4, 5]`
static CITED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b([A-Z][A-Za-z0-9+\-]+(?:\s+[A-Z][A-Za-z0-9+\-]+)*)\s*(?:\([A-Za-z0-9+\-]+\))?\s*\[\d+(?:,\s*\d+)*\]",
    )
    .expect("valid regex")
});

const NOT_DATASETS: &[&str] = &[
    "Figure", "Table", "Section", "In", "The", "We", "A", "This", "Eq", "Equation", "Ref",
    "Reference", "Let",
];

static BUILTIN: LazyLock<Vec<KnownDataset>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("datasets_kb.json")).expect("valid dataset catalog")
});

/// A dataset the catalog knows about
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KnownDataset {
    /// Canonical name
    pub name: String,
    /// Research domain
    pub domain: String,
    /// Release year
    pub year: i32,
    /// Newer datasets that replace it
    #[serde(default)]
    pub superseded_by: Vec<String>,
}

/// Known datasets with precompiled name matchers
#[derive(Debug, Clone)]
pub struct DatasetCatalog {
    datasets: Vec<KnownDataset>,
    /// Catalog index and case-insensitive matcher, longest name first
    matchers: Vec<(usize, Regex)>,
}

impl DatasetCatalog {
    /// The catalog shipped with the crate
    pub fn builtin() -> Self {
        Self::new(BUILTIN.clone())
    }

    /// Build a catalog from entries
    pub fn new(datasets: Vec<KnownDataset>) -> Self {
        let mut matchers: Vec<(usize, Regex)> = datasets
            .iter()
            .enumerate()
            .filter_map(|(i, d)| {
                Regex::new(&format!("(?i){}", regex::escape(&d.name)))
                    .ok()
                    .map(|re| (i, re))
            })
            .collect();
        matchers.sort_by_key(|(i, _)| std::cmp::Reverse(datasets[*i].name.chars().count()));
        Self { datasets, matchers }
    }

    /// Parse a catalog from a JSON array of entries
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Look up a dataset by canonical name
    pub fn get(&self, name: &str) -> Option<&KnownDataset> {
        self.datasets.iter().find(|d| d.name == name)
    }

    /// Names of datasets mentioned in the text
    ///
    /// Known names come first, matched longest-first and case-insensitively
    /// at word boundaries; matched text is blanked so `CIFAR-100` does not
    /// also count as `CIFAR-10`. Unknown names cited as `Name [n]` follow.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();
        let mut remaining = text.to_string();

        for (i, matcher) in &self.matchers {
            let ranges: Vec<Range<usize>> = matcher
                .find_iter(&remaining)
                .filter(|m| is_word_bounded(&remaining, m.start(), m.end()))
                .map(|m| m.range())
                .collect();
            if ranges.is_empty() {
                continue;
            }
            found.push(self.datasets[*i].name.clone());
            remaining = blank_out(&remaining, &ranges);
        }

        for caps in CITED_NAME.captures_iter(&remaining) {
            let name = caps[1].trim();
            if name.len() > 2 && !NOT_DATASETS.contains(&name) && !found.iter().any(|f| f == name)
            {
                found.push(name.to_string());
            }
        }

        debug!(datasets = found.len(), "Extracted datasets");
        found
    }

    /// Flag outdated known datasets and compare with the domain's newest
    ///
    /// A known dataset is outdated when it is at least `age_threshold` years
    /// old and has successors, or when it has successors none of which the
    /// paper also uses.
    pub fn analyze(
        &self,
        found: &[String],
        current_year: i32,
        age_threshold: i32,
    ) -> DatasetReport {
        let mut warnings = Vec::new();
        let mut domain_counts: Vec<(&str, usize)> = Vec::new();

        for name in found {
            let Some(known) = self.get(name) else {
                continue;
            };
            match domain_counts
                .iter_mut()
                .find(|(d, _)| *d == known.domain.as_str())
            {
                Some((_, count)) => *count += 1,
                None => domain_counts.push((known.domain.as_str(), 1)),
            }

            if known.superseded_by.is_empty() {
                continue;
            }
            let age = current_year - known.year;
            let successors = known.superseded_by.join(", ");
            if age >= age_threshold {
                warnings.push(DatasetWarning {
                    dataset: known.name.clone(),
                    reason: format!(
                        "{} is {} years old. Newer alternatives exist: {}.",
                        known.name, age, successors
                    ),
                });
            } else if !known.superseded_by.iter().any(|s| found.contains(s)) {
                warnings.push(DatasetWarning {
                    dataset: known.name.clone(),
                    reason: format!(
                        "{} has modern alternatives ({}) which were not utilized.",
                        known.name, successors
                    ),
                });
            }
        }

        DatasetReport {
            datasets_found: found.to_vec(),
            outdated_warnings: warnings,
            market_comparison: self.market_comparison(&domain_counts, found),
        }
    }

    fn market_comparison(
        &self,
        domain_counts: &[(&str, usize)],
        found: &[String],
    ) -> Option<MarketComparison> {
        // Ties go to the domain seen first
        let (domain, _) = domain_counts
            .iter()
            .fold(None::<(&str, usize)>, |best, &(d, c)| match best {
                Some((_, bc)) if bc >= c => best,
                _ => Some((d, c)),
            })?;

        let mut newest: Vec<&KnownDataset> =
            self.datasets.iter().filter(|d| d.domain == domain).collect();
        newest.sort_by_key(|d| std::cmp::Reverse(d.year));

        let latest_available = newest
            .iter()
            .take(LATEST_SHOWN)
            .map(|d| format!("{} ({})", d.name, d.year))
            .collect();
        let missed: Vec<String> = newest
            .iter()
            .take(MISSED_CONSIDERED)
            .filter(|d| !found.contains(&d.name))
            .map(|d| d.name.clone())
            .collect();

        let mut analysis = format!("The author primarily evaluated on {} datasets.", domain);
        if missed.is_empty() {
            analysis.push_str(
                " They successfully incorporated the latest available benchmarks in this field.",
            );
        } else {
            analysis.push_str(&format!(
                " They missed incorporating the latest leading datasets in the market such as {}.",
                missed.join(", ")
            ));
        }

        Some(MarketComparison {
            domain: domain.to_string(),
            latest_available,
            missed,
            analysis,
        })
    }
}

impl Default for DatasetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

fn blank_out(text: &str, ranges: &[Range<usize>]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for range in ranges {
        out.push_str(&text[last..range.start]);
        out.push(' ');
        last = range.end;
    }
    out.push_str(&text[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = DatasetCatalog::builtin();
        let mnist = catalog.get("MNIST").unwrap();
        assert_eq!(mnist.year, 1998);
        assert!(!mnist.superseded_by.is_empty());
    }

    #[test]
    fn test_longest_name_wins() {
        let catalog = DatasetCatalog::builtin();
        let found = catalog.extract("We report results on CIFAR-100 and on squad 2.0.");
        assert_eq!(found, vec!["CIFAR-100".to_string(), "SQuAD 2.0".to_string()]);
    }

    #[test]
    fn test_word_boundaries_respected() {
        let catalog = DatasetCatalog::builtin();
        assert!(catalog.extract("The glueing step is manual.").is_empty());
    }

    #[test]
    fn test_unknown_cited_dataset() {
        let catalog = DatasetCatalog::builtin();
        let found = catalog.extract("We also use Kinetics-700 [12] and Table [3].");
        assert_eq!(found, vec!["Kinetics-700".to_string()]);
    }

    #[test]
    fn test_old_dataset_with_successors_is_outdated() {
        let catalog = DatasetCatalog::builtin();
        let report = catalog.analyze(&["MNIST".to_string()], 2026, 8);
        assert_eq!(report.outdated_warnings.len(), 1);
        assert_eq!(
            report.outdated_warnings[0].reason,
            "MNIST is 28 years old. Newer alternatives exist: CIFAR-10, ImageNet."
        );
    }

    #[test]
    fn test_recent_dataset_with_unused_successor() {
        let catalog = DatasetCatalog::builtin();
        let report = catalog.analyze(&["MMLU".to_string()], 2024, 8);
        assert_eq!(
            report.outdated_warnings[0].reason,
            "MMLU has modern alternatives (MMLU-Pro) which were not utilized."
        );

        let report = catalog.analyze(&["MMLU".to_string(), "MMLU-Pro".to_string()], 2024, 8);
        assert!(report.outdated_warnings.is_empty());
    }

    #[test]
    fn test_market_comparison() {
        let catalog = DatasetCatalog::builtin();
        let found = vec!["ImageNet".to_string(), "ImageNet-21K".to_string()];
        let report = catalog.analyze(&found, 2026, 8);
        let market = report.market_comparison.unwrap();

        assert_eq!(market.domain, "Image Classification");
        assert_eq!(market.latest_available[0], "ImageNet-21K (2021)");
        assert_eq!(market.latest_available.len(), 5);
        assert_eq!(market.missed, vec!["ImageNet-V2".to_string(), "Fashion-MNIST".to_string()]);
        assert!(market.analysis.contains("ImageNet-V2, Fashion-MNIST"));
    }

    #[test]
    fn test_unknown_only_has_no_market() {
        let catalog = DatasetCatalog::builtin();
        let report = catalog.analyze(&["Kinetics-700".to_string()], 2026, 8);
        assert!(report.market_comparison.is_none());
        assert!(report.outdated_warnings.is_empty());
        assert_eq!(report.datasets_found, vec!["Kinetics-700".to_string()]);
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = DatasetCatalog::from_json(
            r#"[{"name": "Toy", "domain": "Demo", "year": 2000, "superseded_by": ["Toy2"]}]"#,
        )
        .unwrap();
        let report = catalog.analyze(&catalog.extract("Trained on toy data."), 2026, 8);
        assert_eq!(report.outdated_warnings.len(), 1);
    }
}
