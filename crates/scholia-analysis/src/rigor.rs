//! Methodological rigor indicators
//!
//! Pattern families are matched case-insensitively over the body text. A
//! family is present when any of its patterns matches; the distinct matched
//! snippets are kept in first-seen order.

use regex::Regex;
use scholia_domain::RigorReport;
use std::sync::LazyLock;

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?i){}", p)).expect("valid regex"))
        .collect()
}

static ABLATION: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"ablation study",
        r"impact of (?:each|the|different) component",
        r"component analysis",
        r"without (?:the )?proposed",
        r"w/o (?:the )?proposed",
        r"removing (?:the )?layer",
    ])
});

static BASELINES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"compared (?:with|to) (?:the )?baselines",
        r"state-of-the-art (?:methods|models)",
        r"competitive analysis",
        r"previous (?:work|methods)",
        r"standard competitive baseline",
    ])
});

static STATISTICS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"p-value",
        r"statistically significant",
        r"standard deviation",
        r"confidence interval",
        r"t-test",
        r"anova",
        r"chi-square",
        r"wilcoxon",
        r"±\s*\d+\.\d+",
        r"multiple seeds",
        r"random seeds",
    ])
});

static REPRODUCIBILITY: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"github\.com/[a-zA-Z0-9_\-]+/[a-zA-Z0-9_\-]+",
        r"supplementary material",
        r"source code (?:is|will be) available",
        r"reproducibility",
        r"hyperparameters",
        r"training details",
        r"data (?:is|will be) shared",
    ])
});

static FORMAL_METHODS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let mut patterns = compile(&[
        r"theorem",
        r"proof",
        r"proposition",
        r"mathematical model",
        r"formalized",
        r"derivation",
        r"formulation",
    ]);
    // Case matters here: a single capital variable assigned a sum or integral
    patterns.push(
        Regex::new(r"\b[A-Z]\s*=\s*(?:\\sum|\\int|\\prod|\\lim)\b").expect("valid regex"),
    );
    patterns
});

static ASSUMPTIONS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"we assume",
        r"assuming",
        r"under the assumption",
        r"simplified setting",
        r"closed-world",
        r"constraints",
    ])
});

/// Distinct matches of any pattern, grouped by pattern order
fn find_all(patterns: &[Regex], text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for pattern in patterns {
        for m in pattern.find_iter(text) {
            if !found.iter().any(|f| f == m.as_str()) {
                found.push(m.as_str().to_string());
            }
        }
    }
    found
}

/// Scan body text for rigor indicators
pub fn analyze_rigor(text: &str) -> RigorReport {
    let ablation_mentions = find_all(&ABLATION, text);
    let baseline_mentions = find_all(&BASELINES, text);
    let statistical_indicators = find_all(&STATISTICS, text);
    let repro_mentions = find_all(&REPRODUCIBILITY, text);
    let math_mentions = find_all(&FORMAL_METHODS, text);
    let assumption_mentions = find_all(&ASSUMPTIONS, text);

    RigorReport {
        has_ablation: !ablation_mentions.is_empty(),
        has_baselines: !baseline_mentions.is_empty(),
        has_statistical_validation: !statistical_indicators.is_empty(),
        has_reproducibility: !repro_mentions.is_empty(),
        has_methodological_depth: !math_mentions.is_empty(),
        has_explicit_assumptions: !assumption_mentions.is_empty(),
        ablation_mentions,
        baseline_mentions,
        statistical_indicators,
        repro_mentions,
        math_mentions,
        assumption_mentions,
    }
}
