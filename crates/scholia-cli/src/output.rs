//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use scholia_domain::{AnalysisReport, Claim, PaperMetadata, SelfCitationMethod};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

const CLAIM_PREVIEW_CHARS: usize = 80;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format an analysis report.
    pub fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => Ok(self.format_report_table(report)),
            OutputFormat::Quiet => Ok(format_score(report.integrity_score)),
        }
    }

    /// Format looked-up paper metadata.
    pub fn format_paper(&self, paper: &PaperMetadata) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(paper)?),
            OutputFormat::Quiet => Ok(paper.id.clone().unwrap_or_default()),
            OutputFormat::Table => {
                let authors: Vec<&str> = paper.authors.iter().map(|a| a.name.as_str()).collect();
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                push_row(&mut builder, "ID", paper.id.clone().unwrap_or_default());
                push_row(&mut builder, "DOI", paper.doi.clone().unwrap_or_default());
                push_row(&mut builder, "Title", paper.title.clone());
                push_row(
                    &mut builder,
                    "Year",
                    paper
                        .publication_year
                        .map(|y| y.to_string())
                        .unwrap_or_default(),
                );
                push_row(&mut builder, "Authors", authors.join(", "));
                push_row(&mut builder, "Cited by", paper.cited_by_count.to_string());
                push_row(
                    &mut builder,
                    "References",
                    paper.referenced_work_ids.len().to_string(),
                );
                Ok(render(builder))
            }
        }
    }

    fn format_report_table(&self, report: &AnalysisReport) -> String {
        let mut sections = vec![self.summary_table(report)];

        if !report.integrity_breakdown.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(["Signal", "Points"]);
            for entry in report.integrity_breakdown.iter() {
                push_row(&mut builder, &entry.name, format!("{:+.1}", entry.value));
            }
            sections.push(render(builder));
        }

        let claims: Vec<&Claim> = report
            .solid_claims
            .iter()
            .chain(report.vague_claims.iter())
            .collect();
        if !claims.is_empty() {
            sections.push(claims_table(&claims));
        }

        let review = &report.review;
        let mut lines = Vec::new();
        for strength in &review.strengths {
            lines.push(self.success(strength));
        }
        for weakness in &review.weaknesses {
            lines.push(self.warning(weakness));
        }
        for flag in &review.red_flags {
            lines.push(self.error(flag));
        }
        if !lines.is_empty() {
            sections.push(lines.join("\n"));
        }

        if !report.analysis_mode.is_scoreable() {
            sections.push(self.info(&format!(
                "No integrity score in {} mode.",
                report.analysis_mode
            )));
        }
        if !report.degraded_signals.is_empty() {
            sections.push(self.warning(&format!(
                "Degraded signals: {}",
                report.degraded_signals.join(", ")
            )));
        }

        sections.join("\n\n")
    }

    fn summary_table(&self, report: &AnalysisReport) -> String {
        let self_citation = &report.self_citation;
        let method = match self_citation.method {
            SelfCitationMethod::Api => "api",
            SelfCitationMethod::Heuristic => "heuristic",
            SelfCitationMethod::None => "none",
        };

        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        push_row(&mut builder, "Mode", report.analysis_mode.to_string());
        push_row(&mut builder, "Title", report.title.clone().unwrap_or_default());
        if let Some(paper) = &report.paper {
            push_row(&mut builder, "DOI", paper.doi.clone().unwrap_or_default());
            push_row(&mut builder, "Cited by", paper.cited_by_count.to_string());
        }
        push_row(
            &mut builder,
            "Integrity score",
            self.score_cell(report.integrity_score),
        );
        push_row(&mut builder, "Solid claims", report.solid_claims.len().to_string());
        push_row(&mut builder, "Vague claims", report.vague_claims.len().to_string());
        push_row(
            &mut builder,
            "Avg relevance",
            format!("{:.2}", report.avg_relevance),
        );
        push_row(&mut builder, "Citations", report.citation_count.to_string());
        push_row(
            &mut builder,
            "Self-citation",
            format!(
                "{}/{} ({:.0}%, {})",
                self_citation.count,
                self_citation.total,
                self_citation.ratio * 100.0,
                method
            ),
        );
        push_row(
            &mut builder,
            "False citations",
            report.false_citations.len().to_string(),
        );
        push_row(
            &mut builder,
            "Outdated datasets",
            report.datasets.outdated_warnings.len().to_string(),
        );
        render(builder)
    }

    fn score_cell(&self, score: Option<f64>) -> String {
        let text = format_score(score);
        match score {
            Some(s) if s >= 80.0 => self.colorize(&text, "green"),
            Some(s) if s >= 50.0 => self.colorize(&text, "yellow"),
            Some(_) => self.colorize(&text, "red"),
            None => text,
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Score with one decimal, or `n/a` when the mode forbids scoring.
pub fn format_score(score: Option<f64>) -> String {
    score.map_or_else(|| "n/a".to_string(), |s| format!("{:.1}", s))
}

fn claims_table(claims: &[&Claim]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Label", "Verified", "Relevance", "Freshness", "Claim"]);
    for claim in claims {
        builder.push_record([
            claim.label.to_string(),
            if claim.verified { "yes" } else { "no" }.to_string(),
            claim
                .relevance
                .map(|r| format!("{:.2}", r))
                .unwrap_or_else(|| "-".to_string()),
            format!(
                "{:.0} ({})",
                claim.freshness.freshness_score, claim.freshness.decay_type
            ),
            truncate(&claim.text, CLAIM_PREVIEW_CHARS),
        ]);
    }
    render(builder)
}

fn push_row(builder: &mut Builder, field: &str, value: String) {
    builder.push_record([field.to_string(), value]);
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars - 3).collect();
    format!("{}...", head)
}
