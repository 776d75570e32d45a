//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::services::build_collaborators;
use chrono::Datelike;
use scholia_analysis::{AnalysisRequest, Analyzer};
use scholia_openalex::normalize_doi;
use tracing::debug;

/// Execute the analyze command.
pub fn execute_analyze(args: AnalyzeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let request = build_request(&args, config, chrono::Local::now().year())?;
    debug!(file = ?args.file, doi = ?request.doi, "Built analysis request");

    let collaborators = build_collaborators(config, args.offline)?;
    let analyzer = Analyzer::new(collaborators, config.analysis.clone())?;

    let runtime = tokio::runtime::Runtime::new()?;
    let report = runtime.block_on(analyzer.analyze(request))?;

    println!("{}", formatter.format_report(&report)?);
    if formatter.format() == OutputFormat::Quiet && !report.degraded_signals.is_empty() {
        eprintln!(
            "{}",
            formatter.warning(&format!(
                "Degraded signals: {}",
                report.degraded_signals.join(", ")
            ))
        );
    }
    Ok(())
}

/// Turn command arguments into an analysis request.
pub fn build_request(
    args: &AnalyzeArgs,
    config: &Config,
    current_year: i32,
) -> Result<AnalysisRequest> {
    if args.file.is_none() && args.doi.is_none() {
        return Err(CliError::InvalidInput(
            "Provide a manuscript file, a --doi, or both".to_string(),
        ));
    }

    let mut request = match &args.file {
        Some(path) => AnalysisRequest::from_path(path, &config.extractor, current_year)?,
        None => AnalysisRequest::new(current_year),
    };
    if let Some(raw) = &args.doi {
        let doi = normalize_doi(raw)
            .ok_or_else(|| CliError::InvalidInput(format!("'{}' is not a DOI", raw)))?;
        request = request.with_doi(doi);
    }
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(file: Option<std::path::PathBuf>, doi: Option<&str>) -> AnalyzeArgs {
        AnalyzeArgs {
            file,
            doi: doi.map(str::to_string),
            offline: true,
        }
    }

    #[test]
    fn test_request_needs_input() {
        let result = build_request(&args(None, None), &Config::default(), 2026);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_doi_is_normalized() {
        let request = build_request(
            &args(None, Some("https://doi.org/10.1038/Nature14539")),
            &Config::default(),
            2026,
        )
        .unwrap();
        assert_eq!(request.doi.as_deref(), Some("10.1038/nature14539"));
        assert!(request.document.is_none());
        assert_eq!(request.current_year, 2026);
    }

    #[test]
    fn test_bad_doi_is_rejected() {
        let result = build_request(&args(None, Some("not a doi")), &Config::default(), 2026);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_file_is_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("paper.txt");
        fs::write(
            &path,
            "A Study of Sparse Attention\n\nWe propose a method [1].\n\nReferences\n[1] Smith, 2020.\n",
        )
        .unwrap();

        let request = build_request(&args(Some(path.clone()), None), &Config::default(), 2026)
            .unwrap();
        let document = request.document.unwrap();
        assert!(document.body.contains("We propose a method [1]."));
        assert!(document.references.contains("Smith, 2020."));
        assert_eq!(request.source_path, Some(path));
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let result = build_request(
            &args(Some(dir.path().join("absent.txt")), None),
            &Config::default(),
            2026,
        );
        assert!(matches!(result, Err(CliError::Analysis(_))));
    }
}
