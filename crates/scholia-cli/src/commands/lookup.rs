//! Lookup command implementation.

use crate::cli::LookupArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use scholia_domain::MetadataSource;
use scholia_openalex::{normalize_doi, OpenAlexClient};

/// Execute the lookup command.
///
/// Runs synchronously: the OpenAlex client is blocking and no pipeline is
/// involved.
pub fn execute_lookup(args: LookupArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let client = OpenAlexClient::new(&config.openalex)?;

    let found = match (&args.doi, &args.title) {
        (Some(raw), _) => {
            let doi = normalize_doi(raw)
                .ok_or_else(|| CliError::InvalidInput(format!("'{}' is not a DOI", raw)))?;
            client.resolve_doi(&doi)?
        }
        (None, Some(title)) => client.resolve_title(title)?,
        (None, None) => {
            return Err(CliError::InvalidInput(
                "Provide --doi or --title".to_string(),
            ))
        }
    };

    match found {
        Some(paper) => println!("{}", formatter.format_paper(&paper)?),
        None => eprintln!("{}", formatter.warning("No matching work found")),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_bad_doi_is_rejected_before_any_request() {
        let args = LookupArgs {
            doi: Some("nonsense".into()),
            title: None,
        };
        let formatter = Formatter::new(OutputFormat::Table, false);
        let result = execute_lookup(args, &Config::default(), &formatter);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    #[ignore] // Requires network access to api.openalex.org
    fn test_lookup_known_doi() {
        let args = LookupArgs {
            doi: Some("10.1038/nature14539".into()),
            title: None,
        };
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        execute_lookup(args, &Config::default(), &formatter).unwrap();
    }
}
