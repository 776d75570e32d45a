//! CLI command definitions and argument parsing.

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

/// Scholia - integrity reports for research manuscripts.
#[derive(Debug, Parser)]
#[command(name = "scholia")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "SCHOLIA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log pipeline stages to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (score only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a manuscript, a DOI, or both
    Analyze(AnalyzeArgs),

    /// Look up a paper's metadata on OpenAlex
    Lookup(LookupArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Manuscript text file (.txt or .md)
    pub file: Option<PathBuf>,

    /// DOI of the paper (bare, `doi:` prefixed, or a doi.org URL)
    #[arg(short, long)]
    pub doi: Option<String>,

    /// Skip every network call (no metadata, heuristic models only)
    #[arg(long)]
    pub offline: bool,
}

/// Arguments for the lookup command.
#[derive(Debug, Parser)]
#[command(group(ArgGroup::new("target").required(true).args(["doi", "title"])))]
pub struct LookupArgs {
    /// DOI to resolve
    #[arg(short, long)]
    pub doi: Option<String>,

    /// Title to search for
    #[arg(short, long)]
    pub title: Option<String>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file path
    Path,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
