//! Scholia CLI library.
//!
//! This library provides the core functionality for the `scholia` command-line
//! interface: configuration management, collaborator wiring, command
//! execution, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod services;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
