//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Filter command arguments.
#[derive(Debug, Args)]
pub struct FilterCommand {
    /// Message text (read from stdin when omitted)
    pub text: Option<String>,

    /// Output the full filter report as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Additional trusted domain whose links are kept (repeatable)
    #[arg(short = 'a', long = "allow-domain", value_name = "DOMAIN")]
    pub allow_domains: Vec<String>,
}

/// Validate command arguments.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Message text (read from stdin when omitted)
    pub text: Option<String>,

    /// Additional trusted domain whose links are kept (repeatable)
    #[arg(short = 'a', long = "allow-domain", value_name = "DOMAIN")]
    pub allow_domains: Vec<String>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
