//! `cguard` - CLI for contactguard
//!
//! Filters chat messages from the command line or stdin, for checking rules
//! and allowlists against real message text.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use contactguard::cli::{Cli, Command, ConfigCommand, FilterCommand, ValidateCommand};
use contactguard::{init_logging, Config, ContactFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    match cli.command {
        Command::Filter(filter_cmd) => handle_filter(&load_config(cli.config)?, filter_cmd),
        Command::Validate(validate_cmd) => handle_validate(&load_config(cli.config)?, validate_cmd),
        Command::Config(config_cmd) => handle_config(cli.config, config_cmd),
    }
}

fn load_config(config_path: Option<PathBuf>) -> Result<Config> {
    Config::load_from(config_path).context("failed to load configuration")
}

/// Build a filter from configuration plus domains given on the command line.
fn build_filter(config: &Config, allow_domains: Vec<String>) -> Result<ContactFilter> {
    let mut filter_config = config.filter.clone();
    filter_config.allowed_domains.extend(allow_domains);
    filter_config
        .validate()
        .context("invalid --allow-domain value")?;
    Ok(ContactFilter::with_config(filter_config))
}

/// The message from the argument, or stdin, with surrounding whitespace trimmed.
fn read_message(text: Option<String>) -> contactguard::Result<String> {
    let raw = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(raw.trim().to_string())
}

fn to_json<T: Serialize>(value: &T) -> contactguard::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn handle_filter(config: &Config, cmd: FilterCommand) -> Result<()> {
    let filter = build_filter(config, cmd.allow_domains)?;
    let message = read_message(cmd.text).context("failed to read message")?;
    let result = filter.filter(&message);

    if result.has_suspicious_phrase {
        info!("Message suggests moving the conversation off-platform");
    }

    if cmd.json {
        println!("{}", to_json(&result)?);
    } else {
        println!("{}", result.text());
        if let Some(warning) = result.warning() {
            eprintln!("warning: {warning}");
        }
    }
    Ok(())
}

fn handle_validate(config: &Config, cmd: ValidateCommand) -> Result<()> {
    let filter = build_filter(config, cmd.allow_domains)?;
    let message = read_message(cmd.text).context("failed to read message")?;
    let validation = filter.validate(&message);

    println!("{}", to_json(&validation)?);
    Ok(())
}

fn handle_config(config_path: Option<PathBuf>, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = load_config(config_path)?;
            if json {
                println!("{}", to_json(&config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Filter]");
                println!("  Enabled:            {}", config.filter.enabled);
                println!(
                    "  Allowed domains:    {}",
                    config.filter.allowed_domains.join(", ")
                );
            }
        }
        ConfigCommand::Path => {
            let path = config_path.unwrap_or_else(Config::default_config_path);
            println!("{}", path.display());
        }
        ConfigCommand::Validate { file } => {
            let path = file
                .or(config_path)
                .unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
