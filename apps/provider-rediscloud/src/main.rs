//! Redis Cloud provider
//!
//! Assembles the provider configuration from the embedded Terraform schema and
//! metadata, and registers every controller with a manager.
//!
//! # Usage
//!
//! ```bash
//! # Assemble the provider and set up all controllers (dry run)
//! provider-rediscloud --config provider.yaml check
//!
//! # List the managed resources
//! provider-rediscloud resources --json
//!
//! # Show the effective configuration
//! provider-rediscloud --print-config
//! ```

// CLI tools are expected to print to stdout/stderr
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod config;
mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use provider_kit::{ControllerRegistry, Provider};
use tracing::{info, warn};

use crate::config::{AppConfig, CliOverrides};

/// Redis Cloud managed-resource provider
#[derive(Parser)]
#[command(name = "provider-rediscloud")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Enable a feature flag (repeatable)
    #[arg(long = "feature", value_name = "NAME")]
    features: Vec<String>,

    /// Override the maximum number of concurrent reconciles per controller
    #[arg(long)]
    max_concurrent_reconciles: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble the provider and set up all controllers, then exit
    Check,
    /// List the managed resources of the provider
    Resources {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set up all controllers against an in-memory manager and list them
    Controllers {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(&CliOverrides {
        verbose: cli.verbose,
        json_logs: cli.json_logs,
        features: cli.features,
        max_concurrent_reconciles: cli.max_concurrent_reconciles,
    });

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    logging::init_logging(&config.logging)?;
    for feature in config.unknown_features() {
        warn!(feature, "Unknown feature flag, ignoring");
    }

    match cli.command.unwrap_or(Commands::Check) {
        Commands::Check => check(&config),
        Commands::Resources { json } => list_resources(json),
        Commands::Controllers { json } => list_controllers(&config, json),
    }
}

fn assemble() -> Result<Provider> {
    rediscloud_config::get_provider().context("failed to assemble provider configuration")
}

fn setup_controllers(config: &AppConfig) -> Result<ControllerRegistry> {
    let registry = ControllerRegistry::new();
    rediscloud_controller::setup(&registry, &config.controller)
        .context("failed to set up controllers")?;
    Ok(registry)
}

fn check(config: &AppConfig) -> Result<()> {
    let provider = assemble()?;
    let registry = setup_controllers(config)?;
    info!(
        resources = provider.resources().len(),
        controllers = registry.len(),
        "Provider check passed"
    );
    println!(
        "OK: {} resources, {} controllers",
        provider.resources().len(),
        registry.len()
    );
    Ok(())
}

fn list_resources(json: bool) -> Result<()> {
    let provider = assemble()?;

    if json {
        println!("{}", serde_json::to_string_pretty(provider.resources())?);
        return Ok(());
    }

    for r in provider.resources().values() {
        println!(
            "{:<70} {:<30} {:<45} {}",
            r.name,
            r.group(provider.root_group()),
            r.kind,
            r.external_name
        );
    }
    Ok(())
}

fn list_controllers(config: &AppConfig, json: bool) -> Result<()> {
    let registrations = setup_controllers(config)?.registrations();

    if json {
        println!("{}", serde_json::to_string_pretty(&registrations)?);
        return Ok(());
    }

    for r in &registrations {
        println!(
            "{:<80} {}",
            r.name,
            r.terraform_resource.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}
