//! Example manifest checker
//!
//! Validates that every example manifest refers to a served CRD version and
//! carries the fields its schema requires.
//!
//! # Usage
//!
//! ```bash
//! check-examples package/crds examples
//!
//! # JSON output
//! check-examples --json package/crds examples
//! ```

// CLI tools are expected to print to stdout/stderr
#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::expect_used
)]

mod crds;
mod error;
mod scanner;
mod validator;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use crate::crds::load_crds;
use crate::error::ExampleError;
use crate::scanner::find_example_files;
use crate::validator::validate_example;

/// Validates example manifests against their CRDs.
#[derive(Parser, Debug)]
#[command(name = "check-examples")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the CRD YAML files
    crd_dir: PathBuf,

    /// Directory holding the example manifests (searched recursively)
    examples_dir: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Show verbose output including loaded CRD versions
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    for (label, dir) in [("CRD", &cli.crd_dir), ("Examples", &cli.examples_dir)] {
        if !dir.is_dir() {
            eprintln!("Error: {label} directory '{}' does not exist", dir.display());
            return ExitCode::FAILURE;
        }
    }

    if !cli.json {
        println!("Loading CRDs from {}...", cli.crd_dir.display());
    }
    let (crds, load_errors) = load_crds(&cli.crd_dir);
    for e in &load_errors {
        eprintln!("{}", e.to_string().yellow());
    }
    if cli.verbose {
        for (key, crd) in crds.entries() {
            eprintln!("  {key} ({})", crd.file.display());
        }
    }

    let files = find_example_files(&cli.examples_dir, cli.verbose);
    if !cli.json {
        println!("Loaded {} CRD versions", crds.len());
        println!("Checking {} example files...", files.len());
    }

    let results: Vec<(PathBuf, Vec<ExampleError>)> = files
        .into_iter()
        .map(|file| {
            let errors = validate_example(&file, &crds);
            (file, errors)
        })
        .collect();

    if cli.json {
        print_json_results(&results, crds.len());
    } else {
        print_results(&results);
    }

    if results.iter().all(|(_, errors)| errors.is_empty()) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_json_results(results: &[(PathBuf, Vec<ExampleError>)], crd_versions: usize) {
    let errors: Vec<&ExampleError> = results.iter().flat_map(|(_, e)| e).collect();
    let output = serde_json::json!({
        "crd_versions": crd_versions,
        "files_checked": results.len(),
        "errors_count": errors.len(),
        "ok": errors.is_empty(),
        "errors": errors
    });
    let json = serde_json::to_string_pretty(&output).expect("Failed to serialize results");
    println!("{json}");
}

fn print_results(results: &[(PathBuf, Vec<ExampleError>)]) {
    let mut failed: Vec<&Path> = Vec::new();
    let mut total_errors = 0;

    for (file, errors) in results {
        if errors.is_empty() {
            println!("{} {}", "✓".green(), file.display());
            continue;
        }
        total_errors += errors.len();
        failed.push(file);
        println!();
        println!("{} {}:", "✗".red(), file.display());
        for error in errors {
            println!("  - {}", error.to_string().red());
        }
    }

    println!();
    println!("{}", "=".repeat(60));
    if total_errors == 0 {
        println!("{}", "✓ All examples validated successfully!".green());
    } else {
        println!(
            "{}",
            format!(
                "✗ Found {total_errors} errors in {} files",
                failed.len()
            )
            .red()
        );
        println!();
        println!("Files with errors:");
        for file in failed {
            println!("  - {}", file.display());
        }
    }
}
