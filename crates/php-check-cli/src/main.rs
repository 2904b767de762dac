//! php-check CLI tool.
//!
//! Usage:
//! ```bash
//! php-check check [OPTIONS] <PATH>
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use php_check_core::{CheckCategories, Verbosity};
use php_check_engine::PatternEngine;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;

/// Deprecation and static-analysis checker for Composer-managed PHP projects
#[derive(Parser)]
#[command(name = "php-check")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Checks a PHP project
    Check {
        /// The PHP code path to inspect
        path: PathBuf,

        /// Formatter to use: table, json, or junit
        #[arg(long, default_value = "table")]
        format: String,

        /// Check for deprecations
        #[arg(short, long)]
        deprecations: bool,

        /// Check code analysis
        #[arg(short, long)]
        analysis: bool,

        /// Check code style
        #[arg(short, long)]
        style: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Check {
            path,
            format,
            deprecations,
            analysis,
            style,
        } => {
            let request = commands::check::CheckRequest {
                path,
                format,
                categories: CheckCategories {
                    deprecations,
                    analysis,
                    style,
                },
                verbosity: if cli.verbose {
                    Verbosity::Debug
                } else {
                    Verbosity::Normal
                },
            };
            commands::check::run(&request, &PatternEngine::new())
        }
    }
}
