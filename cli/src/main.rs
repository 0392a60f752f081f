//! # pyinit Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the pyinit CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading the user configuration file
//! - Running the init command and mapping failure to exit code 1
//!
//! ## Examples
//!
//! ```bash
//! # Create ~/Developer/my-tool as a uv application
//! pyinit "My Tool" --description "Does one thing well"
//!
//! # Same, with debug logging
//! pyinit -v "My Tool"
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Load configuration and run the initializer
//! 4. Format and display any errors that occur
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers (init)
mod common; // Shared utilities (fs, network, process)
mod core; // Core infrastructure (errors, config, project model)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "pyinit",
    about = "Scaffold a new uv-managed Python project",
    long_about = "Creates a Python project with uv, initializes git, downloads a .gitignore,\n\
                  installs ruff, pylint, pre-commit and pytest, wires up pre-commit hooks,\n\
                  appends ruff settings to pyproject.toml and writes a README.",
    version
)]
struct Cli {
    #[command(flatten)]
    init: commands::init::InitArgs,

    /// Configuration file to read instead of the user config file
    #[arg(short, long, env = "PYINIT_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log detail (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "warn";
    }
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

fn main() {
    let cli = Cli::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(cli.verbose, cli.quiet)));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = crate::core::config::load_config(cli.config.as_deref())
        .and_then(|config| commands::init::handle_init(cli.init, &config));

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
