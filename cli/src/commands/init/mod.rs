//! # pyinit Init Command
//!
//! File: cli/src/commands/init/mod.rs
//!
//! ## Overview
//!
//! This module turns the parsed command line and the loaded configuration
//! file into a validated `ProjectConfig` plus `RunSettings`, then hands them
//! to `ProjectInitializer::run`.
//!
//! ## Architecture
//!
//! - `InitArgs`: Clap arguments describing the project to create.
//! - `handle_init`: Merges arguments over configuration, builds the
//!   initializer with the real process runner and HTTP fetcher, runs it and
//!   prints a summary.
//!
//! ## Examples
//!
//! ```bash
//! # Application in ~/Developer/my-tool
//! pyinit "My Tool" -d "Does one thing well"
//!
//! # Library in a custom location with an extra runtime dependency
//! pyinit "Data Kit" --type library --parent-path ~/src --with requests
//! ```
//!
use crate::{
    common::{network::HttpFetcher, process::SystemRunner},
    core::{
        config::Config,
        error::Result,
        project::{ProjectConfig, ProjectType},
    },
};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub mod initializer;

use initializer::{ProjectInitializer, RunSettings};

/// Name of the templates directory searched next to the executable.
const TEMPLATES_DIRNAME: &str = "templates";

/// Arguments describing the project to create.
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InitArgs {
    /// Human-readable project name, e.g. "My Tool" (directory becomes my-tool)
    pub name: String,

    /// One-line description for README.md and pyproject.toml
    #[arg(short, long)]
    pub description: Option<String>,

    /// Folder that will contain the project [default: ~/Developer]
    #[arg(short, long, env = "PYINIT_PARENT_PATH", value_name = "DIR")]
    pub parent_path: Option<PathBuf>,

    /// Kind of project to create [default: app]
    #[arg(short = 't', long = "type", value_enum, value_name = "TYPE")]
    pub project_type: Option<ProjectType>,

    /// Directory containing .pre-commit-config.yaml and ruff.toml
    #[arg(long, value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Extra runtime dependency to add (repeatable)
    #[arg(long = "with", value_name = "PKG")]
    pub with: Vec<String>,

    /// Extra development dependency to add (repeatable)
    #[arg(long = "with-dev", value_name = "PKG")]
    pub with_dev: Vec<String>,
}

/// Creates the project described by `args`, filling gaps from `config`.
pub fn handle_init(args: InitArgs, config: &Config) -> Result<()> {
    info!("Handling init command...");
    let project = build_project(&args, config)?;
    let settings = build_settings(&args, config);
    debug!("Project: {:?}", project);
    debug!("Settings: {:?}", settings);

    println!(
        "Creating {} project '{}' in {}",
        project.project_type(),
        project.name(),
        project.project_path().display()
    );

    let initializer = ProjectInitializer::new(project, settings, SystemRunner, HttpFetcher::new()?);
    initializer.run()?;

    let project = initializer.project();
    println!("✅ Project ready at {}", project.project_path().display());
    if project.project_type().has_import_package() {
        println!("   Import package: {}", project.underscored_name());
    }
    Ok(())
}

/// Validates the project identity. Arguments win over the configuration file.
fn build_project(args: &InitArgs, config: &Config) -> Result<ProjectConfig> {
    let parent_directory = match &args.parent_path {
        Some(path) => expand_tilde(path),
        None => PathBuf::from(&config.defaults.parent_path),
    };
    let project_type = args.project_type.unwrap_or(config.defaults.project_type);
    ProjectConfig::new(
        args.name.clone(),
        args.description.clone(),
        parent_directory,
        project_type,
    )
}

fn build_settings(args: &InitArgs, config: &Config) -> RunSettings {
    RunSettings {
        templates_directory: resolve_templates_directory(
            args.templates_dir.as_deref(),
            config.templates.directory.as_deref(),
        ),
        dev_dependencies: config.tooling.dev_dependencies.clone(),
        gitignore_url: config.tooling.gitignore_url.clone(),
        extra_dependencies: args.with.clone(),
        extra_dev_dependencies: args.with_dev.clone(),
    }
}

/// Picks the templates directory: argument, then configuration, then the
/// `templates/` folder next to the executable, then the one in the crate sources.
fn resolve_templates_directory(from_args: Option<&Path>, from_config: Option<&str>) -> PathBuf {
    if let Some(dir) = from_args {
        return expand_tilde(dir);
    }
    if let Some(dir) = from_config {
        return PathBuf::from(dir);
    }

    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(TEMPLATES_DIRNAME)));
    match beside_exe {
        Some(dir) if dir.is_dir() => dir,
        _ => {
            let bundled = Path::new(env!("CARGO_MANIFEST_DIR")).join(TEMPLATES_DIRNAME);
            if !bundled.is_dir() {
                warn!(
                    "No templates directory found; expected one at {}",
                    bundled.display()
                );
            }
            bundled
        }
    }
}

fn expand_tilde(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    }
}
