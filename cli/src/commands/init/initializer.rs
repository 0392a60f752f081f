//! # pyinit Project Initializer
//!
//! File: cli/src/commands/init/initializer.rs
//!
//! ## Overview
//!
//! `ProjectInitializer` performs the filesystem and external-tool operations
//! that stand up a new Python project. Each step logs what it is about to do
//! and then performs a single effect: one process invocation, one download or
//! one file write.
//!
//! ## Workflow
//!
//! `run()` owns the order the steps depend on:
//!
//! 1. Ensure the parent directory exists.
//! 2. `uv init` creates the project directory and `pyproject.toml`.
//! 3. Confirm the project directory exists.
//! 4. `git init`.
//! 5. Download and write `.gitignore`.
//! 6. `uv add --dev` the standard tooling.
//! 7. `uv add` / `uv add --dev` any extra packages requested.
//! 8. Copy the pre-commit config, then install and autoupdate the hooks.
//! 9. Append the ruff configuration to `pyproject.toml`.
//! 10. Write `README.md`.
//!
//! ## Error Handling
//!
//! Every step is fail-fast. The first error stops the run and is returned
//! unchanged. Nothing already created is removed.
//!
use crate::{
    common::{
        fs::{copy, io as fsio},
        network::TemplateFetcher,
        process::{self, CommandOutput, CommandRunner},
    },
    core::{error::Result, project::ProjectConfig},
};
use anyhow::Context;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span, warn, Span};

/// Block written above the downloaded `.gitignore` template.
pub const GITIGNORE_HEADER: &str = "# Mac OS\n.DS_Store\n\n";
/// Template copied verbatim into the project.
pub const PRE_COMMIT_TEMPLATE: &str = ".pre-commit-config.yaml";
/// Template appended to `pyproject.toml`.
pub const LINT_TEMPLATE: &str = "ruff.toml";

const DEPENDENCY_MANAGER: &str = "uv";
const VERSION_CONTROL: &str = "git";

/// Resolved settings that are not part of the project's identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    /// Directory holding `PRE_COMMIT_TEMPLATE` and `LINT_TEMPLATE`.
    pub templates_directory: PathBuf,
    /// Development tools installed by `install_development_tooling`.
    pub dev_dependencies: Vec<String>,
    pub gitignore_url: String,
    /// Extra runtime packages requested on the command line.
    pub extra_dependencies: Vec<String>,
    /// Extra development packages requested on the command line.
    pub extra_dev_dependencies: Vec<String>,
}

/// Creates a project skeleton for a `ProjectConfig`.
pub struct ProjectInitializer<R, F> {
    project: ProjectConfig,
    settings: RunSettings,
    runner: R,
    fetcher: F,
    span: Span,
}

impl<R: CommandRunner, F: TemplateFetcher> ProjectInitializer<R, F> {
    pub fn new(project: ProjectConfig, settings: RunSettings, runner: R, fetcher: F) -> Self {
        let span = info_span!("project", name = %project.dashed_name());
        Self {
            project,
            settings,
            runner,
            fetcher,
            span,
        }
    }

    pub fn project(&self) -> &ProjectConfig {
        &self.project
    }

    /// Runs every setup step in dependency order, stopping at the first failure.
    pub fn run(&self) -> Result<()> {
        let _entered = self.span.enter();
        let result = self.run_steps();
        if result.is_err() {
            warn!(
                "Setup stopped; {} may be partially initialized and was left in place.",
                self.project.project_path().display()
            );
        }
        result
    }

    fn run_steps(&self) -> Result<()> {
        fsio::ensure_dir_exists(self.project.parent_directory())
            .context("Failed to prepare the parent directory")?;
        self.initialize_dependency_manager()?;
        self.create_project_folder()?;
        self.initialize_version_control()?;
        self.create_gitignore()?;
        self.install_development_tooling()?;
        self.add_dependencies(&self.settings.extra_dependencies)?;
        self.add_dev_dependencies(&self.settings.extra_dev_dependencies)?;
        self.configure_pre_commit()?;
        self.configure_lint_tool()?;
        self.update_readme()?;
        Ok(())
    }

    /// Creates the project directory and any missing parents. No-op if it exists.
    pub fn create_project_folder(&self) -> Result<()> {
        let _entered = self.span.enter();
        info!("Creating project folder");
        fsio::ensure_dir_exists(&self.project.project_path())
    }

    pub fn initialize_version_control(&self) -> Result<()> {
        let _entered = self.span.enter();
        info!("Initializing git");
        self.run_command(VERSION_CONTROL, &["init"])?;
        Ok(())
    }

    /// Runs `uv init` from the parent directory, which creates the project directory.
    pub fn initialize_dependency_manager(&self) -> Result<()> {
        let _entered = self.span.enter();
        info!("Initializing uv");
        let mut args = vec![
            "init".to_string(),
            self.project.dashed_name(),
            "--author-from".to_string(),
            "git".to_string(),
            self.project.project_type().init_flag().to_string(),
        ];
        if let Some(description) = self.project.description() {
            args.push("--description".to_string());
            args.push(description.to_string());
        }

        let project_path = self.project.project_path();
        let cwd = project_path
            .parent()
            .unwrap_or_else(|| self.project.parent_directory());
        self.run_command_in(DEPENDENCY_MANAGER, &args, cwd)?;
        Ok(())
    }

    pub fn add_dependencies(&self, dependencies: &[String]) -> Result<()> {
        self.uv_add(dependencies, false)
    }

    pub fn add_dev_dependencies(&self, dependencies: &[String]) -> Result<()> {
        self.uv_add(dependencies, true)
    }

    fn uv_add(&self, dependencies: &[String], dev: bool) -> Result<()> {
        let _entered = self.span.enter();
        if dependencies.is_empty() {
            debug!("No {}dependencies to add", if dev { "dev " } else { "" });
            return Ok(());
        }
        let mut args = vec!["add"];
        if dev {
            args.push("--dev");
        }
        args.extend(dependencies.iter().map(String::as_str));
        self.run_command(DEPENDENCY_MANAGER, &args)?;
        Ok(())
    }

    pub fn install_development_tooling(&self) -> Result<()> {
        let _entered = self.span.enter();
        info!("Installing development dependencies");
        self.add_dev_dependencies(&self.settings.dev_dependencies)
    }

    /// Copies the hook configuration template, then installs and updates the hooks.
    pub fn configure_pre_commit(&self) -> Result<()> {
        let _entered = self.span.enter();
        info!("Configuring pre-commit");
        let template = self.template_path(PRE_COMMIT_TEMPLATE);
        copy::copy_file(&template, &self.project.pre_commit_config_path())?;

        // The template pins whatever hook versions were current when it was
        // written; autoupdate moves them to the latest releases.
        self.run_command(DEPENDENCY_MANAGER, &["run", "pre-commit", "install"])?;
        self.run_command(DEPENDENCY_MANAGER, &["run", "pre-commit", "autoupdate"])?;
        Ok(())
    }

    /// Downloads the Python `.gitignore` template and writes it below the macOS block.
    pub fn create_gitignore(&self) -> Result<()> {
        let _entered = self.span.enter();
        info!("Creating .gitignore");
        let template = self
            .fetcher
            .fetch_text(&self.settings.gitignore_url)
            .context("Failed to download the .gitignore template")?;
        let content = format!("{}{}", GITIGNORE_HEADER, template);
        fsio::write_string_to_file(&self.project.gitignore_path(), &content)
    }

    /// Appends the ruff template, preceded by a newline, to `pyproject.toml`.
    pub fn configure_lint_tool(&self) -> Result<()> {
        let _entered = self.span.enter();
        info!("Configuring ruff");
        let snippet = fsio::read_file_to_string(&self.template_path(LINT_TEMPLATE))?;
        fsio::append_to_file(&self.project.manifest_path(), &format!("\n{}", snippet))
    }

    pub fn update_readme(&self) -> Result<()> {
        let _entered = self.span.enter();
        info!("Updating README.md");
        fsio::write_string_to_file(&self.project.readme_path(), &self.readme_text())
    }

    fn readme_text(&self) -> String {
        let mut text = format!("# {}\n", self.project.name());
        if let Some(description) = self.project.description() {
            text.push_str(description);
            text.push('\n');
        }
        text
    }

    fn template_path(&self, file_name: &str) -> PathBuf {
        self.settings.templates_directory.join(file_name)
    }

    /// Runs a checked command inside the project directory.
    fn run_command<S: AsRef<OsStr>>(&self, program: &str, args: &[S]) -> Result<CommandOutput> {
        self.run_command_in(program, args, &self.project.project_path())
    }

    fn run_command_in<S: AsRef<OsStr>>(
        &self,
        program: &str,
        args: &[S],
        cwd: &Path,
    ) -> Result<CommandOutput> {
        process::run_command(&self.runner, program, args, cwd, true)
    }
}
