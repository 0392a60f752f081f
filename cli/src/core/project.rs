//! # pyinit Project Configuration
//!
//! File: cli/src/core/project.rs
//!
//! ## Overview
//!
//! `ProjectConfig` is the validated description of the project being created:
//! its human-readable name, optional description, the parent directory it is
//! created in and its `uv` project type. It is built once by the entry point
//! and never mutated afterwards.
//!
//! Names and paths are derived on demand rather than stored, so they always
//! agree with `name` and `parent_directory`:
//!
//! | Method | Example for `"Foo Bar"` in `~/Developer` |
//! |--------|------------------------------------------|
//! | `dashed_name()` | `foo-bar` |
//! | `underscored_name()` | `foo_bar` |
//! | `project_path()` | `~/Developer/foo-bar` |
//! | `manifest_path()` | `~/Developer/foo-bar/pyproject.toml` |
//!
use crate::core::error::{PyinitError, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Name of the project manifest written by `uv init`.
pub const MANIFEST_FILENAME: &str = "pyproject.toml";
/// Name of the README written by `update_readme`.
pub const README_FILENAME: &str = "README.md";
/// Name of the ignore file written by `create_gitignore`.
pub const GITIGNORE_FILENAME: &str = ".gitignore";
/// Name of the hook configuration read by `pre-commit`.
pub const PRE_COMMIT_CONFIG_FILENAME: &str = ".pre-commit-config.yaml";

/// Kind of project `uv init` should create.
#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// An application (`uv init --app`).
    #[default]
    App,
    /// A packaged application with a build system (`uv init --package`).
    Package,
    /// A library (`uv init --library`).
    Library,
}

impl ProjectType {
    /// The mode flag passed to `uv init`.
    pub fn init_flag(self) -> &'static str {
        match self {
            ProjectType::App => "--app",
            ProjectType::Package => "--package",
            ProjectType::Library => "--library",
        }
    }

    /// Whether `uv` lays the project out as an importable package under `src/`.
    pub fn has_import_package(self) -> bool {
        !matches!(self, ProjectType::App)
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProjectType::App => "app",
            ProjectType::Package => "package",
            ProjectType::Library => "library",
        };
        f.write_str(name)
    }
}

/// Validated, immutable configuration of the project being scaffolded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    name: String,
    description: Option<String>,
    parent_directory: PathBuf,
    project_type: ProjectType,
}

impl ProjectConfig {
    /// Builds a configuration, rejecting names that cannot produce a project directory.
    ///
    /// An empty description is treated as no description.
    ///
    /// # Errors
    ///
    /// Returns `PyinitError::InvalidProjectName` if `name` is blank, contains
    /// a path separator, or is `.` or `..`.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        parent_directory: impl Into<PathBuf>,
        project_type: ProjectType,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            anyhow::bail!(PyinitError::InvalidProjectName {
                name,
                reason: "name must not be empty".to_string(),
            });
        }
        if name.contains(['/', '\\']) {
            anyhow::bail!(PyinitError::InvalidProjectName {
                name,
                reason: "name must not contain path separators".to_string(),
            });
        }
        // "." and ".." would place the project at or above the parent directory.
        let dashed = name.replace(' ', "-").to_lowercase();
        if dashed == "." || dashed == ".." {
            anyhow::bail!(PyinitError::InvalidProjectName {
                name,
                reason: "name must not be a relative directory reference".to_string(),
            });
        }

        Ok(Self {
            name,
            description: description.filter(|d| !d.is_empty()),
            parent_directory: parent_directory.into(),
            project_type,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn parent_directory(&self) -> &Path {
        &self.parent_directory
    }

    pub fn project_type(&self) -> ProjectType {
        self.project_type
    }

    /// Lowercase name with spaces replaced by underscores, used for identifiers.
    pub fn underscored_name(&self) -> String {
        self.name.replace(' ', "_").to_lowercase()
    }

    /// Lowercase name with spaces replaced by hyphens, used for the directory and repository.
    pub fn dashed_name(&self) -> String {
        self.name.replace(' ', "-").to_lowercase()
    }

    pub fn project_path(&self) -> PathBuf {
        self.parent_directory.join(self.dashed_name())
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.project_path().join(MANIFEST_FILENAME)
    }

    pub fn readme_path(&self) -> PathBuf {
        self.project_path().join(README_FILENAME)
    }

    pub fn gitignore_path(&self) -> PathBuf {
        self.project_path().join(GITIGNORE_FILENAME)
    }

    pub fn pre_commit_config_path(&self) -> PathBuf {
        self.project_path().join(PRE_COMMIT_CONFIG_FILENAME)
    }
}
