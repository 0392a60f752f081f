//! # pyinit Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads the optional user configuration file that supplies
//! defaults for values not given on the command line: where projects are
//! created, which project type to use, where the templates live, which
//! development tools to install and where to download the `.gitignore`
//! template from.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line arguments and their environment fallbacks (merged by `commands::init`)
//! 2. An explicit file passed with `--config` / `PYINIT_CONFIG` (must exist)
//! 3. The user file `config.toml` in the platform config directory (optional)
//! 4. Default values defined in the code
//!
//! After loading, `~` is expanded in every path and the result is validated.
//!
//! ## Examples
//!
//! ```toml
//! [defaults]
//! parent_path = "~/Developer"
//! project_type = "library"
//!
//! [tooling]
//! dev_dependencies = ["ruff", "mypy", "pre-commit", "pytest"]
//! ```
//!
use crate::core::error::{PyinitError, Result};
use crate::core::project::ProjectType;
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Default location of the `.gitignore` template.
pub const DEFAULT_GITIGNORE_URL: &str =
    "https://raw.githubusercontent.com/github/gitignore/main/Python.gitignore";

const CONFIG_FILENAME: &str = "config.toml";

/// Represents the main configuration structure, loaded from TOML.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub templates: TemplatesConfig,
    #[serde(default)]
    pub tooling: ToolingConfig,
}

/// Fallbacks for project options not given on the command line.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Directory new projects are created in (can use ~). Will be expanded.
    #[serde(default = "default_parent_path")]
    pub parent_path: String,
    #[serde(default)]
    pub project_type: ProjectType,
}

/// Location of the template files copied or appended into new projects.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TemplatesConfig {
    /// Overrides the templates shipped next to the binary (can use ~).
    pub directory: Option<String>,
}

/// External tooling installed into every project.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ToolingConfig {
    #[serde(default = "default_dev_dependencies")]
    pub dev_dependencies: Vec<String>,
    #[serde(default = "default_gitignore_url")]
    pub gitignore_url: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            parent_path: default_parent_path(),
            project_type: ProjectType::default(),
        }
    }
}

impl Default for ToolingConfig {
    fn default() -> Self {
        Self {
            dev_dependencies: default_dev_dependencies(),
            gitignore_url: default_gitignore_url(),
        }
    }
}

fn default_parent_path() -> String {
    "~/Developer".to_string()
}
fn default_dev_dependencies() -> Vec<String> {
    ["ruff", "pylint", "pre-commit", "pytest"]
        .into_iter()
        .map(String::from)
        .collect()
}
fn default_gitignore_url() -> String {
    DEFAULT_GITIGNORE_URL.to_string()
}

/// Loads, expands and validates the configuration.
///
/// When `explicit_path` is given the file must exist. Otherwise the user
/// config file is read if present and built-in defaults are used if not.
///
/// # Arguments
///
/// * `explicit_path` - A file named with `--config` or `PYINIT_CONFIG`, if any.
///
/// # Returns
///
/// * `Result<Config>` - The merged configuration with `~` expanded in every path.
///
/// # Errors
///
/// Returns an `Err` if:
/// - `explicit_path` is given but is not a file.
/// - A configuration file cannot be read or is not valid TOML for `Config`.
/// - `~` cannot be expanded because the home directory is unknown.
/// - A value fails validation (see `validate_config`).
pub fn load_config(explicit_path: Option<&Path>) -> Result<Config> {
    // 1. Pick the source: explicit file, user file, or built-in defaults.
    let mut config = match explicit_path {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            if !path.is_file() {
                return Err(anyhow!(PyinitError::Config(format!(
                    "Configuration file '{}' does not exist.",
                    path.display()
                ))));
            }
            load_config_from_path(path)?
        }
        None => load_user_config()?.unwrap_or_default(),
    };
    // 2. Normalize and check the merged values.
    expand_config_paths(&mut config).context("Failed to expand paths in configuration")?;
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

/// `config.toml` inside the platform config directory, e.g. `~/.config/pyinit/`.
fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "pyinit").map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Reads the user configuration file if it exists.
///
/// # Returns
///
/// * `Ok(None)` - No config directory could be determined, or the file is absent.
/// * `Ok(Some(config))` - The file was found and parsed.
fn load_user_config() -> Result<Option<Config>> {
    let Some(config_path) = user_config_path() else {
        debug!("Could not determine user config directory.");
        return Ok(None);
    };
    if config_path.is_file() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

/// Reads and parses one TOML configuration file. Missing keys take their defaults.
fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Expands a leading `~` in `defaults.parent_path` and `templates.directory`.
///
/// # Errors
///
/// Returns `PyinitError::Config` if the parent path needs `~` expanded but
/// the home directory cannot be determined.
fn expand_config_paths(config: &mut Config) -> Result<()> {
    // shellexpand leaves `~` untouched without a home directory.
    if config.defaults.parent_path.starts_with('~') && dirs::home_dir().is_none() {
        return Err(anyhow!(PyinitError::Config(format!(
            "Cannot expand '{}': home directory is unknown.",
            config.defaults.parent_path
        ))));
    }
    config.defaults.parent_path = shellexpand::tilde(&config.defaults.parent_path).into_owned();
    debug!("Expanded parent path: {}", config.defaults.parent_path);
    if let Some(dir) = config.templates.directory.as_mut() {
        *dir = shellexpand::tilde(dir).into_owned();
        debug!("Expanded templates directory: {}", dir);
    }
    Ok(())
}

/// Checks values that deserialize fine but cannot be used.
///
/// # Errors
///
/// Returns `PyinitError::Config` if the parent path is blank, the templates
/// path is an existing non-directory, a dev dependency is blank, or the
/// gitignore URL is not http(s).
fn validate_config(config: &Config) -> Result<()> {
    if config.defaults.parent_path.trim().is_empty() {
        return Err(anyhow!(PyinitError::Config(
            "defaults.parent_path must not be empty.".to_string()
        )));
    }
    if let Some(dir) = &config.templates.directory {
        let dir = PathBuf::from(dir);
        if dir.exists() && !dir.is_dir() {
            return Err(anyhow!(PyinitError::Config(format!(
                "Configured templates path '{}' exists but is not a directory.",
                dir.display()
            ))));
        }
    }
    if let Some(blank) = config
        .tooling
        .dev_dependencies
        .iter()
        .position(|dep| dep.trim().is_empty())
    {
        return Err(anyhow!(PyinitError::Config(format!(
            "tooling.dev_dependencies entry {} is blank.",
            blank
        ))));
    }
    let url = &config.tooling.gitignore_url;
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(anyhow!(PyinitError::Config(format!(
            "Invalid gitignore_url '{}'. Expected an http(s) URL.",
            url
        ))));
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.defaults.parent_path, "~/Developer");
        assert_eq!(config.defaults.project_type, ProjectType::App);
        assert_eq!(config.templates.directory, None);
        assert_eq!(
            config.tooling.dev_dependencies,
            vec!["ruff", "pylint", "pre-commit", "pytest"]
        );
        assert_eq!(config.tooling.gitignore_url, DEFAULT_GITIGNORE_URL);
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let toml_content = r#"
            [defaults]
            project_type = "library"

            [tooling]
            dev_dependencies = ["ruff", "mypy"]
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.defaults.parent_path, "~/Developer"); // Default
        assert_eq!(config.defaults.project_type, ProjectType::Library);
        assert_eq!(config.tooling.dev_dependencies, vec!["ruff", "mypy"]);
        assert_eq!(config.tooling.gitignore_url, DEFAULT_GITIGNORE_URL); // Default
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(toml::from_str::<Config>("[defaults]\nparent = \"/x\"").is_err());
        assert!(toml::from_str::<Config>("[network]\n").is_err());
    }

    #[test]
    fn test_path_expansion() {
        let mut config = Config {
            defaults: DefaultsConfig {
                parent_path: "~/code".to_string(),
                ..Default::default()
            },
            templates: TemplatesConfig {
                directory: Some("~/templates".to_string()),
            },
            ..Default::default()
        };

        expand_config_paths(&mut config).unwrap();

        let home_dir = dirs::home_dir().unwrap();
        assert_eq!(
            config.defaults.parent_path,
            home_dir.join("code").to_string_lossy()
        );
        assert_eq!(
            config.templates.directory.as_deref(),
            Some(home_dir.join("templates").to_string_lossy().as_ref())
        );
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = Config::default();
        config.tooling.gitignore_url = "ftp://example.com/x".into();
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.tooling.dev_dependencies = vec!["ruff".into(), " ".into()];
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("entry 1 is blank"));

        let mut config = Config::default();
        config.defaults.parent_path = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_rejects_templates_file() -> Result<()> {
        let dir = tempdir()?;
        let file = dir.path().join("not_a_dir");
        fs::write(&file, "")?;
        let config = Config {
            templates: TemplatesConfig {
                directory: Some(file.to_string_lossy().into_owned()),
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
        Ok(())
    }

    #[test]
    fn test_load_explicit_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("pyinit.toml");
        fs::write(
            &path,
            format!(
                "[defaults]\nparent_path = \"{}\"\nproject_type = \"package\"\n",
                dir.path().display()
            ),
        )?;

        let config = load_config(Some(&path))?;
        assert_eq!(config.defaults.parent_path, dir.path().to_string_lossy());
        assert_eq!(config.defaults.project_type, ProjectType::Package);
        Ok(())
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let dir = tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_load_explicit_invalid_toml_fails() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[defaults\n")?;
        let err = load_config(Some(&path)).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse TOML"));
        Ok(())
    }
}
