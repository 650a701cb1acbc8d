//! # Dockhand Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module handles the two configuration layers dockhand works with:
//!
//! - **User configuration** (`UserConfig`): optional, read-only settings in the
//!   platform config directory (`~/.config/dockhand/config.toml` on Linux).
//!   Controls which Docker binary is invoked and what the start-command prompt
//!   is pre-filled with.
//! - **Project configuration** (`ProjectSettings`): the per-project
//!   `.dockhand.toml` holding the main container and the start command. It is
//!   read and written by the get-or-prompt workflow and is exposed to the
//!   rest of the application only through the `ProjectConfig` trait.
//!
//! ## Architecture
//!
//! - The project file is searched for in the current directory and its
//!   ancestors, stopping at the first directory that contains `.git`.
//! - When no project file exists, one is created in the current directory on
//!   the first save.
//! - Saves rewrite the whole file. Concurrent invocations are not guarded
//!   against.
//!
//! ## Examples
//!
//! ```rust
//! let user_cfg = config::load_user_config()?;
//! let mut project = config::ProjectSettings::discover()?;
//!
//! if project.project_main_container().is_empty() {
//!     project.save_container_name("shop-php-1")?;
//! }
//! ```
//!
use crate::core::error::{DockhandError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Name of the per-project settings file.
pub const PROJECT_CONFIG_FILENAME: &str = ".dockhand.toml";

/// Read/write access to the persisted project settings.
///
/// The composer and the start workflow only ever see this trait, so tests can
/// swap in an in-memory implementation.
pub trait ProjectConfig {
    /// The configured main container, or an empty string when unset.
    fn project_main_container(&self) -> &str;
    /// Persists `container` as the project's main container.
    fn save_container_name(&mut self, container: &str) -> Result<()>;
    /// The configured start command, or an empty string when unset.
    fn start_command(&self) -> &str;
    /// Persists `command` as the project's start command.
    fn save_start_command(&mut self, command: &str) -> Result<()>;
}

// --- User configuration ---

/// Represents the user-level configuration, loaded from TOML.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    #[serde(default)]
    pub docker: DockerConfig,
    #[serde(default)]
    pub start: StartConfig,
}

/// Settings for talking to Docker.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct DockerConfig {
    /// Binary used for `exec` invocations and path lookups (can use ~).
    #[serde(default = "default_docker_binary")]
    pub binary: String,
    /// Offer stopped containers in the main-container picker as well.
    #[serde(default = "default_all_containers")]
    pub all_containers: bool,
}

/// Settings for the `start` command family.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct StartConfig {
    /// Pre-filled value of the start-command prompt.
    #[serde(default = "default_start_command")]
    pub default_command: String,
}

impl Default for DockerConfig {
    fn default() -> Self {
        Self {
            binary: default_docker_binary(),
            all_containers: default_all_containers(),
        }
    }
}

impl Default for StartConfig {
    fn default() -> Self {
        Self {
            default_command: default_start_command(),
        }
    }
}

fn default_docker_binary() -> String {
    "docker".to_string()
}
fn default_all_containers() -> bool {
    true
}
fn default_start_command() -> String {
    "docker-compose -f docker-compose.yml up".to_string()
}

/// Loads the user configuration, falling back to defaults when no file exists.
///
/// # Returns
///
/// * `Result<UserConfig>` - The parsed configuration with `~` expanded, or
///   `UserConfig::default()` if the file is absent or the config directory
///   cannot be determined.
///
/// # Errors
///
/// * The file exists but cannot be read or parsed (unknown keys included).
/// * Validation fails (e.g. an empty `docker.binary`).
pub fn load_user_config() -> Result<UserConfig> {
    let mut config = match user_config_path() {
        Some(path) if path.exists() => {
            info!("Loading user configuration from: {}", path.display());
            load_user_config_from_path(&path)?
        }
        Some(path) => {
            debug!("User configuration file not found at {}", path.display());
            UserConfig::default()
        }
        None => {
            warn!("Could not determine user config directory.");
            UserConfig::default()
        }
    };
    expand_user_config_paths(&mut config);
    validate_user_config(&config).context("Configuration validation failed")?;
    debug!("Final user configuration: {:?}", config);
    Ok(config)
}

fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "Dockhand", "dockhand")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

fn load_user_config_from_path(path: &Path) -> Result<UserConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn expand_user_config_paths(config: &mut UserConfig) {
    config.docker.binary = shellexpand::tilde(&config.docker.binary).into_owned();
}

fn validate_user_config(config: &UserConfig) -> Result<()> {
    if config.docker.binary.trim().is_empty() {
        return Err(anyhow!(DockhandError::Config(
            "docker.binary cannot be empty.".to_string()
        )));
    }
    if config.start.default_command.trim().is_empty() {
        warn!("start.default_command is empty; the start prompt will not be pre-filled.");
    }
    Ok(())
}

// --- Project configuration ---

/// On-disk layout of `.dockhand.toml`.
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProjectFile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub main_container: String,
    #[serde(default)]
    pub start_command: String,
}

/// Project settings bound to the file they were loaded from (or will be saved to).
#[derive(Debug, Clone)]
pub struct ProjectSettings {
    path: PathBuf,
    file: ProjectFile,
}

impl ProjectSettings {
    /// Finds the project file starting at the current directory.
    pub fn discover() -> Result<Self> {
        let current_dir = std::env::current_dir().context("Failed to get current directory")?;
        Self::discover_from(&current_dir)
    }

    /// Finds the project file starting at `dir`, or prepares a new one there.
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory to start the upward search from. Also the location of
    ///   a newly prepared file when none is found.
    ///
    /// # Returns
    ///
    /// * `Result<ProjectSettings>` - Loaded settings, or empty ones bound to
    ///   `dir/.dockhand.toml`. Nothing is written until the first save.
    ///
    /// # Errors
    ///
    /// * Returns an error if an existing project file cannot be read or parsed.
    pub fn discover_from(dir: &Path) -> Result<Self> {
        match find_project_config_path(dir) {
            Some(path) => {
                info!("Loading project configuration from: {}", path.display());
                Self::load(&path)
            }
            None => {
                debug!(
                    "No {} found; a new one will be written to {}",
                    PROJECT_CONFIG_FILENAME,
                    dir.display()
                );
                let name = dir
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                Ok(Self {
                    path: dir.join(PROJECT_CONFIG_FILENAME),
                    file: ProjectFile {
                        name,
                        ..Default::default()
                    },
                })
            }
        }
    }

    /// Loads the settings stored at `path`.
    ///
    /// # Errors
    ///
    /// * Returns an error if the file cannot be read, is not valid TOML, or has
    ///   unknown keys.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read project file: {}", path.display()))?;
        let file: ProjectFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Location of the project file, whether or not it has been written yet.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Project name stored in the file (the directory name for new projects).
    pub fn name(&self) -> &str {
        &self.file.name
    }

    /// Clears the stored main container and start command.
    ///
    /// The project name is kept. The file is written immediately.
    pub fn reset(&mut self) -> Result<()> {
        self.file.main_container.clear();
        self.file.start_command.clear();
        self.save()
    }

    fn save(&self) -> Result<()> {
        let content = toml::to_string_pretty(&self.file)
            .context("Failed to serialize project configuration")?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write project file: {}", self.path.display()))?;
        info!("Saved project configuration to {}", self.path.display());
        Ok(())
    }
}

impl ProjectConfig for ProjectSettings {
    fn project_main_container(&self) -> &str {
        &self.file.main_container
    }

    fn save_container_name(&mut self, container: &str) -> Result<()> {
        self.file.main_container = container.to_string();
        self.save()
    }

    fn start_command(&self) -> &str {
        &self.file.start_command
    }

    fn save_start_command(&mut self, command: &str) -> Result<()> {
        self.file.start_command = command.to_string();
        self.save()
    }
}

/// Walks from `start` towards the filesystem root looking for the project file.
/// A directory containing `.git` ends the search after it has been checked.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_user_toml() {
        let toml_content = r#"
            [docker]
            binary = "podman"

            [start]
            default_command = "docker compose up"
        "#;

        let config: UserConfig = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.docker.binary, "podman");
        assert!(config.docker.all_containers); // Default
        assert_eq!(config.start.default_command, "docker compose up");
    }

    #[test]
    fn test_user_config_rejects_unknown_fields() {
        let result: std::result::Result<UserConfig, _> = toml::from_str("[docker]\nbinray = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_user_config_path_expansion() {
        let mut config = UserConfig::default();
        config.docker.binary = "~/bin/docker".to_string();
        expand_user_config_paths(&mut config);
        assert!(!config.docker.binary.starts_with('~'));
        assert!(config.docker.binary.ends_with("bin/docker"));
    }

    #[test]
    fn test_validate_user_config_empty_binary() {
        let mut config = UserConfig::default();
        config.docker.binary = " ".to_string();
        let result = validate_user_config(&config);
        assert!(result.unwrap_err().to_string().contains("docker.binary"));
    }

    #[test]
    fn test_discover_without_file_uses_dir_name() {
        let temp_dir = tempdir().unwrap();
        let project_dir = temp_dir.path().join("shop");
        fs::create_dir(&project_dir).unwrap();
        fs::create_dir(project_dir.join(".git")).unwrap();

        let settings = ProjectSettings::discover_from(&project_dir).unwrap();

        assert_eq!(settings.name(), "shop");
        assert_eq!(settings.project_main_container(), "");
        assert_eq!(settings.path(), project_dir.join(PROJECT_CONFIG_FILENAME));
        assert!(!settings.path().exists()); // Nothing written yet
    }

    #[test]
    fn test_discover_finds_file_in_ancestor() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("src").join("Controller");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            temp_dir.path().join(PROJECT_CONFIG_FILENAME),
            "name = \"shop\"\nmain_container = \"shop-php-1\"\n",
        )
        .unwrap();

        let settings = ProjectSettings::discover_from(&nested).unwrap();

        assert_eq!(settings.project_main_container(), "shop-php-1");
        assert_eq!(settings.start_command(), "");
    }

    #[test]
    fn test_discover_stops_at_git_dir() {
        let temp_dir = tempdir().unwrap();
        fs::write(
            temp_dir.path().join(PROJECT_CONFIG_FILENAME),
            "main_container = \"outer\"\n",
        )
        .unwrap();
        let repo = temp_dir.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();

        let settings = ProjectSettings::discover_from(&repo).unwrap();
        assert_eq!(settings.project_main_container(), "");
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir(temp_dir.path().join(".git")).unwrap();
        let mut settings = ProjectSettings::discover_from(temp_dir.path()).unwrap();

        settings.save_container_name("shop-php-1").unwrap();
        settings
            .save_start_command("docker compose -f compose.yml up")
            .unwrap();

        let reloaded = ProjectSettings::load(settings.path()).unwrap();
        assert_eq!(reloaded.project_main_container(), "shop-php-1");
        assert_eq!(reloaded.start_command(), "docker compose -f compose.yml up");

        let mut reloaded = reloaded;
        reloaded.reset().unwrap();
        let cleared = ProjectSettings::load(settings.path()).unwrap();
        assert_eq!(cleared.project_main_container(), "");
        assert_eq!(cleared.start_command(), "");
        assert_eq!(cleared.name(), settings.name());
    }
}
