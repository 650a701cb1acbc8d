//! # Dockhand CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests. Every test runs the compiled
//! `dockhand` binary inside a throwaway project directory with its own
//! `HOME`/`XDG_CONFIG_HOME`, so neither the developer's settings nor a local
//! Docker daemon influence the outcome.
//!

#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates an `assert_cmd::Command` pointing at the compiled `dockhand` binary.
pub fn dockhand_cmd() -> Command {
    Command::cargo_bin("dockhand").expect("Failed to find dockhand binary for testing")
}

/// A temporary project directory plus an isolated user config directory.
pub struct TestProject {
    root: TempDir,
}

impl TestProject {
    /// Empty project (no `.dockhand.toml`), bounded by a `.git` directory.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        fs::create_dir_all(root.path().join("project").join(".git")).unwrap();
        fs::create_dir_all(root.path().join("config").join("dockhand")).unwrap();
        Self { root }
    }

    /// Project whose `.dockhand.toml` has the given content.
    pub fn with_settings(content: &str) -> Self {
        let project = Self::new();
        fs::write(project.settings_path(), content).unwrap();
        project
    }

    pub fn dir(&self) -> PathBuf {
        self.root.path().join("project")
    }

    pub fn settings_path(&self) -> PathBuf {
        self.dir().join(".dockhand.toml")
    }

    pub fn settings(&self) -> String {
        fs::read_to_string(self.settings_path()).unwrap_or_default()
    }

    /// Writes the user-level `config.toml`.
    pub fn write_user_config(&self, content: &str) {
        fs::write(
            self.root.path().join("config").join("dockhand").join("config.toml"),
            content,
        )
        .unwrap();
    }

    /// Installs a stand-in for the Docker CLI that answers `command -v <tool>`
    /// lookups with `/usr/local/bin/<tool>`, failing for tools listed in `missing`.
    #[cfg(unix)]
    pub fn install_fake_docker(&self, missing: &[&str]) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.root.path().join("docker");
        let missing_cases: String = missing
            .iter()
            .map(|tool| format!("  {tool}) echo \"{tool}: not found\" >&2; exit 1 ;;\n"))
            .collect();
        let script = format!(
            "#!/bin/sh\n\
             tool=$(echo \"$5\" | sed 's/^command -v //')\n\
             case \"$tool\" in\n{missing_cases}esac\n\
             echo \"/usr/local/bin/$tool\"\n"
        );
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        self.write_user_config(&format!("[docker]\nbinary = \"{}\"\n", path.display()));
        path
    }

    /// `dockhand` running inside the project with the isolated environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = dockhand_cmd();
        cmd.current_dir(self.dir())
            .env("HOME", self.root.path())
            .env("XDG_CONFIG_HOME", self.root.path().join("config"))
            .env("DOCKER_HOST", "unix:///nonexistent/dockhand-test.sock")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }
}
