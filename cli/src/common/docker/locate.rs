//! # Binary Path Lookup (`common::docker::locate`)
//!
//! File: cli/src/common/docker/locate.rs
//!
//! ## Overview
//!
//! Resolves the absolute path of a tool (`php`, `composer`, ...) inside a
//! container. The composer only depends on the `BinaryLocator` trait; the
//! `DockerLocator` implementation shells out to the Docker CLI:
//!
//! ```text
//! docker exec <container> sh -c 'command -v <tool>'
//! ```
//!
//! Whether the returned path actually exists is not checked.
//!
use crate::core::error::{DockhandError, Result};
use anyhow::anyhow;
use std::process::{Command, Stdio};
use tracing::{debug, instrument};

/// Resolves tool paths inside a container.
pub trait BinaryLocator {
    /// Returns the absolute path of `tool` inside `container`.
    ///
    /// # Errors
    ///
    /// Implementations report any failure as an error; callers pass it on
    /// unchanged.
    fn locate(&self, container: &str, tool: &str) -> Result<String>;
}

impl<F> BinaryLocator for F
where
    F: Fn(&str, &str) -> Result<String>,
{
    fn locate(&self, container: &str, tool: &str) -> Result<String> {
        self(container, tool)
    }
}

/// Looks tools up by running `command -v` through `docker exec`.
#[derive(Debug, Clone)]
pub struct DockerLocator {
    docker_binary: String,
}

impl DockerLocator {
    pub fn new(docker_binary: impl Into<String>) -> Self {
        Self {
            docker_binary: docker_binary.into(),
        }
    }

    fn lookup_args(container: &str, tool: &str) -> Vec<String> {
        vec![
            "exec".to_string(),
            container.to_string(),
            "sh".to_string(),
            "-c".to_string(),
            format!("command -v {}", shell_words::quote(tool)),
        ]
    }
}

impl BinaryLocator for DockerLocator {
    #[instrument(skip(self))]
    fn locate(&self, container: &str, tool: &str) -> Result<String> {
        let args = Self::lookup_args(container, tool);
        debug!("Running: {} {:?}", self.docker_binary, args);

        let output = Command::new(&self.docker_binary)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| path_error(tool, container, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let reason = if stderr.is_empty() {
                output.status.to_string()
            } else {
                stderr
            };
            return Err(path_error(tool, container, reason));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_located_path(&stdout)
            .ok_or_else(|| path_error(tool, container, "no path printed".to_string()))
    }
}

fn path_error(tool: &str, container: &str, reason: String) -> anyhow::Error {
    anyhow!(DockhandError::PathResolution {
        tool: tool.to_string(),
        container: container.to_string(),
        reason,
    })
}

/// First non-blank line of the lookup output.
fn parse_located_path(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
