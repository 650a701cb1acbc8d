//! # Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Runs the final invocation (a `docker exec ...` vector or the project's
//! start command) with the host's stdin, stdout and stderr attached, or
//! prints it when `--dry-run` is active.
//!
//! ## Usage
//!
//! ```rust
//! process::run_or_print("docker", &argv, dry_run)?;
//! ```
//!
use crate::core::error::{DockhandError, Result};
use anyhow::{anyhow, Context};
use std::process::{Command, Stdio};
use tracing::{info, instrument, warn};

/// Renders `binary args...` the way a shell would need it typed.
///
/// Words with characters outside the shell-safe set are single-quoted, so
/// `memory_limit=-1` is shown as `'memory_limit=-1'`.
pub fn display_command(binary: &str, args: &[String]) -> String {
    let mut words = Vec::with_capacity(args.len() + 1);
    words.push(binary);
    words.extend(args.iter().map(String::as_str));
    shell_words::join(words)
}

/// Runs `binary` with `args`, inheriting the standard streams.
///
/// # Errors
///
/// * The process could not be spawned (e.g. binary not found).
/// * `DockhandError::ExternalCommand` if it exits with a non-zero status.
#[instrument(skip(args), fields(args = ?args))]
pub fn run_streamed(binary: &str, args: &[String]) -> Result<()> {
    let status = Command::new(binary)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("Failed to execute '{}'", binary))?;

    if status.success() {
        info!("'{}' finished successfully.", binary);
        return Ok(());
    }

    warn!("'{}' exited with {}", binary, status);
    Err(anyhow!(DockhandError::ExternalCommand {
        cmd: display_command(binary, args),
        status: status
            .code()
            .map_or_else(|| status.to_string(), |code| code.to_string()),
    }))
}

/// Prints the invocation under `--dry-run`, otherwise runs it.
pub fn run_or_print(binary: &str, args: &[String], dry_run: bool) -> Result<()> {
    if dry_run {
        println!("{}", display_command(binary, args));
        return Ok(());
    }
    run_streamed(binary, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_display_command_quotes_when_needed() {
        assert_eq!(
            display_command("docker", &strings(&["exec", "-it", "app", "composer", "update"])),
            "docker exec -it app composer update"
        );
        assert_eq!(
            display_command("docker", &strings(&["exec", "app", "echo", "a b"])),
            "docker exec app echo 'a b'"
        );
        assert_eq!(
            display_command("docker", &strings(&["exec", "-i", "app", "php", "-d", "memory_limit=-1"])),
            "docker exec -i app php -d 'memory_limit=-1'"
        );
    }

    #[test]
    fn test_run_streamed_success() {
        assert!(run_streamed("sh", &strings(&["-c", "exit 0"])).is_ok());
    }

    #[test]
    fn test_run_streamed_non_zero_exit() {
        let err = run_streamed("sh", &strings(&["-c", "exit 3"])).unwrap_err();
        match err.downcast_ref::<DockhandError>() {
            Some(DockhandError::ExternalCommand { cmd, status }) => {
                assert_eq!(cmd, "sh -c 'exit 3'");
                assert_eq!(status, "3");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_run_streamed_missing_binary() {
        let err = run_streamed("nonexistent_dockhand_test_command_98765", &[]).unwrap_err();
        assert!(err.to_string().contains("Failed to execute"));
    }
}
