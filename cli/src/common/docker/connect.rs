//! # Docker Daemon Connection (`common::docker::connect`)
//!
//! File: cli/src/common/docker/connect.rs
//!
//! Opens a `bollard` client against the local Docker daemon
//! (`/var/run/docker.sock` on Unix, the named pipe on Windows, or whatever
//! `DOCKER_HOST` points at).
//!
use crate::core::error::{DockhandError, Result};
use anyhow::{anyhow, Context};
use bollard::Docker;
use tracing::instrument;

/// Establishes a connection to the local Docker daemon using default settings.
///
/// # Errors
///
/// Returns an `Err` wrapping `DockhandError::DockerApi` if the client cannot
/// be created, with context hinting that the daemon may not be running.
#[instrument]
pub async fn connect_docker() -> Result<Docker> {
    Docker::connect_with_local_defaults()
        .map_err(|e| anyhow!(DockhandError::DockerApi { source: e }))
        .context("Failed to connect to Docker daemon. Is it running and accessible?")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Requires a running Docker daemon. Run locally with `cargo test -- --ignored`.
    #[tokio::test]
    #[ignore]
    async fn test_connect_docker_success() {
        let result = connect_docker().await;
        assert!(
            result.is_ok(),
            "Should connect successfully if Docker is running"
        );
    }
}
