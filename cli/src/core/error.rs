//! # Dockhand Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout dockhand. Every failure
//! is returned immediately to the caller; nothing is retried locally.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `DockhandError`: A custom error enum using `thiserror` for the failures
//!   dockhand itself detects (empty selections, unknown shorthands, ...)
//! - `Result<T>`: A type alias for `anyhow::Result<T>` so collaborator errors
//!   (locator, dialog, filesystem) flow through `?` with their message intact
//!
//! ## Examples
//!
//! ```rust
//! if container.is_empty() {
//!     return Err(DockhandError::EmptyContainerName.into());
//! }
//!
//! // Locator failures keep their original message.
//! let php = locator.locate(&container, "php")?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the dockhand application.
#[derive(Error, Debug)]
pub enum DockhandError {
    #[error("Container name is empty. Set the container name")]
    EmptyContainerName,

    #[error("Start command cannot be empty")]
    EmptyStartCommand,

    #[error("Could not locate '{tool}' in container '{container}': {reason}")]
    PathResolution {
        tool: String,
        container: String,
        reason: String,
    },

    #[error("Prompt failed: {0}")]
    Dialog(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Docker API interaction failed: {source}")]
    DockerApi {
        #[from]
        source: bollard::errors::Error,
    },

    #[error("External command failed: {cmd}, Status: {status}")]
    ExternalCommand { cmd: String, status: String },

    #[error("Unknown shorthand command '{0}'. Known prefixes: composer (c)")]
    UnknownShorthand(String),
}

/// Type alias for Result using anyhow::Error.
pub type Result<T> = anyhow::Result<T>;
