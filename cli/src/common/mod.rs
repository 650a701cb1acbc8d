//! # Dockhand Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities used by the command handlers, kept apart from
//! command-specific logic (`commands::`) and core infrastructure (`core::`).
//!
//! - **`docker`**: Docker daemon access (container listing) and tool path lookup.
//! - **`process`**: Running the final invocation with inherited stdio.
//! - **`project`**: Get-or-prompt-and-persist for the main container and start command.
//! - **`ui`**: The `Dialog` trait and its terminal implementation.
//!

/// Docker daemon access and in-container path lookup.
pub mod docker;
/// Executes external processes.
pub mod process;
/// Establishes missing project settings.
pub mod project;
/// Interactive prompts.
pub mod ui;
