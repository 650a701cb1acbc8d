//! # Dockhand Commands
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! One module per command group. Each defines its clap arguments and an
//! async handler called from `main.rs`.
//!
//! - `composer`: shorthand commands (`composer:update:memory`, ...)
//! - `project`: inspect or reset the stored project settings
//! - `start`: run the project's start command
//!

/// Shorthand parsing and `exec` composition for Composer.
pub mod composer;
/// `project show` / `project reset`.
pub mod project;
/// `start` and its flag variants.
pub mod start;
