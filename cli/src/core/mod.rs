//! # Dockhand Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by every command:
//! - `config`: User configuration loading and the persisted project settings
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config::{self, ProjectConfig};
//! use crate::core::error::{DockhandError, Result};
//! ```
//!
pub mod config;
pub mod error;
