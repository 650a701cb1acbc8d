//! # Docker Utilities (`common::docker`)
//!
//! File: cli/src/common/docker/mod.rs
//!
//! ## Overview
//!
//! Everything dockhand needs from Docker besides running the final `exec`:
//!
//! - `connect`: opens a `bollard` client to the local daemon
//! - `state`: lists containers for the main-container picker
//! - `locate`: resolves tool paths inside a container
//!

/// Handles establishing a connection to the local Docker daemon.
pub mod connect;
/// Resolves binary paths inside containers.
pub mod locate;
/// Queries the daemon for existing containers.
pub mod state;
