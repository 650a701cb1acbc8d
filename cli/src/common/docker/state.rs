//! # Docker Container State (`common::docker::state`)
//!
//! File: cli/src/common/docker/state.rs
//!
//! ## Overview
//!
//! Queries the Docker daemon for the containers the user can pick as the
//! project's main container.
//!
//! ## Examples
//!
//! ```rust
//! // Names of running and stopped containers, without the leading '/'.
//! let names = state::list_container_names(true).await;
//! ```
//!
use crate::core::error::{DockhandError, Result};
use anyhow::anyhow;
use bollard::{container::ListContainersOptions, models::ContainerSummary};
use std::collections::HashMap;
use tracing::{debug, error, info, instrument, warn};

use super::connect::connect_docker;

/// Lists containers known to the daemon.
///
/// # Arguments
///
/// * `all` - If `true`, includes stopped containers. If `false`, only running ones.
/// * `filters` - Optional Docker API filters (e.g. `{"label": ["com.docker.compose.project=shop"]}`).
///
/// # Errors
///
/// Returns `DockhandError::DockerApi` wrapped in `anyhow::Error` if the Docker API call fails.
#[instrument(skip(all, filters), fields(all = %all, filters = ?filters))]
pub async fn list_containers(
    all: bool,
    filters: Option<HashMap<String, Vec<String>>>,
) -> Result<Vec<ContainerSummary>> {
    let docker = connect_docker().await?;
    let options = Some(ListContainersOptions {
        all,
        filters: filters.unwrap_or_default(),
        ..Default::default()
    });

    info!(
        "Listing containers (All: {}, Filters: {:?})...",
        all,
        options.as_ref().map(|o| &o.filters)
    );

    docker.list_containers(options).await.map_err(|e| {
        error!("Failed to list containers: {:?}", e);
        anyhow!(DockhandError::DockerApi { source: e }).context("Failed to list containers")
    })
}

/// Extracts sorted, de-duplicated container names from API summaries.
pub fn container_names(summaries: &[ContainerSummary]) -> Vec<String> {
    let mut names: Vec<String> = summaries
        .iter()
        .filter_map(|summary| summary.names.as_ref())
        .flatten()
        .map(|name| name.trim_start_matches('/').to_string())
        .filter(|name| !name.is_empty())
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Container names offered in the main-container picker.
///
/// A daemon failure is not fatal here: the picker falls back to asking for a
/// name, so the error is logged and an empty list returned.
pub async fn list_container_names(all: bool) -> Vec<String> {
    match list_containers(all, None).await {
        Ok(summaries) => {
            let names = container_names(&summaries);
            debug!("Found {} containers: {:?}", names.len(), names);
            names
        }
        Err(e) => {
            warn!("Could not list containers, continuing without suggestions: {:#}", e);
            Vec::new()
        }
    }
}
