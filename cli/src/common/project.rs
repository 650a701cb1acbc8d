//! # Project Settings Workflow (`common::project`)
//!
//! File: cli/src/common/project.rs
//!
//! ## Overview
//!
//! Get-or-prompt-and-persist helpers for the two project settings every
//! command relies on: the main container and the start command. If a value
//! is already configured nothing happens. Otherwise the user is asked through
//! the `Dialog`, an empty answer is rejected with a fixed error, and a
//! non-empty answer is saved through the `ProjectConfig`.
//!
use crate::{
    common::ui::Dialog,
    core::{
        config::ProjectConfig,
        error::{DockhandError, Result},
    },
};
use tracing::info;

/// Ensures the project has a main container, prompting from `containers` if not.
pub fn define_project_main_container(
    cfg: &mut dyn ProjectConfig,
    dialog: &dyn Dialog,
    containers: &[String],
) -> Result<()> {
    if !cfg.project_main_container().is_empty() {
        return Ok(());
    }

    let (_, container) = dialog.select_main_container(containers)?;
    if container.is_empty() {
        return Err(DockhandError::EmptyContainerName.into());
    }

    info!("Main container set to '{}'", container);
    cfg.save_container_name(&container)
}

/// Ensures the project has a start command, prompting for it if not.
pub fn define_start_command(cfg: &mut dyn ProjectConfig, dialog: &dyn Dialog) -> Result<()> {
    if !cfg.start_command().is_empty() {
        return Ok(());
    }

    let start_command = dialog.ask_start_command()?;
    if start_command.is_empty() {
        return Err(DockhandError::EmptyStartCommand.into());
    }

    info!("Start command set to '{}'", start_command);
    cfg.save_start_command(&start_command)
}
