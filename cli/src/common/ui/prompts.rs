//! # Terminal Prompts (`common::ui::prompts`)
//!
//! File: cli/src/common/ui/prompts.rs
//!
//! `dialoguer`-backed implementation of the `Dialog` trait.
//!
use super::Dialog;
use crate::core::error::{DockhandError, Result};
use anyhow::anyhow;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::io::IsTerminal;
use tracing::debug;

/// Prompts on the controlling terminal.
#[derive(Debug, Clone)]
pub struct TerminalDialog {
    default_start_command: String,
}

impl TerminalDialog {
    pub fn new(default_start_command: impl Into<String>) -> Self {
        Self {
            default_start_command: default_start_command.into(),
        }
    }
}

/// Fails unless a user is attached to the terminal.
///
/// Prompts are drawn on stderr and answered on stdin, so stdout may be piped
/// (`dockhand composer:update | tee log`).
fn ensure_attended(what: &str) -> Result<()> {
    check_attended(
        what,
        std::io::stdin().is_terminal(),
        console::user_attended_stderr(),
    )
}

fn check_attended(what: &str, stdin_is_term: bool, stderr_is_term: bool) -> Result<()> {
    if stdin_is_term && stderr_is_term {
        return Ok(());
    }
    Err(anyhow!(DockhandError::Dialog(format!(
        "Cannot prompt for the {what} in non-interactive mode. Set it in .dockhand.toml"
    ))))
}

impl Dialog for TerminalDialog {
    fn select_main_container(&self, containers: &[String]) -> Result<(usize, String)> {
        ensure_attended("main container")?;
        let theme = ColorfulTheme::default();

        if containers.is_empty() {
            debug!("No containers to choose from, asking for a name instead.");
            let name: String = Input::with_theme(&theme)
                .with_prompt("Main container name")
                .allow_empty(true)
                .interact_text()
                .map_err(|e| anyhow!(DockhandError::Dialog(e.to_string())))?;
            return Ok((0, name.trim().to_string()));
        }

        let index = Select::with_theme(&theme)
            .with_prompt("Select the main container")
            .items(containers)
            .default(0)
            .interact()
            .map_err(|e| anyhow!(DockhandError::Dialog(e.to_string())))?;
        Ok((index, containers[index].clone()))
    }

    fn ask_start_command(&self) -> Result<String> {
        ensure_attended("start command")?;
        let theme = ColorfulTheme::default();
        let mut input = Input::<String>::with_theme(&theme)
            .with_prompt("Command that starts the project")
            .allow_empty(true);
        if !self.default_start_command.is_empty() {
            input = input.default(self.default_start_command.clone());
        }
        let command = input
            .interact_text()
            .map_err(|e| anyhow!(DockhandError::Dialog(e.to_string())))?;
        Ok(command.trim().to_string())
    }
}
