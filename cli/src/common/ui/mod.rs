//! # Dockhand UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Interactive prompts used to fill in missing project settings. Callers
//! depend on the `Dialog` trait only; `prompts::TerminalDialog` is the
//! terminal implementation built on `dialoguer`.
//!
//! ## Usage
//!
//! ```rust
//! let dialog = ui::prompts::TerminalDialog::new("docker-compose -f docker-compose.yml up");
//! let (_, container) = dialog.select_main_container(&containers)?;
//! ```
//!
use crate::core::error::Result;

pub mod prompts;

/// Interactive questions asked while establishing project settings.
pub trait Dialog {
    /// Lets the user pick the project's main container from `containers`.
    /// Returns the chosen index and name. An empty name means no choice.
    fn select_main_container(&self, containers: &[String]) -> Result<(usize, String)>;
    /// Asks for the command that starts the project.
    fn ask_start_command(&self) -> Result<String>;
}
