//! # Start Project Commands
//!
//! File: cli/src/commands/start/mod.rs
//!
//! ## Overview
//!
//! Implements `dockhand start` and its variants. Each one makes sure the
//! project has a main container and a start command (prompting and saving
//! them on first use), then runs the start command with the variant's flags
//! and the user's extra arguments appended.
//!
//! | command | alias | appended flags |
//! |---|---|---|
//! | `start` | `st` | |
//! | `start:force` | `s:f` | `--force-recreate` |
//! | `start:orphans` | `s:o` | `--remove-orphans` |
//! | `start:force-orphans` | `s:fo` | `--force-recreate --remove-orphans` |
//!
//! ## Usage
//!
//! ```bash
//! # docker-compose -f docker-compose.yml up -d
//! dockhand start -d
//!
//! # docker-compose -f docker-compose.yml up --force-recreate --remove-orphans
//! dockhand s:fo
//! ```
//!
use crate::{
    common::{docker::state, process, project, ui::prompts::TerminalDialog},
    core::{
        config::{self, ProjectConfig, ProjectSettings},
        error::{DockhandError, Result},
    },
};
use anyhow::{anyhow, Context};
use clap::Parser;
use tracing::{debug, info};

/// Which flags get appended to the start command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartVariant {
    Basic,
    ForceRecreate,
    RemoveOrphans,
    ForceRecreateRemoveOrphans,
}

impl StartVariant {
    /// Flags appended after the start command's own arguments, in order.
    pub fn flags(self) -> &'static [&'static str] {
        match self {
            StartVariant::Basic => &[],
            StartVariant::ForceRecreate => &["--force-recreate"],
            StartVariant::RemoveOrphans => &["--remove-orphans"],
            StartVariant::ForceRecreateRemoveOrphans => &["--force-recreate", "--remove-orphans"],
        }
    }
}

/// Arguments shared by all start variants.
#[derive(Parser, Debug, Default)]
#[command(disable_help_flag = true)]
pub struct StartArgs {
    /// Extra arguments appended verbatim to the start command.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Splits the stored start command and appends the variant flags and extra args.
///
/// # Arguments
///
/// * `start_command` - The stored command line, split with shell quoting rules.
/// * `variant` - Selects the flags appended after the command's own arguments.
/// * `extra` - User arguments, appended last and verbatim.
///
/// # Returns
///
/// * `Result<(String, Vec<String>)>` - The binary and its arguments.
///
/// # Errors
///
/// * `DockhandError::EmptyStartCommand` if the command has no words.
/// * A parse error if its quotes are unbalanced.
pub fn build_start_invocation(
    start_command: &str,
    variant: StartVariant,
    extra: &[String],
) -> Result<(String, Vec<String>)> {
    let words = shell_words::split(start_command)
        .with_context(|| format!("Failed to parse start command: {}", start_command))?;
    let Some((binary, init_args)) = words.split_first() else {
        return Err(anyhow!(DockhandError::EmptyStartCommand));
    };

    let mut args = init_args.to_vec();
    args.extend(variant.flags().iter().map(|flag| flag.to_string()));
    args.extend(extra.iter().cloned());
    Ok((binary.clone(), args))
}

/// # Handle Start Command (`handle_start`)
///
/// ## Workflow:
/// 1. Load the user config and the project settings.
/// 2. Establish the main container (prompting from the daemon's container list).
/// 3. Establish the start command (prompting with the configured default).
/// 4. Build the invocation and run it, or print it on `--dry-run`.
pub async fn handle_start(variant: StartVariant, args: StartArgs, dry_run: bool) -> Result<()> {
    info!("Handling start command ({:?})...", variant);
    debug!("Start args: {:?}", args);

    let user_cfg = config::load_user_config()?;
    let mut project = ProjectSettings::discover()?;
    let dialog = TerminalDialog::new(user_cfg.start.default_command.clone());

    let containers = if project.project_main_container().is_empty() {
        state::list_container_names(user_cfg.docker.all_containers).await
    } else {
        Vec::new()
    };
    project::define_project_main_container(&mut project, &dialog, &containers)?;
    project::define_start_command(&mut project, &dialog)?;

    let (binary, start_args) =
        build_start_invocation(project.start_command(), variant, &args.args)?;
    info!("Called: {}", process::display_command(&binary, &start_args));
    process::run_or_print(&binary, &start_args, dry_run)
}
