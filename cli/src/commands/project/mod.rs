//! # Project Settings Command Group
//!
//! File: cli/src/commands/project/mod.rs
//!
//! ## Overview
//!
//! `dockhand project show` prints the settings stored in `.dockhand.toml`.
//! `dockhand project reset` clears the main container and start command so
//! the next command prompts for them again.
//!
use crate::core::{
    config::{ProjectConfig, ProjectSettings},
    error::Result,
};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser, Debug)]
pub struct ProjectArgs {
    #[command(subcommand)]
    command: ProjectCommand,
}

#[derive(Subcommand, Debug)]
enum ProjectCommand {
    /// Print the stored project settings.
    Show,
    /// Forget the main container and start command.
    Reset,
}

/// Renders the settings as printed by `project show`.
fn describe(settings: &ProjectSettings) -> String {
    let or_unset = |value: &str| {
        if value.is_empty() {
            "(not set)".to_string()
        } else {
            value.to_string()
        }
    };
    format!(
        "Project:        {}\nFile:           {}\nMain container: {}\nStart command:  {}",
        or_unset(settings.name()),
        settings.path().display(),
        or_unset(settings.project_main_container()),
        or_unset(settings.start_command()),
    )
}

/// Dispatches `project show` / `project reset` against the discovered settings.
pub async fn handle_project(args: ProjectArgs) -> Result<()> {
    let mut settings = ProjectSettings::discover()?;
    match args.command {
        ProjectCommand::Show => println!("{}", describe(&settings)),
        ProjectCommand::Reset => {
            settings.reset()?;
            info!("Project settings reset.");
            println!("Cleared main container and start command in {}", settings.path().display());
        }
    }
    Ok(())
}
