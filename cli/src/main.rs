//! # Dockhand Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point of the `dockhand` CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers
//!
//! Any token that is not a built-in subcommand is treated as a shorthand
//! (`composer:update:memory`) and routed to `commands::composer`.
//!
//! ## Examples
//!
//! ```bash
//! dockhand start
//! dockhand composer:update:memory
//! dockhand --dry-run c:require monolog/monolog
//! dockhand -vv project show
//! ```
//!
use clap::{Parser, Subcommand};
use commands::start::{StartArgs, StartVariant};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod common;
mod core;

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "dockhand",
    about = "Shorthand commands for containerized PHP/Composer development",
    long_about = "Starts the project with its configured start command and turns shorthands like\n\
                  `composer:update:memory` into `docker exec` invocations on the main container.",
    after_help = "Shorthands:\n  \
                  composer[:<subcommand>][:memory] [args...]   (prefix alias: c)\n  \
                  composer m <subcommand> [args...]             same as <subcommand>:memory",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    // Only accepted before the subcommand. Later tokens belong to the wrapped
    // tool (`dockhand start -V` is `docker compose up -V`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Print the command that would run instead of running it.
    #[arg(long)]
    dry_run: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Runs the start command: {docker-compose -f docker-compose.yml up} [custom parameters]
    #[command(name = "start", alias = "st", disable_help_flag = true)]
    Start(StartArgs),
    /// Runs the start command with --force-recreate
    #[command(name = "start:force", alias = "s:f", disable_help_flag = true)]
    StartForce(StartArgs),
    /// Runs the start command with --remove-orphans
    #[command(name = "start:orphans", alias = "s:o", disable_help_flag = true)]
    StartOrphans(StartArgs),
    /// Runs the start command with --force-recreate --remove-orphans
    #[command(name = "start:force-orphans", alias = "s:fo", disable_help_flag = true)]
    StartForceOrphans(StartArgs),
    /// Inspect or reset the stored project settings
    Project(commands::project::ProjectArgs),
    #[command(external_subcommand)]
    Shorthand(Vec<String>),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let dry_run = cli.dry_run;
    let start = |variant: StartVariant, args: StartArgs| {
        commands::start::handle_start(variant, args, dry_run)
    };

    let command_result = match cli.command {
        Commands::Start(args) => start(StartVariant::Basic, args).await,
        Commands::StartForce(args) => start(StartVariant::ForceRecreate, args).await,
        Commands::StartOrphans(args) => start(StartVariant::RemoveOrphans, args).await,
        Commands::StartForceOrphans(args) => {
            start(StartVariant::ForceRecreateRemoveOrphans, args).await
        }
        Commands::Project(args) => commands::project::handle_project(args).await,
        Commands::Shorthand(tokens) => commands::composer::handle_shorthand(tokens, dry_run).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
