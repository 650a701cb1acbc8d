//! # Composer Shorthand Commands
//!
//! File: cli/src/commands/composer/mod.rs
//!
//! ## Overview
//!
//! Handles every shorthand token that is not a built-in subcommand, e.g.
//! `composer`, `composer:update`, `composer:update:memory` or `c:install`.
//! The token is decomposed by `shorthand::parse_command`, turned into an
//! `exec` argument vector by `compose::compose_handle` and handed to the
//! Docker CLI.
//!
//! ## Usage
//!
//! ```bash
//! # docker exec -it <main> composer update
//! dockhand composer:update
//!
//! # docker exec -i <main> /usr/local/bin/php -d memory_limit=-1 /usr/bin/composer update
//! dockhand composer:update:memory
//! dockhand composer m update
//!
//! # Arguments, flags included, reach composer untouched
//! dockhand composer:require:memory monolog/monolog --dev
//! ```
//!
pub mod compose;
pub mod shorthand;

use self::{
    compose::{compose_handle, ComposerState},
    shorthand::{parse_command, CallType, ParsedShorthand},
};
use crate::{
    common::{
        docker::{locate::BinaryLocator, locate::DockerLocator, state},
        process,
        ui::prompts::TerminalDialog,
    },
    core::{
        config::{self, ProjectConfig, ProjectSettings},
        error::{DockhandError, Result},
    },
};
use anyhow::anyhow;
use tracing::{debug, info};

/// Tool prefixes routed to the composer.
const COMPOSER_PREFIXES: [&str; 2] = ["composer", "c"];

/// Composer state for a single invocation, derived from the shorthand token.
pub struct ComposerSession<'a> {
    parsed: ParsedShorthand,
    containers: Vec<String>,
    locator: &'a dyn BinaryLocator,
}

impl<'a> ComposerSession<'a> {
    pub fn new(
        parsed: ParsedShorthand,
        containers: Vec<String>,
        locator: &'a dyn BinaryLocator,
    ) -> Self {
        Self {
            parsed,
            containers,
            locator,
        }
    }
}

impl ComposerState for ComposerSession<'_> {
    fn call_type(&self) -> Option<CallType> {
        self.parsed.call_type
    }

    fn composer_command(&self) -> &str {
        &self.parsed.docker_command
    }

    fn container_list(&self) -> &[String] {
        &self.containers
    }

    fn locator(&self) -> &dyn BinaryLocator {
        self.locator
    }
}

/// Parses the shorthand token and rejects prefixes that no tool handles.
pub fn parse_shorthand(raw: &str) -> Result<ParsedShorthand> {
    let parsed = parse_command(raw);
    if !COMPOSER_PREFIXES.contains(&parsed.prefix.as_str()) {
        return Err(anyhow!(DockhandError::UnknownShorthand(raw.to_string())));
    }
    Ok(parsed)
}

/// # Handle Shorthand Command (`handle_shorthand`)
///
/// Entry point for external subcommands. `tokens[0]` is the shorthand, the
/// rest are positional arguments forwarded to the wrapped tool.
///
/// ## Workflow:
/// 1. Parse and validate the shorthand token.
/// 2. Load the user config and the project settings.
/// 3. Fetch container names from the daemon, only if the main container still
///    has to be chosen.
/// 4. Compose the `exec` argument vector.
/// 5. Run it through the configured Docker binary (or print it on `--dry-run`).
pub async fn handle_shorthand(tokens: Vec<String>, dry_run: bool) -> Result<()> {
    let (raw, args) = tokens
        .split_first()
        .ok_or_else(|| anyhow!(DockhandError::UnknownShorthand(String::new())))?;
    let parsed = parse_shorthand(raw)?;
    debug!("Parsed shorthand '{}': {:?}", raw, parsed);

    let user_cfg = config::load_user_config()?;
    let mut project = ProjectSettings::discover()?;

    let containers = if project.project_main_container().is_empty() {
        state::list_container_names(user_cfg.docker.all_containers).await
    } else {
        Vec::new()
    };

    let locator = DockerLocator::new(user_cfg.docker.binary.clone());
    let session = ComposerSession::new(parsed, containers, &locator);
    let dialog = TerminalDialog::new(user_cfg.start.default_command.clone());

    let argv = compose_handle(&mut project, &dialog, &session, args)?;
    info!(
        "Called: {}",
        process::display_command(&user_cfg.docker.binary, &argv)
    );
    process::run_or_print(&user_cfg.docker.binary, &argv, dry_run)
}
