//! # Command Composer
//!
//! File: cli/src/commands/composer/compose.rs
//!
//! ## Overview
//!
//! Turns a parsed shorthand plus the caller's positional arguments into the
//! argument vector handed to the container runtime:
//!
//! ```text
//! exec -it <container> composer [subcommand] [args...]
//! exec -i  <container> <php> -d memory_limit=-1 <composer> [subcommand] [args...]
//! ```
//!
//! The first form is used when no call type is in effect, the second for the
//! `memory` call type. Binary paths for the second form are resolved inside
//! the container through the injected `BinaryLocator`; any failure there is
//! returned unchanged and no vector is produced.
//!
use super::shorthand::CallType;
use crate::{
    common::{docker::locate::BinaryLocator, project, ui::Dialog},
    core::{
        config::ProjectConfig,
        error::{DockhandError, Result},
    },
};
use tracing::{debug, info};

const COMPOSER_TOOL: &str = "composer";
const PHP_TOOL: &str = "php";
const UNLIMITED_MEMORY: &str = "memory_limit=-1";

/// Read-only view of the wrapped tool's state for one invocation.
pub trait ComposerState {
    /// Call type carried by the invoked shorthand, if any.
    fn call_type(&self) -> Option<CallType>;
    /// Subcommand carried by the invoked shorthand, empty when there is none.
    fn composer_command(&self) -> &str;
    /// Containers offered when the main container still has to be chosen.
    fn container_list(&self) -> &[String];
    /// Resolves binary paths inside a container.
    fn locator(&self) -> &dyn BinaryLocator;
}

/// How the effective call type of an invocation was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallResolution<'a> {
    /// The first positional argument was a call type trigger (`m`). Only the
    /// arguments after it are forwarded.
    Fresh {
        call_type: CallType,
        forwarded: &'a [String],
    },
    /// No trigger: the call type comes from the composer state and every
    /// positional argument is forwarded.
    Continuation {
        call_type: Option<CallType>,
        forwarded: &'a [String],
    },
}

impl<'a> CallResolution<'a> {
    pub fn call_type(&self) -> Option<CallType> {
        match *self {
            CallResolution::Fresh { call_type, .. } => Some(call_type),
            CallResolution::Continuation { call_type, .. } => call_type,
        }
    }

    pub fn forwarded(&self) -> &'a [String] {
        match *self {
            CallResolution::Fresh { forwarded, .. } => forwarded,
            CallResolution::Continuation { forwarded, .. } => forwarded,
        }
    }
}

/// Decides the effective call type from the positional arguments, falling
/// back to the call type stored in the composer state.
pub fn resolve_call_type(prior: Option<CallType>, args: &[String]) -> CallResolution<'_> {
    if let Some((first, tail)) = args.split_first() {
        if let Some(call_type) = CallType::from_trigger(first) {
            return CallResolution::Fresh {
                call_type,
                forwarded: tail,
            };
        }
    }
    CallResolution::Continuation {
        call_type: prior,
        forwarded: args,
    }
}

/// Builds the `exec` argument vector for one composer invocation.
///
/// Prompts for (and persists) the main container when the project has none
/// configured yet.
///
/// # Errors
///
/// * `DockhandError::EmptyContainerName` if no container could be established.
/// * Any dialog, persistence or locator error, unchanged.
pub fn compose_handle(
    cfg: &mut dyn ProjectConfig,
    dialog: &dyn Dialog,
    state: &dyn ComposerState,
    args: &[String],
) -> Result<Vec<String>> {
    project::define_project_main_container(cfg, dialog, state.container_list())?;

    let container = cfg.project_main_container().to_string();
    if container.is_empty() {
        return Err(DockhandError::EmptyContainerName.into());
    }

    let resolution = resolve_call_type(state.call_type(), args);
    debug!("Call resolution: {:?}", resolution);

    let subcommand = state.composer_command();
    let mut argv = match resolution.call_type() {
        None => vec![
            "exec".to_string(),
            "-it".to_string(),
            container,
            COMPOSER_TOOL.to_string(),
        ],
        Some(CallType::Memory) => {
            let php = state.locator().locate(&container, PHP_TOOL)?;
            let composer = state.locator().locate(&container, COMPOSER_TOOL)?;
            vec![
                "exec".to_string(),
                "-i".to_string(),
                container,
                php,
                "-d".to_string(),
                UNLIMITED_MEMORY.to_string(),
                composer,
            ]
        }
    };

    if !subcommand.is_empty() {
        argv.push(subcommand.to_string());
    }
    argv.extend(resolution.forwarded().iter().cloned());

    info!("Composed invocation: {:?}", argv);
    Ok(argv)
}
