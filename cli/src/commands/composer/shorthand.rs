//! # Shorthand Command Parser
//!
//! File: cli/src/commands/composer/shorthand.rs
//!
//! ## Overview
//!
//! Splits a colon-delimited shorthand token such as `composer:update:memory`
//! into the pieces the composer needs:
//!
//! | input | short command | call type | docker command |
//! |---|---|---|---|
//! | `composer:update:memory` | `update:memory` | `memory` | `update` |
//! | `composer:update` | `update` | - | `update` |
//! | `composer` | `composer` | - | (empty) |
//! | `composer:memory` | `composer:memory` | `memory` | (empty) |
//!
//! Parsing never fails. Shapes that do not fit degrade to an empty call type
//! and/or an empty docker command.
//!
use std::fmt;

/// A recognized modifier selecting an alternate invocation branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallType {
    /// Run the tool through `php -d memory_limit=-1`.
    Memory,
}

impl CallType {
    pub const ALL: [CallType; 1] = [CallType::Memory];

    /// Token used as the last segment of a shorthand (`composer:update:memory`).
    pub fn token(self) -> &'static str {
        match self {
            CallType::Memory => "memory",
        }
    }

    /// Positional argument that selects this call type (`dockhand composer m update`).
    pub fn trigger(self) -> &'static str {
        match self {
            CallType::Memory => "m",
        }
    }

    /// Looks up the call type named by a shorthand's last segment.
    ///
    /// # Arguments
    ///
    /// * `token` - The segment after the last `:` (e.g. `"memory"` in `composer:update:memory`).
    ///
    /// # Returns
    ///
    /// * `Some(CallType)` if `token` is a known modifier, `None` otherwise.
    ///   Matching is exact and case-sensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ct| ct.token() == token)
    }

    /// Looks up the call type selected by a positional trigger argument.
    ///
    /// # Arguments
    ///
    /// * `trigger` - The first positional argument after the shorthand (e.g. `"m"`).
    ///
    /// # Returns
    ///
    /// * `Some(CallType)` if `trigger` is a known trigger, `None` otherwise.
    pub fn from_trigger(trigger: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ct| ct.trigger() == trigger)
    }
}

impl fmt::Display for CallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Result of decomposing a shorthand token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedShorthand {
    /// Tool prefix, the first `:` segment (`composer`).
    pub prefix: String,
    /// Everything after the first `:`, or the whole input when there is none.
    pub short_command: String,
    /// Trailing modifier, if the last segment is a known call type token.
    pub call_type: Option<CallType>,
    /// Subcommand to forward to the wrapped tool, empty when there is none.
    pub docker_command: String,
}

/// Decomposes `raw` into prefix, short command, call type and docker command.
///
/// # Arguments
///
/// * `raw` - The shorthand token as typed, e.g. `composer:update:memory`.
///
/// # Returns
///
/// * A `ParsedShorthand`. The prefix is not validated here; see
///   `commands::composer::parse_shorthand`.
pub fn parse_command(raw: &str) -> ParsedShorthand {
    let Some((prefix, short)) = raw.split_once(':') else {
        return ParsedShorthand {
            prefix: raw.to_string(),
            short_command: raw.to_string(),
            ..Default::default()
        };
    };

    let (short_command, call_type, docker_command) = match short.rsplit_once(':') {
        Some((head, last)) => match CallType::from_token(last) {
            Some(call_type) => (short, Some(call_type), head),
            None => (short, None, short),
        },
        // A remainder made of the modifier alone leaves nothing to forward.
        None => match CallType::from_token(short) {
            Some(call_type) => (raw, Some(call_type), ""),
            None => (short, None, short),
        },
    };

    ParsedShorthand {
        prefix: prefix.to_string(),
        short_command: short_command.to_string(),
        call_type,
        docker_command: docker_command.to_string(),
    }
}
