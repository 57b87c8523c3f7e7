//! Command identity lookup.
//!
//! Given the token sequence the tokenizer produced, finds the registered
//! command the leading tokens name. Multi-word keys are matched against
//! exactly as many leading tokens as the key has words, joined by single
//! spaces; the widest matching key wins, with declaration order breaking
//! ties. An unknown command is a normal negative outcome.

use crier_catalog::{CommandDef, CommandRegistry};
use crier_foundation::{MatchMode, Settings, fold};

use crate::cursor::ArgCursor;
use crate::tokenizer::tokenize;

/// Finds the enabled command the leading tokens name.
///
/// Returns the command and the tokens left over for its arguments.
#[must_use]
pub fn locate<'r>(
    registry: &'r CommandRegistry,
    tokens: &[String],
    settings: &Settings,
) -> Option<(&'r CommandDef, Vec<String>)> {
    let mut best: Option<&CommandDef> = None;

    for command in registry.enabled() {
        let words = command.word_count();

        if words == 0 || words > tokens.len() {
            continue;
        }

        if best.is_some_and(|b| b.word_count() >= words) {
            continue;
        }

        let joined = tokens[..words].join(" ");

        if key_matches(&command.key, &joined, settings.match_mode) {
            best = Some(command);
        }
    }

    let command = best?;

    Some((command, tokens[command.word_count()..].to_vec()))
}

/// Compares a joined token run against a command key under the active
/// matching discipline. The join width is always the key's own word
/// count; prefix mode never widens it.
fn key_matches(key: &str, joined: &str, mode: MatchMode) -> bool {
    let key = fold(key);
    let joined = fold(joined);

    match mode {
        MatchMode::Exact => joined == key,
        MatchMode::Prefix => joined.starts_with(&key),
    }
}

/// Runs the full pipeline on one raw chat message: tokenize, route, and
/// wrap the remaining tokens in an [`ArgCursor`] for the handler.
///
/// Returns `None` for ordinary chat and for unknown commands alike.
#[must_use]
pub fn resolve_message<'r>(
    raw: &str,
    registry: &'r CommandRegistry,
    settings: &Settings,
) -> Option<(&'r CommandDef, ArgCursor)> {
    let tokens = tokenize(raw, settings)?;

    let Some((command, remaining)) = locate(registry, &tokens, settings) else {
        tracing::debug!(message = raw, "no registered command matches");

        return None;
    };

    Some((command, ArgCursor::new(remaining)))
}
