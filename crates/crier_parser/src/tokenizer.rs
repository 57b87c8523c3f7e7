//! Prefix stripping and quote-aware token splitting.
//!
//! The tokenizer decides whether a chat message is a command at all, and
//! if so turns it into an ordered token sequence. A whisper routing marker
//! is removed first; then the message must carry either the command prefix
//! or the purchase-shortcut prefix. The shortcut form is rewritten as if
//! the viewer had typed the buy command by name.

use crier_foundation::{Settings, fold};

/// Splits a message into tokens, honoring the configured prefixes.
///
/// Returns `None` when the message is not a command. That is the normal
/// outcome for ordinary chat and is not an error.
#[must_use]
pub fn tokenize(raw: &str, settings: &Settings) -> Option<Vec<String>> {
    // Whisper-routed messages arrive with a fixed "/w " marker.
    let message = raw.strip_prefix("/w ").unwrap_or(raw);

    if let Some(rest) = strip_prefix_folded(message, &settings.command_prefix) {
        return Some(split_args(rest));
    }

    if let Some(rest) = strip_prefix_folded(message, &settings.buy_prefix) {
        // The shortcut is sugar for the buy command itself.
        let mut tokens = vec![settings.buy_command.clone()];
        tokens.extend(split_args(rest));

        return Some(tokens);
    }

    tracing::trace!("message carries no command prefix");

    None
}

/// Case-insensitively strips a configured prefix, if present.
fn strip_prefix_folded<'a>(message: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() || message.len() < prefix.len() {
        return None;
    }

    if !message.is_char_boundary(prefix.len()) {
        return None;
    }

    let (head, rest) = message.split_at(prefix.len());

    if fold(head) == fold(prefix) {
        Some(rest)
    } else {
        None
    }
}

/// Splits text into whitespace-delimited tokens, treating a double-quoted
/// run as a single token. Surrounding quotes are stripped and `\"` inside
/// a quoted run is unescaped. An unterminated quote swallows the rest of
/// the line as one token.
#[must_use]
pub fn split_args(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }

                let mut quoted = String::new();

                while let Some(c) = chars.next() {
                    match c {
                        '\\' if chars.peek() == Some(&'"') => {
                            chars.next();
                            quoted.push('"');
                        }
                        '"' => break,
                        _ => quoted.push(c),
                    }
                }

                tokens.push(quoted);
            }
            c if c.is_whitespace() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// Re-serializes tokens into a line [`split_args`] will split back into
/// the same sequence. Tokens containing whitespace or quote characters are
/// double-quoted with interior quotes escaped.
#[must_use]
pub fn quote_join(tokens: &[String]) -> String {
    tokens
        .iter()
        .map(|token| {
            let needs_quoting =
                token.is_empty() || token.chars().any(|c| c.is_whitespace() || c == '"');

            if needs_quoting {
                format!("\"{}\"", token.replace('"', "\\\""))
            } else {
                token.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
