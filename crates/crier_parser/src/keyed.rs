//! `key=value` list parsing.
//!
//! A narrow grammar reused by the work-priority argument kind: the raw
//! text is split on whitespace and each token carrying an `=` becomes a
//! pair, split at the first `=`. Tokens without an `=` (including the
//! command word itself) are dropped silently. Order is preserved and
//! duplicates are kept; collapsing later duplicates onto earlier ones is
//! the consumer's policy, not the parser's.

/// Parses a run of `key=value` pairs out of raw text.
#[must_use]
pub fn parse_keyed(raw: &str) -> Vec<(String, String)> {
    raw.split_whitespace()
        .filter_map(|token| {
            token
                .split_once('=')
                .map(|(key, value)| (key.to_string(), value.to_string()))
        })
        .collect()
}
