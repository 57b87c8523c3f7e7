//! Comparison normalization for chat text.
//!
//! Chat clients substitute typographic punctuation for what the viewer
//! actually typed (curly quotes, long dashes, non-breaking spaces). Every
//! registry lookup and command comparison goes through [`fold`] so those
//! substitutions never break a match. Tokens themselves are stored as
//! typed; folding happens at comparison time only.

/// Lowercases a string and folds typographic punctuation to ASCII.
#[must_use]
pub fn fold(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for ch in input.chars() {
        match ch {
            '\u{2018}' | '\u{2019}' | '\u{201B}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201F}' => out.push('"'),
            '\u{2013}' | '\u{2014}' => out.push('-'),
            '\u{00A0}' => out.push(' '),
            _ => out.extend(ch.to_lowercase()),
        }
    }

    out
}

/// Compares two strings under [`fold`] normalization.
#[must_use]
pub fn eq_fold(a: &str, b: &str) -> bool {
    fold(a) == fold(b)
}
