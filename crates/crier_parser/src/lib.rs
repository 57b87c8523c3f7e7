//! Chat command resolution and typed argument parsing.
//!
//! This crate turns one raw line of live-chat text into a resolved command
//! identity and a stream of strongly-typed, validated arguments.
//!
//! # Architecture
//!
//! ```text
//! "$thrumbo[legendary,male] 2"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → strips /w marker, matches ! or $ prefix,
//! └─────────────────┘    yields ["buy", "thrumbo[legendary,male]", "2"]
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   ROUTER        │  → CommandDef("buy"), remaining ["thrumbo[...]", "2"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   ARG CURSOR    │  → next_item() → ItemSelector { Thrumbo, legendary, male }
//! └─────────────────┘    next_int(1, 10) → 2
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   SELECTOR      │  → is_valid() / error() → Option<SelectorError>
//! │   VALIDATION    │
//! └─────────────────┘
//! ```
//!
//! Parsing is synchronous and side-effect free: registries are read-only
//! snapshots, failure is always an explicit `None` or an error callback,
//! and nothing here blocks or panics on viewer input.
//!
//! # Modules
//!
//! - [`tokenizer`] - prefix stripping and quote-aware token splitting
//! - [`router`] - command identity lookup over the leading tokens
//! - [`cursor`] - forward-only typed argument reader
//! - [`selector`] - bracketed item metadata sub-parser
//! - [`keyed`] - `key=value` list parser for work priorities

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cursor;
pub mod keyed;
pub mod router;
pub mod selector;
pub mod tokenizer;


pub use cursor::ArgCursor;
pub use keyed::parse_keyed;
pub use router::{locate, resolve_message};
pub use selector::ItemSelector;
pub use tokenizer::{quote_join, split_args, tokenize};
