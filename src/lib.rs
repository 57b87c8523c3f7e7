//! Crier - Chat command resolution and typed argument engine
//!
//! This crate re-exports all layers of the Crier system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: crier_parser     — Tokenizer, command router, argument cursor,
//!                             item selector sub-parser, keyed-pair parser
//! Layer 1: crier_catalog    — Catalog/command/viewer registries
//! Layer 0: crier_foundation — Settings, normalization fold, selector errors
//! ```

pub use crier_catalog as catalog;
pub use crier_foundation as foundation;
pub use crier_parser as parser;
