//! Catalog, command, and viewer registries for Crier.
//!
//! Each registry is the read-mostly shared state a parse resolves tokens
//! against. They are backed by persistent collections so the host can hand
//! a parsing thread an O(1) snapshot clone; a parse only ever sees one
//! consistent generation of a registry, and the host mutates a fresh clone.
//!
//! - [`Catalog`] - generic name/alias indexed lookup over entries
//! - [`ItemEntry`] / [`TraitEntry`] / [`SpeciesEntry`] / [`Definition`] - entry kinds
//! - [`CommandRegistry`] - ordered command identities for routing
//! - [`ViewerDirectory`] - chat users by username

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod entry;
pub mod registry;
pub mod viewer;

pub use command::{CommandDef, CommandRegistry};
pub use entry::{Definition, ItemEntry, Species, SpeciesEntry, TraitEntry};
pub use registry::{Catalog, Keyed};
pub use viewer::{Viewer, ViewerDirectory};
