//! Settings, normalization, and shared error types for Crier.
//!
//! This crate provides:
//! - [`Settings`] - The explicit configuration value threaded through every parse
//! - [`fold`] - The comparison normalization applied to chat text
//! - [`QualityTier`] / [`Gender`] - Qualifier vocabularies for item selectors
//! - [`SelectorError`] - The named violations a completed item selector can carry

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod fold;
pub mod settings;
pub mod types;

pub use error::SelectorError;
pub use fold::{eq_fold, fold};
pub use settings::{MatchMode, QualityGates, Settings};
pub use types::{Gender, QualityTier};
