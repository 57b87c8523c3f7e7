//! Selector violation errors.
//!
//! Uses `thiserror` for ergonomic error definition. These are the only
//! error values the engine produces: every other failure path is an
//! explicit `Option` or an error callback carrying the offending token.
//! Malformed input never aborts a parse.

use thiserror::Error;

/// A violation found when validating a completed item selector.
///
/// Produced lazily by the selector's validity query, never during
/// construction, so a command handler can decide whether to surface the
/// violation or ignore it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// The base item exists but cannot currently be purchased.
    #[error("{name} is disabled and cannot be purchased")]
    DisabledItem {
        /// Name of the base item.
        name: String,
    },

    /// The material exists but cannot currently be purchased.
    #[error("{name} is disabled and cannot be used as a material")]
    DisabledMaterial {
        /// Name of the material.
        name: String,
    },

    /// The material is not a legal material for the base item.
    #[error("{item} cannot be made from {material}")]
    MaterialNotCompatible {
        /// Name of the base item.
        item: String,
        /// Name of the offending material.
        material: String,
    },

    /// A quality was given for an item that has no quality attribute.
    #[error("{name} does not support a quality")]
    QualityNotSupported {
        /// Name of the base item.
        name: String,
    },

    /// The item's species is gendered but no gender was given.
    #[error("{name} requires a gender")]
    GenderRequired {
        /// Name of the base item.
        name: String,
    },

    /// A gender was given for an item that cannot be gendered.
    #[error("{name} does not support a gender")]
    GenderNotSupported {
        /// Name of the base item.
        name: String,
    },
}
