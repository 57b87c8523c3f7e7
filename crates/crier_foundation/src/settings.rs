//! Parse-time configuration.
//!
//! Everything that used to live in ambient global settings is passed into
//! the engine as an explicit [`Settings`] value, keeping every parse
//! referentially transparent. The host owns the value; the engine only
//! reads it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::QualityTier;

/// How command and definition keys are matched against typed tokens.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MatchMode {
    /// Case-insensitive equality.
    #[default]
    Exact,
    /// Case-insensitive prefix match, toolkit style.
    Prefix,
}

/// Per-tier gates on which quality qualifiers are recognized.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QualityGates {
    /// Master switch for quality qualifiers.
    pub enabled: bool,
    /// Recognize `awful`.
    pub awful: bool,
    /// Recognize `poor`.
    pub poor: bool,
    /// Recognize `normal`.
    pub normal: bool,
    /// Recognize `good`.
    pub good: bool,
    /// Recognize `excellent`.
    pub excellent: bool,
    /// Recognize `masterwork`.
    pub masterwork: bool,
    /// Recognize `legendary`.
    pub legendary: bool,
}

impl QualityGates {
    /// Whether the given tier is currently recognized.
    #[must_use]
    pub const fn allows(&self, tier: QualityTier) -> bool {
        if !self.enabled {
            return false;
        }

        match tier {
            QualityTier::Awful => self.awful,
            QualityTier::Poor => self.poor,
            QualityTier::Normal => self.normal,
            QualityTier::Good => self.good,
            QualityTier::Excellent => self.excellent,
            QualityTier::Masterwork => self.masterwork,
            QualityTier::Legendary => self.legendary,
        }
    }
}

impl Default for QualityGates {
    fn default() -> Self {
        Self {
            enabled: true,
            awful: true,
            poor: true,
            normal: true,
            good: true,
            excellent: true,
            masterwork: true,
            legendary: true,
        }
    }
}

/// The configuration value threaded through every parse.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Settings {
    /// Prefix that marks a message as a command.
    pub command_prefix: String,
    /// Prefix that is shorthand for the buy command.
    pub buy_prefix: String,
    /// Key of the registered buy command the shorthand expands to.
    pub buy_command: String,
    /// Matching discipline for commands and keyed definitions.
    pub match_mode: MatchMode,
    /// Which quality qualifiers are recognized.
    pub qualities: QualityGates,
    /// Whether material qualifiers are recognized.
    pub materials: bool,
    /// Whether gender qualifiers are recognized on animals.
    pub genders: bool,
    /// Whether a selector must spell out every attribute its item supports.
    pub require_full_selector: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            command_prefix: "!".to_string(),
            buy_prefix: "$".to_string(),
            buy_command: "buy".to_string(),
            match_mode: MatchMode::Exact,
            qualities: QualityGates::default(),
            materials: true,
            genders: true,
            require_full_selector: false,
        }
    }
}
