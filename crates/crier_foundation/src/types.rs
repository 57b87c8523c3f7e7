//! Qualifier vocabularies for item selectors.
//!
//! Quality tiers and genders are closed sets, looked up by the folded form
//! of the qualifier a viewer typed inside a bracketed item token.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The quality of a crafted item, lowest to highest.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum QualityTier {
    /// Barely usable.
    Awful,
    /// Below average.
    Poor,
    /// Average craftsmanship.
    Normal,
    /// Above average.
    Good,
    /// Fine craftsmanship.
    Excellent,
    /// Exceptional craftsmanship.
    Masterwork,
    /// The best an item can be.
    Legendary,
}

impl QualityTier {
    /// All tiers, lowest to highest.
    pub const ALL: [QualityTier; 7] = [
        QualityTier::Awful,
        QualityTier::Poor,
        QualityTier::Normal,
        QualityTier::Good,
        QualityTier::Excellent,
        QualityTier::Masterwork,
        QualityTier::Legendary,
    ];

    /// The lowercase name viewers type for this tier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            QualityTier::Awful => "awful",
            QualityTier::Poor => "poor",
            QualityTier::Normal => "normal",
            QualityTier::Good => "good",
            QualityTier::Excellent => "excellent",
            QualityTier::Masterwork => "masterwork",
            QualityTier::Legendary => "legendary",
        }
    }

    /// Looks up a tier by its folded name.
    #[must_use]
    pub fn from_name(folded: &str) -> Option<QualityTier> {
        QualityTier::ALL.into_iter().find(|t| t.name() == folded)
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The gender of a purchased animal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Gender {
    /// A male animal.
    Male,
    /// A female animal.
    Female,
}

impl Gender {
    /// The lowercase name viewers type for this gender.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Looks up a gender by its folded name.
    #[must_use]
    pub fn from_name(folded: &str) -> Option<Gender> {
        match folded {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
