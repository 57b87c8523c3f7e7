//! Catalog entry kinds.
//!
//! The domain objects typed arguments resolve to. Entries carry just
//! enough of the simulation's data for the engine to validate a request;
//! the host builds them from its own definition database at startup.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::registry::Keyed;

/// Species facts a selector needs to judge gender qualifiers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Species {
    /// Whether the species is an animal.
    pub animal: bool,
    /// Whether individuals of the species are gendered.
    pub has_genders: bool,
}

/// A purchasable thing in the item catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemEntry {
    /// Display name viewers type.
    pub name: String,
    /// Optional shorthand viewers may type instead.
    pub alias: Option<String>,
    /// Stable definition name in the simulation.
    pub def_name: String,
    /// Purchase price; non-positive means the item cannot be bought.
    pub cost: i32,
    /// Whether the entry still has concrete backing in the simulation.
    pub enabled: bool,
    /// Whether the item carries a quality attribute.
    pub has_quality: bool,
    /// Whether the item is crafted from a material.
    pub made_from_material: bool,
    /// Definition names of legal materials; empty means any material.
    pub allowed_materials: Vec<String>,
    /// Whether this entry may itself be used as a material.
    pub usable_as_material: bool,
    /// Species facts, when the item is a creature.
    pub species: Option<Species>,
}

impl ItemEntry {
    /// Creates an enabled entry with no attribute support.
    #[must_use]
    pub fn new(name: impl Into<String>, def_name: impl Into<String>, cost: i32) -> Self {
        Self {
            name: name.into(),
            alias: None,
            def_name: def_name.into(),
            cost,
            enabled: true,
            has_quality: false,
            made_from_material: false,
            allowed_materials: Vec::new(),
            usable_as_material: false,
            species: None,
        }
    }

    /// Adds a shorthand alias.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Marks the item as carrying a quality attribute.
    #[must_use]
    pub fn with_quality(mut self) -> Self {
        self.has_quality = true;
        self
    }

    /// Marks the item as crafted from a material, optionally restricted to
    /// the given material definition names.
    #[must_use]
    pub fn with_materials(mut self, allowed: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.made_from_material = true;
        self.allowed_materials = allowed.into_iter().map(Into::into).collect();
        self
    }

    /// Marks the entry as usable as a material for other items.
    #[must_use]
    pub fn as_material(mut self) -> Self {
        self.usable_as_material = true;
        self
    }

    /// Attaches species facts.
    #[must_use]
    pub fn with_species(mut self, species: Species) -> Self {
        self.species = Some(species);
        self
    }

    /// Marks the entry as disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Whether the item represents an animal species.
    #[must_use]
    pub fn is_animal(&self) -> bool {
        self.species.is_some_and(|s| s.animal)
    }

    /// Whether the item can currently be purchased at all.
    #[must_use]
    pub fn available(&self) -> bool {
        self.enabled && self.cost > 0
    }

    /// Whether `material` is a legal material for this item.
    #[must_use]
    pub fn allows_material(&self, material: &ItemEntry) -> bool {
        if !self.made_from_material || !material.usable_as_material {
            return false;
        }

        self.allowed_materials.is_empty()
            || self.allowed_materials.iter().any(|m| m == &material.def_name)
    }
}

impl Keyed for ItemEntry {
    fn lookup_keys(&self) -> Vec<&str> {
        let mut keys = vec![self.name.as_str()];
        keys.extend(self.alias.as_deref());
        keys.push(self.def_name.as_str());
        keys
    }
}

/// A personality trait viewers can buy onto or off of a character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraitEntry {
    /// Display name viewers type.
    pub name: String,
    /// Optional shorthand viewers may type instead.
    pub alias: Option<String>,
    /// Price to add the trait.
    pub cost_add: i32,
    /// Price to remove the trait.
    pub cost_remove: i32,
}

impl TraitEntry {
    /// Creates a trait entry.
    #[must_use]
    pub fn new(name: impl Into<String>, cost_add: i32, cost_remove: i32) -> Self {
        Self {
            name: name.into(),
            alias: None,
            cost_add,
            cost_remove,
        }
    }

    /// Adds a shorthand alias.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

impl Keyed for TraitEntry {
    fn lookup_keys(&self) -> Vec<&str> {
        let mut keys = vec![self.name.as_str()];
        keys.extend(self.alias.as_deref());
        keys
    }
}

/// A buyable character or animal kind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpeciesEntry {
    /// Display name viewers type.
    pub name: String,
    /// Stable definition name in the simulation.
    pub def_name: String,
    /// Purchase price.
    pub cost: i32,
}

impl SpeciesEntry {
    /// Creates a species entry.
    #[must_use]
    pub fn new(name: impl Into<String>, def_name: impl Into<String>, cost: i32) -> Self {
        Self {
            name: name.into(),
            def_name: def_name.into(),
            cost,
        }
    }
}

impl Keyed for SpeciesEntry {
    fn lookup_keys(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.def_name.as_str()]
    }
}

/// A generic keyed definition: skills, research projects, stats,
/// capacities. Matched by label or definition name.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Definition {
    /// Stable definition name in the simulation.
    pub def_name: String,
    /// Human-readable label viewers type.
    pub label: String,
    /// Optional shorthand label.
    pub alias: Option<String>,
}

impl Definition {
    /// Creates a definition.
    #[must_use]
    pub fn new(def_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            def_name: def_name.into(),
            label: label.into(),
            alias: None,
        }
    }

    /// Adds a shorthand label.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

impl Keyed for Definition {
    fn lookup_keys(&self) -> Vec<&str> {
        let mut keys = vec![self.label.as_str()];
        keys.extend(self.alias.as_deref());
        keys.push(self.def_name.as_str());
        keys
    }
}
