//! Bracketed item metadata sub-parser.
//!
//! One token shape gets its own grammar: `name[qualifier,qualifier,...]`.
//! Qualifiers refine the base item with a gender, a quality tier, or a
//! material, consumed in that order as an explicit cascade so the
//! gender-versus-material tie-break for animals stays fixed. The first
//! unrecognized or flag-disabled qualifier marks the selector malformed
//! and halts qualifier consumption; whatever was already accepted is kept.
//!
//! Whether the accepted *combination* is legal for the base item is a
//! separate, lazy query ([`ItemSelector::error`]), so a handler can choose
//! to surface the violation or ignore it.

use crier_catalog::{Catalog, ItemEntry};
use crier_foundation::{Gender, QualityTier, SelectorError, Settings, fold};

/// A base item plus the optional metadata a viewer attached to it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemSelector {
    /// The base catalog entry, when the name resolved.
    pub entry: Option<ItemEntry>,
    /// Requested material.
    pub material: Option<ItemEntry>,
    /// Requested quality tier.
    pub quality: Option<QualityTier>,
    /// Requested gender, for animals.
    pub gender: Option<Gender>,
    /// Whether qualifier parsing hit an unusable qualifier.
    pub malformed: bool,
}

impl ItemSelector {
    /// Wraps a bare catalog entry with no metadata.
    #[must_use]
    pub fn of(entry: ItemEntry) -> Self {
        Self {
            entry: Some(entry),
            ..Self::default()
        }
    }

    /// Parses a `name[qualifiers]` token against the item catalog.
    ///
    /// An unresolvable base name yields a malformed selector immediately;
    /// there is no point reading qualifiers for an item that does not
    /// exist.
    #[must_use]
    pub fn parse(token: &str, catalog: &Catalog<ItemEntry>, settings: &Settings) -> Self {
        let (name, qualifiers) = split_bracketed(token);

        let Some(entry) = catalog.lookup(name).cloned() else {
            tracing::debug!(token, "selector names an unknown item");

            return Self {
                malformed: true,
                ..Self::default()
            };
        };

        let mut selector = Self::default();

        for qualifier in qualifiers.into_iter().flat_map(|q| q.split(',')) {
            if entry.is_animal() && settings.genders {
                if let Some(gender) = Gender::from_name(&fold(qualifier)) {
                    selector.gender = Some(gender);
                    continue;
                }
            }

            if let Some(tier) = QualityTier::from_name(&fold(qualifier)) {
                if settings.qualities.allows(tier) {
                    selector.quality = Some(tier);
                    continue;
                }
                // A gated-off tier name falls through to the material
                // lookup, and from there to the malformed halt.
            }

            if settings.materials {
                if let Some(material) = catalog.lookup(qualifier).cloned() {
                    selector.material = Some(material);
                    continue;
                }
            }

            tracing::debug!(qualifier, "unusable selector qualifier");
            selector.malformed = true;

            break;
        }

        selector.entry = Some(entry);

        selector
    }

    /// Whether the selector can be acted on at all.
    ///
    /// With `require_full_selector` set, an item that supports a material
    /// or a quality must have one spelled out.
    #[must_use]
    pub fn is_valid(&self, settings: &Settings) -> bool {
        let Some(entry) = &self.entry else {
            return false;
        };

        if self.malformed {
            return false;
        }

        if !settings.require_full_selector {
            return true;
        }

        if entry.made_from_material && self.material.is_none() {
            return false;
        }

        !(entry.has_quality && self.quality.is_none())
    }

    /// Finds the first violation in the accepted combination, if any.
    ///
    /// Checked lazily, in a fixed order: base item availability, material
    /// availability, material compatibility, quality support, gender
    /// presence.
    #[must_use]
    pub fn error(&self) -> Option<SelectorError> {
        let entry = self.entry.as_ref()?;

        if !entry.available() {
            return Some(SelectorError::DisabledItem {
                name: entry.name.clone(),
            });
        }

        if let Some(material) = &self.material {
            if !material.available() {
                return Some(SelectorError::DisabledMaterial {
                    name: material.name.clone(),
                });
            }

            if !entry.allows_material(material) {
                return Some(SelectorError::MaterialNotCompatible {
                    item: entry.name.clone(),
                    material: material.name.clone(),
                });
            }
        }

        if self.quality.is_some() && !entry.has_quality {
            return Some(SelectorError::QualityNotSupported {
                name: entry.name.clone(),
            });
        }

        match &entry.species {
            Some(species) if species.has_genders && self.gender.is_none() => {
                Some(SelectorError::GenderRequired {
                    name: entry.name.clone(),
                })
            }
            Some(species) if !species.has_genders && self.gender.is_some() => {
                Some(SelectorError::GenderNotSupported {
                    name: entry.name.clone(),
                })
            }
            None if self.gender.is_some() => Some(SelectorError::GenderNotSupported {
                name: entry.name.clone(),
            }),
            _ => None,
        }
    }

    /// The human-readable `<material> <name> (<quality>)` form used in
    /// reply text.
    #[must_use]
    pub fn display_name(&self, plural: bool) -> String {
        let Some(entry) = &self.entry else {
            return String::new();
        };

        let mut name = entry.name.to_lowercase();

        if plural && !name.ends_with('s') {
            name.push('s');
        }

        let mut out = String::new();

        if let Some(material) = &self.material {
            out.push_str(&material.name.to_lowercase());
            out.push(' ');
        }

        out.push_str(&name);

        if let Some(quality) = self.quality {
            out.push_str(" (");
            out.push_str(quality.name());
            out.push(')');
        }

        out
    }
}

/// Splits a token at the first `[`, trimming the qualifier list's
/// brackets. A token without brackets yields no qualifier list at all,
/// which is distinct from the empty list `[]` a viewer can type.
fn split_bracketed(token: &str) -> (&str, Option<&str>) {
    match token.find('[') {
        Some(open) => {
            let qualifiers = token[open..]
                .trim_start_matches('[')
                .trim_end_matches(']');

            (&token[..open], Some(qualifiers))
        }
        None => (token, None),
    }
}
