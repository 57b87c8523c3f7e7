//! Item selector tests.
//!
//! Scenario coverage for the bracketed metadata grammar and the lazy
//! combination validity queries.

use crier_catalog::{Catalog, ItemEntry, Species};
use crier_foundation::{Gender, QualityTier, SelectorError, Settings};
use crier_parser::{ArgCursor, ItemSelector};

fn catalog() -> Catalog<ItemEntry> {
    [
        ItemEntry::new("Plate armor", "Apparel_PlateArmor", 800)
            .with_alias("plate")
            .with_quality()
            .with_materials(["Steel", "Plasteel"]),
        ItemEntry::new("Steel", "Steel", 5).as_material(),
        ItemEntry::new("Plasteel", "Plasteel", 15).as_material(),
        ItemEntry::new("Cloth", "Cloth", 2).as_material(),
        ItemEntry::new("Husky", "Husky", 250).with_species(Species {
            animal: true,
            has_genders: true,
        }),
        ItemEntry::new("Mechanoid", "Mech_Scyther", 900).with_species(Species {
            animal: false,
            has_genders: false,
        }),
        ItemEntry::new("Broken toy", "BrokenToy", 0),
    ]
    .into_iter()
    .collect()
}

#[test]
fn cursor_routes_bracketed_tokens_through_the_sub_parser() {
    let settings = Settings::default();
    let mut args = ArgCursor::new(["plate[excellent,plasteel]".to_string()]);

    let selector = args.next_item(&catalog(), &settings).unwrap();

    assert_eq!(
        selector.entry.as_ref().map(|e| e.name.as_str()),
        Some("Plate armor")
    );
    assert_eq!(selector.quality, Some(QualityTier::Excellent));
    assert_eq!(
        selector.material.as_ref().map(|m| m.name.as_str()),
        Some("Plasteel")
    );
}

#[test]
fn qualifier_order_does_not_matter_for_distinct_kinds() {
    let settings = Settings::default();

    let a = ItemSelector::parse("plate[steel,good]", &catalog(), &settings);
    let b = ItemSelector::parse("plate[good,steel]", &catalog(), &settings);

    assert_eq!(a.quality, b.quality);
    assert_eq!(
        a.material.as_ref().map(|m| &m.def_name),
        b.material.as_ref().map(|m| &m.def_name)
    );
}

#[test]
fn later_qualifier_of_the_same_kind_overwrites() {
    let settings = Settings::default();

    let selector = ItemSelector::parse("plate[steel,plasteel]", &catalog(), &settings);

    assert_eq!(
        selector.material.as_ref().map(|m| m.name.as_str()),
        Some("Plasteel")
    );
    assert!(!selector.malformed);
}

#[test]
fn malformed_halt_keeps_earlier_fields_and_skips_later_ones() {
    let settings = Settings::default();

    let selector = ItemSelector::parse("plate[excellent,bogus,steel]", &catalog(), &settings);

    assert_eq!(selector.quality, Some(QualityTier::Excellent));
    assert!(selector.malformed);
    assert!(selector.material.is_none());
    assert!(!selector.is_valid(&settings));
}

#[test]
fn setting_one_field_never_clears_another() {
    let settings = Settings::default();

    let selector = ItemSelector::parse("husky[female]", &catalog(), &settings);

    assert_eq!(selector.gender, Some(Gender::Female));
    // quality and material were never touched
    assert!(selector.quality.is_none());
    assert!(selector.material.is_none());
}

#[test]
fn disabled_base_item_is_an_error_on_demand() {
    let settings = Settings::default();

    let selector = ItemSelector::parse("broken toy", &catalog(), &settings);

    assert!(matches!(
        selector.error(),
        Some(SelectorError::DisabledItem { name }) if name == "Broken toy"
    ));
}

#[test]
fn incompatible_material_names_both_parties() {
    let settings = Settings::default();

    let selector = ItemSelector::parse("plate[cloth]", &catalog(), &settings);

    match selector.error() {
        Some(SelectorError::MaterialNotCompatible { item, material }) => {
            assert_eq!(item, "Plate armor");
            assert_eq!(material, "Cloth");
        }
        other => panic!("expected a material compatibility error, got {other:?}"),
    }
}

#[test]
fn gender_is_required_exactly_when_the_species_is_gendered() {
    let settings = Settings::default();

    let missing = ItemSelector::parse("husky", &catalog(), &settings);
    assert!(matches!(
        missing.error(),
        Some(SelectorError::GenderRequired { .. })
    ));

    let present = ItemSelector::parse("husky[male]", &catalog(), &settings);
    assert!(present.error().is_none());

    let unsupported = {
        let mut s = ItemSelector::parse("mechanoid", &catalog(), &settings);
        s.gender = Some(Gender::Male);
        s
    };
    assert!(matches!(
        unsupported.error(),
        Some(SelectorError::GenderNotSupported { .. })
    ));
}

#[test]
fn gender_on_a_non_animal_is_a_material_lookup_miss() {
    let settings = Settings::default();

    // "male" is not a registered material here, and the mechanoid is not
    // an animal, so the qualifier is simply unusable.
    let selector = ItemSelector::parse("mechanoid[male]", &catalog(), &settings);

    assert!(selector.gender.is_none());
    assert!(selector.malformed);
}

#[test]
fn validity_is_lazy_and_does_not_block_construction() {
    let settings = Settings::default();

    // quality on an item with no quality attribute parses fine...
    let selector = ItemSelector::parse("husky[male,good]", &catalog(), &settings);
    assert_eq!(selector.quality, Some(QualityTier::Good));

    // ...and only the validity query calls it out
    assert!(matches!(
        selector.error(),
        Some(SelectorError::QualityNotSupported { .. })
    ));
}
