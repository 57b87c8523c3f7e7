//! Typed argument resolution tests.

use crier_catalog::{
    Catalog, CommandDef, CommandRegistry, Definition, ItemEntry, SpeciesEntry, TraitEntry, Viewer,
    ViewerDirectory,
};
use crier_foundation::{MatchMode, Settings};
use crier_parser::ArgCursor;

fn cursor(tokens: &[&str]) -> ArgCursor {
    ArgCursor::new(tokens.iter().map(ToString::to_string))
}

#[test]
fn default_to_minimum_is_the_contract_for_bad_numbers() {
    // Older numeric arguments rely on receiving the floor rather than an
    // error; the try variant is the one that reports absence.
    let mut defaulting = cursor(&["abc"]);
    assert_eq!(defaulting.next_int(0, 4), 0);

    let mut trying = cursor(&["abc"]);
    assert_eq!(trying.try_next_int(0, 4), None);
}

#[test]
fn zero_is_distinguishable_from_absence() {
    let mut args = cursor(&["0"]);
    assert_eq!(args.try_next_int(0, 4), Some(0));
}

#[test]
fn clamping_is_applied_on_success() {
    assert_eq!(cursor(&["99"]).next_int(0, 4), 4);
    assert_eq!(cursor(&["99"]).try_next_int(0, 4), Some(4));
}

#[test]
fn trait_resolution_spans_quoted_names() {
    let traits: Catalog<TraitEntry> =
        [TraitEntry::new("Too Smart", 250, 125)].into_iter().collect();

    // the tokenizer produced one token for the quoted name
    let mut args = cursor(&["too smart"]);

    assert!(args.next_trait(&traits).is_some());
}

#[test]
fn species_and_definitions_resolve_independently() {
    let species: Catalog<SpeciesEntry> =
        [SpeciesEntry::new("Husky", "Husky_Kind", 250)].into_iter().collect();
    let defs: Catalog<Definition> = [Definition::new("Melee", "melee")].into_iter().collect();

    let mut args = cursor(&["husky", "melee"]);

    assert!(args.next_species(&species).is_some());
    assert!(args.next_def(&defs, &Settings::default()).is_some());
}

#[test]
fn definition_abbreviations_follow_the_match_discipline() {
    let defs: Catalog<Definition> = [
        Definition::new("ResearchProject_Electricity", "electricity"),
    ]
    .into_iter()
    .collect();

    let mut args = cursor(&["elec"]);
    assert!(args.next_def(&defs, &Settings::default()).is_none());

    let prefix = Settings {
        match_mode: MatchMode::Prefix,
        ..Settings::default()
    };
    let mut args = cursor(&["elec"]);
    assert_eq!(
        args.next_def(&defs, &prefix).map(|d| d.label.as_str()),
        Some("electricity")
    );
}

#[test]
fn failed_lookup_reports_exactly_what_was_typed() {
    let defs: Catalog<Definition> = Catalog::new();
    let mut args = cursor(&["Sh\u{2019}ooting"]);
    let mut reported = String::new();

    args.next_def_or_report(&defs, &Settings::default(), |token| {
        reported = token.to_string();
    });

    // verbatim, including the curly quote the chat client substituted
    assert_eq!(reported, "Sh\u{2019}ooting");
}

#[test]
fn command_argument_resolution() {
    let registry: CommandRegistry = [CommandDef::new("buy"), CommandDef::new("balance")]
        .into_iter()
        .collect();
    let settings = Settings::default();

    let mut args = cursor(&["balance"]);
    assert_eq!(
        args.next_command(&registry, &settings).map(|c| c.key.as_str()),
        Some("balance")
    );
}

#[test]
fn viewer_resolution_with_and_without_mention() {
    let viewers: ViewerDirectory = [Viewer::new("SirPuppers")].into_iter().collect();

    assert!(cursor(&["@SirPuppers"]).next_viewer(&viewers).is_some());
    assert!(cursor(&["sirpuppers"]).next_viewer(&viewers).is_some());
    assert!(cursor(&["@@sirpuppers"]).next_viewer(&viewers).is_none());
}

#[test]
fn bulk_items_resolve_until_first_failure() {
    let items: Catalog<ItemEntry> = [
        ItemEntry::new("Wood", "WoodLog", 3),
        ItemEntry::new("Steel", "Steel", 5),
    ]
    .into_iter()
    .collect();
    let settings = Settings::default();

    let mut args = cursor(&["wood", "steel", "ghost", "wood"]);
    let mut reported = String::new();

    let resolved = args.all_items_or_report(&items, &settings, |token| {
        reported = token.to_string();
    });

    assert_eq!(resolved.len(), 2);
    assert_eq!(reported, "ghost");
    // the token after the failure is untouched
    assert!(args.has_next());
}

#[test]
fn bulk_resolution_on_empty_cursor_is_empty() {
    let items: Catalog<ItemEntry> = Catalog::new();
    let settings = Settings::default();

    let resolved = cursor(&[]).all_items(&items, &settings);

    assert!(resolved.is_empty());
}
