//! Command registry tests.

use crier_catalog::{CommandDef, CommandRegistry};

#[test]
fn word_count_comes_from_the_key() {
    assert_eq!(CommandDef::new("buy").word_count(), 1);
    assert_eq!(CommandDef::new("pawn body").word_count(), 2);
    assert_eq!(CommandDef::new("a b c").word_count(), 3);
}

#[test]
fn registry_preserves_declaration_order() {
    let registry: CommandRegistry = ["zeta", "alpha", "mid"]
        .into_iter()
        .map(CommandDef::new)
        .collect();

    let order: Vec<_> = registry.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(order, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn disabling_leaves_the_definition_in_place() {
    let registry: CommandRegistry = [
        CommandDef::new("buy"),
        CommandDef::new("lookup").disabled(),
    ]
    .into_iter()
    .collect();

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.enabled().count(), 1);
}
