//! Command routing tests.

use crier_catalog::{CommandDef, CommandRegistry};
use crier_foundation::{MatchMode, Settings};
use crier_parser::{locate, resolve_message, tokenize};

fn registry() -> CommandRegistry {
    [
        CommandDef::new("buy"),
        CommandDef::new("balance"),
        CommandDef::new("pawn"),
        CommandDef::new("pawn work"),
        CommandDef::new("pawn body"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn multi_word_command_wins_over_its_leading_word() {
    let settings = Settings::default();
    let tokens = tokenize("!pawn work 5", &settings).unwrap();

    let registry = registry();
    let (command, rest) = locate(&registry, &tokens, &settings).unwrap();

    assert_eq!(command.key, "pawn work");
    assert_eq!(rest, vec!["5".to_string()]);
}

#[test]
fn leading_word_alone_still_routes() {
    let settings = Settings::default();
    let tokens = tokenize("!pawn", &settings).unwrap();

    let registry = registry();
    let (command, rest) = locate(&registry, &tokens, &settings).unwrap();

    assert_eq!(command.key, "pawn");
    assert!(rest.is_empty());
}

#[test]
fn sibling_multi_word_keys_do_not_collide() {
    let settings = Settings::default();
    let tokens = tokenize("!pawn body heal", &settings).unwrap();

    let registry = registry();
    let (command, rest) = locate(&registry, &tokens, &settings).unwrap();

    assert_eq!(command.key, "pawn body");
    assert_eq!(rest, vec!["heal".to_string()]);
}

#[test]
fn routing_is_case_insensitive() {
    let settings = Settings::default();
    let tokens = tokenize("!BaLaNcE", &settings).unwrap();

    let registry = registry();
    let (command, _) = locate(&registry, &tokens, &settings).unwrap();
    assert_eq!(command.key, "balance");
}

#[test]
fn unknown_command_is_a_quiet_negative() {
    let settings = Settings::default();
    let tokens = tokenize("!dance", &settings).unwrap();

    assert!(locate(&registry(), &tokens, &settings).is_none());
}

#[test]
fn resolve_message_hands_the_handler_a_cursor() {
    let settings = Settings::default();

    let registry = registry();
    let (command, mut args) =
        resolve_message("$thrumbo 2", &registry, &settings).unwrap();

    assert_eq!(command.key, "buy");
    assert_eq!(args.next().as_deref(), Some("thrumbo"));
    assert_eq!(args.next_int(1, 10), 2);
    assert!(!args.has_next());
}

#[test]
fn resolve_message_ignores_ordinary_chat() {
    let settings = Settings::default();

    assert!(resolve_message("pawn work 5", &registry(), &settings).is_none());
}

#[test]
fn prefix_discipline_applies_to_routing() {
    let settings = Settings {
        match_mode: MatchMode::Prefix,
        ..Settings::default()
    };
    let tokens = tokenize("!balance?", &settings).unwrap();

    let registry = registry();
    let (command, _) = locate(&registry, &tokens, &settings).unwrap();
    assert_eq!(command.key, "balance");
}
