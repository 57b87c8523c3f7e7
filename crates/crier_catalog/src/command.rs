//! Command identities and the routing registry.
//!
//! Commands are registered in declaration order and matched against the
//! leading tokens of a message by the router. The registry preserves that
//! order exactly so routing is reproducible.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A registered command identity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CommandDef {
    /// The command key, possibly multi-word (`"pawn work"`).
    pub key: String,
    /// Whether the command is currently routable.
    pub enabled: bool,
}

impl CommandDef {
    /// Creates an enabled command.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            enabled: true,
        }
    }

    /// Marks the command as disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Number of space-separated words in the key.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.key.split_whitespace().count()
    }
}

/// The ordered, process-wide command registry.
///
/// Read-mostly shared state: clone a snapshot per parse (O(1)); rebuild
/// and swap when command definitions are edited.
#[derive(Clone, Debug, Default)]
pub struct CommandRegistry {
    commands: im::Vector<CommandDef>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a command in declaration order.
    pub fn register(&mut self, command: CommandDef) {
        self.commands.push_back(command);
    }

    /// Number of registered commands, enabled or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterates commands in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandDef> {
        self.commands.iter()
    }

    /// Iterates only enabled commands, in declaration order.
    pub fn enabled(&self) -> impl Iterator<Item = &CommandDef> {
        self.commands.iter().filter(|c| c.enabled)
    }
}

impl FromIterator<CommandDef> for CommandRegistry {
    fn from_iter<I: IntoIterator<Item = CommandDef>>(iter: I) -> Self {
        let mut registry = Self::new();

        for command in iter {
            registry.register(command);
        }

        registry
    }
}
