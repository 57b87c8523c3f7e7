//! Chat viewer directory.
//!
//! Maps usernames to viewer records for character-reference arguments.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crier_foundation::fold;

/// A chat user known to the simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Viewer {
    /// The username as the chat platform reports it.
    pub username: String,
}

impl Viewer {
    /// Creates a viewer record.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Directory of known viewers, indexed by folded username.
#[derive(Clone, Debug, Default)]
pub struct ViewerDirectory {
    viewers: im::Vector<Viewer>,
    index: im::HashMap<String, usize>,
}

impl ViewerDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a viewer. Re-registering a username keeps the original.
    pub fn register(&mut self, viewer: Viewer) {
        let folded = fold(&viewer.username);

        if !self.index.contains_key(&folded) {
            self.index.insert(folded, self.viewers.len());
            self.viewers.push_back(viewer);
        }
    }

    /// Finds a viewer by username, case-insensitively.
    #[must_use]
    pub fn find(&self, username: &str) -> Option<&Viewer> {
        self.index
            .get(&fold(username))
            .and_then(|slot| self.viewers.get(*slot))
    }

    /// Number of known viewers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.viewers.len()
    }

    /// Whether the directory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.viewers.is_empty()
    }
}

impl FromIterator<Viewer> for ViewerDirectory {
    fn from_iter<I: IntoIterator<Item = Viewer>>(iter: I) -> Self {
        let mut directory = Self::new();

        for viewer in iter {
            directory.register(viewer);
        }

        directory
    }
}
