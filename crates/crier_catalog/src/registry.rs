//! Generic catalog lookup.
//!
//! A [`Catalog`] is an ordered collection of entries indexed by every
//! string an entry can be looked up by (name, alias, definition name),
//! folded for case-insensitive comparison. Backed by persistent
//! collections: cloning a catalog is O(1) structural sharing, which is how
//! the host gives each in-flight parse a snapshot-consistent view.

use crier_foundation::fold;

/// An entry that can be looked up by one or more strings.
pub trait Keyed {
    /// The strings this entry answers to, most specific first. The first
    /// entry registered for a given key wins; later collisions are ignored.
    fn lookup_keys(&self) -> Vec<&str>;
}

/// A name/alias indexed registry of catalog entries.
#[derive(Clone, Debug)]
pub struct Catalog<T: Clone> {
    entries: im::Vector<T>,
    index: im::HashMap<String, usize>,
}

impl<T: Keyed + Clone> Catalog<T> {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: im::Vector::new(),
            index: im::HashMap::new(),
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registers an entry under all of its lookup keys.
    pub fn insert(&mut self, entry: T) {
        let slot = self.entries.len();

        for key in entry.lookup_keys() {
            let folded = fold(key);

            if !folded.is_empty() && !self.index.contains_key(&folded) {
                self.index.insert(folded, slot);
            }
        }

        self.entries.push_back(entry);
    }

    /// Resolves a token to an entry, case-insensitively.
    #[must_use]
    pub fn lookup(&self, token: &str) -> Option<&T> {
        self.index
            .get(&fold(token))
            .and_then(|slot| self.entries.get(*slot))
    }

    /// Iterates entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}

impl<T: Keyed + Clone> Default for Catalog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed + Clone> FromIterator<T> for Catalog<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut catalog = Self::new();

        for entry in iter {
            catalog.insert(entry);
        }

        catalog
    }
}
