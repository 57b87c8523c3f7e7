//! Forward-only typed argument reader.
//!
//! An [`ArgCursor`] wraps the tokens left over after command routing and
//! hosts the family of "resolve next as X" operations handlers compose.
//! Every resolver follows the same shape: dequeue one token, attempt the
//! typed conversion, and either succeed or report through an explicit
//! negative result. New argument kinds slot in without touching the
//! cursor's internals, and no resolver ever throws on viewer input.
//!
//! The token a resolver failed on is kept verbatim (as the viewer typed
//! it) and handed to `_or_report` callbacks, so replies can quote the
//! exact offending text.

use std::collections::VecDeque;

use crier_catalog::{
    Catalog, CommandDef, CommandRegistry, Definition, ItemEntry, Keyed, SpeciesEntry, TraitEntry,
    Viewer, ViewerDirectory,
};
use crier_foundation::{MatchMode, Settings, fold};

use crate::selector::ItemSelector;
use crate::tokenizer::split_args;

/// A pop-front reader over the argument tokens of one command invocation.
#[derive(Clone, Debug, Default)]
pub struct ArgCursor {
    remaining: VecDeque<String>,
    last: Option<String>,
}

impl ArgCursor {
    /// Wraps an already-tokenized argument sequence.
    #[must_use]
    pub fn new(tokens: impl IntoIterator<Item = String>) -> Self {
        Self {
            remaining: tokens.into_iter().collect(),
            last: None,
        }
    }

    /// Tokenizes a raw argument string (quote-aware) and wraps it.
    #[must_use]
    pub fn from_input(input: &str) -> Self {
        Self::new(split_args(input))
    }

    /// Pops the next token, if any.
    pub fn next(&mut self) -> Option<String> {
        let next = self.remaining.pop_front()?;
        self.last = Some(next.clone());

        Some(next)
    }

    /// Whether another token remains.
    #[must_use]
    pub fn has_next(&self) -> bool {
        !self.remaining.is_empty()
    }

    /// The most recently dequeued token, as the viewer typed it.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }

    // =========================================================================
    // Integers
    // =========================================================================

    /// Parses the next token as a base-10 integer clamped into
    /// `[min, max]`.
    ///
    /// A missing or unparseable token yields `min`. The default-to-floor
    /// on parse failure is a deliberate compatibility behavior older
    /// numeric arguments rely on; use [`ArgCursor::try_next_int`] to
    /// distinguish "no number supplied" from a real value.
    pub fn next_int(&mut self, min: i32, max: i32) -> i32 {
        self.try_next_int(min, max).unwrap_or(min)
    }

    /// Parses the next token as a base-10 integer clamped into
    /// `[min, max]`, reporting parse failure explicitly.
    pub fn try_next_int(&mut self, min: i32, max: i32) -> Option<i32> {
        let next = self.next()?;

        next.parse::<i32>().ok().map(|value| value.clamp(min, max))
    }

    // =========================================================================
    // Catalog lookups
    // =========================================================================

    /// Resolves the next token against the trait catalog.
    pub fn next_trait<'c>(&mut self, traits: &'c Catalog<TraitEntry>) -> Option<&'c TraitEntry> {
        let next = self.next()?;

        traits.lookup(&next)
    }

    /// Resolves the next token against the trait catalog, reporting the
    /// raw token on failure.
    pub fn next_trait_or_report<'c>(
        &mut self,
        traits: &'c Catalog<TraitEntry>,
        report: impl FnOnce(&str),
    ) -> Option<&'c TraitEntry> {
        match self.next_trait(traits) {
            Some(entry) => Some(entry),
            None => {
                self.report_last(report);

                None
            }
        }
    }

    /// Resolves the next token against the species catalog.
    pub fn next_species<'c>(
        &mut self,
        species: &'c Catalog<SpeciesEntry>,
    ) -> Option<&'c SpeciesEntry> {
        let next = self.next()?;

        species.lookup(&next)
    }

    /// Resolves the next token against the species catalog, reporting the
    /// raw token on failure.
    pub fn next_species_or_report<'c>(
        &mut self,
        species: &'c Catalog<SpeciesEntry>,
        report: impl FnOnce(&str),
    ) -> Option<&'c SpeciesEntry> {
        match self.next_species(species) {
            Some(entry) => Some(entry),
            None => {
                self.report_last(report);

                None
            }
        }
    }

    /// Resolves the next token against a keyed definition catalog
    /// (skills, research, stats, capacities).
    ///
    /// Under [`MatchMode::Prefix`] a typed abbreviation matches the first
    /// definition with a label or name it is a prefix of, same as command
    /// keys.
    pub fn next_def<'c>(
        &mut self,
        defs: &'c Catalog<Definition>,
        settings: &Settings,
    ) -> Option<&'c Definition> {
        let next = self.next()?;

        if let Some(def) = defs.lookup(&next) {
            return Some(def);
        }

        if settings.match_mode == MatchMode::Prefix {
            let folded = fold(&next);

            if !folded.is_empty() {
                return defs.iter().find(|def| {
                    def.lookup_keys()
                        .iter()
                        .any(|key| fold(key).starts_with(&folded))
                });
            }
        }

        None
    }

    /// Resolves the next token against a keyed definition catalog,
    /// reporting the raw token on failure.
    pub fn next_def_or_report<'c>(
        &mut self,
        defs: &'c Catalog<Definition>,
        settings: &Settings,
        report: impl FnOnce(&str),
    ) -> Option<&'c Definition> {
        match self.next_def(defs, settings) {
            Some(def) => Some(def),
            None => {
                self.report_last(report);

                None
            }
        }
    }

    /// Resolves the next token as a registered command key.
    ///
    /// Under [`MatchMode::Prefix`] a typed abbreviation matches any
    /// command key it is a prefix of, so `!help bal` can find `balance`.
    pub fn next_command<'c>(
        &mut self,
        registry: &'c CommandRegistry,
        settings: &Settings,
    ) -> Option<&'c CommandDef> {
        let next = self.next()?;
        let folded = fold(&next);

        registry.iter().find(|command| match settings.match_mode {
            MatchMode::Prefix => fold(&command.key).starts_with(&folded),
            MatchMode::Exact => fold(&command.key) == folded,
        })
    }

    /// Resolves the next token as a registered command key, reporting the
    /// raw token on failure.
    pub fn next_command_or_report<'c>(
        &mut self,
        registry: &'c CommandRegistry,
        settings: &Settings,
        report: impl FnOnce(&str),
    ) -> Option<&'c CommandDef> {
        match self.next_command(registry, settings) {
            Some(command) => Some(command),
            None => {
                self.report_last(report);

                None
            }
        }
    }

    /// Resolves the next token as a viewer username. A single leading `@`
    /// mention marker is stripped before lookup.
    pub fn next_viewer<'c>(&mut self, viewers: &'c ViewerDirectory) -> Option<&'c Viewer> {
        let next = self.next()?;
        let username = next.strip_prefix('@').unwrap_or(&next);

        viewers.find(username)
    }

    /// Resolves the next token as a viewer username, reporting the raw
    /// token on failure.
    pub fn next_viewer_or_report<'c>(
        &mut self,
        viewers: &'c ViewerDirectory,
        report: impl FnOnce(&str),
    ) -> Option<&'c Viewer> {
        match self.next_viewer(viewers) {
            Some(viewer) => Some(viewer),
            None => {
                self.report_last(report);

                None
            }
        }
    }

    // =========================================================================
    // Item selectors
    // =========================================================================

    /// Resolves the next token as an item selector.
    ///
    /// A token carrying a bracket pair goes through the metadata
    /// sub-parser; anything else becomes a bare selector whose base entry
    /// may or may not have resolved. `None` only means the cursor was
    /// empty — an unknown item name is reported through the selector's
    /// own validity queries.
    pub fn next_item(
        &mut self,
        items: &Catalog<ItemEntry>,
        settings: &Settings,
    ) -> Option<ItemSelector> {
        let next = self.next()?;

        if next.contains('[') && next.contains(']') {
            return Some(ItemSelector::parse(&next, items, settings));
        }

        Some(match items.lookup(&next) {
            Some(entry) => ItemSelector::of(entry.clone()),
            None => ItemSelector::default(),
        })
    }

    /// Resolves the next token as an item selector, reporting the raw
    /// token when the base entry did not resolve.
    pub fn next_item_or_report(
        &mut self,
        items: &Catalog<ItemEntry>,
        settings: &Settings,
        report: impl FnOnce(&str),
    ) -> Option<ItemSelector> {
        match self.next_item(items, settings) {
            Some(selector) if selector.entry.is_some() => Some(selector),
            _ => {
                self.report_last(report);

                None
            }
        }
    }

    // =========================================================================
    // Bulk resolution
    // =========================================================================

    /// Resolves every remaining token as a trait, stopping at the first
    /// token that is not one.
    pub fn all_traits<'c>(&mut self, traits: &'c Catalog<TraitEntry>) -> Vec<&'c TraitEntry> {
        let mut resolved = Vec::new();

        while self.has_next() {
            match self.next_trait(traits) {
                Some(entry) => resolved.push(entry),
                None => break,
            }
        }

        resolved
    }

    /// Resolves every remaining token as a trait, reporting the first
    /// token that is not one and stopping there.
    pub fn all_traits_or_report<'c>(
        &mut self,
        traits: &'c Catalog<TraitEntry>,
        report: impl FnOnce(&str),
    ) -> Vec<&'c TraitEntry> {
        let mut resolved = Vec::new();

        while self.has_next() {
            match self.next_trait(traits) {
                Some(entry) => resolved.push(entry),
                None => {
                    self.report_last(report);

                    break;
                }
            }
        }

        resolved
    }

    /// Resolves every remaining token as an item selector, stopping at
    /// the first token whose base entry does not resolve.
    pub fn all_items(
        &mut self,
        items: &Catalog<ItemEntry>,
        settings: &Settings,
    ) -> Vec<ItemSelector> {
        let mut resolved = Vec::new();

        while self.has_next() {
            match self.next_item(items, settings) {
                Some(selector) if selector.entry.is_some() => resolved.push(selector),
                _ => break,
            }
        }

        resolved
    }

    /// Resolves every remaining token as an item selector, reporting the
    /// first token whose base entry does not resolve and stopping there.
    pub fn all_items_or_report(
        &mut self,
        items: &Catalog<ItemEntry>,
        settings: &Settings,
        report: impl FnOnce(&str),
    ) -> Vec<ItemSelector> {
        let mut resolved = Vec::new();

        while self.has_next() {
            match self.next_item(items, settings) {
                Some(selector) if selector.entry.is_some() => resolved.push(selector),
                _ => {
                    self.report_last(report);

                    break;
                }
            }
        }

        resolved
    }

    /// Invokes an error callback with the last dequeued token.
    fn report_last(&self, report: impl FnOnce(&str)) {
        if let Some(last) = self.last.as_deref() {
            report(last);
        }
    }
}
