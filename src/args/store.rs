//! Parsed argument store — key → entry, queried after parsing.

use std::collections::{HashMap, HashSet};

use crate::args::kind::{ArgumentKind, Entry};

/// Parsed command-line arguments.
///
/// Keys are unique and case-sensitive; adding an existing key replaces its
/// entry. Iteration follows first-insertion order, so an overwritten key
/// stays where it was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    entries: HashMap<String, Entry>,
    order: Vec<String>,
}

impl ParsedArgs {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or overwrite) a flag.
    pub fn add_flag(&mut self, key: impl Into<String>) -> &mut Self {
        self.insert(key.into(), Entry::Flag);
        self
    }

    /// Add (or overwrite) a single-character flag.
    pub fn add_char(&mut self, key: char) -> &mut Self {
        self.add_flag(key)
    }

    /// Add (or overwrite) a key with a value.
    pub fn add_pair(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.insert(key.into(), Entry::Pair(value.into()));
        self
    }

    fn insert(&mut self, key: String, entry: Entry) {
        if !self.entries.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.entries.insert(key, entry);
    }

    /// Value of a pair.
    ///
    /// Returns `None` both for missing keys and for flags; use [`kind_of`]
    /// or [`exists`] to tell the two apart.
    ///
    /// [`kind_of`]: ParsedArgs::kind_of
    /// [`exists`]: ParsedArgs::exists
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Entry::value)
    }

    /// Value of a pair, or `default` when there is none.
    pub fn get_or_default<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn entry(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    pub fn kind_of(&self, key: &str) -> ArgumentKind {
        self.entries
            .get(key)
            .map_or(ArgumentKind::None, Entry::kind)
    }

    /// Kind of `key`, falling back to `alt_key` when `key` is absent.
    pub fn kind_of_or(&self, key: &str, alt_key: &str) -> ArgumentKind {
        match self.kind_of(key) {
            ArgumentKind::None => self.kind_of(alt_key),
            kind => kind,
        }
    }

    pub fn exists(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// True when either `key` or `alt_key` is present.
    pub fn exists_any(&self, key: &str, alt_key: &str) -> bool {
        self.exists(key) || self.exists(alt_key)
    }

    /// Snapshot of all stored keys. No order is implied.
    pub fn keys(&self) -> HashSet<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.order
            .iter()
            .filter_map(|key| self.entries.get(key).map(|entry| (key.as_str(), entry)))
    }
}
