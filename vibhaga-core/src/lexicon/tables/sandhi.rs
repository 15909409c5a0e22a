//! Sandhi table: surface word to underlying components

use std::collections::HashMap;

/// Mapping from a fused surface form to its ordered components
///
/// Only entries with two or more components are applicable; shorter entries
/// behave as if absent.
#[derive(Debug, Clone, Default)]
pub struct SandhiTable {
    entries: HashMap<String, Vec<String>>,
}

impl SandhiTable {
    /// Build from raw entries
    pub fn new(entries: HashMap<String, Vec<String>>) -> Self {
        Self { entries }
    }

    /// Components of an applicable entry for `word`
    pub fn lookup(&self, word: &str) -> Option<&[String]> {
        self.entries
            .get(word)
            .filter(|components| components.len() > 1)
            .map(Vec::as_slice)
    }

    /// Apply the table to `word`: its components, or `[word]` when no
    /// applicable entry exists
    pub fn apply<'a>(&'a self, word: &'a str) -> Vec<&'a str> {
        match self.lookup(word) {
            Some(components) => components.iter().map(String::as_str).collect(),
            None => vec![word],
        }
    }

    /// Keys with applicable entries, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .entries
            .iter()
            .filter(|(_, components)| components.len() > 1)
            .map(|(key, _)| key.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }

    /// Remove an entry
    pub(crate) fn remove(&mut self, word: &str) -> Option<Vec<String>> {
        self.entries.remove(word)
    }

    /// Number of applicable entries
    pub fn len(&self) -> usize {
        self.entries.values().filter(|c| c.len() > 1).count()
    }

    /// Whether the table has no applicable entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
