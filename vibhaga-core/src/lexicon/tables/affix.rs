//! Affix lists and greedy longest-match stripping
//!
//! Affixes are kept in descending character length. Equal-length affixes keep
//! their source order, so the first qualifying entry in that order wins.

use std::collections::HashSet;

/// Minimum number of characters a stripped remainder must exceed
const MIN_REMAINDER_CHARS: usize = 1;

/// Ordered list of prefixes or suffixes
#[derive(Debug, Clone, Default)]
pub struct AffixList {
    /// Affixes, longest first
    ordered: Vec<String>,
    /// Membership index over the same entries
    members: HashSet<String>,
}

impl AffixList {
    /// Build from affixes in source order
    ///
    /// Empty strings are dropped. The sort is stable, so ties keep the order
    /// they were given in.
    pub fn new(affixes: Vec<String>) -> Self {
        let before = affixes.len();
        let mut ordered: Vec<String> = affixes.into_iter().filter(|a| !a.is_empty()).collect();
        if ordered.len() != before {
            log::warn!(
                "Dropped {} empty affix entr{}",
                before - ordered.len(),
                if before - ordered.len() == 1 { "y" } else { "ies" }
            );
        }

        ordered.sort_by(|a, b| char_len(b).cmp(&char_len(a)));
        let members = ordered.iter().cloned().collect();

        Self { ordered, members }
    }

    /// Affixes in matching order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    /// Whether the exact string is one of the affixes
    pub fn contains(&self, affix: &str) -> bool {
        self.members.contains(affix)
    }

    /// Number of affixes
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Whether the list has no affixes
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Strip the first listed suffix that leaves more than one character
    ///
    /// Returns `(remainder, suffix)`.
    pub fn strip_suffix<'w>(&self, word: &'w str) -> Option<(&'w str, &str)> {
        self.iter().find_map(|suffix| {
            word.strip_suffix(suffix)
                .filter(|remainder| char_len(remainder) > MIN_REMAINDER_CHARS)
                .map(|remainder| (remainder, suffix))
        })
    }

    /// Strip the first listed prefix that leaves more than one character
    ///
    /// Returns `(prefix, remainder)`.
    pub fn strip_prefix<'w>(&self, word: &'w str) -> Option<(&str, &'w str)> {
        self.iter().find_map(|prefix| {
            word.strip_prefix(prefix)
                .filter(|remainder| char_len(remainder) > MIN_REMAINDER_CHARS)
                .map(|remainder| (prefix, remainder))
        })
    }
}

/// Length in Unicode scalar values
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}
