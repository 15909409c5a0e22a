//! Runtime lexicon
//!
//! This module provides the immutable lexical resource store that bridges
//! configuration and the analyzer's lookups.

use std::collections::{HashMap, HashSet};

use crate::lexicon::{
    config::{LexiconConfig, Models},
    tables::{AffixList, SandhiTable},
};

/// Immutable lexical resources for one language
///
/// Built once and shared read-only by every analysis.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    code: String,
    name: String,
    prefixes: AffixList,
    suffixes: AffixList,
    sandhi: SandhiTable,
    roots: HashSet<String>,
    known_words: HashSet<String>,
    models: Models,
}

impl Lexicon {
    /// Start building a lexicon in memory
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    /// Create from configuration
    ///
    /// Uses the inline tables only; resource files are merged by the loader
    /// before this is called.
    pub fn from_config(config: &LexiconConfig) -> Result<Self, String> {
        config.validate()?;

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            prefixes: AffixList::new(config.affixes.prefixes.clone()),
            suffixes: AffixList::new(config.affixes.suffixes.clone()),
            sandhi: SandhiTable::new(config.sandhi.clone()),
            roots: config.roots.known.iter().cloned().collect(),
            known_words: config.roots.words.iter().cloned().collect(),
            models: config.models.clone(),
        })
    }

    /// Lexicon code, e.g. `te`
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable language name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Prefix list, longest first
    pub fn prefixes(&self) -> &AffixList {
        &self.prefixes
    }

    /// Suffix list, longest first
    pub fn suffixes(&self) -> &AffixList {
        &self.suffixes
    }

    /// Sandhi table
    pub fn sandhi(&self) -> &SandhiTable {
        &self.sandhi
    }

    /// Model artifact paths declared by the manifest
    pub fn models(&self) -> &Models {
        &self.models
    }

    /// Number of known roots
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// Number of known whole words
    pub fn known_word_count(&self) -> usize {
        self.known_words.len()
    }

    /// `(remainder, suffix)` for the first qualifying suffix
    pub fn extract_suffix<'w>(&self, word: &'w str) -> Option<(&'w str, &str)> {
        self.suffixes.strip_suffix(word)
    }

    /// `(prefix, remainder)` for the first qualifying prefix
    pub fn extract_prefix<'w>(&self, word: &'w str) -> Option<(&str, &'w str)> {
        self.prefixes.strip_prefix(word)
    }

    /// Whether `word` is in the known-word set
    pub fn is_known_word(&self, word: &str) -> bool {
        self.known_words.contains(word)
    }

    /// Whether `word` is a known root or a known word
    pub fn is_root(&self, word: &str) -> bool {
        self.roots.contains(word) || self.known_words.contains(word)
    }

    /// Sandhi keys whose expansion can reach themselves again
    ///
    /// A component leads back into the table unless it is labelled directly:
    /// a trailing suffix, or a known root or word. Returned keys are sorted.
    pub fn sandhi_cycles(&self) -> Vec<String> {
        let keys = self.sandhi.keys();
        let index_of: HashMap<&str, usize> =
            keys.iter().enumerate().map(|(i, key)| (*key, i)).collect();

        let graph: Vec<Vec<usize>> = keys
            .iter()
            .map(|key| {
                self.expansion_targets(key)
                    .filter_map(|component| index_of.get(component).copied())
                    .collect()
            })
            .collect();

        let mut cyclic: Vec<String> = Tarjan::components(&graph)
            .into_iter()
            .filter(|scc| scc.len() > 1 || graph[scc[0]].contains(&scc[0]))
            .flatten()
            .map(|i| keys[i].to_string())
            .collect();
        cyclic.sort();
        cyclic
    }

    /// Drop every cyclic sandhi entry, returning the removed keys
    pub(crate) fn remove_sandhi_cycles(&mut self) -> Vec<String> {
        let cyclic = self.sandhi_cycles();
        for key in &cyclic {
            self.sandhi.remove(key);
        }
        cyclic
    }

    /// Components of `key` that would be analysed recursively
    fn expansion_targets<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let components = self.sandhi.lookup(key).unwrap_or(&[]);
        let last = components.len().saturating_sub(1);
        components
            .iter()
            .enumerate()
            .filter(move |(i, component)| {
                !(*i == last && self.suffixes.contains(component)) && !self.is_root(component)
            })
            .map(|(_, component)| component.as_str())
    }
}

/// Builder for in-memory lexicons
#[derive(Debug, Default)]
pub struct LexiconBuilder {
    code: Option<String>,
    name: Option<String>,
    prefixes: Vec<String>,
    suffixes: Vec<String>,
    sandhi: HashMap<String, Vec<String>>,
    roots: HashSet<String>,
    known_words: HashSet<String>,
    models: Models,
}

impl LexiconBuilder {
    /// Set the lexicon code
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set the language name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add prefixes in source order
    pub fn prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefixes.extend(prefixes.into_iter().map(Into::into));
        self
    }

    /// Add suffixes in source order
    pub fn suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suffixes.extend(suffixes.into_iter().map(Into::into));
        self
    }

    /// Add known roots
    pub fn roots<I, S>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roots.extend(roots.into_iter().map(Into::into));
        self
    }

    /// Add known whole words
    pub fn known_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Add a sandhi entry
    pub fn sandhi<I, S>(mut self, surface: impl Into<String>, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sandhi.insert(
            surface.into(),
            components.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Declare model artifacts
    pub fn models(mut self, models: Models) -> Self {
        self.models = models;
        self
    }

    /// Build the lexicon
    ///
    /// No validation is applied; sandhi cycles are tolerated here and caught
    /// by the analyzer's recursion guard.
    pub fn build(self) -> Lexicon {
        Lexicon {
            code: self.code.unwrap_or_else(|| "custom".to_string()),
            name: self.name.unwrap_or_else(|| "Custom".to_string()),
            prefixes: AffixList::new(self.prefixes),
            suffixes: AffixList::new(self.suffixes),
            sandhi: SandhiTable::new(self.sandhi),
            roots: self.roots,
            known_words: self.known_words,
            models: self.models,
        }
    }
}

/// Strongly connected components (Tarjan)
struct Tarjan<'g> {
    graph: &'g [Vec<usize>],
    index: Vec<Option<usize>>,
    lowlink: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    next_index: usize,
    components: Vec<Vec<usize>>,
}

impl<'g> Tarjan<'g> {
    fn components(graph: &'g [Vec<usize>]) -> Vec<Vec<usize>> {
        let n = graph.len();
        let mut tarjan = Tarjan {
            graph,
            index: vec![None; n],
            lowlink: vec![0; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
            next_index: 0,
            components: Vec::new(),
        };

        for v in 0..n {
            if tarjan.index[v].is_none() {
                tarjan.visit(v);
            }
        }

        tarjan.components
    }

    /// Depth-first search from `root` using an explicit call stack
    fn visit(&mut self, root: usize) {
        let graph = self.graph;
        // (vertex, next edge to follow)
        let mut calls = vec![(root, 0)];
        self.open(root);

        while let Some(&(v, edge)) = calls.last() {
            if let Some(&w) = graph[v].get(edge) {
                let top = calls.len() - 1;
                calls[top].1 += 1;
                match self.index[w] {
                    None => {
                        self.open(w);
                        calls.push((w, 0));
                    }
                    Some(w_index) if self.on_stack[w] => {
                        self.lowlink[v] = self.lowlink[v].min(w_index);
                    }
                    Some(_) => {}
                }
                continue;
            }

            calls.pop();
            if let Some(&(parent, _)) = calls.last() {
                self.lowlink[parent] = self.lowlink[parent].min(self.lowlink[v]);
            }
            self.close(v);
        }
    }

    fn open(&mut self, v: usize) {
        self.index[v] = Some(self.next_index);
        self.lowlink[v] = self.next_index;
        self.next_index += 1;
        self.stack.push(v);
        self.on_stack[v] = true;
    }

    /// Pop the component rooted at `v`, if it is a root
    fn close(&mut self, v: usize) {
        if self.index[v] == Some(self.lowlink[v]) {
            let mut component = Vec::new();
            while let Some(w) = self.stack.pop() {
                self.on_stack[w] = false;
                component.push(w);
                if w == v {
                    break;
                }
            }
            self.components.push(component);
        }
    }
}
