//! Analysis orchestrator
//!
//! Ties the lexicon, the sandhi resolver, affix stripping, the reduplication
//! test and the optional statistical engines into one priority cascade.
//! Exactly one branch is taken per word:
//!
//! 1. known word
//! 2. sandhi decomposition
//! 3. suffix, then prefix on the remainder
//! 4. prefix only
//! 5. known root
//! 6. reduplication
//! 7. statistical split (when enabled), else the word itself as a root

use std::sync::Arc;

use crate::engines::{Segmenter, Segmenters};
use crate::error::{Error, Result};
use crate::lexicon::Lexicon;
use crate::reduplication::is_reduplication;
use crate::segment::{Analysis, Role, Segment, Token, WordAnalysis};
use crate::tokenizer::{has_delimiter, tokenize, Piece};

/// Default bound on nested sandhi expansions
pub const DEFAULT_MAX_SANDHI_DEPTH: usize = 32;

/// Analyzer settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Consult statistical engines before the literal fallback
    pub statistical_fallback: bool,
    /// Maximum number of sandhi entries expanded inside one another
    pub max_sandhi_depth: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            statistical_fallback: false,
            max_sandhi_depth: DEFAULT_MAX_SANDHI_DEPTH,
        }
    }
}

/// Morphological analyzer over one lexicon
#[derive(Debug)]
pub struct Analyzer {
    lexicon: Arc<Lexicon>,
    segmenters: Segmenters,
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Analyzer with default settings and no statistical engines
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            segmenters: Segmenters::new(),
            config: AnalyzerConfig::default(),
        }
    }

    /// Start configuring an analyzer
    pub fn builder(lexicon: Arc<Lexicon>) -> AnalyzerBuilder {
        AnalyzerBuilder::new(lexicon)
    }

    /// The lexicon in use
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Current settings
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Loaded statistical engines
    pub fn segmenters(&self) -> &Segmenters {
        &self.segmenters
    }

    /// Analyse free text
    ///
    /// Sentence mode applies when `sentence` is set or the text contains a
    /// space, period or comma. Delimiters are kept in place; every other
    /// token is analysed as a single word.
    pub fn analyze(&self, text: &str, sentence: bool) -> Analysis {
        if !(sentence || has_delimiter(text)) {
            return Analysis::word(text.trim(), self.analyze_word(text));
        }

        let tokens = tokenize(text)
            .into_iter()
            .map(|piece| match piece {
                Piece::Word(word) => Token::Word {
                    surface: word.to_string(),
                    segments: self.analyze_word(word),
                },
                Piece::Delimiter(delimiter) => Token::Delimiter { text: delimiter },
            })
            .collect();

        Analysis::new(tokens)
    }

    /// Analyse text in sentence mode
    pub fn analyze_sentence(&self, text: &str) -> Analysis {
        self.analyze(text, true)
    }

    /// Analyse one word; never re-tokenizes
    ///
    /// Surrounding whitespace is trimmed. A blank word yields no segments.
    pub fn analyze_word(&self, word: &str) -> WordAnalysis {
        self.cascade(word, &mut Vec::new())
    }

    /// Sandhi decomposition of `word`, if the table has an applicable entry
    pub fn apply_sandhi(&self, word: &str) -> Option<WordAnalysis> {
        let components = self.lexicon.sandhi().lookup(word)?;
        Some(self.expand_sandhi(word, components, &mut Vec::new()))
    }

    fn cascade(&self, word: &str, expanding: &mut Vec<String>) -> WordAnalysis {
        let word = word.trim();
        if word.is_empty() {
            return WordAnalysis::new();
        }

        let lexicon = &*self.lexicon;

        if lexicon.is_known_word(word) {
            log::trace!("{word}: known word");
            return WordAnalysis::single(Segment::root(word));
        }

        if let Some(components) = lexicon.sandhi().lookup(word) {
            log::trace!("{word}: sandhi {}", components.join(" + "));
            return self.expand_sandhi(word, components, expanding);
        }

        if let Some((remainder, suffix)) = lexicon.extract_suffix(word) {
            return match lexicon.extract_prefix(remainder) {
                Some((prefix, root)) => {
                    log::trace!("{word}: prefix {prefix}, suffix {suffix}");
                    [
                        Segment::prefix(prefix),
                        Segment::root(root),
                        Segment::suffix(suffix),
                    ]
                    .into_iter()
                    .collect()
                }
                None => {
                    log::trace!("{word}: suffix {suffix}");
                    [Segment::root(remainder), Segment::suffix(suffix)]
                        .into_iter()
                        .collect()
                }
            };
        }

        if let Some((prefix, root)) = lexicon.extract_prefix(word) {
            log::trace!("{word}: prefix {prefix}");
            return [Segment::prefix(prefix), Segment::root(root)]
                .into_iter()
                .collect();
        }

        if lexicon.is_root(word) {
            log::trace!("{word}: known root");
            return WordAnalysis::single(Segment::root(word));
        }

        if is_reduplication(word) {
            log::trace!("{word}: reduplication");
            return WordAnalysis::single(Segment::new(word, Role::Reduplication));
        }

        self.fallback(word)
    }

    fn expand_sandhi(
        &self,
        word: &str,
        components: &[String],
        expanding: &mut Vec<String>,
    ) -> WordAnalysis {
        if expanding.iter().any(|key| key == word) {
            log::warn!(
                "Sandhi entry '{word}' expands into itself via {}; kept as a root",
                expanding.join(" -> ")
            );
            return WordAnalysis::single(Segment::root(word));
        }
        if expanding.len() >= self.config.max_sandhi_depth {
            log::warn!(
                "Sandhi expansion of '{word}' exceeds depth {}; kept as a root",
                self.config.max_sandhi_depth
            );
            return WordAnalysis::single(Segment::root(word));
        }

        expanding.push(word.to_string());

        let last = components.len().saturating_sub(1);
        let mut analysis = WordAnalysis::new();
        for (i, component) in components.iter().enumerate() {
            if i == last && self.lexicon.suffixes().contains(component) {
                analysis.push(Segment::suffix(component.as_str()));
            } else if self.lexicon.is_root(component) {
                analysis.push(Segment::root(component.as_str()));
            } else {
                analysis.append(self.cascade(component, expanding));
            }
        }

        expanding.pop();
        analysis
    }

    fn fallback(&self, word: &str) -> WordAnalysis {
        if self.config.statistical_fallback {
            if let Some(pieces) = self.segmenters.segment(word) {
                log::trace!("{word}: statistical split {}", pieces.join(" + "));
                return self.label_pieces(pieces);
            }
        }

        log::trace!("{word}: literal");
        WordAnalysis::single(Segment::root(word))
    }

    fn label_pieces(&self, pieces: Vec<String>) -> WordAnalysis {
        let last = pieces.len().saturating_sub(1);
        pieces
            .into_iter()
            .enumerate()
            .map(|(i, piece)| {
                let role = if i == 0 && self.lexicon.prefixes().contains(&piece) {
                    Role::Prefix
                } else if i == last && self.lexicon.suffixes().contains(&piece) {
                    Role::Suffix
                } else {
                    Role::Root
                };
                Segment::new(piece, role)
            })
            .collect()
    }
}

/// Builder for [`Analyzer`]
#[derive(Debug)]
pub struct AnalyzerBuilder {
    lexicon: Arc<Lexicon>,
    segmenters: Option<Segmenters>,
    config: AnalyzerConfig,
}

impl AnalyzerBuilder {
    /// Start from default settings
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            segmenters: None,
            config: AnalyzerConfig::default(),
        }
    }

    /// Enable or disable the statistical fallback stage
    pub fn statistical_fallback(mut self, enabled: bool) -> Self {
        self.config.statistical_fallback = enabled;
        self
    }

    /// Bound nested sandhi expansion
    pub fn max_sandhi_depth(mut self, depth: usize) -> Self {
        self.config.max_sandhi_depth = depth;
        self
    }

    /// Use these engines instead of the lexicon's declared models
    pub fn segmenters(mut self, segmenters: Segmenters) -> Self {
        self.segmenters = Some(segmenters);
        self
    }

    /// Add one engine
    pub fn segmenter(mut self, segmenter: Box<dyn Segmenter>) -> Self {
        self.segmenters
            .get_or_insert_with(Segmenters::new)
            .push(segmenter);
        self
    }

    /// Build the analyzer
    ///
    /// With the fallback enabled and no engines given, the models declared
    /// by the lexicon are loaded.
    pub fn build(self) -> Result<Analyzer> {
        if self.config.max_sandhi_depth == 0 {
            return Err(Error::Configuration(
                "max_sandhi_depth must be greater than 0".into(),
            ));
        }

        let segmenters = match self.segmenters {
            Some(segmenters) => segmenters,
            None if self.config.statistical_fallback => {
                Segmenters::from_models(self.lexicon.models())
            }
            None => Segmenters::new(),
        };

        if self.config.statistical_fallback && segmenters.is_empty() {
            log::warn!("Statistical fallback enabled but no engine is loaded");
        }

        Ok(Analyzer {
            lexicon: self.lexicon,
            segmenters,
            config: self.config,
        })
    }
}
