//! Labeled analysis results
//!
//! A word analyses into a flat run of [`Segment`]s; a sentence analyses into
//! a run of [`Token`]s, each either an analysed word or a delimiter copied
//! verbatim. `Display` renders the textual output format:
//! `un_Prefix + play_Root + ed_Suffix` for words, delimiters reinserted as-is.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Separator placed between segments of one word
pub const SEGMENT_SEPARATOR: &str = " + ";

/// Role of a segment within a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Core lexical unit
    Root,
    /// Bound morpheme stripped from the front
    Prefix,
    /// Bound morpheme stripped from the back
    Suffix,
    /// Word formed by exact doubling of a stem
    Reduplication,
}

impl Role {
    /// Label used in the rendered output
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Root => "Root",
            Role::Prefix => "Prefix",
            Role::Suffix => "Suffix",
            Role::Reduplication => "Reduplication",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A piece of a word with its role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Surface text of the piece
    pub text: String,
    /// Role assigned by the analyzer
    pub role: Role,
}

impl Segment {
    /// Create a segment
    pub fn new(text: impl Into<String>, role: Role) -> Self {
        Self {
            text: text.into(),
            role,
        }
    }

    /// Root-labelled segment
    pub fn root(text: impl Into<String>) -> Self {
        Self::new(text, Role::Root)
    }

    /// Prefix-labelled segment
    pub fn prefix(text: impl Into<String>) -> Self {
        Self::new(text, Role::Prefix)
    }

    /// Suffix-labelled segment
    pub fn suffix(text: impl Into<String>) -> Self {
        Self::new(text, Role::Suffix)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.text, self.role)
    }
}

/// Ordered segments of a single word
///
/// Nested sandhi expansions are flattened into one run, which renders the
/// same as joining already-joined sub-results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordAnalysis {
    segments: SmallVec<[Segment; 4]>,
}

impl WordAnalysis {
    /// Empty analysis (renders as the empty string)
    pub fn new() -> Self {
        Self::default()
    }

    /// Analysis consisting of one segment
    pub fn single(segment: Segment) -> Self {
        let mut analysis = Self::new();
        analysis.push(segment);
        analysis
    }

    /// Append a segment
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Append every segment of another analysis
    pub fn append(&mut self, other: WordAnalysis) {
        self.segments.extend(other.segments);
    }

    /// Segments in order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether no segment was produced
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl FromIterator<Segment> for WordAnalysis {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for WordAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(SEGMENT_SEPARATOR)?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// One element of a sentence analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Token {
    /// An analysed word
    Word {
        /// Token text as it appeared in the input
        surface: String,
        /// Labeled segments
        segments: WordAnalysis,
    },
    /// A delimiter copied through unchanged
    Delimiter {
        /// The delimiter character
        text: char,
    },
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word { segments, .. } => write!(f, "{segments}"),
            Token::Delimiter { text } => write!(f, "{text}"),
        }
    }
}

/// Ordered analysis of a whole input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Analysis {
    tokens: Vec<Token>,
}

impl Analysis {
    /// Build from tokens
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Analysis of a single word, outside sentence mode
    pub fn word(surface: impl Into<String>, segments: WordAnalysis) -> Self {
        Self::new(vec![Token::Word {
            surface: surface.into(),
            segments,
        }])
    }

    /// Tokens in input order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Word analyses, skipping delimiters
    pub fn words(&self) -> impl Iterator<Item = &WordAnalysis> {
        self.tokens.iter().filter_map(|token| match token {
            Token::Word { segments, .. } => Some(segments),
            Token::Delimiter { .. } => None,
        })
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
