//! Morfessor-style unigram segmenter
//!
//! Loads a Morfessor Baseline segmentation listing, one analysed word per
//! line:
//!
//! ```text
//! # Output from Morfessor Baseline
//! 12 un + play + ed
//! 40 play + ing
//! ```
//!
//! Morph costs are `-ln(count / total)`. Words are split by a Viterbi search
//! over all substrings up to `max_morph_len` characters. A character that is
//! not a known morph can still stand alone at a cost high enough that any
//! known morph is preferred.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::Segmenter;
use crate::error::EngineError;

/// Default upper bound on morph length in characters
pub const DEFAULT_MAX_MORPH_LEN: usize = 30;

const CONSTRUCTION_SEPARATOR: &str = " + ";

/// Viterbi segmenter over a morph lexicon
#[derive(Debug, Clone)]
pub struct MorfessorSegmenter {
    counts: HashMap<String, u64>,
    log_total: f64,
    max_morph_len: usize,
}

impl MorfessorSegmenter {
    /// Load from a segmentation listing on disk
    pub fn from_file(path: &Path) -> Result<Self, EngineError> {
        let text = fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parse a segmentation listing
    pub fn parse(text: &str) -> Result<Self, EngineError> {
        let mut counts: HashMap<String, u64> = HashMap::new();

        for (i, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (count, constructions) =
                line.split_once(char::is_whitespace)
                    .ok_or_else(|| EngineError::Format {
                        line: i + 1,
                        reason: "expected '<count> <morph> + <morph> ...'".to_string(),
                    })?;
            let count: u64 = count.parse().map_err(|_| EngineError::Format {
                line: i + 1,
                reason: format!("invalid count '{count}'"),
            })?;

            for morph in constructions.trim().split(CONSTRUCTION_SEPARATOR) {
                let morph = morph.trim();
                if morph.is_empty() {
                    return Err(EngineError::Format {
                        line: i + 1,
                        reason: "empty morph".to_string(),
                    });
                }
                *counts.entry(morph.to_string()).or_insert(0) += count;
            }
        }

        Self::from_counts(counts)
    }

    /// Build from morph counts
    pub fn from_counts(mut counts: HashMap<String, u64>) -> Result<Self, EngineError> {
        counts.retain(|_, count| *count > 0);
        let total: u64 = counts.values().sum();
        if total == 0 {
            return Err(EngineError::EmptyModel);
        }

        Ok(Self {
            counts,
            log_total: (total as f64).ln(),
            max_morph_len: DEFAULT_MAX_MORPH_LEN,
        })
    }

    /// Limit the length of morphs considered
    pub fn with_max_morph_len(mut self, max_morph_len: usize) -> Self {
        self.max_morph_len = max_morph_len.max(1);
        self
    }

    /// Number of distinct morphs
    pub fn morph_count(&self) -> usize {
        self.counts.len()
    }

    fn morph_cost(&self, morph: &str) -> Option<f64> {
        self.counts
            .get(morph)
            .map(|&count| self.log_total - (count as f64).ln())
    }

    /// Lowest-cost split of `word`
    fn viterbi(&self, word: &str) -> Result<Vec<String>, EngineError> {
        let offsets: Vec<usize> = word
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(word.len()))
            .collect();
        let n = offsets.len() - 1;
        if n == 0 {
            return Ok(Vec::new());
        }

        let unknown_char_cost = n as f64 * self.log_total + 1.0;

        // best[j] = (cost of best split of the first j chars, start of last morph)
        let mut best: Vec<Option<(f64, usize)>> = vec![None; n + 1];
        best[0] = Some((0.0, 0));

        for end in 1..=n {
            let first = end.saturating_sub(self.max_morph_len);
            for start in first..end {
                let Some((prefix_cost, _)) = best[start] else {
                    continue;
                };
                let morph = &word[offsets[start]..offsets[end]];
                let cost = match self.morph_cost(morph) {
                    Some(cost) => cost,
                    None if end - start == 1 => unknown_char_cost,
                    None => continue,
                };
                let total = prefix_cost + cost;
                if best[end].map_or(true, |(current, _)| total < current) {
                    best[end] = Some((total, start));
                }
            }
        }

        let mut pieces = Vec::new();
        let mut end = n;
        while end > 0 {
            let (_, start) = best[end].ok_or_else(|| {
                EngineError::Segmentation(format!("no segmentation path for '{word}'"))
            })?;
            pieces.push(word[offsets[start]..offsets[end]].to_string());
            end = start;
        }
        pieces.reverse();

        Ok(pieces)
    }
}

impl Segmenter for MorfessorSegmenter {
    fn name(&self) -> &str {
        "morfessor"
    }

    fn try_segment(&self, word: &str) -> Result<Vec<String>, EngineError> {
        self.viterbi(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "\
# Output from Morfessor Baseline
12 un + play + ed
40 play + ing
7 play
3 jump + ing
";

    #[test]
    fn test_parse_counts_morphs() {
        let model = MorfessorSegmenter::parse(LISTING).unwrap();
        assert_eq!(model.morph_count(), 5);
        assert_eq!(model.counts["play"], 59);
        assert_eq!(model.counts["ing"], 43);
    }

    #[test]
    fn test_segments_known_morphs() {
        let model = MorfessorSegmenter::parse(LISTING).unwrap();
        assert_eq!(model.segment("unplayed"), vec!["un", "play", "ed"]);
        assert_eq!(model.segment("jumping"), vec!["jump", "ing"]);
    }

    #[test]
    fn test_whole_known_morph_is_identity() {
        let model = MorfessorSegmenter::parse(LISTING).unwrap();
        assert_eq!(model.segment("play"), vec!["play"]);
    }

    #[test]
    fn test_unknown_characters_stand_alone() {
        let model = MorfessorSegmenter::parse(LISTING).unwrap();
        assert_eq!(model.try_segment("xplay").unwrap(), vec!["x", "play"]);
    }

    #[test]
    fn test_max_morph_len_limits_search() {
        let model = MorfessorSegmenter::parse(LISTING)
            .unwrap()
            .with_max_morph_len(2);
        // "play" is out of reach, only two-char morphs and single chars remain
        assert_eq!(model.try_segment("unplay").unwrap(), vec!["un", "p", "l", "a", "y"]);
    }

    #[test]
    fn test_malformed_count() {
        let err = MorfessorSegmenter::parse("ten play + ing\n").unwrap_err();
        assert!(matches!(err, EngineError::Format { line: 1, .. }));
    }

    #[test]
    fn test_missing_constructions() {
        let err = MorfessorSegmenter::parse("# header\n\n5\n").unwrap_err();
        assert!(matches!(err, EngineError::Format { line: 3, .. }));
    }

    #[test]
    fn test_empty_model() {
        let err = MorfessorSegmenter::parse("# only comments\n").unwrap_err();
        assert!(matches!(err, EngineError::EmptyModel));
    }

    #[test]
    fn test_multibyte_segmentation() {
        let model = MorfessorSegmenter::parse("5 పిల్ల + లు\n2 లు\n").unwrap();
        assert_eq!(model.segment("పిల్లలు"), vec!["పిల్ల", "లు"]);
    }
}
