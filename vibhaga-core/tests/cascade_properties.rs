//! Property-based tests for the analysis cascade
//!
//! Invariants:
//! - Words no rule applies to come back as a single literal root
//! - Affix extraction always leaves more than one character behind
//! - Reduplication holds exactly for doubled stems longer than four characters
//! - Sentence delimiters survive analysis verbatim and in order
//! - Analysis is deterministic
//! - Sandhi expansion terminates on arbitrary tables, cyclic or not

use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use vibhaga_core::tokenizer::DELIMITERS;
use vibhaga_core::{is_reduplication, Analyzer, Lexicon, Token};

fn sample() -> Arc<Lexicon> {
    Arc::new(
        Lexicon::builder()
            .prefixes(["un"])
            .suffixes(["ing", "ed"])
            .roots(["play"])
            .known_words(["it"])
            .build(),
    )
}

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(("[a-z]{0,8}", "[ .,]"), 0..8).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(word, delimiter)| format!("{word}{delimiter}"))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_unmatched_words_are_literal_roots(word in "[qxyz]{1,12}") {
        prop_assume!(!is_reduplication(&word));

        let analyzer = Analyzer::new(sample());
        prop_assert_eq!(analyzer.analyze_word(&word).to_string(), format!("{word}_Root"));
    }

    #[test]
    fn prop_suffix_remainder_longer_than_one(word in "[a-z]{0,10}(ing|ed)?") {
        let lexicon = sample();
        if let Some((remainder, suffix)) = lexicon.extract_suffix(&word) {
            prop_assert!(remainder.chars().count() > 1);
            prop_assert_eq!(format!("{remainder}{suffix}"), word.clone());
        }
        prop_assert_eq!(lexicon.extract_suffix(&word), lexicon.extract_suffix(&word));
    }

    #[test]
    fn prop_prefix_remainder_longer_than_one(word in "(un)?[a-z]{0,10}") {
        let lexicon = sample();
        if let Some((prefix, remainder)) = lexicon.extract_prefix(&word) {
            prop_assert!(remainder.chars().count() > 1);
            prop_assert_eq!(format!("{prefix}{remainder}"), word.clone());
        }
    }

    #[test]
    fn prop_doubled_stems(stem in "[a-zఅ-హ]{1,8}") {
        let doubled = format!("{stem}{stem}");
        prop_assert_eq!(is_reduplication(&doubled), stem.chars().count() > 2);
    }

    #[test]
    fn prop_odd_lengths_never_reduplicated(word in "[ab]{1,15}") {
        prop_assume!(word.chars().count() % 2 == 1);
        prop_assert!(!is_reduplication(&word));
    }

    #[test]
    fn prop_delimiters_preserved(text in sentence()) {
        let analyzer = Analyzer::new(sample());
        let analysis = analyzer.analyze(&text, true);

        let kept: String = analysis
            .tokens()
            .iter()
            .filter_map(|token| match token {
                Token::Delimiter { text } => Some(*text),
                Token::Word { .. } => None,
            })
            .collect();
        let expected: String = text.chars().filter(|c| DELIMITERS.contains(c)).collect();

        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn prop_deterministic(text in sentence()) {
        let analyzer = Analyzer::new(sample());
        prop_assert_eq!(
            analyzer.analyze(&text, false).to_string(),
            analyzer.analyze(&text, false).to_string()
        );
    }

    #[test]
    fn prop_sandhi_terminates(
        table in prop::collection::hash_map(
            "[ab]{1,3}",
            prop::collection::vec("[ab]{1,3}", 2..4),
            1..6,
        )
    ) {
        let keys: Vec<String> = table.keys().cloned().collect();
        let lexicon = table
            .into_iter()
            .fold(Lexicon::builder(), |builder, (key, components)| {
                builder.sandhi(key, components)
            })
            .build();
        let analyzer = Analyzer::new(Arc::new(lexicon));

        for key in keys {
            prop_assert!(!analyzer.analyze_word(&key).is_empty());
        }
    }
}

#[test]
fn test_four_character_doubling_is_not_reduplication() {
    let analyzer = Analyzer::new(sample());
    assert_eq!(analyzer.analyze_word("abab").to_string(), "abab_Root");
    assert_eq!(
        analyzer.analyze_word("ababab").to_string(),
        "ababab_Reduplication"
    );
}

#[test]
fn test_sandhi_terminates_on_shrinking_entries() {
    let table: HashMap<&str, Vec<&str>> = HashMap::from([
        ("abcd", vec!["abc", "d"]),
        ("abc", vec!["ab", "c"]),
        ("ab", vec!["a", "b"]),
    ]);
    let lexicon = table
        .into_iter()
        .fold(Lexicon::builder(), |builder, (key, components)| {
            builder.sandhi(key, components)
        })
        .build();
    let analyzer = Analyzer::new(Arc::new(lexicon));

    assert_eq!(
        analyzer.analyze_word("abcd").to_string(),
        "a_Root + b_Root + c_Root + d_Root"
    );
}
