//! Property tests for trie membership, deletion and completion.

use std::collections::BTreeSet;

use super::common::{brute_force_complete, sorted};
use proptest::prelude::*;
use triefuzz::{contracts, Trie};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Words over a tiny alphabet so prefixes collide often.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-c]{1,6}").unwrap()
}

fn vocabulary_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..30)
}

/// Mixed alphabets: ASCII, Latin with diacritics, CJK.
fn unicode_word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[aéü日本]{1,5}").unwrap()
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    /// Property: every inserted word is found immediately after insertion.
    #[test]
    fn prop_insert_then_find(words in vocabulary_strategy()) {
        let mut trie = Trie::new();
        for word in &words {
            trie.insert(word).unwrap();
            prop_assert!(trie.find(word).unwrap());
            prop_assert!(trie.contains(word).unwrap());
        }
    }

    /// Property: len() after from_list equals the number of distinct words.
    #[test]
    fn prop_len_counts_distinct(words in vocabulary_strategy()) {
        let trie = Trie::from_list(&words).unwrap();
        let distinct: BTreeSet<&String> = words.iter().collect();
        prop_assert_eq!(trie.len(), distinct.len());
    }

    /// Property: deleting a word removes it and nothing else.
    #[test]
    fn prop_delete_keeps_siblings(words in vocabulary_strategy(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!words.is_empty());
        let victim = pick.get(&words).clone();
        let mut trie = Trie::from_list(&words).unwrap();

        prop_assert!(trie.delete(&victim).unwrap());
        prop_assert!(!trie.find(&victim).unwrap());
        for word in words.iter().filter(|w| **w != victim) {
            prop_assert!(trie.find(word).unwrap(), "lost sibling {}", word);
        }
        contracts::check_trie_well_formed(&trie);
    }

    /// Property: deleting every word in any order leaves an empty root.
    #[test]
    fn prop_delete_all_empties(words in vocabulary_strategy()) {
        let mut trie = Trie::from_list(&words).unwrap();
        let mut order: Vec<&String> = words.iter().collect();
        order.reverse();
        for word in order {
            trie.delete(word).unwrap();
        }
        prop_assert!(trie.is_empty());
        prop_assert!(trie.root().is_leaf());
    }

    /// Property: complete("") returns every stored word exactly once.
    #[test]
    fn prop_complete_empty_is_vocabulary(words in vocabulary_strategy()) {
        let trie = Trie::from_list(&words).unwrap();
        let all = trie.complete("");
        let distinct: BTreeSet<&String> = all.iter().collect();
        prop_assert_eq!(distinct.len(), all.len(), "duplicates in {:?}", all);
        prop_assert_eq!(sorted(all), brute_force_complete(&words, ""));
    }

    /// Property: complete(p) is exactly the stored words strictly extending p,
    /// ordered by length then code point.
    #[test]
    fn prop_complete_matches_model(words in vocabulary_strategy(), prefix in "[a-c]{0,3}") {
        let trie = Trie::from_list(&words).unwrap();
        let completions = trie.complete(&prefix);

        prop_assert!(!completions.contains(&prefix));
        let mut expected = brute_force_complete(&words, &prefix);
        expected.sort_by_key(|w| w.chars().count());
        prop_assert_eq!(completions, expected);
    }

    /// Property: unicode words behave like ASCII ones.
    #[test]
    fn prop_unicode_round_trip(words in prop::collection::vec(unicode_word_strategy(), 1..12)) {
        let mut trie = Trie::from_list(&words).unwrap();
        for word in &words {
            prop_assert!(trie.find(word).unwrap());
        }
        for word in &words {
            trie.delete(word).unwrap();
        }
        prop_assert!(trie.is_empty());
        contracts::check_trie_well_formed(&trie);
    }
}
