//! Property tests for fuzzy search against brute-force edit distance.

use super::common::{brute_force_fuzzy, sorted};
use proptest::prelude::*;
use triefuzz::{FuzzyQuery, FuzzyTrie};

// ============================================================================
// STRATEGIES
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]{1,7}").unwrap()
}

fn vocabulary_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..40)
}

/// Maximum distance threshold exercised.
const MAX_THRESHOLD: usize = 3;

// ============================================================================
// FUZZY SEARCH PROPERTIES
// ============================================================================

proptest! {
    /// Property: the pruned search returns exactly the brute-force match set.
    #[test]
    fn prop_fuzzy_equals_brute_force(
        words in vocabulary_strategy(),
        target in "[a-d]{0,7}",
        threshold in 0usize..=MAX_THRESHOLD
    ) {
        let trie = FuzzyTrie::from_list(&words).unwrap();
        let found = trie.fuzzy_search(&target, threshold, None, false).unwrap();
        prop_assert_eq!(sorted(found), brute_force_fuzzy(&words, &target, threshold));
    }

    /// Property: reported distances agree with strsim.
    #[test]
    fn prop_distances_agree_with_strsim(words in vocabulary_strategy(), target in "[a-d]{0,7}") {
        let trie = FuzzyTrie::from_list(&words).unwrap();
        for m in trie.fuzzy_matches(&target, &FuzzyQuery::new(MAX_THRESHOLD)).unwrap() {
            prop_assert_eq!(m.distance, strsim::levenshtein(&target, &m.word));
        }
    }

    /// Property: threshold 0 returns {target} if stored, else nothing.
    #[test]
    fn prop_threshold_zero_is_membership(words in vocabulary_strategy(), target in word_strategy()) {
        let trie = FuzzyTrie::from_list(&words).unwrap();
        let found = trie.fuzzy_search(&target, 0, None, false).unwrap();
        if trie.find(&target).unwrap() {
            prop_assert_eq!(found, vec![target]);
        } else {
            prop_assert!(found.is_empty());
        }
    }

    /// Property: results grow monotonically with the threshold.
    #[test]
    fn prop_threshold_monotone(
        words in vocabulary_strategy(),
        target in "[a-d]{0,7}",
        t1 in 0usize..=MAX_THRESHOLD,
        t2 in 0usize..=MAX_THRESHOLD
    ) {
        let (low, high) = (t1.min(t2), t1.max(t2));
        let trie = FuzzyTrie::from_list(&words).unwrap();
        let narrow = trie.fuzzy_search(&target, low, None, false).unwrap();
        let wide = trie.fuzzy_search(&target, high, None, false).unwrap();
        prop_assert!(narrow.len() <= wide.len());
        for word in &narrow {
            prop_assert!(wide.contains(word), "{} lost at threshold {}", word, high);
        }
    }

    /// Property: a limit returns a prefix of the unlimited discovery order.
    #[test]
    fn prop_limit_is_prefix_of_full(
        words in vocabulary_strategy(),
        target in "[a-d]{0,7}",
        limit in 1usize..6
    ) {
        let trie = FuzzyTrie::from_list(&words).unwrap();
        let full = trie.fuzzy_search(&target, 2, None, false).unwrap();
        let capped = trie.fuzzy_search(&target, 2, Some(limit), false).unwrap();
        prop_assert_eq!(capped.len(), full.len().min(limit));
        prop_assert_eq!(&capped[..], &full[..capped.len()]);
    }

    /// Property: sorted results are non-decreasing in distance.
    #[test]
    fn prop_sorted_by_distance(words in vocabulary_strategy(), target in "[a-d]{0,7}") {
        let trie = FuzzyTrie::from_list(&words).unwrap();
        let query = FuzzyQuery::new(MAX_THRESHOLD).sort_by_distance(true);
        let found = trie.fuzzy_matches(&target, &query).unwrap();
        prop_assert!(found.windows(2).all(|w| w[0].distance <= w[1].distance));
    }
}
