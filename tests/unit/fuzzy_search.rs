//! Fuzzy search scenarios.

use super::common::{apple_trie, sorted, APPLE_WORDS};
use triefuzz::{ErrorKind, FuzzyQuery, FuzzyTrie};

#[test]
fn test_apple_threshold_one() {
    let found = apple_trie().fuzzy_search("apple", 1, None, false).unwrap();
    assert_eq!(sorted(found), vec!["abple", "apple", "apples"]);
}

#[test]
fn test_apple_threshold_two() {
    let found = apple_trie().fuzzy_search("apple", 2, None, false).unwrap();
    let mut expected: Vec<String> = APPLE_WORDS.map(String::from).to_vec();
    expected.sort();
    assert_eq!(sorted(found), expected);
}

#[test]
fn test_short_target_finds_itself() {
    let found = apple_trie().fuzzy_search("app", 1, None, false).unwrap();
    assert!(found.contains(&"app".to_string()));
}

#[test]
fn test_threshold_zero() {
    let trie = apple_trie();
    assert_eq!(trie.fuzzy_search("apps", 0, None, false).unwrap(), vec!["apps"]);
    assert!(trie.fuzzy_search("apricot", 0, None, false).unwrap().is_empty());
}

#[test]
fn test_num_return_one() {
    let found = apple_trie().fuzzy_search("apple", 2, Some(1), false).unwrap();
    assert_eq!(found.len(), 1);
}

#[test]
fn test_num_return_larger_than_matches() {
    let found = apple_trie().fuzzy_search("apple", 1, Some(10), false).unwrap();
    assert_eq!(found.len(), 3);
}

#[test]
fn test_num_return_zero_is_invalid() {
    let err = apple_trie()
        .fuzzy_search("a", 1, Some(0), true)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_sort_by_distance() {
    let found = apple_trie().fuzzy_search("apps", 2, None, true).unwrap();
    let distances: Vec<usize> = found
        .iter()
        .map(|w| triefuzz::levenshtein_distance("apps", w))
        .collect();
    assert_eq!(found[0], "apps");
    assert!(distances.windows(2).all(|w| w[0] <= w[1]), "{:?}", distances);
}

#[test]
fn test_matches_agree_with_strsim() {
    let trie = apple_trie();
    let matches = trie.fuzzy_matches("aple", &FuzzyQuery::new(3)).unwrap();
    assert!(!matches.is_empty());
    for m in matches {
        assert_eq!(m.distance, strsim::levenshtein("aple", &m.word), "{}", m.word);
    }
}

#[test]
fn test_empty_vocabulary() {
    let trie = FuzzyTrie::new();
    assert!(trie.fuzzy_search("apple", 3, None, false).unwrap().is_empty());
}

#[test]
fn test_empty_target() {
    let trie = FuzzyTrie::from_list(["a", "an", "and"]).unwrap();
    let found = trie.fuzzy_search("", 1, None, false).unwrap();
    assert_eq!(found, vec!["a"]);
}

#[test]
fn test_long_words_search_and_delete() {
    let huge = "a".repeat(100_000);
    let mut long: Vec<char> = "ab".repeat(1_500).chars().collect();
    let stored: String = long.iter().collect();
    long[1_000] = 'z';
    let typo: String = long.iter().collect();

    let mut trie = FuzzyTrie::from_list([huge.as_str(), stored.as_str(), "apple"]).unwrap();

    // Short target: the 100k chain is pruned a few levels down.
    assert_eq!(trie.fuzzy_search("aaple", 1, None, false).unwrap(), vec!["apple"]);

    let found = trie.fuzzy_matches(&typo, &FuzzyQuery::new(1)).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].word, stored);
    assert_eq!(found[0].distance, 1);

    assert!(trie.delete(&huge).unwrap());
    assert!(trie.delete(&stored).unwrap());
    assert_eq!(trie.words(), vec!["apple"]);
}
