//! Bulk construction from lists, files and readers.

use std::io::Cursor;

use super::common::{sorted, word_file, EXAMPLE_WORDS, EXAMPLE_WORDS_FILE};
use triefuzz::{ErrorKind, FuzzyTrie, Trie, TrieConfig};

#[test]
fn test_from_list() {
    let words = ["apps", "apple", "apply"];
    let trie = Trie::from_list(words).unwrap();
    assert_eq!(trie.len(), 3);
    assert_eq!(sorted(trie.complete("app")), sorted(words.map(String::from).to_vec()));
}

#[test]
fn test_from_list_counts_distinct_words() {
    let trie = Trie::from_list(["apple", "apple", "apps", "apple"]).unwrap();
    assert_eq!(trie.len(), 2);
}

#[test]
fn test_from_list_invalid_element() {
    let words = vec!["apps".to_string(), String::new()];
    let err = Trie::from_list(&words).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_from_file_fixture() {
    let trie = Trie::from_file(EXAMPLE_WORDS_FILE).unwrap();
    assert_eq!(trie.len(), 4);
    assert_eq!(
        sorted(trie.complete("app")),
        sorted(EXAMPLE_WORDS.map(String::from).to_vec())
    );
}

#[test]
fn test_from_file_missing() {
    let missing = format!("{}x", EXAMPLE_WORDS_FILE);
    let err = Trie::from_file(&missing).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().contains(&missing), "{}", err);
}

#[test]
fn test_from_file_matches_from_list() {
    let contents = "zeta alpha\n\tbeta  alpha\n\n gamma\r\ndelta";
    let file = word_file(contents);
    let from_file = Trie::from_file(file.path()).unwrap();
    let tokens: Vec<&str> = triefuzz::tokenize(contents).collect();
    let from_list = Trie::from_list(&tokens).unwrap();
    assert_eq!(from_file, from_list);
    assert_eq!(from_file.len(), 5);
}

#[test]
fn test_from_file_empty() {
    let file = word_file("   \n\n");
    let trie = Trie::from_file(file.path()).unwrap();
    assert!(trie.is_empty());
}

#[test]
fn test_from_file_with_case_folding() {
    let file = word_file("Apple APPLE apple Apps");
    let config = TrieConfig::default().case_folding(true);
    let trie = FuzzyTrie::from_file_with_config(file.path(), config).unwrap();
    assert_eq!(trie.len(), 2);
    assert_eq!(trie.words(), vec!["apps", "apple"]);
}

#[test]
fn test_from_reader() {
    let trie = FuzzyTrie::from_reader(Cursor::new("apps apple\napples")).unwrap();
    assert_eq!(trie.len(), 3);
    assert!(trie.find("apples").unwrap());
}

#[test]
fn test_config_round_trips_through_trie() {
    let config = TrieConfig::default().case_folding(true);
    assert_eq!(Trie::with_config(config).config(), config);
    assert_eq!(Trie::new().config(), TrieConfig::default());
}
