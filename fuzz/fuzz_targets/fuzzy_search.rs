// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for fuzzy search.
//!
//! Builds a trie from arbitrary words and checks the pruned DFS against a
//! brute-force edit distance over the same vocabulary. If pruning ever cuts a
//! branch that still had a match, this is where it shows up.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use triefuzz::testing::brute_force_fuzzy;
use triefuzz::{levenshtein_distance, FuzzyQuery, FuzzyTrie};

/// Fuzz input for fuzzy search
#[derive(Debug, Arbitrary)]
struct SearchInput {
    /// Vocabulary (empty strings are skipped)
    words: Vec<String>,
    /// Search target
    target: String,
    /// Threshold, reduced modulo 4 to keep runs fast
    threshold: u8,
    /// Optional result cap
    limit: Option<u8>,
}

fuzz_target!(|input: SearchInput| {
    // Cap sizes to avoid timeouts
    let words: Vec<String> = input
        .words
        .into_iter()
        .filter(|w| !w.is_empty())
        .map(|w| w.chars().take(16).collect())
        .take(64)
        .collect();
    let target: String = input.target.chars().take(16).collect();
    let threshold = usize::from(input.threshold % 4);

    let trie = match FuzzyTrie::from_list(&words) {
        Ok(trie) => trie,
        Err(_) => return,
    };

    // INVARIANT 1: unlimited search equals brute force
    let mut found = trie
        .fuzzy_search(&target, threshold, None, false)
        .expect("valid query rejected");
    found.sort();
    assert_eq!(found, brute_force_fuzzy(&words, &target, threshold));

    // INVARIANT 2: reported distances are exact and within the threshold
    let matches = trie
        .fuzzy_matches(&target, &FuzzyQuery::new(threshold))
        .expect("valid query rejected");
    for m in &matches {
        assert!(m.distance <= threshold);
        assert_eq!(m.distance, levenshtein_distance(&target, &m.word));
    }

    // INVARIANT 3: a limit never returns more than asked
    if let Some(limit) = input.limit.filter(|&l| l > 0) {
        let capped = trie
            .fuzzy_search(&target, threshold, Some(usize::from(limit)), true)
            .expect("valid query rejected");
        assert!(capped.len() <= usize::from(limit));
        assert_eq!(capped.len(), matches.len().min(usize::from(limit)));
    }
});
