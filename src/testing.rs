//! Test utilities shared across unit tests, integration tests and benchmarks.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::collections::BTreeSet;

use crate::fuzzy::levenshtein::levenshtein_distance;

/// The five-word vocabulary used throughout the fuzzy search examples.
pub const APPLE_WORDS: [&str; 5] = ["apple", "abple", "apples", "apps", "app"];

/// Distinct words of `words` within `threshold` edits of `target`, sorted.
///
/// Full-matrix edit distance against every word: slow, obviously correct.
pub fn brute_force_fuzzy<S: AsRef<str>>(words: &[S], target: &str, threshold: usize) -> Vec<String> {
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|w| levenshtein_distance(target, w) <= threshold)
        .map(str::to_owned)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct words of `words` that strictly extend `prefix`, sorted.
pub fn brute_force_complete<S: AsRef<str>>(words: &[S], prefix: &str) -> Vec<String> {
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|w| w.len() > prefix.len() && w.starts_with(prefix))
        .map(str::to_owned)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Deterministic pseudo-random vocabulary for benchmarks.
///
/// Words are 3 to 10 lowercase ASCII letters drawn from a linear congruential
/// generator, so every run builds the same trie.
pub fn synthetic_vocabulary(count: usize, seed: u64) -> Vec<String> {
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (state >> 33) as usize
    };

    (0..count)
        .map(|_| {
            let len = 3 + next() % 8;
            (0..len)
                .map(|_| char::from(b'a' + (next() % 26) as u8))
                .collect()
        })
        .collect()
}
