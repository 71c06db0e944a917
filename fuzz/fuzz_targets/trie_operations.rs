// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for insert/delete sequences.
//!
//! Replays arbitrary operations against the trie and a `BTreeSet` model.
//! After every step the return values must agree, and at the end the trie's
//! structural contracts must hold.

#![no_main]

use std::collections::BTreeSet;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use triefuzz::{contracts, Trie};

#[derive(Debug, Arbitrary)]
enum Op {
    Insert(String),
    Delete(String),
    Find(String),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut trie = Trie::new();
    let mut model: BTreeSet<String> = BTreeSet::new();

    for op in ops.into_iter().take(256) {
        match op {
            Op::Insert(word) => match trie.insert(&word) {
                Ok(added) => assert_eq!(added, model.insert(word)),
                Err(_) => assert!(word.is_empty()),
            },
            Op::Delete(word) => match trie.delete(&word) {
                Ok(removed) => assert_eq!(removed, model.remove(&word)),
                Err(_) => assert!(word.is_empty()),
            },
            Op::Find(word) => match trie.find(&word) {
                Ok(found) => assert_eq!(found, model.contains(&word)),
                Err(_) => assert!(word.is_empty()),
            },
        }
    }

    assert_eq!(trie.len(), model.len());
    let mut words = trie.words();
    words.sort();
    assert_eq!(words, model.into_iter().collect::<Vec<_>>());
    contracts::check_trie_well_formed(&trie);
});
