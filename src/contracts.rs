// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the trie's structural invariants.
//!
//! These are debug-mode assertions:
//!
//! 1. **Zero-cost in release builds** (the walks are behind `cfg!(debug_assertions)`)
//! 2. **Early failure detection** during development and in tests
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function           | Property                                        |
//! |-----------------------------|-------------------------------------------------|
//! | `check_word_count`          | `len()` equals the number of terminal nodes     |
//! | `check_no_dead_branches`    | every non-root leaf is terminal                 |
//! | `check_root_not_terminal`   | the empty word is never stored                  |
//! | `check_trie_well_formed`    | all of the above                                |
//! | `check_cut_point`           | a delete cut keeps a node that still serves a word |
//! | `check_unmarked_node`       | a delete that only unmarks leaves a non-leaf    |
//!
//! The whole-trie checks are O(size) and run after bulk construction and in
//! tests. Deletion only runs the two O(1) checks on the nodes it touched.
//!
//! # Usage
//!
//! ```
//! use triefuzz::{contracts, Trie};
//!
//! let mut trie = Trie::from_list(["app", "apple"]).unwrap();
//! trie.delete("apple").unwrap();
//! contracts::check_trie_well_formed(&trie);
//! ```

use crate::trie::{Trie, TrieNode};

/// Number of terminal nodes in the subtree under `root`, `root` included.
pub fn count_terminals(root: &TrieNode) -> usize {
    let mut count = 0;
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        count += usize::from(node.is_terminal());
        stack.extend(node.children().map(|(_, child)| child));
    }
    count
}

/// Check that the stored word count matches the terminal nodes.
///
/// # Panics (debug builds only)
/// Panics if `trie.len()` differs from the number of terminal nodes.
#[inline]
pub fn check_word_count(trie: &Trie) {
    if cfg!(debug_assertions) {
        let terminals = count_terminals(trie.root());
        // INVARIANT: word_count == |terminal nodes|
        debug_assert_eq!(
            trie.len(),
            terminals,
            "Contract violation: word count {} != terminal nodes {}",
            trie.len(),
            terminals
        );
    }
}

/// Check that deletion left no branch that leads to no word.
///
/// # Panics (debug builds only)
/// Panics if a non-root leaf is not terminal.
#[inline]
pub fn check_no_dead_branches(root: &TrieNode) {
    if cfg!(debug_assertions) {
        let mut path: Vec<char> = Vec::new();
        let mut stack: Vec<(usize, char, &TrieNode)> =
            root.children().map(|(ch, child)| (0, ch, child)).collect();
        while let Some((depth, ch, node)) = stack.pop() {
            path.truncate(depth);
            path.push(ch);
            // INVARIANT: leaf => terminal (below the root)
            debug_assert!(
                !node.is_leaf() || node.is_terminal(),
                "Contract violation: dead branch ending at {:?}",
                path.iter().collect::<String>()
            );
            stack.extend(node.children().map(|(c, child)| (depth + 1, c, child)));
        }
    }
}

/// Check that the root never marks a word.
///
/// # Panics (debug builds only)
/// Panics if the root node is terminal.
#[inline]
pub fn check_root_not_terminal(trie: &Trie) {
    // INVARIANT: empty words are rejected, so the root is never terminal
    debug_assert!(
        !trie.root().is_terminal(),
        "Contract violation: root node is terminal"
    );
}

/// Check the node a delete cut below.
///
/// # Panics (debug builds only)
/// Panics if `keeper` is a non-root node that no longer serves any word.
#[inline]
pub fn check_cut_point(keeper: &TrieNode, is_root: bool) {
    // INVARIANT: the cut stops at the root, a terminal, or a fork
    debug_assert!(
        is_root || keeper.is_terminal() || !keeper.is_leaf(),
        "Contract violation: delete cut left a dead node"
    );
}

/// Check a node whose terminal flag a delete just cleared.
///
/// # Panics (debug builds only)
/// Panics if the node has no children, since it should have been removed.
#[inline]
pub fn check_unmarked_node(node: &TrieNode) {
    debug_assert!(
        !node.is_leaf(),
        "Contract violation: unmarked a leaf instead of removing it"
    );
}

/// Run every structural check.
#[inline]
pub fn check_trie_well_formed(trie: &Trie) {
    check_root_not_terminal(trie);
    check_word_count(trie);
    check_no_dead_branches(trie.root());
}
