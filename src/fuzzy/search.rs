// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pruned depth-first search with incremental Levenshtein rows.
//!
//! One row buffer per depth. Entering a node at depth `d` recomputes row `d`
//! from row `d - 1` in `O(|target|)`; everything above it is still valid
//! because the DFS never revisits a shallower node before finishing the
//! current subtree. A subtree is skipped when its root row's minimum is
//! already over the threshold: appending characters can only add edits.

use log::trace;

use super::levenshtein::{first_row, next_row};
use super::{FuzzyMatch, FuzzyQuery};
use crate::error::Result;
use crate::normalize::fold;
use crate::trie::{Trie, TrieNode};

/// Every stored word within `query.threshold` edits of `target`.
///
/// Results come in DFS discovery order (ascending code point along each
/// level) unless `query.sort_by_distance` asks for a stable sort by distance.
/// With a `limit`, the walk stops as soon as that many words are found, so a
/// sorted result is the best of the first `limit` discovered, not the global
/// best.
pub fn search(trie: &Trie, target: &str, query: &FuzzyQuery) -> Result<Vec<FuzzyMatch>> {
    query.validate()?;

    let target: Vec<char> = fold(target, trie.case_folding()).chars().collect();
    let last = target.len();

    let mut rows: Vec<Vec<usize>> = vec![Vec::with_capacity(last + 1)];
    first_row(&target, &mut rows[0]);

    let mut candidate: Vec<char> = Vec::new();
    let mut matches: Vec<FuzzyMatch> = Vec::new();
    let mut visited = 0usize;
    let mut pruned = 0usize;

    // (depth of the child, edge char, child); depth 0 is the root row.
    let mut stack: Vec<(usize, char, &TrieNode)> = trie
        .root()
        .children()
        .rev()
        .map(|(ch, node)| (1, ch, node))
        .collect();

    while let Some((depth, ch, node)) = stack.pop() {
        visited += 1;
        candidate.truncate(depth - 1);
        candidate.push(ch);

        if rows.len() == depth {
            rows.push(Vec::with_capacity(last + 1));
        }
        let (above, below) = rows.split_at_mut(depth);
        let row = &mut below[0];
        let lower_bound = next_row(&target, &above[depth - 1], ch, row);
        let distance = row[last];

        if node.is_terminal() && distance <= query.threshold {
            matches.push(FuzzyMatch {
                word: candidate.iter().collect(),
                distance,
            });
            if query.limit.is_some_and(|limit| matches.len() >= limit) {
                break;
            }
        }

        // INVARIANT: row minimum never decreases with depth, so a subtree whose
        // root is over the threshold holds no match
        if lower_bound <= query.threshold {
            stack.extend(node.children().rev().map(|(c, n)| (depth + 1, c, n)));
        } else if !node.is_leaf() {
            pruned += 1;
        }
    }

    if query.sort_by_distance {
        matches.sort_by_key(|m| m.distance);
    }

    trace!(
        "fuzzy search target_len={} threshold={} visited={} pruned_subtrees={} matches={}",
        last,
        query.threshold,
        visited,
        pruned,
        matches.len()
    );
    Ok(matches)
}
