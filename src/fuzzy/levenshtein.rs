// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Levenshtein rows: the DP building blocks behind fuzzy search.
//!
//! The classic edit-distance matrix between a target `t` (columns) and a
//! candidate `w` (rows) only ever needs the previous row to compute the next.
//! Fuzzy search walks the trie one character at a time, so each trie edge is
//! exactly one call to [`next_row`] on the parent's row. The row for the empty
//! candidate is [`first_row`].
//!
//! [`levenshtein_distance`] drives the same two functions over a whole string
//! pair. Tests use it as the reference distance.

/// Row for the empty candidate: `[0, 1, ..., target.len()]`.
pub fn first_row(target: &[char], row: &mut Vec<usize>) {
    row.clear();
    row.extend(0..=target.len());
}

/// Compute the row for `candidate + ch` from the row for `candidate`.
///
/// `row` is overwritten and must not alias `parent`; callers keep one buffer
/// per depth and reuse it. Returns the minimum value of the new row, which is
/// a lower bound on the distance of every extension of the candidate.
///
/// # Panics (debug builds only)
/// Panics if `parent.len() != target.len() + 1`.
#[inline]
pub fn next_row(target: &[char], parent: &[usize], ch: char, row: &mut Vec<usize>) -> usize {
    debug_assert_eq!(parent.len(), target.len() + 1, "parent row has wrong width");

    row.clear();
    row.push(parent[0] + 1);
    let mut min = row[0];

    for (j, &tc) in target.iter().enumerate() {
        let value = if tc == ch {
            parent[j]
        } else {
            // substitution, insertion, deletion
            parent[j].min(row[j]).min(parent[j + 1]) + 1
        };
        row.push(value);
        min = min.min(value);
    }

    min
}

/// Edit distance between `a` and `b`, counted in chars.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let target: Vec<char> = a.chars().collect();
    let mut prev = Vec::with_capacity(target.len() + 1);
    let mut curr = Vec::with_capacity(target.len() + 1);
    first_row(&target, &mut prev);
    for ch in b.chars() {
        next_row(&target, &prev, ch, &mut curr);
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[target.len()]
}
