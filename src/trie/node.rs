// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A single trie node.

use std::collections::BTreeMap;
use std::fmt;

/// One node of the trie: outgoing edges keyed by character plus a flag saying
/// whether a stored word ends here.
///
/// Children live in a `BTreeMap`, so [`children`](TrieNode::children) always
/// yields edges in ascending code-point order. Every traversal in the crate
/// inherits that order, which is what makes completion and fuzzy results
/// deterministic for a given vocabulary.
///
/// `Drop`, `Clone` and `PartialEq` are written by hand with explicit stacks:
/// the derived versions recurse once per character, and a single long word
/// would overflow the call stack. `Debug` shows one level only.
#[derive(Default)]
pub struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Child reached by `ch`, if the edge exists.
    #[inline]
    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    #[inline]
    pub(crate) fn child_mut(&mut self, ch: char) -> Option<&mut TrieNode> {
        self.children.get_mut(&ch)
    }

    #[inline]
    pub(crate) fn child_or_insert(&mut self, ch: char) -> &mut TrieNode {
        self.children.entry(ch).or_default()
    }

    #[inline]
    pub(crate) fn remove_child(&mut self, ch: char) -> Option<TrieNode> {
        self.children.remove(&ch)
    }

    /// Edges out of this node, in ascending character order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(&ch, node)| (ch, node))
    }

    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether a stored word ends at this node.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Set the terminal flag, returning its previous value.
    #[inline]
    pub(crate) fn set_terminal(&mut self, terminal: bool) -> bool {
        std::mem::replace(&mut self.terminal, terminal)
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        // Detach every subtree before it is dropped, so each node's own drop
        // sees an empty map.
        let mut pending: Vec<TrieNode> =
            std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

enum CloneStep<'a> {
    Enter(&'a TrieNode),
    Exit(&'a TrieNode),
}

impl Clone for TrieNode {
    /// Post-order copy: a node is rebuilt once all its children are.
    fn clone(&self) -> Self {
        let mut steps = vec![CloneStep::Enter(self)];
        let mut built: Vec<TrieNode> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                CloneStep::Enter(node) => {
                    steps.push(CloneStep::Exit(node));
                    // Reversed so children finish in ascending order.
                    steps.extend(node.children.values().rev().map(CloneStep::Enter));
                }
                CloneStep::Exit(node) => {
                    let first = built.len() - node.children.len();
                    let copies = built.split_off(first);
                    built.push(TrieNode {
                        children: node.children.keys().copied().zip(copies).collect(),
                        terminal: node.terminal,
                    });
                }
            }
        }

        built.pop().unwrap_or_default()
    }
}

impl PartialEq for TrieNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];
        while let Some((a, b)) = pairs.pop() {
            if a.terminal != b.terminal || a.children.len() != b.children.len() {
                return false;
            }
            for ((ca, na), (cb, nb)) in a.children.iter().zip(&b.children) {
                if ca != cb {
                    return false;
                }
                pairs.push((na, nb));
            }
        }
        true
    }
}

impl Eq for TrieNode {}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("terminal", &self.terminal)
            .field("children", &self.children.keys())
            .finish()
    }
}
