// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The trie itself: insertion, lookup, deletion with cleanup, prefix completion.
//!
//! Every public entry point folds its argument first (when the trie was built
//! with `case_folding`) and validates it before touching the tree, so a call
//! that returns `Err` leaves the trie exactly as it was.
//!
//! None of the walks recurse. Lookup and insertion follow a single path,
//! deletion makes two passes down the word's path, and completion keeps an
//! explicit stack. Word length never turns into call-stack depth.

mod node;

pub use node::TrieNode;

use std::borrow::Cow;
use std::io::BufRead;
use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::config::TrieConfig;
use crate::contracts;
use crate::error::{Result, TrieError};
use crate::loader;
use crate::normalize::fold;

/// Shape summary of a trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrieStats {
    /// Stored words (same as [`Trie::len`]).
    pub words: usize,
    /// Nodes below the root.
    pub nodes: usize,
    /// Length in characters of the longest stored path.
    pub max_depth: usize,
}

/// A character trie over a vocabulary of non-empty words.
///
/// Re-inserting a stored word is a no-op: [`len`](Trie::len) counts distinct
/// words, and [`insert`](Trie::insert) reports whether the word was new.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trie {
    root: TrieNode,
    word_count: usize,
    case_folding: bool,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TrieConfig) -> Self {
        Trie {
            root: TrieNode::new(),
            word_count: 0,
            case_folding: config.case_folding,
        }
    }

    /// Build a trie from `words`, inserted in order.
    ///
    /// Fails with `InvalidArgument` if any word is empty. Duplicates are fine
    /// and count once.
    pub fn from_list<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_list_with_config(words, TrieConfig::default())
    }

    pub fn from_list_with_config<I, S>(words: I, config: TrieConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::with_config(config);
        trie.insert_all(words)?;
        contracts::check_trie_well_formed(&trie);
        Ok(trie)
    }

    /// Build a trie from a whitespace-separated word file.
    ///
    /// Fails with `NotFound` when `path` doesn't exist.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_with_config(path, TrieConfig::default())
    }

    pub fn from_file_with_config(path: impl AsRef<Path>, config: TrieConfig) -> Result<Self> {
        let words = loader::read_word_file(path.as_ref())?;
        Self::from_list_with_config(words, config)
    }

    /// Build a trie from whitespace-separated words read from `reader`.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::from_reader_with_config(reader, TrieConfig::default())
    }

    pub fn from_reader_with_config<R: BufRead>(reader: R, config: TrieConfig) -> Result<Self> {
        let words = loader::read_words(reader).map_err(TrieError::Read)?;
        debug!("read {} words from reader", words.len());
        Self::from_list_with_config(words, config)
    }

    /// Insert `word`. Returns `Ok(true)` if it was not already stored.
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        let word = self.normalized(word, "word")?;
        Ok(self.insert_normalized(&word))
    }

    /// Insert every word of `words`, returning how many were new.
    ///
    /// All words are validated before the first insertion, so an empty word
    /// anywhere in the input leaves the trie untouched.
    pub fn insert_all<I, S>(&mut self, words: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<S> = words.into_iter().collect();
        if words.iter().any(|w| w.as_ref().is_empty()) {
            return Err(TrieError::empty_word("words"));
        }

        let before = self.word_count;
        for word in &words {
            let word = fold(word.as_ref(), self.case_folding);
            self.insert_normalized(&word);
        }
        debug!(
            "inserted {} words ({} new), trie now holds {}",
            words.len(),
            self.word_count - before,
            self.word_count
        );
        Ok(self.word_count - before)
    }

    /// Is `word` stored? A stored prefix of a longer word does not count.
    pub fn find(&self, word: &str) -> Result<bool> {
        let word = self.normalized(word, "word")?;
        Ok(self.node_at(&word).is_some_and(TrieNode::is_terminal))
    }

    /// Same as [`find`](Trie::find).
    pub fn contains(&self, word: &str) -> Result<bool> {
        self.find(word)
    }

    /// Remove `word`. Returns `Ok(false)` if it wasn't stored.
    ///
    /// Nodes that only served `word` are dropped. Nodes shared with another
    /// stored word stay: when `word` is a prefix of another word only its
    /// terminal flag is cleared, and when it extends another word the chain is
    /// cut just below that word's last node.
    pub fn delete(&mut self, word: &str) -> Result<bool> {
        let word = self.normalized(word, "word")?;
        let path: Vec<char> = word.chars().collect();

        // Pass 1: confirm the word is stored and find the deepest node on its
        // path that has to survive (root, a terminal, or a fork).
        let mut anchor = 0;
        let mut node = &self.root;
        for (depth, &ch) in path.iter().enumerate() {
            if depth > 0 && (node.is_terminal() || node.child_count() > 1) {
                anchor = depth;
            }
            match node.child(ch) {
                Some(next) => node = next,
                None => return Ok(false),
            }
        }
        if !node.is_terminal() {
            return Ok(false);
        }
        let prune = node.is_leaf();

        // Pass 2: either cut the dead chain at the anchor or just unmark.
        // INVARIANT: nothing between the anchor and the leaf is terminal or
        // forks, so removing the anchor's edge only drops nodes of `word`
        if prune {
            let Some(keeper) = self.node_at_path_mut(&path[..anchor]) else {
                unreachable!("pass 1 walked this path");
            };
            // The detached chain is freed by `TrieNode`'s iterative drop.
            keeper.remove_child(path[anchor]);
            contracts::check_cut_point(keeper, anchor == 0);
        } else {
            let Some(last) = self.node_at_path_mut(&path) else {
                unreachable!("pass 1 walked this path");
            };
            last.set_terminal(false);
            contracts::check_unmarked_node(last);
        }
        self.word_count -= 1;

        Ok(true)
    }

    /// Every stored word that extends `prefix` by at least one character.
    ///
    /// The empty prefix lists the whole vocabulary. `prefix` itself is never
    /// returned, even when it is stored. Results are ordered by length, then
    /// by code point. Words come back in stored form, so lowercase when the
    /// trie folds case.
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        let prefix = fold(prefix, self.case_folding);
        let Some(start) = self.node_at(&prefix) else {
            return Vec::new();
        };

        let mut found: Vec<(usize, String)> = Vec::new();
        let mut suffix: Vec<char> = Vec::new();
        // Children are pushed in reverse so they pop in ascending order.
        let mut stack: Vec<(usize, char, &TrieNode)> =
            start.children().rev().map(|(ch, n)| (0, ch, n)).collect();

        while let Some((depth, ch, node)) = stack.pop() {
            suffix.truncate(depth);
            suffix.push(ch);
            if node.is_terminal() {
                let mut word = String::with_capacity(prefix.len() + suffix.len());
                word.push_str(&prefix);
                word.extend(&suffix);
                found.push((suffix.len(), word));
            }
            stack.extend(node.children().rev().map(|(c, n)| (depth + 1, c, n)));
        }

        // Preorder over sorted children is already lexicographic; the stable
        // sort keeps that order within each length.
        found.sort_by_key(|(len, _)| *len);
        found.into_iter().map(|(_, word)| word).collect()
    }

    /// The whole vocabulary, ordered like [`complete`](Trie::complete).
    pub fn words(&self) -> Vec<String> {
        self.complete("")
    }

    /// Number of stored words.
    #[inline]
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Alias for [`len`](Trie::len).
    #[inline]
    pub fn size(&self) -> usize {
        self.word_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Read-only access to the root node.
    #[inline]
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    #[inline]
    pub fn case_folding(&self) -> bool {
        self.case_folding
    }

    pub fn config(&self) -> TrieConfig {
        TrieConfig::default().case_folding(self.case_folding)
    }

    pub fn stats(&self) -> TrieStats {
        let mut nodes = 0;
        let mut max_depth = 0;
        let mut stack: Vec<(usize, &TrieNode)> = vec![(0, &self.root)];
        while let Some((depth, node)) = stack.pop() {
            max_depth = max_depth.max(depth);
            for (_, child) in node.children() {
                nodes += 1;
                stack.push((depth + 1, child));
            }
        }
        TrieStats {
            words: self.word_count,
            nodes,
            max_depth,
        }
    }

    /// Fold `value` and reject it if empty.
    pub(crate) fn normalized<'a>(&self, value: &'a str, param: &'static str) -> Result<Cow<'a, str>> {
        if value.is_empty() {
            return Err(TrieError::empty_word(param));
        }
        Ok(fold(value, self.case_folding))
    }

    /// Node at the end of `path`, if the whole path exists.
    pub(crate) fn node_at(&self, path: &str) -> Option<&TrieNode> {
        path.chars().try_fold(&self.root, |node, ch| node.child(ch))
    }

    fn node_at_path_mut(&mut self, path: &[char]) -> Option<&mut TrieNode> {
        path.iter()
            .try_fold(&mut self.root, |node, &ch| node.child_mut(ch))
    }

    fn insert_normalized(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.child_or_insert(ch);
        }
        let added = !node.set_terminal(true);
        if added {
            self.word_count += 1;
        }
        added
    }
}
