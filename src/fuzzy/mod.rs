// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! [`FuzzyTrie`] wraps a [`Trie`] and adds one operation, a bounded
//! Levenshtein search over the stored words. Storage, insertion, deletion and
//! completion are the wrapped trie's, reachable through `Deref`.

pub mod levenshtein;
mod search;

pub use search::search;

use std::io::BufRead;
use std::ops::{Deref, DerefMut};
use std::path::Path;

use serde::Serialize;

use crate::config::TrieConfig;
use crate::error::{Result, TrieError};
use crate::trie::Trie;

/// A stored word and its edit distance to the search target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FuzzyMatch {
    pub word: String,
    pub distance: usize,
}

/// Parameters of a fuzzy search.
///
/// ```
/// # use triefuzz::FuzzyQuery;
/// let query = FuzzyQuery::new(2).limit(5).sort_by_distance(true);
/// assert_eq!(query.threshold, 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FuzzyQuery {
    /// Largest accepted edit distance.
    pub threshold: usize,
    /// Stop after this many matches. Must be positive when set.
    pub limit: Option<usize>,
    /// Stable-sort results by distance instead of discovery order.
    pub sort_by_distance: bool,
}

impl FuzzyQuery {
    pub fn new(threshold: usize) -> Self {
        FuzzyQuery {
            threshold,
            ..Self::default()
        }
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn sort_by_distance(mut self, enabled: bool) -> Self {
        self.sort_by_distance = enabled;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.limit == Some(0) {
            return Err(TrieError::InvalidArgument {
                param: "num_return",
                reason: "must be a positive integer",
            });
        }
        Ok(())
    }
}

/// A [`Trie`] with approximate matching.
///
/// ```
/// # use triefuzz::FuzzyTrie;
/// let trie = FuzzyTrie::from_list(["apple", "abple", "apples", "apps", "app"]).unwrap();
/// assert_eq!(trie.fuzzy_search("apple", 0, None, false).unwrap(), vec!["apple"]);
/// assert_eq!(trie.fuzzy_search("apple", 2, Some(1), false).unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FuzzyTrie {
    trie: Trie,
}

impl FuzzyTrie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TrieConfig) -> Self {
        Trie::with_config(config).into()
    }

    pub fn from_list<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Trie::from_list(words).map(Self::from)
    }

    pub fn from_list_with_config<I, S>(words: I, config: TrieConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Trie::from_list_with_config(words, config).map(Self::from)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Trie::from_file(path).map(Self::from)
    }

    pub fn from_file_with_config(path: impl AsRef<Path>, config: TrieConfig) -> Result<Self> {
        Trie::from_file_with_config(path, config).map(Self::from)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Trie::from_reader(reader).map(Self::from)
    }

    pub fn from_reader_with_config<R: BufRead>(reader: R, config: TrieConfig) -> Result<Self> {
        Trie::from_reader_with_config(reader, config).map(Self::from)
    }

    /// Stored words within `threshold` edits of `target`.
    ///
    /// `num_return` caps the number of results and must be positive when
    /// given. With `sort_by_distance` the results are ordered by edit
    /// distance (ties in discovery order), otherwise in discovery order.
    pub fn fuzzy_search(
        &self,
        target: &str,
        threshold: usize,
        num_return: Option<usize>,
        sort_by_distance: bool,
    ) -> Result<Vec<String>> {
        let query = FuzzyQuery {
            threshold,
            limit: num_return,
            sort_by_distance,
        };
        let matches = self.fuzzy_matches(target, &query)?;
        Ok(matches.into_iter().map(|m| m.word).collect())
    }

    /// Like [`fuzzy_search`](FuzzyTrie::fuzzy_search), keeping each distance.
    pub fn fuzzy_matches(&self, target: &str, query: &FuzzyQuery) -> Result<Vec<FuzzyMatch>> {
        search(&self.trie, target, query)
    }

    pub fn as_trie(&self) -> &Trie {
        &self.trie
    }

    pub fn into_inner(self) -> Trie {
        self.trie
    }
}

impl From<Trie> for FuzzyTrie {
    fn from(trie: Trie) -> Self {
        FuzzyTrie { trie }
    }
}

impl Deref for FuzzyTrie {
    type Target = Trie;

    fn deref(&self) -> &Trie {
        &self.trie
    }
}

impl DerefMut for FuzzyTrie {
    fn deref_mut(&mut self) -> &mut Trie {
        &mut self.trie
    }
}
