// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory trie dictionary with prefix completion and bounded fuzzy search.
//!
//! The crate stores a vocabulary of words in a character trie and answers four
//! kinds of question about it: is this word stored, what words extend this
//! prefix, remove this word, and which stored words are within `k` edits of a
//! target string.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  node.rs    │────▶│  trie/mod.rs │────▶│  fuzzy/mod.rs    │
//! │ (TrieNode)  │     │ (insert,     │     │ (FuzzyTrie,      │
//! │             │     │  delete,     │     │  fuzzy_search)   │
//! └─────────────┘     │  complete)   │     └──────────────────┘
//!                     └──────────────┘              │
//!                            │                      ▼
//!                            ▼             ┌──────────────────┐
//!                     ┌──────────────┐     │ fuzzy/search.rs  │
//!                     │  loader.rs   │     │ (pruned DFS)     │
//!                     │ (word files) │     ├──────────────────┤
//!                     └──────────────┘     │ levenshtein.rs   │
//!                                          │ (row DP helpers) │
//!                                          └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use triefuzz::{FuzzyTrie, Trie};
//!
//! let mut trie = Trie::new();
//! trie.insert("apple").unwrap();
//! trie.insert("apply").unwrap();
//! assert_eq!(trie.complete("app"), vec!["apple", "apply"]);
//!
//! let fuzzy = FuzzyTrie::from_list(["apple", "abple", "apples", "apps", "app"]).unwrap();
//! let mut hits = fuzzy.fuzzy_search("apple", 1, None, false).unwrap();
//! hits.sort();
//! assert_eq!(hits, vec!["abple", "apple", "apples"]);
//! ```

pub mod config;
pub mod contracts;
mod error;
pub mod fuzzy;
mod loader;
mod normalize;
pub mod testing;
pub mod trie;

// Re-exports for public API
pub use config::TrieConfig;
pub use error::{ErrorKind, Result, TrieError};
pub use fuzzy::{FuzzyMatch, FuzzyQuery, FuzzyTrie};
pub use fuzzy::levenshtein::levenshtein_distance;
pub use loader::tokenize;
pub use normalize::fold;
pub use trie::{Trie, TrieNode, TrieStats};
