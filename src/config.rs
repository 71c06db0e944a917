// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Construction options for [`Trie`](crate::Trie) and [`FuzzyTrie`](crate::FuzzyTrie).

use serde::{Deserialize, Serialize};

/// Options fixed at construction time.
///
/// Derives serde traits so hosts can embed it in their own config files:
///
/// ```
/// # use triefuzz::TrieConfig;
/// let config = TrieConfig::default().case_folding(true);
/// assert!(config.case_folding);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrieConfig {
    /// Lowercase every inserted and queried string before traversal.
    pub case_folding: bool,
}

impl TrieConfig {
    pub fn case_folding(mut self, enabled: bool) -> Self {
        self.case_folding = enabled;
        self
    }
}
