// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word-file loading.
//!
//! The format is as plain as it gets: UTF-8 text, words separated by any run of
//! whitespace, newlines included. No comments, no escaping, no header.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::{Result, TrieError};

/// Split `text` into whitespace-separated words.
///
/// ```
/// let words: Vec<&str> = triefuzz::tokenize("apps  apple\napply\t").collect();
/// assert_eq!(words, vec!["apps", "apple", "apply"]);
/// ```
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Read every word from `reader`, line by line.
pub(crate) fn read_words<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        words.extend(tokenize(&line?).map(str::to_owned));
    }
    Ok(words)
}

/// Read every word from the file at `path`.
///
/// A missing file is [`TrieError::NotFound`]; any other I/O failure, including
/// invalid UTF-8, is [`TrieError::Io`].
pub(crate) fn read_word_file(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| TrieError::from_io(path.to_path_buf(), e))?;
    let words =
        read_words(BufReader::new(file)).map_err(|e| TrieError::from_io(path.to_path_buf(), e))?;
    debug!("read {} words from {}", words.len(), path.display());
    Ok(words)
}
