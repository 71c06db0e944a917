// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type for trie operations.
//!
//! Absent words are not errors: `find`, `delete` and `complete` report them as
//! `false` or an empty result. Errors are reserved for arguments the call can't
//! act on and for word files that can't be read.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TrieError>;

/// Error returned by trie construction, mutation and queries.
#[derive(Debug, Error)]
pub enum TrieError {
    /// A parameter is out of its accepted range, e.g. an empty word.
    #[error("invalid argument `{param}`: {reason}")]
    InvalidArgument {
        param: &'static str,
        reason: &'static str,
    },
    /// The word file passed to a bulk constructor does not exist.
    #[error("word file not found: {}", path.display())]
    NotFound { path: PathBuf },
    /// The word file exists but could not be read.
    #[error("failed to read word file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A reader handed to [`Trie::from_reader`](crate::Trie::from_reader) failed.
    #[error("failed to read words from reader")]
    Read(#[source] io::Error),
}

/// Discriminant of [`TrieError`] for matching without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    Io,
}

impl TrieError {
    pub(crate) fn empty_word(param: &'static str) -> Self {
        TrieError::InvalidArgument {
            param,
            reason: "must be a non-empty string",
        }
    }

    pub(crate) fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            TrieError::NotFound { path }
        } else {
            TrieError::Io { path, source }
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TrieError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            TrieError::NotFound { .. } => ErrorKind::NotFound,
            TrieError::Io { .. } | TrieError::Read(_) => ErrorKind::Io,
        }
    }
}
