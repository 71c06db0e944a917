// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the triefuzz command-line interface.
//!
//! Every invocation loads one word file and runs one query against it:
//! `find` for exact lookup, `complete` for prefix completion, `fuzzy` for
//! bounded edit-distance search, and `stats` for the trie's shape.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "triefuzz",
    about = "Query a word list with exact, prefix and fuzzy lookups",
    version
)]
pub struct Cli {
    /// Whitespace-separated word file to load
    pub words: PathBuf,

    /// Lowercase the vocabulary and every query
    #[arg(short = 'i', long, global = true)]
    pub ignore_case: bool,

    /// Print results as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether words are stored
    Find {
        /// Words to look up
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// List stored words that extend a prefix
    Complete {
        /// Prefix to complete (empty lists the whole vocabulary)
        #[arg(default_value = "")]
        prefix: String,

        /// Maximum number of completions to print
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Find stored words within an edit distance of a target
    Fuzzy {
        /// Target string
        target: String,

        /// Maximum edit distance
        #[arg(short = 'k', long, default_value = "1")]
        threshold: usize,

        /// Stop after this many matches
        #[arg(short = 'n', long)]
        num_return: Option<usize>,

        /// Order matches by edit distance
        #[arg(short, long)]
        sort: bool,
    },

    /// Show vocabulary and node counts
    Stats,
}
