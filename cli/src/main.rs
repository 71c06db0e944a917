// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use serde::Serialize;
use triefuzz::{FuzzyQuery, FuzzyTrie, TrieConfig};

mod cli;
mod display;

use cli::{Cli, Commands};
use display::*;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = TrieConfig::default().case_folding(cli.ignore_case);
    let trie = FuzzyTrie::from_file_with_config(&cli.words, config)
        .with_context(|| format!("loading {}", cli.words.display()))?;
    debug!("loaded {} words from {}", trie.len(), cli.words.display());

    match cli.command {
        Commands::Find { words } => run_find(&trie, &words, cli.json),
        Commands::Complete { prefix, limit } => run_complete(&trie, &prefix, limit, cli.json),
        Commands::Fuzzy {
            target,
            threshold,
            num_return,
            sort,
        } => {
            let mut query = FuzzyQuery::new(threshold).sort_by_distance(sort);
            query.limit = num_return;
            run_fuzzy(&trie, &target, &query, cli.json)
        }
        Commands::Stats => run_stats(&trie, cli.json),
    }
}

#[derive(Serialize)]
struct Lookup<'a> {
    word: &'a str,
    found: bool,
}

fn run_find(trie: &FuzzyTrie, words: &[String], json: bool) -> Result<()> {
    let lookups = words
        .iter()
        .map(|word| Ok(Lookup { word, found: trie.find(word)? }))
        .collect::<Result<Vec<_>>>()?;

    if json {
        return print_json(&lookups);
    }
    for lookup in &lookups {
        println!("{} {}", found_marker(lookup.found), lookup.word);
    }
    Ok(())
}

fn run_complete(trie: &FuzzyTrie, prefix: &str, limit: Option<usize>, json: bool) -> Result<()> {
    let mut words = trie.complete(prefix);
    let total = words.len();
    if let Some(limit) = limit {
        words.truncate(limit);
    }

    if json {
        return print_json(&words);
    }
    for word in &words {
        println!("{}", word);
    }
    println!("{}", summary(total, "completion", "completions"));
    Ok(())
}

fn run_fuzzy(trie: &FuzzyTrie, target: &str, query: &FuzzyQuery, json: bool) -> Result<()> {
    let matches = trie.fuzzy_matches(target, query)?;

    if json {
        return print_json(&matches);
    }
    let width = matches.iter().map(|m| m.word.chars().count()).max().unwrap_or(0);
    for m in &matches {
        println!("{}  {}", pad_right(&m.word, width), distance_badge(m.distance));
    }
    println!("{}", summary(matches.len(), "match", "matches"));
    Ok(())
}

fn run_stats(trie: &FuzzyTrie, json: bool) -> Result<()> {
    let stats = trie.stats();

    if json {
        return print_json(&stats);
    }
    section_top("TRIE");
    stat_row("words", stats.words);
    stat_row("nodes", stats.nodes);
    stat_row("max depth", stats.max_depth);
    stat_row("case folding", if trie.case_folding() { "on" } else { "off" });
    section_bot();
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{}", out);
    Ok(())
}
