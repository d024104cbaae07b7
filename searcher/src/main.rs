use anyhow::{anyhow, Result};
use clap::Parser;
use engine::persist::{load_index, load_meta, IndexPaths};
use engine::{normalize, top_docs, KeywordIndex, NoiseWords, RESULT_LIMIT};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use std::io::{self, BufRead};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "searcher")]
#[command(about = "Answer two-keyword searches against a saved index", long_about = None)]
struct Args {
    /// Index directory produced by the indexer
    #[arg(long, default_value = "./index")]
    index: PathBuf,
    /// Maximum number of documents to return
    #[arg(long, default_value_t = RESULT_LIMIT)]
    limit: usize,
    /// Emit results as JSON
    #[arg(long)]
    json: bool,
    /// Two keywords for a one-shot search; omit for an interactive prompt
    keywords: Vec<String>,
}

#[derive(Serialize)]
struct SearchOutput {
    keywords: [String; 2],
    results: Vec<String>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let paths = IndexPaths::new(&args.index);
    let index = load_index(&paths)?;
    if let Ok(meta) = load_meta(&paths) {
        tracing::info!(
            num_docs = meta.num_docs,
            num_keywords = meta.num_keywords,
            created_at = %meta.created_at,
            "index loaded"
        );
    }

    match args.keywords.len() {
        0 => repl(&index, args.limit, args.json),
        2 => answer(&index, &args.keywords[0], &args.keywords[1], args.limit, args.json),
        n => Err(anyhow!("expected exactly two keywords, got {n}")),
    }
}

fn repl(index: &KeywordIndex, limit: usize, json: bool) -> Result<()> {
    println!("Enter two keywords per line (exit to quit):");
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }
        match split_keywords(line) {
            Some((raw1, raw2)) => answer(index, raw1, raw2, limit, json)?,
            None => eprintln!("expected two keywords"),
        }
    }
    Ok(())
}

fn answer(index: &KeywordIndex, raw1: &str, raw2: &str, limit: usize, json: bool) -> Result<()> {
    let (kw1, kw2) = query_keywords(raw1, raw2);
    let results = top_docs(index, &kw1, &kw2, limit);
    if json {
        let output = SearchOutput {
            keywords: [kw1, kw2],
            results,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else if results.is_empty() {
        println!("no matches");
    } else {
        for (rank, doc) in results.iter().enumerate() {
            println!("{}. {doc}", rank + 1);
        }
    }
    Ok(())
}

fn split_keywords(line: &str) -> Option<(&str, &str)> {
    let mut words = line.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some(first), Some(second), None) => Some((first, second)),
        _ => None,
    }
}

/// Normalize raw query input the way indexing does, minus noise filtering.
/// A token that cannot become a keyword maps to the empty string, which
/// matches no posting list.
fn query_keywords(raw1: &str, raw2: &str) -> (String, String) {
    let no_noise = NoiseWords::default();
    (
        normalize(raw1, &no_noise).unwrap_or_default(),
        normalize(raw2, &no_noise).unwrap_or_default(),
    )
}
