use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use word_grid::config::SearchConfig;
use word_grid::puzzle::{load_puzzle, save_dictionary, Puzzle};
use word_grid::search::batch::{try_find_all, try_find_all_par};
use word_grid::search::trace::{try_build_trace, TraceGraph, TraceNode};
use word_grid::search::{try_find_path, Strategy};
use word_grid::word::SearchWord;
use word_grid::Cell;

#[derive(Parser)]
#[command(name = "word_grid")]
#[command(about = "Find dictionary words on a 4x4 letter board with DFS or BFS")]
#[command(version)]
struct Cli {
    /// JSON search config; flags below override it.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// dfs or bfs
    #[arg(long, global = true)]
    strategy: Option<Strategy>,

    /// Print machine-readable JSON on stdout.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search every dictionary word on the board.
    All {
        file: PathBuf,
        /// Spread words over all cores.
        #[arg(long)]
        parallel: bool,
    },
    /// Search one word; a hit not yet in the dictionary is added to it.
    Find {
        file: PathBuf,
        word: String,
        /// Print the BFS tree after a breadth-first hit.
        #[arg(long)]
        trace: bool,
        /// Write the updated dictionary back into the board file.
        #[arg(long)]
        save: bool,
    },
    /// Print the BFS tree for a word.
    Trace { file: PathBuf, word: String },
}

#[derive(Serialize)]
struct AllReport<'a> {
    strategy: Strategy,
    checked: usize,
    found: Vec<&'a str>,
    elapsed_ms: u128,
}

#[derive(Serialize)]
struct FindReport<'a> {
    word: &'a str,
    strategy: Strategy,
    found: bool,
    path: Option<&'a [Cell]>,
    added_to_dictionary: bool,
    elapsed_ms: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<&'a TraceGraph>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("word_grid=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        Some(path) => SearchConfig::from_json_file(path)?,
        None => SearchConfig::default(),
    };
    if let Some(strategy) = cli.strategy {
        cfg.strategy = strategy;
    }

    match &cli.command {
        Command::All { file, parallel } => {
            cfg.parallel |= *parallel;
            run_all(file, &cfg, cli.json)
        }
        Command::Find {
            file,
            word,
            trace,
            save,
        } => run_find(file, word, *trace, *save, &cfg, cli.json),
        Command::Trace { file, word } => run_trace(file, word, &cfg, cli.json),
    }
}

fn load(file: &Path) -> anyhow::Result<Puzzle> {
    let puzzle =
        load_puzzle(file).with_context(|| format!("loading board file {}", file.display()))?;
    info!(
        words = puzzle.dictionary.len(),
        file = %file.display(),
        "board file loaded"
    );
    Ok(puzzle)
}

fn run_all(file: &Path, cfg: &SearchConfig, json: bool) -> anyhow::Result<()> {
    let puzzle = load(file)?;
    let words = puzzle.dictionary.words();

    let t0 = Instant::now();
    let found = if cfg.parallel {
        try_find_all_par(&puzzle.grid, words, cfg.strategy, cfg.limits)?
    } else {
        try_find_all(&puzzle.grid, words, cfg.strategy, cfg.limits)?
    };
    let elapsed_ms = t0.elapsed().as_millis();

    if json {
        let report = AllReport {
            strategy: cfg.strategy,
            checked: words.len(),
            found: found.iter().map(String::as_str).collect(),
            elapsed_ms,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", puzzle.grid);
    println!("Searching all words using {}...", cfg.strategy);
    println!("Words found ({}):", found.len());
    for word in &found {
        println!("{word}");
    }
    println!("Total time: {elapsed_ms} ms");
    Ok(())
}

fn run_find(
    file: &Path,
    raw: &str,
    want_trace: bool,
    save: bool,
    cfg: &SearchConfig,
    json: bool,
) -> anyhow::Result<()> {
    let Some(word) = SearchWord::new(raw.trim()) else {
        bail!("enter a word to search for");
    };
    let word = word.to_string();
    let mut puzzle = load(file)?;

    let t0 = Instant::now();
    let path = try_find_path(&puzzle.grid, &word, cfg.strategy, cfg.limits)?;
    let elapsed_ms = t0.elapsed().as_millis();

    let found = path.is_some();
    let added = found && cfg.add_found_words && puzzle.dictionary.insert(&word);
    if added && save {
        save_dictionary(file, &puzzle.dictionary)
            .with_context(|| format!("saving dictionary to {}", file.display()))?;
        info!(%word, file = %file.display(), "dictionary saved");
    }

    let trace = if found && want_trace && cfg.strategy == Strategy::BreadthFirst {
        Some(try_build_trace(&puzzle.grid, &word, cfg.limits)?)
    } else {
        None
    };

    if json {
        let report = FindReport {
            word: &word,
            strategy: cfg.strategy,
            found,
            path: path.as_deref(),
            added_to_dictionary: added,
            elapsed_ms,
            trace: trace.as_ref(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Searching for '{word}' using {}...", cfg.strategy);
    match &path {
        Some(cells) => {
            let steps: Vec<String> = cells.iter().map(Cell::to_string).collect();
            println!("'{word}' was found on the board: {}", steps.join(" -> "));
            if added {
                println!("'{word}' was added to the dictionary.");
            }
        }
        None => println!("'{word}' was NOT found on the board."),
    }
    if let Some(graph) = &trace {
        print_trace(graph);
    }
    println!("Search time: {elapsed_ms} ms");
    Ok(())
}

fn run_trace(file: &Path, word: &str, cfg: &SearchConfig, json: bool) -> anyhow::Result<()> {
    let puzzle = load(file)?;
    let graph = try_build_trace(&puzzle.grid, word, cfg.limits)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&graph)?);
    } else {
        print_trace(&graph);
    }
    Ok(())
}

fn print_trace(graph: &TraceGraph) {
    println!("BFS tree for '{}':", graph.word);
    for root in graph.roots() {
        print_subtree(graph, root, 1);
    }
    for start in &graph.starts {
        let outcome = if start.reached_last_letter {
            "reached last letter"
        } else {
            "exhausted"
        };
        println!("start {}: {} nodes, {outcome}", start.cell, start.nodes);
    }
}

fn print_subtree(graph: &TraceGraph, node: &TraceNode, depth: usize) {
    println!("{}{} {}", "  ".repeat(depth), node.id.cell, node.letter);
    for child in graph.children_of(node.id) {
        print_subtree(graph, child, depth + 1);
    }
}
