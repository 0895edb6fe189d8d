use anyhow::{Context, Result};
use clap::Parser;
use std::fmt::Display;
use std::io::{self, Read, Write};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info, warn};

mod cli;
mod report;
mod store;

use cli::{AnalyzeArgs, Cli, Commands, HistoryAction, RandomArgs};
use pcrhelper_core::config::{AnalyzerConfig, RandomConfig};
use pcrhelper_core::{analyze, random, AnalysisResult, HistoryStore};
use store::JsonFileStore;

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only results
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let mut store = JsonFileStore::resolve(cli.history_file);
    debug!(path = %store.path().display(), "history store");

    let mut out = io::stdout().lock();
    match cli.command {
        Commands::Analyze(args) => run_analyze(&args, io::stdin().lock(), &mut out, &mut store),
        Commands::Random(args) => run_random(&args, &mut out, &mut store),
        Commands::History { action } => {
            run_history(action.unwrap_or(HistoryAction::List), &mut out, &mut store)
        }
    }
}

fn run_analyze<R, W, S>(args: &AnalyzeArgs, mut input: R, out: &mut W, store: &mut S) -> Result<()>
where
    R: Read,
    W: Write,
    S: HistoryStore,
    S::Error: Display,
{
    let raw = if args.sequence == "-" {
        let mut buf = String::new();
        input
            .read_to_string(&mut buf)
            .context("reading sequence from stdin")?;
        buf
    } else {
        args.sequence.clone()
    };

    let config = AnalyzerConfig {
        max_len: args.max_len,
    };
    let result = pcrhelper_core::analyze_with(&raw, &config)?;
    info!(len = result.length(), outcome = ?result.outcome(), "analysis complete");

    write_result(out, &result, args.json)?;
    if !args.no_history {
        record_history(store, &raw);
    }
    Ok(())
}

fn run_random<W, S>(args: &RandomArgs, out: &mut W, store: &mut S) -> Result<()>
where
    W: Write,
    S: HistoryStore,
    S::Error: Display,
{
    let config = RandomConfig {
        length: args.length as usize,
        seed: args.seed.unwrap_or_else(clock_seed),
    };
    let dna = random::random_dna(&config)?;
    info!(len = dna.len(), seed = config.seed, "generated random sequence");

    if !args.analyze {
        writeln!(out, "{dna}")?;
        return Ok(());
    }

    let result = analyze(&dna);
    write_result(out, &result, args.json)?;
    if !args.no_history {
        record_history(store, dna.as_str());
    }
    Ok(())
}

fn run_history<W: Write>(action: HistoryAction, out: &mut W, store: &mut JsonFileStore) -> Result<()> {
    match action {
        HistoryAction::List => {
            let history = store.load()?;
            write!(out, "{}", report::render_history(&history))?;
        }
        HistoryAction::Clear => {
            store.clear()?;
            info!("history cleared");
        }
    }
    Ok(())
}

/// History is a convenience; failing to update it never fails the command.
fn record_history<S>(store: &mut S, raw: &str)
where
    S: HistoryStore,
    S::Error: Display,
{
    if let Err(e) = store.record(raw) {
        warn!(error = %e, "could not update history");
    }
}

fn write_result<W: Write>(out: &mut W, result: &AnalysisResult, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", report::to_json(result)?)?;
    } else {
        write!(out, "{}", report::render(result))?;
    }
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
