//! balance-report: run a batch of headless runs and print the aggregates.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use spire_sim::content::{Catalog, OverrideStore};
use spire_sim::core::{BalanceOptions, RunConfig};
use spire_sim::sim::{run_balance_report, BalanceReport};

/// Simulate many runs with a greedy player and report balance statistics
#[derive(Parser, Debug)]
#[command(name = "balance-report")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of runs
    #[arg(short = 'n', long, default_value = "1000")]
    runs: usize,

    /// Batch seed (overrides the config file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Acts per run
    #[arg(long)]
    acts: Option<u32>,

    /// Normal floors per act
    #[arg(long)]
    floors: Option<u32>,

    /// Ascension level (0-10)
    #[arg(short, long)]
    ascension: Option<u32>,

    /// Run on one thread
    #[arg(long)]
    sequential: bool,

    /// JSON file with `run` settings and content `overrides`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

/// Contents of `--config`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    run: RunConfig,
    overrides: OverrideStore,
}

fn load_config(path: Option<&PathBuf>) -> Result<ConfigFile, String> {
    let Some(path) = path else {
        return Ok(ConfigFile::default());
    };
    let text = fs::read_to_string(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("failed to parse {}: {e}", path.display()))
}

fn print_text(report: &BalanceReport, elapsed_ms: u128) {
    println!("ascension:            {}", report.ascension);
    println!("runs:                 {} ({} failed)", report.total_runs, report.failed_runs);
    println!("win rate:             {:.1}%", report.win_rate * 100.0);
    println!("avg floors cleared:   {:.2}", report.avg_floors_cleared);
    println!("avg turns per combat: {:.2}", report.avg_turns_per_combat);
    println!("avg hp at end:        {:.1}", report.avg_hp_at_end);
    match &report.deadliest_enemy {
        Some(enemy) => println!("deadliest enemy:      {enemy}"),
        None => println!("deadliest enemy:      none"),
    }
    println!("most played cards:");
    for (card, count) in report.card_play_frequency.iter().take(10) {
        println!("  {card:<20} {count}");
    }
    for failure in &report.failures {
        println!("failed run {} (seed {}): {}", failure.index, failure.seed, failure.error);
    }
    println!("elapsed:              {elapsed_ms} ms");
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let file = match load_config(args.config.as_ref()) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let base = Catalog::base();
    let catalog = if file.overrides.is_empty() {
        base
    } else {
        let merged = base.with_overrides(&file.overrides);
        for err in &merged.rejected {
            eprintln!("warning: {err}");
        }
        merged.catalog
    };
    for err in catalog.validate_references() {
        eprintln!("warning: {err}");
    }

    let mut run = file.run;
    if let Some(seed) = args.seed {
        run.seed = seed;
    }
    if let Some(acts) = args.acts {
        run.acts = acts;
    }
    if let Some(floors) = args.floors {
        run.floors_per_act = floors;
    }
    if let Some(level) = args.ascension {
        run.ascension = level;
    }
    let options = BalanceOptions::default().with_run(run).with_parallel(!args.sequential);

    let start = Instant::now();
    let report = run_balance_report(&catalog, args.runs, &options);
    let elapsed = start.elapsed().as_millis();

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_text(&report, elapsed);
    }

    if report.completed_runs == 0 && report.total_runs > 0 {
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
