//! Batch balance reports.
//!
//! Each run gets its own sub-seed derived from the batch seed and its
//! index, so a report is the same whether the runs execute in parallel
//! or one after another.

use std::cmp::Reverse;

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::content::Catalog;
use crate::core::{BalanceOptions, CardId, EnemyId, GameRng, SimError};

use super::run::{simulate_run, RunResult};

/// A run that could not be simulated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunFailure {
    pub index: usize,
    pub seed: u64,
    pub error: SimError,
}

/// Aggregates over a batch of runs. Failed runs are listed but excluded
/// from every average.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BalanceReport {
    pub ascension: u32,
    pub total_runs: usize,
    pub completed_runs: usize,
    pub failed_runs: usize,
    pub win_rate: f64,
    pub avg_floors_cleared: f64,
    pub avg_turns_per_combat: f64,
    /// Template present in the most fatal encounters, ties broken by id.
    pub deadliest_enemy: Option<EnemyId>,
    /// Ending HP averaged over surviving runs only.
    pub avg_hp_at_end: f64,
    /// Plays per card over every combat, most played first, ties by id.
    pub card_play_frequency: Vec<(CardId, u64)>,
    pub failures: Vec<RunFailure>,
}

/// Seed of run `index` in a batch seeded with `seed`.
#[must_use]
pub fn run_seed(seed: u64, index: usize) -> u64 {
    GameRng::derive(seed, index as u64).next_seed()
}

/// Simulate `runs` independent runs and aggregate them.
pub fn run_balance_report(catalog: &Catalog, runs: usize, options: &BalanceOptions) -> BalanceReport {
    let batch_seed = options.run.seed;
    let simulate = |index: usize| {
        let seed = run_seed(batch_seed, index);
        let config = options.run.clone().with_seed(seed);
        (index, seed, simulate_run(catalog, &config))
    };

    let results: Vec<(usize, u64, Result<RunResult, SimError>)> = if options.parallel {
        (0..runs).into_par_iter().map(simulate).collect()
    } else {
        (0..runs).map(simulate).collect()
    };

    let mut report = aggregate(results);
    report.ascension = options.run.ascension;
    tracing::info!(
        ascension = report.ascension,
        runs = report.total_runs,
        failed = report.failed_runs,
        win_rate = report.win_rate,
        avg_floors = report.avg_floors_cleared,
        deadliest = report.deadliest_enemy.as_ref().map(EnemyId::as_str),
        "balance report"
    );
    report
}

fn mean(total: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

fn aggregate(results: Vec<(usize, u64, Result<RunResult, SimError>)>) -> BalanceReport {
    let total_runs = results.len();
    let mut failures = Vec::new();
    let mut completed = 0usize;
    let mut wins = 0usize;
    let mut floors_cleared = 0u64;
    let mut combats = 0usize;
    let mut turns = 0u64;
    let mut hp_at_end = 0i64;
    let mut losses: FxHashMap<EnemyId, u32> = FxHashMap::default();
    let mut plays: FxHashMap<CardId, u64> = FxHashMap::default();

    for (index, seed, result) in results {
        let run = match result {
            Ok(run) => run,
            Err(error) => {
                tracing::warn!(index, seed, %error, "run failed");
                failures.push(RunFailure { index, seed, error });
                continue;
            }
        };
        completed += 1;
        floors_cleared += u64::from(run.floors_cleared);
        if run.survived {
            wins += 1;
            hp_at_end += i64::from(run.final_hp);
        }
        for floor in &run.floors {
            combats += 1;
            turns += u64::from(floor.result.turns);
            for (card, count) in &floor.result.card_plays {
                *plays.entry(card.clone()).or_insert(0) += u64::from(*count);
            }
        }
        if let Some(fatal) = run.fatal_floor() {
            for enemy in &fatal.result.enemies {
                *losses.entry(enemy.clone()).or_insert(0) += 1;
            }
        }
    }

    let deadliest_enemy = losses
        .into_iter()
        .max_by_key(|(id, count)| (*count, Reverse(id.clone())))
        .map(|(id, _)| id);

    let mut card_play_frequency: Vec<(CardId, u64)> = plays.into_iter().collect();
    card_play_frequency.sort_by(|(a_id, a), (b_id, b)| b.cmp(a).then_with(|| a_id.cmp(b_id)));

    BalanceReport {
        ascension: 0,
        total_runs,
        completed_runs: completed,
        failed_runs: failures.len(),
        win_rate: mean(wins as f64, completed),
        avg_floors_cleared: mean(floors_cleared as f64, completed),
        avg_turns_per_combat: mean(turns as f64, combats),
        deadliest_enemy,
        avg_hp_at_end: mean(hp_at_end as f64, wins),
        card_play_frequency,
        failures,
    }
}
