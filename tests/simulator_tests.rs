//! Headless simulator tests.
//!
//! Replays from a seed, run bookkeeping and batch aggregation. The
//! thousand-run timing check is ignored by default; run it with
//! `cargo test --release -- --ignored`.

use std::sync::Arc;
use std::time::{Duration, Instant};

use spire_sim::content::{Catalog, EnemyKind, EnemyTemplate, HpRange, Intent, Move};
use spire_sim::core::{BalanceOptions, CombatOptions, GameRng, RunConfig, SimError};
use spire_sim::encounters::{boss_encounter, generate_encounter, Encounter, EncounterKind};
use spire_sim::entities::Player;
use spire_sim::relics::RelicSet;
use spire_sim::sim::{run_balance_report, simulate_combat, simulate_run};

fn short_run(seed: u64) -> RunConfig {
    RunConfig::default().with_seed(seed).with_floors(4)
}

#[test]
fn test_combat_replays_from_seed() {
    let catalog = Catalog::base();
    let deck = catalog.starter_deck().unwrap();
    let encounter = generate_encounter(&catalog, 1, 3, false, &mut GameRng::new(21)).unwrap();
    let options = CombatOptions::default().with_seed(99);

    let a = simulate_combat(&catalog, Player::new(80, 80), &deck, &encounter, RelicSet::new(), &options).unwrap();
    let b = simulate_combat(&catalog, Player::new(80, 80), &deck, &encounter, RelicSet::new(), &options).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.enemies.len(), encounter.templates.len());
    assert!(a.cards_played > 0);
    assert_eq!(a.cards_played, a.card_plays.values().sum::<u32>());
}

#[test]
fn test_result_hp_matches_outcome() {
    let catalog = Catalog::base();
    let deck = catalog.starter_deck().unwrap();
    let mut rng = GameRng::new(4);

    for seed in 0..20 {
        let encounter = generate_encounter(&catalog, 1, seed as u32 + 1, false, &mut rng).unwrap();
        let options = CombatOptions::default().with_seed(seed);
        let result =
            simulate_combat(&catalog, Player::new(80, 80), &deck, &encounter, RelicSet::new(), &options).unwrap();
        if result.won {
            assert!(result.hp_remaining > 0 && result.hp_remaining <= 80);
            assert!(result.enemies_killed >= 1);
        } else {
            assert_eq!(result.hp_remaining, 0);
        }
        assert!(result.turns >= 1);
    }
}

#[test]
fn test_boss_fight_is_hard_for_a_starter_deck() {
    let catalog = Catalog::base();
    let deck = catalog.starter_deck().unwrap();
    let encounter = boss_encounter(&catalog, 3, &mut GameRng::new(1)).unwrap();
    let result = simulate_combat(
        &catalog,
        Player::new(20, 80),
        &deck,
        &encounter,
        RelicSet::new(),
        &CombatOptions::default(),
    )
    .unwrap();
    assert!(!result.won);
    assert_eq!(result.hp_remaining, 0);
}

#[test]
fn test_run_replays_from_seed() {
    let catalog = Catalog::base();
    let config = short_run(1234);
    let a = simulate_run(&catalog, &config).unwrap();
    let b = simulate_run(&catalog, &config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_run_bookkeeping() {
    let catalog = Catalog::base();
    for seed in 0..10 {
        let config = short_run(seed);
        let run = simulate_run(&catalog, &config).unwrap();

        let won = run.floors.iter().filter(|f| f.result.won).count() as u32;
        assert_eq!(run.floors_cleared, won);
        assert!(run.floors.len() <= 5);
        assert!(run.deck_size >= 10);
        if run.survived {
            assert_eq!(run.floors.len(), 5);
            assert_eq!(run.floors.last().unwrap().kind, EncounterKind::Boss);
            assert_eq!(run.acts_completed, 1);
            assert!(run.final_hp > 0);
            assert!(run.fatal_floor().is_none());
        } else {
            assert_eq!(run.final_hp, 0);
            assert!(!run.fatal_floor().unwrap().result.won);
        }
        for (i, floor) in run.floors.iter().enumerate() {
            assert_eq!(floor.floor as usize, i + 1);
        }
    }
}

#[test]
fn test_ascension_run_replays_and_reports_level() {
    let catalog = Catalog::base();
    let plain = simulate_run(&catalog, &short_run(77).with_elite_chance(0.0)).unwrap();
    let hard = simulate_run(&catalog, &short_run(77).with_elite_chance(0.0).with_ascension(10)).unwrap();

    assert_eq!(plain.ascension, 0);
    assert_eq!(hard.ascension, 10);
    assert_eq!(hard, simulate_run(&catalog, &short_run(77).with_elite_chance(0.0).with_ascension(10)).unwrap());
    assert_eq!(plain.floors[0].result.enemies, hard.floors[0].result.enemies);
}

#[test]
fn test_ascension_enemy_needs_more_damage() {
    let catalog = Catalog::base();
    let deck = catalog.starter_deck().unwrap();
    let dummy = EnemyTemplate::new("dummy", "Dummy", EnemyKind::Normal, 1, HpRange::Fixed(40))
        .with_move(Move::new("wait", "Wait", Intent::Unknown));
    let encounter = Encounter::new(EncounterKind::Normal, vec![Arc::new(dummy)]);

    let damage_at = |level: u32| {
        let options = CombatOptions::default().with_seed(5).with_ascension(level);
        let result =
            simulate_combat(&catalog, Player::new(80, 80), &deck, &encounter, RelicSet::new(), &options).unwrap();
        assert!(result.won);
        result.damage_dealt
    };
    assert_eq!(damage_at(0), 40);
    assert_eq!(damage_at(1), 44);
    assert_eq!(damage_at(7), 48);
}

#[test]
fn test_ascension_is_echoed_in_report() {
    let catalog = Catalog::base();
    let options = BalanceOptions::default().with_run(short_run(3).with_ascension(7));
    let report = run_balance_report(&catalog, 4, &options);
    assert_eq!(report.ascension, 7);
    assert_eq!(report.completed_runs, 4);
}

#[test]
fn test_parallel_and_sequential_reports_match() {
    let catalog = Catalog::base();
    let options = BalanceOptions::default().with_run(short_run(7));

    let parallel = run_balance_report(&catalog, 24, &options.clone().with_parallel(true));
    let sequential = run_balance_report(&catalog, 24, &options.with_parallel(false));
    assert_eq!(parallel, sequential);
    assert_eq!(parallel.total_runs, 24);
    assert_eq!(parallel.completed_runs, 24);
    assert!((0.0..=1.0).contains(&parallel.win_rate));
    assert!(!parallel.card_play_frequency.is_empty());
}

#[test]
fn test_failed_runs_are_reported_not_averaged() {
    let catalog = Catalog::base();
    let broken = short_run(3).with_relics(["no_such_relic"]);
    let report = run_balance_report(&catalog, 5, &BalanceOptions::default().with_run(broken));

    assert_eq!(report.total_runs, 5);
    assert_eq!(report.completed_runs, 0);
    assert_eq!(report.failed_runs, 5);
    assert_eq!(report.win_rate, 0.0);
    assert_eq!(report.deadliest_enemy, None);
    assert!(report
        .failures
        .iter()
        .all(|f| matches!(f.error, SimError::UnknownReference { .. })));
    let indices: Vec<usize> = report.failures.iter().map(|f| f.index).collect();
    assert_eq!(indices, [0, 1, 2, 3, 4]);
}

#[test]
fn test_report_serializes() {
    let catalog = Catalog::base();
    let report = run_balance_report(&catalog, 4, &BalanceOptions::default().with_run(short_run(5)));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["total_runs"], 4);
    assert!(json["card_play_frequency"].is_array());
}

#[test]
#[ignore]
fn test_thousand_runs_within_budget() {
    let catalog = Catalog::base();
    let options = BalanceOptions::default().with_seed(2024);

    let start = Instant::now();
    let report = run_balance_report(&catalog, 1000, &options);
    let elapsed = start.elapsed();

    assert_eq!(report.completed_runs, 1000);
    assert!(elapsed < Duration::from_secs(5), "took {elapsed:?}");
}
