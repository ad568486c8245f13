//! Enemy AI tests.
//!
//! Data-authored patterns on small hand-built templates, and the built-in
//! slime boss split threshold.

use std::sync::Arc;

use spire_sim::ai::decide;
use spire_sim::content::{AiSpec, Catalog, EnemyKind, EnemyTemplate, HpRange, Intent, Move};
use spire_sim::core::{EntityId, GameRng};
use spire_sim::entities::{EnemyFlags, EnemyInstance};

fn three_moves(ai: AiSpec) -> EnemyInstance {
    let template = EnemyTemplate::new("dummy", "Dummy", EnemyKind::Normal, 1, HpRange::Fixed(40))
        .with_move(Move::attack("hit", "Hit", 6))
        .with_move(Move::new("guard", "Guard", Intent::Defend).with_block(5))
        .with_move(Move::attack("smash", "Smash", 12))
        .with_ai(ai);
    EnemyInstance::with_hp(EntityId(0), Arc::new(template), 40)
}

fn slime_boss(catalog: &Catalog, hp: i32) -> EnemyInstance {
    let template = Arc::clone(catalog.enemy("slime_boss").unwrap());
    let mut boss = EnemyInstance::with_hp(EntityId(0), template, 140);
    boss.vitals.hp = hp;
    boss
}

fn move_id(enemy: &EnemyInstance, index: usize) -> &str {
    enemy.template.moveset[index].id.as_str()
}

#[test]
fn test_sequential_cycles_through_moveset() {
    let enemy = three_moves(AiSpec::Sequential);
    let mut rng = GameRng::new(1);
    let picks: Vec<usize> = (0..7)
        .map(|turn| decide(&enemy, turn, None, &[], &mut rng).unwrap())
        .collect();
    assert_eq!(picks, [0, 1, 2, 0, 1, 2, 0]);
}

#[test]
fn test_weighted_opens_with_first_move_and_never_repeats() {
    let enemy = three_moves(AiSpec::Weighted);
    let mut rng = GameRng::new(42);

    let mut last = decide(&enemy, 0, None, &[], &mut rng).unwrap();
    assert_eq!(last, 0);
    let mut counts = [0u32; 3];
    for turn in 1..600 {
        let pick = decide(&enemy, turn, Some(last), &[], &mut rng).unwrap();
        assert_ne!(pick, last, "turn {turn}");
        counts[pick] += 1;
        last = pick;
    }
    assert!(counts.iter().all(|&c| c > 0), "{counts:?}");
}

#[test]
fn test_first_then_random() {
    let enemy = three_moves(AiSpec::FirstThenRandom);
    let mut rng = GameRng::new(3);
    assert_eq!(decide(&enemy, 0, None, &[], &mut rng).unwrap(), 0);

    let seen: std::collections::BTreeSet<usize> = (1..200)
        .map(|turn| decide(&enemy, turn, None, &[], &mut rng).unwrap())
        .collect();
    assert_eq!(seen.len(), 3);
}

#[test]
fn test_phase_shift_switches_halves() {
    let template = EnemyTemplate::new("shifter", "Shifter", EnemyKind::Normal, 1, HpRange::Fixed(30))
        .with_move(Move::attack("a", "A", 1))
        .with_move(Move::attack("b", "B", 2))
        .with_move(Move::attack("c", "C", 3))
        .with_move(Move::attack("d", "D", 4))
        .with_ai(AiSpec::PhaseShift { split_turn: 3 });
    let enemy = EnemyInstance::with_hp(EntityId(0), Arc::new(template), 30);
    let mut rng = GameRng::new(1);

    let picks: Vec<&str> = (0..7)
        .map(|turn| move_id(&enemy, decide(&enemy, turn, None, &[], &mut rng).unwrap()))
        .collect();
    assert_eq!(picks, ["a", "b", "a", "c", "d", "c", "d"]);
}

#[test]
fn test_slime_boss_holds_above_half() {
    let catalog = Catalog::base();
    let mut rng = GameRng::new(9);
    for hp in [140, 100, 71] {
        let boss = slime_boss(&catalog, hp);
        for turn in 0..6 {
            let pick = decide(&boss, turn, None, &[], &mut rng).unwrap();
            assert_ne!(move_id(&boss, pick), "split", "hp {hp} turn {turn}");
        }
    }
}

#[test]
fn test_slime_boss_splits_at_exactly_half() {
    let catalog = Catalog::base();
    let mut rng = GameRng::new(9);
    for hp in [70, 40, 1] {
        let boss = slime_boss(&catalog, hp);
        let pick = decide(&boss, 2, None, &[], &mut rng).unwrap();
        assert_eq!(move_id(&boss, pick), "split", "hp {hp}");
    }
}

#[test]
fn test_slime_boss_splits_only_once() {
    let catalog = Catalog::base();
    let mut rng = GameRng::new(9);
    let mut boss = slime_boss(&catalog, 50);
    boss.flags.insert(EnemyFlags::HAS_SPLIT);

    let picks: Vec<&str> = (0..3)
        .map(|turn| move_id(&boss, decide(&boss, turn, None, &[], &mut rng).unwrap()))
        .collect();
    assert_eq!(picks, ["goop_spray", "preparing", "slam"]);
}

#[test]
fn test_every_base_enemy_has_a_legal_opening() {
    let catalog = Catalog::base();
    let mut rng = GameRng::new(5);
    for template in catalog.enemies().iter() {
        let hp = template.hp.min().max(1);
        let enemy = EnemyInstance::with_hp(EntityId(0), Arc::clone(template), hp);
        let group = vec![enemy.clone()];
        let pick = decide(&enemy, 0, None, &group, &mut rng);
        assert!(pick.is_ok_and(|i| i < template.moveset.len()), "{}", template.id);
    }
}
