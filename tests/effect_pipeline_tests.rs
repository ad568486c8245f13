//! Effect pipeline integration tests.
//!
//! These tests pin the damage/block formulas, the per-hit flight and block
//! sequence, and poison decay, and check monotonicity with proptest.

use proptest::prelude::*;
use spire_sim::content::StatusKind;
use spire_sim::effects::{
    apply_damage, apply_status, compute_block, compute_damage, resolve_poison, AttackerMods,
    BlockMods, DefenderMods, Statuses, Vitals,
};

fn attacker(strength: i32, weak: i32) -> AttackerMods {
    AttackerMods { strength, weak }
}

fn vulnerable(stacks: i32) -> DefenderMods {
    DefenderMods { vulnerable: stacks }
}

#[test]
fn test_reference_values() {
    assert_eq!(compute_damage(10, attacker(0, 0), vulnerable(1)), 15);
    assert_eq!(compute_damage(10, attacker(0, 1), vulnerable(0)), 7);
    assert_eq!(compute_damage(10, attacker(2, 1), vulnerable(1)), 13);
    assert_eq!(compute_block(8, BlockMods { dexterity: 0, frail: 1 }), 6);
}

#[test]
fn test_weak_applies_before_vulnerable() {
    // 10 -> weak 7 -> vulnerable 10. Vulnerable first would give 11.
    assert_eq!(compute_damage(10, attacker(0, 1), vulnerable(1)), 10);
}

#[test]
fn test_negative_strength_clamps_to_zero() {
    assert_eq!(compute_damage(3, attacker(-5, 0), vulnerable(0)), 0);
    assert_eq!(compute_block(2, BlockMods { dexterity: -4, frail: 0 }), 0);
}

#[test]
fn test_flight_sequence() {
    let mut target = Vitals {
        flight: 3,
        ..Vitals::new(50, 50)
    };

    apply_damage(&mut target, 10);
    assert_eq!((target.hp, target.flight), (45, 2));
    apply_damage(&mut target, 10);
    apply_damage(&mut target, 10);
    assert_eq!((target.hp, target.flight), (35, 0));
    assert!(target.grounded);

    apply_damage(&mut target, 10);
    assert_eq!(target.hp, 25);
}

#[test]
fn test_multi_hit_consumes_block_mid_sequence() {
    let mut target = Vitals::new(40, 40);
    target.block = 7;

    let first = apply_damage(&mut target, 5);
    assert_eq!((first.blocked, first.hp_lost), (5, 0));
    let second = apply_damage(&mut target, 5);
    assert_eq!((second.blocked, second.hp_lost), (2, 3));
    let third = apply_damage(&mut target, 5);
    assert_eq!((third.blocked, third.hp_lost), (0, 5));
    assert_eq!((target.hp, target.block), (32, 0));
}

#[test]
fn test_hp_never_below_zero() {
    let mut target = Vitals::new(4, 10);
    let hit = apply_damage(&mut target, 30);
    assert_eq!(hit.hp_lost, 4);
    assert_eq!(target.hp, 0);
}

#[test]
fn test_poison_decays_to_zero() {
    let mut vitals = Vitals::new(50, 50);
    vitals.block = 20;
    let mut statuses = Statuses {
        poison: 5,
        ..Statuses::default()
    };

    let lost: i32 = (0..5).map(|_| resolve_poison(&mut vitals, &mut statuses)).sum();
    assert_eq!(lost, 15);
    assert_eq!(vitals.hp, 35);
    assert_eq!(vitals.block, 20);
    assert_eq!(statuses.poison, 0);

    assert_eq!(resolve_poison(&mut vitals, &mut statuses), 0);
    assert_eq!(statuses.poison, 0);
}

#[test]
fn test_artifact_blocks_one_debuff() {
    let mut statuses = Statuses {
        artifact: 1,
        ..Statuses::default()
    };
    assert!(!apply_status(&mut statuses, StatusKind::Vulnerable, 2));
    assert_eq!((statuses.vulnerable, statuses.artifact), (0, 0));
    assert!(apply_status(&mut statuses, StatusKind::Vulnerable, 2));
    assert_eq!(statuses.vulnerable, 2);
    assert!(apply_status(&mut statuses, StatusKind::Strength, 3));
    assert_eq!(statuses.strength, 3);
}

proptest! {
    #[test]
    fn prop_damage_monotonic_in_base(
        base in 0i32..200,
        extra in 0i32..50,
        strength in -20i32..20,
        weak in 0i32..2,
        vuln in 0i32..2,
    ) {
        let a = attacker(strength, weak);
        let d = vulnerable(vuln);
        prop_assert!(compute_damage(base, a, d) <= compute_damage(base + extra, a, d));
    }

    #[test]
    fn prop_damage_monotonic_in_strength(
        base in 0i32..200,
        strength in -20i32..20,
        extra in 0i32..20,
        weak in 0i32..2,
        vuln in 0i32..2,
    ) {
        let d = vulnerable(vuln);
        prop_assert!(
            compute_damage(base, attacker(strength, weak), d)
                <= compute_damage(base, attacker(strength + extra, weak), d)
        );
    }

    #[test]
    fn prop_damage_never_negative(base in -50i32..200, strength in -100i32..100, weak in 0i32..3, vuln in 0i32..3) {
        prop_assert!(compute_damage(base, attacker(strength, weak), vulnerable(vuln)) >= 0);
    }

    #[test]
    fn prop_fixed_multiplier_order(base in 0i32..200, strength in 0i32..30) {
        let raw = base + strength;
        let expected = (raw * 3 / 4) * 3 / 2;
        prop_assert_eq!(compute_damage(base, attacker(strength, 1), vulnerable(1)), expected);
    }

    #[test]
    fn prop_hits_never_raise_hp(hp in 1i32..100, block in 0i32..50, flight in 0i32..4, hits in proptest::collection::vec(0i32..40, 1..6)) {
        let mut target = Vitals { block, flight, ..Vitals::new(hp, hp) };
        let mut last = target.hp;
        for amount in hits {
            apply_damage(&mut target, amount);
            prop_assert!(target.hp <= last);
            prop_assert!(target.hp >= 0 && target.block >= 0 && target.flight >= 0);
            last = target.hp;
        }
    }
}
