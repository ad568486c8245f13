//! Relic trigger tests.
//!
//! Counter thresholds, once-per-combat gates and turn requirements, driven
//! through `RelicSet` with relics from the base catalog.

use spire_sim::content::{Catalog, RelicTrigger};
use spire_sim::core::RelicId;
use spire_sim::relics::{RelicSet, TriggerContext};

fn holding(ids: &[&str]) -> RelicSet {
    let catalog = Catalog::base();
    let ids: Vec<RelicId> = ids.iter().map(|id| RelicId::new(id)).collect();
    RelicSet::from_ids(&catalog, &ids).unwrap()
}

#[test]
fn test_pen_nib_fires_on_tenth_attack_only() {
    let mut relics = holding(&["pen_nib"]);
    let cx = TriggerContext::new(1);

    for attack in 1..=9 {
        let fx = relics.trigger(RelicTrigger::AttackPlayed, &cx);
        assert!(!fx.double_damage, "attack {attack}");
    }
    let tenth = relics.trigger(RelicTrigger::AttackPlayed, &cx);
    assert!(tenth.double_damage);
    assert_eq!(relics.get("pen_nib").unwrap().counter, 0);

    // The counter starts over after firing.
    for _ in 1..=9 {
        assert!(!relics.trigger(RelicTrigger::AttackPlayed, &cx).double_damage);
    }
    assert!(relics.trigger(RelicTrigger::AttackPlayed, &cx).double_damage);
}

#[test]
fn test_counters_survive_turns_unless_reset_each_turn() {
    let mut relics = holding(&["pen_nib", "shuriken"]);
    let cx = TriggerContext::new(1);

    relics.trigger(RelicTrigger::AttackPlayed, &cx);
    relics.trigger(RelicTrigger::AttackPlayed, &cx);
    relics.end_turn();

    assert_eq!(relics.get("pen_nib").unwrap().counter, 2);
    assert_eq!(relics.get("shuriken").unwrap().counter, 0);
}

#[test]
fn test_shuriken_needs_three_attacks_in_one_turn() {
    let mut relics = holding(&["shuriken"]);
    let cx = TriggerContext::new(1);

    assert_eq!(relics.trigger(RelicTrigger::AttackPlayed, &cx).strength, 0);
    assert_eq!(relics.trigger(RelicTrigger::AttackPlayed, &cx).strength, 0);
    relics.end_turn();
    assert_eq!(relics.trigger(RelicTrigger::AttackPlayed, &cx).strength, 0);
    assert_eq!(relics.trigger(RelicTrigger::AttackPlayed, &cx).strength, 0);
    assert_eq!(relics.trigger(RelicTrigger::AttackPlayed, &cx).strength, 1);
}

#[test]
fn test_combat_reset_clears_counters_and_used_flags() {
    let mut relics = holding(&["pen_nib", "centennial_puzzle"]);
    let cx = TriggerContext::new(1);

    for _ in 0..4 {
        relics.trigger(RelicTrigger::AttackPlayed, &cx);
    }
    assert_eq!(relics.trigger(RelicTrigger::FirstHpLoss, &cx).draw, 3);
    assert_eq!(relics.trigger(RelicTrigger::FirstHpLoss, &cx).draw, 0);

    relics.reset_for_combat();
    assert_eq!(relics.get("pen_nib").unwrap().counter, 0);
    assert!(!relics.get("centennial_puzzle").unwrap().used);
    assert_eq!(relics.trigger(RelicTrigger::FirstHpLoss, &cx).draw, 3);
}

#[test]
fn test_turn_gated_relics() {
    let mut relics = holding(&["lantern", "horn_cleat"]);

    let first = relics.trigger(RelicTrigger::TurnStart, &TriggerContext::new(1));
    assert_eq!((first.energy, first.block), (1, 0));
    let second = relics.trigger(RelicTrigger::TurnStart, &TriggerContext::new(2));
    assert_eq!((second.energy, second.block), (0, 14));
    let third = relics.trigger(RelicTrigger::TurnStart, &TriggerContext::new(3));
    assert!(third.is_empty());
}

#[test]
fn test_effects_of_one_trigger_add_up() {
    let mut relics = holding(&["anchor", "vajra", "oddly_smooth_stone", "blood_vial"]);
    let fx = relics.trigger(RelicTrigger::CombatStart, &TriggerContext::new(1));

    assert_eq!(fx.block, 10);
    assert_eq!(fx.strength, 1);
    assert_eq!(fx.dexterity, 1);
    assert_eq!(fx.heal, 2);
    assert_eq!(fx.fired, 4);
}

#[test]
fn test_conditional_effects_read_the_context() {
    let mut relics = holding(&["meat_on_the_bone", "orichalcum"]);

    let healthy = TriggerContext::new(3).with_vitals(60, 80, 0);
    assert_eq!(relics.trigger(RelicTrigger::CombatEnd, &healthy).heal, 0);
    let hurt = TriggerContext::new(3).with_vitals(40, 80, 0);
    assert_eq!(relics.trigger(RelicTrigger::CombatEnd, &hurt).heal, 12);

    let blocking = TriggerContext::new(3).with_vitals(40, 80, 5);
    assert_eq!(relics.trigger(RelicTrigger::TurnEnd, &blocking).block, 0);
    assert_eq!(relics.trigger(RelicTrigger::TurnEnd, &hurt).block, 6);
}

#[test]
fn test_passive_relics_never_fire_as_triggers() {
    let mut relics = holding(&["cursed_key", "paper_phrog"]);
    let cx = TriggerContext::new(1);

    assert!(relics.trigger(RelicTrigger::Passive, &cx).is_empty());
    let passive = relics.passive(&cx);
    assert_eq!(passive.extra_energy, 1);
    assert_eq!(passive.vulnerable_bonus, 25);
}

#[test]
fn test_unknown_relic_is_an_error() {
    let catalog = Catalog::base();
    let err = RelicSet::from_ids(&catalog, &[RelicId::new("philosophers_pebble")]).unwrap_err();
    assert!(err.to_string().contains("philosophers_pebble"));
}
