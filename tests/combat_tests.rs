//! Combat engine integration tests.
//!
//! Scripted fights against small hand-built enemies, checking the order in
//! which flight, block, relics and artifact resolve, plus the built-in
//! split and rebirth bosses and ascension modifiers.

use std::sync::Arc;

use spire_sim::combat::{Combat, CombatOutcome, IntentError, PlayerIntent};
use spire_sim::content::{CardDefinition, Catalog, EnemyKind, EnemyTemplate, HpRange, Intent, Move, Passives};
use spire_sim::core::{CombatOptions, RelicId};
use spire_sim::encounters::{Encounter, EncounterKind};
use spire_sim::entities::{EnemyFlags, Player};
use spire_sim::relics::RelicSet;

fn enemy(hp: i32, mv: Move) -> EnemyTemplate {
    EnemyTemplate::new("target", "Target", EnemyKind::Normal, 1, HpRange::Fixed(hp)).with_move(mv)
}

fn idle() -> Move {
    Move::new("idle", "Idle", Intent::Unknown)
}

fn cards(catalog: &Catalog, id: &str, n: usize) -> Vec<Arc<CardDefinition>> {
    vec![Arc::clone(catalog.card(id).unwrap()); n]
}

fn fight<'a>(
    catalog: &'a Catalog,
    deck: &[Arc<CardDefinition>],
    template: EnemyTemplate,
    relics: &[&str],
) -> Combat<'a> {
    let ids: Vec<RelicId> = relics.iter().map(|id| RelicId::new(id)).collect();
    let relics = RelicSet::from_ids(catalog, &ids).unwrap();
    let encounter = Encounter::new(EncounterKind::Normal, vec![Arc::new(template)]);
    Combat::new(catalog, Player::new(80, 80), deck, &encounter, relics, &CombatOptions::default())
}

fn play(combat: &mut Combat<'_>) {
    combat.apply(PlayerIntent::PlayCard { hand_index: 0, target: Some(0) }).unwrap();
}

#[test]
fn test_flight_halves_player_attacks() {
    let catalog = Catalog::base();
    let deck = cards(&catalog, "strike", 10);
    let flyer = enemy(40, idle()).with_passives(Passives {
        flying: true,
        ..Passives::default()
    });
    let mut combat = fight(&catalog, &deck, flyer, &[]);

    play(&mut combat);
    assert_eq!(combat.enemies[0].vitals.hp, 37);
    assert_eq!(combat.enemies[0].vitals.flight, 2);
    play(&mut combat);
    play(&mut combat);
    assert_eq!(combat.enemies[0].vitals.hp, 31);
    assert!(combat.enemies[0].vitals.grounded);

    combat.end_turn().unwrap();
    play(&mut combat);
    assert_eq!(combat.enemies[0].vitals.hp, 25);
}

#[test]
fn test_multi_hit_attack_against_block() {
    let catalog = Catalog::base();
    let deck = cards(&catalog, "defend", 10);
    let mut combat = fight(&catalog, &deck, enemy(30, Move::attack("jab", "Jab", 3).with_hits(3)), &[]);

    assert_eq!(combat.incoming_damage(), 9);
    play(&mut combat);
    combat.end_turn().unwrap();

    // Block 5 takes the first hit and two points of the second.
    assert_eq!(combat.player.vitals.hp, 76);
    assert_eq!(combat.stats().damage_taken, 4);
}

#[test]
fn test_pen_nib_doubles_tenth_attack() {
    let catalog = Catalog::base();
    let deck = cards(&catalog, "strike", 12);
    let mut combat = fight(&catalog, &deck, enemy(500, idle()), &["pen_nib"]);

    for _ in 0..3 {
        for _ in 0..3 {
            play(&mut combat);
        }
        combat.end_turn().unwrap();
    }
    assert_eq!(combat.enemies[0].vitals.hp, 500 - 9 * 6);

    play(&mut combat);
    assert_eq!(combat.enemies[0].vitals.hp, 500 - 9 * 6 - 12);
    play(&mut combat);
    assert_eq!(combat.enemies[0].vitals.hp, 500 - 9 * 6 - 12 - 6);
}

#[test]
fn test_torii_reduces_small_hits() {
    let catalog = Catalog::base();
    let deck = cards(&catalog, "strike", 10);
    let mut combat = fight(&catalog, &deck, enemy(40, Move::attack("nip", "Nip", 4)), &["torii"]);

    combat.end_turn().unwrap();
    assert_eq!(combat.player.vitals.hp, 79);
}

#[test]
fn test_bronze_scales_retaliate() {
    let catalog = Catalog::base();
    let deck = cards(&catalog, "defend", 10);
    let mut combat = fight(&catalog, &deck, enemy(40, Move::attack("hit", "Hit", 6)), &["bronze_scales"]);

    combat.end_turn().unwrap();
    assert_eq!(combat.player.vitals.hp, 74);
    assert_eq!(combat.enemies[0].vitals.hp, 37);
}

#[test]
fn test_anchor_block_on_first_turn() {
    let catalog = Catalog::base();
    let deck = cards(&catalog, "strike", 10);
    let combat = fight(&catalog, &deck, enemy(40, idle()), &["anchor"]);

    assert_eq!(combat.player.vitals.block, 10);
}

#[test]
fn test_artifact_negates_bash_vulnerable() {
    let catalog = Catalog::base();
    let deck = cards(&catalog, "bash", 10);
    let sentry = (**catalog.enemy("sentry").unwrap()).clone();
    let hp = {
        let combat = fight(&catalog, &deck, sentry.clone(), &[]);
        combat.enemies[0].vitals.hp
    };
    let mut combat = fight(&catalog, &deck, sentry, &[]);

    assert_eq!(combat.enemies[0].statuses.artifact, 1);
    play(&mut combat);
    assert_eq!(combat.enemies[0].vitals.hp, hp - 8);
    assert_eq!(combat.enemies[0].statuses.vulnerable, 0);
    assert_eq!(combat.enemies[0].statuses.artifact, 0);
}

#[test]
fn test_bash_then_strike_uses_vulnerable() {
    let catalog = Catalog::base();
    let mut deck = cards(&catalog, "bash", 1);
    deck.extend(cards(&catalog, "strike", 4));
    let mut combat = fight(&catalog, &deck, enemy(100, idle()), &[]);

    let bash = combat.hand.iter().position(|c| c.def.id == "bash").unwrap();
    combat.play_card(bash, Some(0)).unwrap();
    assert_eq!(combat.enemies[0].statuses.vulnerable, 2);
    play(&mut combat);
    assert_eq!(combat.enemies[0].vitals.hp, 100 - 8 - 9);
}

#[test]
fn test_dead_target_is_rejected() {
    let catalog = Catalog::base();
    let deck = cards(&catalog, "strike", 10);
    let encounter = Encounter::new(
        EncounterKind::Normal,
        vec![Arc::new(enemy(5, idle())), Arc::new(enemy(30, idle()))],
    );
    let mut combat = Combat::new(
        &catalog,
        Player::new(80, 80),
        &deck,
        &encounter,
        RelicSet::new(),
        &CombatOptions::default(),
    );

    play(&mut combat);
    assert!(!combat.enemies[0].is_alive());
    assert_eq!(
        combat.apply(PlayerIntent::PlayCard { hand_index: 0, target: Some(0) }),
        Err(IntentError::InvalidTarget { target: 0 })
    );
    combat.apply(PlayerIntent::PlayCard { hand_index: 0, target: None }).unwrap();
    assert_eq!(combat.enemies[1].vitals.hp, 24);
}

#[test]
fn test_player_death_ends_combat() {
    let catalog = Catalog::base();
    let deck = cards(&catalog, "strike", 10);
    let encounter = Encounter::new(
        EncounterKind::Normal,
        vec![Arc::new(enemy(200, Move::attack("crush", "Crush", 50)))],
    );
    let mut combat = Combat::new(
        &catalog,
        Player::new(30, 80),
        &deck,
        &encounter,
        RelicSet::new(),
        &CombatOptions::default(),
    );

    combat.end_turn().unwrap();
    assert_eq!(combat.outcome(), Some(CombatOutcome::Lost));
    assert_eq!(combat.player.vitals.hp, 0);
    assert_eq!(combat.end_turn(), Err(IntentError::CombatOver));
}

#[test]
fn test_snapshot_reports_intent_and_piles() {
    let catalog = Catalog::base();
    let deck = catalog.starter_deck().unwrap();
    let combat = fight(&catalog, &deck, enemy(40, Move::attack("hit", "Hit", 7).with_hits(2)), &[]);

    let snapshot = combat.snapshot();
    assert_eq!(snapshot.turn, 1);
    assert_eq!(snapshot.hand.len(), 5);
    assert_eq!(snapshot.draw_pile, 5);
    assert_eq!(snapshot.player.energy, 3);
    assert_eq!(snapshot.incoming_damage, 14);
    let intent = snapshot.enemies[0].intent.as_ref().unwrap();
    assert_eq!((intent.damage, intent.hits), (Some(7), 2));

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["enemies"][0]["intent"]["id"], "hit");
    assert!(json.get("outcome").is_none());
}

fn catalog_fight<'a>(catalog: &'a Catalog, deck: &[Arc<CardDefinition>], id: &str, options: &CombatOptions) -> Combat<'a> {
    let template = Arc::clone(catalog.enemy(id).unwrap());
    let encounter = Encounter::new(EncounterKind::Normal, vec![template]);
    Combat::new(catalog, Player::new(80, 80), deck, &encounter, RelicSet::new(), options)
}

#[test]
fn test_death_spawns_pick_intent_immediately() {
    let catalog = Catalog::base();
    let deck = cards(&catalog, "strike", 10);
    let mut combat = catalog_fight(&catalog, &deck, "slime_medium", &CombatOptions::default());
    combat.enemies[0].vitals.hp = 6;

    play(&mut combat);
    assert_eq!(combat.enemies.len(), 3);
    for small in &combat.enemies[1..] {
        assert_eq!(small.template.id, "slime_small");
        assert!(small.intent.is_some(), "spawned enemy without an intent");
    }
    let snapshot = combat.snapshot();
    assert_eq!(snapshot.enemies.len(), 2);
    assert!(snapshot.enemies.iter().all(|e| e.intent.is_some()));

    combat.end_turn().unwrap();
    for small in &combat.enemies[1..] {
        assert_eq!(small.turn, 1);
        assert!(small.last_move.is_some());
    }
}

#[test]
fn test_slime_boss_splits_during_enemy_phase() {
    let catalog = Catalog::base();
    let deck = cards(&catalog, "strike", 10);
    let mut combat = catalog_fight(&catalog, &deck, "slime_boss", &CombatOptions::default());
    combat.enemies[0].vitals.hp = 76;

    play(&mut combat);
    assert_eq!(combat.enemies[0].vitals.hp, 70);
    assert_eq!(combat.enemies[0].intended_move().unwrap().id, "split");
    assert!(!combat.enemies[0].flags.contains(EnemyFlags::HAS_SPLIT));

    combat.end_turn().unwrap();
    let boss = &combat.enemies[0];
    assert!(boss.flags.contains(EnemyFlags::HAS_SPLIT));
    assert!(!boss.is_active());

    let ids: Vec<&str> = combat.enemies[1..].iter().map(|e| e.template.id.as_str()).collect();
    assert_eq!(ids, ["slime_large_acid", "slime_large_spike"]);
    for slime in &combat.enemies[1..] {
        assert_eq!((slime.vitals.hp, slime.vitals.max_hp), (35, 35));
        assert!(slime.intent.is_some());
    }
    assert_eq!(combat.outcome(), None);
    assert_eq!(combat.stats().enemies_killed, 0);
}

#[test]
fn test_awakened_one_is_reborn_once() {
    let catalog = Catalog::base();
    let deck = cards(&catalog, "strike", 10);
    let mut combat = catalog_fight(&catalog, &deck, "awakened_one", &CombatOptions::default());
    combat.enemies[0].vitals.hp = 6;

    play(&mut combat);
    let boss = &combat.enemies[0];
    assert!(boss.is_pending_rebirth());
    assert_eq!(boss.intended_move().unwrap().id, "rebirth");
    assert_eq!(combat.outcome(), None);

    combat.end_turn().unwrap();
    let boss = &combat.enemies[0];
    assert_eq!(boss.vitals.hp, 300);
    assert!(boss.flags.contains(EnemyFlags::REBORN));
    assert_eq!(boss.statuses.strength, 2);

    combat.enemies[0].vitals.hp = 6;
    play(&mut combat);
    assert_eq!(combat.outcome(), Some(CombatOutcome::Won));
}

#[test]
fn test_ascension_strengthens_encounter_enemies() {
    let catalog = Catalog::base();
    let deck = cards(&catalog, "defend", 10);

    let plain = catalog_fight(&catalog, &deck, "slime_boss", &CombatOptions::default());
    assert_eq!(plain.enemies[0].vitals.max_hp, 140);
    assert_eq!(plain.enemies[0].statuses.strength, 0);

    let hard = catalog_fight(&catalog, &deck, "slime_boss", &CombatOptions::default().with_ascension(5));
    assert_eq!(hard.enemies[0].vitals.max_hp, 162);
    assert_eq!(hard.enemies[0].vitals.hp, 162);
    assert_eq!(hard.enemies[0].statuses.strength, 1);
}

#[test]
fn test_ascension_ten_raises_enemy_damage() {
    let catalog = Catalog::base();
    let deck = cards(&catalog, "strike", 10);
    let hit = || enemy(40, Move::attack("hit", "Hit", 10));

    let plain = fight(&catalog, &deck, hit(), &[]);
    assert_eq!(plain.incoming_damage(), 10);

    let encounter = Encounter::new(EncounterKind::Normal, vec![Arc::new(hit())]);
    let options = CombatOptions::default().with_ascension(10);
    let mut hard = Combat::new(&catalog, Player::new(80, 80), &deck, &encounter, RelicSet::new(), &options);
    assert_eq!(hard.enemies[0].vitals.max_hp, 48);
    assert_eq!(hard.incoming_damage(), 11);
    hard.end_turn().unwrap();
    assert_eq!(hard.player.vitals.hp, 69);
}
