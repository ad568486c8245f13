//! One headless combat.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::combat::{Combat, CombatOutcome, PlayerIntent};
use crate::content::{CardDefinition, Catalog};
use crate::core::{CardId, CombatOptions, EnemyId, SimError};
use crate::encounters::Encounter;
use crate::entities::Player;
use crate::relics::RelicSet;

use super::policy::{GreedyPolicy, PlayPolicy};

/// Plays allowed in one player turn before the simulator ends it anyway.
const MAX_PLAYS_PER_TURN: u32 = 64;

/// Summary of one simulated combat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub won: bool,
    pub outcome: CombatOutcome,
    pub turns: u32,
    pub damage_dealt: i32,
    pub damage_taken: i32,
    pub hp_remaining: i32,
    pub cards_played: u32,
    pub card_plays: FxHashMap<CardId, u32>,
    pub enemies_killed: u32,
    /// Templates the encounter started with.
    pub enemies: Vec<EnemyId>,
}

/// Run one combat to its end with the greedy policy.
///
/// The result depends only on the arguments: the same inputs and
/// `options.seed` always give the same result.
pub fn simulate_combat(
    catalog: &Catalog,
    player: Player,
    deck: &[Arc<CardDefinition>],
    encounter: &Encounter,
    relics: RelicSet,
    options: &CombatOptions,
) -> Result<SimulationResult, SimError> {
    fight(&GreedyPolicy, catalog, player, deck, encounter, relics, options).map(|(result, ..)| result)
}

/// Run one combat with `policy` and hand back the player and relics for
/// the next floor.
pub fn fight<P: PlayPolicy + ?Sized>(
    policy: &P,
    catalog: &Catalog,
    player: Player,
    deck: &[Arc<CardDefinition>],
    encounter: &Encounter,
    relics: RelicSet,
    options: &CombatOptions,
) -> Result<(SimulationResult, Player, RelicSet), SimError> {
    if encounter.templates.is_empty() {
        return Err(SimError::InvariantViolation("encounter has no enemies".into()));
    }

    let mut combat = Combat::new(catalog, player, deck, encounter, relics, options);
    while !combat.is_over() {
        let mut plays = 0;
        loop {
            if combat.is_over() {
                break;
            }
            let intent = policy.choose(&combat);
            let PlayerIntent::PlayCard { .. } = intent else {
                break;
            };
            if let Err(err) = combat.apply(intent) {
                tracing::warn!(%err, "policy chose an illegal play, ending turn");
                break;
            }
            plays += 1;
            if plays >= MAX_PLAYS_PER_TURN {
                tracing::debug!(turn = combat.turn(), "play cap reached");
                break;
            }
        }
        if !combat.is_over() {
            combat
                .end_turn()
                .map_err(|err| SimError::InvariantViolation(err.to_string()))?;
        }
    }

    let outcome = combat.outcome().unwrap_or(CombatOutcome::TurnLimit);
    let (player, relics, stats) = combat.into_parts();
    let hp = player.vitals.hp;
    if hp < 0 || hp > player.vitals.max_hp {
        return Err(SimError::InvariantViolation(format!(
            "player hp {hp} outside 0..={}",
            player.vitals.max_hp
        )));
    }

    let result = SimulationResult {
        won: outcome.is_win(),
        outcome,
        turns: stats.turns,
        damage_dealt: stats.damage_dealt,
        damage_taken: stats.damage_taken,
        hp_remaining: if outcome.is_win() { hp } else { 0 },
        cards_played: stats.cards_played,
        card_plays: stats.card_plays,
        enemies_killed: stats.enemies_killed,
        enemies: encounter.templates.iter().map(|t| t.id.clone()).collect(),
    };
    tracing::trace!(won = result.won, turns = result.turns, hp = result.hp_remaining, "combat simulated");
    Ok((result, player, relics))
}
