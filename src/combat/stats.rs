//! Combat outcome and the counters recorded while it plays out.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// How a combat ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatOutcome {
    /// Every enemy is defeated.
    Won,
    /// The player died.
    Lost,
    /// The turn cap was reached. Counts as a loss.
    TurnLimit,
}

impl CombatOutcome {
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, CombatOutcome::Won)
    }
}

/// Running totals of one combat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatStats {
    /// Player turns started.
    pub turns: u32,
    /// HP removed from enemies.
    pub damage_dealt: i32,
    /// HP lost by the player.
    pub damage_taken: i32,
    pub cards_played: u32,
    /// Plays per card id.
    pub card_plays: FxHashMap<CardId, u32>,
    /// Enemies that died (escapes and splits excluded).
    pub enemies_killed: u32,
}

impl CombatStats {
    pub(crate) fn record_play(&mut self, card: &CardId) {
        self.cards_played += 1;
        *self.card_plays.entry(card.clone()).or_insert(0) += 1;
    }
}
