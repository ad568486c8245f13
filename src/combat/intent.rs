//! Discrete player intents accepted at the presentation boundary.

use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// Something the player asks the combat to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlayerIntent {
    /// Play the card at `hand_index`, aimed at the enemy at `target`.
    ///
    /// Cards that hit a single enemy default to the first living enemy
    /// when no target is given.
    PlayCard {
        hand_index: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<usize>,
    },
    EndTurn,
}

/// An intent that cannot be carried out. The combat is left unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IntentError {
    #[error("combat is already over")]
    CombatOver,

    #[error("no card at hand index {index} (hand has {len})")]
    BadHandIndex { index: usize, len: usize },

    #[error("card `{card}` cannot be played")]
    Unplayable { card: CardId },

    #[error("cannot play attacks while entangled")]
    Entangled,

    #[error("already played {limit} cards this turn")]
    CardLimit { limit: u32 },

    #[error("card costs {cost} energy, {energy} available")]
    NotEnoughEnergy { cost: i32, energy: i32 },

    #[error("enemy {target} is not a valid target")]
    InvalidTarget { target: usize },
}
