//! The player inside one combat.

use serde::{Deserialize, Serialize};

use crate::effects::{Statuses, Vitals};

/// Ongoing effects of power cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Powers {
    /// Strength gained at the start of each turn.
    pub demon_form: i32,
    /// Block is kept between turns.
    pub barricade: bool,
    /// Block per attack played this turn.
    pub rage: i32,
    /// Strength lost at the end of this turn.
    pub flex: i32,
}

/// Player combat state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub vitals: Vitals,
    pub statuses: Statuses,
    pub powers: Powers,
    pub energy: i32,
    /// Block granted at the start of next turn.
    pub block_next_turn: i32,
    /// Cards played this turn.
    pub cards_played_this_turn: u32,
    /// Lost HP at least once this combat.
    pub lost_hp_this_combat: bool,
}

impl Player {
    #[must_use]
    pub fn new(hp: i32, max_hp: i32) -> Self {
        Self {
            vitals: Vitals::new(hp.clamp(0, max_hp), max_hp),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.vitals.is_alive()
    }
}
