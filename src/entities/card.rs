//! Card instances.

use std::sync::Arc;

use crate::content::{CardDefinition, CardType, Cost};
use crate::core::EntityId;

/// A card in one of the player's piles.
///
/// `def` is the resolved template, already upgraded if the instance is.
#[derive(Clone, Debug)]
pub struct CardInstance {
    pub id: EntityId,
    pub def: Arc<CardDefinition>,
    pub upgraded: bool,
}

impl CardInstance {
    #[must_use]
    pub fn new(id: EntityId, def: Arc<CardDefinition>) -> Self {
        Self {
            id,
            def,
            upgraded: false,
        }
    }

    /// A copy of this card under a new id.
    #[must_use]
    pub fn duplicate(&self, id: EntityId) -> Self {
        Self {
            id,
            def: Arc::clone(&self.def),
            upgraded: self.upgraded,
        }
    }

    /// Upgrade in place. No-op for cards without an upgrade or already upgraded.
    pub fn upgrade(&mut self) {
        if self.upgraded || self.def.upgrade.is_none() {
            return;
        }
        self.def = Arc::new(self.def.upgraded());
        self.upgraded = true;
    }

    #[must_use]
    pub fn card_type(&self) -> CardType {
        self.def.card_type
    }

    /// Energy needed to play the card; X-cost cards need none.
    #[must_use]
    pub fn energy_cost(&self) -> i32 {
        match self.def.cost {
            Cost::Fixed(n) => n as i32,
            Cost::X => 0,
        }
    }
}
