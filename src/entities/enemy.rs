//! Runtime enemy instances.

use std::sync::Arc;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::content::{AscensionModifiers, EnemyTemplate, Move};
use crate::core::{EntityId, GameRng};
use crate::effects::{Statuses, Vitals};

bitflags! {
    /// One-shot behaviour flags. Set only by the engine when it applies a
    /// move's consequences, never by an AI decision.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct EnemyFlags: u8 {
        const HAS_SPLIT      = 1 << 0;
        const REBORN         = 1 << 1;
        const ANGERED        = 1 << 2;
        const HASTED         = 1 << 3;
        const WOKEN_UP       = 1 << 4;
        const DEFENSIVE_MODE = 1 << 5;
        /// Left combat without dying (smoke bomb, explode).
        const ESCAPED        = 1 << 6;
    }
}

/// One enemy in a combat.
#[derive(Clone, Debug)]
pub struct EnemyInstance {
    pub id: EntityId,
    pub template: Arc<EnemyTemplate>,
    pub vitals: Vitals,
    pub statuses: Statuses,
    pub flags: EnemyFlags,
    /// Index of the move chosen for the upcoming enemy phase.
    pub intent: Option<usize>,
    /// Index of the move executed last.
    pub last_move: Option<usize>,
    /// Enemy phases this instance has taken part in.
    pub turn: u32,
    /// Position in the group when the combat began (sentries alternate by slot).
    pub slot: usize,
    /// Slow counter advanced by `SpecialEffect::Count`.
    pub slow_count: u32,
    /// Extra hits gained through `SpecialEffect::EscalateHits`.
    pub extra_hits: u32,
    /// Damage dealt to the player per card played.
    pub beat_of_death: i32,
}

impl EnemyInstance {
    /// Instantiate a template: roll HP, zero statuses, copy passives.
    pub fn spawn(id: EntityId, template: Arc<EnemyTemplate>, rng: &mut GameRng) -> Self {
        let hp = template.hp.roll(rng).max(1);
        Self::with_hp(id, template, hp)
    }

    /// Instantiate a template with fixed current and max HP.
    #[must_use]
    pub fn with_hp(id: EntityId, template: Arc<EnemyTemplate>, hp: i32) -> Self {
        let passives = template.passives;
        let vitals = Vitals {
            flight: if passives.flying { 3 } else { 0 },
            invincible: passives.invincible.max(0),
            ..Vitals::new(hp, hp)
        };
        let statuses = Statuses {
            artifact: passives.artifact.max(0),
            thorns: passives.thorns.max(0),
            metallicize: passives.metallicize.max(0),
            enrage: passives.enrage.max(0),
            ..Statuses::default()
        };
        Self {
            id,
            template,
            vitals,
            statuses,
            flags: EnemyFlags::empty(),
            intent: None,
            last_move: None,
            turn: 0,
            slot: 0,
            slow_count: 0,
            extra_hits: 0,
            beat_of_death: 0,
        }
    }

    /// Scale HP and add starting strength for an ascension level.
    pub fn apply_ascension(&mut self, mods: &AscensionModifiers) {
        let kind = self.template.kind;
        self.vitals.max_hp = mods.scale_hp(self.vitals.max_hp, kind);
        self.vitals.hp = mods.scale_hp(self.vitals.hp, kind);
        self.statuses.strength += mods.bonus_strength(kind);
    }

    #[must_use]
    pub fn at_slot(mut self, slot: usize) -> Self {
        self.slot = slot;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.template.name
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.vitals.is_alive()
    }

    /// Dead but able to come back through rebirth.
    #[must_use]
    pub fn is_pending_rebirth(&self) -> bool {
        !self.vitals.is_alive()
            && self.template.passives.can_rebirth
            && !self.flags.contains(EnemyFlags::REBORN)
            && !self.flags.contains(EnemyFlags::ESCAPED)
    }

    /// Out of the fight for good.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        !self.is_alive() && !self.is_pending_rebirth()
    }

    /// Still has a say in the combat (alive or waiting to be reborn).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.is_defeated()
    }

    /// Has HP at or below half of max and has not split yet.
    #[must_use]
    pub fn should_split(&self) -> bool {
        self.vitals.hp * 2 <= self.vitals.max_hp && !self.flags.contains(EnemyFlags::HAS_SPLIT)
    }

    #[must_use]
    pub fn move_at(&self, index: usize) -> Option<&Move> {
        self.template.moveset.get(index)
    }

    /// The move this enemy intends to use next.
    #[must_use]
    pub fn intended_move(&self) -> Option<&Move> {
        self.intent.and_then(|i| self.move_at(i))
    }

    /// Leave combat immediately (explode, escape).
    pub fn remove_from_combat(&mut self) {
        self.vitals.hp = 0;
        self.vitals.block = 0;
        self.flags.insert(EnemyFlags::ESCAPED);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{EnemyKind, HpRange, Passives};

    fn byrd() -> Arc<EnemyTemplate> {
        Arc::new(
            EnemyTemplate::new("byrd", "Byrd", EnemyKind::Normal, 2, HpRange::Range { min: 25, max: 31 })
                .with_move(Move::attack("peck", "Peck", 1))
                .with_passives(Passives {
                    flying: true,
                    artifact: 1,
                    ..Passives::default()
                }),
        )
    }

    #[test]
    fn test_spawn_rolls_hp_and_copies_passives() {
        let mut rng = GameRng::new(1);
        let e = EnemyInstance::spawn(EntityId(0), byrd(), &mut rng);
        assert!((25..=31).contains(&e.vitals.hp));
        assert_eq!(e.vitals.hp, e.vitals.max_hp);
        assert_eq!(e.vitals.flight, 3);
        assert_eq!(e.statuses.artifact, 1);
        assert_eq!(e.statuses.vulnerable, 0);
        assert!(e.flags.is_empty());
    }

    #[test]
    fn test_split_threshold() {
        let mut e = EnemyInstance::with_hp(EntityId(0), byrd(), 140);
        assert!(!e.should_split());
        e.vitals.hp = 70;
        assert!(e.should_split());
        e.flags.insert(EnemyFlags::HAS_SPLIT);
        e.vitals.hp = 10;
        assert!(!e.should_split());
    }

    #[test]
    fn test_escape_counts_as_defeated() {
        let mut e = EnemyInstance::with_hp(EntityId(0), byrd(), 10);
        e.remove_from_combat();
        assert!(e.is_defeated());
    }
}
