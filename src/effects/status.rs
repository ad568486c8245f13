//! HP, block and status counters, and the operations that change them.
//!
//! Both the player and enemy instances carry a `Vitals` and a `Statuses`;
//! every change to HP or block goes through the functions here so the
//! ordering rules (flight, shield, block, HP) live in one place.

use serde::{Deserialize, Serialize};

use crate::content::StatusKind;
use crate::core::error::clamp_non_negative;

use super::damage::{AttackerMods, BlockMods, DefenderMods};

/// HP and damage absorption state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    pub hp: i32,
    pub max_hp: i32,
    pub block: i32,
    /// Halves incoming hits; one stack is lost per hit.
    pub flight: i32,
    /// Flight was knocked to zero by a hit.
    pub grounded: bool,
    /// Damage shield drained before block.
    pub invincible: i32,
}

impl Vitals {
    #[must_use]
    pub const fn new(hp: i32, max_hp: i32) -> Self {
        Self {
            hp,
            max_hp,
            block: 0,
            flight: 0,
            grounded: false,
            invincible: 0,
        }
    }

    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// HP as an integer percentage of max HP.
    #[must_use]
    pub fn hp_percent(&self) -> i32 {
        if self.max_hp <= 0 {
            0
        } else {
            self.hp * 100 / self.max_hp
        }
    }

    /// Is HP at or below `percent` of max HP?
    #[must_use]
    pub fn at_or_below_percent(&self, percent: i32) -> bool {
        self.hp * 100 <= self.max_hp * percent
    }

    pub fn gain_block(&mut self, amount: i32) {
        self.block += clamp_non_negative(amount, "block gain");
    }

    /// Heal up to max HP; returns the amount actually healed.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.hp = (self.hp + amount.max(0)).min(self.max_hp);
        self.hp - before
    }

    /// Lose HP ignoring block; returns the amount actually lost.
    pub fn lose_hp(&mut self, amount: i32) -> i32 {
        let lost = amount.clamp(0, self.hp);
        self.hp -= lost;
        lost
    }

    /// Raise max HP and heal by the same amount.
    pub fn raise_max_hp(&mut self, amount: i32) {
        self.max_hp += amount;
        self.hp = (self.hp + amount).clamp(0, self.max_hp);
    }
}

/// Outcome of one hit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HitResult {
    /// Damage after flight, before any absorption.
    pub incoming: i32,
    pub shielded: i32,
    pub blocked: i32,
    pub hp_lost: i32,
}

/// Apply one hit: flight halves it, then the invincible shield, block and
/// HP absorb it in that order.
///
/// ```
/// use spire_sim::effects::{apply_damage, Vitals};
///
/// let mut byrd = Vitals { flight: 3, ..Vitals::new(50, 50) };
/// apply_damage(&mut byrd, 10);
/// assert_eq!((byrd.hp, byrd.flight), (45, 2));
/// ```
pub fn apply_damage(target: &mut Vitals, amount: i32) -> HitResult {
    apply_damage_reduced(target, amount, 0)
}

/// `apply_damage` with a flat reduction of the HP lost after block.
pub fn apply_damage_reduced(target: &mut Vitals, amount: i32, hp_loss_reduction: i32) -> HitResult {
    let mut amount = clamp_non_negative(amount, "damage");
    if target.flight > 0 {
        amount /= 2;
        target.flight -= 1;
        if target.flight == 0 {
            target.grounded = true;
        }
    }
    let mut hit = HitResult {
        incoming: amount,
        ..HitResult::default()
    };

    let shielded = amount.min(target.invincible);
    target.invincible -= shielded;
    amount -= shielded;
    hit.shielded = shielded;

    let blocked = amount.min(target.block);
    target.block -= blocked;
    amount -= blocked;
    hit.blocked = blocked;

    let to_hp = if amount > 0 {
        (amount - hp_loss_reduction.max(0)).max(0)
    } else {
        0
    };
    hit.hp_lost = target.lose_hp(to_hp);
    tracing::trace!(?hit, hp = target.hp, block = target.block, "hit resolved");
    hit
}

/// Status counters.
///
/// Strength and dexterity may be negative. Everything else stays >= 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statuses {
    pub strength: i32,
    pub dexterity: i32,
    pub vulnerable: i32,
    pub weak: i32,
    pub frail: i32,
    pub poison: i32,
    pub artifact: i32,
    pub ritual: i32,
    pub enrage: i32,
    pub thorns: i32,
    pub metallicize: i32,
    pub entangle: i32,
    pub draw_reduction: i32,
    pub intangible: i32,
}

impl Statuses {
    #[must_use]
    pub const fn attacker(&self) -> AttackerMods {
        AttackerMods {
            strength: self.strength,
            weak: self.weak,
        }
    }

    #[must_use]
    pub const fn defender(&self) -> DefenderMods {
        DefenderMods {
            vulnerable: self.vulnerable,
        }
    }

    #[must_use]
    pub const fn block_mods(&self) -> BlockMods {
        BlockMods {
            dexterity: self.dexterity,
            frail: self.frail,
        }
    }

    /// Cap an incoming hit while intangible.
    #[must_use]
    pub fn cap_incoming(&self, amount: i32) -> i32 {
        if self.intangible > 0 {
            amount.min(1)
        } else {
            amount
        }
    }

    /// Remove vulnerable and weak.
    pub fn clear_debuffs(&mut self) {
        self.vulnerable = 0;
        self.weak = 0;
    }

    /// Decrement the timed debuffs at the end of a round.
    pub fn tick_round(&mut self) {
        for counter in [
            &mut self.vulnerable,
            &mut self.weak,
            &mut self.frail,
            &mut self.intangible,
        ] {
            *counter = (*counter - 1).max(0);
        }
    }
}

/// Apply a status delta, honouring artifact.
///
/// Returns `false` if artifact negated the debuff.
pub fn apply_status(statuses: &mut Statuses, kind: StatusKind, amount: i32) -> bool {
    if kind.is_debuff() && amount > 0 && statuses.artifact > 0 {
        statuses.artifact -= 1;
        tracing::trace!(?kind, amount, artifact = statuses.artifact, "debuff negated");
        return false;
    }
    let add = |counter: &mut i32| *counter = (*counter + amount).max(0);
    match kind {
        StatusKind::Vulnerable => add(&mut statuses.vulnerable),
        StatusKind::Weak => add(&mut statuses.weak),
        StatusKind::Frail => add(&mut statuses.frail),
        StatusKind::Poison => add(&mut statuses.poison),
        StatusKind::Artifact => add(&mut statuses.artifact),
        StatusKind::Ritual => add(&mut statuses.ritual),
        StatusKind::Enrage => add(&mut statuses.enrage),
        StatusKind::Thorns => add(&mut statuses.thorns),
        StatusKind::Metallicize => add(&mut statuses.metallicize),
        StatusKind::Entangle => add(&mut statuses.entangle),
        StatusKind::DrawReduction => add(&mut statuses.draw_reduction),
        StatusKind::Intangible => add(&mut statuses.intangible),
        StatusKind::Strength => statuses.strength += amount,
        StatusKind::Dexterity => statuses.dexterity += amount,
        StatusKind::StrengthDown => statuses.strength -= amount,
        StatusKind::DexterityDown => statuses.dexterity -= amount,
    }
    true
}

/// Resolve poison at the start of the poisoned entity's turn.
///
/// Returns the HP lost. Poison bypasses block and decays by one.
pub fn resolve_poison(vitals: &mut Vitals, statuses: &mut Statuses) -> i32 {
    if statuses.poison <= 0 {
        statuses.poison = 0;
        return 0;
    }
    let lost = vitals.lose_hp(statuses.poison);
    statuses.poison -= 1;
    lost
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_absorbs_first() {
        let mut v = Vitals::new(30, 30);
        v.block = 5;
        let hit = apply_damage(&mut v, 8);
        assert_eq!(hit.blocked, 5);
        assert_eq!(hit.hp_lost, 3);
        assert_eq!((v.hp, v.block), (27, 0));
    }

    #[test]
    fn test_hp_floors_at_zero() {
        let mut v = Vitals::new(4, 30);
        let hit = apply_damage(&mut v, 50);
        assert_eq!(hit.hp_lost, 4);
        assert_eq!(v.hp, 0);
        assert!(!v.is_alive());
    }

    #[test]
    fn test_flight_sequence() {
        let mut v = Vitals {
            flight: 3,
            ..Vitals::new(50, 50)
        };
        apply_damage(&mut v, 10);
        assert_eq!((v.hp, v.flight, v.grounded), (45, 2, false));
        apply_damage(&mut v, 10);
        apply_damage(&mut v, 10);
        assert_eq!((v.hp, v.flight, v.grounded), (35, 0, true));
        apply_damage(&mut v, 10);
        assert_eq!(v.hp, 25);
    }

    #[test]
    fn test_invincible_shield_before_block() {
        let mut v = Vitals {
            invincible: 10,
            block: 5,
            ..Vitals::new(100, 100)
        };
        let hit = apply_damage(&mut v, 18);
        assert_eq!((hit.shielded, hit.blocked, hit.hp_lost), (10, 5, 3));
    }

    #[test]
    fn test_hp_loss_reduction_after_block() {
        let mut v = Vitals::new(20, 20);
        v.block = 3;
        let hit = apply_damage_reduced(&mut v, 4, 1);
        assert_eq!(hit.hp_lost, 0);
        let hit = apply_damage_reduced(&mut v, 6, 1);
        assert_eq!(hit.hp_lost, 5);
    }

    #[test]
    fn test_poison_total() {
        let mut v = Vitals::new(50, 50);
        let mut s = Statuses {
            poison: 5,
            ..Statuses::default()
        };
        let total: i32 = (0..5).map(|_| resolve_poison(&mut v, &mut s)).sum();
        assert_eq!(total, 15);
        assert_eq!(s.poison, 0);
        assert_eq!(resolve_poison(&mut v, &mut s), 0);
        assert_eq!(v.hp, 35);
    }

    #[test]
    fn test_artifact_negates_debuff() {
        let mut s = Statuses {
            artifact: 1,
            ..Statuses::default()
        };
        assert!(!apply_status(&mut s, StatusKind::Weak, 2));
        assert_eq!((s.weak, s.artifact), (0, 0));
        assert!(apply_status(&mut s, StatusKind::Weak, 2));
        assert_eq!(s.weak, 2);
        assert!(apply_status(&mut s, StatusKind::Strength, 3));
    }

    #[test]
    fn test_strength_down_goes_negative() {
        let mut s = Statuses::default();
        apply_status(&mut s, StatusKind::StrengthDown, 2);
        assert_eq!(s.strength, -2);
    }

    #[test]
    fn test_tick_round() {
        let mut s = Statuses {
            vulnerable: 2,
            weak: 1,
            strength: 3,
            ..Statuses::default()
        };
        s.tick_round();
        assert_eq!((s.vulnerable, s.weak, s.strength), (1, 0, 3));
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut v = Vitals::new(70, 80);
        assert_eq!(v.heal(20), 10);
        assert_eq!(v.hp, 80);
    }
}
