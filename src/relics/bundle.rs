//! Aggregated relic contributions.

use serde::{Deserialize, Serialize};

use crate::content::RelicEffect;

/// Player state a trigger is evaluated against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TriggerContext {
    /// Current player turn, 1-based.
    pub turn: u32,
    pub hp: i32,
    pub max_hp: i32,
    pub block: i32,
    /// Curse cards in the deck.
    pub curses: i32,
}

impl TriggerContext {
    #[must_use]
    pub const fn new(turn: u32) -> Self {
        Self {
            turn,
            hp: 0,
            max_hp: 0,
            block: 0,
            curses: 0,
        }
    }

    #[must_use]
    pub const fn with_vitals(mut self, hp: i32, max_hp: i32, block: i32) -> Self {
        self.hp = hp;
        self.max_hp = max_hp;
        self.block = block;
        self
    }

    #[must_use]
    pub const fn with_curses(mut self, curses: i32) -> Self {
        self.curses = curses;
        self
    }

    fn hp_at_or_below(&self, percent: i32) -> bool {
        self.hp * 100 <= self.max_hp * percent
    }
}

/// Sum of every relic that fired on one trigger.
///
/// Numeric fields add up across relics; `double_damage` is set if any
/// relic asked for it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerEffects {
    pub heal: i32,
    pub block: i32,
    pub strength: i32,
    pub dexterity: i32,
    pub energy: i32,
    pub draw: i32,
    pub damage: i32,
    pub damage_all: i32,
    pub vulnerable: i32,
    pub weak: i32,
    pub intangible: i32,
    pub thorns: i32,
    pub block_next_turn: i32,
    /// Largest "hits of at most N become 1" threshold.
    pub reduce_low_damage: i32,
    pub reduce_hp_loss: i32,
    pub max_hp: i32,
    pub double_damage: bool,
    /// Relics that fired.
    pub fired: u32,
}

impl TriggerEffects {
    /// Did anything fire?
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fired == 0
    }

    /// Fold one firing relic into the bundle.
    pub(crate) fn add(&mut self, effect: &RelicEffect, cx: &TriggerContext) {
        self.fired += 1;
        match *effect {
            RelicEffect::Heal { amount } => self.heal += amount,
            RelicEffect::HealIfLowHp { amount, threshold_pct } => {
                if cx.hp_at_or_below(threshold_pct) {
                    self.heal += amount;
                }
            }
            RelicEffect::Block { amount } => self.block += amount,
            RelicEffect::BlockIfNone { amount } => {
                if cx.block == 0 {
                    self.block += amount;
                }
            }
            RelicEffect::Strength { amount } => self.strength += amount,
            RelicEffect::Dexterity { amount } => self.dexterity += amount,
            RelicEffect::Energy { amount } | RelicEffect::ExtraEnergy { amount } => self.energy += amount,
            RelicEffect::Draw { amount } | RelicEffect::ExtraDraw { amount } => self.draw += amount,
            RelicEffect::Damage { amount } => self.damage += amount,
            RelicEffect::DamageAll { amount } => self.damage_all += amount,
            RelicEffect::Vulnerable { amount } => self.vulnerable += amount,
            RelicEffect::Weak { amount } => self.weak += amount,
            RelicEffect::Intangible { amount } => self.intangible += amount,
            RelicEffect::DoubleDamage => self.double_damage = true,
            RelicEffect::Thorns { amount } => self.thorns += amount,
            RelicEffect::BlockNextTurn { amount } => self.block_next_turn += amount,
            RelicEffect::ReduceLowDamage { threshold } => {
                self.reduce_low_damage = self.reduce_low_damage.max(threshold);
            }
            RelicEffect::ReduceHpLoss { amount } => self.reduce_hp_loss += amount,
            RelicEffect::StrengthPerCurse { amount } => self.strength += amount * cx.curses,
            RelicEffect::MaxHp { amount } => self.max_hp += amount,
            RelicEffect::VulnerableBonus { .. }
            | RelicEffect::HealingBonus { .. }
            | RelicEffect::StrengthIfLowHp { .. }
            | RelicEffect::ConserveEnergy
            | RelicEffect::CardLimit { .. } => {}
        }
    }
}

/// Continuous modifiers of every passive relic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassiveEffects {
    pub extra_energy: i32,
    pub extra_draw: i32,
    /// Added to the 150% vulnerable multiplier.
    pub vulnerable_bonus: i32,
    /// Added to 100% on every heal.
    pub healing_bonus: i32,
    /// Strength granted right now (already checked against HP).
    pub low_hp_strength: i32,
    pub conserve_energy: bool,
    /// Tightest per-turn card limit.
    pub card_limit: Option<u32>,
}

impl PassiveEffects {
    pub(crate) fn add(&mut self, effect: &RelicEffect, cx: &TriggerContext) {
        match *effect {
            RelicEffect::ExtraEnergy { amount } => self.extra_energy += amount,
            RelicEffect::ExtraDraw { amount } => self.extra_draw += amount,
            RelicEffect::VulnerableBonus { percent } => self.vulnerable_bonus += percent,
            RelicEffect::HealingBonus { percent } => self.healing_bonus += percent,
            RelicEffect::StrengthIfLowHp { amount, threshold_pct } => {
                if cx.hp_at_or_below(threshold_pct) {
                    self.low_hp_strength += amount;
                }
            }
            RelicEffect::ConserveEnergy => self.conserve_energy = true,
            RelicEffect::CardLimit { limit } => {
                self.card_limit = Some(self.card_limit.map_or(limit, |l| l.min(limit)));
            }
            _ => {}
        }
    }

    /// Vulnerable multiplier in percent.
    #[must_use]
    pub const fn vulnerable_percent(&self) -> i32 {
        150 + self.vulnerable_bonus
    }

    /// Scale a heal by the healing bonus.
    #[must_use]
    pub const fn scale_heal(&self, amount: i32) -> i32 {
        (amount * (100 + self.healing_bonus)).div_euclid(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_fields_sum() {
        let cx = TriggerContext::new(1);
        let mut bundle = TriggerEffects::default();
        bundle.add(&RelicEffect::Block { amount: 10 }, &cx);
        bundle.add(&RelicEffect::Block { amount: 4 }, &cx);
        bundle.add(&RelicEffect::DoubleDamage, &cx);
        bundle.add(&RelicEffect::DoubleDamage, &cx);
        assert_eq!(bundle.block, 14);
        assert!(bundle.double_damage);
        assert_eq!(bundle.fired, 4);
    }

    #[test]
    fn test_conditional_effects() {
        let low = TriggerContext::new(1).with_vitals(30, 80, 5);
        let high = TriggerContext::new(1).with_vitals(60, 80, 0);

        let mut a = TriggerEffects::default();
        a.add(&RelicEffect::HealIfLowHp { amount: 12, threshold_pct: 50 }, &low);
        a.add(&RelicEffect::BlockIfNone { amount: 6 }, &low);
        assert_eq!((a.heal, a.block), (12, 0));

        let mut b = TriggerEffects::default();
        b.add(&RelicEffect::HealIfLowHp { amount: 12, threshold_pct: 50 }, &high);
        b.add(&RelicEffect::BlockIfNone { amount: 6 }, &high);
        assert_eq!((b.heal, b.block), (0, 6));
    }

    #[test]
    fn test_passive_scaling() {
        let cx = TriggerContext::new(1).with_vitals(80, 80, 0);
        let mut passive = PassiveEffects::default();
        passive.add(&RelicEffect::VulnerableBonus { percent: 25 }, &cx);
        passive.add(&RelicEffect::HealingBonus { percent: 50 }, &cx);
        passive.add(&RelicEffect::CardLimit { limit: 6 }, &cx);
        passive.add(&RelicEffect::CardLimit { limit: 8 }, &cx);
        assert_eq!(passive.vulnerable_percent(), 175);
        assert_eq!(passive.scale_heal(6), 9);
        assert_eq!(passive.card_limit, Some(6));
    }
}
