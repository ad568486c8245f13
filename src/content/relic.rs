//! Relic definitions.
//!
//! A relic subscribes to one `RelicTrigger` and contributes one
//! `RelicEffect` when it fires. Counters, per-combat flags and turn
//! requirements gate firing; see `relics::RelicSet::trigger`.

use serde::{Deserialize, Serialize};

use crate::core::RelicId;

/// Relic rarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelicRarity {
    Starter,
    #[default]
    Common,
    Uncommon,
    Rare,
    Boss,
    Event,
    Shop,
}

/// Phase boundary a relic subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelicTrigger {
    CombatStart,
    CombatEnd,
    TurnStart,
    TurnEnd,
    AttackPlayed,
    SkillPlayed,
    StrikePlayed,
    FirstHpLoss,
    HpLoss,
    /// Player was hit by an attack (after block).
    DamageTaken,
    /// Player is about to be hit by an attack (before block).
    DamageReceived,
    Exhaust,
    Rest,
    CardReward,
    Pickup,
    /// Continuous modifier, queried rather than fired.
    #[default]
    Passive,
}

/// What a relic does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RelicEffect {
    Heal { amount: i32 },
    /// Heal only while HP is at or below `threshold_pct` of max.
    HealIfLowHp { amount: i32, threshold_pct: i32 },
    Block { amount: i32 },
    /// Block only if the player has none.
    BlockIfNone { amount: i32 },
    Strength { amount: i32 },
    Dexterity { amount: i32 },
    Energy { amount: i32 },
    Draw { amount: i32 },
    /// Damage to the current target.
    Damage { amount: i32 },
    DamageAll { amount: i32 },
    /// Vulnerable to every enemy.
    Vulnerable { amount: i32 },
    /// Weak to every enemy.
    Weak { amount: i32 },
    Intangible { amount: i32 },
    /// The attack being played deals double damage.
    DoubleDamage,
    /// Deal `amount` back to the attacker.
    Thorns { amount: i32 },
    BlockNextTurn { amount: i32 },
    /// Incoming hits of at most `threshold` damage become 1.
    ReduceLowDamage { threshold: i32 },
    /// HP loss after block is reduced by `amount`.
    ReduceHpLoss { amount: i32 },
    StrengthPerCurse { amount: i32 },
    MaxHp { amount: i32 },

    // Passive modifiers
    ExtraEnergy { amount: i32 },
    ExtraDraw { amount: i32 },
    /// Added to the 150% vulnerable multiplier.
    VulnerableBonus { percent: i32 },
    /// Added to 100% on every heal.
    HealingBonus { percent: i32 },
    /// Strength while HP is at or below `threshold_pct` of max.
    StrengthIfLowHp { amount: i32, threshold_pct: i32 },
    /// Unspent energy carries over.
    ConserveEnergy,
    /// At most `limit` cards per turn.
    CardLimit { limit: u32 },
}

/// Immutable relic record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RelicDefinition {
    pub id: RelicId,
    pub name: String,
    #[serde(default)]
    pub rarity: RelicRarity,
    #[serde(default)]
    pub trigger: RelicTrigger,
    pub effect: RelicEffect,
    /// Fire once every `threshold` qualifying events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u32>,
    /// Fire at most once per combat.
    #[serde(default)]
    pub once_per_combat: bool,
    /// Fire only on this turn number (1-based).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turn: Option<u32>,
    /// Counter resets at the end of each turn.
    #[serde(default)]
    pub reset_on_turn_end: bool,
}

impl RelicDefinition {
    #[must_use]
    pub fn new(id: &str, name: &str, rarity: RelicRarity, trigger: RelicTrigger, effect: RelicEffect) -> Self {
        Self {
            id: RelicId::new(id),
            name: name.to_string(),
            rarity,
            trigger,
            effect,
            threshold: None,
            once_per_combat: false,
            turn: None,
            reset_on_turn_end: false,
        }
    }

    #[must_use]
    pub fn every(mut self, threshold: u32) -> Self {
        self.threshold = Some(threshold);
        self
    }

    #[must_use]
    pub fn once_per_combat(mut self) -> Self {
        self.once_per_combat = true;
        self
    }

    #[must_use]
    pub fn on_turn(mut self, turn: u32) -> Self {
        self.turn = Some(turn);
        self
    }

    #[must_use]
    pub fn reset_each_turn(mut self) -> Self {
        self.reset_on_turn_end = true;
        self
    }
}
