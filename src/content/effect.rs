//! Status effect descriptors attached to cards and moves.
//!
//! An `Effect` is a named status delta: "apply 2 vulnerable", "gain 3
//! strength". Debuffs land on the opponent of whoever produced them and
//! everything else lands on the producer, so a move's `strength` buffs
//! the enemy while its `weak` hits the player. `on_self` forces a debuff
//! onto the producer and `target` overrides both rules.

use serde::{Deserialize, Serialize};

/// A status counter that effects can change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Vulnerable,
    Weak,
    Frail,
    Strength,
    StrengthDown,
    Dexterity,
    DexterityDown,
    Poison,
    Artifact,
    Ritual,
    Enrage,
    Thorns,
    Metallicize,
    Entangle,
    DrawReduction,
    Intangible,
}

impl StatusKind {
    /// Debuffs are negated by artifact.
    #[must_use]
    pub const fn is_debuff(self) -> bool {
        matches!(
            self,
            StatusKind::Vulnerable
                | StatusKind::Weak
                | StatusKind::Frail
                | StatusKind::StrengthDown
                | StatusKind::DexterityDown
                | StatusKind::Poison
                | StatusKind::Entangle
                | StatusKind::DrawReduction
        )
    }
}

/// Explicit recipient of an effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectTarget {
    Player,
    /// The enemy a card targets, or the acting enemy for a move.
    Enemy,
    /// Every living enemy.
    AllEnemies,
}

/// A status delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    #[serde(rename = "type")]
    pub kind: StatusKind,
    pub amount: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<EffectTarget>,
    #[serde(default, rename = "self", skip_serializing_if = "std::ops::Not::not")]
    pub on_self: bool,
}

impl Effect {
    /// A status delta with the default recipient.
    #[must_use]
    pub const fn new(kind: StatusKind, amount: i32) -> Self {
        Self {
            kind,
            amount,
            target: None,
            on_self: false,
        }
    }

    /// The same delta applied to the acting entity.
    #[must_use]
    pub const fn on_self(mut self) -> Self {
        self.on_self = true;
        self
    }

    /// Does the effect land on the entity that produced it when no
    /// explicit `target` is given?
    #[must_use]
    pub const fn defaults_to_actor(&self) -> bool {
        self.on_self || !self.kind.is_debuff()
    }

    /// The same delta sent to an explicit recipient.
    #[must_use]
    pub const fn targeting(mut self, target: EffectTarget) -> Self {
        self.target = Some(target);
        self
    }
}
