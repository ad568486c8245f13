//! Special move behaviours and spawn recipes.
//!
//! Every behaviour a move can have beyond damage, block and status
//! effects is one variant of `SpecialEffect`. The combat engine applies
//! them in a single exhaustive `match` (see `combat::enemy_turn`), so a
//! new behaviour cannot be added without the compiler pointing at every
//! place that must handle it.

use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// Pile a status card is shuffled into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pile {
    Draw,
    #[default]
    Discard,
    Hand,
}

/// One-shot flag marked on the acting enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OneShot {
    Angered,
    Hasted,
}

/// Named derived-spawn recipe.
///
/// Each recipe is a pure function of the parent instance (plus the combat
/// RNG for rolled stats), see `entities::spawn`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnRecipe {
    /// Two small acid slimes with rolled HP.
    AcidSlimeSmallPair,
    /// Two small spike slimes with rolled HP.
    SpikeSlimeSmallPair,
    /// Two medium acid slimes, each with half the parent's current HP.
    AcidSlimeMediumSplit,
    /// One large acid and one large spike slime, each with half the parent's current HP.
    SlimeBossSplit,
    /// Two daggers.
    Daggers,
    /// Two gremlins of random kinds.
    Gremlins,
}

/// Template ids the gremlin recipe picks from.
pub const GREMLIN_KINDS: &[&str] = &[
    "gremlin_mad",
    "gremlin_sneaky",
    "gremlin_fat",
    "gremlin_wizard",
    "gremlin_shield",
];

impl SpawnRecipe {
    /// Every template id the recipe can produce.
    #[must_use]
    pub const fn templates(self) -> &'static [&'static str] {
        match self {
            SpawnRecipe::AcidSlimeSmallPair => &["slime_small"],
            SpawnRecipe::SpikeSlimeSmallPair => &["spike_slime_small"],
            SpawnRecipe::AcidSlimeMediumSplit => &["slime_medium"],
            SpawnRecipe::SlimeBossSplit => &["slime_large_acid", "slime_large_spike"],
            SpawnRecipe::Daggers => &["dagger"],
            SpawnRecipe::Gremlins => GREMLIN_KINDS,
        }
    }

    /// Does the parent leave combat when the recipe fires?
    #[must_use]
    pub const fn replaces_parent(self) -> bool {
        matches!(self, SpawnRecipe::AcidSlimeMediumSplit | SpawnRecipe::SlimeBossSplit)
    }
}

/// Closed set of special move behaviours.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpecialEffect {
    /// Split into derived enemies; marks `has_split`.
    Split { recipe: SpawnRecipe },
    /// Summon derived enemies next to the actor.
    Summon { recipe: SpawnRecipe },
    /// Restore to full HP once (see `entities::lifecycle::rebirth`).
    Rebirth { strength: i32 },
    /// Toggle defensive mode.
    ModeShift,
    /// Hit count starts at the move's hits and grows by `step` per use.
    EscalateHits { step: u32 },
    /// From now on the player takes `damage` per card played.
    BeatOfDeath { damage: i32 },
    /// Clear vulnerable and weak, optionally marking a one-shot flag.
    ClearDebuffs { mark: Option<OneShot> },
    HealSelf { amount: i32 },
    /// Heal the lowest-HP living ally that is below max HP.
    HealLowestAlly { amount: i32 },
    /// Give every other living enemy strength.
    BuffAllies { strength: i32 },
    GainFlight { amount: i32 },
    /// Advance the slow counter.
    Count,
    /// Leave combat (explode, flee). Counts as defeated.
    KillSelf,
    /// Per-hit damage becomes `player_hp / divisor + 1`.
    HpScaledDamage { divisor: i32 },
    /// Shuffle status cards into a pile; one id is picked per card when several are given.
    AddCards {
        cards: Vec<CardId>,
        count: u32,
        #[serde(default)]
        pile: Pile,
    },
    /// Upgrade every burn the player owns.
    UpgradeBurns,
}

impl SpecialEffect {
    /// Shorthand for adding copies of one status card.
    #[must_use]
    pub fn add_cards(card: &str, count: u32, pile: Pile) -> Self {
        SpecialEffect::AddCards {
            cards: vec![CardId::new(card)],
            count,
            pile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_json_shape() {
        let split: SpecialEffect =
            serde_json::from_str(r#"{"type": "split", "recipe": "slime_boss_split"}"#).unwrap();
        assert_eq!(split, SpecialEffect::Split { recipe: SpawnRecipe::SlimeBossSplit });

        let add: SpecialEffect =
            serde_json::from_str(r#"{"type": "add_cards", "cards": ["slimed"], "count": 2}"#).unwrap();
        assert_eq!(add, SpecialEffect::add_cards("slimed", 2, Pile::Discard));
    }

    #[test]
    fn test_unknown_special_rejected() {
        let result = serde_json::from_str::<SpecialEffect>(r#"{"type": "teleport"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_recipe_parent_replacement() {
        assert!(SpawnRecipe::SlimeBossSplit.replaces_parent());
        assert!(!SpawnRecipe::Daggers.replaces_parent());
    }
}
