//! Enemy templates and moves.
//!
//! ## Key Types
//!
//! - `EnemyTemplate`: immutable enemy record (HP range, moveset, AI, passives)
//! - `Move`: one entry of a moveset
//! - `Intent`: the category shown to the player before a move executes
//! - `AiSpec`: how the next move is chosen (named pattern or native behaviour)

use serde::{Deserialize, Serialize};

use crate::core::{EnemyId, GameRng, MoveId};

use super::effect::Effect;
use super::special::{SpawnRecipe, SpecialEffect};

/// Enemy category. Encounter pools never mix categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    #[default]
    Normal,
    Elite,
    Boss,
    /// Only ever spawned by another enemy.
    Minion,
}

/// Strength tag of a normal enemy, used to keep multi-enemy groups tractable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthTier {
    Weak,
    Medium,
    #[default]
    Strong,
}

/// Category of an upcoming move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Attack,
    AttackBuff,
    AttackDebuff,
    AttackDefend,
    Buff,
    Debuff,
    Defend,
    DefendBuff,
    StrongDebuff,
    Sleeping,
    Stun,
    #[default]
    Unknown,
}

impl Intent {
    /// Does this intent deal damage?
    #[must_use]
    pub const fn is_attack(self) -> bool {
        matches!(
            self,
            Intent::Attack | Intent::AttackBuff | Intent::AttackDebuff | Intent::AttackDefend
        )
    }
}

/// HP of a template: a fixed value or an inclusive range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HpRange {
    Fixed(i32),
    Range { min: i32, max: i32 },
}

impl Default for HpRange {
    fn default() -> Self {
        HpRange::Fixed(1)
    }
}

impl HpRange {
    /// Roll a value uniformly within the range.
    pub fn roll(self, rng: &mut GameRng) -> i32 {
        match self {
            HpRange::Fixed(hp) => hp,
            HpRange::Range { min, max } => rng.gen_inclusive(min, max),
        }
    }

    /// Smallest value the range can produce.
    #[must_use]
    pub const fn min(self) -> i32 {
        match self {
            HpRange::Fixed(hp) => hp,
            HpRange::Range { min, .. } => min,
        }
    }
}

/// Per-hit damage of a move: fixed or rolled per use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DamageRoll {
    Fixed(i32),
    Range { min: i32, max: i32 },
}

impl DamageRoll {
    /// Resolve the base damage for one use of the move.
    pub fn roll(self, rng: &mut GameRng) -> i32 {
        match self {
            DamageRoll::Fixed(d) => d,
            DamageRoll::Range { min, max } => rng.gen_inclusive(min, max),
        }
    }

    /// Expected base damage, for intent previews.
    #[must_use]
    pub const fn preview(self) -> i32 {
        match self {
            DamageRoll::Fixed(d) => d,
            DamageRoll::Range { min, max } => (min + max) / 2,
        }
    }
}

/// One entry of a moveset.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Move {
    pub id: MoveId,
    pub name: String,
    pub intent: Intent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage: Option<DamageRoll>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hits: Option<u32>,
    pub effects: Vec<Effect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special: Option<SpecialEffect>,
}

impl Move {
    /// A move with only an intent.
    #[must_use]
    pub fn new(id: &str, name: &str, intent: Intent) -> Self {
        Self {
            id: MoveId::new(id),
            name: name.to_string(),
            intent,
            ..Self::default()
        }
    }

    /// A single-hit attack.
    #[must_use]
    pub fn attack(id: &str, name: &str, damage: i32) -> Self {
        Self::new(id, name, Intent::Attack).with_damage(damage)
    }

    #[must_use]
    pub fn with_intent(mut self, intent: Intent) -> Self {
        self.intent = intent;
        self
    }

    #[must_use]
    pub fn with_damage(mut self, damage: i32) -> Self {
        self.damage = Some(DamageRoll::Fixed(damage));
        self
    }

    #[must_use]
    pub fn with_damage_range(mut self, min: i32, max: i32) -> Self {
        self.damage = Some(DamageRoll::Range { min, max });
        self
    }

    #[must_use]
    pub fn with_hits(mut self, hits: u32) -> Self {
        self.hits = Some(hits);
        self
    }

    #[must_use]
    pub fn with_block(mut self, block: i32) -> Self {
        self.block = Some(block);
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    #[must_use]
    pub fn with_special(mut self, special: SpecialEffect) -> Self {
        self.special = Some(special);
        self
    }

    /// Hit count, defaulting to one.
    #[must_use]
    pub fn hit_count(&self) -> u32 {
        self.hits.unwrap_or(1).max(1)
    }
}

/// Native decision procedure of a built-in enemy.
///
/// Custom content cannot name these; it is restricted to `AiSpec` patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NativeAi {
    Cultist,
    JawWorm,
    RedLouse,
    GreenLouse,
    AcidSlimeSmall,
    AcidSlimeMedium,
    AcidSlimeLarge,
    SpikeSlimeMedium,
    /// Large slimes produced by the slime boss split.
    SplitSlime,
    FungiBeast,
    Looter,
    GremlinNob,
    Lagavulin,
    Sentry,
    Chosen,
    Byrd,
    SnakePlant,
    Centurion,
    BookOfStabbing,
    GremlinLeader,
    Slaver,
    Mystic,
    ShelledParasite,
    SphericGuardian,
    WrithingMass,
    GiantHead,
    Reptomancer,
    Dagger,
    OrbWalker,
    Spiker,
    SlimeBoss,
    Guardian,
    Hexaghost,
    Champ,
    AwakenedOne,
    TimeEater,
    CorruptHeart,
}

/// How an enemy chooses its next move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "pattern", rename_all = "snake_case")]
pub enum AiSpec {
    /// `moveset[turn % len]`.
    Sequential,
    /// Uniform choice every turn.
    Random,
    /// Move 0 on turn 0, uniform choice afterwards.
    FirstThenRandom,
    /// Move 0 on turn 0, then weights `len - i` without repeating the last move.
    Weighted,
    /// First `split_turn` turns cycle the first half, later turns the second half.
    PhaseShift {
        #[serde(default = "default_split_turn")]
        split_turn: u32,
    },
    /// Built-in behaviour selected by id.
    Native { behavior: NativeAi },
}

const fn default_split_turn() -> u32 {
    3
}

impl Default for AiSpec {
    fn default() -> Self {
        AiSpec::Sequential
    }
}

impl AiSpec {
    /// Can data-authored content use this spec?
    #[must_use]
    pub const fn is_pattern(&self) -> bool {
        !matches!(self, AiSpec::Native { .. })
    }
}

/// Static passive flags copied onto every instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Passives {
    pub artifact: i32,
    pub thorns: i32,
    pub metallicize: i32,
    /// Starts with 3 flight.
    pub flying: bool,
    /// Block is not removed at the start of its turn.
    pub retain_block: bool,
    /// Starts asleep (see `NativeAi::Lagavulin`).
    pub asleep: bool,
    /// Comes back once at full HP after dying.
    pub can_rebirth: bool,
    /// Damage shield drained before block.
    pub invincible: i32,
    /// Gains strength whenever the player plays a skill.
    pub enrage: i32,
    /// Turn count at which a slow-counting enemy unleashes its big attack.
    pub slow_limit: u32,
}

/// Immutable enemy record.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTemplate {
    pub id: EnemyId,
    pub name: String,
    pub hp: HpRange,
    #[serde(rename = "type")]
    pub kind: EnemyKind,
    pub act: u32,
    pub tier: StrengthTier,
    pub moveset: Vec<Move>,
    pub ai: AiSpec,
    pub passives: Passives,
    /// Instances spawned per encounter (elites such as sentries).
    pub spawn_count: u32,
    /// Partner that must always be spawned alongside this enemy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paired_with: Option<EnemyId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_death: Option<SpawnRecipe>,
}

impl EnemyTemplate {
    /// A template with the given HP range and defaults elsewhere.
    #[must_use]
    pub fn new(id: &str, name: &str, kind: EnemyKind, act: u32, hp: HpRange) -> Self {
        Self {
            id: EnemyId::new(id),
            name: name.to_string(),
            hp,
            kind,
            act,
            spawn_count: 1,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_tier(mut self, tier: StrengthTier) -> Self {
        self.tier = tier;
        self
    }

    #[must_use]
    pub fn with_move(mut self, mv: Move) -> Self {
        self.moveset.push(mv);
        self
    }

    #[must_use]
    pub fn with_ai(mut self, ai: AiSpec) -> Self {
        self.ai = ai;
        self
    }

    #[must_use]
    pub fn native(self, behavior: NativeAi) -> Self {
        self.with_ai(AiSpec::Native { behavior })
    }

    #[must_use]
    pub fn with_passives(mut self, passives: Passives) -> Self {
        self.passives = passives;
        self
    }

    #[must_use]
    pub fn with_spawn_count(mut self, count: u32) -> Self {
        self.spawn_count = count;
        self
    }

    #[must_use]
    pub fn paired_with(mut self, partner: &str) -> Self {
        self.paired_with = Some(EnemyId::new(partner));
        self
    }

    #[must_use]
    pub fn on_death(mut self, recipe: SpawnRecipe) -> Self {
        self.on_death = Some(recipe);
        self
    }

    /// Index of a move by id.
    #[must_use]
    pub fn move_index(&self, id: &str) -> Option<usize> {
        self.moveset.iter().position(|m| m.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hp_range_roll_within_bounds() {
        let mut rng = GameRng::new(3);
        let hp = HpRange::Range { min: 10, max: 15 };
        for _ in 0..100 {
            let v = hp.roll(&mut rng);
            assert!((10..=15).contains(&v));
        }
        assert_eq!(HpRange::Fixed(140).roll(&mut rng), 140);
    }

    #[test]
    fn test_hp_range_json_forms() {
        let fixed: HpRange = serde_json::from_str("140").unwrap();
        assert_eq!(fixed, HpRange::Fixed(140));
        let range: HpRange = serde_json::from_str(r#"{"min": 8, "max": 12}"#).unwrap();
        assert_eq!(range, HpRange::Range { min: 8, max: 12 });
    }

    #[test]
    fn test_ai_spec_json_forms() {
        let weighted: AiSpec = serde_json::from_str(r#"{"pattern": "weighted"}"#).unwrap();
        assert_eq!(weighted, AiSpec::Weighted);

        let phase: AiSpec = serde_json::from_str(r#"{"pattern": "phase_shift"}"#).unwrap();
        assert_eq!(phase, AiSpec::PhaseShift { split_turn: 3 });

        let native: AiSpec = serde_json::from_str(r#"{"pattern": "native", "behavior": "cultist"}"#).unwrap();
        assert!(!native.is_pattern());
    }

    #[test]
    fn test_intent_attack_classification() {
        assert!(Intent::AttackDebuff.is_attack());
        assert!(!Intent::DefendBuff.is_attack());
        assert!(!Intent::Sleeping.is_attack());
    }
}
