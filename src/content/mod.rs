//! Content tables: cards, enemies and relics.
//!
//! ## Key Types
//!
//! - `CardDefinition`, `EnemyTemplate`, `RelicDefinition`: immutable records
//! - `Catalog`: indexed snapshot of all records
//! - `OverrideStore`: user-authored partial records merged into a new catalog
//! - `AscensionModifiers`: per-level difficulty modifiers
//!
//! Definitions are plain serde types so the same shapes serve the
//! built-in tables, JSON overrides and reports.

pub mod effect;
pub mod card;
pub mod enemy;
pub mod special;
pub mod relic;
pub mod data;
pub mod catalog;
pub mod overrides;
pub mod ascension;

pub use effect::{Effect, EffectTarget, StatusKind};
pub use card::{CardDefinition, CardRarity, CardSpecial, CardType, CardUpgrade, Cost};
pub use enemy::{
    AiSpec, DamageRoll, EnemyKind, EnemyTemplate, HpRange, Intent, Move, NativeAi, Passives,
    StrengthTier,
};
pub use special::{OneShot, Pile, SpawnRecipe, SpecialEffect};
pub use relic::{RelicDefinition, RelicEffect, RelicRarity, RelicTrigger};
pub use catalog::{Catalog, Record, Table};
pub use overrides::{deep_merge, MergeOutcome, OverrideStore};
pub use ascension::{AscensionModifiers, MAX_ASCENSION};
