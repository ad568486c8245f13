//! # spire-sim
//!
//! A deterministic turn-based card-combat simulation core with a headless
//! balance simulator.
//!
//! ## Design Principles
//!
//! 1. **Pure Function of the Seed**: every random choice (HP rolls, enemy
//!    AI, encounter pools, shuffles) draws from an explicit `GameRng`.
//!    The same inputs and seed always give the same combat.
//!
//! 2. **Behaviour as Data**: enemy AI is a tagged `AiSpec` and special moves
//!    are a closed `SpecialEffect` enum, dispatched by exhaustive matches.
//!
//! 3. **Immutable Content**: the base `Catalog` is never mutated. Overrides
//!    produce a fresh snapshot.
//!
//! ## Modules
//!
//! - `core`: ids, RNG, configuration, errors
//! - `content`: card, enemy and relic definitions, base tables, overrides
//! - `effects`: damage/block math and status application
//! - `entities`: runtime player, enemy and card instances, spawn recipes
//! - `ai`: enemy move selection
//! - `relics`: relic trigger dispatch
//! - `encounters`: weighted encounter generation
//! - `combat`: the turn engine and its presentation boundary
//! - `sim`: headless combats, runs and balance reports

pub mod core;
pub mod content;
pub mod effects;
pub mod entities;
pub mod ai;
pub mod relics;
pub mod encounters;
pub mod combat;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    BalanceOptions, CardId, CombatOptions, EnemyId, EntityId, GameRng, MoveId, RecordKind, RelicId,
    RunConfig, SimError,
};

pub use crate::content::{
    AiSpec, CardDefinition, Catalog, Effect, EnemyTemplate, Move, OverrideStore, RelicDefinition,
    SpecialEffect, StatusKind,
};

pub use crate::effects::{compute_block, compute_damage, Statuses, Vitals};

pub use crate::entities::{CardInstance, EnemyInstance, Player};

pub use crate::relics::{RelicSet, TriggerEffects};

pub use crate::encounters::{boss_encounter, generate_encounter, Encounter, EncounterKind};

pub use crate::combat::{Combat, CombatOutcome, CombatSnapshot, IntentError, PlayerIntent};

pub use crate::sim::{
    run_balance_report, simulate_combat, simulate_run, BalanceReport, RunResult, SimulationResult,
};
