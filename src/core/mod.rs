//! Core types: ids, RNG, configuration, errors.
//!
//! Everything here is content-agnostic. Content, entities and the combat
//! engine build on these.

pub mod ids;
pub mod entity;
pub mod rng;
pub mod config;
pub mod error;

pub use ids::{CardId, EnemyId, MoveId, RelicId};
pub use entity::{EntityAllocator, EntityId};
pub use rng::{GameRng, GameRngState};
pub use config::{BalanceOptions, CombatOptions, RunConfig};
pub use error::{RecordKind, SimError};
