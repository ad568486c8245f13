//! Relic trigger dispatch.
//!
//! ## Key Types
//!
//! - `RelicSet`: held relics indexed by trigger, with per-combat counters
//! - `TriggerContext`: player state a trigger is evaluated against
//! - `TriggerEffects`: everything the relics on one trigger contribute, summed
//! - `PassiveEffects`: continuous modifiers, queried instead of fired
//!
//! The combat engine calls `RelicSet::trigger` at each phase boundary and
//! applies the returned bundle once.

mod bundle;
mod registry;

pub use bundle::{PassiveEffects, TriggerContext, TriggerEffects};
pub use registry::{RelicSet, RelicState};
