//! Effect pipeline: damage and block math, and the state changes they
//! cause.
//!
//! - `compute_damage` / `compute_block`: pure arithmetic over modifier sets
//! - `apply_damage`: one hit against flight, shield, block and HP
//! - `apply_status` / `resolve_poison`: status deltas and poison ticks
//!
//! Order of damage modifiers is fixed: strength, weak, vulnerable.

mod damage;
mod status;

pub use damage::{
    compute_block, compute_damage, compute_damage_with, AttackerMods, BlockMods, DamageOptions,
    DefenderMods,
};
pub use status::{
    apply_damage, apply_damage_reduced, apply_status, resolve_poison, HitResult, Statuses, Vitals,
};
