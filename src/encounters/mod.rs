//! Encounter generation.
//!
//! `generate_encounter` picks a normal or elite group for a floor and
//! `boss_encounter` picks the act boss. Both return templates; the combat
//! instantiates them with its own RNG stream.

mod generator;

pub use generator::{
    boss_encounter, generate_encounter, Encounter, EncounterKind, EncounterTier, ACT_LENGTH,
};
