//! Derived spawns: splits and summons.
//!
//! Each `SpawnRecipe` maps a parent instance to at most two new instances.
//! HP of split products is derived from the parent's current HP; summons
//! roll HP from their own template with the combat RNG.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::content::{Catalog, SpawnRecipe};
use crate::core::{EntityAllocator, GameRng, SimError};

use super::enemy::EnemyInstance;

/// Spawned instances of one recipe.
pub type Spawned = SmallVec<[EnemyInstance; 2]>;

/// Most enemies that may be alive at once.
pub const MAX_LIVING_ENEMIES: usize = 6;

/// Run a recipe against `parent`.
pub fn spawn(
    recipe: SpawnRecipe,
    parent: &EnemyInstance,
    catalog: &Catalog,
    ids: &mut EntityAllocator,
    rng: &mut GameRng,
) -> Result<Spawned, SimError> {
    let mut out = Spawned::new();
    let half = (parent.vitals.hp / 2).max(1);

    match recipe {
        SpawnRecipe::AcidSlimeSmallPair
        | SpawnRecipe::SpikeSlimeSmallPair
        | SpawnRecipe::Daggers => {
            let template = catalog.enemy(recipe.templates()[0])?;
            for _ in 0..2 {
                out.push(EnemyInstance::spawn(ids.next_id(), Arc::clone(template), rng));
            }
        }
        SpawnRecipe::AcidSlimeMediumSplit => {
            let template = catalog.enemy(recipe.templates()[0])?;
            for _ in 0..2 {
                out.push(EnemyInstance::with_hp(ids.next_id(), Arc::clone(template), half));
            }
        }
        SpawnRecipe::SlimeBossSplit => {
            for id in recipe.templates() {
                let template = catalog.enemy(id)?;
                out.push(EnemyInstance::with_hp(ids.next_id(), Arc::clone(template), half));
            }
        }
        SpawnRecipe::Gremlins => {
            for _ in 0..2 {
                let kinds = recipe.templates();
                let pick = kinds[rng.gen_range_usize(0..kinds.len())];
                let template = catalog.enemy(pick)?;
                out.push(EnemyInstance::spawn(ids.next_id(), Arc::clone(template), rng));
            }
        }
    }

    tracing::debug!(
        parent = parent.name(),
        ?recipe,
        spawned = out.len(),
        "spawn recipe"
    );
    Ok(out)
}
