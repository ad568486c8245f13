//! Weighted encounter selection.
//!
//! Floors are bucketed within the 15-floor act cycle: floors 1-5 are
//! early, 11-15 late, the rest mid. The bucket and the act bias the
//! group size; the group size decides which strength tiers may appear.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::content::{Catalog, EnemyKind, EnemyTemplate, StrengthTier};
use crate::core::{EntityAllocator, GameRng, RecordKind, SimError};
use crate::entities::EnemyInstance;

/// Floors per act cycle used for tiering.
pub const ACT_LENGTH: u32 = 15;

/// Floor bucket within an act.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncounterTier {
    Early,
    Mid,
    Late,
}

impl EncounterTier {
    /// Bucket of an absolute floor number (1-based).
    #[must_use]
    pub fn of_floor(floor: u32) -> Self {
        let in_act = (floor.max(1) - 1) % ACT_LENGTH + 1;
        match in_act {
            0..=5 => EncounterTier::Early,
            11.. => EncounterTier::Late,
            _ => EncounterTier::Mid,
        }
    }

    /// Chances of a single and a double group; the rest is multi.
    #[must_use]
    pub fn group_chances(self, act: u32) -> (f64, f64) {
        let single = match act {
            1 => 0.50,
            2 => 0.45,
            _ => 0.40,
        };
        let double = 0.35;
        match self {
            EncounterTier::Early => (single + 0.15, double - 0.10),
            EncounterTier::Mid => (single, double),
            EncounterTier::Late => (single - 0.10, double + 0.05),
        }
    }
}

/// Kind of fight an encounter represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncounterKind {
    Normal,
    Elite,
    Boss,
}

/// Templates chosen for one fight, in spawn order.
#[derive(Clone, Debug)]
pub struct Encounter {
    pub kind: EncounterKind,
    pub templates: Vec<Arc<EnemyTemplate>>,
}

impl Encounter {
    #[must_use]
    pub fn new(kind: EncounterKind, templates: Vec<Arc<EnemyTemplate>>) -> Self {
        Self { kind, templates }
    }

    /// Roll HP and create the instances, each at its group slot.
    pub fn instantiate(&self, ids: &mut EntityAllocator, rng: &mut GameRng) -> Vec<EnemyInstance> {
        self.templates
            .iter()
            .enumerate()
            .map(|(slot, t)| EnemyInstance::spawn(ids.next_id(), Arc::clone(t), rng).at_slot(slot))
            .collect()
    }

    /// Id of the first template, used to attribute losses.
    #[must_use]
    pub fn lead(&self) -> Option<&str> {
        self.templates.first().map(|t| t.id.as_str())
    }
}

fn in_tiers<'a>(available: &[&'a Arc<EnemyTemplate>], tiers: &[StrengthTier]) -> Vec<&'a Arc<EnemyTemplate>> {
    available.iter().copied().filter(|e| tiers.contains(&e.tier)).collect()
}

/// Enemies of one tier that may be grouped. Paired enemies only come as a
/// single pick plus their partner.
fn groupable<'a>(available: &[&'a Arc<EnemyTemplate>], tier: StrengthTier) -> Vec<&'a Arc<EnemyTemplate>> {
    available
        .iter()
        .copied()
        .filter(|e| e.tier == tier && e.paired_with.is_none())
        .collect()
}

fn no_pool(what: String) -> SimError {
    SimError::unknown(RecordKind::Encounter, what)
}

fn pick<'a>(pool: &[&'a Arc<EnemyTemplate>], rng: &mut GameRng) -> Option<&'a Arc<EnemyTemplate>> {
    rng.choose(pool).copied()
}

/// Pick the enemies for a normal or elite floor.
pub fn generate_encounter(
    catalog: &Catalog,
    act: u32,
    floor: u32,
    elite: bool,
    rng: &mut GameRng,
) -> Result<Encounter, SimError> {
    if elite {
        return elite_encounter(catalog, act, rng);
    }

    let available: Vec<&Arc<EnemyTemplate>> = catalog
        .find_enemies(|e| e.kind == EnemyKind::Normal && e.act <= act)
        .collect();
    if available.is_empty() {
        return Err(no_pool(format!("normal enemies for act {act}")));
    }

    let tier = EncounterTier::of_floor(floor);
    let (single, double) = tier.group_chances(act);
    let roll = rng.next_f64();

    let encounter = if roll < single {
        let preferred = match tier {
            EncounterTier::Early if act == 1 => in_tiers(&available, &[StrengthTier::Weak, StrengthTier::Medium]),
            EncounterTier::Late => in_tiers(&available, &[StrengthTier::Strong, StrengthTier::Medium]),
            _ => Vec::new(),
        };
        let pool = if preferred.is_empty() { &available } else { &preferred };
        let Some(lead) = pick(pool, rng) else {
            return Err(no_pool(format!("single enemy for act {act}")));
        };
        single_with_partner(catalog, lead)?
    } else if roll < single + double {
        let weak = groupable(&available, StrengthTier::Weak);
        let medium = groupable(&available, StrengthTier::Medium);
        let pool = if !weak.is_empty() && (tier == EncounterTier::Early || rng.next_f64() < 0.7) {
            weak
        } else {
            medium
        };
        match pick(&pool, rng) {
            Some(enemy) => vec![Arc::clone(enemy), Arc::clone(enemy)],
            None => fallback_single(&available, catalog, rng)?,
        }
    } else {
        let weak = groupable(&available, StrengthTier::Weak);
        if weak.is_empty() {
            match pick(&groupable(&available, StrengthTier::Medium), rng) {
                Some(enemy) => vec![Arc::clone(enemy), Arc::clone(enemy)],
                None => fallback_single(&available, catalog, rng)?,
            }
        } else {
            let count = if tier == EncounterTier::Early { 2 } else { rng.gen_inclusive(2, 3) };
            (0..count)
                .filter_map(|_| pick(&weak, rng).map(Arc::clone))
                .collect()
        }
    };

    tracing::debug!(
        act,
        floor,
        ?tier,
        enemies = ?encounter.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(),
        "normal encounter"
    );

    Ok(Encounter {
        kind: EncounterKind::Normal,
        templates: encounter,
    })
}

/// Group-size draw with no weak or medium enemies available: one enemy.
fn fallback_single(
    available: &[&Arc<EnemyTemplate>],
    catalog: &Catalog,
    rng: &mut GameRng,
) -> Result<Vec<Arc<EnemyTemplate>>, SimError> {
    match pick(available, rng) {
        Some(lead) => single_with_partner(catalog, lead),
        None => Err(no_pool("fallback enemy".to_string())),
    }
}

fn single_with_partner(
    catalog: &Catalog,
    lead: &Arc<EnemyTemplate>,
) -> Result<Vec<Arc<EnemyTemplate>>, SimError> {
    let mut out = vec![Arc::clone(lead)];
    if let Some(partner) = &lead.paired_with {
        out.push(Arc::clone(catalog.enemy(partner.as_str())?));
    }
    Ok(out)
}

fn elite_encounter(catalog: &Catalog, act: u32, rng: &mut GameRng) -> Result<Encounter, SimError> {
    let available: Vec<&Arc<EnemyTemplate>> = catalog
        .find_enemies(|e| e.kind == EnemyKind::Elite && e.act <= act)
        .collect();
    let current: Vec<&Arc<EnemyTemplate>> = available.iter().copied().filter(|e| e.act == act).collect();
    let pool = if current.is_empty() { &available } else { &current };

    let Some(elite) = pick(pool, rng) else {
        return Err(no_pool(format!("elites for act {act}")));
    };
    let count = elite.spawn_count.max(1);
    tracing::debug!(act, elite = %elite.id, count, "elite encounter");

    Ok(Encounter {
        kind: EncounterKind::Elite,
        templates: (0..count).map(|_| Arc::clone(elite)).collect(),
    })
}

/// One random boss registered for `act`.
pub fn boss_encounter(catalog: &Catalog, act: u32, rng: &mut GameRng) -> Result<Encounter, SimError> {
    let bosses: Vec<&Arc<EnemyTemplate>> = catalog.bosses(act).collect();
    let Some(boss) = pick(&bosses, rng) else {
        return Err(no_pool(format!("boss for act {act}")));
    };
    tracing::debug!(act, boss = %boss.id, "boss encounter");
    Ok(Encounter {
        kind: EncounterKind::Boss,
        templates: vec![Arc::clone(boss)],
    })
}
