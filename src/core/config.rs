//! Simulation configuration.
//!
//! ## Key Types
//!
//! - `CombatOptions`: per-combat knobs (seed, turn cap, draw, energy, ascension)
//! - `RunConfig`: a multi-floor run
//! - `BalanceOptions`: a batch of runs
//!
//! All configs deserialize with `#[serde(default)]`, so a JSON file only
//! needs the fields it changes.

use serde::{Deserialize, Serialize};

use super::ids::RelicId;

/// Per-combat configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatOptions {
    /// Seed for the combat's RNG stream.
    pub seed: u64,

    /// Safety bound on player turns. Reaching it counts as a loss.
    pub max_turns: u32,

    /// Cards drawn at the start of each player turn.
    pub draw_per_turn: u32,

    /// Energy granted at the start of each player turn (before relics).
    pub base_energy: i32,

    /// Ascension level applied to the encounter's enemies.
    pub ascension: u32,
}

impl Default for CombatOptions {
    fn default() -> Self {
        Self {
            seed: 42,
            max_turns: 50,
            draw_per_turn: 5,
            base_energy: 3,
            ascension: 0,
        }
    }
}

impl CombatOptions {
    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the turn cap.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Set cards drawn per turn.
    #[must_use]
    pub fn with_draw_per_turn(mut self, draw: u32) -> Self {
        self.draw_per_turn = draw;
        self
    }

    /// Set base energy per turn.
    #[must_use]
    pub fn with_base_energy(mut self, energy: i32) -> Self {
        self.base_energy = energy;
        self
    }

    /// Set the ascension level.
    #[must_use]
    pub fn with_ascension(mut self, level: u32) -> Self {
        self.ascension = level;
        self
    }
}

/// Configuration of a simulated run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Seed for the run's RNG stream.
    pub seed: u64,

    /// Normal/elite floors per act, fought before the act boss.
    pub floors_per_act: u32,

    /// Number of acts (each ends with a boss).
    pub acts: u32,

    /// Starting HP.
    pub hp: i32,

    /// Starting max HP.
    pub max_hp: i32,

    /// HP restored after each cleared floor, capped at a share of max HP
    /// that depends on the ascension level.
    pub heal_per_floor: i32,

    /// Ascension level. Replaces `combat.ascension` for every fight.
    pub ascension: u32,

    /// Chance that a floor is an elite fight.
    pub elite_chance: f64,

    /// Add a random card to the deck after each cleared floor.
    pub card_rewards: bool,

    /// Relics held from the start of the run.
    pub relics: Vec<RelicId>,

    /// Options applied to every combat (the seed is re-derived per floor).
    pub combat: CombatOptions,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            floors_per_act: 14,
            acts: 1,
            hp: 80,
            max_hp: 80,
            heal_per_floor: 6,
            ascension: 0,
            elite_chance: 0.1,
            card_rewards: true,
            relics: vec![RelicId::new("burning_blood")],
            combat: CombatOptions::default(),
        }
    }
}

impl RunConfig {
    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set floors per act.
    #[must_use]
    pub fn with_floors(mut self, floors: u32) -> Self {
        self.floors_per_act = floors;
        self
    }

    /// Set the number of acts.
    #[must_use]
    pub fn with_acts(mut self, acts: u32) -> Self {
        self.acts = acts;
        self
    }

    /// Set starting HP and max HP.
    #[must_use]
    pub fn with_hp(mut self, hp: i32, max_hp: i32) -> Self {
        self.hp = hp;
        self.max_hp = max_hp;
        self
    }

    /// Set inter-floor healing.
    #[must_use]
    pub fn with_heal_per_floor(mut self, heal: i32) -> Self {
        self.heal_per_floor = heal;
        self
    }

    /// Set the ascension level.
    #[must_use]
    pub fn with_ascension(mut self, level: u32) -> Self {
        self.ascension = level;
        self
    }

    /// Set the elite chance.
    #[must_use]
    pub fn with_elite_chance(mut self, chance: f64) -> Self {
        self.elite_chance = chance;
        self
    }

    /// Enable or disable card rewards.
    #[must_use]
    pub fn with_card_rewards(mut self, enabled: bool) -> Self {
        self.card_rewards = enabled;
        self
    }

    /// Replace the starting relics.
    #[must_use]
    pub fn with_relics<I, S>(mut self, relics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.relics = relics.into_iter().map(|r| RelicId::new(r.as_ref())).collect();
        self
    }

    /// Set per-combat options.
    #[must_use]
    pub fn with_combat(mut self, combat: CombatOptions) -> Self {
        self.combat = combat;
        self
    }
}

/// Configuration of a balance batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceOptions {
    /// Template for every run. `run.seed` is the batch seed; run `i`
    /// gets a sub-seed derived from it.
    pub run: RunConfig,

    /// Spread runs across the rayon thread pool.
    pub parallel: bool,
}

impl Default for BalanceOptions {
    fn default() -> Self {
        Self {
            run: RunConfig::default(),
            parallel: true,
        }
    }
}

impl BalanceOptions {
    /// Set the run template.
    #[must_use]
    pub fn with_run(mut self, run: RunConfig) -> Self {
        self.run = run;
        self
    }

    /// Set the batch seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.run.seed = seed;
        self
    }

    /// Run sequentially or in parallel.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let run = RunConfig::default();
        assert_eq!(run.floors_per_act, 14);
        assert_eq!(run.acts, 1);
        assert_eq!(run.hp, 80);
        assert_eq!(run.heal_per_floor, 6);
        assert_eq!(run.ascension, 0);
        assert_eq!(run.combat.max_turns, 50);
        assert_eq!(run.relics, vec![RelicId::new("burning_blood")]);
    }

    #[test]
    fn test_builder_pattern() {
        let run = RunConfig::default()
            .with_seed(9)
            .with_acts(2)
            .with_hp(50, 70)
            .with_ascension(4)
            .with_relics(["anchor", "vajra"]);

        assert_eq!(run.seed, 9);
        assert_eq!(run.acts, 2);
        assert_eq!((run.hp, run.max_hp), (50, 70));
        assert_eq!(run.ascension, 4);
        assert_eq!(run.relics.len(), 2);
    }

    #[test]
    fn test_partial_json() {
        let run: RunConfig = serde_json::from_str(r#"{"acts": 3, "combat": {"max_turns": 20}}"#).unwrap();
        assert_eq!(run.acts, 3);
        assert_eq!(run.combat.max_turns, 20);
        assert_eq!(run.combat.draw_per_turn, 5);
        assert_eq!(run.floors_per_act, 14);
    }
}
