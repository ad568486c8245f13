//! Multi-floor runs.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::content::{AscensionModifiers, CardDefinition, CardRarity, Catalog, RelicTrigger};
use crate::core::{GameRng, RunConfig, SimError};
use crate::encounters::{boss_encounter, generate_encounter, Encounter, EncounterKind};
use crate::entities::Player;
use crate::relics::{RelicSet, TriggerContext, TriggerEffects};

use super::combat::{fight, SimulationResult};
use super::policy::GreedyPolicy;

/// Share of max HP restored between acts, in percent.
const ACT_REST_PERCENT: i32 = 25;

/// One fought floor of a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorStats {
    /// 1-based floor number over the whole run.
    pub floor: u32,
    pub act: u32,
    pub kind: EncounterKind,
    #[serde(flatten)]
    pub result: SimulationResult,
}

/// Outcome of a simulated run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    pub survived: bool,
    pub ascension: u32,
    pub floors_cleared: u32,
    pub acts_completed: u32,
    pub final_hp: i32,
    pub deck_size: usize,
    pub floors: Vec<FloorStats>,
}

impl RunResult {
    /// The floor that ended a failed run.
    #[must_use]
    pub fn fatal_floor(&self) -> Option<&FloorStats> {
        self.floors.last().filter(|f| !f.result.won)
    }
}

/// Out-of-combat state carried from floor to floor.
struct Expedition<'a> {
    catalog: &'a Catalog,
    config: &'a RunConfig,
    ascension: AscensionModifiers,
    rng: GameRng,
    hp: i32,
    max_hp: i32,
    deck: Vec<Arc<CardDefinition>>,
    relics: RelicSet,
    floors: Vec<FloorStats>,
    floors_cleared: u32,
}

impl<'a> Expedition<'a> {
    fn start(catalog: &'a Catalog, config: &'a RunConfig) -> Result<Self, SimError> {
        let ascension = AscensionModifiers::for_level(config.ascension);
        let mut deck = catalog.starter_deck()?;
        if ascension.start_with_wound {
            deck.push(Arc::clone(catalog.card("wound")?));
        }
        let mut run = Self {
            catalog,
            config,
            ascension,
            rng: GameRng::new(config.seed),
            hp: config.hp.clamp(1, config.max_hp.max(1)),
            max_hp: config.max_hp.max(1),
            deck,
            relics: RelicSet::new(),
            floors: Vec::new(),
            floors_cleared: 0,
        };
        for id in &config.relics {
            let def = Arc::clone(catalog.relic(id.as_str())?);
            let bonus = run.relics.pick_up(def);
            run.apply(&bonus);
        }
        Ok(run)
    }

    fn context(&self) -> TriggerContext {
        TriggerContext::new(0).with_vitals(self.hp, self.max_hp, 0)
    }

    /// Apply the parts of a relic bundle that matter outside combat.
    fn apply(&mut self, bundle: &TriggerEffects) {
        if bundle.max_hp > 0 {
            self.max_hp += bundle.max_hp;
            self.hp += bundle.max_hp;
        }
        self.heal(bundle.heal);
    }

    fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount.max(0)).min(self.max_hp);
    }

    fn floor_heal(&mut self) {
        let amount = self.ascension.floor_heal(self.config.heal_per_floor, self.max_hp);
        self.heal(amount);
    }

    /// Fight one floor. Returns whether the player survived.
    fn fight(&mut self, act: u32, kind: EncounterKind, encounter: &Encounter) -> Result<bool, SimError> {
        let options = self
            .config
            .combat
            .clone()
            .with_seed(self.rng.next_seed())
            .with_ascension(self.ascension.level);
        let player = Player::new(self.hp, self.max_hp);
        let relics = std::mem::take(&mut self.relics);
        let (result, player, relics) =
            fight(&GreedyPolicy, self.catalog, player, &self.deck, encounter, relics, &options)?;

        self.relics = relics;
        self.hp = player.vitals.hp;
        self.max_hp = player.vitals.max_hp;
        let won = result.won;
        tracing::debug!(
            floor = self.floors_cleared + 1,
            act,
            ?kind,
            won,
            hp = self.hp,
            "floor fought"
        );
        self.floors.push(FloorStats {
            floor: self.floors_cleared + 1,
            act,
            kind,
            result,
        });
        Ok(won)
    }

    /// Add a random card of a rolled rarity: common 60%, uncommon 30%, rare 10%.
    fn card_reward(&mut self) {
        let roll = self.rng.next_f64();
        let rarity = if roll < 0.6 {
            CardRarity::Common
        } else if roll < 0.9 {
            CardRarity::Uncommon
        } else {
            CardRarity::Rare
        };
        let pool: Vec<&Arc<CardDefinition>> = self.catalog.reward_pool(rarity).collect();
        if let Some(card) = self.rng.choose(&pool) {
            self.deck.push(Arc::clone(card));
        }
        let cx = self.context();
        let bundle = self.relics.trigger(RelicTrigger::CardReward, &cx);
        self.apply(&bundle);
    }

    fn rest(&mut self) {
        self.heal(self.max_hp * ACT_REST_PERCENT / 100);
        let cx = self.context();
        let bundle = self.relics.trigger(RelicTrigger::Rest, &cx);
        self.apply(&bundle);
    }

    fn finish(self, survived: bool, acts_completed: u32) -> RunResult {
        RunResult {
            survived,
            ascension: self.ascension.level,
            floors_cleared: self.floors_cleared,
            acts_completed,
            final_hp: if survived { self.hp } else { 0 },
            deck_size: self.deck.len(),
            floors: self.floors,
        }
    }
}

/// Chain combats through `config.acts` acts of `config.floors_per_act`
/// floors plus a boss each.
///
/// After each normal floor the player heals `config.heal_per_floor`, at
/// most 30% of max HP (25% from ascension 4).
///
/// Deterministic in `config`. Fails only on content errors (a missing
/// relic, an empty encounter pool); losing a fight is a normal result.
pub fn simulate_run(catalog: &Catalog, config: &RunConfig) -> Result<RunResult, SimError> {
    let mut run = Expedition::start(catalog, config)?;

    for act in 1..=config.acts {
        for floor in 1..=config.floors_per_act {
            let elite = run.rng.gen_bool(config.elite_chance);
            let encounter = generate_encounter(catalog, act, floor, elite, &mut run.rng)?;
            let kind = encounter.kind;
            if !run.fight(act, kind, &encounter)? {
                return Ok(run.finish(false, act - 1));
            }
            run.floor_heal();
            if config.card_rewards {
                run.card_reward();
            }
            run.floors_cleared += 1;
        }

        let boss = boss_encounter(catalog, act, &mut run.rng)?;
        if !run.fight(act, EncounterKind::Boss, &boss)? {
            return Ok(run.finish(false, act - 1));
        }
        if act < config.acts {
            run.rest();
        }
        run.floors_cleared += 1;
    }

    let acts = config.acts;
    Ok(run.finish(true, acts))
}
