//! The relics a player holds and their per-combat state.
//!
//! `RelicSet` indexes relics by trigger so a phase boundary only visits
//! its subscribers. Each relic carries a counter and a used flag; both
//! reset at combat start.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::content::{Catalog, RelicDefinition, RelicEffect, RelicTrigger};
use crate::core::{RelicId, SimError};

use super::bundle::{PassiveEffects, TriggerContext, TriggerEffects};

/// A held relic.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RelicState {
    pub def: Arc<RelicDefinition>,
    /// Qualifying events since the relic last fired.
    pub counter: u32,
    /// Fired this combat (only tracked for once-per-combat relics).
    pub used: bool,
}

impl RelicState {
    #[must_use]
    pub fn new(def: Arc<RelicDefinition>) -> Self {
        Self {
            def,
            counter: 0,
            used: false,
        }
    }

    /// Advance the gates for one qualifying event. Returns whether the
    /// relic fires.
    ///
    /// Counter first: the event always counts, even when a later gate
    /// blocks the effect. Then the used flag, then the turn requirement.
    fn gate(&mut self, turn: u32) -> bool {
        if let Some(threshold) = self.def.threshold {
            self.counter += 1;
            if self.counter < threshold {
                return false;
            }
            self.counter = 0;
        }
        if self.def.once_per_combat && self.used {
            return false;
        }
        if self.def.turn.is_some_and(|t| t != turn) {
            return false;
        }
        if self.def.once_per_combat {
            self.used = true;
        }
        true
    }
}

/// The player's relics.
#[derive(Clone, Debug, Default)]
pub struct RelicSet {
    relics: Vec<RelicState>,
    by_trigger: FxHashMap<RelicTrigger, SmallVec<[usize; 4]>>,
}

impl RelicSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relic ids against the catalog.
    pub fn from_ids(catalog: &Catalog, ids: &[RelicId]) -> Result<Self, SimError> {
        let mut set = Self::new();
        for id in ids {
            set.insert(Arc::clone(catalog.relic(id.as_str())?));
        }
        Ok(set)
    }

    /// Add a relic without firing pickup effects.
    pub fn insert(&mut self, def: Arc<RelicDefinition>) {
        let index = self.relics.len();
        self.by_trigger.entry(def.trigger).or_default().push(index);
        self.relics.push(RelicState::new(def));
    }

    /// Add a relic and return what its `Pickup` trigger grants.
    pub fn pick_up(&mut self, def: Arc<RelicDefinition>) -> TriggerEffects {
        let mut out = TriggerEffects::default();
        if def.trigger == RelicTrigger::Pickup {
            out.add(&def.effect, &TriggerContext::default());
        }
        tracing::debug!(relic = %def.id, "picked up relic");
        self.insert(def);
        out
    }

    /// Fire every relic subscribed to `trigger` and aggregate their effects.
    pub fn trigger(&mut self, trigger: RelicTrigger, cx: &TriggerContext) -> TriggerEffects {
        let mut out = TriggerEffects::default();
        if trigger == RelicTrigger::Passive {
            return out;
        }
        let Some(indices) = self.by_trigger.get(&trigger) else {
            return out;
        };
        for &i in indices {
            let relic = &mut self.relics[i];
            if relic.gate(cx.turn) {
                tracing::debug!(relic = %relic.def.id, ?trigger, "relic fired");
                out.add(&relic.def.effect, cx);
            }
        }
        out
    }

    /// Current continuous modifiers.
    #[must_use]
    pub fn passive(&self, cx: &TriggerContext) -> PassiveEffects {
        let mut out = PassiveEffects::default();
        for &i in self.by_trigger.get(&RelicTrigger::Passive).into_iter().flatten() {
            out.add(&self.relics[i].def.effect, cx);
        }
        out
    }

    /// Flat reduction of every HP loss, from relics on `HpLoss`.
    ///
    /// Queried before a hit lands, without advancing any counter.
    #[must_use]
    pub fn hp_loss_reduction(&self) -> i32 {
        self.by_trigger
            .get(&RelicTrigger::HpLoss)
            .into_iter()
            .flatten()
            .map(|&i| match self.relics[i].def.effect {
                RelicEffect::ReduceHpLoss { amount } => amount,
                _ => 0,
            })
            .sum()
    }

    /// Clear counters and used flags.
    pub fn reset_for_combat(&mut self) {
        for relic in &mut self.relics {
            relic.counter = 0;
            relic.used = false;
        }
    }

    /// Reset counters of relics that only count within a turn.
    pub fn end_turn(&mut self) {
        for relic in self.relics.iter_mut().filter(|r| r.def.reset_on_turn_end) {
            relic.counter = 0;
        }
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.relics.iter().any(|r| r.def.id == id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RelicState> {
        self.relics.iter().find(|r| r.def.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RelicState> {
        self.relics.iter()
    }

    #[must_use]
    pub fn ids(&self) -> Vec<RelicId> {
        self.relics.iter().map(|r| r.def.id.clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.relics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.relics.is_empty()
    }
}
