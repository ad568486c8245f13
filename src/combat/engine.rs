//! The combat state machine.
//!
//! A `Combat` owns everything one fight needs: the player, the enemy
//! group, the four card piles, the player's relics and a private RNG
//! stream. The caller drives it with `PlayerIntent`s; ending the turn runs
//! the enemy phase and starts the next player turn in one step.
//!
//! Round order:
//!
//! 1. Player turn start: block reset (unless barricade), poison, energy,
//!    power upkeep, `TurnStart` relics, draw, enemy intents.
//! 2. Player intents.
//! 3. Turn end: `TurnEnd` relics, burns in hand, discard, metallicize.
//! 4. Enemy phase, one enemy at a time.
//! 5. Round ticks on every timed status.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::ai;
use crate::content::{
    AscensionModifiers, CardDefinition, CardSpecial, CardType, Catalog, RelicTrigger, SpecialEffect,
    StatusKind,
};
use crate::core::{CombatOptions, EntityAllocator, EntityId, GameRng};
use crate::effects::{
    apply_damage, apply_damage_reduced, apply_status, compute_damage, resolve_poison, HitResult,
};
use crate::encounters::Encounter;
use crate::entities::{
    spawn, wake_on_hp_loss, CardInstance, EnemyFlags, EnemyInstance, Player, MAX_LIVING_ENEMIES,
};
use crate::relics::{PassiveEffects, RelicSet, TriggerContext, TriggerEffects};

use super::intent::{IntentError, PlayerIntent};
use super::stats::{CombatOutcome, CombatStats};

/// Most cards the hand can hold. Extra cards go to the discard pile.
pub const HAND_LIMIT: usize = 10;

/// One fight between the player and an enemy group.
pub struct Combat<'a> {
    pub(crate) catalog: &'a Catalog,
    pub(crate) options: CombatOptions,
    pub(crate) rng: GameRng,
    pub(crate) ids: EntityAllocator,
    pub(crate) ascension: AscensionModifiers,

    pub player: Player,
    /// Every enemy that took part, in spawn order. Defeated enemies stay
    /// so indices remain stable.
    pub enemies: Vec<EnemyInstance>,
    /// Top of the pile is the end of the vector.
    pub draw_pile: Vec<CardInstance>,
    pub hand: Vec<CardInstance>,
    pub discard_pile: Vec<CardInstance>,
    pub exhaust_pile: Vec<CardInstance>,
    pub relics: RelicSet,

    pub(crate) turn: u32,
    pub(crate) stats: CombatStats,
    pub(crate) outcome: Option<CombatOutcome>,
    /// Enemies whose defeat was already counted.
    defeated: FxHashSet<EntityId>,
    /// Curse cards in the deck.
    curses: i32,
    /// Set while enemies act; spawns then wait for the next turn's intents.
    in_enemy_phase: bool,
}

impl<'a> Combat<'a> {
    /// Set up a combat and start the first player turn.
    ///
    /// The deck is shuffled and the encounter instantiated with the
    /// combat's own RNG, seeded from `options.seed`. Encounter enemies get
    /// the modifiers of `options.ascension`; later spawns do not.
    pub fn new(
        catalog: &'a Catalog,
        player: Player,
        deck: &[Arc<CardDefinition>],
        encounter: &Encounter,
        relics: RelicSet,
        options: &CombatOptions,
    ) -> Self {
        let mut rng = GameRng::new(options.seed);
        let mut ids = EntityAllocator::new();
        let ascension = AscensionModifiers::for_level(options.ascension);
        let mut enemies = encounter.instantiate(&mut ids, &mut rng);
        if ascension.is_active() {
            for enemy in &mut enemies {
                enemy.apply_ascension(&ascension);
            }
        }
        let mut draw_pile: Vec<CardInstance> = deck
            .iter()
            .map(|def| CardInstance::new(ids.next_id(), Arc::clone(def)))
            .collect();
        rng.shuffle(&mut draw_pile);
        let curses = deck.iter().filter(|c| c.card_type == CardType::Curse).count() as i32;

        let mut combat = Self {
            catalog,
            options: options.clone(),
            rng,
            ids,
            ascension,
            player,
            enemies,
            draw_pile,
            hand: Vec::with_capacity(HAND_LIMIT),
            discard_pile: Vec::new(),
            exhaust_pile: Vec::new(),
            relics,
            turn: 0,
            stats: CombatStats::default(),
            outcome: None,
            defeated: FxHashSet::default(),
            curses,
            in_enemy_phase: false,
        };
        combat.player.lost_hp_this_combat = false;
        combat.relics.reset_for_combat();

        tracing::debug!(
            seed = options.seed,
            enemies = ?combat.enemies.iter().map(EnemyInstance::name).collect::<Vec<_>>(),
            "combat start"
        );

        combat.start_player_turn();
        if combat.outcome.is_none() {
            let bundle = combat.relics.trigger(RelicTrigger::CombatStart, &combat.context());
            combat.apply_bundle(&bundle, None);
            combat.check_outcome();
        }
        combat
    }

    /// Carry out one player intent.
    pub fn apply(&mut self, intent: PlayerIntent) -> Result<(), IntentError> {
        match intent {
            PlayerIntent::PlayCard { hand_index, target } => self.play_card(hand_index, target),
            PlayerIntent::EndTurn => self.end_turn(),
        }
    }

    /// End the player turn: run the enemy phase and start the next turn.
    pub fn end_turn(&mut self) -> Result<(), IntentError> {
        if self.outcome.is_some() {
            return Err(IntentError::CombatOver);
        }

        let bundle = self.relics.trigger(RelicTrigger::TurnEnd, &self.context());
        self.apply_bundle(&bundle, None);

        let burn: i32 = self
            .hand
            .iter()
            .filter_map(|c| match c.def.special {
                Some(CardSpecial::Burn { damage }) => Some(damage),
                _ => None,
            })
            .sum();
        if burn > 0 {
            self.player_lose_hp(burn);
        }
        if self.check_outcome() {
            return Ok(());
        }

        let flex = std::mem::take(&mut self.player.powers.flex);
        self.player.statuses.strength -= flex;
        self.player.powers.rage = 0;
        self.player.statuses.entangle = 0;

        for card in std::mem::take(&mut self.hand) {
            // Unplayable cards that exhaust are ethereal.
            if card.def.unplayable && card.def.exhaust {
                self.exhaust(card);
            } else {
                self.discard_pile.push(card);
            }
        }
        self.relics.end_turn();

        let metallicize = self.player.statuses.metallicize;
        if metallicize > 0 {
            self.player.vitals.gain_block(metallicize);
        }

        self.in_enemy_phase = true;
        self.enemy_phase();
        self.in_enemy_phase = false;
        if self.check_outcome() {
            return Ok(());
        }

        self.player.statuses.tick_round();
        for enemy in self.enemies.iter_mut().filter(|e| e.is_alive()) {
            enemy.statuses.tick_round();
        }

        if self.turn >= self.options.max_turns {
            tracing::debug!(turn = self.turn, "turn cap reached");
            self.finish(CombatOutcome::TurnLimit);
            return Ok(());
        }
        self.start_player_turn();
        Ok(())
    }

    pub(crate) fn start_player_turn(&mut self) {
        self.turn += 1;
        self.stats.turns = self.turn;
        let passive = self.passive();

        if !self.player.powers.barricade {
            self.player.vitals.block = 0;
        }
        let pending = std::mem::take(&mut self.player.block_next_turn);
        self.player.vitals.gain_block(pending);

        let poisoned = resolve_poison(&mut self.player.vitals, &mut self.player.statuses);
        if poisoned > 0 {
            self.stats.damage_taken += poisoned;
            self.after_hp_loss(poisoned);
        }
        if self.check_outcome() {
            return;
        }

        let energy = self.options.base_energy + passive.extra_energy;
        if passive.conserve_energy {
            self.player.energy += energy;
        } else {
            self.player.energy = energy;
        }
        let demon_form = self.player.powers.demon_form;
        if demon_form > 0 {
            self.player.statuses.strength += demon_form;
        }
        self.player.cards_played_this_turn = 0;

        let bundle = self.relics.trigger(RelicTrigger::TurnStart, &self.context());
        self.apply_bundle(&bundle, None);

        let reduction = std::mem::take(&mut self.player.statuses.draw_reduction);
        let draw = (self.options.draw_per_turn as i32 + passive.extra_draw - reduction).max(0);
        self.draw_cards(draw as u32);

        self.choose_intents();
        self.check_outcome();
    }

    /// Pick the upcoming move of every enemy still in the fight.
    fn choose_intents(&mut self) {
        for i in 0..self.enemies.len() {
            if self.enemies[i].is_active() {
                self.choose_intent(i);
            }
        }
    }

    pub(crate) fn choose_intent(&mut self, i: usize) {
        let enemy = &self.enemies[i];
        let choice = ai::decide(enemy, enemy.turn, enemy.last_move, &self.enemies, &mut self.rng);
        let intent = match choice {
            Ok(index) => Some(index),
            Err(err) => {
                tracing::warn!(enemy = enemy.name(), %err, "no intent, enemy skips its turn");
                None
            }
        };
        self.enemies[i].intent = intent;
    }

    /// Re-decide intents that a state change made stale: an enemy waiting
    /// to be reborn, or one that just dropped to its split threshold.
    pub(crate) fn refresh_reactive_intents(&mut self) {
        for i in 0..self.enemies.len() {
            let enemy = &self.enemies[i];
            let intended = enemy.intended_move().and_then(|m| m.special.as_ref());
            let stale = if enemy.is_pending_rebirth() {
                !matches!(intended, Some(SpecialEffect::Rebirth { .. }))
            } else {
                enemy.is_alive()
                    && enemy.should_split()
                    && !matches!(intended, Some(SpecialEffect::Split { .. }))
                    && enemy
                        .template
                        .moveset
                        .iter()
                        .any(|m| matches!(m.special, Some(SpecialEffect::Split { .. })))
            };
            if stale {
                self.choose_intent(i);
            }
        }
    }

    /// Draw up to `count` cards, reshuffling the discard pile when the
    /// draw pile runs out.
    pub(crate) fn draw_cards(&mut self, count: u32) {
        for _ in 0..count {
            if self.draw_pile.is_empty() {
                if self.discard_pile.is_empty() {
                    return;
                }
                self.draw_pile.append(&mut self.discard_pile);
                self.rng.shuffle(&mut self.draw_pile);
            }
            let Some(card) = self.draw_pile.pop() else {
                return;
            };
            if self.hand.len() < HAND_LIMIT {
                self.hand.push(card);
            } else {
                self.discard_pile.push(card);
            }
        }
    }

    /// Move a card to the exhaust pile and fire `Exhaust` relics.
    pub(crate) fn exhaust(&mut self, card: CardInstance) {
        self.exhaust_pile.push(card);
        let bundle = self.relics.trigger(RelicTrigger::Exhaust, &self.context());
        self.apply_bundle(&bundle, None);
    }

    /// An attack or other blockable damage against the player.
    ///
    /// `attacker` is the index of the enemy whose attack this is; retaliation
    /// and `DamageReceived`/`DamageTaken` relics only apply to attacks.
    pub(crate) fn damage_player(&mut self, amount: i32, attacker: Option<usize>) -> HitResult {
        let mut amount = amount;
        if attacker.is_some() {
            let received = self.relics.trigger(RelicTrigger::DamageReceived, &self.context());
            if amount > 0 && amount <= received.reduce_low_damage {
                amount = 1;
            }
        }
        amount = self.player.statuses.cap_incoming(amount);

        let reduction = self.relics.hp_loss_reduction();
        let hit = apply_damage_reduced(&mut self.player.vitals, amount, reduction);
        self.stats.damage_taken += hit.hp_lost;

        if let Some(i) = attacker {
            let taken = self.relics.trigger(RelicTrigger::DamageTaken, &self.context());
            self.apply_bundle(&taken, Some(i));
            let thorns = self.player.statuses.thorns;
            if thorns > 0 && self.enemies[i].is_alive() {
                self.damage_enemy(i, thorns);
            }
        }
        self.after_hp_loss(hit.hp_lost);
        hit
    }

    /// HP loss that ignores block (card costs, burns).
    pub(crate) fn player_lose_hp(&mut self, amount: i32) -> i32 {
        let amount = (amount - self.relics.hp_loss_reduction()).max(0);
        let lost = self.player.vitals.lose_hp(amount);
        self.stats.damage_taken += lost;
        self.after_hp_loss(lost);
        lost
    }

    fn after_hp_loss(&mut self, lost: i32) {
        if lost <= 0 {
            return;
        }
        if !self.player.lost_hp_this_combat {
            self.player.lost_hp_this_combat = true;
            let first = self.relics.trigger(RelicTrigger::FirstHpLoss, &self.context());
            self.apply_bundle(&first, None);
        }
        let bundle = self.relics.trigger(RelicTrigger::HpLoss, &self.context());
        self.apply_bundle(&bundle, None);
    }

    /// Hit an enemy for `amount` and wake it if it lost HP.
    pub(crate) fn damage_enemy(&mut self, i: usize, amount: i32) -> HitResult {
        let enemy = &mut self.enemies[i];
        let hit = apply_damage(&mut enemy.vitals, amount);
        wake_on_hp_loss(enemy, hit.hp_lost);
        self.stats.damage_dealt += hit.hp_lost;
        hit
    }

    /// Apply one aggregated relic bundle. `target` receives single-target
    /// damage and thorns; without one the first living enemy does.
    pub(crate) fn apply_bundle(&mut self, bundle: &TriggerEffects, target: Option<usize>) {
        if bundle.is_empty() {
            return;
        }
        let passive = self.passive();
        let player = &mut self.player;
        player.vitals.heal(passive.scale_heal(bundle.heal));
        player.vitals.gain_block(bundle.block);
        if bundle.max_hp > 0 {
            player.vitals.raise_max_hp(bundle.max_hp);
        }
        apply_status(&mut player.statuses, StatusKind::Strength, bundle.strength);
        apply_status(&mut player.statuses, StatusKind::Dexterity, bundle.dexterity);
        player.statuses.intangible += bundle.intangible;
        player.energy += bundle.energy;
        player.block_next_turn += bundle.block_next_turn;

        let direct = bundle.damage + bundle.thorns;
        if direct > 0 {
            let aimed = target
                .filter(|&i| self.enemies.get(i).is_some_and(EnemyInstance::is_alive))
                .or_else(|| self.enemies.iter().position(EnemyInstance::is_alive));
            if let Some(i) = aimed {
                self.damage_enemy(i, direct);
            }
        }
        for i in self.living_enemies() {
            if bundle.damage_all > 0 {
                self.damage_enemy(i, bundle.damage_all);
            }
            let statuses = &mut self.enemies[i].statuses;
            if bundle.vulnerable > 0 {
                apply_status(statuses, StatusKind::Vulnerable, bundle.vulnerable);
            }
            if bundle.weak > 0 {
                apply_status(statuses, StatusKind::Weak, bundle.weak);
            }
        }
        if bundle.draw > 0 {
            self.draw_cards(bundle.draw as u32);
        }
        self.resolve_deaths();
    }

    /// Count newly defeated enemies and run their on-death recipes.
    pub(crate) fn resolve_deaths(&mut self) {
        let mut spawned: SmallVec<[EnemyInstance; 4]> = SmallVec::new();
        for i in 0..self.enemies.len() {
            let enemy = &self.enemies[i];
            if !enemy.is_defeated() || !self.defeated.insert(enemy.id) {
                continue;
            }
            if enemy.flags.contains(EnemyFlags::ESCAPED) {
                tracing::debug!(enemy = enemy.name(), id = %enemy.id, "left combat");
                continue;
            }
            self.stats.enemies_killed += 1;
            tracing::debug!(enemy = enemy.name(), id = %enemy.id, "enemy defeated");
            if let Some(recipe) = enemy.template.on_death {
                match spawn(recipe, enemy, self.catalog, &mut self.ids, &mut self.rng) {
                    Ok(out) => spawned.extend(out),
                    Err(err) => tracing::warn!(enemy = enemy.name(), %err, "on-death spawn skipped"),
                }
            }
        }
        self.add_enemies(spawned);
    }

    /// Add spawned enemies without exceeding the living cap.
    ///
    /// Enemies spawned during the player's turn pick their intent at once.
    /// Those spawned by the enemy phase get one with the other intents at
    /// the start of the next player turn.
    pub(crate) fn add_enemies(&mut self, spawned: impl IntoIterator<Item = EnemyInstance>) {
        for enemy in spawned {
            let living = self.enemies.iter().filter(|e| e.is_active()).count();
            if living >= MAX_LIVING_ENEMIES {
                tracing::debug!(enemy = enemy.name(), "enemy cap reached, spawn dropped");
                continue;
            }
            let slot = self.enemies.len();
            self.enemies.push(enemy.at_slot(slot));
            if !self.in_enemy_phase {
                self.choose_intent(slot);
            }
        }
    }

    /// Settle the outcome if the fight is decided. Returns whether it is over.
    pub(crate) fn check_outcome(&mut self) -> bool {
        if self.outcome.is_some() {
            return true;
        }
        if !self.player.is_alive() {
            self.finish(CombatOutcome::Lost);
        } else if self.enemies.iter().all(EnemyInstance::is_defeated) {
            self.finish(CombatOutcome::Won);
        }
        self.outcome.is_some()
    }

    fn finish(&mut self, outcome: CombatOutcome) {
        if outcome.is_win() {
            let bundle = self.relics.trigger(RelicTrigger::CombatEnd, &self.context());
            self.apply_bundle(&bundle, None);
        }
        self.outcome = Some(outcome);
        tracing::debug!(
            ?outcome,
            turns = self.turn,
            hp = self.player.vitals.hp,
            "combat over"
        );
    }

    pub(crate) fn context(&self) -> TriggerContext {
        let v = &self.player.vitals;
        TriggerContext::new(self.turn)
            .with_vitals(v.hp, v.max_hp, v.block)
            .with_curses(self.curses)
    }

    pub(crate) fn passive(&self) -> PassiveEffects {
        self.relics.passive(&self.context())
    }

    pub(crate) fn living_enemies(&self) -> SmallVec<[usize; 8]> {
        (0..self.enemies.len()).filter(|&i| self.enemies[i].is_alive()).collect()
    }

    /// Sum of the damage the current enemy intents would deal, after the
    /// attackers' and the player's modifiers but before block.
    #[must_use]
    pub fn incoming_damage(&self) -> i32 {
        self.enemies
            .iter()
            .filter(|e| e.is_alive())
            .filter_map(|e| self.intent_damage(e))
            .map(|(per_hit, hits)| per_hit * hits as i32)
            .sum()
    }

    /// Per-hit damage and hit count of an enemy's intended attack.
    pub(crate) fn intent_damage(&self, enemy: &EnemyInstance) -> Option<(i32, u32)> {
        let mv = enemy.intended_move()?;
        let (base, escalates) = match &mv.special {
            Some(SpecialEffect::HpScaledDamage { divisor }) => {
                (self.player.vitals.hp / (*divisor).max(1) + 1, false)
            }
            Some(SpecialEffect::EscalateHits { .. }) => (mv.damage?.preview(), true),
            _ => (mv.damage?.preview(), false),
        };
        let base = self.ascension.scale_damage(base);
        let per_hit = compute_damage(
            base,
            enemy.statuses.attacker(),
            self.player.statuses.defender(),
        );
        let extra = if escalates { enemy.extra_hits } else { 0 };
        Some((per_hit, mv.hit_count() + extra))
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<CombatOutcome> {
        self.outcome
    }

    /// Current player turn, 1-based.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn stats(&self) -> &CombatStats {
        &self.stats
    }

    #[must_use]
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Hand the relics back for the next fight of a run.
    #[must_use]
    pub fn into_parts(self) -> (Player, RelicSet, CombatStats) {
        (self.player, self.relics, self.stats)
    }
}
