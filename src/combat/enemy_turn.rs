//! The enemy phase and special move dispatch.
//!
//! Every `SpecialEffect` variant is handled in `Combat::apply_special`.
//! The match is exhaustive, so adding a behaviour to the content model
//! fails to compile until the engine knows what to do with it.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::content::{CardSpecial, EffectTarget, Move, OneShot, Pile, SpecialEffect, StatusKind};
use crate::core::SimError;
use crate::effects::{apply_status, compute_block, compute_damage, resolve_poison};
use crate::entities::{rebirth, spawn, wake_on_hp_loss, CardInstance, EnemyFlags};

use super::engine::{Combat, HAND_LIMIT};

impl Combat<'_> {
    /// Let every enemy that was in the fight when the phase began act once.
    pub(crate) fn enemy_phase(&mut self) {
        let acting: SmallVec<[usize; 8]> = (0..self.enemies.len())
            .filter(|&i| self.enemies[i].is_active())
            .collect();
        for i in acting {
            if !self.enemies[i].is_active() {
                continue;
            }
            self.enemy_turn(i);
            self.resolve_deaths();
            if self.check_outcome() {
                return;
            }
        }
    }

    fn enemy_turn(&mut self, i: usize) {
        let enemy = &mut self.enemies[i];
        if enemy.is_alive() {
            let lost = resolve_poison(&mut enemy.vitals, &mut enemy.statuses);
            wake_on_hp_loss(enemy, lost);
            self.stats.damage_dealt += lost;
            if !enemy.is_alive() {
                return;
            }
            if !enemy.template.passives.retain_block {
                enemy.vitals.block = 0;
            }
            let ritual = enemy.statuses.ritual;
            enemy.statuses.strength += ritual;
            let metallicize = enemy.statuses.metallicize;
            enemy.vitals.gain_block(metallicize);
        }

        let template = Arc::clone(&enemy.template);
        let Some(index) = enemy.intent else {
            enemy.turn += 1;
            return;
        };
        let Some(mv) = template.moveset.get(index) else {
            tracing::warn!(
                enemy = enemy.name(),
                %index,
                err = %SimError::unknown(crate::core::RecordKind::Move, format!("{}[{index}]", template.id)),
                "enemy skips its turn"
            );
            enemy.turn += 1;
            return;
        };
        if !enemy.is_alive() && !matches!(mv.special, Some(SpecialEffect::Rebirth { .. })) {
            return;
        }
        tracing::debug!(enemy = enemy.name(), id = %enemy.id, mv = %mv.id, turn = enemy.turn, "enemy move");

        self.execute_move(i, mv);

        let enemy = &mut self.enemies[i];
        enemy.last_move = Some(index);
        enemy.turn += 1;
    }

    fn execute_move(&mut self, i: usize, mv: &Move) {
        let scaled = match mv.special {
            Some(SpecialEffect::HpScaledDamage { divisor }) => Some(divisor.max(1)),
            _ => None,
        };
        let base = match (scaled, mv.damage) {
            (Some(divisor), _) => Some(self.player.vitals.hp / divisor + 1),
            (None, Some(roll)) => Some(roll.roll(&mut self.rng)),
            (None, None) => None,
        };
        let base = base.map(|b| self.ascension.scale_damage(b));
        if let Some(base) = base {
            let escalates = matches!(mv.special, Some(SpecialEffect::EscalateHits { .. }));
            let hits = mv.hit_count() + if escalates { self.enemies[i].extra_hits } else { 0 };
            for _ in 0..hits {
                if !self.player.is_alive() || !self.enemies[i].is_alive() {
                    break;
                }
                let damage = compute_damage(base, self.enemies[i].statuses.attacker(), self.player.statuses.defender());
                self.damage_player(damage, Some(i));
            }
        }
        if !self.player.is_alive() {
            return;
        }

        if let Some(block) = mv.block {
            let enemy = &mut self.enemies[i];
            let gained = compute_block(block, enemy.statuses.block_mods());
            enemy.vitals.gain_block(gained);
        }

        for effect in &mv.effects {
            let to_player = match effect.target {
                Some(EffectTarget::Player) => true,
                Some(EffectTarget::Enemy) => false,
                Some(EffectTarget::AllEnemies) => {
                    for j in self.living_enemies() {
                        apply_status(&mut self.enemies[j].statuses, effect.kind, effect.amount);
                    }
                    continue;
                }
                None => !effect.defaults_to_actor(),
            };
            if to_player {
                apply_status(&mut self.player.statuses, effect.kind, effect.amount);
            } else {
                apply_status(&mut self.enemies[i].statuses, effect.kind, effect.amount);
            }
        }

        if let Some(special) = &mv.special {
            if let Err(err) = self.apply_special(i, special) {
                tracing::warn!(enemy = self.enemies[i].name(), %err, "special skipped");
            }
        }
    }

    /// Apply the special behaviour of a move executed by enemy `i`.
    pub(crate) fn apply_special(&mut self, i: usize, special: &SpecialEffect) -> Result<(), SimError> {
        tracing::debug!(enemy = self.enemies[i].name(), ?special, "special");
        match special {
            SpecialEffect::Split { recipe } => {
                self.enemies[i].flags.insert(EnemyFlags::HAS_SPLIT);
                let spawned = spawn(*recipe, &self.enemies[i], self.catalog, &mut self.ids, &mut self.rng)?;
                if recipe.replaces_parent() {
                    self.enemies[i].remove_from_combat();
                }
                self.add_enemies(spawned);
            }
            SpecialEffect::Summon { recipe } => {
                let spawned = spawn(*recipe, &self.enemies[i], self.catalog, &mut self.ids, &mut self.rng)?;
                self.add_enemies(spawned);
            }
            SpecialEffect::Rebirth { strength } => {
                rebirth(&mut self.enemies[i], *strength);
            }
            SpecialEffect::ModeShift => self.enemies[i].flags.toggle(EnemyFlags::DEFENSIVE_MODE),
            SpecialEffect::EscalateHits { step } => self.enemies[i].extra_hits += step,
            SpecialEffect::BeatOfDeath { damage } => self.enemies[i].beat_of_death += damage,
            SpecialEffect::ClearDebuffs { mark } => {
                let enemy = &mut self.enemies[i];
                enemy.statuses.clear_debuffs();
                match mark {
                    Some(OneShot::Angered) => enemy.flags.insert(EnemyFlags::ANGERED),
                    Some(OneShot::Hasted) => enemy.flags.insert(EnemyFlags::HASTED),
                    None => {}
                }
            }
            SpecialEffect::HealSelf { amount } => {
                self.enemies[i].vitals.heal(*amount);
            }
            SpecialEffect::HealLowestAlly { amount } => {
                let lowest = self
                    .enemies
                    .iter()
                    .enumerate()
                    .filter(|&(j, e)| j != i && e.is_alive() && e.vitals.hp < e.vitals.max_hp)
                    .min_by_key(|(_, e)| e.vitals.hp)
                    .map(|(j, _)| j);
                if let Some(j) = lowest {
                    self.enemies[j].vitals.heal(*amount);
                }
            }
            SpecialEffect::BuffAllies { strength } => {
                for j in self.living_enemies() {
                    if j != i {
                        apply_status(&mut self.enemies[j].statuses, StatusKind::Strength, *strength);
                    }
                }
            }
            SpecialEffect::GainFlight { amount } => {
                let vitals = &mut self.enemies[i].vitals;
                vitals.flight += amount;
                vitals.grounded = false;
            }
            SpecialEffect::Count => self.enemies[i].slow_count += 1,
            SpecialEffect::KillSelf => self.enemies[i].remove_from_combat(),
            // Resolved with the move's damage.
            SpecialEffect::HpScaledDamage { .. } => {}
            SpecialEffect::AddCards { cards, count, pile } => self.add_status_cards(cards, *count, *pile)?,
            SpecialEffect::UpgradeBurns => {
                let piles = [
                    &mut self.hand,
                    &mut self.draw_pile,
                    &mut self.discard_pile,
                ];
                for card in piles.into_iter().flat_map(|p| p.iter_mut()) {
                    if matches!(card.def.special, Some(CardSpecial::Burn { .. })) {
                        card.upgrade();
                    }
                }
            }
        }
        Ok(())
    }

    fn add_status_cards(&mut self, cards: &[crate::core::CardId], count: u32, pile: Pile) -> Result<(), SimError> {
        for _ in 0..count {
            let Some(id) = self.rng.choose(cards) else {
                return Ok(());
            };
            let def = Arc::clone(self.catalog.card(id.as_str())?);
            let card = CardInstance::new(self.ids.next_id(), def);
            match pile {
                Pile::Draw => {
                    let at = self.rng.gen_range_usize(0..self.draw_pile.len() + 1);
                    self.draw_pile.insert(at, card);
                }
                Pile::Hand if self.hand.len() < HAND_LIMIT => self.hand.push(card),
                Pile::Hand | Pile::Discard => self.discard_pile.push(card),
            }
        }
        Ok(())
    }
}
