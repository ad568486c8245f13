//! Playing a card.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::content::{
    CardDefinition, CardSpecial, CardType, Cost, Effect, EffectTarget, RelicTrigger, StatusKind,
};
use crate::effects::{apply_status, compute_block, compute_damage_with, DamageOptions};
use crate::entities::CardInstance;

use super::engine::Combat;
use super::intent::IntentError;

/// Does the card hit or debuff one chosen enemy?
fn needs_target(def: &CardDefinition) -> bool {
    if def.target_all || def.random_target {
        return false;
    }
    let hits = def.damage.is_some() || matches!(def.special, Some(CardSpecial::DamageEqualsBlock));
    hits || def.effects.iter().any(|e| match e.target {
        Some(target) => target == EffectTarget::Enemy,
        None => !e.defaults_to_actor(),
    })
}

impl Combat<'_> {
    /// Check an intent to play a card without changing anything.
    ///
    /// Returns the resolved target for cards that need one.
    pub fn check_play(&self, hand_index: usize, target: Option<usize>) -> Result<Option<usize>, IntentError> {
        if self.outcome.is_some() {
            return Err(IntentError::CombatOver);
        }
        let card = self.hand.get(hand_index).ok_or(IntentError::BadHandIndex {
            index: hand_index,
            len: self.hand.len(),
        })?;
        let def = &card.def;
        if !def.is_playable() {
            return Err(IntentError::Unplayable { card: def.id.clone() });
        }
        if def.card_type == CardType::Attack && self.player.statuses.entangle > 0 {
            return Err(IntentError::Entangled);
        }
        if let Some(limit) = self.passive().card_limit {
            if self.player.cards_played_this_turn >= limit {
                return Err(IntentError::CardLimit { limit });
            }
        }
        let cost = card.energy_cost();
        if cost > self.player.energy {
            return Err(IntentError::NotEnoughEnergy {
                cost,
                energy: self.player.energy,
            });
        }

        if !needs_target(def) {
            return Ok(None);
        }
        match target {
            Some(t) if self.enemies.get(t).is_some_and(|e| e.is_alive()) => Ok(Some(t)),
            Some(t) => Err(IntentError::InvalidTarget { target: t }),
            None => Ok(self.enemies.iter().position(|e| e.is_alive())),
        }
    }

    /// Can the card at `hand_index` be played right now?
    #[must_use]
    pub fn can_play(&self, hand_index: usize) -> bool {
        self.check_play(hand_index, None).is_ok()
    }

    /// Play the card at `hand_index`.
    ///
    /// Order: pay costs, card-type relics, damage per hit, block, effects,
    /// draw and energy, the card's special, then on-play enemy reactions.
    pub fn play_card(&mut self, hand_index: usize, target: Option<usize>) -> Result<(), IntentError> {
        let target = self.check_play(hand_index, target)?;
        let card = self.hand.remove(hand_index);
        let def = Arc::clone(&card.def);

        let x = match def.cost {
            Cost::X => std::mem::take(&mut self.player.energy),
            Cost::Fixed(_) => {
                self.player.energy -= card.energy_cost();
                1
            }
        };
        self.player.cards_played_this_turn += 1;
        self.stats.record_play(&def.id);
        tracing::trace!(card = %def.id, ?target, energy = self.player.energy, "card played");

        if let Some(hp) = def.hp_cost {
            self.player_lose_hp(hp);
            if self.check_outcome() {
                self.discard_pile.push(card);
                return Ok(());
            }
        }

        let mut double = false;
        let trigger = match def.card_type {
            CardType::Attack => Some(RelicTrigger::AttackPlayed),
            CardType::Skill => Some(RelicTrigger::SkillPlayed),
            _ => None,
        };
        if let Some(trigger) = trigger {
            let bundle = self.relics.trigger(trigger, &self.context());
            double |= bundle.double_damage;
            self.apply_bundle(&bundle, target);
        }
        if def.is_strike() {
            let bundle = self.relics.trigger(RelicTrigger::StrikePlayed, &self.context());
            double |= bundle.double_damage;
            self.apply_bundle(&bundle, target);
        }

        if def.card_type == CardType::Attack && self.player.powers.rage > 0 {
            self.player.vitals.gain_block(self.player.powers.rage);
        }

        self.card_damage(&def, target, x, double);

        if let Some(block) = def.block {
            let gained = compute_block(block, self.player.statuses.block_mods());
            self.player.vitals.gain_block(gained);
        }
        for effect in &def.effects {
            self.card_effect(&def, effect, target);
        }
        if let Some(draw) = def.draw {
            self.draw_cards(draw);
        }
        if let Some(energy) = def.energy {
            self.player.energy += energy;
        }
        if let Some(special) = def.special {
            self.card_special(special, &card);
        }

        if def.card_type == CardType::Skill {
            for i in self.living_enemies() {
                let statuses = &mut self.enemies[i].statuses;
                if statuses.enrage > 0 {
                    statuses.strength += statuses.enrage;
                }
            }
        }
        for i in self.living_enemies() {
            let beat = self.enemies[i].beat_of_death;
            if beat > 0 && self.player.is_alive() {
                self.damage_player(beat, None);
            }
        }

        match def.card_type {
            CardType::Power => {}
            _ if def.exhaust => self.exhaust(card),
            _ => self.discard_pile.push(card),
        }

        self.resolve_deaths();
        self.refresh_reactive_intents();
        self.check_outcome();
        Ok(())
    }

    /// Resolve every hit of a card. X-cost cards repeat their hits once per
    /// energy spent.
    fn card_damage(&mut self, def: &CardDefinition, target: Option<usize>, x: i32, double: bool) {
        let base = match def.special {
            Some(CardSpecial::DamageEqualsBlock) => self.player.vitals.block,
            _ => match def.damage {
                Some(damage) => damage,
                None => return,
            },
        };
        let passive = self.passive();
        let mut attacker = self.player.statuses.attacker();
        attacker.strength += passive.low_hp_strength;
        let opts = DamageOptions {
            strength_multiplier: def.strength_multiplier.unwrap_or(1),
            vulnerable_percent: passive.vulnerable_percent(),
            double,
        };

        let hits = def.hits.unwrap_or(1).max(1) * x.max(0) as u32;
        for _ in 0..hits {
            let targets: SmallVec<[usize; 8]> = if def.target_all {
                self.living_enemies()
            } else if def.random_target {
                let living = self.living_enemies();
                self.rng.choose(&living).copied().into_iter().collect()
            } else {
                target.into_iter().collect()
            };
            for t in targets {
                if !self.enemies[t].is_alive() {
                    continue;
                }
                let damage = compute_damage_with(base, attacker, self.enemies[t].statuses.defender(), opts);
                self.damage_enemy(t, damage);
                let thorns = self.enemies[t].statuses.thorns;
                if thorns > 0 {
                    self.damage_player(thorns, None);
                }
            }
            if !self.player.is_alive() {
                break;
            }
        }
    }

    fn card_effect(&mut self, def: &CardDefinition, effect: &Effect, target: Option<usize>) {
        let recipients: SmallVec<[usize; 8]> = match effect.target {
            Some(EffectTarget::Player) => SmallVec::new(),
            Some(EffectTarget::Enemy) => target.into_iter().collect(),
            Some(EffectTarget::AllEnemies) => self.living_enemies(),
            None if effect.defaults_to_actor() => SmallVec::new(),
            None if def.target_all => self.living_enemies(),
            None => target.into_iter().collect(),
        };
        let to_player = matches!(effect.target, Some(EffectTarget::Player))
            || (effect.target.is_none() && effect.defaults_to_actor());
        if to_player {
            apply_status(&mut self.player.statuses, effect.kind, effect.amount);
            return;
        }
        for i in recipients {
            if self.enemies[i].is_alive() {
                apply_status(&mut self.enemies[i].statuses, effect.kind, effect.amount);
            }
        }
    }

    fn card_special(&mut self, special: CardSpecial, card: &CardInstance) {
        let player = &mut self.player;
        match special {
            CardSpecial::DoubleBlock => {
                let block = player.vitals.block;
                player.vitals.gain_block(block);
            }
            CardSpecial::DoubleStrength => {
                let strength = player.statuses.strength;
                apply_status(&mut player.statuses, StatusKind::Strength, strength);
            }
            CardSpecial::Metallicize { amount } => {
                apply_status(&mut player.statuses, StatusKind::Metallicize, amount);
            }
            CardSpecial::DemonForm { amount } => player.powers.demon_form += amount,
            CardSpecial::Barricade => player.powers.barricade = true,
            CardSpecial::Rage { amount } => player.powers.rage += amount,
            CardSpecial::Flex { amount } => {
                player.statuses.strength += amount;
                player.powers.flex += amount;
            }
            CardSpecial::CopyToDiscard => {
                let copy = card.duplicate(self.ids.next_id());
                self.discard_pile.push(copy);
            }
            CardSpecial::DamageEqualsBlock | CardSpecial::Burn { .. } => {}
        }
    }
}
