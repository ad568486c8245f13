//! Read-only views of a combat for a presentation layer.

use serde::Serialize;

use crate::content::{CardType, Cost, Intent};
use crate::core::{CardId, EnemyId, EntityId, MoveId};
use crate::effects::{Statuses, Vitals};

use super::engine::Combat;
use super::stats::CombatOutcome;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CardView {
    pub id: EntityId,
    pub card: CardId,
    pub name: String,
    pub card_type: CardType,
    /// `None` for X-cost cards.
    pub cost: Option<u32>,
    pub upgraded: bool,
    pub playable: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IntentPreview {
    pub id: MoveId,
    pub name: String,
    pub intent: Intent,
    /// Per-hit damage after modifiers, for attacks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage: Option<i32>,
    pub hits: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnemyView {
    pub id: EntityId,
    pub template: EnemyId,
    pub name: String,
    pub vitals: Vitals,
    pub statuses: Statuses,
    pub alive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<IntentPreview>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerView {
    pub vitals: Vitals,
    pub statuses: Statuses,
    pub energy: i32,
}

/// Everything a renderer needs after an intent resolves.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CombatSnapshot {
    pub turn: u32,
    pub player: PlayerView,
    pub hand: Vec<CardView>,
    pub draw_pile: usize,
    pub discard_pile: usize,
    pub exhaust_pile: usize,
    /// Enemies still in the fight.
    pub enemies: Vec<EnemyView>,
    pub incoming_damage: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<CombatOutcome>,
}

impl Combat<'_> {
    #[must_use]
    pub fn snapshot(&self) -> CombatSnapshot {
        let hand = self
            .hand
            .iter()
            .enumerate()
            .map(|(i, card)| CardView {
                id: card.id,
                card: card.def.id.clone(),
                name: card.def.name.clone(),
                card_type: card.def.card_type,
                cost: match card.def.cost {
                    Cost::Fixed(n) => Some(n),
                    Cost::X => None,
                },
                upgraded: card.upgraded,
                playable: self.can_play(i),
            })
            .collect();

        let enemies = self
            .enemies
            .iter()
            .filter(|e| e.is_active())
            .map(|e| EnemyView {
                id: e.id,
                template: e.template.id.clone(),
                name: e.name().to_owned(),
                vitals: e.vitals,
                statuses: e.statuses,
                alive: e.is_alive(),
                intent: e.intended_move().map(|mv| {
                    let damage = self.intent_damage(e);
                    IntentPreview {
                        id: mv.id.clone(),
                        name: mv.name.clone(),
                        intent: mv.intent,
                        damage: damage.map(|(per_hit, _)| per_hit),
                        hits: damage.map_or(0, |(_, hits)| hits),
                    }
                }),
            })
            .collect();

        CombatSnapshot {
            turn: self.turn,
            player: PlayerView {
                vitals: self.player.vitals,
                statuses: self.player.statuses,
                energy: self.player.energy,
            },
            hand,
            draw_pile: self.draw_pile.len(),
            discard_pile: self.discard_pile.len(),
            exhaust_pile: self.exhaust_pile.len(),
            enemies,
            incoming_damage: self.incoming_damage(),
            outcome: self.outcome,
        }
    }
}
