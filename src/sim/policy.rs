//! Card-play policies for headless combats.

use crate::combat::{Combat, PlayerIntent};
use crate::content::{CardDefinition, CardType, Cost};

/// Picks the next intent for the player.
pub trait PlayPolicy: Send + Sync {
    /// Choose one intent for the current state. Returning `EndTurn` hands
    /// control to the enemies.
    fn choose(&self, combat: &Combat<'_>) -> PlayerIntent;
}

/// Greedy heuristic used by the balance simulator.
///
/// Blocks first when the enemies announce more than 10 damage and current
/// block covers less than half of it, otherwise attacks first. Attacks go in
/// order of total damage, block cards in order of block, then powers and
/// other skills. Attacks aim at the living enemy with the least HP.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPolicy;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Group {
    First,
    Second,
    Powers,
    Rest,
}

fn blocks(def: &CardDefinition) -> bool {
    def.card_type == CardType::Skill && def.block.unwrap_or(0) > 0
}

impl GreedyPolicy {
    fn group(def: &CardDefinition, block_first: bool) -> Option<Group> {
        let group = match def.card_type {
            CardType::Attack if block_first => Group::Second,
            CardType::Attack => Group::First,
            CardType::Skill if blocks(def) && block_first => Group::First,
            CardType::Skill if blocks(def) => Group::Second,
            CardType::Skill => Group::Rest,
            CardType::Power => Group::Powers,
            CardType::Status | CardType::Curse => return None,
        };
        Some(group)
    }

    /// Order within a group: more damage first, then more block.
    fn weight(def: &CardDefinition) -> i32 {
        match def.card_type {
            CardType::Attack => def.total_damage(),
            _ => def.block.unwrap_or(0),
        }
    }
}

impl PlayPolicy for GreedyPolicy {
    fn choose(&self, combat: &Combat<'_>) -> PlayerIntent {
        let incoming = combat.incoming_damage();
        let block_first = incoming > 10 && combat.player.vitals.block * 2 < incoming;

        let best = combat
            .hand
            .iter()
            .enumerate()
            .filter(|(_, card)| !(card.def.cost == Cost::X && combat.player.energy == 0))
            .filter(|&(i, _)| combat.can_play(i))
            .filter_map(|(i, card)| {
                let group = Self::group(&card.def, block_first)?;
                Some((group, -Self::weight(&card.def), i))
            })
            .min();

        let Some((_, _, hand_index)) = best else {
            return PlayerIntent::EndTurn;
        };
        let target = combat
            .enemies
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_alive())
            .min_by_key(|(_, e)| e.vitals.hp)
            .map(|(i, _)| i);
        PlayerIntent::PlayCard { hand_index, target }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;

    #[test]
    fn test_groups() {
        let catalog = Catalog::base();
        let group = |id: &str, block_first| GreedyPolicy::group(catalog.card(id).unwrap(), block_first);
        assert_eq!(group("strike", false), Some(Group::First));
        assert_eq!(group("strike", true), Some(Group::Second));
        assert_eq!(group("defend", true), Some(Group::First));
        assert_eq!(group("defend", false), Some(Group::Second));
        assert_eq!(group("inflame", false), Some(Group::Powers));
        assert_eq!(group("wound", false), None);
    }

    #[test]
    fn test_heavier_attack_first() {
        let catalog = Catalog::base();
        assert!(
            GreedyPolicy::weight(catalog.card("bash").unwrap())
                > GreedyPolicy::weight(catalog.card("strike").unwrap())
        );
    }
}
