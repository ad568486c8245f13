//! Card definitions.
//!
//! `CardDefinition` holds the immutable template of a card. A played card
//! is a `CardInstance` (see `entities::card`): the resolved template plus
//! a unique instance id.
//!
//! Upgrades are partial records: `CardUpgrade` fields that are `Some`
//! replace the base values when an instance is created upgraded.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::CardId;

use super::effect::Effect;

/// Broad card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    #[default]
    Attack,
    Skill,
    Power,
    Status,
    Curse,
}

/// Card rarity, used for reward rolls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardRarity {
    Basic,
    #[default]
    Common,
    Uncommon,
    Rare,
    Special,
    Curse,
}

impl CardRarity {
    /// Can this card be offered as a reward?
    #[must_use]
    pub const fn is_rewardable(self) -> bool {
        matches!(self, CardRarity::Common | CardRarity::Uncommon | CardRarity::Rare)
    }
}

/// Energy cost of a card.
///
/// Serialized as a non-negative number, or the string `"X"` for cards that
/// spend all remaining energy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cost {
    Fixed(u32),
    X,
}

impl Default for Cost {
    fn default() -> Self {
        Cost::Fixed(0)
    }
}

impl Serialize for Cost {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cost::Fixed(n) => serializer.serialize_u32(*n),
            Cost::X => serializer.serialize_str("X"),
        }
    }
}

impl<'de> Deserialize<'de> for Cost {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Cost::Fixed(n)),
            Raw::Text(s) if s == "X" => Ok(Cost::X),
            Raw::Text(s) => Err(serde::de::Error::custom(format!("invalid cost `{s}`"))),
        }
    }
}

/// Card behaviour that does not fit the numeric fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CardSpecial {
    /// Double current block.
    DoubleBlock,
    /// Double current strength.
    DoubleStrength,
    /// Gain block at the start of every enemy phase.
    Metallicize { amount: i32 },
    /// Gain strength at the start of every player turn.
    DemonForm { amount: i32 },
    /// Block is no longer removed at the start of the turn.
    Barricade,
    /// Deal damage equal to current block.
    DamageEqualsBlock,
    /// Gain block whenever an attack is played this turn.
    Rage { amount: i32 },
    /// Gain strength now, lose it at the end of the turn.
    Flex { amount: i32 },
    /// Deals damage to the player if held at the end of the turn.
    Burn { damage: i32 },
    /// Put a copy of this card into the discard pile.
    CopyToDiscard,
}

/// Static card template.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardDefinition {
    pub id: CardId,
    pub name: String,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub rarity: CardRarity,
    pub cost: Cost,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hits: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hp_cost: Option<i32>,
    /// Strength counts this many times toward the card's damage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength_multiplier: Option<i32>,
    pub effects: Vec<Effect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special: Option<CardSpecial>,
    pub target_all: bool,
    pub random_target: bool,
    pub exhaust: bool,
    pub unplayable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade: Option<CardUpgrade>,
}

/// Partial override applied to an upgraded card.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardUpgrade {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hits: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength_multiplier: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<Vec<Effect>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special: Option<CardSpecial>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exhaust: Option<bool>,
}

impl CardDefinition {
    fn base(id: &str, name: &str, card_type: CardType, cost: Cost) -> Self {
        Self {
            id: CardId::new(id),
            name: name.to_string(),
            card_type,
            cost,
            ..Self::default()
        }
    }

    /// An attack card.
    #[must_use]
    pub fn attack(id: &str, name: &str, cost: u32) -> Self {
        Self::base(id, name, CardType::Attack, Cost::Fixed(cost))
    }

    /// A skill card.
    #[must_use]
    pub fn skill(id: &str, name: &str, cost: u32) -> Self {
        Self::base(id, name, CardType::Skill, Cost::Fixed(cost))
    }

    /// A power card.
    #[must_use]
    pub fn power(id: &str, name: &str, cost: u32) -> Self {
        Self::base(id, name, CardType::Power, Cost::Fixed(cost))
    }

    /// An unplayable status card.
    #[must_use]
    pub fn status(id: &str, name: &str) -> Self {
        let mut card = Self::base(id, name, CardType::Status, Cost::Fixed(0));
        card.rarity = CardRarity::Special;
        card.unplayable = true;
        card
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: CardRarity) -> Self {
        self.rarity = rarity;
        self
    }

    #[must_use]
    pub fn with_cost(mut self, cost: Cost) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn with_damage(mut self, damage: i32) -> Self {
        self.damage = Some(damage);
        self
    }

    #[must_use]
    pub fn with_block(mut self, block: i32) -> Self {
        self.block = Some(block);
        self
    }

    #[must_use]
    pub fn with_hits(mut self, hits: u32) -> Self {
        self.hits = Some(hits);
        self
    }

    #[must_use]
    pub fn with_draw(mut self, draw: u32) -> Self {
        self.draw = Some(draw);
        self
    }

    #[must_use]
    pub fn with_energy(mut self, energy: i32) -> Self {
        self.energy = Some(energy);
        self
    }

    #[must_use]
    pub fn with_hp_cost(mut self, hp: i32) -> Self {
        self.hp_cost = Some(hp);
        self
    }

    #[must_use]
    pub fn with_strength_multiplier(mut self, multiplier: i32) -> Self {
        self.strength_multiplier = Some(multiplier);
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    #[must_use]
    pub fn with_special(mut self, special: CardSpecial) -> Self {
        self.special = Some(special);
        self
    }

    #[must_use]
    pub fn target_all(mut self) -> Self {
        self.target_all = true;
        self
    }

    #[must_use]
    pub fn random_target(mut self) -> Self {
        self.random_target = true;
        self
    }

    #[must_use]
    pub fn exhausts(mut self) -> Self {
        self.exhaust = true;
        self
    }

    #[must_use]
    pub fn with_upgrade(mut self, upgrade: CardUpgrade) -> Self {
        self.upgrade = Some(upgrade);
        self
    }

    /// The upgraded form of this card, or a clone if it has no upgrade.
    #[must_use]
    pub fn upgraded(&self) -> CardDefinition {
        let mut card = self.clone();
        let Some(up) = &self.upgrade else {
            return card;
        };
        card.name = format!("{}+", self.name);
        if let Some(cost) = up.cost {
            card.cost = cost;
        }
        card.damage = up.damage.or(card.damage);
        card.block = up.block.or(card.block);
        card.hits = up.hits.or(card.hits);
        card.draw = up.draw.or(card.draw);
        card.energy = up.energy.or(card.energy);
        card.strength_multiplier = up.strength_multiplier.or(card.strength_multiplier);
        if let Some(effects) = &up.effects {
            card.effects = effects.clone();
        }
        card.special = up.special.or(card.special);
        if let Some(exhaust) = up.exhaust {
            card.exhaust = exhaust;
        }
        card.upgrade = None;
        card
    }

    /// Can this card ever be played?
    #[must_use]
    pub fn is_playable(&self) -> bool {
        !self.unplayable
    }

    /// Is this one of the "Strike" cards (for strike-played triggers)?
    #[must_use]
    pub fn is_strike(&self) -> bool {
        self.name.contains("Strike")
    }

    /// Total damage across all hits, for ordering attacks.
    #[must_use]
    pub fn total_damage(&self) -> i32 {
        self.damage.unwrap_or(0) * self.hits.unwrap_or(1) as i32
    }
}

impl CardUpgrade {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cost(mut self, cost: u32) -> Self {
        self.cost = Some(Cost::Fixed(cost));
        self
    }

    #[must_use]
    pub fn damage(mut self, damage: i32) -> Self {
        self.damage = Some(damage);
        self
    }

    #[must_use]
    pub fn block(mut self, block: i32) -> Self {
        self.block = Some(block);
        self
    }

    #[must_use]
    pub fn hits(mut self, hits: u32) -> Self {
        self.hits = Some(hits);
        self
    }

    #[must_use]
    pub fn draw(mut self, draw: u32) -> Self {
        self.draw = Some(draw);
        self
    }

    #[must_use]
    pub fn energy(mut self, energy: i32) -> Self {
        self.energy = Some(energy);
        self
    }

    #[must_use]
    pub fn strength_multiplier(mut self, multiplier: i32) -> Self {
        self.strength_multiplier = Some(multiplier);
        self
    }

    #[must_use]
    pub fn effects(mut self, effects: Vec<Effect>) -> Self {
        self.effects = Some(effects);
        self
    }

    #[must_use]
    pub fn special(mut self, special: CardSpecial) -> Self {
        self.special = Some(special);
        self
    }

    #[must_use]
    pub fn exhaust(mut self, exhaust: bool) -> Self {
        self.exhaust = Some(exhaust);
        self
    }
}
