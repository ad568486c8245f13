//! Immutable content catalog.
//!
//! A `Catalog` is a snapshot of every card, enemy and relic record the
//! simulator may use. Records are shared through `Arc`, so cloning a
//! catalog (or handing it to every worker of a batch) never copies
//! content. Nothing mutates a catalog after construction; applying
//! overrides builds a new one (see `content::overrides`).
//!
//! ## Example
//!
//! ```
//! use spire_sim::content::Catalog;
//!
//! let catalog = Catalog::base();
//! let strike = catalog.card("strike").unwrap();
//! assert_eq!(strike.damage, Some(6));
//! assert!(catalog.enemy("gremlin_king").is_err());
//! ```

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::{RecordKind, SimError};

use super::card::{CardDefinition, CardRarity};
use super::data;
use super::enemy::{EnemyKind, EnemyTemplate};
use super::relic::RelicDefinition;
use super::special::SpecialEffect;

/// A catalog record addressable by a string id.
pub trait Record: Clone + Serialize + DeserializeOwned {
    const KIND: RecordKind;

    fn record_id(&self) -> &str;

    /// Force the record id (override keys win over ids in the document).
    fn set_record_id(&mut self, id: &str);
}

impl Record for CardDefinition {
    const KIND: RecordKind = RecordKind::Card;

    fn record_id(&self) -> &str {
        self.id.as_str()
    }

    fn set_record_id(&mut self, id: &str) {
        self.id = id.into();
    }
}

impl Record for EnemyTemplate {
    const KIND: RecordKind = RecordKind::Enemy;

    fn record_id(&self) -> &str {
        self.id.as_str()
    }

    fn set_record_id(&mut self, id: &str) {
        self.id = id.into();
    }
}

impl Record for RelicDefinition {
    const KIND: RecordKind = RecordKind::Relic;

    fn record_id(&self) -> &str {
        self.id.as_str()
    }

    fn set_record_id(&mut self, id: &str) {
        self.id = id.into();
    }
}

/// Insertion-ordered table with id lookup.
///
/// Iteration follows insertion order so every consumer that walks a
/// table (encounter pools, reward rolls) is deterministic.
#[derive(Clone, Debug)]
pub struct Table<T> {
    records: Vec<Arc<T>>,
    index: FxHashMap<String, usize>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            index: FxHashMap::default(),
        }
    }
}

impl<T: Record> Table<T> {
    /// Build a table, rejecting empty and duplicate ids.
    pub fn from_records(records: impl IntoIterator<Item = T>) -> Result<Self, SimError> {
        let mut table = Self::default();
        for record in records {
            table.insert(Arc::new(record))?;
        }
        Ok(table)
    }

    fn insert(&mut self, record: Arc<T>) -> Result<(), SimError> {
        let id = record.record_id().to_string();
        if id.is_empty() {
            return Err(SimError::validation(T::KIND, id, vec!["id must not be empty".into()]));
        }
        if self.index.contains_key(&id) {
            return Err(SimError::validation(T::KIND, id, vec!["duplicate id".into()]));
        }
        self.index.insert(id, self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Replace an existing record in place or append a new one.
    pub(crate) fn upsert(&mut self, record: T) {
        let id = record.record_id().to_string();
        match self.index.get(&id) {
            Some(&i) => self.records[i] = Arc::new(record),
            None => {
                self.index.insert(id, self.records.len());
                self.records.push(Arc::new(record));
            }
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Arc<T>> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    /// Look up a record, failing with `UnknownReference`.
    pub fn require(&self, id: &str) -> Result<&Arc<T>, SimError> {
        self.get(id).ok_or_else(|| SimError::unknown(T::KIND, id))
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<T>> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Snapshot of all content.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub(crate) cards: Table<CardDefinition>,
    pub(crate) enemies: Table<EnemyTemplate>,
    pub(crate) relics: Table<RelicDefinition>,
    /// The unmodified catalog this snapshot was derived from, if any.
    origin: Option<Arc<Catalog>>,
}

impl Catalog {
    /// Build a catalog from raw records.
    pub fn new(
        cards: Vec<CardDefinition>,
        enemies: Vec<EnemyTemplate>,
        relics: Vec<RelicDefinition>,
    ) -> Result<Self, SimError> {
        Ok(Self {
            cards: Table::from_records(cards)?,
            enemies: Table::from_records(enemies)?,
            relics: Table::from_records(relics)?,
            origin: None,
        })
    }

    /// The built-in content.
    ///
    /// Panics if the built-in tables contain a duplicate or empty id.
    #[must_use]
    pub fn base() -> Self {
        fn table<T: Record>(records: Vec<T>) -> Table<T> {
            match Table::from_records(records) {
                Ok(t) => t,
                Err(e) => panic!("built-in content is invalid: {e}"),
            }
        }
        Self {
            cards: table(data::base_cards()),
            enemies: table(data::base_enemies()),
            relics: table(data::base_relics()),
            origin: None,
        }
    }

    /// A copy of `self` that remembers `origin` for `reset`.
    pub(crate) fn derived_from(mut self, origin: &Catalog) -> Self {
        self.origin = Some(match &origin.origin {
            Some(root) => Arc::clone(root),
            None => Arc::new(origin.clone()),
        });
        self
    }

    /// Drop every override and return the catalog they were applied to.
    #[must_use]
    pub fn reset(&self) -> Catalog {
        match &self.origin {
            Some(root) => root.as_ref().clone(),
            None => self.clone(),
        }
    }

    /// Has this catalog been derived through overrides?
    #[must_use]
    pub fn is_customized(&self) -> bool {
        self.origin.is_some()
    }

    pub fn card(&self, id: &str) -> Result<&Arc<CardDefinition>, SimError> {
        self.cards.require(id)
    }

    pub fn enemy(&self, id: &str) -> Result<&Arc<EnemyTemplate>, SimError> {
        self.enemies.require(id)
    }

    pub fn relic(&self, id: &str) -> Result<&Arc<RelicDefinition>, SimError> {
        self.relics.require(id)
    }

    #[must_use]
    pub fn cards(&self) -> &Table<CardDefinition> {
        &self.cards
    }

    #[must_use]
    pub fn enemies(&self) -> &Table<EnemyTemplate> {
        &self.enemies
    }

    #[must_use]
    pub fn relics(&self) -> &Table<RelicDefinition> {
        &self.relics
    }

    /// Enemies matching a predicate, in catalog order.
    pub fn find_enemies<F>(&self, predicate: F) -> impl Iterator<Item = &Arc<EnemyTemplate>>
    where
        F: Fn(&EnemyTemplate) -> bool,
    {
        self.enemies.iter().filter(move |e| predicate(e))
    }

    /// Boss templates registered for `act`.
    pub fn bosses(&self, act: u32) -> impl Iterator<Item = &Arc<EnemyTemplate>> {
        self.find_enemies(move |e| e.kind == EnemyKind::Boss && e.act == act)
    }

    /// Cards of `rarity` that can be offered as rewards.
    pub fn reward_pool(&self, rarity: CardRarity) -> impl Iterator<Item = &Arc<CardDefinition>> {
        self.cards
            .iter()
            .filter(move |c| c.rarity == rarity && c.rarity.is_rewardable())
    }

    /// The starter deck, in a fixed order.
    pub fn starter_deck(&self) -> Result<Vec<Arc<CardDefinition>>, SimError> {
        let mut deck = Vec::with_capacity(10);
        for &(id, count) in data::STARTER_DECK {
            let card = self.card(id)?;
            deck.extend(std::iter::repeat_with(|| Arc::clone(card)).take(count));
        }
        Ok(deck)
    }

    /// Every id referenced by a record but missing from the catalog.
    ///
    /// Covers status cards added by moves, partners, on-death recipes and
    /// split/summon recipes.
    #[must_use]
    pub fn validate_references(&self) -> Vec<SimError> {
        let mut missing = Vec::new();
        let need_enemy = |id: &str, missing: &mut Vec<SimError>| {
            if !self.enemies.contains(id) {
                missing.push(SimError::unknown(RecordKind::Enemy, id));
            }
        };

        for enemy in self.enemies.iter() {
            if let Some(partner) = &enemy.paired_with {
                need_enemy(partner.as_str(), &mut missing);
            }
            if let Some(recipe) = enemy.on_death {
                for id in recipe.templates() {
                    need_enemy(id, &mut missing);
                }
            }
            for mv in &enemy.moveset {
                match &mv.special {
                    Some(SpecialEffect::Split { recipe } | SpecialEffect::Summon { recipe }) => {
                        for id in recipe.templates() {
                            need_enemy(id, &mut missing);
                        }
                    }
                    Some(SpecialEffect::AddCards { cards, .. }) => {
                        for card in cards {
                            if !self.cards.contains(card.as_str()) {
                                missing.push(SimError::unknown(RecordKind::Card, card.as_str()));
                            }
                        }
                    }
                    _ => {}
                }
            }
        }

        for &(id, _) in data::STARTER_DECK {
            if !self.cards.contains(id) {
                missing.push(SimError::unknown(RecordKind::Card, id));
            }
        }

        missing.dedup();
        missing
    }
}
