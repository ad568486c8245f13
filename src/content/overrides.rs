//! User-authored content overrides.
//!
//! Overrides are partial JSON records keyed by id. They are kept apart
//! from the base catalog in an `OverrideStore`; `Catalog::with_overrides`
//! validates each one, deep-merges it onto the serialized base record
//! (objects merge field by field, arrays and scalars are replaced) and
//! deserializes the result into a fresh catalog snapshot. An override
//! with an id missing from the base catalog defines a new record.
//!
//! Invalid overrides are reported and skipped; they are never partially
//! applied.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::{RecordKind, SimError};

use super::catalog::{Catalog, Record, Table};

/// Partial records waiting to be merged, keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverrideStore {
    pub cards: BTreeMap<String, Value>,
    pub enemies: BTreeMap<String, Value>,
    pub relics: BTreeMap<String, Value>,
}

impl OverrideStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_card(&mut self, id: impl Into<String>, patch: Value) -> &mut Self {
        self.cards.insert(id.into(), patch);
        self
    }

    pub fn set_enemy(&mut self, id: impl Into<String>, patch: Value) -> &mut Self {
        self.enemies.insert(id.into(), patch);
        self
    }

    pub fn set_relic(&mut self, id: impl Into<String>, patch: Value) -> &mut Self {
        self.relics.insert(id.into(), patch);
        self
    }

    /// Remove one override.
    pub fn remove(&mut self, kind: RecordKind, id: &str) -> Option<Value> {
        match kind {
            RecordKind::Card => self.cards.remove(id),
            RecordKind::Enemy => self.enemies.remove(id),
            RecordKind::Relic => self.relics.remove(id),
            RecordKind::Move | RecordKind::Encounter => None,
        }
    }

    /// Drop every override.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.enemies.clear();
        self.relics.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len() + self.enemies.len() + self.relics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result of merging an `OverrideStore` onto a catalog.
#[derive(Clone, Debug)]
pub struct MergeOutcome {
    pub catalog: Catalog,
    /// One `SimError::Validation` per skipped override.
    pub rejected: Vec<SimError>,
}

impl Catalog {
    /// Derive a new catalog with every valid override applied.
    #[must_use]
    pub fn with_overrides(&self, store: &OverrideStore) -> MergeOutcome {
        let mut catalog = self.clone();
        let mut rejected = Vec::new();

        merge_table(&mut catalog.cards, &store.cards, validate_card, &mut rejected);
        merge_table(&mut catalog.enemies, &store.enemies, validate_enemy, &mut rejected);
        merge_table(&mut catalog.relics, &store.relics, validate_relic, &mut rejected);

        for err in &rejected {
            tracing::warn!(%err, "override rejected");
        }
        MergeOutcome {
            catalog: catalog.derived_from(self),
            rejected,
        }
    }
}

type Validator = fn(&str, &Value, bool) -> Result<(), SimError>;

fn merge_table<T: Record>(
    table: &mut Table<T>,
    patches: &BTreeMap<String, Value>,
    validate: Validator,
    rejected: &mut Vec<SimError>,
) {
    for (id, patch) in patches {
        let existing = table.get(id).cloned();
        let merged = validate(id, patch, existing.is_some()).and_then(|()| match &existing {
            Some(base) => merge_record(base.as_ref(), id, patch),
            None => build_record::<T>(id, patch),
        });
        match merged {
            Ok(record) => {
                tracing::debug!(kind = %T::KIND, id = %id, new = existing.is_none(), "override applied");
                table.upsert(record);
            }
            Err(err) => rejected.push(err),
        }
    }
}

fn merge_record<T: Record>(base: &T, id: &str, patch: &Value) -> Result<T, SimError> {
    let mut value = serde_json::to_value(base).map_err(|e| reject::<T>(id, e))?;
    deep_merge(&mut value, patch);
    decode(id, value)
}

fn build_record<T: Record>(id: &str, patch: &Value) -> Result<T, SimError> {
    let mut value = patch.clone();
    if let Value::Object(map) = &mut value {
        map.entry("name").or_insert_with(|| Value::String(id.to_string()));
    }
    decode(id, value)
}

fn decode<T: Record>(id: &str, value: Value) -> Result<T, SimError> {
    let mut record: T = serde_json::from_value(value).map_err(|e| reject::<T>(id, e))?;
    record.set_record_id(id);
    Ok(record)
}

fn reject<T: Record>(id: &str, err: serde_json::Error) -> SimError {
    SimError::validation(T::KIND, id, vec![err.to_string()])
}

/// Merge `patch` into `base`: objects recursively, everything else replaced.
pub fn deep_merge(base: &mut Value, patch: &Value) {
    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => {
            for (key, value) in patch {
                match base.get_mut(key) {
                    Some(slot) => deep_merge(slot, value),
                    None => {
                        base.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (slot, value) => *slot = value.clone(),
    }
}

/// Collected validation failures for one document.
struct Reasons(Vec<String>);

impl Reasons {
    fn new<'a>(id: &str, patch: &'a Value) -> (Self, Option<&'a Map<String, Value>>) {
        let mut reasons = Reasons(Vec::new());
        if id.is_empty() {
            reasons.push("id must not be empty");
        }
        let map = patch.as_object();
        match map {
            None => reasons.push("override must be a JSON object"),
            Some(map) => {
                if let Some(inner) = map.get("id") {
                    if inner.as_str().map_or(true, str::is_empty) {
                        reasons.push("id must be a non-empty string");
                    }
                }
            }
        }
        (reasons, map)
    }

    fn push(&mut self, reason: impl Into<String>) {
        self.0.push(reason.into());
    }

    /// `field`, if present and not null, must be an integer >= `min`.
    fn int_at_least(&mut self, map: &Map<String, Value>, field: &str, min: i64, path: &str) {
        if let Some(v) = map.get(field).filter(|v| !v.is_null()) {
            if v.as_i64().map_or(true, |n| n < min) {
                self.push(format!("{path}{field} must be an integer >= {min}"));
            }
        }
    }

    /// Fixed number or `{min, max}` object, both bounds >= `floor`.
    fn range_at_least(&mut self, map: &Map<String, Value>, field: &str, floor: i64, path: &str) {
        let Some(v) = map.get(field).filter(|v| !v.is_null()) else {
            return;
        };
        let ok = match v {
            Value::Object(range) => {
                match (
                    range.get("min").and_then(Value::as_i64),
                    range.get("max").and_then(Value::as_i64),
                ) {
                    (Some(lo), Some(hi)) => lo >= floor && hi >= lo,
                    _ => false,
                }
            }
            other => other.as_i64().is_some_and(|n| n >= floor),
        };
        if !ok {
            self.push(format!(
                "{path}{field} must be an integer >= {floor} or a {{min, max}} range with {floor} <= min <= max"
            ));
        }
    }

    fn finish(self, kind: RecordKind, id: &str) -> Result<(), SimError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(SimError::validation(kind, id, self.0))
        }
    }
}

fn check_card_fields(reasons: &mut Reasons, map: &Map<String, Value>, path: &str) {
    if let Some(cost) = map.get("cost") {
        let ok = cost.as_u64().is_some() || cost.as_str() == Some("X");
        if !ok {
            reasons.push(format!("{path}cost must be a non-negative integer or \"X\""));
        }
    }
    reasons.int_at_least(map, "damage", 0, path);
    reasons.int_at_least(map, "block", 0, path);
    reasons.int_at_least(map, "hits", 1, path);
}

/// Validate a card override.
pub fn validate_card(id: &str, patch: &Value, _existing: bool) -> Result<(), SimError> {
    let (mut reasons, map) = Reasons::new(id, patch);
    if let Some(map) = map {
        check_card_fields(&mut reasons, map, "");
        if let Some(upgrade) = map.get("upgrade").and_then(Value::as_object) {
            check_card_fields(&mut reasons, upgrade, "upgrade.");
        }
    }
    reasons.finish(RecordKind::Card, id)
}

/// Validate an enemy override. New enemies must define HP and moves and
/// may only use AI patterns.
pub fn validate_enemy(id: &str, patch: &Value, existing: bool) -> Result<(), SimError> {
    let (mut reasons, map) = Reasons::new(id, patch);
    if let Some(map) = map {
        reasons.range_at_least(map, "hp", 1, "");

        if let Some(ai) = map.get("ai") {
            if ai.get("pattern").and_then(Value::as_str) == Some("native") {
                reasons.push("ai must be one of the named patterns");
            }
        }

        match map.get("moveset") {
            Some(Value::Array(moves)) => {
                if moves.is_empty() {
                    reasons.push("moveset must not be empty");
                }
                for (i, mv) in moves.iter().enumerate() {
                    let path = format!("moveset[{i}].");
                    let Some(mv) = mv.as_object() else {
                        reasons.push(format!("moveset[{i}] must be an object"));
                        continue;
                    };
                    if mv.get("id").and_then(Value::as_str).map_or(true, str::is_empty) {
                        reasons.push(format!("{path}id must be a non-empty string"));
                    }
                    reasons.range_at_least(mv, "damage", 0, &path);
                    reasons.int_at_least(mv, "block", 0, &path);
                    reasons.int_at_least(mv, "hits", 1, &path);
                }
            }
            Some(_) => reasons.push("moveset must be an array"),
            None if !existing => reasons.push("a new enemy needs a moveset"),
            None => {}
        }

        if !existing && !map.contains_key("hp") {
            reasons.push("a new enemy needs hp");
        }
    }
    reasons.finish(RecordKind::Enemy, id)
}

/// Validate a relic override.
pub fn validate_relic(id: &str, patch: &Value, existing: bool) -> Result<(), SimError> {
    let (mut reasons, map) = Reasons::new(id, patch);
    if let Some(map) = map {
        reasons.int_at_least(map, "threshold", 1, "");
        reasons.int_at_least(map, "turn", 1, "");
        if !existing && !map.contains_key("effect") {
            reasons.push("a new relic needs an effect");
        }
    }
    reasons.finish(RecordKind::Relic, id)
}
