//! Error types shared across the simulation core.
//!
//! ## Key Types
//!
//! - `SimError`: the three failure kinds (validation, invariant, unknown reference)
//! - `RecordKind`: which catalog a record or reference belongs to

use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog a record or reference belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Card,
    Enemy,
    Relic,
    Move,
    /// An encounter pool (e.g. "bosses for act 2").
    Encounter,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RecordKind::Card => "card",
            RecordKind::Enemy => "enemy",
            RecordKind::Relic => "relic",
            RecordKind::Move => "move",
            RecordKind::Encounter => "encounter",
        })
    }
}

/// Errors raised by the simulation core.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum SimError {
    /// Malformed custom content. Never partially applied.
    #[error("invalid {kind} `{id}`: {}", .reasons.join("; "))]
    Validation {
        kind: RecordKind,
        id: String,
        reasons: Vec<String>,
    },

    /// An entity reached an illegal state.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A record refers to an id missing from the catalog.
    #[error("unknown {kind} `{id}`")]
    UnknownReference { kind: RecordKind, id: String },
}

impl SimError {
    /// Build an unknown-reference error.
    pub fn unknown(kind: RecordKind, id: impl Into<String>) -> Self {
        SimError::UnknownReference { kind, id: id.into() }
    }

    /// Build a validation error from collected reasons.
    pub fn validation(kind: RecordKind, id: impl Into<String>, reasons: Vec<String>) -> Self {
        SimError::Validation {
            kind,
            id: id.into(),
            reasons,
        }
    }
}

/// Clamp a counter that must never go negative (HP, block).
///
/// Debug builds treat a negative value as a bug and panic. Release builds
/// log the violation and clamp to zero so a long batch keeps running.
pub(crate) fn clamp_non_negative(value: i32, what: &str) -> i32 {
    if value >= 0 {
        return value;
    }
    let err = SimError::InvariantViolation(format!("{what} = {value}"));
    debug_assert!(false, "{err}");
    tracing::warn!(%err, "clamping to zero");
    0
}
