//! Stable string identifiers for content records.
//!
//! Content is authored and overridden by id, so ids are strings rather than
//! dense integers. They wrap `Arc<str>` so cloning one into a runtime entity
//! or a frequency map never allocates.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Arc<str>);

        impl $name {
            /// Create a new id.
            #[must_use]
            pub fn new(id: &str) -> Self {
                Self(Arc::from(id))
            }

            /// The id as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// True if the id is the empty string.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new("")
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                &*self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                &*self.0 == *other
            }
        }
    };
}

string_id!(
    /// Identifier of a card definition.
    CardId
);

string_id!(
    /// Identifier of an enemy template.
    EnemyId
);

string_id!(
    /// Identifier of a relic definition.
    RelicId
);

string_id!(
    /// Identifier of a move within an enemy's moveset.
    MoveId
);

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    #[test]
    fn test_id_equality_and_display() {
        let a = CardId::new("strike");
        let b = CardId::from("strike");
        assert_eq!(a, b);
        assert_eq!(a, "strike");
        assert_eq!(a.to_string(), "strike");
        assert!(!a.is_empty());
        assert!(CardId::new("").is_empty());
    }

    #[test]
    fn test_lookup_by_str() {
        let mut map: FxHashMap<EnemyId, u32> = FxHashMap::default();
        map.insert(EnemyId::new("cultist"), 3);
        assert_eq!(map.get("cultist"), Some(&3));
    }

    #[test]
    fn test_serde_transparent() {
        let id = RelicId::new("anchor");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"anchor\"");
        let back: RelicId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
