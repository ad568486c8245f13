//! Runtime instance identification.
//!
//! Every enemy and card instance created during a combat gets a unique
//! `EntityId` from the combat's `EntityAllocator`. Ids are allocated in
//! creation order, so two combats replayed from the same seed hand out
//! the same ids.
//!
//! ```
//! use spire_sim::core::EntityAllocator;
//!
//! let mut ids = EntityAllocator::new();
//! let a = ids.next_id();
//! let b = ids.next_id();
//! assert_ne!(a, b);
//! assert_eq!(b.raw(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier of a runtime instance within one combat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic id source.
#[derive(Clone, Debug, Default)]
pub struct EntityAllocator {
    next: u32,
}

impl EntityAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub const fn allocated(&self) -> u32 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_is_sequential() {
        let mut ids = EntityAllocator::new();
        let got: Vec<_> = (0..3).map(|_| ids.next_id().raw()).collect();
        assert_eq!(got, vec![0, 1, 2]);
        assert_eq!(ids.allocated(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(EntityId(7).to_string(), "#7");
    }
}
