//! Built-in content tables.
//!
//! These are plain constructors; `Catalog::base` indexes them once and
//! hands out shared, immutable records.

pub mod cards;
pub mod enemies;
pub mod relics;

pub use cards::{base_cards, STARTER_DECK};
pub use enemies::base_enemies;
pub use relics::base_relics;

/// Normal enemies small enough to appear in groups of three.
pub const WEAK_ENEMIES: &[&str] = &[
    "louse_red",
    "louse_green",
    "slime_small",
    "spike_slime_small",
    "fungi_beast",
];

/// Normal enemies allowed in pairs but not in larger groups.
pub const MEDIUM_ENEMIES: &[&str] = &[
    "slime_medium",
    "spike_slime_medium",
    "cultist",
    "mystic",
    "byrd",
];
