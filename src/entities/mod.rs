//! Runtime entities created from content templates.
//!
//! ## Key Types
//!
//! - `EnemyInstance`: template plus mutable combat state and one-shot flags
//! - `CardInstance`: resolved card template plus a unique id
//! - `Player`: the player's vitals, statuses and active powers
//!
//! Derived spawns (splits, summons) are produced by `spawn::spawn` from a
//! closed set of recipes; rebirth and waking live in `lifecycle`.

pub mod enemy;
pub mod card;
pub mod player;
pub mod spawn;
pub mod lifecycle;

pub use enemy::{EnemyFlags, EnemyInstance};
pub use card::CardInstance;
pub use player::{Player, Powers};
pub use spawn::{spawn, Spawned, MAX_LIVING_ENEMIES};
pub use lifecycle::{rebirth, wake_on_hp_loss};
