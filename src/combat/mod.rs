//! Turn-based combat.
//!
//! ## Key Types
//!
//! - `Combat`: the state of one fight, advanced by `PlayerIntent`s
//! - `CombatSnapshot`: read-only view for a presentation layer
//! - `CombatStats` / `CombatOutcome`: what the fight produced
//!
//! ## Usage
//!
//! ```rust
//! use spire_sim::combat::{Combat, PlayerIntent};
//! use spire_sim::content::Catalog;
//! use spire_sim::core::{CombatOptions, GameRng};
//! use spire_sim::encounters::generate_encounter;
//! use spire_sim::entities::Player;
//! use spire_sim::relics::RelicSet;
//!
//! let catalog = Catalog::base();
//! let deck = catalog.starter_deck().unwrap();
//! let encounter = generate_encounter(&catalog, 1, 0, false, &mut GameRng::new(7)).unwrap();
//! let mut combat = Combat::new(
//!     &catalog,
//!     Player::new(80, 80),
//!     &deck,
//!     &encounter,
//!     RelicSet::new(),
//!     &CombatOptions::default(),
//! );
//!
//! let _ = combat.apply(PlayerIntent::PlayCard { hand_index: 0, target: None });
//! combat.apply(PlayerIntent::EndTurn).unwrap();
//! println!("{}", serde_json::to_string(&combat.snapshot()).unwrap());
//! ```

mod engine;
mod enemy_turn;
mod intent;
mod player_turn;
mod snapshot;
mod stats;

pub use engine::{Combat, HAND_LIMIT};
pub use intent::{IntentError, PlayerIntent};
pub use snapshot::{CardView, CombatSnapshot, EnemyView, IntentPreview, PlayerView};
pub use stats::{CombatOutcome, CombatStats};
