//! Headless simulation.
//!
//! ## Key Types
//!
//! - `simulate_combat`: one fight played by `GreedyPolicy`
//! - `simulate_run`: floors and bosses chained with healing and rewards
//! - `run_balance_report`: many runs, aggregated
//!
//! Everything here is a pure function of its inputs and seed. The catalog
//! is only read, so one catalog can serve every worker of a batch.

mod combat;
mod policy;
mod report;
mod run;

pub use combat::{fight, simulate_combat, SimulationResult};
pub use policy::{GreedyPolicy, PlayPolicy};
pub use report::{run_balance_report, run_seed, BalanceReport, RunFailure};
pub use run::{simulate_run, FloorStats, RunResult};
