//! Background work that runs many independent encounters.

mod simulation;

pub use simulation::{GameSummary, SimulationSummary, simulate_batch, simulate_encounter};
