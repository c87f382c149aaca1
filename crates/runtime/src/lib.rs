//! Runtime orchestration for deterministic encounters.
//!
//! This crate wires the pure reducer from `encounter-core` into something a
//! front end or tool can drive: a [`Session`] that owns the current snapshot
//! and a recording randomness source, an action log with state roots, replay
//! verification, action providers, and a parallel batch simulator.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the error type and the provider abstraction
//! - [`providers`] holds concrete action providers
//! - [`repository`] stores the per-session action log
//! - [`rng`] supplies seeded and recording randomness sources
//! - [`session`] hosts the session driver
//! - [`replay`] re-runs recorded sessions and scenarios
//! - [`workers`] runs many independent encounters for simulation
pub mod api;
pub mod providers;
pub mod replay;
pub mod repository;
pub mod rng;
pub mod session;

mod workers;

pub use api::{ActionProvider, Result, RuntimeError, ScriptedProvider};
pub use providers::Autopilot;
pub use replay::{ReplayOutcome, replay, replay_scenario, verify_log};
pub use repository::{ActionLog, ActionLogEntry};
pub use rng::{RecordingSource, SeededSource};
pub use session::Session;
pub use workers::{GameSummary, SimulationSummary, simulate_batch, simulate_encounter};
