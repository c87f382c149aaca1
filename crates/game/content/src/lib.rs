//! Data-driven content and loaders.
//!
//! This crate reads the data files that tune and script encounters:
//! - Game configuration (balance constants, restart policy) from TOML
//! - Replay scenarios (recorded draws plus an action sequence) from RON
//!
//! Content is consumed by the runtime and CLI and never appears in encounter
//! state. All loaders deserialize encounter-core types directly through serde.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, Scenario, ScenarioLoader};
