//! Unified error types surfaced by the runtime API.
use thiserror::Error;

use encounter_core::{Action, ConfigError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("invalid game config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error(
        "replay diverged at entry {index} ({action}): expected root {expected}, got {actual}"
    )]
    ReplayDivergence {
        index: usize,
        action: Action,
        expected: String,
        actual: String,
    },

    #[error("replay of entry {index} ({action}) consumed {actual} draws, log recorded {expected}")]
    DrawCountMismatch {
        index: usize,
        action: Action,
        expected: usize,
        actual: usize,
    },

    #[error("action log encoding failed")]
    LogEncoding(#[from] serde_json::Error),
}
