//! Action execution errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::GameScene;

/// Errors raised by an individual action transition.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// Attack confirmed without a target, or with one past the roster end.
    #[error("target {} is out of range for a roster of {roster_len}", describe_target(.index))]
    TargetOutOfRange {
        index: Option<usize>,
        roster_len: usize,
    },

    /// Recognised but unsupported action.
    #[error("{0} not implemented yet.")]
    NotImplemented(&'static str),

    /// Scene and roster disagree, so the snapshot cannot be interpreted.
    #[error("scene {scene} cannot hold a roster of {roster_len} enemies")]
    UnknownScene { scene: GameScene, roster_len: usize },

    /// Configured roster does not fit the roster capacity.
    #[error("cannot spawn {requested} enemies, roster holds at most {capacity}")]
    RosterFull { requested: usize, capacity: usize },
}

fn describe_target(index: &Option<usize>) -> String {
    match index {
        Some(index) => index.to_string(),
        None => "(none)".to_string(),
    }
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::TargetOutOfRange { .. } => ErrorSeverity::Validation,
            Self::NotImplemented(_) => ErrorSeverity::Recoverable,
            Self::UnknownScene { .. } => ErrorSeverity::Fatal,
            Self::RosterFull { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TargetOutOfRange { .. } => "ACTION_TARGET_OUT_OF_RANGE",
            Self::NotImplemented(_) => "ACTION_NOT_IMPLEMENTED",
            Self::UnknownScene { .. } => "ACTION_UNKNOWN_SCENE",
            Self::RosterFull { .. } => "ACTION_ROSTER_FULL",
        }
    }
}
