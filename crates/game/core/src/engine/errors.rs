//! Error types for the action execution pipeline.

use crate::action::{
    ActionError, ActionTag, ActionTransition, CancelAttackAction, ConcedeAction,
    ConfirmAttackAction, FocusShieldAction, RestartAction, SaveAction, SelectAttackAction,
    StartBattleAction,
};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameScene, InvariantError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("action {action} is not legal in scene {scene}")]
    InvalidActionForScene { action: ActionTag, scene: GameScene },

    #[error("battle action failed: {0}")]
    Battle(TransitionPhaseError<<StartBattleAction as ActionTransition>::Error>),

    #[error("save action failed: {0}")]
    Save(TransitionPhaseError<<SaveAction as ActionTransition>::Error>),

    #[error("restart action failed: {0}")]
    Restart(TransitionPhaseError<<RestartAction as ActionTransition>::Error>),

    #[error("select attack action failed: {0}")]
    SelectAttack(TransitionPhaseError<<SelectAttackAction as ActionTransition>::Error>),

    #[error("confirm attack action failed: {0}")]
    ConfirmAttack(TransitionPhaseError<<ConfirmAttackAction as ActionTransition>::Error>),

    #[error("shield action failed: {0}")]
    Shield(TransitionPhaseError<<FocusShieldAction as ActionTransition>::Error>),

    #[error("cancel attack action failed: {0}")]
    CancelAttack(TransitionPhaseError<<CancelAttackAction as ActionTransition>::Error>),

    #[error("concede action failed: {0}")]
    Concede(TransitionPhaseError<<ConcedeAction as ActionTransition>::Error>),

    #[error("state invariant violated: {0}")]
    Invariant(#[from] InvariantError),
}

impl ExecuteError {
    /// The phase-tagged action error, when an action transition failed.
    pub fn action_error(&self) -> Option<&TransitionPhaseError<ActionError>> {
        match self {
            Self::Battle(error)
            | Self::Save(error)
            | Self::Restart(error)
            | Self::SelectAttack(error)
            | Self::ConfirmAttack(error)
            | Self::Shield(error)
            | Self::CancelAttack(error)
            | Self::Concede(error) => Some(error),
            Self::InvalidActionForScene { .. } | Self::Invariant(_) => None,
        }
    }

    /// Short player-facing reason used for the error narration line.
    pub fn reason(&self) -> String {
        match self.action_error() {
            Some(phase_error) => phase_error.error.to_string(),
            None => self.to_string(),
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidActionForScene { .. } => ErrorSeverity::Recoverable,
            Self::Invariant(error) => error.severity(),
            _ => self
                .action_error()
                .map_or(ErrorSeverity::Internal, |phase_error| phase_error.error.severity()),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidActionForScene { .. } => "EXECUTE_INVALID_ACTION_FOR_SCENE",
            Self::Invariant(error) => error.error_code(),
            _ => self
                .action_error()
                .map_or("EXECUTE_UNKNOWN", |phase_error| phase_error.error.error_code()),
        }
    }
}
