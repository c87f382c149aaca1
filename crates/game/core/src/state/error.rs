//! State invariant violations.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{CombatantId, GameScene};

/// A snapshot that breaks one of the encounter invariants.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvariantError {
    /// Shield above its maximum.
    #[error("{id} shield {shield} exceeds maximum {max}")]
    ShieldAboveMax {
        id: CombatantId,
        shield: u32,
        max: u32,
    },

    /// Defeated combatant with shield left.
    #[error("{id} is defeated but still has shield {shield}")]
    DefeatMismatch { id: CombatantId, shield: u32 },

    /// Battle scene without enemies, or enemies outside a battle.
    #[error("scene {scene} is inconsistent with a roster of {roster_len} enemies")]
    RosterSceneMismatch { scene: GameScene, roster_len: usize },

    /// Defeated enemy still on the roster.
    #[error("{id} is defeated but still on the roster")]
    DefeatedOnRoster { id: CombatantId },
}

impl GameError for InvariantError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ShieldAboveMax { .. } => "STATE_SHIELD_ABOVE_MAX",
            Self::DefeatMismatch { .. } => "STATE_DEFEAT_MISMATCH",
            Self::RosterSceneMismatch { .. } => "STATE_ROSTER_SCENE_MISMATCH",
            Self::DefeatedOnRoster { .. } => "STATE_DEFEATED_ON_ROSTER",
        }
    }
}
