//! Typed reports describing what an action did.
//!
//! Reports are returned next to the new snapshot so callers can react to an
//! outcome without parsing narration.

use crate::combat::FusionReport;
use crate::state::CombatantId;

/// Enemies spawned by a battle start.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleReport {
    pub level: u32,
    pub enemies: Vec<CombatantId>,
}

/// One enemy hit on the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyStrike {
    pub enemy: CombatantId,
    pub damage: u32,
    /// Player shield right after this hit.
    pub player_shield: u32,
}

/// Outcome of the enemies' counter-attack.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyPhaseReport {
    /// Hits in roster order, ending at the defeating hit if any.
    pub strikes: Vec<EnemyStrike>,
    pub player_defeated: bool,
    /// Passive recharge actually gained; `None` when the player fell.
    pub recharge: Option<u32>,
    /// Enemies dismissed after the player fell.
    pub dismissed: usize,
}

/// Rewards granted when the last enemy falls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VictoryReport {
    /// Recharge awarded before capping.
    pub recharge: u32,
    /// Shield actually gained.
    pub gained: u32,
    pub battles_won: u32,
}

/// Result of a confirmed attack.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackReport {
    pub target: CombatantId,
    pub damage: u32,
    pub defeated: bool,
    pub fusion: Option<FusionReport>,
    pub victory: Option<VictoryReport>,
    pub enemy_phase: Option<EnemyPhaseReport>,
}

/// Result of focusing the shield.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShieldReport {
    pub recharge: u32,
    pub gained: u32,
    pub enemy_phase: EnemyPhaseReport,
}

/// Action-specific outcome returned by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    BattleStarted(BattleReport),
    /// A defeated player asked for a battle; nothing changed.
    BattleRefused,
    Restarted { log_cleared: bool },
    TargetSelection,
    Attack(AttackReport),
    Shield(ShieldReport),
    AttackCancelled,
    Conceded { dismissed: usize },
}

impl ActionResult {
    /// True when this action left the player defeated.
    pub fn player_defeated(&self) -> bool {
        match self {
            ActionResult::Attack(report) => report
                .enemy_phase
                .as_ref()
                .is_some_and(|phase| phase.player_defeated),
            ActionResult::Shield(report) => report.enemy_phase.player_defeated,
            ActionResult::Conceded { .. } => true,
            _ => false,
        }
    }
}
