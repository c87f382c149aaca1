//! Deterministic encounter rules shared by the runtime and offline tools.
//!
//! `encounter-core` defines the canonical rules (actions, engine, state) and
//! exposes pure APIs with no I/O and no ambient randomness. Every state change
//! flows through [`engine::GameEngine`]; callers normally use
//! [`engine::transition`], which clones the snapshot, applies one action with
//! an explicit [`env::RandomSource`], and returns the new snapshot plus the
//! narration it produced.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{
    Action, ActionError, ActionParams, ActionResult, ActionTag, ActionTransition, AttackReport,
    BattleReport, EnemyPhaseReport, EnemyStrike, ShieldReport, VictoryReport,
};
pub use combat::{
    FusionReport, Weapon, WeaponKind, apply_damage, create_enemy, create_weapon, fuse_weapon,
    heal_shield, roll_weapon_damage,
};
pub use config::{ConfigError, GameConfig, RestartPolicy};
pub use engine::{
    ExecuteError, ExecutionOutcome, GameEngine, Transition, TransitionPhase,
    TransitionPhaseError, transition, try_transition,
};
pub use env::{EncounterEnv, RandomSource, ScriptedDraws, select_random};
pub use error::{ErrorSeverity, GameError};
pub use state::{Combatant, CombatantId, EncounterState, GameScene, InvariantError, Roster};
