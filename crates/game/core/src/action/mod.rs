//! Player actions and the transition contract they implement.
//!
//! Every action the presentation layer can send is a variant of [`Action`].
//! Each variant maps to a small struct in [`kinds`] that implements
//! [`ActionTransition`]; the engine drives those through the
//! pre-validate / apply / post-validate pipeline.
//!
//! # Module Structure
//!
//! - `error`: [`ActionError`] raised by individual transitions
//! - `kinds`: one transition struct per action
//! - `narration`: narration line builders shared by the transitions
//! - `types`: typed reports returned alongside the new snapshot

pub mod error;
pub mod kinds;
pub mod narration;
pub mod types;

use std::fmt;

pub use error::ActionError;
pub use kinds::{
    CancelAttackAction, ConcedeAction, ConfirmAttackAction, FocusShieldAction, RestartAction,
    SaveAction, SelectAttackAction, StartBattleAction, run_enemy_phase,
};
pub use types::{
    ActionResult, AttackReport, BattleReport, EnemyPhaseReport, EnemyStrike, ShieldReport,
    VictoryReport,
};

use crate::env::EncounterEnv;
use crate::state::{EncounterState, GameScene};

/// Defines how a concrete action mutates the encounter state.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    ///
    /// Must not consume draws.
    fn pre_validate(
        &self,
        _state: &EncounterState,
        _env: &EncounterEnv<'_>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the state directly.
    fn apply(
        &self,
        state: &mut EncounterState,
        env: &mut EncounterEnv<'_>,
    ) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(
        &self,
        _state: &EncounterState,
        _env: &EncounterEnv<'_>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Data-free action identifier used at the UI boundary.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ActionTag {
    Battle,
    Save,
    Restart,
    #[strum(serialize = "ATTACK_STEP_1")]
    SelectAttack,
    #[strum(serialize = "ATTACK_STEP_2")]
    ConfirmAttack,
    Shield,
    CancelAttack,
    Concede,
}

impl ActionTag {
    const MENU: &'static [ActionTag] = &[ActionTag::Battle, ActionTag::Save, ActionTag::Restart];
    const BATTLE_BASE: &'static [ActionTag] =
        &[ActionTag::SelectAttack, ActionTag::Shield, ActionTag::Concede];
    const SELECTING_TARGET: &'static [ActionTag] = &[
        ActionTag::ConfirmAttack,
        ActionTag::CancelAttack,
        ActionTag::Concede,
    ];

    /// Tags accepted while the encounter sits in `scene`.
    pub const fn legal_in(scene: GameScene) -> &'static [ActionTag] {
        match scene {
            GameScene::Menu => Self::MENU,
            GameScene::BattleBase => Self::BATTLE_BASE,
            GameScene::SelectingTarget => Self::SELECTING_TARGET,
        }
    }

    pub fn is_legal_in(self, scene: GameScene) -> bool {
        Self::legal_in(scene).contains(&self)
    }
}

/// Optional parameters that accompany a tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionParams {
    pub target_index: Option<usize>,
}

impl ActionParams {
    pub fn target(index: usize) -> Self {
        Self {
            target_index: Some(index),
        }
    }
}

/// Closed set of player actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Battle,
    Save,
    Restart,
    SelectAttack,
    /// Confirms the attack against a roster position.
    ///
    /// A missing target is accepted here and rejected by validation.
    ConfirmAttack { target: Option<usize> },
    Shield,
    CancelAttack,
    Concede,
}

impl Action {
    /// Builds an action from a tag and its parameters.
    pub fn from_tag(tag: ActionTag, params: ActionParams) -> Self {
        match tag {
            ActionTag::Battle => Action::Battle,
            ActionTag::Save => Action::Save,
            ActionTag::Restart => Action::Restart,
            ActionTag::SelectAttack => Action::SelectAttack,
            ActionTag::ConfirmAttack => Action::ConfirmAttack {
                target: params.target_index,
            },
            ActionTag::Shield => Action::Shield,
            ActionTag::CancelAttack => Action::CancelAttack,
            ActionTag::Concede => Action::Concede,
        }
    }

    pub fn attack(target: usize) -> Self {
        Action::ConfirmAttack {
            target: Some(target),
        }
    }

    pub fn tag(&self) -> ActionTag {
        match self {
            Action::Battle => ActionTag::Battle,
            Action::Save => ActionTag::Save,
            Action::Restart => ActionTag::Restart,
            Action::SelectAttack => ActionTag::SelectAttack,
            Action::ConfirmAttack { .. } => ActionTag::ConfirmAttack,
            Action::Shield => ActionTag::Shield,
            Action::CancelAttack => ActionTag::CancelAttack,
            Action::Concede => ActionTag::Concede,
        }
    }

    pub fn is_legal_in(&self, scene: GameScene) -> bool {
        self.tag().is_legal_in(scene)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::ConfirmAttack {
                target: Some(index),
            } => write!(f, "{}({index})", self.tag()),
            _ => write!(f, "{}", self.tag()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn tags_parse_from_wire_names() {
        assert_eq!(ActionTag::from_str("BATTLE"), Ok(ActionTag::Battle));
        assert_eq!(ActionTag::from_str("ATTACK_STEP_1"), Ok(ActionTag::SelectAttack));
        assert_eq!(ActionTag::from_str("attack_step_2"), Ok(ActionTag::ConfirmAttack));
        assert_eq!(ActionTag::from_str("CANCEL_ATTACK"), Ok(ActionTag::CancelAttack));
        assert!(ActionTag::from_str("QUIT").is_err());
        assert_eq!(ActionTag::Concede.to_string(), "CONCEDE");
    }

    #[test]
    fn from_tag_carries_target_only_for_confirm() {
        let params = ActionParams::target(2);
        assert_eq!(
            Action::from_tag(ActionTag::ConfirmAttack, params),
            Action::attack(2)
        );
        assert_eq!(Action::from_tag(ActionTag::Shield, params), Action::Shield);
        assert_eq!(
            Action::from_tag(ActionTag::ConfirmAttack, ActionParams::default()),
            Action::ConfirmAttack { target: None }
        );
    }

    #[test]
    fn legality_follows_the_scene_table() {
        assert!(Action::Battle.is_legal_in(GameScene::Menu));
        assert!(!Action::Battle.is_legal_in(GameScene::BattleBase));
        assert!(Action::Concede.is_legal_in(GameScene::BattleBase));
        assert!(Action::Concede.is_legal_in(GameScene::SelectingTarget));
        assert!(!Action::Concede.is_legal_in(GameScene::Menu));
        assert!(!Action::attack(0).is_legal_in(GameScene::BattleBase));
        assert!(Action::CancelAttack.is_legal_in(GameScene::SelectingTarget));
    }

    #[test]
    fn display_includes_target() {
        assert_eq!(Action::attack(1).to_string(), "ATTACK_STEP_2(1)");
        assert_eq!(Action::SelectAttack.to_string(), "ATTACK_STEP_1");
    }
}
