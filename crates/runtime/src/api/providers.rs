//! Abstraction for sourcing player intent.
//!
//! Runtime users plug in [`ActionProvider`] implementations so a session can
//! run with human input, scripted fixtures, or automated policies.
use std::collections::VecDeque;

use encounter_core::{Action, EncounterState, GameConfig};

/// Trait for providing actions based on the current snapshot.
///
/// Different implementations can handle:
/// - Player input (from UI/CLI)
/// - Scripted/replayed actions
/// - Automated play for simulation
pub trait ActionProvider {
    /// Next action to dispatch, or `None` when the provider is done.
    fn provide_action(&mut self, state: &EncounterState, config: &GameConfig) -> Option<Action>;
}

/// Hands out a fixed list of actions in order.
#[derive(Clone, Debug, Default)]
pub struct ScriptedProvider {
    actions: VecDeque<Action>,
}

impl ScriptedProvider {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.actions.len()
    }
}

impl ActionProvider for ScriptedProvider {
    fn provide_action(&mut self, _state: &EncounterState, _config: &GameConfig) -> Option<Action> {
        self.actions.pop_front()
    }
}
