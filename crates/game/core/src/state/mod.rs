//! Authoritative encounter state.
//!
//! [`EncounterState`] is the single root of the world: it owns the player, the
//! enemy roster, the counters, and the narration log. Nothing is shared and
//! there are no back-references, so cloning a snapshot yields a fully
//! independent tree. Callers never mutate a snapshot in place; the engine
//! clones, mutates the clone, and hands it back.
pub mod error;
pub mod types;

#[cfg(feature = "serde")]
mod root;

use arrayvec::ArrayVec;

use crate::config::GameConfig;
pub use error::InvariantError;
pub use types::{Combatant, CombatantId, GameScene};

/// Ordered enemy roster. Insertion order is attack order.
pub type Roster = ArrayVec<Combatant, { GameConfig::MAX_ROSTER }>;

/// Canonical snapshot of the encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterState {
    pub player: Combatant,
    /// Active enemies in roster order.
    pub enemies: Roster,
    /// Monotonic enemy id allocator. Only ever increases until restart.
    enemy_num: u32,
    pub enemies_defeated: u32,
    pub battles_won: u32,
    pub scene: GameScene,
    /// Append-only narration log.
    pub messages: Vec<String>,
    /// Number of transitions applied to this game so far.
    pub nonce: u64,
}

impl EncounterState {
    /// Fresh game: full-config player in the menu, no enemies, empty log.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            player: Self::fresh_player(config),
            enemies: Roster::new(),
            enemy_num: 0,
            enemies_defeated: 0,
            battles_won: 0,
            scene: GameScene::Menu,
            messages: Vec::new(),
            nonce: 0,
        }
    }

    fn fresh_player(config: &GameConfig) -> Combatant {
        Combatant::player(
            config.player_starting_shield,
            config.player_shield_max,
            config.player_weapon,
        )
    }

    /// Resets everything except the narration log and the nonce.
    pub fn reset(&mut self, config: &GameConfig) {
        self.player = Self::fresh_player(config);
        self.enemies.clear();
        self.enemy_num = 0;
        self.enemies_defeated = 0;
        self.battles_won = 0;
        self.scene = GameScene::Menu;
    }

    /// Last enemy id handed out (0 before the first spawn).
    pub fn enemy_num(&self) -> u32 {
        self.enemy_num
    }

    /// Allocates the next enemy id.
    pub fn allocate_enemy_id(&mut self) -> CombatantId {
        self.enemy_num += 1;
        CombatantId(self.enemy_num)
    }

    /// Appends one narration line.
    pub fn narrate(&mut self, line: impl Into<String>) {
        self.messages.push(line.into());
    }

    /// True while the player is choosing an attack target.
    pub fn pending_target_selection(&self) -> bool {
        self.scene == GameScene::SelectingTarget
    }

    /// Clears the roster, returning how many enemies were dismissed.
    pub fn dismiss_roster(&mut self) -> usize {
        let dismissed = self.enemies.len();
        self.enemies.clear();
        dismissed
    }

    /// Checks shield bounds, defeat flags, and roster/scene consistency.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        for combatant in core::iter::once(&self.player).chain(self.enemies.iter()) {
            if combatant.shield > combatant.shield_max {
                return Err(InvariantError::ShieldAboveMax {
                    id: combatant.id,
                    shield: combatant.shield,
                    max: combatant.shield_max,
                });
            }
            if combatant.defeated && combatant.shield > 0 {
                return Err(InvariantError::DefeatMismatch {
                    id: combatant.id,
                    shield: combatant.shield,
                });
            }
        }

        if let Some(fallen) = self.enemies.iter().find(|enemy| enemy.defeated) {
            return Err(InvariantError::DefeatedOnRoster { id: fallen.id });
        }

        if self.scene.is_battle() == self.enemies.is_empty() {
            return Err(InvariantError::RosterSceneMismatch {
                scene: self.scene,
                roster_len: self.enemies.len(),
            });
        }

        Ok(())
    }
}

impl Default for EncounterState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{WeaponKind, create_weapon};

    #[test]
    fn new_state_starts_in_menu_with_full_player() {
        let state = EncounterState::default();
        assert_eq!(state.scene, GameScene::Menu);
        assert_eq!(state.player.shield, 50);
        assert_eq!(state.player.shield_max, 50);
        assert!(state.enemies.is_empty());
        assert_eq!(state.check_invariants(), Ok(()));
    }

    #[test]
    fn enemy_ids_are_monotonic() {
        let mut state = EncounterState::default();
        assert_eq!(state.allocate_enemy_id(), CombatantId(1));
        assert_eq!(state.allocate_enemy_id(), CombatantId(2));
        assert_eq!(state.enemy_num(), 2);
    }

    #[test]
    fn battle_scene_requires_enemies() {
        let mut state = EncounterState {
            scene: GameScene::BattleBase,
            ..EncounterState::default()
        };
        assert_eq!(
            state.check_invariants(),
            Err(InvariantError::RosterSceneMismatch {
                scene: GameScene::BattleBase,
                roster_len: 0,
            })
        );

        let id = state.allocate_enemy_id();
        state
            .enemies
            .push(Combatant::enemy(id, 0, 20, create_weapon(0, WeaponKind::Dagger)));
        assert_eq!(state.check_invariants(), Ok(()));
    }

    #[test]
    fn reset_keeps_messages_and_nonce() {
        let config = GameConfig::default();
        let mut state = EncounterState::new(&config);
        state.narrate("hello");
        state.nonce = 4;
        state.battles_won = 3;
        state.player.defeated = true;
        state.player.shield = 0;
        state.reset(&config);
        assert_eq!(state.messages, vec!["hello".to_string()]);
        assert_eq!(state.nonce, 4);
        assert_eq!(state.battles_won, 0);
        assert!(!state.player.defeated);
        assert_eq!(state.player.shield, 50);
    }
}
