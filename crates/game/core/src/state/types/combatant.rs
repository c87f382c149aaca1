use std::fmt;

use crate::combat::Weapon;

/// Stable identity of a combatant.
///
/// Enemies take the value of the state's monotonic enemy counter at creation,
/// so ids are never reused within a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantId(pub u32);

impl CombatantId {
    /// Reserved identifier for the player character.
    pub const PLAYER: Self = Self(0);

    #[inline]
    pub const fn is_player(self) -> bool {
        self.0 == Self::PLAYER.0
    }
}

impl Default for CombatantId {
    fn default() -> Self {
        Self::PLAYER
    }
}

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_player() {
            write!(f, "Player")
        } else {
            write!(f, "Enemy #{}", self.0)
        }
    }
}

/// Shared shape of the player and every enemy.
///
/// Invariant: `shield <= shield_max`. `defeated` is set only by damage and
/// never cleared for the lifetime of the combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: CombatantId,
    pub shield: u32,
    pub shield_max: u32,
    pub defeated: bool,
    pub weapon: Weapon,
    /// Enemy level; the player stays at 0.
    pub level: u32,
}

impl Combatant {
    /// Creates the player at `shield` out of `shield_max`.
    pub fn player(shield: u32, shield_max: u32, weapon: Weapon) -> Self {
        Self {
            id: CombatantId::PLAYER,
            shield: shield.min(shield_max),
            shield_max,
            defeated: false,
            weapon,
            level: 0,
        }
    }

    /// Creates an enemy at full shield.
    pub fn enemy(id: CombatantId, level: u32, shield_max: u32, weapon: Weapon) -> Self {
        Self {
            id,
            shield: shield_max,
            shield_max,
            defeated: false,
            weapon,
            level,
        }
    }

    /// `Player` or `Enemy #n (Kind)`, used by narration.
    pub fn label(&self) -> String {
        if self.id.is_player() {
            self.id.to_string()
        } else {
            format!("{} ({})", self.id, self.weapon.name())
        }
    }
}
