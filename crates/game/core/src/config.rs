use crate::combat::{Weapon, WeaponKind};

/// What happens to the narration log when the game is restarted.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RestartPolicy {
    /// Keep every message across restarts (the log is append-only for a session).
    #[default]
    PreserveLog,
    /// Drop the log before narrating the new game.
    ClearLog,
}

/// Errors produced by [`GameConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("player_shield_max must be greater than zero")]
    ZeroPlayerShield,

    #[error("enemy_shield_max must be greater than zero")]
    ZeroEnemyShield,

    #[error("player_starting_shield {starting} exceeds player_shield_max {max}")]
    StartingShieldAboveMax { starting: u32, max: u32 },

    #[error("roster_size {size} must be between 1 and {max}")]
    RosterSize { size: usize, max: usize },

    #[error("victory_recharge_level_divisor must be greater than zero")]
    ZeroLevelDivisor,

    #[error("base_shield_recharge {base} times focus_multiplier {multiplier} overflows")]
    FocusRechargeOverflow { base: u32, multiplier: u32 },

    #[error("player weapon damage range overflows")]
    WeaponDamageOverflow,
}

/// Game balance constants and tunable parameters.
///
/// Every numeric rule constant lives here so that a product decision never
/// requires touching the reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Upper bound for the player's shield.
    pub player_shield_max: u32,
    /// Shield the player starts (and restarts) with.
    pub player_starting_shield: u32,
    /// Weapon handed to a fresh player.
    pub player_weapon: Weapon,
    /// Passive recharge after surviving an enemy phase.
    pub base_shield_recharge: u32,
    /// Multiplier applied to the base recharge when the player focuses the shield.
    pub focus_multiplier: u32,
    /// Shield (and shield max) of every spawned enemy.
    pub enemy_shield_max: u32,
    /// Number of enemies spawned per battle.
    pub roster_size: usize,
    /// Flat part of the recharge awarded for clearing a roster.
    pub victory_recharge_base: u32,
    /// Level divisor of the victory recharge: `base + level / divisor`.
    pub victory_recharge_level_divisor: u32,
    /// Whether restarting clears the narration log.
    pub restart_policy: RestartPolicy,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Capacity of the enemy roster.
    pub const MAX_ROSTER: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PLAYER_SHIELD_MAX: u32 = 50;
    pub const DEFAULT_BASE_SHIELD_RECHARGE: u32 = 2;
    pub const DEFAULT_FOCUS_MULTIPLIER: u32 = 3;
    pub const DEFAULT_ENEMY_SHIELD_MAX: u32 = 20;
    pub const DEFAULT_ROSTER_SIZE: usize = 3;
    pub const DEFAULT_VICTORY_RECHARGE_BASE: u32 = 5;
    pub const DEFAULT_VICTORY_RECHARGE_LEVEL_DIVISOR: u32 = 5;

    pub fn new() -> Self {
        Self {
            player_shield_max: Self::DEFAULT_PLAYER_SHIELD_MAX,
            player_starting_shield: Self::DEFAULT_PLAYER_SHIELD_MAX,
            player_weapon: Weapon::new(WeaponKind::Dagger, 3, 0, 2),
            base_shield_recharge: Self::DEFAULT_BASE_SHIELD_RECHARGE,
            focus_multiplier: Self::DEFAULT_FOCUS_MULTIPLIER,
            enemy_shield_max: Self::DEFAULT_ENEMY_SHIELD_MAX,
            roster_size: Self::DEFAULT_ROSTER_SIZE,
            victory_recharge_base: Self::DEFAULT_VICTORY_RECHARGE_BASE,
            victory_recharge_level_divisor: Self::DEFAULT_VICTORY_RECHARGE_LEVEL_DIVISOR,
            restart_policy: RestartPolicy::default(),
        }
    }

    pub fn with_restart_policy(mut self, restart_policy: RestartPolicy) -> Self {
        self.restart_policy = restart_policy;
        self
    }

    pub fn with_roster_size(mut self, roster_size: usize) -> Self {
        self.roster_size = roster_size;
        self
    }

    /// Shield gained by the "focus shield" action.
    pub fn focused_recharge(&self) -> u32 {
        self.base_shield_recharge.saturating_mul(self.focus_multiplier)
    }

    /// Shield awarded for clearing a roster whose last enemy had `level`.
    pub fn victory_recharge(&self, level: u32) -> u32 {
        self.victory_recharge_base
            .saturating_add(level / self.victory_recharge_level_divisor.max(1))
    }

    /// Checks that the constants describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_shield_max == 0 {
            return Err(ConfigError::ZeroPlayerShield);
        }
        if self.enemy_shield_max == 0 {
            return Err(ConfigError::ZeroEnemyShield);
        }
        if self.player_starting_shield > self.player_shield_max {
            return Err(ConfigError::StartingShieldAboveMax {
                starting: self.player_starting_shield,
                max: self.player_shield_max,
            });
        }
        if self.roster_size == 0 || self.roster_size > Self::MAX_ROSTER {
            return Err(ConfigError::RosterSize {
                size: self.roster_size,
                max: Self::MAX_ROSTER,
            });
        }
        if self.victory_recharge_level_divisor == 0 {
            return Err(ConfigError::ZeroLevelDivisor);
        }
        if self
            .base_shield_recharge
            .checked_mul(self.focus_multiplier)
            .is_none()
        {
            return Err(ConfigError::FocusRechargeOverflow {
                base: self.base_shield_recharge,
                multiplier: self.focus_multiplier,
            });
        }
        let weapon = &self.player_weapon;
        if weapon
            .base_damage
            .checked_add(weapon.bonus_damage_min)
            .and_then(|damage| damage.checked_add(weapon.bonus_damage_max))
            .is_none()
        {
            return Err(ConfigError::WeaponDamageOverflow);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.focused_recharge(), 6);
        assert_eq!(config.victory_recharge(0), 5);
        assert_eq!(config.victory_recharge(12), 7);
    }

    #[test]
    fn rejects_oversized_roster() {
        let config = GameConfig::default().with_roster_size(GameConfig::MAX_ROSTER + 1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::RosterSize {
                size: GameConfig::MAX_ROSTER + 1,
                max: GameConfig::MAX_ROSTER,
            })
        );
    }

    #[test]
    fn rejects_starting_shield_above_max() {
        let config = GameConfig {
            player_starting_shield: 60,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::StartingShieldAboveMax { starting: 60, max: 50 })
        ));
    }

    #[test]
    fn restart_policy_parses_from_snake_case() {
        assert_eq!("clear_log".parse::<RestartPolicy>(), Ok(RestartPolicy::ClearLog));
        assert_eq!(RestartPolicy::PreserveLog.to_string(), "preserve_log");
    }

    #[test]
    fn rejects_overflowing_focus_recharge() {
        let config = GameConfig {
            base_shield_recharge: u32::MAX / 2,
            focus_multiplier: 3,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::FocusRechargeOverflow {
                base: u32::MAX / 2,
                multiplier: 3,
            })
        );
        assert_eq!(config.focused_recharge(), u32::MAX);
    }

    #[test]
    fn rejects_overflowing_player_weapon() {
        let config = GameConfig {
            player_weapon: Weapon::new(WeaponKind::Dagger, u32::MAX, 1, 2),
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::WeaponDamageOverflow));
    }

    #[test]
    fn victory_recharge_saturates() {
        let config = GameConfig {
            victory_recharge_base: u32::MAX,
            ..GameConfig::default()
        };
        assert_eq!(config.victory_recharge(40), u32::MAX);
    }
}
