//! Combat arithmetic.
//!
//! Pure helpers used by the action transitions: weapon rolls, shield damage
//! and recharge, enemy construction, and weapon fusion. Every function that
//! needs entropy takes the randomness source explicitly and consumes draws
//! in a fixed order.

pub mod factory;
pub mod fusion;
pub mod shield;
pub mod weapon;

pub use factory::create_enemy;
pub use fusion::{FusionReport, fuse_weapon, fusion_candidates, resolve_fusion};
pub use shield::{DamageOutcome, apply_damage, heal_shield};
pub use weapon::{Weapon, WeaponKind, create_weapon, roll_weapon_damage};
