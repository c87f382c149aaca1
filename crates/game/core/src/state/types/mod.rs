//! Value types stored inside [`crate::state::EncounterState`].

mod combatant;
mod scene;

pub use combatant::{Combatant, CombatantId};
pub use scene::GameScene;
