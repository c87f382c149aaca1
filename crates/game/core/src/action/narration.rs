//! Narration lines appended to the encounter log.

use crate::combat::FusionReport;
use crate::state::{Combatant, EncounterState};

pub const NEW_GAME: &str = "Started a new game.";
pub const CHOOSE_TARGET: &str = "Choose an enemy to attack.";
pub const ATTACK_CANCELLED: &str = "Attack cancelled.";
pub const BATTLE_REFUSED: &str = "Player was defeated. Restart to start a new game.";
pub const RESTART_HINT: &str = "Restart to start a new game.";

/// `Player Shield: x/max` or `Enemy #n (Kind) Shield: x/max`.
pub fn shield_line(combatant: &Combatant) -> String {
    format!(
        "{} Shield: {}/{}",
        combatant.label(),
        combatant.shield,
        combatant.shield_max
    )
}

/// Appends one shield line for the player and each enemy on the roster.
pub fn narrate_status(state: &mut EncounterState) {
    let lines: Vec<String> = core::iter::once(&state.player)
        .chain(state.enemies.iter())
        .map(shield_line)
        .collect();
    state.messages.extend(lines);
}

pub fn battle_started(battle: u32, enemies: usize) -> String {
    format!("Battle {battle} begins against {enemies} enemies!")
}

pub fn player_attack(target: &str, damage: u32) -> String {
    format!("Player attacks {target} for {damage} damage!")
}

pub fn enemy_attack(enemy: &str, damage: u32) -> String {
    format!("{enemy} attacks for {damage} damage!")
}

pub fn enemy_defeated(enemy: &str) -> String {
    format!("{enemy} defeated!")
}

pub fn fusion(report: &FusionReport) -> String {
    format!(
        "{} takes up the fallen {} of {} and fuses its {} into a Spear!",
        report.recipient,
        report.fallen_kind.name(),
        report.fallen,
        report.absorbed_kind.name(),
    )
}

pub fn victory_recharge(amount: u32, shield: u32, max: u32) -> String {
    format!("Shield recharged by {amount} to {shield}/{max}")
}

pub fn battle_won(battles_won: u32) -> String {
    format!("All enemies defeated! Battles won: {battles_won}.")
}

pub fn focus_recharge(amount: u32, shield: u32, max: u32) -> String {
    format!("Focusing the shield recharges by {amount} to {shield}/{max}")
}

pub fn passive_recharge(amount: u32, shield: u32, max: u32) -> String {
    format!("Player shield recharges by {amount} to {shield}/{max}")
}

pub fn game_over(battles_won: u32) -> String {
    format!("Player defeated after winning {battles_won} battles! Game Over.")
}

pub fn conceded(battles_won: u32) -> String {
    format!("Conceding. {}", game_over(battles_won))
}

pub fn error(reason: &str) -> String {
    format!("Error: {reason}")
}
