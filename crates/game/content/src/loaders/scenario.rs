//! Replay scenario loader.
//!
//! A scenario pins down an encounter completely: the draws the randomness
//! source will yield, in order, and the actions sent by the player.

use std::path::Path;

use encounter_core::Action;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Recorded encounter script.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,

    /// Draw values handed out in order; the sequence cycles when exhausted.
    #[serde(default)]
    pub draws: Vec<f64>,

    pub actions: Vec<Action>,
}

impl Scenario {
    pub fn new(name: impl Into<String>, draws: Vec<f64>, actions: Vec<Action>) -> Self {
        Self {
            name: name.into(),
            draws,
            actions,
        }
    }
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid scenario {}: {}", path.display(), e))
    }

    /// Parse a scenario from RON text.
    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        if let Some(bad) = scenario
            .draws
            .iter()
            .find(|draw| !(0.0..1.0).contains(*draw))
        {
            anyhow::bail!("draw {bad} is outside [0, 1)");
        }

        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_actions_and_draws() {
        let scenario = ScenarioLoader::parse(
            r#"(
                name: "opening",
                draws: [0.1, 0.1, 0.1, 0.5],
                actions: [
                    Battle,
                    SelectAttack,
                    ConfirmAttack(target: Some(0)),
                    Concede,
                ],
            )"#,
        )
        .expect("scenario");

        assert_eq!(scenario.name, "opening");
        assert_eq!(scenario.draws, vec![0.1, 0.1, 0.1, 0.5]);
        assert_eq!(
            scenario.actions,
            vec![
                Action::Battle,
                Action::SelectAttack,
                Action::attack(0),
                Action::Concede,
            ]
        );
    }

    #[test]
    fn draws_default_to_empty() {
        let scenario =
            ScenarioLoader::parse(r#"(name: "menu", actions: [Save, Restart])"#).expect("scenario");
        assert!(scenario.draws.is_empty());
        assert_eq!(scenario.actions.len(), 2);
    }

    #[test]
    fn out_of_range_draws_are_rejected() {
        let error = ScenarioLoader::parse(r#"(name: "bad", draws: [1.0], actions: [])"#)
            .unwrap_err();
        assert!(error.to_string().contains("outside"), "{error}");
    }

    #[test]
    fn unknown_actions_are_rejected() {
        assert!(ScenarioLoader::parse(r#"(name: "bad", actions: [Quit])"#).is_err());
    }
}
