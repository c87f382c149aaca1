use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use encounter_core::EncounterState;
use encounter_runtime::{ActionLog, verify_log};

use super::ConfigArgs;

/// Re-execute an action log recorded from a fresh game
#[derive(Parser)]
pub struct Verify {
    /// JSON action log written by `record`
    #[arg(value_name = "FILE")]
    log: PathBuf,

    #[command(flatten)]
    config: ConfigArgs,
}

impl Verify {
    pub fn execute(self) -> Result<()> {
        let config = self.config.load()?;
        let json = std::fs::read_to_string(&self.log)
            .with_context(|| format!("Failed to read {}", self.log.display()))?;
        let log = ActionLog::from_json(&json)?;

        let state = verify_log(&config, &EncounterState::new(&config), &log)?;
        println!(
            "verified {} entries, final root {}",
            log.len(),
            log.last().map(|entry| entry.root_hex()).unwrap_or_default()
        );
        println!("battles won: {}", state.battles_won);
        Ok(())
    }
}
