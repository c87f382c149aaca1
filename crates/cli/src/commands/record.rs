use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use encounter_runtime::{Autopilot, Session};

use super::ConfigArgs;

/// Play one seeded autopilot game and write its action log
#[derive(Parser)]
pub struct Record {
    /// Seed for the randomness source
    #[arg(short, long, default_value = "0")]
    seed: u64,

    /// Stop after this many actions
    #[arg(long, default_value = "1000")]
    max_actions: usize,

    /// Output file for the JSON action log
    #[arg(short, long, value_name = "FILE", default_value = "actions.json")]
    output: PathBuf,

    #[command(flatten)]
    config: ConfigArgs,
}

impl Record {
    pub fn execute(self) -> Result<()> {
        let config = self.config.load()?;
        let mut session = Session::new(config, self.seed)?;
        let dispatched = session.run(&mut Autopilot::default(), self.max_actions);

        let json = session.log().to_json()?;
        std::fs::write(&self.output, json)
            .with_context(|| format!("Failed to write {}", self.output.display()))?;

        let state = session.state();
        println!("actions:      {dispatched}");
        println!("battles won:  {}", state.battles_won);
        println!("defeated:     {}", state.player.defeated);
        println!("log:          {}", self.output.display());
        Ok(())
    }
}
