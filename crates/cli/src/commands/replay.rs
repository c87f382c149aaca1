use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use encounter_content::ScenarioLoader;
use encounter_runtime::replay_scenario;

use super::ConfigArgs;

/// Replay a scenario
#[derive(Parser)]
pub struct Replay {
    /// Scenario name under `<data-dir>/scenarios`, or a path to a `.ron` file
    #[arg(value_name = "SCENARIO")]
    scenario: String,

    #[command(flatten)]
    config: ConfigArgs,
}

impl Replay {
    pub fn execute(self) -> Result<()> {
        let config = self.config.load()?;

        let path = PathBuf::from(&self.scenario);
        let scenario = if path.extension().is_some_and(|ext| ext == "ron") {
            ScenarioLoader::load(&path)?
        } else {
            self.config.factory().load_scenario(&self.scenario)?
        };

        let outcome = replay_scenario(&config, &scenario);
        for line in &outcome.narration {
            println!("{line}");
        }
        println!();
        println!("scenario:  {}", scenario.name);
        println!("actions:   {}", scenario.actions.len());
        println!("rejected:  {}", outcome.failures);
        println!("draws:     {}", outcome.draws_consumed);
        println!("root:      {}", outcome.root_hex());
        Ok(())
    }
}
