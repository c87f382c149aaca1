//! Command implementations.
//!
//! Each command owns its clap arguments and an `execute` entry point.

mod record;
mod replay;
mod simulate;
mod verify;

pub use record::Record;
pub use replay::Replay;
pub use simulate::Simulate;
pub use verify::Verify;

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use encounter_content::{ConfigLoader, ContentFactory};
use encounter_core::GameConfig;

/// Where balance constants come from.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Content directory holding `config.toml` and `scenarios/`
    #[arg(short, long, value_name = "DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Explicit config file; overrides the one in the data directory
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl ConfigArgs {
    pub fn factory(&self) -> ContentFactory {
        ContentFactory::new(&self.data_dir)
    }

    pub fn load(&self) -> Result<GameConfig> {
        let config = match &self.config {
            Some(path) => ConfigLoader::load(path)?,
            None => self.factory().load_config()?,
        };
        tracing::debug!(target: "cli", ?config, "Loaded game config");
        Ok(config)
    }
}
