//! Everything a transition reads besides the snapshot itself.
//!
//! [`EncounterEnv`] bundles the balance constants with the caller-supplied
//! randomness source so action transitions never depend on concrete
//! implementations.
mod rng;

pub use rng::{
    RandomSource, ScriptedDraws, scaled_floor, select_index, select_random, unit,
};

use crate::config::GameConfig;

/// Read-only configuration plus the draw stream consumed by a transition.
pub struct EncounterEnv<'a> {
    config: &'a GameConfig,
    rng: &'a mut dyn RandomSource,
    draws: usize,
}

impl<'a> EncounterEnv<'a> {
    pub fn new(config: &'a GameConfig, rng: &'a mut dyn RandomSource) -> Self {
        Self {
            config,
            rng,
            draws: 0,
        }
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    /// Consume one draw, counting it.
    pub fn draw(&mut self) -> f64 {
        self.draws += 1;
        self.rng.draw()
    }

    /// Number of draws consumed through this environment.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for EncounterEnv<'_> {
    fn draw(&mut self) -> f64 {
        EncounterEnv::draw(self)
    }
}
