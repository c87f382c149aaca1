//! Session driver.
//!
//! A [`Session`] holds the current snapshot, hands every dispatched action to
//! the core reducer with a recording randomness source, and appends the
//! outcome to its [`ActionLog`]. The snapshot is replaced wholesale after each
//! dispatch; nothing outside the reducer mutates it.

use encounter_core::{
    Action, EncounterState, GameConfig, GameError, RandomSource, transition,
};
use tracing::{debug, info, warn};

use crate::api::{ActionProvider, Result};
use crate::repository::{ActionLog, ActionLogEntry};
use crate::rng::{RecordingSource, SeededSource};

pub struct Session<S = SeededSource> {
    config: GameConfig,
    initial: EncounterState,
    state: EncounterState,
    rng: RecordingSource<S>,
    log: ActionLog,
}

impl Session<SeededSource> {
    /// Fresh game driven by a seeded generator.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_source(config, SeededSource::new(seed))
    }
}

impl<S: RandomSource> Session<S> {
    /// Fresh game driven by an arbitrary randomness source.
    pub fn with_source(config: GameConfig, source: S) -> Result<Self> {
        let state = EncounterState::new(&config);
        Self::resume(config, state, source)
    }

    /// Continue from an existing snapshot.
    pub fn resume(config: GameConfig, state: EncounterState, source: S) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            initial: state.clone(),
            state,
            rng: RecordingSource::new(source),
            log: ActionLog::new(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Snapshot the session started from.
    pub fn initial_state(&self) -> &EncounterState {
        &self.initial
    }

    pub fn state(&self) -> &EncounterState {
        &self.state
    }

    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    /// Applies one action and records it.
    ///
    /// Rejected actions still produce an entry: the snapshot keeps its
    /// previous contents plus one error narration line.
    pub fn dispatch(&mut self, action: Action) -> &ActionLogEntry {
        let scene = self.state.scene;
        let outcome = transition(&self.state, &action, &self.config, &mut self.rng);
        let draws = self.rng.take_recorded();

        let error_code = match &outcome.result {
            Ok(_) => {
                info!(
                    target: "runtime::session",
                    nonce = outcome.state.nonce,
                    action = %action,
                    from = %scene,
                    to = %outcome.state.scene,
                    "Action applied"
                );
                None
            }
            Err(error) => {
                warn!(
                    target: "runtime::session",
                    action = %action,
                    scene = %scene,
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    "Action rejected: {}",
                    error
                );
                Some(error.error_code().to_string())
            }
        };

        let state_root = outcome.state.state_root();
        debug!(
            target: "runtime::session",
            draws = ?draws,
            root = %hex::encode(state_root),
            "Transition recorded"
        );

        let entry = ActionLogEntry {
            index: self.log.len(),
            nonce: outcome.state.nonce,
            action,
            draws,
            narration: outcome.narration,
            error_code,
            state_root,
        };
        self.state = outcome.state;
        self.log.push(entry)
    }

    /// Dispatches provider actions until it stops or `max_actions` is reached.
    ///
    /// Returns the number of actions dispatched.
    pub fn run(&mut self, provider: &mut dyn ActionProvider, max_actions: usize) -> usize {
        let mut dispatched = 0;
        while dispatched < max_actions {
            let Some(action) = provider.provide_action(&self.state, &self.config) else {
                break;
            };
            self.dispatch(action);
            dispatched += 1;
        }
        debug!(target: "runtime::session", dispatched, "Provider run finished");
        dispatched
    }

    pub fn into_parts(self) -> (EncounterState, ActionLog) {
        (self.state, self.log)
    }
}
