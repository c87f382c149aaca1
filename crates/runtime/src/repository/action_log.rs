//! Action log entry type for replay verification.
//!
//! Every dispatched action produces one [`ActionLogEntry`], successful or not.
//! An entry carries the draws the action consumed and the state root after it,
//! which is enough to re-run the session and prove it byte-identical.

use serde::{Deserialize, Serialize};

use encounter_core::Action;

use crate::api::Result;

/// One dispatched action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionLogEntry {
    /// Position in the log.
    pub index: usize,

    /// State nonce after the action; unchanged when the action failed.
    pub nonce: u64,

    pub action: Action,

    /// Draws consumed by this action, in order.
    pub draws: Vec<f64>,

    /// Narration lines appended by this action.
    pub narration: Vec<String>,

    /// Stable error code when the action was rejected.
    pub error_code: Option<String>,

    /// SHA-256 root of the resulting snapshot.
    pub state_root: [u8; 32],
}

impl ActionLogEntry {
    pub fn succeeded(&self) -> bool {
        self.error_code.is_none()
    }

    pub fn root_hex(&self) -> String {
        hex::encode(self.state_root)
    }
}

/// Append-only log of one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionLog {
    entries: Vec<ActionLogEntry>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, assigning its index.
    pub fn push(&mut self, mut entry: ActionLogEntry) -> &ActionLogEntry {
        entry.index = self.entries.len();
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[ActionLogEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&ActionLogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every action in dispatch order.
    pub fn actions(&self) -> Vec<Action> {
        self.entries.iter().map(|entry| entry.action).collect()
    }

    /// Every draw in consumption order.
    pub fn draws(&self) -> Vec<f64> {
        self.entries
            .iter()
            .flat_map(|entry| entry.draws.iter().copied())
            .collect()
    }

    pub fn failures(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.succeeded()).count()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(action: Action, draws: Vec<f64>, error_code: Option<&str>) -> ActionLogEntry {
        ActionLogEntry {
            index: 99,
            nonce: 0,
            action,
            draws,
            narration: Vec::new(),
            error_code: error_code.map(str::to_string),
            state_root: [7; 32],
        }
    }

    #[test]
    fn push_assigns_sequential_indices() {
        let mut log = ActionLog::new();
        assert_eq!(log.push(entry(Action::Battle, vec![0.1, 0.2], None)).index, 0);
        assert_eq!(
            log.push(entry(Action::Save, Vec::new(), Some("ACTION_NOT_IMPLEMENTED")))
                .index,
            1
        );
        assert_eq!(log.len(), 2);
        assert_eq!(log.failures(), 1);
        assert_eq!(log.draws(), vec![0.1, 0.2]);
        assert_eq!(log.actions(), vec![Action::Battle, Action::Save]);
    }

    #[test]
    fn json_round_trip_keeps_roots() {
        let mut log = ActionLog::new();
        log.push(entry(Action::attack(1), vec![0.5], None));

        let json = log.to_json().expect("encode");
        let decoded = ActionLog::from_json(&json).expect("decode");

        assert_eq!(decoded, log);
        assert_eq!(decoded.entries()[0].root_hex(), "07".repeat(32));
    }

    #[test]
    fn json_keeps_draws_bit_exact() {
        let draws = vec![0.9714033541768399, 0.37579922349449957, 0.1 + 0.2, f64::EPSILON];
        let mut log = ActionLog::new();
        log.push(entry(Action::Battle, draws.clone(), None));

        let decoded = ActionLog::from_json(&log.to_json().expect("encode")).expect("decode");

        let bits = |values: &[f64]| values.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&decoded.entries()[0].draws), bits(&draws));
    }
}
