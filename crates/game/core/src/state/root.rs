//! State root computation for replay verification.

use super::EncounterState;

impl EncounterState {
    /// SHA-256 commitment to the full snapshot, narration log included.
    ///
    /// - Uses bincode for deterministic serialization
    /// - Two replays that consume the same draws for the same actions produce
    ///   identical roots
    pub fn state_root(&self) -> [u8; 32] {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        // bincode cannot fail for this tree of plain values
        if let Ok(bytes) = bincode::serialize(self) {
            hasher.update(&bytes);
        }
        hasher.finalize().into()
    }
}
