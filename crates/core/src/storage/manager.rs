use std::path::Path;

use crate::errors::CoreError;
use crate::models::state::StoreState;

use super::format;

/// High-level storage operations: save/load the store state to/from
/// raw bytes or files.
pub struct StorageManager;

impl StorageManager {
    /// Serialize the state to raw bytes (portable, platform-independent).
    ///
    /// Flow: StoreState → versioned JSON envelope bytes
    pub fn save_to_bytes(state: &StoreState) -> Result<Vec<u8>, CoreError> {
        format::write_envelope(state)
    }

    /// Deserialize the state from raw bytes.
    pub fn load_from_bytes(data: &[u8]) -> Result<StoreState, CoreError> {
        format::read_envelope(data)
    }

    /// Save the state to a file on disk.
    ///
    /// The write is atomic: bytes go to a sibling temp file which is
    /// then renamed over the target. A crash mid-write leaves the old
    /// file intact, and sequential saves can never be observed out of
    /// order or interleaved.
    pub fn save_to_file(state: &StoreState, path: &Path) -> Result<(), CoreError> {
        let bytes = Self::save_to_bytes(state)?;

        let tmp = path.with_extension("tmp");
        std::fs::write(&tmp, &bytes)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Load the state from a file on disk.
    pub fn load_from_file(path: &Path) -> Result<StoreState, CoreError> {
        let bytes = std::fs::read(path)?;
        Self::load_from_bytes(&bytes)
    }
}
