use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::state::StoreState;

/// Format tag identifying a Stock Mentor store file.
pub const FORMAT_NAME: &str = "stock-mentor";

/// Current store file format version.
pub const CURRENT_VERSION: u16 = 1;

/// On-disk envelope around the persisted state.
///
/// Layout (JSON):
/// ```text
/// { "format": "stock-mentor", "version": 1, "state": { ... } }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope {
    pub format: String,
    pub version: u16,
    pub state: StoreState,
}

/// Serialize the state into a versioned envelope.
pub fn write_envelope(state: &StoreState) -> Result<Vec<u8>, CoreError> {
    let envelope = Envelope {
        format: FORMAT_NAME.to_string(),
        version: CURRENT_VERSION,
        state: state.clone(),
    };
    serde_json::to_vec_pretty(&envelope)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize store state: {e}")))
}

/// Parse an envelope from raw file bytes, validating the format tag
/// and version before handing the state back.
pub fn read_envelope(data: &[u8]) -> Result<StoreState, CoreError> {
    let envelope: Envelope = serde_json::from_slice(data)
        .map_err(|e| CoreError::InvalidFileFormat(format!("Not a valid store file: {e}")))?;

    if envelope.format != FORMAT_NAME {
        return Err(CoreError::InvalidFileFormat(format!(
            "Unexpected format tag '{}' — not a {FORMAT_NAME} file",
            envelope.format
        )));
    }

    if envelope.version == 0 || envelope.version > CURRENT_VERSION {
        return Err(CoreError::UnsupportedVersion(envelope.version));
    }

    Ok(envelope.state)
}
