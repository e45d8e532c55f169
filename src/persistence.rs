//! Zone state save/load.
//!
//! Saved zones are authoritative: loading restores the exact list instead
//! of regenerating it.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::zone::Zone;

/// Serialized zone state: `{ "zones": [...] }`.
///
/// `zones` is optional on read so a record without it can be detected and
/// ignored rather than rejected.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zones: Option<Vec<Zone>>,
}

impl ZoneState {
    pub fn from_zones(zones: &[Zone]) -> Self {
        Self {
            zones: Some(zones.to_vec()),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Write zone state to a JSON file.
pub fn save_state(state: &ZoneState, path: &Path) -> Result<()> {
    fs::write(path, state.to_json()?)?;
    Ok(())
}

/// Read zone state from a JSON file.
pub fn load_state(path: &Path) -> Result<ZoneState> {
    ZoneState::from_json(&fs::read_to_string(path)?)
}
