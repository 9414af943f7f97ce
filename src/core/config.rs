use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::monitor::MonitorType;

/// Board configuration discovered before the monitor is attached
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NicConfig {
    /// Board identifier used as the log prefix
    #[serde(default)]
    pub board: String,
    /// Hardware monitor fitted to the board
    #[serde(default)]
    pub mon_type: MonitorType,
}

impl NicConfig {
    pub fn new<S: Into<String>>(board: S, mon_type: MonitorType) -> Self {
        Self {
            board: board.into(),
            mon_type,
        }
    }

    /// Build from the raw monitor type value reported by the device
    pub fn from_raw<S: Into<String>>(board: S, raw_mon_type: u32) -> Result<Self> {
        let mon_type = MonitorType::from_raw(raw_mon_type)
            .with_context(|| format!("Unknown monitor type value: {}", raw_mon_type))?;
        Ok(Self::new(board, mon_type))
    }

    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data).with_context(|| "Failed to parse board configuration")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read board configuration: {:?}", path))?;

        Self::from_json(&data)
            .with_context(|| format!("Invalid board configuration: {:?}", path))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).with_context(|| "Failed to serialize board configuration")
    }
}
