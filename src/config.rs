//! Scan configuration.

use std::path::Path;
use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::galaxy::system::Detail;

/// Default cap on cells per region request (4096 x 4096).
pub const DEFAULT_MAX_CELLS: u64 = 1 << 24;

/// Limits and defaults applied to region requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Largest region, in cells, a single request may cover.
    pub max_cells: u64,
    /// Detail level used when a request does not ask for one.
    pub default_detail: Detail,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_cells: DEFAULT_MAX_CELLS,
            default_detail: Detail::Summary,
        }
    }
}

impl ScanConfig {
    /// Create config from environment variables.
    ///
    /// Reads `STARFIELD_MAX_CELLS` and `STARFIELD_FULL_DETAIL`. Missing or
    /// unparseable values keep their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_cells: std::env::var("STARFIELD_MAX_CELLS")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.max_cells),
            default_detail: std::env::var("STARFIELD_FULL_DETAIL")
                .map(|v| Detail::from_flag(v == "true" || v == "1"))
                .unwrap_or(defaults.default_detail),
        }
    }

    /// Load config from a JSON file. Absent keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Detail for a request: `Full` if asked for, else the configured default.
    pub fn detail(&self, full: bool) -> Detail {
        if full { Detail::Full } else { self.default_detail }
    }
}
