//! Error types.
//!
//! Generation itself never fails. Errors only arise at the edges: checked
//! RNG draws, region requests and configuration loading.

use thiserror::Error;

/// Errors surfaced by the library.
#[derive(Debug, Error)]
pub enum StarfieldError {
    /// Bounded draw requested over an empty range.
    #[error("invalid range: max ({max}) must be greater than min ({min})")]
    InvalidRange {
        /// Inclusive lower bound.
        min: i32,
        /// Exclusive upper bound.
        max: i32,
    },

    /// Region has zero width or height.
    #[error("region is empty")]
    EmptyRegion,

    /// Region covers more cells than the configured limit.
    #[error("region of {cells} cells exceeds limit of {max}")]
    RegionTooLarge {
        /// Cells requested.
        cells: u64,
        /// Configured maximum.
        max: u64,
    },

    /// Configuration file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, StarfieldError>;
