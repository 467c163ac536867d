//! Determinism Verification
//!
//! Confirms the generator still produces the universe it always has:
//! - Golden reference vectors for the RNG and for known cells
//! - Region replay with fingerprint comparison
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    VERIFICATION                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  reference.rs   - Hard-coded draws and systems              │
//! │  replay.rs      - Generate twice, compare region digests    │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod reference;
pub mod replay;

use thiserror::Error;

use crate::core::coord::Coord;
use crate::core::hash::Fingerprint;

// Re-export key types
pub use reference::{check_reference_vectors, ReferenceVector, REFERENCE_VECTORS};
pub use replay::{verify_region, VerificationResult};

/// Ways generated output can disagree with what was expected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    /// A raw RNG draw differs from its golden value.
    #[error("raw draw {index} mismatch: expected {expected}, got {got}")]
    RawDrawMismatch {
        /// Draw index after seeding.
        index: usize,
        /// Golden value.
        expected: u32,
        /// Value produced.
        got: u32,
    },

    /// A reference cell generated differently.
    #[error("reference mismatch at {coord}: {field}")]
    ReferenceMismatch {
        /// Cell.
        coord: Coord,
        /// First field that differed.
        field: &'static str,
    },

    /// Two generations of the same region disagreed.
    #[error("non-deterministic output: {} != {}", hex::encode(.first), hex::encode(.second))]
    NonDeterministic {
        /// First digest.
        first: Fingerprint,
        /// Second digest.
        second: Fingerprint,
    },

    /// Region digest differs from the expected one.
    #[error("digest mismatch: expected {}, computed {}", hex::encode(.expected), hex::encode(.computed))]
    DigestMismatch {
        /// Expected digest.
        expected: Fingerprint,
        /// Computed digest.
        computed: Fingerprint,
    },
}
