//! Region Replay
//!
//! Verify a region by generating it twice from scratch and comparing
//! fingerprints, optionally against a digest recorded earlier.

use tracing::{debug, warn};

use crate::core::hash::Fingerprint;
use crate::galaxy::region::Region;
use crate::galaxy::system::Detail;
use super::VerificationError;

/// Verification result.
#[derive(Debug)]
pub struct VerificationResult {
    /// Did verification pass?
    pub valid: bool,

    /// Digest from the first generation.
    pub computed: Fingerprint,

    /// Digest the caller expected, if any.
    pub expected: Option<Fingerprint>,

    /// Detailed error if verification failed.
    pub error: Option<VerificationError>,
}

/// Verify `region` by replay.
///
/// Generates the region twice, each time seeding every cell afresh, and
/// requires both digests to agree. When `expected` is given the digest
/// must also match it.
pub fn verify_region(
    region: &Region,
    detail: Detail,
    expected: Option<Fingerprint>,
) -> VerificationResult {
    let first = region.digest(detail);
    let second = region.digest(detail);

    let error = if first != second {
        Some(VerificationError::NonDeterministic { first, second })
    } else {
        match expected {
            Some(expected) if expected != first => {
                Some(VerificationError::DigestMismatch { expected, computed: first })
            }
            _ => None,
        }
    };

    match &error {
        None => debug!("Region {} verified: {}", region.origin, hex::encode(first)),
        Some(e) => warn!("Region {} failed verification: {}", region.origin, e),
    }

    VerificationResult {
        valid: error.is_none(),
        computed: first,
        expected,
        error,
    }
}
