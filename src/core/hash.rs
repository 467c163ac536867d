//! System Fingerprints
//!
//! Deterministic SHA-256 fingerprints of generated content, used to compare
//! output across runs, processes and builds without storing the content.

use sha2::{Sha256, Digest};

use crate::galaxy::system::{Planet, StarSystem};

/// Fingerprint output type (256 bits / 32 bytes)
pub type Fingerprint = [u8; 32];

/// Domain separator for single systems.
pub const SYSTEM_DOMAIN: &[u8] = b"STARFIELD_SYSTEM_V1";

/// Domain separator for regions.
pub const REGION_DOMAIN: &[u8] = b"STARFIELD_REGION_V1";

/// Deterministic hasher for generated content.
///
/// Wraps SHA-256 with little-endian helpers. Floats are hashed by bit
/// pattern, so any change in the last ulp changes the fingerprint.
/// Order of updates is critical for determinism.
pub struct SystemHasher {
    hasher: Sha256,
}

impl SystemHasher {
    /// Create a new hasher with domain separator.
    pub fn new(domain: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        Self { hasher }
    }

    /// Update with raw bytes.
    #[inline]
    pub fn update_bytes(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    /// Update with a u8 value.
    #[inline]
    pub fn update_u8(&mut self, value: u8) {
        self.hasher.update([value]);
    }

    /// Update with a u32 value (little-endian).
    #[inline]
    pub fn update_u32(&mut self, value: u32) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with an i64 value (little-endian).
    #[inline]
    pub fn update_i64(&mut self, value: i64) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with an f64 bit pattern (little-endian).
    #[inline]
    pub fn update_f64(&mut self, value: f64) {
        self.hasher.update(value.to_bits().to_le_bytes());
    }

    /// Update with a boolean.
    #[inline]
    pub fn update_bool(&mut self, value: bool) {
        self.update_u8(value as u8);
    }

    /// Update with every field of a planet, in declaration order.
    pub fn update_planet(&mut self, planet: &Planet) {
        self.update_f64(planet.distance_from_star);
        self.update_f64(planet.diameter);
        self.update_f64(planet.temperature);
        self.update_bool(planet.has_ring);
        self.update_u32(planet.moons.len() as u32);
        for moon in &planet.moons {
            self.update_f64(*moon);
        }
    }

    /// Finalize and return the fingerprint.
    pub fn finalize(self) -> Fingerprint {
        self.hasher.finalize().into()
    }
}

/// Fingerprint a single system.
///
/// Covers existence, star appearance and every planet. The coordinate is not
/// included, so cells one tiling period apart share a fingerprint.
pub fn hash_system(system: &StarSystem) -> Fingerprint {
    let mut hasher = SystemHasher::new(SYSTEM_DOMAIN);

    hasher.update_bool(system.exists());
    if let Some(star) = &system.star {
        hasher.update_f64(star.diameter);
        hasher.update_u8(star.colour.index() as u8);
        hasher.update_u32(system.planets.len() as u32);
        for planet in &system.planets {
            hasher.update_planet(planet);
        }
    }

    hasher.finalize()
}

/// Parse a hex-encoded fingerprint.
pub fn parse_fingerprint(text: &str) -> Option<Fingerprint> {
    let bytes = hex::decode(text.trim()).ok()?;
    bytes.try_into().ok()
}

// =============================================================================
// TESTS
// =============================================================================
