//! Coordinate-Seeded Random Number Generator
//!
//! A counter-based generator whose whole state is one `u32`.
//! Each step adds a fixed increment to the counter and scrambles it through
//! two 32x32→64 multiply/xor-fold rounds. Given the same seed it produces the
//! same sequence on every platform, forever.

use serde::{Serialize, Deserialize};

use crate::error::{Result, StarfieldError};
use super::coord::Coord;

/// Counter increment applied before every draw.
const STEP: u32 = 0xE120_FC15;

/// First mixing multiplier.
const MIX_A: u64 = 0x4A39_B70D;

/// Second mixing multiplier.
const MIX_B: u64 = 0x12FA_D5C9;

/// Divisor used to scale raw draws into doubles (2^31 - 1).
///
/// Raw draws span the full `u32` range, so the scaled value can reach just
/// over twice the requested span. Kept as-is for output compatibility.
pub const F64_DIVISOR: f64 = 0x7FFF_FFFF as f64;

/// Largest value of `raw / F64_DIVISOR`, reached when the raw draw is `u32::MAX`.
pub const MAX_DRAW_RATIO: f64 = u32::MAX as f64 / F64_DIVISOR;

/// Deterministic PRNG seeded from a grid coordinate.
///
/// # Determinism Guarantee
///
/// The state only ever advances by [`STEP`]; the mixed output is never fed
/// back. Draw `n` after seeding is therefore a pure function of
/// `seed + n * STEP`.
///
/// # Example
///
/// ```
/// use starfield::core::rng::CoordinateRng;
///
/// let mut rng = CoordinateRng::new(0);
/// assert_eq!(rng.next_u32(), 321050320); // Always the same!
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinateRng {
    seed: u32,
    state: u32,
}

impl Default for CoordinateRng {
    fn default() -> Self {
        Self::new(0)
    }
}

impl CoordinateRng {
    /// Create a new RNG from a raw 32-bit seed.
    pub const fn new(seed: u32) -> Self {
        Self { seed, state: seed }
    }

    /// Create the RNG stream owned by a grid cell.
    pub const fn from_coord(coord: Coord) -> Self {
        Self::new(coord.seed())
    }

    /// Shorthand for `from_coord(Coord::new(x, y))`.
    pub const fn from_xy(x: i64, y: i64) -> Self {
        Self::from_coord(Coord::new(x, y))
    }

    /// Generate the next raw 32-bit value.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(STEP);

        // Full 64-bit products; truncation only after the fold
        let tmp = self.state as u64 * MIX_A;
        let m1 = ((tmp >> 32) ^ tmp) as u32;
        let tmp = m1 as u64 * MIX_B;
        ((tmp >> 32) ^ tmp) as u32
    }

    /// Generate an integer in `[min, max)`.
    ///
    /// Plain modulo reduction of the raw draw, offset by `min`.
    /// An empty range (`max <= min`) returns `min` without consuming a draw.
    #[inline]
    pub fn next_int(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let range = max.wrapping_sub(min) as u32;
        (self.next_u32() % range).wrapping_add(min as u32) as i32
    }

    /// Checked variant of [`next_int`](Self::next_int).
    pub fn try_next_int(&mut self, min: i32, max: i32) -> Result<i32> {
        if max <= min {
            return Err(StarfieldError::InvalidRange { min, max });
        }
        Ok(self.next_int(min, max))
    }

    /// Generate a double scaled from `min` by `raw / (2^31 - 1)` spans.
    ///
    /// Nominally `[min, max)`, but see [`f64_envelope`](Self::f64_envelope)
    /// for the bounds actually reachable.
    #[inline]
    pub fn next_f64(&mut self, min: f64, max: f64) -> f64 {
        scale(self.next_u32(), min, max)
    }

    /// Closed interval containing every value `next_f64(min, max)` can return.
    pub fn f64_envelope(min: f64, max: f64) -> (f64, f64) {
        (scale(0, min, max), scale(u32::MAX, min, max))
    }

    /// Seed this generator was created with.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Get current state (for checkpointing/debugging).
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Restore from saved state.
    pub fn set_state(&mut self, state: u32) {
        self.state = state;
    }

    /// Number of draws taken since seeding.
    ///
    /// `STEP` is odd, so the counter visits every `u32` before repeating and
    /// the draw count is recoverable modulo 2^32.
    pub fn draws(&self) -> u32 {
        self.state.wrapping_sub(self.seed).wrapping_mul(STEP_INVERSE)
    }
}

/// Multiplicative inverse of [`STEP`] modulo 2^32.
const STEP_INVERSE: u32 = mod_inverse(STEP);

/// Newton iteration for the inverse of an odd number modulo 2^32.
const fn mod_inverse(a: u32) -> u32 {
    let mut x = a;
    let mut i = 0;
    while i < 5 {
        x = x.wrapping_mul(2u32.wrapping_sub(a.wrapping_mul(x)));
        i += 1;
    }
    x
}

#[inline]
fn scale(raw: u32, min: f64, max: f64) -> f64 {
    (raw as f64 / F64_DIVISOR) * (max - min) + min
}

// =============================================================================
// TESTS
// =============================================================================
