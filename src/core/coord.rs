//! Grid Coordinates
//!
//! Integer cell coordinates on the infinite star grid and the seed
//! derivation that ties each cell to its RNG stream.
//!
//! ## Tiling
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  seed = (x & 0xFFFF) << 16 | (y & 0xFFFF)                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  [XXXXXXXXXXXXXXXX][YYYYYYYYYYYYYYYY]                       │
//! │   └── low 16 of x ──┘└── low 16 of y ──┘                    │
//! │                                                             │
//! │  Upper bits are discarded, so the universe repeats every    │
//! │  65536 cells along each axis.                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use serde::{Serialize, Deserialize};

/// Number of cells after which the universe repeats along each axis.
pub const TILE_PERIOD: i64 = 1 << 16;

/// Mask selecting the bits of an axis that participate in seeding.
const AXIS_MASK: u32 = 0xFFFF;

/// A cell on the star grid.
///
/// Any `i64` is accepted. Negative values use their two's-complement
/// low bits, which keeps the tiling period intact across zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Column.
    pub x: i64,
    /// Row.
    pub y: i64,
}

impl Coord {
    /// Origin cell.
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    /// Create a coordinate.
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Seed for this cell's RNG stream.
    #[inline]
    pub const fn seed(&self) -> u32 {
        ((self.x as u32 & AXIS_MASK) << 16) | (self.y as u32 & AXIS_MASK)
    }

    /// Canonical representative of this cell inside `[0, TILE_PERIOD)²`.
    ///
    /// Two coordinates generate the same system iff their wrapped forms are equal.
    #[inline]
    pub const fn wrapped(&self) -> Self {
        Self {
            x: self.x.rem_euclid(TILE_PERIOD),
            y: self.y.rem_euclid(TILE_PERIOD),
        }
    }

    /// Coordinate shifted by `(dx, dy)` cells, wrapping on `i64` overflow.
    #[inline]
    pub const fn offset(&self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }
}

impl From<(i64, i64)> for Coord {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_layout() {
        assert_eq!(Coord::new(0, 0).seed(), 0);
        assert_eq!(Coord::new(3, 7).seed(), 0x0003_0007);
        assert_eq!(Coord::new(0xFFFF, 0).seed(), 0xFFFF_0000);
        assert_eq!(Coord::new(0, 0xFFFF).seed(), 0x0000_FFFF);
    }

    #[test]
    fn test_seed_truncates_high_bits() {
        assert_eq!(Coord::new(0x1_0003, 7).seed(), Coord::new(3, 7).seed());
        assert_eq!(Coord::new(3, 0x7_0007).seed(), Coord::new(3, 7).seed());
    }

    #[test]
    fn test_negative_coordinates() {
        // -1 is all ones in two's complement
        assert_eq!(Coord::new(-1, -1).seed(), 0xFFFF_FFFF);
        assert_eq!(Coord::new(-1, 0).seed(), Coord::new(TILE_PERIOD - 1, 0).seed());
    }

    #[test]
    fn test_wrapped() {
        assert_eq!(Coord::new(-1, 5).wrapped(), Coord::new(TILE_PERIOD - 1, 5));
        assert_eq!(Coord::new(TILE_PERIOD * 3 + 14, -TILE_PERIOD).wrapped(), Coord::new(14, 0));

        let c = Coord::new(-123_456_789, 987_654_321);
        assert_eq!(c.seed(), c.wrapped().seed());
    }

    #[test]
    fn test_offset() {
        assert_eq!(Coord::new(1, 2).offset(3, -4), Coord::new(4, -2));
        assert_eq!(Coord::new(i64::MAX, 0).offset(1, 0), Coord::new(i64::MIN, 0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord::new(-4, 9).to_string(), "(-4, 9)");
    }
}
