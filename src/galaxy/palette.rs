//! Star colour palette.

use std::fmt;
use serde::{Serialize, Deserialize};

/// Packed colours in palette order.
///
/// Each entry is the 32-bit pixel value `0xAABBGGRR` (alpha in the top
/// byte, red in the bottom), matching the little-endian RGBA byte order
/// `[r, g, b, a]`.
pub const STAR_COLOURS: [u32; 8] = [
    0xFFFF_FFFF,
    0xFFD9_FFFF,
    0xFFA3_FFFF,
    0xFFFF_C8C8,
    0xFFFF_CB9D,
    0xFF9F_9FFF,
    0xFF41_5EFF,
    0xFF28_199D,
];

/// One of the eight star colours, indexed by the generator's colour draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum StarColour {
    /// White.
    White = 0,
    /// Pale yellow.
    PaleYellow = 1,
    /// Yellow.
    Yellow = 2,
    /// Pale blue.
    PaleBlue = 3,
    /// Blue.
    Blue = 4,
    /// Salmon.
    Salmon = 5,
    /// Orange.
    Orange = 6,
    /// Deep red.
    DeepRed = 7,
}

impl StarColour {
    /// All colours in palette order.
    pub const ALL: [StarColour; 8] = [
        StarColour::White,
        StarColour::PaleYellow,
        StarColour::Yellow,
        StarColour::PaleBlue,
        StarColour::Blue,
        StarColour::Salmon,
        StarColour::Orange,
        StarColour::DeepRed,
    ];

    /// Colour at a palette index. Indices wrap modulo 8.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Palette index.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Packed pixel value.
    #[inline]
    pub const fn packed(self) -> u32 {
        STAR_COLOURS[self as usize]
    }

    /// Colour as `[r, g, b, a]` bytes.
    #[inline]
    pub const fn rgba(self) -> [u8; 4] {
        self.packed().to_le_bytes()
    }

    /// `#rrggbb` string.
    pub fn hex(self) -> String {
        let [r, g, b, _] = self.rgba();
        format!("#{}", hex::encode([r, g, b]))
    }
}

impl fmt::Display for StarColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}
