//! Region Scanning
//!
//! Walks a rectangular window of cells and collects what the generator
//! finds there. This is the per-frame sweep a viewer performs over its
//! visible sectors, minus any drawing.

use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::core::coord::Coord;
use crate::core::hash::{hash_system, Fingerprint, SystemHasher, REGION_DOMAIN};
use crate::error::{Result, StarfieldError};
use super::generate::generate;
use super::palette::StarColour;
use super::system::{Detail, StarSystem};

/// Rectangular window of cells starting at `origin`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    /// Top-left cell.
    pub origin: Coord,
    /// Columns.
    pub width: u32,
    /// Rows.
    pub height: u32,
}

impl Region {
    /// Create a region.
    pub const fn new(origin: Coord, width: u32, height: u32) -> Self {
        Self { origin, width, height }
    }

    /// Region whose origin is a fractional camera offset truncated toward zero.
    ///
    /// Non-finite offsets map to 0; out-of-range offsets saturate.
    pub fn from_camera(offset_x: f64, offset_y: f64, width: u32, height: u32) -> Self {
        let origin = Coord::new(offset_x as i64, offset_y as i64);
        Self::new(origin, width, height)
    }

    /// Number of cells covered.
    #[inline]
    pub const fn cell_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Check the region is non-empty and no larger than `max_cells`.
    ///
    /// Scanning, [`RegionStats::collect`] and [`digest`](Self::digest) never
    /// validate on their own; callers taking regions from outside call this
    /// first.
    pub fn validate(&self, max_cells: u64) -> Result<()> {
        let cells = self.cell_count();
        if cells == 0 {
            return Err(StarfieldError::EmptyRegion);
        }
        if cells > max_cells {
            return Err(StarfieldError::RegionTooLarge { cells, max: max_cells });
        }
        Ok(())
    }

    /// Cells in scan order: column by column, top to bottom within a column.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.width).flat_map(move |col| {
            (0..self.height).map(move |row| self.origin.offset(col as i64, row as i64))
        })
    }

    /// Whether `coord` lies inside this region (no wrapping).
    pub fn contains(&self, coord: Coord) -> bool {
        let dx = coord.x.wrapping_sub(self.origin.x);
        let dy = coord.y.wrapping_sub(self.origin.y);
        (0..self.width as i64).contains(&dx) && (0..self.height as i64).contains(&dy)
    }

    /// Fingerprint of everything generated inside this region.
    ///
    /// Covers the region geometry, the detail level and each cell's system
    /// fingerprint in scan order. Empty cells contribute too, so a star
    /// appearing where none was expected changes the digest.
    ///
    /// Does not validate; an empty region still has a (geometry-only) digest.
    pub fn digest(&self, detail: Detail) -> Fingerprint {
        let mut hasher = SystemHasher::new(REGION_DOMAIN);
        hasher.update_i64(self.origin.x);
        hasher.update_i64(self.origin.y);
        hasher.update_u32(self.width);
        hasher.update_u32(self.height);
        hasher.update_bool(detail.is_full());

        for cell in self.cells() {
            hasher.update_bytes(&hash_system(&generate(cell, detail)));
        }

        hasher.finalize()
    }
}

/// Systems found in `region`, paired with their cells, in scan order.
///
/// Empty cells are skipped. Does not validate: an empty region yields an
/// empty list, and size limits are the caller's concern (see
/// [`Region::validate`]).
pub fn scan_region(region: &Region, detail: Detail) -> Vec<(Coord, StarSystem)> {
    let found: Vec<(Coord, StarSystem)> = region
        .cells()
        .map(|cell| (cell, generate(cell, detail)))
        .filter(|(_, system)| system.exists())
        .collect();

    debug!(
        "Scanned {} ({}x{}, {:?}): {} stars",
        region.origin, region.width, region.height, detail, found.len()
    );

    found
}

/// Aggregate counts over a region.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionStats {
    /// Cells visited.
    pub cells: u64,
    /// Cells holding a star.
    pub stars: u64,
    /// Stars per palette colour, in palette order.
    pub colours: [u64; 8],
    /// Planets (full detail only).
    pub planets: u64,
    /// Moons (full detail only).
    pub moons: u64,
    /// Ringed planets (full detail only).
    pub ringed: u64,
}

impl RegionStats {
    /// Scan `region` and tally what it contains.
    ///
    /// Does not validate; an empty region yields zero counts.
    pub fn collect(region: &Region, detail: Detail) -> Self {
        let mut stats = Self::default();
        for cell in region.cells() {
            stats.record(&generate(cell, detail));
        }
        stats
    }

    /// Tally one generated cell.
    pub fn record(&mut self, system: &StarSystem) {
        self.cells += 1;
        let Some(star) = &system.star else {
            return;
        };

        self.stars += 1;
        self.colours[star.colour.index()] += 1;
        self.planets += system.planets.len() as u64;
        self.moons += system.moon_count() as u64;
        self.ringed += system.ringed_count() as u64;
    }

    /// Fraction of cells holding a star.
    pub fn density(&self) -> f64 {
        if self.cells == 0 {
            return 0.0;
        }
        self.stars as f64 / self.cells as f64
    }

    /// Count for one colour.
    pub fn colour_count(&self, colour: StarColour) -> u64 {
        self.colours[colour.index()]
    }
}

// =============================================================================
// TESTS
// =============================================================================
