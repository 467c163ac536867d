//! Star system data model.
//!
//! Plain owned values, created fresh per query and discarded by the caller.

use serde::{Serialize, Deserialize};

use super::palette::StarColour;

/// How much of a system to generate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Detail {
    /// Existence, diameter and colour only.
    #[default]
    Summary,
    /// Everything, including planets and moons.
    Full,
}

impl Detail {
    /// Detail level for a "full detail" flag.
    #[inline]
    pub const fn from_flag(full: bool) -> Self {
        if full { Detail::Full } else { Detail::Summary }
    }

    /// Whether planets are generated.
    #[inline]
    pub const fn is_full(self) -> bool {
        matches!(self, Detail::Full)
    }
}

/// A planet orbiting a star.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    /// Orbital distance. Strictly increasing across a system's planets.
    pub distance_from_star: f64,
    /// Planet diameter.
    pub diameter: f64,
    /// Surface temperature.
    pub temperature: f64,
    /// Whether the planet has a ring.
    pub has_ring: bool,
    /// Moon sizes in generation order.
    pub moons: Vec<f64>,
}

impl Planet {
    /// Number of moons.
    #[inline]
    pub fn moon_count(&self) -> usize {
        self.moons.len()
    }
}

/// Appearance of an existing star.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Star {
    /// Star diameter.
    pub diameter: f64,
    /// Palette colour.
    pub colour: StarColour,
}

/// Result of generating one grid cell.
///
/// An empty cell carries nothing else; `star` is `None` and `planets` is empty.
/// `planets` is only populated when the cell was generated with [`Detail::Full`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StarSystem {
    /// The star, if the cell has one.
    pub star: Option<Star>,
    /// Planets in orbital order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub planets: Vec<Planet>,
}

impl StarSystem {
    /// Cell with no star.
    pub const EMPTY: StarSystem = StarSystem { star: None, planets: Vec::new() };

    /// Whether a star exists in this cell.
    #[inline]
    pub fn exists(&self) -> bool {
        self.star.is_some()
    }

    /// Star diameter, if the star exists.
    #[inline]
    pub fn diameter(&self) -> Option<f64> {
        self.star.as_ref().map(|s| s.diameter)
    }

    /// Star colour, if the star exists.
    #[inline]
    pub fn colour(&self) -> Option<StarColour> {
        self.star.as_ref().map(|s| s.colour)
    }

    /// Total moons across all planets.
    pub fn moon_count(&self) -> usize {
        self.planets.iter().map(Planet::moon_count).sum()
    }

    /// Number of ringed planets.
    pub fn ringed_count(&self) -> usize {
        self.planets.iter().filter(|p| p.has_ring).count()
    }

    /// Same system with planets dropped, as a summary query would return it.
    pub fn summary(&self) -> StarSystem {
        StarSystem { star: self.star.clone(), planets: Vec::new() }
    }
}
