//! # Starfield
//!
//! Deterministic, stateless star-system generator for an infinite 2D grid.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        STARFIELD                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                 │
//! │  ├── coord.rs    - Grid coordinates and seed derivation     │
//! │  ├── rng.rs      - Coordinate-seeded counter PRNG           │
//! │  └── hash.rs     - Fingerprints for verification            │
//! │                                                             │
//! │  galaxy/         - Procedural content (deterministic)       │
//! │  ├── palette.rs  - Star colours                             │
//! │  ├── system.rs   - Star, planet and system records          │
//! │  ├── generate.rs - Ordered draw protocol                    │
//! │  └── region.rs   - Region scans, stats and digests          │
//! │                                                             │
//! │  verify/         - Reference vectors and replay checks      │
//! │  config.rs       - Scan limits and defaults                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! Generation keeps no state between calls. Each query seeds its own
//! [`CoordinateRng`] from the low 16 bits of each axis and draws from it in a
//! fixed order, so the same coordinate yields bit-identical output in any
//! process, on any platform, at any time. The universe repeats every
//! [`TILE_PERIOD`] cells along each axis.
//!
//! ```
//! use starfield::generate_system;
//!
//! let a = generate_system(14, 0, true);
//! let b = generate_system(14 + 65536, 0, true);
//! assert!(a.exists());
//! assert_eq!(a, b);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod galaxy;
pub mod verify;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use core::coord::{Coord, TILE_PERIOD};
pub use core::rng::CoordinateRng;
pub use galaxy::{generate, generate_system, Detail, Planet, Region, RegionStats, Star, StarColour, StarSystem};
pub use config::ScanConfig;
pub use error::{Result, StarfieldError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
