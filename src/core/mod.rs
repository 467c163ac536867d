//! Core deterministic primitives.
//!
//! Everything here is pure integer arithmetic or hashing and behaves
//! identically on every platform.

pub mod coord;
pub mod rng;
pub mod hash;

// Re-export core types
pub use coord::{Coord, TILE_PERIOD};
pub use rng::CoordinateRng;
pub use hash::{hash_system, Fingerprint};
