//! Galaxy Module
//!
//! Procedural content, 100% deterministic.
//!
//! ## Module Structure
//!
//! - `palette`: The eight star colours
//! - `system`: Star system data model
//! - `generate`: The ordered draw protocol turning a cell into a system
//! - `region`: Scanning, statistics and digests over windows of cells

pub mod palette;
pub mod system;
pub mod generate;
pub mod region;

// Re-export key types
pub use palette::{StarColour, STAR_COLOURS};
pub use system::{Detail, Planet, Star, StarSystem};
pub use generate::{generate, generate_system};
pub use region::{scan_region, Region, RegionStats};
