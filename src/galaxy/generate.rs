//! System Generation
//!
//! Turns a cell's RNG stream into a [`StarSystem`].
//!
//! ## Draw Order
//!
//! Every value comes from the same sequential stream, so the order below is
//! part of the output format. Reordering any two draws produces a different
//! (self-consistent) universe.
//!
//! ```text
//! ┌──────┬────────────────────────────┬────────────────────────┐
//! │ Step │ Draw                       │ Use                    │
//! ├──────┼────────────────────────────┼────────────────────────┤
//! │  1   │ int [0, 20)                │ star iff == 1          │
//! │  2   │ f64 [10, 40)               │ star diameter          │
//! │  3   │ int [0, 8)                 │ palette index          │
//! │  --  │ stop unless Detail::Full   │                        │
//! │  4   │ f64 [60, 200)              │ first orbit distance   │
//! │  5   │ int [0, 10)                │ planet count           │
//! │      │ per planet:                │                        │
//! │  6a  │ f64 [20, 200)              │ gap to next orbit      │
//! │  6b  │ f64 [4, 20)                │ planet diameter        │
//! │  6c  │ f64 [-200, 300)            │ temperature            │
//! │  6d  │ int [0, 10)                │ ring iff == 1          │
//! │  6e  │ int [-5, 5)                │ moons = max(roll, 0)   │
//! │  6f  │ f64 [1, 5) x moons         │ moon sizes             │
//! └──────┴────────────────────────────┴────────────────────────┘
//! ```

use crate::core::coord::Coord;
use crate::core::rng::CoordinateRng;
use super::palette::StarColour;
use super::system::{Detail, Planet, Star, StarSystem};

/// One star per this many cells on average.
pub const STAR_ODDS: i32 = 20;

/// Existence roll value that places a star.
pub const STAR_ROLL: i32 = 1;

/// Star diameter draw bounds.
pub const STAR_DIAMETER: (f64, f64) = (10.0, 40.0);

/// First orbit distance draw bounds.
pub const FIRST_ORBIT: (f64, f64) = (60.0, 200.0);

/// Gap between consecutive orbits.
pub const ORBIT_GAP: (f64, f64) = (20.0, 200.0);

/// Planet count draw bounds (exclusive max).
pub const PLANET_COUNT: (i32, i32) = (0, 10);

/// Planet diameter draw bounds.
pub const PLANET_DIAMETER: (f64, f64) = (4.0, 20.0);

/// Planet temperature draw bounds.
pub const PLANET_TEMPERATURE: (f64, f64) = (-200.0, 300.0);

/// One ringed planet per this many on average.
pub const RING_ODDS: i32 = 10;

/// Ring roll value that gives a planet a ring.
pub const RING_ROLL: i32 = 1;

/// Moon roll bounds. Non-positive rolls mean no moons.
pub const MOON_ROLL: (i32, i32) = (-5, 5);

/// Moon size draw bounds.
pub const MOON_SIZE: (f64, f64) = (1.0, 5.0);

/// Generate the system at `(x, y)`.
///
/// Convenience form taking the full-detail flag as a bool.
pub fn generate_system(x: i64, y: i64, full_detail: bool) -> StarSystem {
    generate(Coord::new(x, y), Detail::from_flag(full_detail))
}

/// Generate the system at `coord`.
///
/// Seeds a fresh [`CoordinateRng`] from the coordinate, so the result is a
/// pure function of `(coord.wrapped(), detail)`.
pub fn generate(coord: Coord, detail: Detail) -> StarSystem {
    let mut rng = CoordinateRng::from_coord(coord);
    generate_from_rng(&mut rng, detail)
}

/// Run the draw protocol against an already seeded stream.
///
/// Leaves `rng` positioned just after the last draw taken.
pub fn generate_from_rng(rng: &mut CoordinateRng, detail: Detail) -> StarSystem {
    if rng.next_int(0, STAR_ODDS) != STAR_ROLL {
        return StarSystem::EMPTY;
    }

    let diameter = rng.next_f64(STAR_DIAMETER.0, STAR_DIAMETER.1);
    let colour = StarColour::from_index(rng.next_int(0, StarColour::ALL.len() as i32) as usize);
    let star = Some(Star { diameter, colour });

    if !detail.is_full() {
        return StarSystem { star, planets: Vec::new() };
    }

    let mut distance = rng.next_f64(FIRST_ORBIT.0, FIRST_ORBIT.1);
    let planet_count = rng.next_int(PLANET_COUNT.0, PLANET_COUNT.1);

    let mut planets = Vec::with_capacity(planet_count as usize);
    for _ in 0..planet_count {
        let distance_from_star = distance;
        distance += rng.next_f64(ORBIT_GAP.0, ORBIT_GAP.1);

        let diameter = rng.next_f64(PLANET_DIAMETER.0, PLANET_DIAMETER.1);
        let temperature = rng.next_f64(PLANET_TEMPERATURE.0, PLANET_TEMPERATURE.1);
        let has_ring = rng.next_int(0, RING_ODDS) == RING_ROLL;

        let moon_count = rng.next_int(MOON_ROLL.0, MOON_ROLL.1).max(0);
        let moons = (0..moon_count)
            .map(|_| rng.next_f64(MOON_SIZE.0, MOON_SIZE.1))
            .collect();

        planets.push(Planet {
            distance_from_star,
            diameter,
            temperature,
            has_ring,
            moons,
        });
    }

    StarSystem { star, planets }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::coord::TILE_PERIOD;
    use proptest::prelude::*;

    fn within(value: f64, bounds: (f64, f64)) -> bool {
        let (lo, hi) = CoordinateRng::f64_envelope(bounds.0, bounds.1);
        value >= lo && value <= hi
    }

    #[test]
    fn test_origin_is_empty() {
        // First existence roll for seed 0 is 0
        let system = generate_system(0, 0, true);
        assert!(!system.exists());
        assert!(system.planets.is_empty());
    }

    #[test]
    fn test_roll_targets_within_odds() {
        assert!((0..STAR_ODDS).contains(&STAR_ROLL));
        assert!((0..RING_ODDS).contains(&RING_ROLL));
    }

    #[test]
    fn test_empty_cell_takes_one_draw() {
        let mut rng = CoordinateRng::from_xy(0, 0);
        generate_from_rng(&mut rng, Detail::Full);
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn test_summary_takes_three_draws() {
        let mut rng = CoordinateRng::from_xy(25, 0);
        let system = generate_from_rng(&mut rng, Detail::Summary);
        assert!(system.exists());
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_full_draw_count() {
        let mut rng = CoordinateRng::from_xy(14, 0);
        let system = generate_from_rng(&mut rng, Detail::Full);

        // 3 star draws, 2 system draws, 5 per planet, 1 per moon
        let expected = 3 + 2 + 5 * system.planets.len() + system.moon_count();
        assert_eq!(rng.draws() as usize, expected);
    }

    #[test]
    fn test_reference_system_14_0() {
        let system = generate_system(14, 0, true);

        let star = system.star.as_ref().unwrap();
        assert_eq!(star.diameter, 44.82331432626737);
        assert_eq!(star.colour, StarColour::PaleBlue);

        assert_eq!(system.planets.len(), 4);
        let first = &system.planets[0];
        assert_eq!(first.distance_from_star, 188.0213093608717);
        assert_eq!(first.diameter, 20.301562979957815);
        assert_eq!(first.temperature, 434.9006475111938);
        assert!(!first.has_ring);
        assert_eq!(first.moons, vec![1.2029246223172754, 6.698871190519478]);

        let distances: Vec<f64> = system.planets.iter().map(|p| p.distance_from_star).collect();
        assert_eq!(
            distances,
            vec![188.0213093608717, 453.9117320226094, 509.3060383150847, 602.7174013772594]
        );
        assert_eq!(system.moon_count(), 14);
    }

    #[test]
    fn test_reference_system_39_1_has_ring() {
        let system = generate_system(39, 1, true);

        assert_eq!(system.diameter(), Some(19.51370267640506));
        assert_eq!(system.colour(), Some(StarColour::DeepRed));
        assert_eq!(system.planets.len(), 6);
        assert_eq!(system.ringed_count(), 1);
        assert!(system.planets[2].has_ring);
        assert_eq!(system.planets[1].moons, vec![8.131947286022802]);
    }

    #[test]
    fn test_reference_system_without_planets() {
        let system = generate_system(25, 0, true);
        assert_eq!(system.diameter(), Some(41.490140571952864));
        assert_eq!(system.colour(), Some(StarColour::PaleYellow));
        assert!(system.planets.is_empty());

        let system = generate_system(0, 2, true);
        assert_eq!(system.diameter(), Some(39.267383161591084));
        assert_eq!(system.colour(), Some(StarColour::Salmon));
        assert!(system.planets.is_empty());
    }

    #[test]
    fn test_reference_region_totals() {
        let mut stars = 0;
        let mut planets = 0;
        let mut moons = 0;
        let mut rings = 0;
        for y in 0..40 {
            for x in 0..40 {
                let system = generate_system(x, y, true);
                if system.exists() {
                    stars += 1;
                    planets += system.planets.len();
                    moons += system.moon_count();
                    rings += system.ringed_count();
                }
            }
        }
        assert_eq!(stars, 82);
        assert_eq!(planets, 368);
        assert_eq!(moons, 400);
        assert_eq!(rings, 41);
    }

    #[test]
    fn test_existence_density() {
        let count = (0..256)
            .flat_map(|y| (0..256).map(move |x| (x, y)))
            .filter(|&(x, y)| generate_system(x, y, false).exists())
            .count();

        assert_eq!(count, 3229);
        let density = count as f64 / 65536.0;
        assert!((density - 0.05).abs() < 0.005);
    }

    #[test]
    fn test_sampled_density() {
        use rand::{Rng, SeedableRng};
        use rand::rngs::StdRng;

        let mut sampler = StdRng::seed_from_u64(42);
        let samples = 40_000;
        let count = (0..samples)
            .filter(|_| {
                let x = sampler.gen_range(-1_000_000i64..1_000_000);
                let y = sampler.gen_range(-1_000_000i64..1_000_000);
                generate_system(x, y, false).exists()
            })
            .count();

        let density = count as f64 / samples as f64;
        assert!((density - 0.05).abs() < 0.01, "density {}", density);
    }

    #[test]
    fn test_tiling_negative_and_large() {
        let base = generate_system(14, 0, true);
        assert_eq!(generate_system(14 - TILE_PERIOD, 0, true), base);
        assert_eq!(generate_system(14 + 7 * TILE_PERIOD, -3 * TILE_PERIOD, true), base);
    }

    proptest! {
        #[test]
        fn prop_deterministic(x in any::<i64>(), y in any::<i64>(), full in any::<bool>()) {
            prop_assert_eq!(generate_system(x, y, full), generate_system(x, y, full));
        }

        #[test]
        fn prop_tiling_period(
            x in -1_000_000i64..1_000_000,
            y in -1_000_000i64..1_000_000,
            k in -1000i64..1000,
            m in -1000i64..1000,
        ) {
            let base = generate_system(x, y, true);
            let shifted = generate_system(x + TILE_PERIOD * k, y + TILE_PERIOD * m, true);
            prop_assert_eq!(base, shifted);
        }

        #[test]
        fn prop_full_detail_is_superset(x in any::<i64>(), y in any::<i64>()) {
            let summary = generate_system(x, y, false);
            let full = generate_system(x, y, true);
            prop_assert_eq!(&summary.star, &full.star);
            prop_assert!(summary.planets.is_empty());
            prop_assert_eq!(full.summary(), summary);
        }

        #[test]
        fn prop_values_within_envelope(x in 0i64..TILE_PERIOD, y in 0i64..TILE_PERIOD) {
            let system = generate_system(x, y, true);
            if let Some(star) = &system.star {
                prop_assert!(within(star.diameter, STAR_DIAMETER));
            } else {
                prop_assert!(system.planets.is_empty());
            }

            if let Some(first) = system.planets.first() {
                prop_assert!(within(first.distance_from_star, FIRST_ORBIT));
            }
            prop_assert!(system.planets.len() < PLANET_COUNT.1 as usize);
            for planet in &system.planets {
                prop_assert!(within(planet.diameter, PLANET_DIAMETER));
                prop_assert!(within(planet.temperature, PLANET_TEMPERATURE));
                prop_assert!(planet.moons.len() < MOON_ROLL.1 as usize);
                for moon in &planet.moons {
                    prop_assert!(within(*moon, MOON_SIZE));
                }
            }
        }

        #[test]
        fn prop_orbits_strictly_increase(x in 0i64..TILE_PERIOD, y in 0i64..TILE_PERIOD) {
            let system = generate_system(x, y, true);
            for pair in system.planets.windows(2) {
                let gap = pair[1].distance_from_star - pair[0].distance_from_star;
                prop_assert!(gap >= ORBIT_GAP.0 - 1e-9);
            }
        }
    }
}
