#![expect(
    clippy::float_arithmetic,
    reason = "distance properties compare floating point values"
)]

//! Property-based tests for the great-circle distance helpers.
//!
//! # Invariants tested
//!
//! - **Symmetry:** `distance(a, b) == distance(b, a)`.
//! - **Identity:** `distance(a, a) == 0`.
//! - **Non-negativity:** distances are finite and never negative.
//! - **Collinearity:** for points along one meridian, the distance from the
//!   first to the last equals the sum of the two legs.

use geo::Coord;
use proptest::prelude::*;
use tandoor_core::{EARTH_RADIUS_KM, distance_km, haversine_km};

fn north_of(origin: Coord<f64>, km: f64) -> Coord<f64> {
    let km_per_degree = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;
    Coord {
        x: origin.x,
        y: origin.y + km / km_per_degree,
    }
}

fn coordinate() -> impl Strategy<Value = Coord<f64>> {
    (-180.0_f64..=180.0_f64, -90.0_f64..=90.0_f64).prop_map(|(x, y)| Coord { x, y })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn distance_is_symmetric(a in coordinate(), b in coordinate()) {
        let forward = haversine_km(a, b);
        let backward = haversine_km(b, a);
        prop_assert!((forward - backward).abs() <= 1e-9, "{forward} != {backward}");
    }

    #[test]
    fn distance_to_self_is_zero(a in coordinate()) {
        prop_assert_eq!(distance_km(a.y, a.x, a.y, a.x), 0.0);
    }

    #[test]
    fn distance_is_finite_and_non_negative(a in coordinate(), b in coordinate()) {
        let km = haversine_km(a, b);
        prop_assert!(km.is_finite());
        prop_assert!(km >= 0.0);
    }

    #[test]
    fn meridian_legs_add_up(
        lon in -180.0_f64..=180.0_f64,
        lat in -60.0_f64..=0.0_f64,
        first_leg in 0.0_f64..2_000.0_f64,
        second_leg in 0.0_f64..2_000.0_f64,
    ) {
        let a = Coord { x: lon, y: lat };
        let b = north_of(a, first_leg);
        let c = north_of(b, second_leg);
        let whole = haversine_km(a, c);
        let legs = haversine_km(a, b) + haversine_km(b, c);
        prop_assert!((whole - legs).abs() < 1e-6, "{whole} vs {legs}");
    }
}
