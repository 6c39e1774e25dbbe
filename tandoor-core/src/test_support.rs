//! Test-only fixtures shared by unit, behaviour and property tests.

use geo::Coord;

use crate::{Candidate, EARTH_RADIUS_KM, RecommendationQuery, Restaurant, Scorer};

/// Kilometres covered by one degree of latitude on the model sphere.
#[expect(
    clippy::float_arithmetic,
    reason = "constant derived from the Earth radius"
)]
pub const KM_PER_DEGREE_LATITUDE: f64 = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;

/// Return the coordinate `km` kilometres due north of `origin`.
///
/// Distances along a meridian are exact on the haversine sphere, so tests can
/// place restaurants at precise distances.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "offsetting a latitude by a distance is floating-point maths"
)]
pub fn north_of(origin: Coord<f64>, km: f64) -> Coord<f64> {
    Coord {
        x: origin.x,
        y: origin.y + km / KM_PER_DEGREE_LATITUDE,
    }
}

/// Build a valid restaurant for tests.
///
/// # Panics
/// Panics when the supplied values fail [`Restaurant::new`] validation.
#[must_use]
#[expect(clippy::expect_used, reason = "fixtures should fail fast during setup")]
pub fn restaurant(
    id: &str,
    location: Coord<f64>,
    rating: f64,
    review_count: u32,
    locality: &str,
) -> Restaurant {
    Restaurant::new(id, location, rating, review_count, locality).expect("valid test restaurant")
}

/// Test `Scorer` that ranks purely by rating.
#[derive(Debug, Copy, Clone, Default)]
pub struct RatingScorer;

impl Scorer for RatingScorer {
    fn score(&self, candidate: &Candidate, _query: &RecommendationQuery) -> f64 {
        candidate.restaurant.rating()
    }
}
