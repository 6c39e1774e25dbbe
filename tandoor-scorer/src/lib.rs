//! Weighted scoring for Tandoor restaurant candidates.
//!
//! [`WeightedScorer`] combines three normalised signals into one score:
//!
//! - **Distance:** `1 - distance_km / max_distance_km`. The value falls
//!   linearly with distance and turns negative beyond the radius; candidates
//!   outside the radius are filtered before scoring, so the formula does not
//!   clamp.
//! - **Rating:** `(rating - min_rating) / (5 - min_rating)`. Zero at the
//!   query's floor and one for a perfect rating. A floor of `5.0` is rejected
//!   by [`RecommendationQuery::validate`](tandoor_core::RecommendationQuery::validate);
//!   the component falls back to `0.0` if it is reached anyway.
//! - **Popularity:** `min(review_count / 1000, 1)`.
//!
//! The weighted sum uses [`ScoreWeights`], `0.5 / 0.3 / 0.2` by default.
//!
//! # Examples
//!
//! ```
//! use geo::Coord;
//! use tandoor_core::{Candidate, RecommendationQuery, Restaurant, Scorer};
//! use tandoor_scorer::WeightedScorer;
//!
//! let restaurant = Restaurant::new("r1", Coord { x: 0.0, y: 0.0 }, 4.5, 500, "Jaipur").unwrap();
//! let candidate = Candidate::new(restaurant, 2.5, 0);
//! let query = RecommendationQuery::at(0.0, 0.0).with_max_distance_km(5.0);
//! let score = WeightedScorer::default().score(&candidate, &query);
//! // 0.5 * 0.5 + 0.3 * 0.5 + 0.2 * 0.5
//! assert!((score - 0.5).abs() < 1e-12);
//! ```

#![forbid(unsafe_code)]

use tandoor_core::{Candidate, MAX_RATING, RecommendationQuery, Scorer};

mod error;
mod weights;

pub use error::ScoreWeightsError;
pub use weights::ScoreWeights;

/// Review count at which the popularity component saturates.
pub const POPULARITY_SATURATION_REVIEWS: u32 = 1000;

/// Scorer blending proximity, rating and popularity.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct WeightedScorer {
    weights: ScoreWeights,
}

impl WeightedScorer {
    /// Construct a scorer with explicit weights.
    ///
    /// # Errors
    /// Returns [`ScoreWeightsError`] when the weights fail validation.
    pub fn new(weights: ScoreWeights) -> Result<Self, ScoreWeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Return the configured weights.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }
}

impl Scorer for WeightedScorer {
    fn score(&self, candidate: &Candidate, query: &RecommendationQuery) -> f64 {
        let restaurant = &candidate.restaurant;
        let blended = self.weights.blend(
            distance_component(candidate.distance_km, query.max_distance_km),
            rating_component(restaurant.rating(), query.min_rating),
            popularity_component(restaurant.review_count()),
        );
        Self::sanitise(blended)
    }
}

/// Linear proximity score: `1.0` at the origin, `0.0` at the radius.
///
/// Returns `0.0` for a non-positive radius.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "distance normalisation divides by the search radius"
)]
pub fn distance_component(distance_km: f64, max_distance_km: f64) -> f64 {
    if max_distance_km <= 0.0 {
        return 0.0;
    }
    1.0 - distance_km / max_distance_km
}

/// Rating score relative to the query's floor: `0.0` at the floor, `1.0` at
/// a perfect rating.
///
/// Returns `0.0` when the floor leaves no headroom below the maximum rating.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "rating normalisation divides by the remaining rating span"
)]
pub fn rating_component(rating: f64, min_rating: f64) -> f64 {
    let span = MAX_RATING - min_rating;
    if span <= 0.0 {
        return 0.0;
    }
    (rating - min_rating) / span
}

/// Popularity score saturating at [`POPULARITY_SATURATION_REVIEWS`] reviews.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "popularity normalisation divides by the saturation point"
)]
pub fn popularity_component(review_count: u32) -> f64 {
    (f64::from(review_count) / f64::from(POPULARITY_SATURATION_REVIEWS)).min(1.0)
}
