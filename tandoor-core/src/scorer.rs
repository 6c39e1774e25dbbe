//! Score candidates for a recommendation query.
//!
//! The `Scorer` trait assigns a ranking score to a
//! [`Candidate`](crate::Candidate) given the caller's
//! [`RecommendationQuery`](crate::RecommendationQuery).

use crate::{Candidate, RecommendationQuery};

/// Calculate a ranking score for a candidate.
///
/// Higher scores rank first. Implementations must be thread-safe (`Send` +
/// `Sync`) so one scorer can serve concurrent ranking calls. The method is
/// infallible and must return finite values; use [`Scorer::sanitise`] to map
/// non-finite intermediate results to `0.0`. Scores are not required to stay
/// within `0.0..=1.0`.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use tandoor_core::{Candidate, RecommendationQuery, Restaurant, Scorer};
///
/// struct NearestFirst;
///
/// impl Scorer for NearestFirst {
///     fn score(&self, candidate: &Candidate, _query: &RecommendationQuery) -> f64 {
///         -candidate.distance_km
///     }
/// }
///
/// let restaurant = Restaurant::new("r1", Coord { x: 0.0, y: 0.0 }, 4.0, 1, "Goa").unwrap();
/// let candidate = Candidate::new(restaurant, 2.0, 0);
/// let query = RecommendationQuery::at(0.0, 0.0);
/// assert_eq!(NearestFirst.score(&candidate, &query), -2.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `candidate` according to `query`.
    fn score(&self, candidate: &Candidate, query: &RecommendationQuery) -> f64;

    /// Replace non-finite scores with `0.0`.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if score.is_finite() { score } else { 0.0 }
    }
}

impl<S: Scorer + ?Sized> Scorer for &S {
    fn score(&self, candidate: &Candidate, query: &RecommendationQuery) -> f64 {
        (**self).score(candidate, query)
    }
}
