//! Candidate selection by rating floor, search radius and cuisine.
//!
//! Every record is measured against the query origin and ordered nearest
//! first before the thresholds apply. When fewer than [`MIN_CANDIDATES`]
//! survive, the rating floor is lowered once by [`RELAXATION_STEP`]; the
//! radius and cuisine constraints never relax.

use log::debug;
use tandoor_core::{Candidate, RecommendationQuery, Restaurant, haversine_km};

/// Minimum survivors before the rating floor is relaxed.
pub const MIN_CANDIDATES: usize = 5;

/// Amount subtracted from the rating floor when relaxing.
pub const RELAXATION_STEP: f64 = 0.5;

/// A record measured against the origin, borrowed until it survives.
#[derive(Debug, Clone, Copy)]
struct Measured<'a> {
    position: usize,
    restaurant: &'a Restaurant,
    distance_km: f64,
}

/// Select the candidates for `query`, annotated with their distances.
///
/// The result is ordered by ascending distance, ties keeping input order.
/// Only survivors are cloned out of `records`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tandoor_core::{RecommendationQuery, Restaurant};
/// use tandoor_ranker::filter_candidates;
///
/// let origin = Coord { x: 72.8777, y: 19.0760 };
/// let records = vec![
///     Restaurant::new("near", origin, 4.6, 800, "Mumbai").unwrap(),
///     Restaurant::new("far", Coord { x: 73.8567, y: 18.5204 }, 4.9, 900, "Pune").unwrap(),
/// ];
/// let query = RecommendationQuery::new(origin);
/// let candidates = filter_candidates(&records, &query);
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].restaurant.id(), "near");
/// ```
#[must_use]
pub fn filter_candidates(records: &[Restaurant], query: &RecommendationQuery) -> Vec<Candidate> {
    let measured = measure(records, query);
    let strict = retain(&measured, query, query.min_rating);
    let survivors = if strict.len() < MIN_CANDIDATES {
        let relaxed_floor = relaxed_floor(query.min_rating);
        let relaxed = retain(&measured, query, relaxed_floor);
        debug!(
            "relaxed rating floor from {} to {relaxed_floor}: {} strict candidates, {} relaxed",
            query.min_rating,
            strict.len(),
            relaxed.len()
        );
        relaxed
    } else {
        strict
    };
    survivors
        .into_iter()
        .map(|measured_record| {
            Candidate::new(
                measured_record.restaurant.clone(),
                measured_record.distance_km,
                measured_record.position,
            )
        })
        .collect()
}

#[expect(
    clippy::float_arithmetic,
    reason = "relaxation lowers the rating floor by a fixed step"
)]
fn relaxed_floor(min_rating: f64) -> f64 {
    min_rating - RELAXATION_STEP
}

fn measure<'a>(records: &'a [Restaurant], query: &RecommendationQuery) -> Vec<Measured<'a>> {
    let mut measured: Vec<Measured<'a>> = records
        .iter()
        .enumerate()
        .map(|(position, restaurant)| Measured {
            position,
            restaurant,
            distance_km: haversine_km(query.origin, restaurant.location()),
        })
        .collect();
    measured.sort_by(|lhs, rhs| lhs.distance_km.total_cmp(&rhs.distance_km));
    measured
}

fn retain<'a>(
    measured: &[Measured<'a>],
    query: &RecommendationQuery,
    min_rating: f64,
) -> Vec<Measured<'a>> {
    let keyword = query.cuisine_keyword();
    measured
        .iter()
        .filter(|record| {
            record.restaurant.rating() >= min_rating
                && record.distance_km <= query.max_distance_km
        })
        .filter(|record| keyword.is_none_or(|cuisine| record.restaurant.matches_cuisine(cuisine)))
        .copied()
        .collect()
}
