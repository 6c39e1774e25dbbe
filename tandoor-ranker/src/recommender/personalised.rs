//! Personalised recommendations blending cuisine affinity with general picks.

use std::collections::HashSet;

use geo::Coord;
use log::{debug, warn};
use tandoor_core::{
    DEFAULT_MAX_DISTANCE_KM, DEFAULT_MIN_RATING, RecommendationQuery, Restaurant,
    ScoredCandidate, Scorer,
};

use super::{RecommendError, Recommender};
use crate::top_cuisine;

/// Rating floor for the baseline and cuisine-affinity passes.
pub const PERSONALISED_MIN_RATING: f64 = 3.5;

/// Locality cap for the cuisine-affinity half.
pub const AFFINITY_MAX_PER_LOCALITY: usize = 2;

/// Locality cap for the general half.
pub const GENERAL_MAX_PER_LOCALITY: usize = 1;

impl<C> Recommender<C>
where
    C: Scorer,
{
    /// Recommend restaurants for a diner with the given favourites.
    ///
    /// Without favourites this is a plain recommendation with a
    /// [`PERSONALISED_MIN_RATING`] floor. Otherwise the most frequent
    /// cuisine among the favourites drives a first pass filling half of
    /// `top_n`, and a second pass over the remaining records (excluding the
    /// favourites and anything already picked) fills the other half with
    /// one result per locality. Affinity results always precede general
    /// results; the halves are not re-ranked against each other.
    ///
    /// When none of the favourites carries a cuisine tag, or none of them is
    /// in `records`, the call behaves as if there were no favourites: a
    /// single pass fills all of `top_n` and the favourites themselves may
    /// appear in the results.
    ///
    /// If the personalised passes fail, the call falls back to a standard
    /// recommendation with default thresholds. The passes use fixed valid
    /// thresholds, so the only failure is an invalid `origin`, which the
    /// fallback rejects again.
    ///
    /// # Errors
    /// Returns [`RecommendError::InvalidQuery`] for an invalid `origin`.
    pub fn recommend_personalised<S>(
        &self,
        records: &[Restaurant],
        origin: Coord<f64>,
        favourite_ids: &[S],
        top_n: usize,
    ) -> Result<Vec<ScoredCandidate>, RecommendError>
    where
        S: AsRef<str>,
    {
        self.personalise(records, origin, favourite_ids, top_n)
            .or_else(|error| {
                warn!("personalised recommendation failed, using standard ranking: {error}");
                self.recommend(records, &RecommendationQuery::new(origin).with_top_n(top_n))
            })
    }

    fn personalise<S>(
        &self,
        records: &[Restaurant],
        origin: Coord<f64>,
        favourite_ids: &[S],
        top_n: usize,
    ) -> Result<Vec<ScoredCandidate>, RecommendError>
    where
        S: AsRef<str>,
    {
        let baseline = RecommendationQuery::new(origin)
            .with_min_rating(PERSONALISED_MIN_RATING)
            .with_max_distance_km(DEFAULT_MAX_DISTANCE_KM)
            .with_top_n(top_n);
        if favourite_ids.is_empty() {
            return self.recommend(records, &baseline);
        }

        let favourites: HashSet<&str> = favourite_ids.iter().map(AsRef::as_ref).collect();
        let Some(cuisine) = top_cuisine(
            records
                .iter()
                .filter(|restaurant| favourites.contains(restaurant.id())),
        ) else {
            debug!("favourites carry no cuisine tags; using baseline ranking");
            return self.recommend(records, &baseline);
        };
        debug!("personalising around favourite cuisine {cuisine}");

        let half = half_of(top_n);
        let affinity_query = RecommendationQuery::new(origin)
            .with_cuisine(cuisine)
            .with_min_rating(PERSONALISED_MIN_RATING)
            .with_max_distance_km(DEFAULT_MAX_DISTANCE_KM)
            .with_top_n(half)
            .with_max_per_locality(AFFINITY_MAX_PER_LOCALITY);
        let mut blended = self.recommend(records, &affinity_query)?;

        let chosen: HashSet<&str> = blended.iter().map(ScoredCandidate::id).collect();
        let (remaining, positions): (Vec<Restaurant>, Vec<usize>) = records
            .iter()
            .enumerate()
            .filter(|(_, restaurant)| {
                !chosen.contains(restaurant.id()) && !favourites.contains(restaurant.id())
            })
            .map(|(position, restaurant)| (restaurant.clone(), position))
            .unzip();
        let general_query = RecommendationQuery::new(origin)
            .with_min_rating(DEFAULT_MIN_RATING)
            .with_max_distance_km(DEFAULT_MAX_DISTANCE_KM)
            .with_top_n(half)
            .with_max_per_locality(GENERAL_MAX_PER_LOCALITY);
        let general = self.recommend(&remaining, &general_query)?;

        blended.extend(general.into_iter().map(|mut candidate| {
            candidate.position = positions
                .get(candidate.position)
                .copied()
                .unwrap_or(candidate.position);
            candidate
        }));
        blended.truncate(top_n);
        Ok(blended)
    }
}

#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "each personalised pass fills the floor of half the requested results"
)]
const fn half_of(top_n: usize) -> usize {
    top_n / 2
}
