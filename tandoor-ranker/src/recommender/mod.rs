//! `Recommender` pipeline: filter, score, rank, diversify and truncate.
//!
//! Personalised recommendations live in the `personalised` submodule and
//! reuse the same pipeline twice, once for the diner's favourite cuisine and
//! once for general picks.

use log::{debug, warn};
use tandoor_core::{QueryError, RecommendationQuery, Restaurant, ScoredCandidate, Scorer};
use thiserror::Error;

use crate::{filter_candidates, limit_by_locality};

mod personalised;

pub use personalised::{
    AFFINITY_MAX_PER_LOCALITY, GENERAL_MAX_PER_LOCALITY, PERSONALISED_MIN_RATING,
};

/// Errors raised while producing recommendations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecommendError {
    /// The query failed validation.
    #[error("invalid recommendation query: {0}")]
    InvalidQuery(#[from] QueryError),
}

/// Ranks restaurants for a query using a pluggable [`Scorer`].
///
/// A recommender holds no per-call state, so one instance can serve many
/// concurrent calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Recommender<C>
where
    C: Scorer,
{
    scorer: C,
}

impl<C> Recommender<C>
where
    C: Scorer,
{
    /// Construct a recommender around `scorer`.
    #[must_use]
    pub const fn new(scorer: C) -> Self {
        Self { scorer }
    }

    /// Return the scorer used for ranking.
    #[must_use]
    pub const fn scorer(&self) -> &C {
        &self.scorer
    }

    /// Produce ranked, locality-diverse recommendations for `query`.
    ///
    /// Candidates that survive [`filter_candidates`] are scored, ordered by
    /// descending score (ties keep their input order), capped per locality
    /// and truncated to `query.top_n`. Scores use the query's own rating
    /// floor even when the filter relaxed it.
    ///
    /// # Errors
    /// Returns [`RecommendError::InvalidQuery`] when the query fails
    /// [`RecommendationQuery::validate`].
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use tandoor_core::{RecommendationQuery, Restaurant};
    /// use tandoor_ranker::Recommender;
    /// use tandoor_scorer::WeightedScorer;
    ///
    /// let origin = Coord { x: 76.7794, y: 30.7333 };
    /// let records = vec![
    ///     Restaurant::new("r1", origin, 4.6, 1200, "Sector 17").unwrap(),
    /// ];
    /// let recommender = Recommender::new(WeightedScorer::default());
    /// let ranked = recommender
    ///     .recommend(&records, &RecommendationQuery::new(origin))
    ///     .unwrap();
    /// assert_eq!(ranked[0].id(), "r1");
    /// ```
    pub fn recommend(
        &self,
        records: &[Restaurant],
        query: &RecommendationQuery,
    ) -> Result<Vec<ScoredCandidate>, RecommendError> {
        query.validate()?;
        let candidates = filter_candidates(records, query);
        let candidate_count = candidates.len();
        let mut scored: Vec<ScoredCandidate> = candidates
            .into_iter()
            .map(|candidate| {
                let score = self.scorer.score(&candidate, query);
                candidate.with_score(score)
            })
            .collect();
        sort_by_score(&mut scored);
        let mut ranked = limit_by_locality(scored, query.max_per_locality);
        ranked.truncate(query.top_n);
        debug!(
            "recommended {} of {candidate_count} candidates from {} records",
            ranked.len(),
            records.len()
        );
        Ok(ranked)
    }

    /// Like [`Recommender::recommend`], but degrade to an empty list on error.
    ///
    /// The failure is logged at `warn` level.
    #[must_use]
    pub fn recommend_or_empty(
        &self,
        records: &[Restaurant],
        query: &RecommendationQuery,
    ) -> Vec<ScoredCandidate> {
        self.recommend(records, query).unwrap_or_else(|error| {
            warn!("recommendation failed, returning no results: {error}");
            Vec::new()
        })
    }
}

/// Order by descending score; equal scores keep input order.
fn sort_by_score(scored: &mut [ScoredCandidate]) {
    scored.sort_by(|lhs, rhs| {
        rhs.score
            .total_cmp(&lhs.score)
            .then_with(|| lhs.position.cmp(&rhs.position))
    });
}
