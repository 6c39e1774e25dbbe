//! Facade crate for the Tandoor restaurant recommendation engine.
//!
//! This crate re-exports the core domain types and exposes the weighted
//! scorer and the ranking pipeline behind feature flags.

#![forbid(unsafe_code)]

pub use tandoor_core::{
    Candidate, DEFAULT_MAX_DISTANCE_KM, DEFAULT_MAX_PER_LOCALITY, DEFAULT_MIN_RATING,
    DEFAULT_TOP_N, PriceRange, QueryError, RecommendationQuery, Restaurant, RestaurantError,
    ScoredCandidate, Scorer, haversine_km,
};

#[cfg(feature = "scorer")]
pub use tandoor_scorer::{ScoreWeights, ScoreWeightsError, WeightedScorer};

#[cfg(feature = "ranker")]
pub use tandoor_ranker::{
    CuratedLists, ListCache, ListingFilter, MemoryListCache, RecommendError, Recommender,
    SortOption, list_restaurants, nearby,
};
