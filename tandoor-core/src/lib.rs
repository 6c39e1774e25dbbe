//! Core domain types for the Tandoor restaurant recommendation engine.
//!
//! The crate defines the values every other crate in the workspace agrees on:
//! validated [`Restaurant`] records, per-call [`RecommendationQuery`] contexts,
//! the [`Candidate`] and [`ScoredCandidate`] values produced while ranking,
//! great-circle distance helpers, and the [`Scorer`] trait that ranking
//! implementations plug into.
//!
//! Constructors return `Result` so malformed input is rejected at the boundary
//! instead of travelling through the ranking pipeline.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod candidate;
pub mod distance;
pub mod query;
pub mod restaurant;
pub mod scorer;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use candidate::{Candidate, ScoredCandidate};
pub use distance::{EARTH_RADIUS_KM, distance_km, haversine_km};
pub use query::{
    DEFAULT_MAX_DISTANCE_KM, DEFAULT_MAX_PER_LOCALITY, DEFAULT_MIN_RATING, DEFAULT_TOP_N,
    QueryError, RecommendationQuery, validate_origin, validate_radius,
};
pub use restaurant::{MAX_RATING, PriceRange, Restaurant, RestaurantError};
pub use scorer::Scorer;
