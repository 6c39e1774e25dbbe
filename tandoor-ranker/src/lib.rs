//! Restaurant ranking for Tandoor.
//!
//! This crate turns a catalogue of [`Restaurant`](tandoor_core::Restaurant)
//! records into ordered result lists. [`Recommender`] runs the core
//! pipeline for a [`RecommendationQuery`](tandoor_core::RecommendationQuery):
//!
//! 1. [`filter_candidates`] measures every record against the origin, keeps
//!    those inside the radius and above the rating floor (relaxing the floor
//!    once when too few survive) and applies the optional cuisine keyword.
//! 2. The configured [`Scorer`](tandoor_core::Scorer) scores each candidate.
//! 3. Candidates are ordered by descending score, ties keeping input order.
//! 4. [`limit_by_locality`] caps how many results one locality contributes.
//! 5. The list is truncated to `top_n`.
//!
//! [`Recommender::recommend_personalised`] layers cuisine affinity from a
//! diner's favourites on top of the same pipeline. The [`listing`] and
//! [`curated`] modules cover catalogue browsing and the cached popular and
//! featured lists.
//!
//! Every call is a pure function of its arguments apart from the injected
//! [`ListCache`], so a single [`Recommender`] can be shared across threads.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod affinity;
pub mod curated;
mod diversity;
mod filter;
pub mod listing;
mod recommender;

pub use affinity::top_cuisine;
pub use curated::{
    CachedList, CuratedLists, DEFAULT_FEATURED_COUNT, DEFAULT_POPULAR_COUNT, ListCache, ListKind,
    MemoryListCache, catalogue_fingerprint,
};
pub use diversity::limit_by_locality;
pub use filter::{MIN_CANDIDATES, RELAXATION_STEP, filter_candidates};
pub use listing::{ListingFilter, SortOption, UnknownSortOption, list_restaurants, nearby};
pub use recommender::{
    AFFINITY_MAX_PER_LOCALITY, GENERAL_MAX_PER_LOCALITY, PERSONALISED_MIN_RATING, RecommendError,
    Recommender,
};
