//! Restaurant catalogue loading for the Tandoor engine.
//!
//! Responsibilities:
//! - Decode JSON catalogues in the browser application's record shape into
//!   validated [`Restaurant`](tandoor_core::Restaurant) values.
//! - Ship a bundled fixture catalogue for demos and tests.
//!
//! Boundaries:
//! - Do not encode ranking rules (live in `tandoor-ranker`).
//! - Malformed records are reported and skipped; they never reach the
//!   ranking pipeline.
//!
//! Invariants:
//! - No global mutable state.

#![forbid(unsafe_code)]

pub mod fs;
mod loader;

pub use loader::{
    BUNDLED_CATALOGUE, LoadError, LoadReport, RejectedRecord, bundled_restaurants,
    load_restaurants, parse_restaurants,
};
