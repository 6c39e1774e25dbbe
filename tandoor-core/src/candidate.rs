//! Restaurants annotated during a single ranking call.
//!
//! Candidates are created fresh for each call and discarded when it returns.

use crate::Restaurant;

/// A restaurant under consideration, annotated with its distance from the
/// query origin.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Candidate {
    /// The restaurant record.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub restaurant: Restaurant,
    /// Great-circle distance from the origin in kilometres.
    pub distance_km: f64,
    /// Index of the record in the caller's input slice.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub position: usize,
}

impl Candidate {
    /// Annotate `restaurant` with its distance and input position.
    #[must_use]
    pub const fn new(restaurant: Restaurant, distance_km: f64, position: usize) -> Self {
        Self {
            restaurant,
            distance_km,
            position,
        }
    }

    /// Attach a score, producing a [`ScoredCandidate`].
    #[must_use]
    pub fn with_score(self, score: f64) -> ScoredCandidate {
        ScoredCandidate {
            restaurant: self.restaurant,
            distance_km: self.distance_km,
            score,
            position: self.position,
        }
    }
}

/// A candidate with its ranking score.
///
/// Scores are not bounded to `0.0..=1.0`; higher ranks first.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScoredCandidate {
    /// The restaurant record.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub restaurant: Restaurant,
    /// Great-circle distance from the origin in kilometres.
    pub distance_km: f64,
    /// Weighted ranking score.
    pub score: f64,
    /// Index of the record in the caller's input slice.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub position: usize,
}

impl ScoredCandidate {
    /// Identifier of the underlying restaurant.
    #[must_use]
    pub fn id(&self) -> &str {
        self.restaurant.id()
    }

    /// Locality of the underlying restaurant.
    #[must_use]
    pub fn locality(&self) -> &str {
        self.restaurant.locality()
    }
}
