//! Per-call query context for recommendations.

use geo::Coord;
use thiserror::Error;

use crate::MAX_RATING;

/// Default rating floor for a standard recommendation.
pub const DEFAULT_MIN_RATING: f64 = 4.0;
/// Default search radius in kilometres.
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 5.0;
/// Default maximum number of results.
pub const DEFAULT_TOP_N: usize = 10;
/// Default maximum number of results sharing one locality.
pub const DEFAULT_MAX_PER_LOCALITY: usize = 2;

/// Parameters for one recommendation call.
///
/// The query captures the caller's position, an optional cuisine keyword and
/// the thresholds that shape the result set. It is never persisted.
///
/// # Examples
/// ```rust
/// use tandoor_core::RecommendationQuery;
///
/// let query = RecommendationQuery::at(30.7333, 76.7794)
///     .with_cuisine("punjabi")
///     .with_top_n(5);
/// assert_eq!(query.min_rating, 4.0);
/// assert_eq!(query.cuisine.as_deref(), Some("punjabi"));
/// assert!(query.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecommendationQuery {
    /// Caller position (`x = longitude`, `y = latitude`).
    pub origin: Coord<f64>,
    /// Case-insensitive substring that at least one cuisine tag must contain.
    pub cuisine: Option<String>,
    /// Minimum rating a restaurant needs before relaxation.
    pub min_rating: f64,
    /// Maximum distance from the origin in kilometres.
    pub max_distance_km: f64,
    /// Maximum number of results.
    pub top_n: usize,
    /// Maximum number of results sharing one locality.
    pub max_per_locality: usize,
}

/// Errors returned by [`RecommendationQuery::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// The origin was not a finite WGS84 coordinate.
    #[error("origin ({latitude}, {longitude}) is not a valid coordinate")]
    InvalidOrigin {
        /// Latitude in decimal degrees.
        latitude: f64,
        /// Longitude in decimal degrees.
        longitude: f64,
    },
    /// The rating floor would make the rating component undefined.
    #[error("minimum rating {min_rating} must be at least 0.0 and below 5.0")]
    MinRatingOutOfRange {
        /// Rating floor supplied by the caller.
        min_rating: f64,
    },
    /// The search radius was not a positive, finite distance.
    #[error("maximum distance {max_distance_km} km must be positive")]
    InvalidDistance {
        /// Radius supplied by the caller.
        max_distance_km: f64,
    },
}

impl RecommendationQuery {
    /// Construct a query around `origin` using the default thresholds.
    #[must_use]
    pub const fn new(origin: Coord<f64>) -> Self {
        Self {
            origin,
            cuisine: None,
            min_rating: DEFAULT_MIN_RATING,
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
            top_n: DEFAULT_TOP_N,
            max_per_locality: DEFAULT_MAX_PER_LOCALITY,
        }
    }

    /// Construct a query from latitude and longitude in decimal degrees.
    #[must_use]
    pub const fn at(latitude: f64, longitude: f64) -> Self {
        Self::new(Coord {
            x: longitude,
            y: latitude,
        })
    }

    /// Restrict results to cuisines containing `keyword`.
    ///
    /// An empty keyword leaves the query unfiltered.
    #[must_use]
    pub fn with_cuisine(mut self, keyword: impl Into<String>) -> Self {
        let keyword_text = keyword.into();
        self.cuisine = (!keyword_text.is_empty()).then_some(keyword_text);
        self
    }

    /// Set the rating floor.
    #[must_use]
    pub const fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    /// Set the search radius in kilometres.
    #[must_use]
    pub const fn with_max_distance_km(mut self, max_distance_km: f64) -> Self {
        self.max_distance_km = max_distance_km;
        self
    }

    /// Set the maximum number of results.
    #[must_use]
    pub const fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Set the per-locality cap.
    #[must_use]
    pub const fn with_max_per_locality(mut self, max_per_locality: usize) -> Self {
        self.max_per_locality = max_per_locality;
        self
    }

    /// Return the cuisine keyword, if one was set.
    #[must_use]
    pub fn cuisine_keyword(&self) -> Option<&str> {
        self.cuisine.as_deref()
    }

    /// Validate the query parameters.
    ///
    /// A rating floor of `5.0` or more is rejected because the rating
    /// component of the score divides by `5.0 - min_rating`.
    ///
    /// # Errors
    /// Returns [`QueryError`] describing the first invalid parameter.
    pub fn validate(&self) -> Result<(), QueryError> {
        validate_origin(self.origin)?;
        if !self.min_rating.is_finite() || !(0.0..MAX_RATING).contains(&self.min_rating) {
            return Err(QueryError::MinRatingOutOfRange {
                min_rating: self.min_rating,
            });
        }
        validate_radius(self.max_distance_km)
    }
}

/// Check that `origin` is a finite WGS84 coordinate.
///
/// # Errors
/// Returns [`QueryError::InvalidOrigin`] for non-finite or out-of-range values.
pub fn validate_origin(origin: Coord<f64>) -> Result<(), QueryError> {
    let valid = origin.x.is_finite()
        && origin.y.is_finite()
        && (-180.0..=180.0).contains(&origin.x)
        && (-90.0..=90.0).contains(&origin.y);
    if valid {
        Ok(())
    } else {
        Err(QueryError::InvalidOrigin {
            latitude: origin.y,
            longitude: origin.x,
        })
    }
}

/// Check that `radius_km` is a positive, finite distance.
///
/// # Errors
/// Returns [`QueryError::InvalidDistance`] otherwise.
pub fn validate_radius(radius_km: f64) -> Result<(), QueryError> {
    if radius_km.is_finite() && radius_km > 0.0 {
        Ok(())
    } else {
        Err(QueryError::InvalidDistance {
            max_distance_km: radius_km,
        })
    }
}
