//! Relative weighting between the distance, rating and popularity signals.
#![forbid(unsafe_code)]

use crate::ScoreWeightsError;

/// Multipliers applied to each normalised score component.
///
/// The defaults weight proximity highest (`0.5`), then rating (`0.3`), then
/// popularity (`0.2`).
///
/// # Examples
/// ```
/// use tandoor_scorer::ScoreWeights;
///
/// let weights = ScoreWeights::default();
/// assert_eq!(weights.distance, 0.5);
/// assert!(weights.validate().is_ok());
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScoreWeights {
    /// Multiplier applied to the distance component.
    pub distance: f64,
    /// Multiplier applied to the rating component.
    pub rating: f64,
    /// Multiplier applied to the popularity component.
    pub popularity: f64,
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoreWeightsError`] when any weight is not finite or is
    /// negative, or when all weights are zero.
    pub fn validate(self) -> Result<Self, ScoreWeightsError> {
        for (name, value) in self.named() {
            if !value.is_finite() {
                return Err(ScoreWeightsError::NonFinite { name, value });
            }
            if value < 0.0 {
                return Err(ScoreWeightsError::Negative { name, value });
            }
        }
        if self.has_non_zero_total() {
            Ok(self)
        } else {
            Err(ScoreWeightsError::ZeroTotal)
        }
    }

    const fn named(self) -> [(&'static str, f64); 3] {
        [
            ("distance", self.distance),
            ("rating", self.rating),
            ("popularity", self.popularity),
        ]
    }

    fn has_non_zero_total(self) -> bool {
        self.named().iter().any(|(_, value)| *value != 0.0)
    }

    /// Combine component scores into one weighted sum.
    #[expect(
        clippy::float_arithmetic,
        reason = "score blending requires a weighted sum"
    )]
    pub(crate) fn blend(self, distance: f64, rating: f64, popularity: f64) -> f64 {
        self.distance * distance + self.rating * rating + self.popularity * popularity
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            distance: 0.5,
            rating: 0.3,
            popularity: 0.2,
        }
    }
}
