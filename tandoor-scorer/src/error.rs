//! Error types raised while configuring the weighted scorer.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when score weights cannot produce meaningful rankings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreWeightsError {
    /// A weight was NaN or infinite.
    #[error("score weight {name} must be finite, found {value}")]
    NonFinite {
        /// Component the weight applies to.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// A weight was negative.
    #[error("score weight {name} must not be negative, found {value}")]
    Negative {
        /// Component the weight applies to.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// Every weight was zero, so all candidates would tie.
    #[error("score weights must not all be zero")]
    ZeroTotal,
}
