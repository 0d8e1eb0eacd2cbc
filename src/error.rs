//! Crate error type.
//!
//! Every degenerate input is reported as an explicit error variant rather
//! than coerced to `0.0` or `NaN`. Callers that want to treat a failure as
//! "no result" can always `.ok()` the returned `Result`.

use thiserror::Error;

/// Errors produced by metric and test computations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The input slice contains no observations.
    #[error("input is empty")]
    EmptyInput,

    /// An input value (or the hypothesized center) is NaN or infinite.
    #[error("input contains a non-finite value")]
    NonFiniteInput,

    /// Paired slices differ in length.
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the first slice.
        left: usize,
        /// Length of the second slice.
        right: usize,
    },

    /// Every observation equals the hypothesized center, so the
    /// signed-rank statistic is undefined.
    #[error("all observations are tied at the hypothesized center")]
    AllTiedAtCenter,

    /// Binary labels contain no positive samples.
    #[error("labels contain no positive samples")]
    NoPositiveLabels,

    /// Binary labels contain no negative samples.
    #[error("labels contain no negative samples")]
    NoNegativeLabels,

    /// The observed values are constant, so a variance-normalized metric
    /// is undefined.
    #[error("observed values have zero variance")]
    ZeroVariance,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EvalError>;
