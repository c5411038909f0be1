//! Error types for proportion estimation.

use thiserror::Error;

/// Result type alias for estimation operations.
pub type Result<T> = std::result::Result<T, EstimateError>;

/// Errors raised when an estimate cannot be computed.
///
/// Every variant corresponds to an input for which the closed-form formulas
/// would divide by zero, take the root of a negative number, or evaluate a
/// quantile outside its domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    /// The sample size was zero
    #[error("Sample size must be at least 1 (got 0 trials)")]
    ZeroTrials,

    /// More successes than trials
    #[error("Successes ({successes}) cannot exceed trials ({trials})")]
    SuccessesExceedTrials {
        /// Number of successes supplied
        successes: u64,
        /// Number of trials supplied
        trials: u64,
    },

    /// Real-valued counts outside the valid domain
    #[error("Invalid counts: {0}")]
    InvalidCounts(String),

    /// Confidence percentage outside the open interval (0, 100)
    #[error("Confidence level must be strictly between 0 and 100 percent (got {0})")]
    InvalidConfidence(f64),

    /// Probability passed to a quantile function outside (0, 1)
    #[error("Probability must be strictly between 0 and 1 (got {0})")]
    InvalidProbability(f64),

    /// Method name that does not match any estimator
    #[error("Unknown method '{0}' (expected normal, clopper-pearson, agresti-coull, wilson or wilson-cc)")]
    UnknownMethod(String),

    /// Square root of a negative number inside an interval formula
    #[error("{method} interval is undefined here: radicand {radicand} is negative")]
    NegativeRadicand {
        /// Name of the method that failed
        method: &'static str,
        /// Offending radicand
        radicand: f64,
    },
}
