//! Confint Domain Layer
//!
//! Point estimates and confidence intervals for a binomial proportion,
//! given a number of successes out of a number of trials.
//!
//! ## Key Concepts
//!
//! - **Sample**: validated `(successes, trials)` pair with `0 <= x <= n`, `n >= 1`
//! - **Confidence Level**: percentage in (0, 100) and its standard-normal critical value
//! - **Interval**: `(estimate, lower, upper)` produced by one estimation method
//! - **Method**: Normal (Wald), Clopper-Pearson, Agresti-Coull, Wilson, Wilson with
//!   continuity correction
//!
//! ## Architecture
//!
//! Pure computation only. No I/O, no logging, no shared state: every estimator is a
//! function of its inputs. Formatting and argument handling live in `confint-cli`.
//!
//! ```
//! use confint_domain::{summarize, ConfidenceLevel, Method, Sample};
//!
//! let sample = Sample::new(32, 48).unwrap();
//! let summary = summarize(sample, ConfidenceLevel::default(), &Method::ALL).unwrap();
//! for (method, ci) in &summary.intervals {
//!     assert!(ci.lower <= ci.estimate && ci.estimate <= ci.upper, "{method}");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod estimators;
pub mod interval;
pub mod level;
pub mod method;
pub mod sample;
pub mod special;
pub mod summary;

// Re-exports for convenience
pub use error::{EstimateError, Result};
pub use estimators::{
    agresti_coull, clopper_pearson, normal_approx, wald, wilson_score, wilson_score_cc,
};
pub use interval::Interval;
pub use level::{critical_value, ConfidenceLevel, Sidedness, DEFAULT_CONFIDENCE_PERCENT};
pub use method::Method;
pub use sample::Sample;
pub use summary::{summarize, PointEstimates, ProportionSummary};
