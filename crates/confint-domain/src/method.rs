//! Method module - the interval estimators by name

use crate::error::{EstimateError, Result};
use crate::estimators;
use crate::{ConfidenceLevel, Interval, Sample};

/// Interval estimation method
///
/// Variants are listed in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Normal approximation (Wald)
    Normal,

    /// Clopper-Pearson ("exact")
    ClopperPearson,

    /// Agresti-Coull
    AgrestiCoull,

    /// Wilson score
    Wilson,

    /// Wilson score with continuity correction
    WilsonCc,
}

impl Method {
    /// All methods in report order
    pub const ALL: [Method; 5] = [
        Method::Normal,
        Method::ClopperPearson,
        Method::AgrestiCoull,
        Method::Wilson,
        Method::WilsonCc,
    ];

    /// Get the method identifier as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Normal => "normal",
            Method::ClopperPearson => "clopper-pearson",
            Method::AgrestiCoull => "agresti-coull",
            Method::Wilson => "wilson",
            Method::WilsonCc => "wilson-cc",
        }
    }

    /// Human-readable label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Method::Normal => "Normal approx",
            Method::ClopperPearson => "Clopper-Pearson",
            Method::AgrestiCoull => "Agresti-Coull",
            Method::Wilson => "Wilson score",
            Method::WilsonCc => "Wilson cont corr",
        }
    }

    /// Parse a method from its identifier (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "normal" | "wald" => Some(Method::Normal),
            "clopper-pearson" | "exact" => Some(Method::ClopperPearson),
            "agresti-coull" => Some(Method::AgrestiCoull),
            "wilson" => Some(Method::Wilson),
            "wilson-cc" => Some(Method::WilsonCc),
            _ => None,
        }
    }

    /// Compute this method's interval for a validated sample
    pub fn compute(&self, sample: &Sample, level: ConfidenceLevel) -> Result<Interval> {
        match self {
            Method::Normal => estimators::normal_approx(sample, level),
            Method::ClopperPearson => estimators::clopper_pearson(sample, level),
            Method::AgrestiCoull => estimators::agresti_coull(sample, level),
            Method::Wilson => estimators::wilson_score(sample, level),
            Method::WilsonCc => estimators::wilson_score_cc(sample, level),
        }
    }

    /// Compute this method's interval from raw counts and a percentage
    ///
    /// # Errors
    /// Fails for `trials == 0`, `successes > trials`, a confidence level
    /// outside (0, 100), or any method-specific domain error
    ///
    /// # Examples
    ///
    /// ```
    /// use confint_domain::{EstimateError, Method};
    ///
    /// let ci = Method::ClopperPearson.evaluate(0, 10, 95.0).unwrap();
    /// assert_eq!(ci.lower, 0.0);
    ///
    /// let err = Method::Wilson.evaluate(0, 0, 95.0).unwrap_err();
    /// assert_eq!(err, EstimateError::ZeroTrials);
    /// ```
    pub fn evaluate(&self, successes: u64, trials: u64, percent: f64) -> Result<Interval> {
        let sample = Sample::new(successes, trials)?;
        let level = ConfidenceLevel::new(percent)?;
        self.compute(&sample, level)
    }
}

impl std::str::FromStr for Method {
    type Err = EstimateError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| EstimateError::UnknownMethod(s.to_string()))
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
