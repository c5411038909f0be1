//! Confidence level and critical-value conversion

use crate::error::{EstimateError, Result};
use crate::special::acklam;
use std::fmt;

/// Default confidence level used when none is requested
pub const DEFAULT_CONFIDENCE_PERCENT: f64 = 95.0;

/// Whether a critical value bounds one tail or both
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sidedness {
    /// All of alpha in the upper tail
    OneSided,

    /// Alpha split evenly between both tails
    #[default]
    TwoSided,
}

/// A confidence level in percent, strictly between 0 and 100
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Create a new confidence level
    ///
    /// # Errors
    /// Returns [`EstimateError::InvalidConfidence`] if `percent` is not a
    /// finite number in the open interval (0, 100), or lies so close to an
    /// end of it that a tail probability rounds to 0 or 1
    ///
    /// # Examples
    ///
    /// ```
    /// use confint_domain::ConfidenceLevel;
    ///
    /// let level = ConfidenceLevel::new(95.0).unwrap();
    /// assert!((level.alpha() - 0.05).abs() < 1e-12);
    /// assert!(ConfidenceLevel::new(100.0).is_err());
    /// ```
    pub fn new(percent: f64) -> Result<Self> {
        if !(percent.is_finite() && percent > 0.0 && percent < 100.0) {
            return Err(EstimateError::InvalidConfidence(percent));
        }

        let level = Self(percent);
        let representable = [Sidedness::OneSided, Sidedness::TwoSided]
            .into_iter()
            .map(|sidedness| level.quantile_probability(sidedness))
            .all(|p| p > 0.0 && p < 1.0);
        if !representable {
            return Err(EstimateError::InvalidConfidence(percent));
        }

        Ok(level)
    }

    /// Confidence level in percent
    pub fn percent(&self) -> f64 {
        self.0
    }

    /// Total tail mass, `1 - pct/100`
    pub fn alpha(&self) -> f64 {
        1.0 - self.0 / 100.0
    }

    /// Half of the tail mass as used by Clopper-Pearson, `0.5 - pct/200`
    pub fn half_alpha(&self) -> f64 {
        0.5 - self.0 / 200.0
    }

    /// Standard-normal critical value for this level
    pub fn critical_value(&self, sidedness: Sidedness) -> f64 {
        // `new` guarantees the probability lies strictly inside (0, 1)
        acklam(self.quantile_probability(sidedness))
    }

    fn quantile_probability(&self, sidedness: Sidedness) -> f64 {
        let alpha = self.alpha();
        match sidedness {
            Sidedness::OneSided => 1.0 - alpha,
            Sidedness::TwoSided => 1.0 - alpha / 2.0,
        }
    }

    /// Two-sided critical value
    pub fn z(&self) -> f64 {
        self.critical_value(Sidedness::TwoSided)
    }
}

impl Default for ConfidenceLevel {
    fn default() -> Self {
        Self(DEFAULT_CONFIDENCE_PERCENT)
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}%", self.0)
    }
}

/// Critical value for a confidence percentage
///
/// # Errors
/// Returns [`EstimateError::InvalidConfidence`] if `percent` is outside (0, 100)
pub fn critical_value(percent: f64, sidedness: Sidedness) -> Result<f64> {
    Ok(ConfidenceLevel::new(percent)?.critical_value(sidedness))
}
