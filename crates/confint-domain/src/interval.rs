//! Interval estimate of a proportion

/// A point estimate with lower and upper confidence bounds
///
/// Bounds produced by the estimators in this crate always satisfy
/// `0 <= lower <= estimate <= upper <= 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Central value reported by the method (not always `x/n`)
    pub estimate: f64,
    /// Lower bound
    pub lower: f64,
    /// Upper bound
    pub upper: f64,
}

impl Interval {
    /// Create a new interval
    pub fn new(estimate: f64, lower: f64, upper: f64) -> Self {
        Self {
            estimate,
            lower,
            upper,
        }
    }

    /// Width of the interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Check if the interval contains a value
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Bounds as a `(estimate, lower, upper)` triple
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.estimate, self.lower, self.upper)
    }
}
