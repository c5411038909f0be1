//! Point estimates and the full estimation summary

use crate::error::Result;
use crate::{ConfidenceLevel, Interval, Method, Sample};

/// Point estimates of the proportion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointEstimates {
    /// Maximum likelihood, `x/n`
    pub max_likelihood: f64,
    /// Laplace rule of succession, `(x+1)/(n+2)`
    pub laplace: f64,
    /// Wilson centre, `(x + z²/2)/(n + z²)`
    pub wilson: f64,
}

impl PointEstimates {
    /// Compute point estimates for a sample
    ///
    /// The Laplace estimate stays away from 0 and 1 when there are no
    /// positive or no negative observations. The Wilson centre pulls toward
    /// 0.5, more strongly at higher confidence levels.
    pub fn new(sample: &Sample, level: ConfidenceLevel) -> Self {
        let x = sample.successes() as f64;
        let n = sample.trials() as f64;
        let z2 = level.z().powi(2);

        Self {
            max_likelihood: sample.proportion(),
            laplace: (x + 1.0) / (n + 2.0),
            wilson: (x + z2 / 2.0) / (n + z2),
        }
    }
}

/// Everything reported for a single sample and confidence level
#[derive(Debug, Clone, PartialEq)]
pub struct ProportionSummary {
    /// Observed sample
    pub sample: Sample,
    /// Requested confidence level
    pub level: ConfidenceLevel,
    /// Point estimates
    pub point: PointEstimates,
    /// Interval per requested method, in request order
    pub intervals: Vec<(Method, Interval)>,
}

/// Compute point estimates and the intervals of the given methods
///
/// # Errors
/// Propagates the first estimator error
pub fn summarize(
    sample: Sample,
    level: ConfidenceLevel,
    methods: &[Method],
) -> Result<ProportionSummary> {
    let intervals = methods
        .iter()
        .map(|method| method.compute(&sample, level).map(|ci| (*method, ci)))
        .collect::<Result<Vec<_>>>()?;

    Ok(ProportionSummary {
        sample,
        level,
        point: PointEstimates::new(&sample, level),
        intervals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EstimateError;

    #[test]
    fn test_point_estimates() {
        let sample = Sample::new(32, 48).unwrap();
        let point = PointEstimates::new(&sample, ConfidenceLevel::default());

        assert!((point.max_likelihood - 2.0 / 3.0).abs() < 1e-15);
        assert!((point.laplace - 33.0 / 50.0).abs() < 1e-15);
        assert!((point.wilson - 0.654_316_645_055_647).abs() < 1e-8);
    }

    #[test]
    fn test_wilson_point_matches_wilson_interval_centre() {
        let sample = Sample::new(7, 30).unwrap();
        let level = ConfidenceLevel::new(99.0).unwrap();
        let point = PointEstimates::new(&sample, level);
        let ci = Method::Wilson.compute(&sample, level).unwrap();

        assert!((point.wilson - ci.estimate).abs() < 1e-12);
    }

    #[test]
    fn test_laplace_with_no_successes() {
        let sample = Sample::new(0, 8).unwrap();
        let point = PointEstimates::new(&sample, ConfidenceLevel::default());
        assert_eq!(point.max_likelihood, 0.0);
        assert!((point.laplace - 0.1).abs() < 1e-15);
    }

    #[test]
    fn test_summarize_all_methods() {
        let sample = Sample::new(32, 48).unwrap();
        let summary = summarize(sample, ConfidenceLevel::default(), &Method::ALL).unwrap();

        assert_eq!(summary.intervals.len(), 5);
        let order: Vec<_> = summary.intervals.iter().map(|(m, _)| *m).collect();
        assert_eq!(order, Method::ALL);
    }

    #[test]
    fn test_summarize_subset_keeps_request_order() {
        let sample = Sample::new(3, 9).unwrap();
        let methods = [Method::Wilson, Method::Normal];
        let summary = summarize(sample, ConfidenceLevel::default(), &methods).unwrap();

        assert_eq!(summary.intervals[0].0, Method::Wilson);
        assert_eq!(summary.intervals[1].0, Method::Normal);
    }

    #[test]
    fn test_summarize_propagates_estimator_error() {
        let sample = Sample::new(0, 1).unwrap();
        let level = ConfidenceLevel::new(80.0).unwrap();
        let result = summarize(sample, level, &Method::ALL);
        assert!(matches!(result, Err(EstimateError::NegativeRadicand { .. })));
    }
}
