//! Interval estimators for a binomial proportion
//!
//! Five closed-form methods, each a pure function of a [`Sample`] and a
//! [`ConfidenceLevel`]:
//! 1. Normal approximation (Wald)
//! 2. Agresti-Coull, which is Wald on adjusted counts
//! 3. Clopper-Pearson ("exact"), from Beta quantiles
//! 4. Wilson score
//! 5. Wilson score with continuity correction
//!
//! Known weaknesses of the classical methods (Wald undercoverage for small
//! samples, Wilson dips near 0.02 and 0.98) are part of their definition
//! and are reproduced as is.

use crate::error::{EstimateError, Result};
use crate::special::beta_quantile;
use crate::{ConfidenceLevel, Interval, Method, Sample};

/// Wald interval over real-valued counts
///
/// `p = x/n`, `sigma = sqrt(p(1-p)/n)`, bounds `p -/+ z * sigma` clamped to
/// [0, 1]. Agresti-Coull feeds non-integer counts through here.
///
/// # Errors
/// Returns [`EstimateError::InvalidCounts`] unless `n > 0` and `0 <= x <= n`
pub fn wald(x: f64, n: f64, level: ConfidenceLevel) -> Result<Interval> {
    if !(n.is_finite() && n > 0.0) {
        return Err(EstimateError::InvalidCounts(format!(
            "sample size must be positive (got {n})"
        )));
    }
    if !(x.is_finite() && x >= 0.0 && x <= n) {
        return Err(EstimateError::InvalidCounts(format!(
            "successes must lie in [0, {n}] (got {x})"
        )));
    }

    let p = x / n;
    let sigma = (p * (1.0 - p) / n).sqrt();
    let hw = level.z() * sigma;

    Ok(Interval::new(p, (p - hw).max(0.0), (p + hw).min(1.0)))
}

/// Normal approximation (Wald) interval
///
/// Unreliable for `n < 20`, or when `x < 10` or `n - x < 10`.
pub fn normal_approx(sample: &Sample, level: ConfidenceLevel) -> Result<Interval> {
    wald(sample.successes() as f64, sample.trials() as f64, level)
}

/// Agresti-Coull interval
///
/// Adds `z²/2` successes and `z²` trials, then applies [`wald`]. Gives on
/// average the nominal coverage; recommended for samples below ~150.
pub fn agresti_coull(sample: &Sample, level: ConfidenceLevel) -> Result<Interval> {
    let z = level.z();
    let z2 = z * z;
    wald(
        sample.successes() as f64 + z2 / 2.0,
        sample.trials() as f64 + z2,
        level,
    )
}

/// Clopper-Pearson ("exact") interval
///
/// Guarantees at least the nominal coverage and is often conservative.
/// Uses closed forms at `x = 0` and `x = n`, where the Beta quantile has a
/// degenerate shape parameter.
pub fn clopper_pearson(sample: &Sample, level: ConfidenceLevel) -> Result<Interval> {
    let half_alpha = level.half_alpha();
    let x = sample.successes() as f64;
    let n = sample.trials() as f64;

    if sample.successes() == 0 {
        let q = 1.0 - half_alpha.powf(1.0 / n);
        return Ok(Interval::new(q / 2.0, 0.0, q));
    }

    if sample.successes() == sample.trials() {
        let q = half_alpha.powf(1.0 / n);
        return Ok(Interval::new((q + 1.0) / 2.0, q, 1.0));
    }

    let lower = beta_quantile(half_alpha, x, n - x + 1.0)?;
    let upper = beta_quantile(1.0 - half_alpha, x + 1.0, n - x)?;

    Ok(Interval::new((upper + lower) / 2.0, lower, upper))
}

/// Wilson score interval
///
/// The reported estimate is the Wilson centre `(2x + z²) / 2(n + z²)`.
pub fn wilson_score(sample: &Sample, level: ConfidenceLevel) -> Result<Interval> {
    let terms = WilsonTerms::new(sample, level);
    let hw = terms.z * (terms.z2 + 4.0 * terms.x * (1.0 - terms.p)).sqrt();
    Ok(terms.interval(hw))
}

/// Wilson score interval with continuity correction
///
/// # Errors
/// Returns [`EstimateError::NegativeRadicand`] when
/// `z² - 1/n + 4x(1-p) + 4p - 2` is negative, which happens for `x = 0` or
/// `x = n` at low confidence levels.
pub fn wilson_score_cc(sample: &Sample, level: ConfidenceLevel) -> Result<Interval> {
    let terms = WilsonTerms::new(sample, level);
    let radicand =
        terms.z2 - 1.0 / terms.n + 4.0 * terms.x * (1.0 - terms.p) + (4.0 * terms.p - 2.0);

    if radicand < 0.0 {
        return Err(EstimateError::NegativeRadicand {
            method: Method::WilsonCc.label(),
            radicand,
        });
    }

    let hw = 1.0 + terms.z * radicand.sqrt();
    Ok(terms.interval(hw))
}

/// Quantities shared by both Wilson variants
struct WilsonTerms {
    x: f64,
    n: f64,
    p: f64,
    z: f64,
    z2: f64,
    mu: f64,
    denom: f64,
}

impl WilsonTerms {
    fn new(sample: &Sample, level: ConfidenceLevel) -> Self {
        let x = sample.successes() as f64;
        let n = sample.trials() as f64;
        let z = level.z();
        let z2 = z * z;

        Self {
            x,
            n,
            p: sample.proportion(),
            z,
            z2,
            mu: 2.0 * x + z2,
            denom: 2.0 * (n + z2),
        }
    }

    fn interval(&self, hw: f64) -> Interval {
        Interval::new(
            self.mu / self.denom,
            ((self.mu - hw) / self.denom).max(0.0),
            ((self.mu + hw) / self.denom).min(1.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(pct: f64) -> ConfidenceLevel {
        ConfidenceLevel::new(pct).unwrap()
    }

    fn sample(x: u64, n: u64) -> Sample {
        Sample::new(x, n).unwrap()
    }

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_normal_approx_known_case() {
        let ci = normal_approx(&sample(32, 48), level(95.0)).unwrap();

        assert_close(ci.estimate, 0.6667, 5e-5);
        let sigma = (ci.estimate * (1.0 - ci.estimate) / 48.0).sqrt();
        assert_close(ci.lower, ci.estimate - 1.959_964 * sigma, 1e-6);
        assert_close(ci.upper, ci.estimate + 1.959_964 * sigma, 1e-6);
        assert_close(ci.lower, 0.533_308_008_990_130, 1e-8);
        assert_close(ci.upper, 0.800_025_324_343_203, 1e-8);
    }

    #[test]
    fn test_normal_approx_degenerate_proportions() {
        // p = 0 and p = 1 have zero standard error
        let none = normal_approx(&sample(0, 20), level(95.0)).unwrap();
        assert_eq!(none.as_tuple(), (0.0, 0.0, 0.0));

        let all = normal_approx(&sample(20, 20), level(95.0)).unwrap();
        assert_eq!(all.as_tuple(), (1.0, 1.0, 1.0));
    }

    #[test]
    fn test_normal_approx_clamps_to_unit_interval() {
        let ci = normal_approx(&sample(1, 5), level(99.0)).unwrap();
        assert_eq!(ci.lower, 0.0);
        assert!(ci.upper < 1.0);
    }

    #[test]
    fn test_wald_rejects_invalid_counts() {
        assert!(matches!(
            wald(1.0, 0.0, level(95.0)),
            Err(EstimateError::InvalidCounts(_))
        ));
        assert!(matches!(
            wald(3.0, 2.0, level(95.0)),
            Err(EstimateError::InvalidCounts(_))
        ));
        assert!(matches!(
            wald(-1.0, 2.0, level(95.0)),
            Err(EstimateError::InvalidCounts(_))
        ));
        assert!(wald(f64::NAN, 2.0, level(95.0)).is_err());
    }

    #[test]
    fn test_agresti_coull_matches_adjusted_wald() {
        let lvl = level(95.0);
        let z = lvl.z();
        let z2 = z * z;

        let ci = agresti_coull(&sample(32, 48), lvl).unwrap();
        let expected = wald(32.0 + z2 / 2.0, 48.0 + z2, lvl).unwrap();
        assert_eq!(ci, expected);

        assert_close(ci.estimate, 0.654_316_645_055_647, 1e-8);
        assert_close(ci.lower, 0.524_854_528_695_827, 1e-8);
        assert_close(ci.upper, 0.783_778_761_415_467, 1e-8);
    }

    #[test]
    fn test_agresti_coull_clamps_lower_bound() {
        // Unclamped lower bound is slightly negative for 1/10
        let ci = agresti_coull(&sample(1, 10), level(95.0)).unwrap();
        assert_eq!(ci.lower, 0.0);
        assert_close(ci.upper, 0.425_967_737_394_832, 1e-8);
    }

    #[test]
    fn test_clopper_pearson_zero_successes() {
        let ci = clopper_pearson(&sample(0, 10), level(95.0)).unwrap();
        let q = 1.0 - 0.025_f64.powf(0.1);

        assert_eq!(ci.lower, 0.0);
        assert_close(ci.upper, q, 1e-12);
        assert_close(ci.upper, 0.3085, 1e-4);
        assert_close(ci.estimate, q / 2.0, 1e-12);
    }

    #[test]
    fn test_clopper_pearson_all_successes() {
        let ci = clopper_pearson(&sample(10, 10), level(95.0)).unwrap();
        let q = 0.025_f64.powf(0.1);

        assert_eq!(ci.upper, 1.0);
        assert_close(ci.lower, q, 1e-12);
        assert_close(ci.estimate, (q + 1.0) / 2.0, 1e-12);
    }

    #[test]
    fn test_clopper_pearson_general_case() {
        let ci = clopper_pearson(&sample(32, 48), level(95.0)).unwrap();
        assert_close(ci.lower, 0.515_891_679_553_828, 1e-9);
        assert_close(ci.upper, 0.796_040_264_419_001, 1e-9);
        assert_close(ci.estimate, 0.655_965_971_986_414, 1e-9);

        let ci = clopper_pearson(&sample(1, 10), level(95.0)).unwrap();
        assert_close(ci.lower, 0.002_528_578_544_462, 1e-9);
        assert_close(ci.upper, 0.445_016_117_028_195, 1e-9);
    }

    #[test]
    fn test_clopper_pearson_mirror_symmetry() {
        let lvl = level(99.0);
        let ci = clopper_pearson(&sample(7, 25), lvl).unwrap();
        let mirror = clopper_pearson(&sample(18, 25), lvl).unwrap();

        assert_close(mirror.lower, 1.0 - ci.upper, 1e-9);
        assert_close(mirror.upper, 1.0 - ci.lower, 1e-9);
    }

    #[test]
    fn test_wilson_score_known_case() {
        let ci = wilson_score(&sample(32, 48), level(95.0)).unwrap();
        assert_close(ci.estimate, 0.654_316_645_055_647, 1e-8);
        assert_close(ci.lower, 0.525_401_097_059_480, 1e-8);
        assert_close(ci.upper, 0.783_232_193_051_814, 1e-8);
    }

    #[test]
    fn test_wilson_estimate_is_not_raw_proportion() {
        let ci = wilson_score(&sample(5, 20), level(95.0)).unwrap();
        assert!((ci.estimate - 0.25).abs() > 0.01);
        assert_close(ci.estimate, 0.290_281_289_513_205, 1e-8);
    }

    #[test]
    fn test_wilson_score_cc_known_case() {
        let ci = wilson_score_cc(&sample(32, 48), level(95.0)).unwrap();
        assert_close(ci.estimate, 0.654_316_645_055_647, 1e-8);
        assert_close(ci.lower, 0.514_864_302_311_962, 1e-8);
        assert_close(ci.upper, 0.793_768_987_799_333, 1e-8);
    }

    #[test]
    fn test_wilson_score_cc_is_wider_than_wilson() {
        let lvl = level(95.0);
        let plain = wilson_score(&sample(5, 20), lvl).unwrap();
        let corrected = wilson_score_cc(&sample(5, 20), lvl).unwrap();
        assert_eq!(plain.estimate, corrected.estimate);
        assert!(corrected.width() > plain.width());
    }

    #[test]
    fn test_wilson_score_cc_negative_radicand() {
        // z² ≈ 1.64 at 80%, so z² - 1 - 2 < 0 for 0/1
        let result = wilson_score_cc(&sample(0, 1), level(80.0));
        match result {
            Err(EstimateError::NegativeRadicand { radicand, .. }) => assert!(radicand < 0.0),
            other => panic!("Expected NegativeRadicand, got {other:?}"),
        }
    }
}
