//! Special functions backing the interval estimators
//!
//! Two primitives carry all of the numerical weight:
//! - the standard-normal quantile, used for every critical value
//! - the Beta quantile, used by the Clopper-Pearson interval
//!
//! The Beta quantile is obtained by bisection on the regularized incomplete
//! beta function, which is evaluated by continued fraction (Lentz's method,
//! Numerical Recipes 2nd ed. section 6.4).

use crate::error::{EstimateError, Result};
use std::f64::consts::PI;

/// Probability below which the lower-tail branch of Acklam's approximation is used
const P_LOW: f64 = 0.02425;

/// Standard-normal quantile (inverse CDF), Acklam's rational approximation.
///
/// Relative error is below 1.15e-9 over the whole open unit interval.
///
/// # Errors
/// Returns [`EstimateError::InvalidProbability`] unless `0 < p < 1`.
pub fn normal_quantile(p: f64) -> Result<f64> {
    if !(p > 0.0 && p < 1.0) {
        return Err(EstimateError::InvalidProbability(p));
    }
    Ok(acklam(p))
}

/// Acklam's approximation for a `p` already known to lie in (0, 1).
#[allow(clippy::excessive_precision)]
pub(crate) fn acklam(p: f64) -> f64 {
    const A: [f64; 6] = [
        -3.969_683_028_665_376e1,
        2.209_460_984_245_205e2,
        -2.759_285_104_469_687e2,
        1.383_577_518_672_690e2,
        -3.066_479_806_614_716e1,
        2.506_628_277_459_239,
    ];
    const B: [f64; 5] = [
        -5.447_609_879_822_406e1,
        1.615_858_368_580_409e2,
        -1.556_989_798_598_866e2,
        6.680_131_188_771_972e1,
        -1.328_068_155_288_572e1,
    ];
    const C: [f64; 6] = [
        -7.784_894_002_430_293e-3,
        -3.223_964_580_411_365e-1,
        -2.400_758_277_161_838,
        -2.549_732_539_343_734,
        4.374_664_141_464_968,
        2.938_163_982_698_783,
    ];
    const D: [f64; 4] = [
        7.784_695_709_041_462e-3,
        3.224_671_290_700_398e-1,
        2.445_134_137_142_996,
        3.754_408_661_907_416,
    ];

    let tail = |q: f64| {
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    };

    if p < P_LOW {
        tail((-2.0 * p.ln()).sqrt())
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        -tail((-2.0 * (1.0 - p).ln()).sqrt())
    }
}

/// Log-gamma via Lanczos approximation (g=7, n=9 coefficients).
#[allow(clippy::excessive_precision)]
fn ln_gamma(x: f64) -> f64 {
    const COEFFS: [f64; 9] = [
        0.999_999_999_999_809_93,
        676.520_368_121_885_1,
        -1_259.139_216_722_402_8,
        771.323_428_777_653_13,
        -176.615_029_162_140_59,
        12.507_343_278_686_905,
        -0.138_571_095_265_720_12,
        9.984_369_578_019_571_6e-6,
        1.505_632_735_149_311_6e-7,
    ];

    if x < 0.5 {
        // Reflection formula
        PI.ln() - (PI * x).sin().abs().ln() - ln_gamma(1.0 - x)
    } else {
        let x = x - 1.0;
        let mut ag = COEFFS[0];
        for (i, &c) in COEFFS[1..].iter().enumerate() {
            ag += c / (x + i as f64 + 1.0);
        }
        let t = x + 7.5;
        0.5 * (2.0 * PI).ln() + (x + 0.5) * t.ln() - t + ag.ln()
    }
}

/// Remainder of Stirling's series, `ln Γ(x) - ((x - 0.5) ln x - x + ln √(2π))`.
///
/// Accurate to double precision for `x >= 10`.
fn stirling_remainder(x: f64) -> f64 {
    let r = 1.0 / (x * x);
    (1.0 / 12.0
        + r * (-1.0 / 360.0
            + r * (1.0 / 1260.0
                + r * (-1.0 / 1680.0
                    + r * (1.0 / 1188.0 + r * (-691.0 / 360_360.0 + r * (1.0 / 156.0)))))))
        / x
}

/// ln B(a, b)
///
/// Once a shape parameter reaches 10 the large log-gamma terms are cancelled
/// analytically, so the result keeps full relative precision for samples
/// with billions of trials.
fn ln_beta(a: f64, b: f64) -> f64 {
    const STIRLING_MIN: f64 = 10.0;
    let half_ln_2pi = 0.5 * (2.0 * PI).ln();

    let (p, q) = if a <= b { (a, b) } else { (b, a) };
    let ratio = p / (p + q);

    if p >= STIRLING_MIN {
        let corr = stirling_remainder(p) + stirling_remainder(q) - stirling_remainder(p + q);
        -0.5 * q.ln() + half_ln_2pi + corr + (p - 0.5) * ratio.ln() + q * (-ratio).ln_1p()
    } else if q >= STIRLING_MIN {
        let corr = stirling_remainder(q) - stirling_remainder(p + q);
        ln_gamma(p) + corr + p - p * (p + q).ln() + (q - 0.5) * (-ratio).ln_1p()
    } else {
        ln_gamma(p) + ln_gamma(q) - ln_gamma(p + q)
    }
}

/// Regularized incomplete beta function I_x(a, b) for `a, b > 0`.
///
/// Values of `x` outside the unit interval are clamped to the endpoints.
#[allow(clippy::many_single_char_names)]
pub fn regularized_incomplete_beta(x: f64, a: f64, b: f64) -> f64 {
    const EPS: f64 = 1e-15;
    const TINY: f64 = 1e-300;
    const MAX_ITER: usize = 300;

    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    // The continued fraction converges fastest below the mean; mirror otherwise.
    if x > (a + 1.0) / (a + b + 2.0) {
        return 1.0 - regularized_incomplete_beta(1.0 - x, b, a);
    }

    let prefactor = (a * x.ln() + b * (-x).ln_1p() - ln_beta(a, b) - a.ln()).exp();

    let qab = a + b;
    let qap = a + 1.0;
    let qam = a - 1.0;

    let mut c = 1.0_f64;
    let mut d = 1.0 - qab * x / qap;
    if d.abs() < TINY {
        d = TINY;
    }
    d = 1.0 / d;
    let mut h = d;

    for m in 1..=MAX_ITER {
        let m = m as f64;
        let m2 = 2.0 * m;

        // Even step
        let aa = m * (b - m) * x / ((qam + m2) * (a + m2));
        d = 1.0 + aa * d;
        if d.abs() < TINY {
            d = TINY;
        }
        c = 1.0 + aa / c;
        if c.abs() < TINY {
            c = TINY;
        }
        d = 1.0 / d;
        h *= d * c;

        // Odd step
        let aa = -(a + m) * (qab + m) * x / ((a + m2) * (qap + m2));
        d = 1.0 + aa * d;
        if d.abs() < TINY {
            d = TINY;
        }
        c = 1.0 + aa / c;
        if c.abs() < TINY {
            c = TINY;
        }
        d = 1.0 / d;
        let delta = d * c;
        h *= delta;

        if (delta - 1.0).abs() < EPS {
            break;
        }
    }

    prefactor * h
}

/// Quantile of the Beta(a, b) distribution.
///
/// Returns `x` such that `I_x(a, b) = p`, found by bisection on
/// [`regularized_incomplete_beta`]. The bracket is narrowed until its width
/// is within `1e-15` of its upper end or it stops shrinking, so tiny
/// quantiles keep their significant digits.
///
/// # Errors
/// Returns [`EstimateError::InvalidProbability`] unless `0 < p < 1`, and
/// [`EstimateError::InvalidCounts`] unless both shape parameters are
/// positive and finite.
pub fn beta_quantile(p: f64, a: f64, b: f64) -> Result<f64> {
    const TOL: f64 = 1e-15;
    // Enough halvings to reach the smallest subnormal from [0, 1]
    const MAX_ITER: usize = 1_100;

    if !(p > 0.0 && p < 1.0) {
        return Err(EstimateError::InvalidProbability(p));
    }
    if !(a > 0.0 && b > 0.0 && a.is_finite() && b.is_finite()) {
        return Err(EstimateError::InvalidCounts(format!(
            "Beta shape parameters must be positive (got a = {a}, b = {b})"
        )));
    }

    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;

    for _ in 0..MAX_ITER {
        let mid = 0.5 * (lo + hi);
        if mid <= lo || mid >= hi {
            break;
        }

        let cdf = regularized_incomplete_beta(mid, a, b);
        if cdf == p {
            return Ok(mid);
        }
        if cdf < p {
            lo = mid;
        } else {
            hi = mid;
        }

        if hi - lo <= TOL * hi {
            break;
        }
    }

    Ok(0.5 * (lo + hi))
}
