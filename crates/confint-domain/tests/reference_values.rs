//! Integration tests for confint-domain
//!
//! Reference values were computed with an arbitrary-precision Beta and normal
//! quantile implementation.

use confint_domain::{
    critical_value, summarize, ConfidenceLevel, EstimateError, Method, Sample, Sidedness,
};

fn assert_triple(method: Method, x: u64, n: u64, pct: f64, expected: (f64, f64, f64)) {
    let ci = method.evaluate(x, n, pct).unwrap();
    let (estimate, lower, upper) = ci.as_tuple();
    assert!(
        (estimate - expected.0).abs() < 1e-8
            && (lower - expected.1).abs() < 1e-8
            && (upper - expected.2).abs() < 1e-8,
        "{} for {x}/{n} at {pct}%: got {:?}, expected {:?}",
        method.as_str(),
        ci.as_tuple(),
        expected
    );
}

#[test]
fn test_critical_values() {
    let cases = [
        (90.0, Sidedness::TwoSided, 1.644_853_626_951_472),
        (95.0, Sidedness::TwoSided, 1.959_963_984_540_054),
        (99.0, Sidedness::TwoSided, 2.575_829_303_548_901),
        (95.0, Sidedness::OneSided, 1.644_853_626_951_472),
        (80.0, Sidedness::OneSided, 0.841_621_233_572_914),
    ];

    for (pct, sidedness, expected) in cases {
        let z = critical_value(pct, sidedness).unwrap();
        assert!((z - expected).abs() < 1e-8, "{pct}% {sidedness:?}: {z}");
    }
}

#[test]
fn test_reference_sample_32_of_48() {
    assert_triple(
        Method::Normal,
        32,
        48,
        95.0,
        (0.666_666_666_666_667, 0.533_308_008_990_130, 0.800_025_324_343_203),
    );
    assert_triple(
        Method::ClopperPearson,
        32,
        48,
        95.0,
        (0.655_965_971_986_414, 0.515_891_679_553_828, 0.796_040_264_419_001),
    );
    assert_triple(
        Method::AgrestiCoull,
        32,
        48,
        95.0,
        (0.654_316_645_055_647, 0.524_854_528_695_827, 0.783_778_761_415_467),
    );
    assert_triple(
        Method::Wilson,
        32,
        48,
        95.0,
        (0.654_316_645_055_647, 0.525_401_097_059_480, 0.783_232_193_051_814),
    );
    assert_triple(
        Method::WilsonCc,
        32,
        48,
        95.0,
        (0.654_316_645_055_647, 0.514_864_302_311_962, 0.793_768_987_799_333),
    );
}

#[test]
fn test_reference_sample_5_of_20() {
    assert_triple(
        Method::ClopperPearson,
        5,
        20,
        95.0,
        (0.288_808_670_404_696, 0.086_571_469_101_435, 0.491_045_871_707_958),
    );
    assert_triple(
        Method::AgrestiCoull,
        5,
        20,
        95.0,
        (0.290_281_289_513_205, 0.108_087_181_821_718, 0.472_475_397_204_692),
    );
    assert_triple(
        Method::Wilson,
        5,
        20,
        95.0,
        (0.290_281_289_513_205, 0.111_861_701_407_666, 0.468_700_877_618_744),
    );
    assert_triple(
        Method::WilsonCc,
        5,
        20,
        95.0,
        (0.290_281_289_513_205, 0.095_932_591_869_606, 0.484_629_987_156_804),
    );
}

#[test]
fn test_clopper_pearson_zero_of_ten() {
    let ci = Method::ClopperPearson.evaluate(0, 10, 95.0).unwrap();
    assert_eq!(ci.lower, 0.0);
    assert!((ci.upper - 0.308_497_107_818_761).abs() < 1e-12);
}

#[test]
fn test_degenerate_inputs() {
    for method in Method::ALL {
        assert_eq!(method.evaluate(0, 0, 95.0), Err(EstimateError::ZeroTrials));
        assert_eq!(method.evaluate(5, 0, 95.0), Err(EstimateError::ZeroTrials));
    }

    assert!(matches!(
        ConfidenceLevel::new(0.0),
        Err(EstimateError::InvalidConfidence(_))
    ));
    assert!(matches!(
        Sample::new(49, 48),
        Err(EstimateError::SuccessesExceedTrials { .. })
    ));
}

#[test]
fn test_summary_for_reference_sample() {
    let sample = Sample::new(32, 48).unwrap();
    let level = ConfidenceLevel::new(99.0).unwrap();
    let summary = summarize(sample, level, &Method::ALL).unwrap();

    assert_eq!(summary.sample, sample);
    assert_eq!(summary.level.percent(), 99.0);
    assert!((summary.point.laplace - 0.66).abs() < 1e-15);

    // Wider level than the 95% reference, so every interval is wider.
    for (method, ci) in &summary.intervals {
        let reference = method.evaluate(32, 48, 95.0).unwrap();
        assert!(ci.width() > reference.width(), "{method}");
        assert!(ci.contains(summary.point.max_likelihood), "{method}");
    }
}
