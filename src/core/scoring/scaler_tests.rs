use super::*;
use approx::assert_relative_eq;

fn strict_scaler() -> FeatureScaler {
    FeatureScaler::new(ScalingConfig {
        missing_statistics: MissingStatisticsPolicy::Fail,
        ..ScalingConfig::default()
    })
}

#[test]
fn test_normalize_midpoint() {
    let scaler = FeatureScaler::default();
    let mut feature = Feature::labeled("x", 5.0).with_bounds(0.0, 10.0);

    let outcome = scaler.normalize(&mut feature).unwrap();

    assert_eq!(outcome, ScaleOutcome::Applied);
    assert_relative_eq!(feature.value(), 0.5);
    assert!(feature.is_normalized());
    assert!(!feature.is_standardized());
}

#[test]
fn test_standardize_one_sigma() {
    let scaler = FeatureScaler::default();
    let mut feature = Feature::new(10.0).with_moments(8.0, 2.0);

    assert!(scaler.standardize(&mut feature).unwrap().is_applied());
    assert_relative_eq!(feature.value(), 1.0);
    assert!(feature.is_standardized());
    assert!(!feature.is_normalized());
}

#[test]
fn test_normalize_without_bounds_is_skipped() {
    let scaler = FeatureScaler::default();
    let mut feature = Feature::new(5.0);

    let outcome = scaler.normalize(&mut feature).unwrap();

    assert_eq!(outcome, ScaleOutcome::Skipped(MissingStatistic::MinObserved));
    assert_eq!(feature.value(), 5.0);
    assert!(!feature.is_normalized());
    assert_eq!(feature.representation(), Representation::Raw);
}

#[test]
fn test_normalize_with_half_the_bounds_is_skipped() {
    let scaler = FeatureScaler::default();
    let mut feature = Feature::new(5.0);
    feature.min_observed = Some(0.0);

    let outcome = scaler.normalize(&mut feature).unwrap();
    assert_eq!(outcome, ScaleOutcome::Skipped(MissingStatistic::MaxObserved));
    assert_eq!(feature.value(), 5.0);
}

#[test]
fn test_standardize_without_std_dev_is_skipped() {
    let scaler = FeatureScaler::default();
    let mut feature = Feature::new(5.0);
    feature.mean = Some(2.0);

    let outcome = scaler.standardize(&mut feature).unwrap();
    assert_eq!(outcome, ScaleOutcome::Skipped(MissingStatistic::StdDev));
    assert!(!feature.is_standardized());
}

#[test]
fn test_fail_policy_reports_missing_statistic() {
    let mut feature = Feature::labeled("petal_width", 5.0);

    let err = strict_scaler().standardize(&mut feature).unwrap_err();

    match err {
        RankscaleError::MissingStatistics {
            operation,
            statistic,
            feature: label,
        } => {
            assert_eq!(operation, "standardize");
            assert_eq!(statistic, "mean");
            assert_eq!(label, "petal_width");
        }
        other => panic!("Expected MissingStatistics, got {other:?}"),
    }
    assert_eq!(feature.value(), 5.0);
}

#[test]
fn test_degenerate_bounds_fail() {
    let scaler = FeatureScaler::default();
    let mut feature = Feature::new(3.0).with_bounds(3.0, 3.0);

    let err = scaler.normalize(&mut feature).unwrap_err();

    assert!(matches!(
        err,
        RankscaleError::DegenerateRange {
            operation: "normalize",
            ..
        }
    ));
    assert_eq!(feature.value(), 3.0);
    assert!(!feature.is_normalized());
    assert!(!feature.value().is_nan());
}

#[test]
fn test_zero_std_dev_fails() {
    let scaler = FeatureScaler::default();
    let mut feature = Feature::new(4.0).with_moments(4.0, 0.0);

    let err = scaler.standardize(&mut feature).unwrap_err();
    assert!(matches!(err, RankscaleError::DegenerateRange { .. }));
    assert_eq!(feature.value(), 4.0);
}

#[test]
fn test_epsilon_widens_degenerate_band() {
    let scaler = FeatureScaler::new(ScalingConfig {
        degenerate_epsilon: 1e-9,
        ..ScalingConfig::default()
    });
    let mut feature = Feature::new(1.0).with_bounds(1.0, 1.0 + 1e-12);

    assert!(scaler.normalize(&mut feature).is_err());

    // Default epsilon only rejects an exact zero range
    let mut feature = Feature::new(1.0).with_bounds(1.0, 1.0 + 1e-12);
    assert!(FeatureScaler::default().normalize(&mut feature).is_ok());
}

#[test]
fn test_non_finite_value_rejected() {
    let scaler = FeatureScaler::default();
    let mut feature = Feature::new(f64::NAN).with_bounds(0.0, 1.0);

    let err = scaler.normalize(&mut feature).unwrap_err();
    assert!(matches!(err, RankscaleError::NonFinite { .. }));
    assert_eq!(feature.representation(), Representation::Raw);

    let mut feature = Feature::new(1.0).with_moments(f64::INFINITY, 1.0);
    assert!(matches!(
        scaler.standardize(&mut feature),
        Err(RankscaleError::NonFinite { .. })
    ));
}

#[test]
fn test_last_scaling_wins() {
    let scaler = FeatureScaler::default();
    let mut feature = Feature::new(10.0)
        .with_bounds(0.0, 20.0)
        .with_moments(8.0, 2.0);

    scaler.standardize(&mut feature).unwrap();
    scaler.normalize(&mut feature).unwrap();

    assert!(feature.is_normalized());
    assert!(!feature.is_standardized());
    // The normalization saw the standardized value 1.0, not the raw 10.0
    assert_relative_eq!(feature.value(), 0.05);

    scaler.standardize(&mut feature).unwrap();
    assert!(feature.is_standardized());
    assert!(!feature.is_normalized());
}

#[test]
fn test_reset_before_switching_schemes() {
    let scaler = FeatureScaler::default();
    let mut feature = Feature::new(10.0)
        .with_bounds(0.0, 20.0)
        .with_moments(8.0, 2.0);

    scaler.standardize(&mut feature).unwrap();
    feature.reset();
    scaler.normalize(&mut feature).unwrap();

    assert_relative_eq!(feature.value(), 0.5);
}

#[test]
fn test_normalize_std_dev_uses_caller_bounds() {
    let scaler = FeatureScaler::default();
    let mut feature = Feature::new(7.0)
        .with_bounds(100.0, 200.0)
        .with_moments(6.0, 3.0);

    let outcome = scaler.normalize_std_dev(&mut feature, 1.0, 5.0).unwrap();

    assert!(outcome.is_applied());
    assert_relative_eq!(feature.std_dev.unwrap(), 0.5);
    assert_eq!(feature.value(), 7.0);
    assert_eq!(feature.representation(), Representation::Raw);
}

#[test]
fn test_normalize_std_dev_without_std_dev_is_skipped() {
    let scaler = FeatureScaler::default();
    let mut feature = Feature::new(7.0);

    let outcome = scaler.normalize_std_dev(&mut feature, 0.0, 1.0).unwrap();
    assert_eq!(outcome, ScaleOutcome::Skipped(MissingStatistic::StdDev));
    assert!(feature.std_dev.is_none());
}

#[test]
fn test_normalize_std_dev_degenerate_bounds() {
    let scaler = FeatureScaler::default();
    let mut feature = Feature::new(0.0).with_moments(0.0, 2.0);

    assert!(scaler.normalize_std_dev(&mut feature, 2.0, 2.0).is_err());
    assert_eq!(feature.std_dev, Some(2.0));
}

#[test]
fn test_apply_uses_configured_scheme() {
    let scaler = FeatureScaler::new(ScalingConfig {
        scheme: ScalingScheme::ZScore,
        ..ScalingConfig::default()
    });
    let mut feature = Feature::new(10.0)
        .with_bounds(0.0, 20.0)
        .with_moments(8.0, 2.0);

    scaler.apply(&mut feature).unwrap();
    assert!(feature.is_standardized());

    feature.reset();
    scaler.apply_scheme(&mut feature, ScalingScheme::MinMax).unwrap();
    assert!(feature.is_normalized());
}

#[test]
fn test_rescale_std_devs_across_features() {
    let scaler = FeatureScaler::default();
    let mut features = vec![
        Feature::labeled("a", 0.0).with_moments(0.0, 1.0),
        Feature::labeled("b", 0.0).with_moments(0.0, 3.0),
        Feature::labeled("c", 0.0).with_moments(0.0, 5.0),
        Feature::labeled("d", 0.0),
    ];

    let rescaled = scaler.rescale_std_devs(&mut features).unwrap();

    assert_eq!(rescaled, 3);
    assert_relative_eq!(features[0].std_dev.unwrap(), 0.0);
    assert_relative_eq!(features[1].std_dev.unwrap(), 0.5);
    assert_relative_eq!(features[2].std_dev.unwrap(), 1.0);
    assert!(features[3].std_dev.is_none());
    for feature in &features[..3] {
        assert_eq!(feature.sum_std_dev, Some(9.0));
    }
    assert!(features[3].sum_std_dev.is_none());
}

#[test]
fn test_rescale_std_devs_overflowing_sum_leaves_features_untouched() {
    let scaler = FeatureScaler::default();
    let mut features = vec![
        Feature::labeled("a", 0.0).with_moments(0.0, f64::MAX),
        Feature::labeled("b", 0.0).with_moments(0.0, f64::MAX),
        Feature::labeled("c", 0.0).with_moments(0.0, 1.0),
    ];

    let err = scaler.rescale_std_devs(&mut features).unwrap_err();

    assert!(matches!(err, RankscaleError::NonFinite { .. }));
    assert_eq!(features[0].std_dev, Some(f64::MAX));
    assert_eq!(features[2].std_dev, Some(1.0));
    assert!(features.iter().all(|f| f.sum_std_dev.is_none()));
}

#[test]
fn test_rescale_std_devs_all_equal_leaves_features_untouched() {
    let scaler = FeatureScaler::default();
    let mut features = vec![
        Feature::new(0.0).with_moments(0.0, 2.0),
        Feature::new(0.0).with_moments(0.0, 2.0),
    ];

    assert!(scaler.rescale_std_devs(&mut features).is_err());
    assert!(features.iter().all(|f| f.std_dev == Some(2.0)));
    assert!(features.iter().all(|f| f.sum_std_dev.is_none()));
}

#[test]
fn test_rescale_std_devs_fail_policy() {
    let mut features = vec![
        Feature::new(0.0).with_moments(0.0, 2.0),
        Feature::new(0.0),
    ];

    let err = strict_scaler().rescale_std_devs(&mut features).unwrap_err();
    assert!(err.is_missing_statistics());
    assert_eq!(features[0].std_dev, Some(2.0));
}

#[test]
fn test_rescale_std_devs_empty() {
    assert_eq!(FeatureScaler::default().rescale_std_devs(&mut []).unwrap(), 0);
}

#[test]
fn test_missing_statistic_names() {
    assert_eq!(MissingStatistic::MinObserved.to_string(), "min_observed");
    assert_eq!(MissingStatistic::StdDev.as_str(), "std_dev");
}
