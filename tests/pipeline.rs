//! End-to-end estimation and comparison

mod common;

use approx::assert_abs_diff_eq;
use boxplot_stats::prelude::*;
use common::*;

#[test]
fn quartile_only_reference_values() {
    let result = estimate(&symmetric_quartiles(), 30, DataLevel::QuartilesOnly).unwrap();

    assert_eq!(result.data_level, DataLevel::QuartilesOnly);
    assert_eq!(result.method_used, Method::Wan2014ThreeNumber);
    assert_abs_diff_eq!(result.mean, 15.0, epsilon = EPSILON);
    assert_abs_diff_eq!(result.sd, 10.0 / 1.35, epsilon = EPSILON);
    assert!(result.notes.skew_correction.is_none());
    assert!(result.distribution_assessment.is_symmetric);
}

#[test]
fn five_number_mid_sample_reference_values() {
    let result = estimate(&symmetric_five_number(), 30, DataLevel::Whiskers).unwrap();

    assert_eq!(result.data_level, DataLevel::Whiskers);
    assert_eq!(result.method_used, Method::Wan2014FiveNumber);
    assert_abs_diff_eq!(result.mean, 15.0, epsilon = EPSILON);
    assert_abs_diff_eq!(result.sd, 20.0 / 3.7, epsilon = EPSILON);
    assert_eq!(result.precision_estimate, DataLevel::Whiskers.precision_estimate());
}

#[test]
fn zero_iqr_gives_zero_sd() {
    let flat = BoxplotSummary::new(7.0, 7.0, 7.0);

    let level0 = estimate(&flat, 20, DataLevel::QuartilesOnly).unwrap();
    assert_eq!(level0.sd, 0.0);
    assert!(level0.distribution_assessment.is_symmetric);

    let simple = estimate_with(&flat, 20, MethodRequest::Explicit(Method::Simple)).unwrap();
    assert_eq!(simple.sd, 0.0);
    assert_eq!(simple.mean, 7.0);
    assert!(simple.distribution_assessment.is_symmetric);
}

#[test]
fn classification_round_trip() {
    let quartiles = symmetric_quartiles();
    let whiskers = quartiles.clone().with_whiskers(5.0, 25.0);
    let outliers = whiskers.clone().with_outliers(vec![-10.0], vec![40.0]);

    assert_eq!(classify(&quartiles).unwrap(), DataLevel::QuartilesOnly);
    assert_eq!(classify(&whiskers).unwrap(), DataLevel::Whiskers);
    assert_eq!(classify(&outliers).unwrap(), DataLevel::WhiskersAndOutliers);

    let outliers_only = quartiles.with_outliers(vec![], vec![40.0]);
    assert_eq!(classify(&outliers_only).unwrap(), DataLevel::QuartilesOnly);
}

#[test]
fn explicit_simple_ignores_skew_and_outliers() {
    let summary = skewed_with_outliers();
    let result = estimate_with(&summary, 40, MethodRequest::Explicit(Method::Simple)).unwrap();

    assert_eq!(result.method_used, Method::Simple);
    assert_eq!(result.mean, 3.0);
    assert_abs_diff_eq!(result.sd, 7.0 / 1.35, epsilon = EPSILON);
    assert!(result.notes.outlier_analysis.is_none());
    assert_eq!(result.data_level, DataLevel::WhiskersAndOutliers);
}

#[test]
fn auto_selection_on_skewed_data_avoids_simple() {
    let result = estimate_with(&skewed_with_outliers(), 40, MethodRequest::Auto).unwrap();
    assert_ne!(result.method_used, Method::Simple);
    assert!(!result.distribution_assessment.is_symmetric);
}

#[test]
fn estimation_is_idempotent() {
    let summary = skewed_with_outliers();
    for request in [
        MethodRequest::Auto,
        MethodRequest::ByLevel,
        MethodRequest::Explicit(Method::Luo2018),
    ] {
        let first = estimate_with(&summary, 18, request).unwrap();
        let second = estimate_with(&summary, 18, request).unwrap();
        assert_eq!(first.mean.to_bits(), second.mean.to_bits());
        assert_eq!(first.sd.to_bits(), second.sd.to_bits());
        assert_eq!(first, second);
    }
}

#[test]
fn incomplete_summary_is_rejected() {
    let summary = BoxplotSummary::builder().q1(1.0).q3(3.0).build();
    let err = estimate(&summary, 10, DataLevel::QuartilesOnly).unwrap_err();
    assert!(err.is_incomplete());
    assert_eq!(err.to_string(), "Incomplete data: missing q2");
}

#[test]
fn estimated_groups_feed_the_comparator() {
    let treated = BoxplotSummary::new(14.0, 19.0, 24.0).with_whiskers(9.0, 29.0);
    let control = symmetric_five_number();

    let a = estimate(&treated, 30, DataLevel::Whiskers).unwrap();
    let b = estimate(&control, 30, DataLevel::Whiskers).unwrap();
    let comparison = GroupComparator::new().compare(&a, &b, 0.95).unwrap();

    assert_abs_diff_eq!(comparison.delta_mean, 4.0, epsilon = EPSILON);
    assert_eq!(comparison.degrees_of_freedom, 58);
    assert!(comparison.ci_lower < comparison.delta_mean);
    assert!(comparison.ci_upper > comparison.delta_mean);

    let paired = difference_stats(&b, &a, 0.5).unwrap();
    assert_abs_diff_eq!(paired.difference_mean, 4.0, epsilon = EPSILON);
    assert!(paired.standard_error < comparison.sd_diff);
}

#[test]
fn reported_and_estimated_groups_mix() {
    let estimated = estimate(&symmetric_quartiles(), 30, DataLevel::QuartilesOnly).unwrap();
    let reported = GroupStats::new(12.0, 6.0, 28);

    let comparison = GroupComparator::new().compare(&reported, &estimated, 0.90).unwrap();
    assert_abs_diff_eq!(comparison.delta_mean, -3.0, epsilon = EPSILON);
    assert_eq!(comparison.confidence_level, 0.90);
}

#[test]
fn results_write_as_csv_rows() {
    let results = [
        estimate(&symmetric_quartiles(), 30, DataLevel::QuartilesOnly).unwrap(),
        estimate(&symmetric_five_number(), 30, DataLevel::Whiskers).unwrap(),
    ];

    let mut writer = csv::Writer::from_writer(Vec::new());
    for result in &results {
        writer.serialize(result.to_row()).unwrap();
    }
    let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(text.contains("wan2014_three_number"));
    assert!(text.contains("wan2014_five_number"));
}

#[test]
fn results_serialize_to_json() {
    let result = estimate(&symmetric_five_number(), 30, DataLevel::Whiskers).unwrap();
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["data_level"], 1);
    assert_eq!(value["method_used"], "wan2014_five_number");
    assert_eq!(value["sample_size"], 30);
    assert_eq!(value["distribution_assessment"]["is_symmetric"], true);
}
