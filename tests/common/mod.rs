//! Shared fixtures for integration tests

#![allow(dead_code)]

use boxplot_stats::prelude::*;

pub const EPSILON: f64 = 1e-10;

/// Symmetric quartiles 10 / 15 / 20
pub fn symmetric_quartiles() -> BoxplotSummary {
    BoxplotSummary::new(10.0, 15.0, 20.0)
}

/// Symmetric five-number summary 5 / 10 / 15 / 20 / 25
pub fn symmetric_five_number() -> BoxplotSummary {
    symmetric_quartiles().with_whiskers(5.0, 25.0)
}

/// Right-skewed summary with far upper outliers
pub fn skewed_with_outliers() -> BoxplotSummary {
    BoxplotSummary::builder()
        .q1(2.0)
        .q2(3.0)
        .q3(9.0)
        .lower_whisker(1.0)
        .upper_whisker(20.0)
        .upper_outliers([45.0, 60.0])
        .build()
}

/// Two-arm study with one situation missing its sample size
pub fn two_arm_study() -> Vec<GroupData> {
    vec![
        GroupData::new("Control")
            .with_situation(Situation::new("Week 0", symmetric_five_number(), 30))
            .with_situation(Situation::new("Week 6", BoxplotSummary::new(9.0, 14.0, 19.0), 30))
            .with_situation(Situation::without_sample_size(
                "Week 12",
                BoxplotSummary::new(9.0, 13.0, 18.0),
            )),
        GroupData::new("Intervention")
            .with_situation(Situation::new("Week 0", symmetric_five_number(), 32))
            .with_situation(Situation::new(
                "Week 6",
                BoxplotSummary::new(6.0, 10.0, 14.0).with_whiskers(2.0, 20.0),
                31,
            ))
            .with_situation(Situation::new(
                "Week 12",
                BoxplotSummary::new(5.0, 8.0, 12.0).with_whiskers(1.0, 19.0),
                29,
            )),
    ]
}
