//! Estimate a small two-arm study at each group's worst data level
//!
//! Run with `RUST_LOG=boxplot_batch=debug` to see skipped situations and the
//! levels chosen per group.

use anyhow::Result;
use boxplot_batch::{BatchConfig, BatchEstimator, GroupData, SituationOutcome};
use tracing_subscriber::EnvFilter;

const STUDY: &str = r#"[
    {
        "name": "Control",
        "situations": [
            {"name": "Week 0", "q1": 21.0, "q2": 25.0, "q3": 30.0,
             "lower_whisker": 14.0, "upper_whisker": 41.0, "sample_size": 42},
            {"name": "Week 6", "q1": 20.0, "q2": 24.5, "q3": 29.0, "sample_size": 40},
            {"name": "Week 12", "q1": 19.0, "q2": 24.0, "q3": 28.5}
        ]
    },
    {
        "name": "Intervention",
        "situations": [
            {"name": "Week 0", "q1": 22.0, "q2": 26.0, "q3": 31.0,
             "lower_whisker": 15.0, "upper_whisker": 40.0, "sample_size": 44},
            {"name": "Week 6", "q1": 16.0, "q2": 19.5, "q3": 24.0,
             "lower_whisker": 10.0, "upper_whisker": 33.0,
             "upper_outliers": [47.0], "sample_size": 43},
            {"name": "Week 12", "q1": 14.0, "q2": 18.0, "q3": 22.5,
             "lower_whisker": 8.0, "upper_whisker": 31.0, "sample_size": 41}
        ]
    }
]"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let groups = GroupData::list_from_json(STUDY)?;
    let config = BatchConfig::from_json(r#"{"conservative": true, "confidence_level": 0.95}"#)?;
    let report = BatchEstimator::with_config(config)?.run(&groups);

    for group in &report.groups {
        println!(
            "{} (worst level {}{})",
            group.name(),
            group.analysis.min_level.as_i8(),
            if group.analysis.conservative_strategy { ", conservative" } else { "" }
        );
        for outcome in &group.outcomes {
            match outcome {
                SituationOutcome::Estimated {
                    situation,
                    conservative_estimate,
                    result,
                    ..
                } => println!(
                    "  {situation}: {result}{}",
                    if *conservative_estimate { " *" } else { "" }
                ),
                SituationOutcome::Skipped { situation, reason } => {
                    println!("  {situation}: skipped ({reason})")
                }
            }
        }
    }

    println!("\nPrecision: {}", report.summary.precision_estimate);
    for recommendation in &report.summary.recommendations {
        println!("  - {recommendation}");
    }

    println!("\nIntervention - Control:");
    for row in report.compare_groups("Control", "Intervention")? {
        println!("  {}: {}", row.situation, row.comparison);
    }

    Ok(())
}
