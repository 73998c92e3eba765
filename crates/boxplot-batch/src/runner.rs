//! Batch estimation over groups of situations

use crate::analysis::{analyze_group, GroupAnalysis};
use crate::config::BatchConfig;
use crate::input::{GroupData, Situation};
use crate::report::{BatchReport, BatchSummary, GroupReport, SituationOutcome};
use boxplot_core::{Error, Result};
use boxplot_estimate::BoxplotEstimator;
use tracing::{debug, instrument, warn};

/// Runs the estimator over every situation of every group
///
/// A failing situation is recorded as skipped with its reason; the batch
/// itself never fails once the config is valid.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchEstimator {
    config: BatchConfig,
}

impl BatchEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a config, rejecting an invalid confidence level
    pub fn with_config(config: BatchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    #[instrument(skip_all, fields(groups = groups.len(), conservative = self.config.conservative))]
    pub fn run(&self, groups: &[GroupData]) -> BatchReport {
        let groups: Vec<GroupReport> = groups.iter().map(|g| self.run_group(g)).collect();
        let summary = BatchSummary::from_groups(&groups);

        debug!(
            estimated = summary.estimated_situations,
            skipped = summary.skipped_situations,
            overall_min_level = summary.overall_min_level.as_i8(),
            "Batch complete"
        );

        BatchReport {
            groups,
            summary,
            confidence_level: self.config.confidence_level,
        }
    }

    fn run_group(&self, group: &GroupData) -> GroupReport {
        let analysis = analyze_group(group);
        debug!(
            group = %analysis.name,
            min_level = analysis.min_level.as_i8(),
            conservative = analysis.conservative_strategy,
            "Analyzed group"
        );

        let outcomes = self.estimate_situations(&group.situations, &analysis);
        GroupReport { analysis, outcomes }
    }

    #[cfg(feature = "parallel")]
    fn estimate_situations(
        &self,
        situations: &[Situation],
        analysis: &GroupAnalysis,
    ) -> Vec<SituationOutcome> {
        use rayon::prelude::*;

        if self.config.parallel {
            situations
                .par_iter()
                .map(|s| self.estimate_situation(s, analysis))
                .collect()
        } else {
            situations
                .iter()
                .map(|s| self.estimate_situation(s, analysis))
                .collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn estimate_situations(
        &self,
        situations: &[Situation],
        analysis: &GroupAnalysis,
    ) -> Vec<SituationOutcome> {
        situations
            .iter()
            .map(|s| self.estimate_situation(s, analysis))
            .collect()
    }

    fn estimate_situation(
        &self,
        situation: &Situation,
        analysis: &GroupAnalysis,
    ) -> SituationOutcome {
        let original_level = situation.data_level();
        let skip = |reason: String| {
            warn!(
                group = %analysis.name,
                situation = %situation.name,
                %reason,
                "Skipping situation"
            );
            SituationOutcome::Skipped {
                situation: situation.name.clone(),
                reason,
            }
        };

        let Some(sample_size) = situation.sample_size else {
            return skip("missing sample size".to_string());
        };
        if let Err(e) = situation.validate() {
            return skip(match e {
                Error::IncompleteData { missing } => format!("missing {}", missing.join(", ")),
                other => other.to_string(),
            });
        }

        let target = if self.config.conservative {
            analysis.min_level
        } else {
            original_level
        };
        let summary = situation.summary.restricted_to(target);

        match BoxplotEstimator::new().estimate_with(&summary, sample_size, self.config.method) {
            Ok(result) => SituationOutcome::Estimated {
                situation: situation.name.clone(),
                original_level,
                used_level: result.data_level,
                conservative_estimate: original_level > result.data_level,
                result,
            },
            Err(e) => skip(e.to_string()),
        }
    }
}

/// Run a batch with the default config
pub fn run_batch(groups: &[GroupData]) -> BatchReport {
    BatchEstimator::new().run(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxplot_core::{BoxplotSummary, DataLevel};
    use boxplot_estimate::{Method, MethodRequest};

    fn treatment() -> GroupData {
        GroupData::new("Treatment")
            .with_situation(Situation::new(
                "Baseline",
                BoxplotSummary::new(10.0, 15.0, 20.0)
                    .with_whiskers(5.0, 25.0)
                    .with_outliers(vec![], vec![40.0]),
                30,
            ))
            .with_situation(Situation::new("Week 4", BoxplotSummary::new(8.0, 12.0, 16.0), 28))
            .with_situation(Situation::without_sample_size(
                "Week 8",
                BoxplotSummary::new(7.0, 10.0, 13.0),
            ))
    }

    #[test]
    fn test_conservative_run_uses_worst_level() {
        let report = run_batch(&[treatment()]);
        let group = &report.groups[0];
        assert_eq!(group.outcomes.len(), 3);

        match &group.outcomes[0] {
            SituationOutcome::Estimated {
                original_level,
                used_level,
                conservative_estimate,
                result,
                ..
            } => {
                assert_eq!(*original_level, DataLevel::WhiskersAndOutliers);
                assert_eq!(*used_level, DataLevel::QuartilesOnly);
                assert!(*conservative_estimate);
                assert_eq!(result.method_used, Method::Wan2014ThreeNumber);
            }
            other => panic!("expected an estimate, got {other:?}"),
        }

        match &group.outcomes[2] {
            SituationOutcome::Skipped { situation, reason } => {
                assert_eq!(situation, "Week 8");
                assert_eq!(reason, "missing sample size");
            }
            other => panic!("expected a skip, got {other:?}"),
        }
    }

    #[test]
    fn test_non_conservative_run_keeps_detail() {
        let estimator =
            BatchEstimator::with_config(BatchConfig::new().with_conservative(false)).unwrap();
        let report = estimator.run(&[treatment()]);
        let result = report.groups[0].result_for("Baseline").unwrap();
        assert_eq!(result.data_level, DataLevel::WhiskersAndOutliers);
        assert_eq!(result.method_used, Method::Wan2014FiveNumberOutlierCorrected);
    }

    #[test]
    fn test_invalid_situation_is_skipped_not_fatal() {
        let group = GroupData::new("Broken")
            .with_situation(Situation::new("Reversed", BoxplotSummary::new(20.0, 15.0, 10.0), 30))
            .with_situation(Situation::new("Zero n", BoxplotSummary::new(1.0, 2.0, 3.0), 0))
            .with_situation(Situation::new("Fine", BoxplotSummary::new(1.0, 2.0, 3.0), 12));
        let report = run_batch(&[group]);
        let group = &report.groups[0];

        assert_eq!(group.skipped().count(), 2);
        assert_eq!(group.estimated().count(), 1);
        assert!(group.result_for("Fine").is_some());
        assert_eq!(report.summary.skipped_situations, 2);
    }

    #[test]
    fn test_configured_request_is_used() {
        let config = BatchConfig::new()
            .with_conservative(false)
            .with_method(MethodRequest::Explicit(Method::Simple));
        let report = BatchEstimator::with_config(config).unwrap().run(&[treatment()]);
        let result = report.groups[0].result_for("Week 4").unwrap();
        assert_eq!(result.method_used, Method::Simple);
        assert_eq!(result.mean, 12.0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = BatchConfig::new().with_confidence_level(0.0);
        assert!(BatchEstimator::with_config(config).is_err());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let groups = vec![treatment(), treatment()];
        let sequential = run_batch(&groups);
        let parallel = BatchEstimator::with_config(BatchConfig::new().with_parallel(true))
            .unwrap()
            .run(&groups);

        for (a, b) in sequential.groups.iter().zip(&parallel.groups) {
            let names_a: Vec<_> = a.outcomes.iter().map(|o| o.situation()).collect();
            let names_b: Vec<_> = b.outcomes.iter().map(|o| o.situation()).collect();
            assert_eq!(names_a, names_b);
            for ((_, ra), (_, rb)) in a.estimated().zip(b.estimated()) {
                assert_eq!(ra.mean, rb.mean);
                assert_eq!(ra.sd, rb.sd);
            }
        }
    }

    #[test]
    fn test_invalid_situation_does_not_lower_group_level() {
        let group = GroupData::new("Mixed")
            .with_situation(Situation::new("Bad", BoxplotSummary::new(20.0, 15.0, 10.0), 30))
            .with_situation(Situation::new(
                "Good",
                BoxplotSummary::new(10.0, 15.0, 20.0).with_whiskers(5.0, 25.0),
                30,
            ));
        let report = run_batch(&[group]);
        let group = &report.groups[0];

        assert_eq!(group.analysis.min_level, DataLevel::Whiskers);
        assert!(!group.analysis.conservative_strategy);

        match &group.outcomes[0] {
            SituationOutcome::Skipped { reason, .. } => assert!(reason.contains("ordering")),
            other => panic!("expected a skip, got {other:?}"),
        }
        let good = group.result_for("Good").unwrap();
        assert_eq!(good.data_level, DataLevel::Whiskers);
        assert_eq!(good.method_used, Method::Wan2014FiveNumber);
    }

    #[test]
    fn test_zero_sample_size_is_skipped_with_reason() {
        let group = GroupData::new("Arm")
            .with_situation(Situation::new("Empty", BoxplotSummary::new(1.0, 2.0, 3.0), 0));
        let report = run_batch(&[group]);
        match &report.groups[0].outcomes[0] {
            SituationOutcome::Skipped { reason, .. } => {
                assert!(reason.contains("Sample size must be positive"))
            }
            other => panic!("expected a skip, got {other:?}"),
        }
        assert_eq!(report.groups[0].analysis.min_level, DataLevel::Incomplete);
    }
}
