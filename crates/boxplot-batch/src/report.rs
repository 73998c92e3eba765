//! Batch results

use crate::analysis::GroupAnalysis;
use boxplot_compare::{ComparisonResult, GroupComparator};
use boxplot_core::{DataLevel, Error, Result};
use boxplot_estimate::EstimationResult;
use serde::Serialize;

/// What happened to one situation
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SituationOutcome {
    Estimated {
        situation: String,
        original_level: DataLevel,
        used_level: DataLevel,
        /// Detail was dropped to match the group's worst level
        conservative_estimate: bool,
        result: EstimationResult,
    },
    Skipped {
        situation: String,
        reason: String,
    },
}

impl SituationOutcome {
    pub fn situation(&self) -> &str {
        match self {
            Self::Estimated { situation, .. } | Self::Skipped { situation, .. } => situation,
        }
    }

    pub fn result(&self) -> Option<&EstimationResult> {
        match self {
            Self::Estimated { result, .. } => Some(result),
            Self::Skipped { .. } => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}

/// Analysis and per-situation outcomes of one group, in input order
#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    pub analysis: GroupAnalysis,
    pub outcomes: Vec<SituationOutcome>,
}

impl GroupReport {
    pub fn name(&self) -> &str {
        &self.analysis.name
    }

    /// Estimated situations with their results
    pub fn estimated(&self) -> impl Iterator<Item = (&str, &EstimationResult)> + '_ {
        self.outcomes
            .iter()
            .filter_map(|o| o.result().map(|r| (o.situation(), r)))
    }

    pub fn skipped(&self) -> impl Iterator<Item = &SituationOutcome> + '_ {
        self.outcomes.iter().filter(|o| o.is_skipped())
    }

    pub fn result_for(&self, situation: &str) -> Option<&EstimationResult> {
        self.estimated()
            .find(|(name, _)| *name == situation)
            .map(|(_, result)| result)
    }
}

/// Totals and advice over the whole batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub total_groups: usize,
    pub total_situations: usize,
    pub estimated_situations: usize,
    pub skipped_situations: usize,
    pub conservative_groups: usize,
    /// Worst group level, `Incomplete` when the batch is empty
    pub overall_min_level: DataLevel,
    pub precision_estimate: &'static str,
    pub recommendations: Vec<String>,
}

impl BatchSummary {
    pub(crate) fn from_groups(groups: &[GroupReport]) -> Self {
        let total_situations = groups.iter().map(|g| g.analysis.situation_count()).sum();
        let skipped_situations = groups.iter().map(|g| g.skipped().count()).sum();
        let overall_min_level = groups
            .iter()
            .map(|g| g.analysis.min_level)
            .min()
            .unwrap_or(DataLevel::Incomplete);

        Self {
            total_groups: groups.len(),
            total_situations,
            estimated_situations: total_situations - skipped_situations,
            skipped_situations,
            conservative_groups: groups
                .iter()
                .filter(|g| g.analysis.conservative_strategy)
                .count(),
            overall_min_level,
            precision_estimate: overall_min_level.precision_estimate(),
            recommendations: groups.iter().filter_map(|g| recommendation(&g.analysis)).collect(),
        }
    }
}

fn recommendation(analysis: &GroupAnalysis) -> Option<String> {
    if !analysis.conservative_strategy {
        return None;
    }
    let names: Vec<&str> = analysis
        .lowest_level_situations()
        .map(|s| s.name.as_str())
        .collect();
    let missing = match analysis.min_level {
        DataLevel::Whiskers => "outlier",
        _ => "whisker",
    };
    Some(format!(
        "{}: adding {} data for {} would raise the group's precision",
        analysis.name,
        missing,
        names.join(", ")
    ))
}

/// Comparison of one situation present in both groups
#[derive(Debug, Clone, Serialize)]
pub struct SituationComparison {
    pub situation: String,
    /// intervention − baseline
    pub comparison: ComparisonResult,
}

/// Full output of a batch run
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub groups: Vec<GroupReport>,
    pub summary: BatchSummary,
    pub confidence_level: f64,
}

impl BatchReport {
    pub fn group(&self, name: &str) -> Option<&GroupReport> {
        self.groups.iter().find(|g| g.name() == name)
    }

    /// Compare matching situations of two groups as intervention − baseline
    ///
    /// Situations are paired by name in baseline order; a situation estimated in
    /// only one of the groups is left out.
    pub fn compare(
        &self,
        baseline: &str,
        intervention: &str,
        confidence_level: f64,
    ) -> Result<Vec<SituationComparison>> {
        let baseline_group = self.require_group(baseline)?;
        let intervention_group = self.require_group(intervention)?;
        let comparator = GroupComparator::new();

        baseline_group
            .estimated()
            .filter_map(|(name, base)| {
                intervention_group
                    .result_for(name)
                    .map(|treated| (name, base, treated))
            })
            .map(|(name, base, treated)| {
                comparator
                    .compare(treated, base, confidence_level)
                    .map(|comparison| SituationComparison {
                        situation: name.to_string(),
                        comparison,
                    })
            })
            .collect()
    }

    /// [`BatchReport::compare`] at the configured confidence level
    pub fn compare_groups(
        &self,
        baseline: &str,
        intervention: &str,
    ) -> Result<Vec<SituationComparison>> {
        self.compare(baseline, intervention, self.confidence_level)
    }

    fn require_group(&self, name: &str) -> Result<&GroupReport> {
        self.group(name)
            .ok_or_else(|| Error::InvalidParameter(format!("Unknown group: {name}")))
    }
}
