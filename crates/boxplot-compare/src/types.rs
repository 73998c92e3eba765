//! Comparison record types

use crate::effect::EffectMagnitude;
use crate::traits::GroupMoments;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A reported mean±SD triple
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupStats {
    pub mean: f64,
    pub sd: f64,
    pub n: usize,
}

impl GroupStats {
    pub fn new(mean: f64, sd: f64, n: usize) -> Self {
        Self { mean, sd, n }
    }
}

impl GroupMoments for GroupStats {
    fn mean(&self) -> f64 {
        self.mean
    }

    fn sd(&self) -> f64 {
        self.sd
    }

    fn sample_size(&self) -> usize {
        self.n
    }
}

/// Verdict on the direction of a difference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpretation {
    Greater,
    Less,
    SignificantCiIncludesZero,
    NotSignificant,
}

impl Interpretation {
    pub fn classify(significant: bool, ci_lower: f64, ci_upper: f64) -> Self {
        match (significant, ci_lower > 0.0, ci_upper < 0.0) {
            (true, true, _) => Self::Greater,
            (true, _, true) => Self::Less,
            (true, _, _) => Self::SignificantCiIncludesZero,
            (false, _, _) => Self::NotSignificant,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greater => "A significantly greater than B",
            Self::Less => "A significantly less than B",
            Self::SignificantCiIncludesZero => "significant but CI includes 0",
            Self::NotSignificant => "no significant difference",
        }
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Independent-groups comparison of A against B
///
/// Flat on purpose: every field maps to one column of a report row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub delta_mean: f64,
    pub sd_diff: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub confidence_level: f64,
    pub cohens_d: f64,
    pub hedges_g: f64,
    pub effect_magnitude: EffectMagnitude,
    pub p_value: f64,
    pub significant: bool,
    pub t_statistic: f64,
    pub degrees_of_freedom: i64,
    #[serde(serialize_with = "serialize_interpretation")]
    pub interpretation: Interpretation,
}

fn serialize_interpretation<S>(value: &Interpretation, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(value.as_str())
}

impl ComparisonResult {
    /// Whether the confidence interval contains `value`
    pub fn ci_contains(&self, value: f64) -> bool {
        self.ci_lower <= value && value <= self.ci_upper
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Δ={:.3} [{:.3}, {:.3}] at {:.0}%, d={:.3} ({}), p={}: {}",
            self.delta_mean,
            self.ci_lower,
            self.ci_upper,
            self.confidence_level * 100.0,
            self.cohens_d,
            self.effect_magnitude,
            self.p_value,
            self.interpretation
        )
    }
}

/// Human-readable trace of a correlated difference calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationDetails {
    pub baseline: String,
    pub intervention: String,
    pub formula: String,
}

/// Difference between a baseline and an intervention group with known correlation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DifferenceStats {
    /// intervention − baseline
    pub difference_mean: f64,
    pub difference_sd: f64,
    pub standard_error: f64,
    pub cohens_d: f64,
    /// 95% bounds from the t table
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub t_critical: f64,
    pub correlation_used: f64,
    /// (baseline, intervention)
    pub sample_sizes: (usize, usize),
    pub calculation_details: CalculationDetails,
}
