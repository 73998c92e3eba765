//! Types for estimation results

use crate::Method;
use boxplot_core::{DataLevel, DistributionAssessment, Quartiles};
use serde::Serialize;
use std::fmt;

/// Tukey inner (1.5 IQR) and outer (3 IQR) fences around the box
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TukeyFences {
    pub inner_lower: f64,
    pub inner_upper: f64,
    pub outer_lower: f64,
    pub outer_upper: f64,
}

impl TukeyFences {
    pub fn new(quartiles: Quartiles) -> Self {
        let iqr = quartiles.iqr();
        Self {
            inner_lower: quartiles.q1() - 1.5 * iqr,
            inner_upper: quartiles.q3() + 1.5 * iqr,
            outer_lower: quartiles.q1() - 3.0 * iqr,
            outer_upper: quartiles.q3() + 3.0 * iqr,
        }
    }
}

/// Outlier breakdown recorded by the level-2 formula
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutlierAnalysis {
    pub upper_outliers: usize,
    pub lower_outliers: usize,
    /// Upper outliers beyond the outer fence
    pub extreme_upper: usize,
    /// Lower outliers beyond the outer fence
    pub extreme_lower: usize,
    /// `extreme_upper - extreme_lower`
    pub skew_correction: i64,
    pub fences: TukeyFences,
}

/// Method-specific diagnostics attached to every estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodNotes {
    /// Formula as applied, including the sample size where it matters
    pub method_details: String,
    pub formula_source: &'static str,
    pub calculation_notes: &'static str,
    /// Skew factor when the three-number skew correction fired
    pub skew_correction: Option<f64>,
    pub outlier_analysis: Option<OutlierAnalysis>,
}

impl MethodNotes {
    pub fn new(
        method_details: String,
        formula_source: &'static str,
        calculation_notes: &'static str,
    ) -> Self {
        Self {
            method_details,
            formula_source,
            calculation_notes,
            skew_correction: None,
            outlier_analysis: None,
        }
    }
}

/// Raw output of one formula, before it is wrapped into a result
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaEstimate {
    pub mean: f64,
    pub sd: f64,
    pub notes: MethodNotes,
}

/// Estimated mean and SD of one group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimationResult {
    pub mean: f64,
    /// Never negative
    pub sd: f64,
    pub data_level: DataLevel,
    pub method_used: Method,
    pub sample_size: usize,
    pub distribution_assessment: DistributionAssessment,
    /// Documented error band for `data_level`
    pub precision_estimate: &'static str,
    /// Formula family recommended for `data_level`
    pub recommended_formula: &'static str,
    pub notes: MethodNotes,
}

impl EstimationResult {
    /// Flat, scalar-only projection for tabular output
    pub fn to_row(&self) -> EstimationRow {
        EstimationRow::from(self)
    }
}

impl fmt::Display for EstimationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mean={:.3}, SD={:.3} (n={}, {}, {})",
            self.mean, self.sd, self.sample_size, self.data_level, self.method_used
        )
    }
}

/// One CSV/spreadsheet row describing an estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimationRow {
    pub mean: f64,
    pub sd: f64,
    pub data_level: i8,
    pub method_used: &'static str,
    pub sample_size: usize,
    pub precision_estimate: &'static str,
    pub is_symmetric: bool,
    pub symmetry_ratio: f64,
    pub whisker_symmetry: Option<f64>,
    pub outlier_impact: usize,
    pub iqr: f64,
    pub method_details: String,
}

impl From<&EstimationResult> for EstimationRow {
    fn from(result: &EstimationResult) -> Self {
        let shape = &result.distribution_assessment;
        Self {
            mean: result.mean,
            sd: result.sd,
            data_level: result.data_level.as_i8(),
            method_used: result.method_used.name(),
            sample_size: result.sample_size,
            precision_estimate: result.precision_estimate,
            is_symmetric: shape.is_symmetric,
            symmetry_ratio: shape.symmetry_ratio,
            whisker_symmetry: shape.whisker_symmetry,
            outlier_impact: shape.outlier_impact,
            iqr: shape.iqr,
            method_details: result.notes.method_details.clone(),
        }
    }
}
