//! Distribution shape diagnostics derived from a boxplot
//!
//! These figures feed the level-0 skew correction and the shape-driven method
//! selection, and they are reported alongside every estimate.

use crate::{BoxplotSummary, Quartiles, Result, Whiskers};
use serde::Serialize;

/// A median offset from the midhinge below this fraction of the IQR is symmetric
pub const SYMMETRY_THRESHOLD: f64 = 0.1;

/// Shape diagnostics for one summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistributionAssessment {
    /// `symmetry_ratio < 0.1`; true by convention when the IQR is zero
    pub is_symmetric: bool,
    /// `|q2 - (q1 + q3) / 2| / IQR`, zero when the IQR is zero
    pub symmetry_ratio: f64,
    /// Whisker length imbalance relative to the IQR; absent without whiskers
    pub whisker_symmetry: Option<f64>,
    /// Number of outliers on both sides
    pub outlier_impact: usize,
    /// `q3 - q1`
    pub iqr: f64,
}

/// Assess the shape of a distribution from its quartiles, whiskers and outlier count
pub fn assess(
    quartiles: Quartiles,
    whiskers: Option<Whiskers>,
    outlier_impact: usize,
) -> DistributionAssessment {
    let iqr = quartiles.iqr();

    if iqr <= 0.0 {
        return DistributionAssessment {
            is_symmetric: true,
            symmetry_ratio: 0.0,
            whisker_symmetry: None,
            outlier_impact,
            iqr,
        };
    }

    let symmetry_ratio = (quartiles.q2() - quartiles.midhinge()).abs() / iqr;
    let whisker_symmetry = whiskers.map(|w| {
        let upper_length = w.upper - quartiles.q3();
        let lower_length = quartiles.q1() - w.lower;
        (upper_length - lower_length).abs() / iqr
    });

    DistributionAssessment {
        is_symmetric: symmetry_ratio < SYMMETRY_THRESHOLD,
        symmetry_ratio,
        whisker_symmetry,
        outlier_impact,
        iqr,
    }
}

/// Signed median offset, positive when the median sits above the midhinge
pub fn skew_factor(quartiles: Quartiles) -> f64 {
    let iqr = quartiles.iqr();
    if iqr > 0.0 {
        (quartiles.q2() - quartiles.midhinge()) / iqr
    } else {
        0.0
    }
}

impl BoxplotSummary {
    /// Assess this summary; fails only when quartiles are missing or misordered
    pub fn assess(&self) -> Result<DistributionAssessment> {
        let quartiles = self.quartiles()?;
        Ok(assess(quartiles, self.whiskers(), self.outlier_count()))
    }
}
