//! Single-group estimator
//!
//! Validation, level classification, method selection and formula application
//! for one boxplot summary. The estimator holds no state beyond its default
//! request, so repeated calls on the same input are bit-identical.

use crate::formulas::{self, FormulaInput};
use crate::selector::select;
use crate::types::{EstimationResult, FormulaEstimate};
use crate::MethodRequest;
use boxplot_core::{assess, classify, BoxplotSummary, DataLevel, Error, Result};
use tracing::{debug, instrument};

/// Estimates a group's mean and SD from its boxplot summary
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxplotEstimator {
    request: MethodRequest,
}

impl BoxplotEstimator {
    /// Create an estimator using shape-driven selection by default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request used by [`BoxplotEstimator::convert`]
    pub fn with_request(mut self, request: MethodRequest) -> Self {
        self.request = request;
        self
    }

    /// The request [`BoxplotEstimator::convert`] uses
    pub fn request(&self) -> MethodRequest {
        self.request
    }

    /// Estimate with this estimator's default request
    pub fn convert(
        &self,
        summary: &BoxplotSummary,
        sample_size: usize,
    ) -> Result<EstimationResult> {
        self.estimate_with(summary, sample_size, self.request)
    }

    /// Estimate with the level formula for `level`
    ///
    /// Fields above `level` are ignored, so the reported `data_level` is the
    /// lower of `level` and what the summary actually holds. Asking for a level
    /// the data cannot support falls back to the formula of the classified level.
    #[instrument(skip_all, fields(n = sample_size, level = level.as_i8()))]
    pub fn estimate(
        &self,
        summary: &BoxplotSummary,
        sample_size: usize,
        level: DataLevel,
    ) -> Result<EstimationResult> {
        if !level.is_complete() {
            return Err(Error::InvalidParameter(
                "cannot estimate at the incomplete data level".to_string(),
            ));
        }
        let restricted = summary.restricted_to(level);
        self.run(&restricted, sample_size, MethodRequest::ByLevel)
    }

    /// Estimate with an explicit, shape-driven or level-driven method request
    #[instrument(skip_all, fields(n = sample_size, request = %request))]
    pub fn estimate_with(
        &self,
        summary: &BoxplotSummary,
        sample_size: usize,
        request: MethodRequest,
    ) -> Result<EstimationResult> {
        self.run(summary, sample_size, request)
    }

    fn run(
        &self,
        summary: &BoxplotSummary,
        sample_size: usize,
        request: MethodRequest,
    ) -> Result<EstimationResult> {
        if sample_size == 0 {
            return Err(Error::invalid_sample_size(sample_size));
        }

        let quartiles = summary.validate()?;
        let data_level = classify(summary)?;
        let whiskers = summary.whiskers();
        let assessment = assess(quartiles, whiskers, summary.outlier_count());
        let method = select(data_level, &assessment, sample_size, request);

        debug!(
            method = method.name(),
            level = data_level.as_i8(),
            symmetry_ratio = assessment.symmetry_ratio,
            "selected estimation formula"
        );

        let input = FormulaInput {
            quartiles,
            whiskers,
            upper_outliers: summary.upper_outliers(),
            lower_outliers: summary.lower_outliers(),
            sample_size,
        };
        let FormulaEstimate { mean, sd, notes } = formulas::apply(method, &input);

        if let Some(factor) = notes.skew_correction {
            debug!(skew_factor = factor, "applied three-number skew correction");
        }
        if let Some(analysis) = &notes.outlier_analysis {
            if analysis.skew_correction != 0 {
                debug!(
                    outlier_skew = analysis.skew_correction,
                    "applied outer-fence outlier correction"
                );
            }
        }

        if !(mean.is_finite() && sd.is_finite()) {
            return Err(Error::Computation(format!(
                "{} overflowed: mean {mean}, sd {sd}",
                method.name()
            )));
        }

        Ok(EstimationResult {
            mean,
            // Reversed whiskers can push the range formulas negative
            sd: sd.max(0.0),
            data_level,
            method_used: method,
            sample_size,
            distribution_assessment: assessment,
            precision_estimate: data_level.precision_estimate(),
            recommended_formula: data_level.formula_description(),
            notes,
        })
    }
}
