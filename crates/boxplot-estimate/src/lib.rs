//! Mean and standard deviation estimation from boxplot summaries
//!
//! Published studies often report a group as a boxplot rather than mean±SD.
//! This crate turns such a summary back into an approximate mean and SD so
//! that the study can be pooled in a meta-analysis.
//!
//! # Formulas
//!
//! Level formulas (chosen by how much of the boxplot was reported):
//! - **wan2014_three_number** (level 0): quartile mean, IQR/1.35, skew corrected
//! - **wan2014_five_number** (level 1): sample-size weighted use of the whiskers
//! - **wan2014_five_number_with_outlier_correction** (level 2): level 1 plus a
//!   Tukey outer-fence outlier correction
//!
//! Shape formulas (chosen by the distribution's symmetry):
//! - **simple**: median and IQR/1.35
//! - **wan2014**: quartile mean with large-sample SD inflation
//! - **luo2018**: whisker-weighted mean and blended SD for skewed data
//!
//! # Example
//!
//! ```rust
//! use boxplot_core::{BoxplotSummary, DataLevel};
//! use boxplot_estimate::{BoxplotEstimator, Method, MethodRequest};
//!
//! let summary = BoxplotSummary::new(10.0, 15.0, 20.0).with_whiskers(5.0, 25.0);
//! let estimator = BoxplotEstimator::new();
//!
//! let by_level = estimator.estimate(&summary, 30, DataLevel::Whiskers).unwrap();
//! assert!((by_level.mean - 15.0).abs() < 1e-12);
//!
//! let simple = estimator
//!     .estimate_with(&summary, 30, MethodRequest::Explicit(Method::Simple))
//!     .unwrap();
//! assert_eq!(simple.method_used, Method::Simple);
//! ```

mod estimator;
pub mod formulas;
mod method;
pub mod selector;
mod types;

// Re-exports
pub use estimator::BoxplotEstimator;
pub use method::{Method, MethodRequest};
pub use selector::{select, select_by_level, select_by_shape};
pub use types::{
    EstimationResult, EstimationRow, FormulaEstimate, MethodNotes, OutlierAnalysis, TukeyFences,
};

use boxplot_core::{BoxplotSummary, DataLevel, Result};

// Convenience functions
pub fn estimate(
    summary: &BoxplotSummary,
    sample_size: usize,
    level: DataLevel,
) -> Result<EstimationResult> {
    BoxplotEstimator::new().estimate(summary, sample_size, level)
}

pub fn estimate_with(
    summary: &BoxplotSummary,
    sample_size: usize,
    request: MethodRequest,
) -> Result<EstimationResult> {
    BoxplotEstimator::new().estimate_with(summary, sample_size, request)
}
