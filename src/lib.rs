//! # boxplot-stats
//!
//! Recover group means and standard deviations from published boxplot
//! summaries so the groups can enter a meta-analysis.
//!
//! The workspace is split by concern:
//!
//! - [`summary`]: summary types, data-level classification, shape assessment
//! - [`estimate`]: the tiered formulas and the single-group estimator
//! - [`compare`]: difference statistics, effect sizes and p-values
//! - [`batch`]: worst-case level estimation over groups of situations
//!
//! ```rust
//! use boxplot_stats::prelude::*;
//!
//! let treated = BoxplotSummary::new(12.0, 16.0, 20.0).with_whiskers(6.0, 27.0);
//! let control = BoxplotSummary::new(8.0, 11.0, 14.0).with_whiskers(3.0, 19.0);
//!
//! let a = estimate(&treated, 40, DataLevel::Whiskers)?;
//! let b = estimate(&control, 40, DataLevel::Whiskers)?;
//! let comparison = GroupComparator::new().compare(&a, &b, 0.95)?;
//! assert!(comparison.delta_mean > 0.0);
//! # Ok::<(), boxplot_stats::Error>(())
//! ```

pub use boxplot_batch as batch;
pub use boxplot_compare as compare;
pub use boxplot_core as summary;
pub use boxplot_estimate as estimate;

pub use boxplot_core::{Error, Result};

pub mod prelude {
    pub use boxplot_batch::{
        analyze_levels, run_batch, BatchConfig, BatchEstimator, BatchReport, GroupData, Situation,
        SituationOutcome,
    };
    pub use boxplot_compare::{
        difference_stats, ComparisonResult, DifferenceStats, GroupComparator, GroupMoments,
        GroupStats, PValueMethod,
    };
    pub use boxplot_core::{
        classify, BoxplotSummary, DataLevel, DistributionAssessment, Error, Result,
    };
    pub use boxplot_estimate::{
        estimate, estimate_with, BoxplotEstimator, EstimationResult, Method, MethodRequest,
    };
}
