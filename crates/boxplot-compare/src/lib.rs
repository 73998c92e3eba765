//! Difference statistics between groups estimated from boxplots
//!
//! Two paths are provided and they are not interchangeable:
//!
//! - [`GroupComparator::compare`] treats A and B as independent, reports A − B
//!   with a z-based interval, effect sizes and a p-value.
//! - [`difference_stats`] reports intervention − baseline for groups with a
//!   known correlation and uses a t-table interval at 95%.
//!
//! Anything implementing [`GroupMoments`] can be compared, including
//! [`EstimationResult`](boxplot_estimate::EstimationResult) and plain
//! [`GroupStats`] triples.
//!
//! # Example
//!
//! ```rust
//! use boxplot_compare::{GroupComparator, GroupStats};
//!
//! let treated = GroupStats::new(15.0, 5.405, 30);
//! let control = GroupStats::new(10.0, 5.0, 30);
//!
//! let result = GroupComparator::new().compare(&treated, &control, 0.95).unwrap();
//! assert!(result.significant);
//! assert_eq!(result.interpretation.to_string(), "A significantly greater than B");
//! ```

mod comparator;
pub mod critical;
pub mod effect;
mod paired;
mod p_value;
mod traits;
mod types;

// Re-exports
pub use comparator::GroupComparator;
pub use critical::{t_critical, z_score};
pub use effect::EffectMagnitude;
pub use p_value::{banded_p_value, PValueMethod};
pub use paired::{difference_stats, DEFAULT_CORRELATION};
pub use traits::GroupMoments;
pub use types::{CalculationDetails, ComparisonResult, DifferenceStats, GroupStats, Interpretation};

#[cfg(feature = "exact-p-values")]
pub use p_value::student_t_p_value;

use boxplot_core::Result;

/// Compare A against B with the default banded p-values
pub fn compare<A, B>(a: &A, b: &B, confidence_level: f64) -> Result<ComparisonResult>
where
    A: GroupMoments + ?Sized,
    B: GroupMoments + ?Sized,
{
    GroupComparator::new().compare(a, b, confidence_level)
}
