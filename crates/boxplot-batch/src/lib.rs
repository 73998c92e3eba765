//! Worst-case level batch estimation
//!
//! A study usually reports the same group at several time points or subgroups
//! ("situations"), and not every situation carries the same amount of detail.
//! This crate classifies each situation, folds the levels of a group down to
//! its worst complete level, and estimates every situation at that level so
//! that the group's estimates share one formula.
//!
//! # Example
//!
//! ```rust
//! use boxplot_batch::{run_batch, GroupData, Situation};
//! use boxplot_core::{BoxplotSummary, DataLevel};
//!
//! let group = GroupData::new("Treatment")
//!     .with_situation(Situation::new(
//!         "Baseline",
//!         BoxplotSummary::new(10.0, 15.0, 20.0).with_whiskers(5.0, 25.0),
//!         30,
//!     ))
//!     .with_situation(Situation::new("Week 4", BoxplotSummary::new(8.0, 12.0, 16.0), 28));
//!
//! let report = run_batch(&[group]);
//! assert_eq!(report.summary.overall_min_level, DataLevel::QuartilesOnly);
//! assert_eq!(report.summary.conservative_groups, 1);
//! ```

mod analysis;
mod config;
mod input;
mod report;
mod runner;

// Re-exports
pub use analysis::{analyze_group, analyze_levels, GroupAnalysis, SituationAnalysis};
pub use config::BatchConfig;
pub use input::{GroupData, Situation};
pub use report::{BatchReport, BatchSummary, GroupReport, SituationComparison, SituationOutcome};
pub use runner::{run_batch, BatchEstimator};
