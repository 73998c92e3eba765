//! Core types for boxplot summary analysis
//!
//! This crate holds the pieces every other boxplot-stats crate builds on:
//!
//! - [`BoxplotSummary`]: one group's reported quartiles, whiskers and outliers
//! - [`DataLevel`] and [`classify`]: how much of the boxplot was reported
//! - [`DistributionAssessment`] and [`assess`]: symmetry and whisker diagnostics
//! - [`Error`] and [`Result`]: the shared error type
//!
//! # Example
//!
//! ```rust
//! use boxplot_core::{classify, BoxplotSummary, DataLevel};
//!
//! let summary = BoxplotSummary::new(10.0, 15.0, 20.0).with_whiskers(5.0, 25.0);
//! assert_eq!(classify(&summary).unwrap(), DataLevel::Whiskers);
//!
//! let shape = summary.assess().unwrap();
//! assert!(shape.is_symmetric);
//! ```

pub mod assessment;
pub mod error;
pub mod level;
pub mod summary;

// Re-export core types
pub use assessment::{assess, skew_factor, DistributionAssessment, SYMMETRY_THRESHOLD};
pub use error::{Error, Result};
pub use level::{classify, classify_lenient, DataLevel};
pub use summary::{BoxplotSummary, BoxplotSummaryBuilder, Quartiles, Whiskers};
