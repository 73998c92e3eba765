//! Data level classification
//!
//! The data level describes how much of a boxplot was reported:
//!
//! | Level | Meaning |
//! |---|---|
//! | -1 | incomplete, a quartile is missing |
//! | 0 | quartiles only |
//! | 1 | quartiles and both whiskers |
//! | 2 | level 1 plus at least one outlier |
//!
//! Outliers without whiskers do not raise the level: outlier positions are only
//! interpretable once the whisker bounds are known.

use crate::{BoxplotSummary, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tier of reported detail for a single summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum DataLevel {
    /// A quartile is missing
    Incomplete,
    /// Q1, Q2 and Q3 only
    QuartilesOnly,
    /// Quartiles and both whiskers
    Whiskers,
    /// Quartiles, whiskers and at least one outlier
    WhiskersAndOutliers,
}

impl DataLevel {
    /// Every level that supports estimation, lowest first
    pub const ESTIMABLE: [DataLevel; 3] = [
        DataLevel::QuartilesOnly,
        DataLevel::Whiskers,
        DataLevel::WhiskersAndOutliers,
    ];

    /// Integer code used in reports
    pub fn as_i8(self) -> i8 {
        match self {
            Self::Incomplete => -1,
            Self::QuartilesOnly => 0,
            Self::Whiskers => 1,
            Self::WhiskersAndOutliers => 2,
        }
    }

    pub fn is_complete(self) -> bool {
        self != Self::Incomplete
    }

    /// Documented error band for estimates made at this level
    pub fn precision_estimate(self) -> &'static str {
        match self {
            Self::Incomplete => "incomplete data",
            Self::QuartilesOnly => "medium (15–25% error)",
            Self::Whiskers => "high (8–15% error)",
            Self::WhiskersAndOutliers => "highest (5–10% error)",
        }
    }

    /// Name of the formula family recommended for this level
    pub fn formula_description(self) -> &'static str {
        match self {
            Self::Incomplete => "no formula (incomplete data)",
            Self::QuartilesOnly => "Wan 2014 three-number formula",
            Self::Whiskers => "Wan 2014 five-number formula",
            Self::WhiskersAndOutliers => "Wan 2014 five-number formula + outlier correction",
        }
    }
}

impl From<DataLevel> for i8 {
    fn from(level: DataLevel) -> Self {
        level.as_i8()
    }
}

impl TryFrom<i8> for DataLevel {
    type Error = Error;

    fn try_from(code: i8) -> Result<Self> {
        match code {
            -1 => Ok(Self::Incomplete),
            0 => Ok(Self::QuartilesOnly),
            1 => Ok(Self::Whiskers),
            2 => Ok(Self::WhiskersAndOutliers),
            other => Err(Error::InvalidParameter(format!(
                "Data level {other} must be one of -1, 0, 1, 2"
            ))),
        }
    }
}

impl fmt::Display for DataLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {}", self.as_i8())
    }
}

/// Classify a summary, failing when a quartile is missing
pub fn classify(summary: &BoxplotSummary) -> Result<DataLevel> {
    summary.raw_quartiles()?;
    Ok(level_from_extras(summary))
}

/// Classify a summary, reporting missing quartiles as [`DataLevel::Incomplete`]
pub fn classify_lenient(summary: &BoxplotSummary) -> DataLevel {
    if summary.raw_quartiles().is_err() {
        return DataLevel::Incomplete;
    }
    level_from_extras(summary)
}

fn level_from_extras(summary: &BoxplotSummary) -> DataLevel {
    match (summary.has_whiskers(), summary.has_outliers()) {
        (true, true) => DataLevel::WhiskersAndOutliers,
        (true, false) => DataLevel::Whiskers,
        (false, _) => DataLevel::QuartilesOnly,
    }
}
