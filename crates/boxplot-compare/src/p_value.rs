//! p-value policies
//!
//! The default is a coarse banded lookup on |t|. The exact Student-t tail
//! changes reported values and needs the `exact-p-values` feature.

use boxplot_core::Result;
use serde::{Deserialize, Serialize};

/// How a t statistic is turned into a p-value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PValueMethod {
    /// Banded lookup: 0.0001, 0.01, 0.05, 0.1 or 0.2
    #[default]
    Banded,
    /// Two-sided Student-t tail probability
    #[cfg(feature = "exact-p-values")]
    StudentT,
}

impl PValueMethod {
    /// p-value for `t_statistic` with `df` degrees of freedom
    ///
    /// `df <= 0` and `t = 0` give 1.0 under every policy.
    pub fn p_value(self, t_statistic: f64, df: i64) -> Result<f64> {
        match self {
            Self::Banded => Ok(banded_p_value(t_statistic, df)),
            #[cfg(feature = "exact-p-values")]
            Self::StudentT => student_t_p_value(t_statistic, df),
        }
    }
}

/// Coarse p-value bands keyed on |t|
pub fn banded_p_value(t_statistic: f64, df: i64) -> f64 {
    if df <= 0 {
        return 1.0;
    }
    let abs_t = t_statistic.abs();
    if abs_t == 0.0 {
        1.0
    } else if abs_t > 4.0 {
        0.0001
    } else if abs_t > 3.0 {
        0.01
    } else if abs_t > 2.0 {
        0.05
    } else if abs_t > 1.5 {
        0.1
    } else {
        0.2
    }
}

/// Exact two-sided tail of the Student-t distribution
#[cfg(feature = "exact-p-values")]
pub fn student_t_p_value(t_statistic: f64, df: i64) -> Result<f64> {
    use boxplot_core::Error;
    use statrs::distribution::{ContinuousCDF, StudentsT};

    if df <= 0 || t_statistic == 0.0 {
        return Ok(1.0);
    }
    let t_dist = StudentsT::new(0.0, 1.0, df as f64).map_err(|e| {
        Error::Computation(format!("Failed to create t-distribution: {}", e))
    })?;
    let p = 2.0 * (1.0 - t_dist.cdf(t_statistic.abs()));
    Ok(p.clamp(0.0, 1.0))
}
