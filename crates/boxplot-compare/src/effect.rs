//! Standardized effect sizes from summary moments
//!
//! Cohen's d divides the mean difference by the pooled SD; Hedges' g applies
//! the small-sample bias correction J = 1 - 3/(4(n1 + n2) - 9).

use serde::Serialize;
use std::fmt;

/// Pooled SD, `sqrt(((n1-1)sd1^2 + (n2-1)sd2^2) / (n1+n2-2))`
///
/// Zero when there are no degrees of freedom.
pub fn pooled_sd(sd1: f64, n1: usize, sd2: f64, n2: usize) -> f64 {
    let df = n1 as f64 + n2 as f64 - 2.0;
    if df <= 0.0 {
        return 0.0;
    }
    let pooled_variance =
        ((n1 as f64 - 1.0) * sd1 * sd1 + (n2 as f64 - 1.0) * sd2 * sd2) / df;
    pooled_variance.max(0.0).sqrt()
}

/// Cohen's d, zero when the pooled SD is zero
pub fn cohens_d(delta_mean: f64, pooled_sd: f64) -> f64 {
    if pooled_sd > 0.0 {
        delta_mean / pooled_sd
    } else {
        0.0
    }
}

/// Hedges' bias correction factor J for total sample size `n1 + n2`
pub fn hedges_correction(n1: usize, n2: usize) -> f64 {
    1.0 - 3.0 / (4.0 * (n1 + n2) as f64 - 9.0)
}

/// Hedges' g from Cohen's d
pub fn hedges_g(cohens_d: f64, n1: usize, n2: usize) -> f64 {
    cohens_d * hedges_correction(n1, n2)
}

/// Magnitude of a standardized mean difference following Cohen's conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectMagnitude {
    /// |d| < 0.2
    Negligible,
    /// 0.2 <= |d| < 0.5
    Small,
    /// 0.5 <= |d| < 0.8
    Medium,
    /// |d| >= 0.8
    Large,
}

impl EffectMagnitude {
    pub fn from_d(d: f64) -> Self {
        let abs_d = d.abs();
        if abs_d < 0.2 {
            Self::Negligible
        } else if abs_d < 0.5 {
            Self::Small
        } else if abs_d < 0.8 {
            Self::Medium
        } else {
            Self::Large
        }
    }
}

impl fmt::Display for EffectMagnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Negligible => "negligible",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        };
        write!(f, "{}", s)
    }
}
