//! Baseline/intervention difference with a known between-group correlation
//!
//! Unlike [`GroupComparator`](crate::GroupComparator) this path reports
//! intervention − baseline and builds its 95% interval from the t table.
//! A correlation of 0 treats the groups as independent, which gives the widest
//! interval for positively correlated measurements.

use crate::critical::t_critical;
use crate::effect::{cohens_d, pooled_sd};
use crate::traits::GroupMoments;
use crate::types::{CalculationDetails, DifferenceStats};
use boxplot_core::{Error, Result};
use tracing::{debug, instrument};

/// Correlation assumed when none is known
pub const DEFAULT_CORRELATION: f64 = 0.0;

/// Difference statistics for `intervention − baseline`
#[instrument(skip_all, fields(correlation = correlation))]
pub fn difference_stats<B, I>(
    baseline: &B,
    intervention: &I,
    correlation: f64,
) -> Result<DifferenceStats>
where
    B: GroupMoments + ?Sized,
    I: GroupMoments + ?Sized,
{
    if !(-1.0..=1.0).contains(&correlation) {
        return Err(Error::InvalidParameter(format!(
            "Correlation {correlation} must be in [-1, 1]"
        )));
    }
    let (n1, n2) = (baseline.sample_size(), intervention.sample_size());
    if n1 == 0 || n2 == 0 {
        return Err(Error::invalid_sample_size(n1.min(n2)));
    }

    let (mean1, sd1) = (baseline.mean(), baseline.sd());
    let (mean2, sd2) = (intervention.mean(), intervention.sd());
    if ![mean1, sd1, mean2, sd2].iter().all(|v| v.is_finite()) {
        return Err(Error::non_finite("group moments"));
    }

    let difference_mean = mean2 - mean1;
    let covariance = 2.0 * correlation * sd1 * sd2;

    let variance_diff = sd1 * sd1 + sd2 * sd2 - covariance;
    let difference_sd = variance_diff.max(0.0).sqrt();

    let (n1f, n2f) = (n1 as f64, n2 as f64);
    let se_squared = sd1 * sd1 / n1f + sd2 * sd2 / n2f - covariance / (n1f * n2f).sqrt();
    let standard_error = se_squared.max(0.0).sqrt();

    let d = cohens_d(difference_mean, pooled_sd(sd1, n1, sd2, n2));

    let df = n1 as i64 + n2 as i64 - 2;
    let t = t_critical(df);
    let ci_lower = difference_mean - t * standard_error;
    let ci_upper = difference_mean + t * standard_error;

    debug!(difference_mean, standard_error, t_critical = t, "Computed difference");

    Ok(DifferenceStats {
        difference_mean,
        difference_sd,
        standard_error,
        cohens_d: d,
        ci_lower,
        ci_upper,
        t_critical: t,
        correlation_used: correlation,
        sample_sizes: (n1, n2),
        calculation_details: CalculationDetails {
            baseline: format!("Mean={:.3}, SD={:.3}, n={}", mean1, sd1, n1),
            intervention: format!("Mean={:.3}, SD={:.3}, n={}", mean2, sd2, n2),
            formula: format!("Diff = {:.3} - {:.3} = {:.3}", mean2, mean1, difference_mean),
        },
    })
}
