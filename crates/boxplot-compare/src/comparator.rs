//! Independent two-group comparison

use crate::critical::z_score;
use crate::effect::{cohens_d, hedges_g, pooled_sd, EffectMagnitude};
use crate::p_value::PValueMethod;
use crate::traits::GroupMoments;
use crate::types::{ComparisonResult, Interpretation};
use boxplot_core::{Error, Result};
use tracing::{debug, instrument};

/// Compares two groups under an independence assumption
///
/// The confidence interval uses a z critical value; the p-value comes from the
/// configured [`PValueMethod`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupComparator {
    p_value_method: PValueMethod,
}

impl GroupComparator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_p_value_method(mut self, method: PValueMethod) -> Self {
        self.p_value_method = method;
        self
    }

    pub fn p_value_method(&self) -> PValueMethod {
        self.p_value_method
    }

    /// Compare A against B, so a positive delta means A is larger
    #[instrument(
        skip_all,
        fields(n_a = a.sample_size(), n_b = b.sample_size(), confidence_level = confidence_level)
    )]
    pub fn compare<A, B>(&self, a: &A, b: &B, confidence_level: f64) -> Result<ComparisonResult>
    where
        A: GroupMoments + ?Sized,
        B: GroupMoments + ?Sized,
    {
        if !(confidence_level > 0.0 && confidence_level < 1.0) {
            return Err(Error::invalid_confidence_level(confidence_level));
        }
        let (n_a, n_b) = (a.sample_size(), b.sample_size());
        if n_a == 0 || n_b == 0 {
            return Err(Error::invalid_sample_size(n_a.min(n_b)));
        }
        for value in [a.mean(), a.sd(), b.mean(), b.sd()] {
            if !value.is_finite() {
                return Err(Error::non_finite("group moments"));
            }
        }

        let delta_mean = a.mean() - b.mean();
        let sd_diff = (a.variance() / n_a as f64 + b.variance() / n_b as f64).sqrt();

        let z = z_score(confidence_level);
        let ci_lower = delta_mean - z * sd_diff;
        let ci_upper = delta_mean + z * sd_diff;

        let pooled = pooled_sd(a.sd(), n_a, b.sd(), n_b);
        let d = cohens_d(delta_mean, pooled);
        let g = hedges_g(d, n_a, n_b);

        let t_statistic = if sd_diff > 0.0 { delta_mean / sd_diff } else { 0.0 };
        let degrees_of_freedom = n_a as i64 + n_b as i64 - 2;
        let p_value = self.p_value_method.p_value(t_statistic, degrees_of_freedom)?;
        let significant = p_value < 1.0 - confidence_level;

        debug!(delta_mean, sd_diff, t_statistic, p_value, "Compared groups");

        Ok(ComparisonResult {
            delta_mean,
            sd_diff,
            ci_lower,
            ci_upper,
            confidence_level,
            cohens_d: d,
            hedges_g: g,
            effect_magnitude: EffectMagnitude::from_d(d),
            p_value,
            significant,
            t_statistic,
            degrees_of_freedom,
            interpretation: Interpretation::classify(significant, ci_lower, ci_upper),
        })
    }
}
