//! Core traits for group comparison

use boxplot_estimate::EstimationResult;

/// Anything that carries a group's mean, SD and sample size
///
/// Implemented by estimator output and by plain reported triples, so a study
/// that did report mean±SD can be compared against one reconstructed from a
/// boxplot.
pub trait GroupMoments {
    fn mean(&self) -> f64;
    fn sd(&self) -> f64;
    fn sample_size(&self) -> usize;

    fn variance(&self) -> f64 {
        self.sd() * self.sd()
    }
}

impl GroupMoments for EstimationResult {
    fn mean(&self) -> f64 {
        self.mean
    }

    fn sd(&self) -> f64 {
        self.sd
    }

    fn sample_size(&self) -> usize {
        self.sample_size
    }
}

impl<G: GroupMoments + ?Sized> GroupMoments for &G {
    fn mean(&self) -> f64 {
        (**self).mean()
    }

    fn sd(&self) -> f64 {
        (**self).sd()
    }

    fn sample_size(&self) -> usize {
        (**self).sample_size()
    }
}
