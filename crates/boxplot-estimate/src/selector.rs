//! Method selection
//!
//! Two policies coexist and callers pick the one matching their intent:
//!
//! - [`select_by_shape`] asks "which formula suits this distribution?" and
//!   cascades from the most assumption-laden formula towards the most skew-robust.
//! - [`select_by_level`] asks "which formula makes best use of what was reported?"
//!   and is what batch estimation uses.

use crate::{Method, MethodRequest};
use boxplot_core::{DataLevel, DistributionAssessment};

/// Whisker imbalance (relative to the IQR) below which `simple` is allowed
pub const SIMPLE_WHISKER_SYMMETRY: f64 = 0.2;
/// Minimum sample size for `wan2014` under the shape policy
pub const WAN2014_MIN_SAMPLE_SIZE: usize = 25;
/// Maximum symmetry ratio for `wan2014` under the shape policy
pub const WAN2014_MAX_SYMMETRY_RATIO: f64 = 0.3;

/// Resolve a request into the formula to apply
///
/// An explicit method always wins and is not checked against the level.
pub fn select(
    level: DataLevel,
    assessment: &DistributionAssessment,
    sample_size: usize,
    request: MethodRequest,
) -> Method {
    match request {
        MethodRequest::Explicit(method) => method,
        MethodRequest::Auto => select_by_shape(assessment, sample_size),
        MethodRequest::ByLevel => select_by_level(level),
    }
}

/// Shape-driven cascade: simple, then wan2014, then luo2018
pub fn select_by_shape(assessment: &DistributionAssessment, sample_size: usize) -> Method {
    let whiskers_balanced = assessment
        .whisker_symmetry
        .is_some_and(|ws| ws < SIMPLE_WHISKER_SYMMETRY);

    if assessment.is_symmetric && assessment.outlier_impact == 0 && whiskers_balanced {
        Method::Simple
    } else if sample_size >= WAN2014_MIN_SAMPLE_SIZE
        && assessment.symmetry_ratio < WAN2014_MAX_SYMMETRY_RATIO
    {
        Method::Wan2014
    } else {
        Method::Luo2018
    }
}

/// Level-driven choice of the best formula the reported detail supports
///
/// Incomplete data has no formula; it maps to the three-number formula, which
/// the estimator will refuse on validation.
pub fn select_by_level(level: DataLevel) -> Method {
    match level {
        DataLevel::Incomplete | DataLevel::QuartilesOnly => Method::Wan2014ThreeNumber,
        DataLevel::Whiskers => Method::Wan2014FiveNumber,
        DataLevel::WhiskersAndOutliers => Method::Wan2014FiveNumberOutlierCorrected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxplot_core::BoxplotSummary;

    fn shape(summary: &BoxplotSummary) -> DistributionAssessment {
        summary.assess().unwrap()
    }

    #[test]
    fn test_symmetric_with_balanced_whiskers_is_simple() {
        let s = BoxplotSummary::new(10.0, 15.0, 20.0).with_whiskers(5.0, 25.0);
        assert_eq!(select_by_shape(&shape(&s), 10), Method::Simple);
    }

    #[test]
    fn test_simple_needs_whiskers() {
        let s = BoxplotSummary::new(10.0, 15.0, 20.0);
        assert_eq!(select_by_shape(&shape(&s), 30), Method::Wan2014);
        assert_eq!(select_by_shape(&shape(&s), 24), Method::Luo2018);
    }

    #[test]
    fn test_outliers_block_simple() {
        let s = BoxplotSummary::new(10.0, 15.0, 20.0)
            .with_whiskers(5.0, 25.0)
            .with_outliers(vec![], vec![50.0]);
        assert_eq!(select_by_shape(&shape(&s), 40), Method::Wan2014);
    }

    #[test]
    fn test_moderate_skew_boundary() {
        // ratio 0.2 < 0.3 with n = 25 -> wan2014
        let s = BoxplotSummary::new(10.0, 13.0, 20.0);
        assert_eq!(select_by_shape(&shape(&s), 25), Method::Wan2014);
        // ratio 0.4 -> luo2018 regardless of n
        let s = BoxplotSummary::new(10.0, 11.0, 20.0);
        assert_eq!(select_by_shape(&shape(&s), 500), Method::Luo2018);
    }

    fn assessment(symmetry_ratio: f64, whisker_symmetry: Option<f64>) -> DistributionAssessment {
        DistributionAssessment {
            is_symmetric: symmetry_ratio < boxplot_core::SYMMETRY_THRESHOLD,
            symmetry_ratio,
            whisker_symmetry,
            outlier_impact: 0,
            iqr: 10.0,
        }
    }

    #[test]
    fn test_whisker_symmetry_boundary() {
        assert_eq!(select_by_shape(&assessment(0.0, Some(0.19)), 10), Method::Simple);
        assert_eq!(select_by_shape(&assessment(0.0, Some(0.2)), 10), Method::Luo2018);
        assert_eq!(select_by_shape(&assessment(0.0, Some(0.2)), 25), Method::Wan2014);

        // upper whisker length 7, lower 5: imbalance exactly 2 / 10
        let s = BoxplotSummary::new(10.0, 15.0, 20.0).with_whiskers(5.0, 27.0);
        assert_eq!(shape(&s).whisker_symmetry, Some(0.2));
        assert_eq!(select_by_shape(&shape(&s), 10), Method::Luo2018);
    }

    #[test]
    fn test_wan2014_boundaries() {
        assert_eq!(select_by_shape(&assessment(0.29, None), 25), Method::Wan2014);
        assert_eq!(select_by_shape(&assessment(0.3, None), 25), Method::Luo2018);
        assert_eq!(select_by_shape(&assessment(0.29, None), 24), Method::Luo2018);
    }

    #[test]
    fn test_symmetry_threshold_is_strict() {
        // median offset exactly 0.1 of the IQR is not symmetric
        let at_threshold = BoxplotSummary::new(0.0, 6.0, 10.0).with_whiskers(-5.0, 15.0);
        let a = shape(&at_threshold);
        assert!(!a.is_symmetric);
        assert_eq!(select_by_shape(&a, 30), Method::Wan2014);

        let below = BoxplotSummary::new(0.0, 5.5, 10.0).with_whiskers(-5.0, 15.0);
        assert_eq!(select_by_shape(&shape(&below), 30), Method::Simple);
    }

    #[test]
    fn test_level_mapping() {
        assert_eq!(select_by_level(DataLevel::QuartilesOnly), Method::Wan2014ThreeNumber);
        assert_eq!(select_by_level(DataLevel::Whiskers), Method::Wan2014FiveNumber);
        assert_eq!(
            select_by_level(DataLevel::WhiskersAndOutliers),
            Method::Wan2014FiveNumberOutlierCorrected
        );
    }

    #[test]
    fn test_explicit_request_wins() {
        let s = BoxplotSummary::new(10.0, 11.0, 20.0)
            .with_whiskers(9.0, 80.0)
            .with_outliers(vec![], vec![200.0]);
        let method = select(
            DataLevel::WhiskersAndOutliers,
            &shape(&s),
            12,
            MethodRequest::Explicit(Method::Simple),
        );
        assert_eq!(method, Method::Simple);
    }
}
