//! Mean and standard deviation formulas
//!
//! Every formula is a pure function of the validated quartiles, the optional
//! whiskers, the outliers and the sample size. Dispatch over [`Method`] is a
//! closed `match`; there is no runtime registry.
//!
//! The level formulas follow Wan et al. (2014); `luo2018` borrows the
//! whisker-position skew adjustment of Luo et al. (2018).

use crate::types::{FormulaEstimate, MethodNotes, OutlierAnalysis, TukeyFences};
use crate::Method;
use boxplot_core::{skew_factor, Quartiles, Whiskers};

/// Ratio between the IQR and the SD of a normal distribution
pub const IQR_TO_SD: f64 = 1.35;
/// Half-width, in SDs, of the range expected for mid-sized samples
pub const MID_SAMPLE_RANGE_FACTOR: f64 = 1.85;
/// Largest sample size treated as small by the five-number formula
pub const SMALL_SAMPLE_MAX: usize = 15;
/// Largest sample size treated as mid-sized by the five-number formula
pub const MID_SAMPLE_MAX: usize = 70;
/// Skew factor magnitude above which the three-number formula corrects
pub const SKEW_CORRECTION_THRESHOLD: f64 = 0.1;

/// Everything a formula may look at
#[derive(Debug, Clone, Copy)]
pub struct FormulaInput<'a> {
    pub quartiles: Quartiles,
    pub whiskers: Option<Whiskers>,
    pub upper_outliers: &'a [f64],
    pub lower_outliers: &'a [f64],
    pub sample_size: usize,
}

/// Apply the named formula
pub fn apply(method: Method, input: &FormulaInput<'_>) -> FormulaEstimate {
    match method {
        Method::Simple => simple(input),
        Method::Wan2014 => wan2014(input),
        Method::Luo2018 => luo2018(input),
        Method::Wan2014ThreeNumber => three_number(input),
        Method::Wan2014FiveNumber => five_number(input),
        Method::Wan2014FiveNumberOutlierCorrected => five_number_outlier_corrected(input),
    }
}

/// Mean = Q2, SD = IQR / 1.35
pub fn simple(input: &FormulaInput<'_>) -> FormulaEstimate {
    let q = input.quartiles;
    FormulaEstimate {
        mean: q.q2(),
        sd: q.iqr() / IQR_TO_SD,
        notes: MethodNotes::new(
            "Simple method: Mean = Q2, SD = IQR/1.35".to_string(),
            "median/IQR approximation",
            "assumes a symmetric distribution",
        ),
    }
}

/// Mean = (Q1 + Q2 + Q3) / 3, SD = IQR / 1.35 inflated by `1 + 0.14/sqrt(n)` when n > 50
pub fn wan2014(input: &FormulaInput<'_>) -> FormulaEstimate {
    let q = input.quartiles;
    let n = input.sample_size;
    let mut sd = q.iqr() / IQR_TO_SD;
    if n > 50 {
        sd *= 1.0 + 0.14 / (n as f64).sqrt();
    }
    FormulaEstimate {
        mean: q.trimean3(),
        sd,
        notes: MethodNotes::new(
            format!("Wan 2014: Mean = (Q1+Q2+Q3)/3, SD = (Q3-Q1)/1.35, n={n}"),
            "Wan 2014",
            "large-sample SD correction applies when n > 50",
        ),
    }
}

/// Whisker-weighted variant for skewed data
pub fn luo2018(input: &FormulaInput<'_>) -> FormulaEstimate {
    let q = input.quartiles;
    let n = input.sample_size;
    let iqr_estimate = q.iqr() / IQR_TO_SD;

    let (mean, mut sd) = match input.whiskers {
        Some(w) => {
            let range = w.range();
            let mean = if range > 0.0 {
                let upper_weight = (w.upper - q.q3()) / range;
                let lower_weight = (q.q1() - w.lower) / range;
                q.trimean3() + (upper_weight - lower_weight) * q.iqr() * 0.1
            } else {
                q.trimean3()
            };
            (mean, 0.7 * iqr_estimate + 0.3 * range / 4.0)
        }
        None => (q.trimean3(), iqr_estimate),
    };

    if n < 25 {
        sd *= 1.0 + 0.5 / n as f64;
    }

    FormulaEstimate {
        mean,
        sd,
        notes: MethodNotes::new(
            format!("Luo 2018: Enhanced estimation with whiskers, n={n}"),
            "Luo 2018",
            "small-sample SD inflation applies when n < 25",
        ),
    }
}

/// Level 0: three-number summary with a median-offset skew correction
pub fn three_number(input: &FormulaInput<'_>) -> FormulaEstimate {
    let q = input.quartiles;
    let iqr = q.iqr();
    let mut mean = q.trimean3();
    let mut sd = iqr / IQR_TO_SD;

    let factor = skew_factor(q);
    let skew_corrected = factor.abs() > SKEW_CORRECTION_THRESHOLD;
    if skew_corrected {
        mean += factor * iqr * 0.1;
        sd *= 1.0 + factor.abs() * 0.2;
    }

    let mut notes = MethodNotes::new(
        "Wan 2014 three-number formula: Mean=(Q1+Q2+Q3)/3, SD=(Q3-Q1)/1.35".to_string(),
        "Wan 2014",
        "basic level estimate, expected error 15-25%",
    );
    if skew_corrected {
        notes.skew_correction = Some(factor);
    }

    FormulaEstimate { mean, sd, notes }
}

/// Level 1: five-number summary weighted by sample size
///
/// Without whiskers only the large-sample branch is computable, so it is used
/// regardless of `n`.
pub fn five_number(input: &FormulaInput<'_>) -> FormulaEstimate {
    let q = input.quartiles;
    let n = input.sample_size;

    let Some(w) = input.whiskers else {
        return FormulaEstimate {
            mean: (q.q1() + 2.0 * q.q2() + q.q3()) / 4.0,
            sd: q.iqr() / IQR_TO_SD,
            notes: MethodNotes::new(
                format!("Wan 2014 five-number formula without whiskers, n={n}"),
                "Wan 2014",
                "whiskers missing, quartile-only weighting used",
            ),
        };
    };

    let (min, max) = (w.lower, w.upper);
    let (mean, sd) = if n <= SMALL_SAMPLE_MAX {
        (
            (min + 2.0 * q.q1() + 2.0 * q.q2() + 2.0 * q.q3() + max) / 8.0,
            (max - min) / 4.0,
        )
    } else if n <= MID_SAMPLE_MAX {
        (
            (min + q.q1() + 2.0 * q.q2() + q.q3() + max) / 6.0,
            (max - min) / (2.0 * MID_SAMPLE_RANGE_FACTOR),
        )
    } else {
        ((q.q1() + 2.0 * q.q2() + q.q3()) / 4.0, q.iqr() / IQR_TO_SD)
    };

    FormulaEstimate {
        mean,
        sd,
        notes: MethodNotes::new(
            format!("Wan 2014 five-number formula: weighted by sample size, n={n}"),
            "Wan 2014",
            "intermediate level estimate, expected error 8-15%",
        ),
    }
}

/// Level 2: five-number summary corrected by outliers beyond the outer fences
pub fn five_number_outlier_corrected(input: &FormulaInput<'_>) -> FormulaEstimate {
    let mut estimate = five_number(input);
    let q = input.quartiles;
    let iqr = q.iqr();
    let fences = TukeyFences::new(q);

    let extreme_upper = input
        .upper_outliers
        .iter()
        .filter(|&&x| x > fences.outer_upper)
        .count();
    let extreme_lower = input
        .lower_outliers
        .iter()
        .filter(|&&x| x < fences.outer_lower)
        .count();
    let outlier_skew = extreme_upper as i64 - extreme_lower as i64;

    if outlier_skew != 0 {
        estimate.mean += outlier_skew as f64 * iqr * 0.05;
        estimate.sd *= 1.0 + outlier_skew.unsigned_abs() as f64 * 0.1;
    }

    estimate.notes = MethodNotes::new(
        format!(
            "Wan 2014 five-number formula + outlier skew correction, n={}",
            input.sample_size
        ),
        "Wan 2014 + Tukey outlier analysis",
        "highest level estimate, expected error 5-10%",
    );
    estimate.notes.outlier_analysis = Some(OutlierAnalysis {
        upper_outliers: input.upper_outliers.len(),
        lower_outliers: input.lower_outliers.len(),
        extreme_upper,
        extreme_lower,
        skew_correction: outlier_skew,
        fences,
    });

    estimate
}
