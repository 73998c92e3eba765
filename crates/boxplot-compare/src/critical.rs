//! Critical value lookups
//!
//! Both tables are deliberate approximations. The z lookup only knows three
//! confidence levels and falls back to 1.96; the t table is the usual two-sided
//! 5% table with linear interpolation between its rows.

/// Two-sided z critical values for the supported confidence levels
const Z_TABLE: [(f64, f64); 3] = [(0.90, 1.645), (0.95, 1.96), (0.99, 2.576)];

/// z used when the confidence level is not in the table
pub const DEFAULT_Z: f64 = 1.96;

/// Two-sided t critical values at alpha = 0.05, keyed by degrees of freedom
const T_TABLE: [(i64, f64); 19] = [
    (1, 12.706),
    (2, 4.303),
    (3, 3.182),
    (4, 2.776),
    (5, 2.571),
    (6, 2.447),
    (7, 2.365),
    (8, 2.306),
    (9, 2.262),
    (10, 2.228),
    (15, 2.131),
    (20, 2.086),
    (25, 2.060),
    (30, 2.042),
    (40, 2.021),
    (50, 2.009),
    (60, 2.000),
    (100, 1.984),
    (1000, 1.962),
];

/// Normal approximation beyond the last table row
pub const LARGE_DF_T: f64 = 1.96;

/// z critical value for a confidence level, 1.96 when unknown
pub fn z_score(confidence_level: f64) -> f64 {
    Z_TABLE
        .iter()
        .find(|(level, _)| (level - confidence_level).abs() < 1e-9)
        .map_or(DEFAULT_Z, |&(_, z)| z)
}

/// 95% two-sided t critical value for `df` degrees of freedom
///
/// Exact for tabulated `df`, linearly interpolated between rows, 1.96 above
/// 1000 and the `df = 1` value below the table.
pub fn t_critical(df: i64) -> f64 {
    if df > 1000 {
        return LARGE_DF_T;
    }
    let mut previous: Option<(i64, f64)> = None;
    for &(key, value) in T_TABLE.iter() {
        if df <= key {
            return match previous {
                Some((prev_key, prev_value)) if df != key => {
                    let ratio = (df - prev_key) as f64 / (key - prev_key) as f64;
                    prev_value + ratio * (value - prev_value)
                }
                _ => value,
            };
        }
        previous = Some((key, value));
    }
    LARGE_DF_T
}
