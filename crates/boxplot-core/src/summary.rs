//! Boxplot summary types
//!
//! A [`BoxplotSummary`] is what a published study reports about one group at one
//! point in time: the three quartiles, optionally the whisker extremes and any
//! outliers drawn beyond them. Fields are private so a summary cannot change after
//! construction; the data level is always derived from what is populated.

use crate::{DataLevel, Error, Result};
use serde::{Deserialize, Serialize};

/// Validated quartile triple with `q1 <= q2 <= q3` and a finite IQR
///
/// Only [`Quartiles::new`] builds one, so every value seen downstream is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quartiles {
    q1: f64,
    q2: f64,
    q3: f64,
}

impl Quartiles {
    /// Build a quartile triple, enforcing the ordering invariant
    pub fn new(q1: f64, q2: f64, q3: f64) -> Result<Self> {
        if !(q1.is_finite() && q2.is_finite() && q3.is_finite()) {
            return Err(Error::non_finite("quartiles"));
        }
        if !(q1 <= q2 && q2 <= q3) {
            return Err(Error::Ordering { q1, q2, q3 });
        }
        if !(q3 - q1).is_finite() {
            return Err(Error::non_finite("interquartile range"));
        }
        Ok(Self { q1, q2, q3 })
    }

    pub fn q1(&self) -> f64 {
        self.q1
    }

    pub fn q2(&self) -> f64 {
        self.q2
    }

    pub fn q3(&self) -> f64 {
        self.q3
    }

    /// Interquartile range, `q3 - q1`
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Midpoint of the box, `(q1 + q3) / 2`
    pub fn midhinge(&self) -> f64 {
        (self.q1 + self.q3) / 2.0
    }

    /// Mean of the three quartiles
    pub fn trimean3(&self) -> f64 {
        (self.q1 + self.q2 + self.q3) / 3.0
    }
}

/// Lower and upper whisker extremes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Whiskers {
    pub lower: f64,
    pub upper: f64,
}

impl Whiskers {
    /// Distance between the whisker ends
    pub fn range(&self) -> f64 {
        self.upper - self.lower
    }
}

/// One group's reported boxplot statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxplotSummary {
    #[serde(default)]
    q1: Option<f64>,
    #[serde(default)]
    q2: Option<f64>,
    #[serde(default)]
    q3: Option<f64>,
    #[serde(default)]
    upper_whisker: Option<f64>,
    #[serde(default)]
    lower_whisker: Option<f64>,
    #[serde(default)]
    upper_outliers: Vec<f64>,
    #[serde(default)]
    lower_outliers: Vec<f64>,
}

impl BoxplotSummary {
    /// Summary holding only the three quartiles
    pub fn new(q1: f64, q2: f64, q3: f64) -> Self {
        Self {
            q1: Some(q1),
            q2: Some(q2),
            q3: Some(q3),
            ..Self::default()
        }
    }

    /// Start a builder; every field begins absent
    pub fn builder() -> BoxplotSummaryBuilder {
        BoxplotSummaryBuilder::default()
    }

    /// Return a copy with both whiskers set
    pub fn with_whiskers(mut self, lower: f64, upper: f64) -> Self {
        self.lower_whisker = Some(lower);
        self.upper_whisker = Some(upper);
        self
    }

    /// Return a copy with the given outliers
    pub fn with_outliers(mut self, lower: Vec<f64>, upper: Vec<f64>) -> Self {
        self.lower_outliers = lower;
        self.upper_outliers = upper;
        self
    }

    pub fn q1(&self) -> Option<f64> {
        self.q1
    }

    pub fn q2(&self) -> Option<f64> {
        self.q2
    }

    pub fn q3(&self) -> Option<f64> {
        self.q3
    }

    pub fn upper_whisker(&self) -> Option<f64> {
        self.upper_whisker
    }

    pub fn lower_whisker(&self) -> Option<f64> {
        self.lower_whisker
    }

    pub fn upper_outliers(&self) -> &[f64] {
        &self.upper_outliers
    }

    pub fn lower_outliers(&self) -> &[f64] {
        &self.lower_outliers
    }

    /// Names of the quartiles that are absent
    pub fn missing_quartiles(&self) -> Vec<&'static str> {
        [("q1", self.q1), ("q2", self.q2), ("q3", self.q3)]
            .into_iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| name)
            .collect()
    }

    /// The quartiles as reported, without checking their order
    pub fn raw_quartiles(&self) -> Result<(f64, f64, f64)> {
        match (self.q1, self.q2, self.q3) {
            (Some(q1), Some(q2), Some(q3)) => Ok((q1, q2, q3)),
            _ => Err(Error::IncompleteData {
                missing: self.missing_quartiles(),
            }),
        }
    }

    /// Quartiles checked for presence, finiteness and ordering
    pub fn quartiles(&self) -> Result<Quartiles> {
        let (q1, q2, q3) = self.raw_quartiles()?;
        Quartiles::new(q1, q2, q3)
    }

    /// Full validation: quartiles plus finiteness of every optional value
    pub fn validate(&self) -> Result<Quartiles> {
        let quartiles = self.quartiles()?;
        let whiskers_finite = [self.lower_whisker, self.upper_whisker]
            .iter()
            .flatten()
            .all(|v| v.is_finite());
        if !whiskers_finite {
            return Err(Error::non_finite("whiskers"));
        }
        if self.outliers().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("outliers"));
        }
        Ok(quartiles)
    }

    /// Both whiskers, if both are reported
    pub fn whiskers(&self) -> Option<Whiskers> {
        match (self.lower_whisker, self.upper_whisker) {
            (Some(lower), Some(upper)) => Some(Whiskers { lower, upper }),
            _ => None,
        }
    }

    pub fn has_whiskers(&self) -> bool {
        self.whiskers().is_some()
    }

    pub fn has_outliers(&self) -> bool {
        !self.upper_outliers.is_empty() || !self.lower_outliers.is_empty()
    }

    /// Every outlier value, lower side first
    pub fn outliers(&self) -> impl Iterator<Item = f64> + '_ {
        self.lower_outliers
            .iter()
            .chain(self.upper_outliers.iter())
            .copied()
    }

    /// Total number of outliers on both sides
    pub fn outlier_count(&self) -> usize {
        self.upper_outliers.len() + self.lower_outliers.len()
    }

    /// A copy carrying only the fields that `level` makes use of
    ///
    /// Level 0 keeps the quartiles, level 1 adds the whiskers and level 2 keeps
    /// everything. Classifying the result never yields a level above `level`.
    pub fn restricted_to(&self, level: DataLevel) -> Self {
        let mut restricted = self.clone();
        if level < DataLevel::Whiskers {
            restricted.upper_whisker = None;
            restricted.lower_whisker = None;
        }
        if level < DataLevel::WhiskersAndOutliers {
            restricted.upper_outliers.clear();
            restricted.lower_outliers.clear();
        }
        restricted
    }

    /// Names of the populated fields, in reporting order
    pub fn available_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if !self.upper_outliers.is_empty() {
            fields.push("upper_outliers");
        }
        if self.upper_whisker.is_some() {
            fields.push("upper_whisker");
        }
        if self.q3.is_some() {
            fields.push("q3");
        }
        if self.q2.is_some() {
            fields.push("q2");
        }
        if self.q1.is_some() {
            fields.push("q1");
        }
        if self.lower_whisker.is_some() {
            fields.push("lower_whisker");
        }
        if !self.lower_outliers.is_empty() {
            fields.push("lower_outliers");
        }
        fields
    }
}

/// Builder for summaries that arrive field by field from an I/O layer
#[derive(Debug, Clone, Default)]
pub struct BoxplotSummaryBuilder {
    summary: BoxplotSummary,
}

impl BoxplotSummaryBuilder {
    pub fn q1(mut self, value: f64) -> Self {
        self.summary.q1 = Some(value);
        self
    }

    pub fn q2(mut self, value: f64) -> Self {
        self.summary.q2 = Some(value);
        self
    }

    pub fn q3(mut self, value: f64) -> Self {
        self.summary.q3 = Some(value);
        self
    }

    pub fn upper_whisker(mut self, value: f64) -> Self {
        self.summary.upper_whisker = Some(value);
        self
    }

    pub fn lower_whisker(mut self, value: f64) -> Self {
        self.summary.lower_whisker = Some(value);
        self
    }

    pub fn upper_outlier(mut self, value: f64) -> Self {
        self.summary.upper_outliers.push(value);
        self
    }

    pub fn lower_outlier(mut self, value: f64) -> Self {
        self.summary.lower_outliers.push(value);
        self
    }

    pub fn upper_outliers(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.summary.upper_outliers.extend(values);
        self
    }

    pub fn lower_outliers(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.summary.lower_outliers.extend(values);
        self
    }

    pub fn build(self) -> BoxplotSummary {
        self.summary
    }
}
