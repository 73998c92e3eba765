//! Batch input records

use boxplot_core::{classify_lenient, BoxplotSummary, DataLevel, Error, Quartiles, Result};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// One reported measurement of a group (a time point, arm or subgroup)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Situation {
    pub name: String,
    #[serde(flatten)]
    pub summary: BoxplotSummary,
    /// Whole number; spreadsheet exports that write `30.0` are accepted
    #[serde(default, deserialize_with = "whole_sample_size")]
    pub sample_size: Option<usize>,
}

fn whole_sample_size<'de, D>(deserializer: D) -> std::result::Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Whole(usize),
        Float(f64),
    }

    match Option::<Count>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Count::Whole(n)) => Ok(Some(n)),
        Some(Count::Float(x)) if x >= 0.0 && x.fract() == 0.0 && x <= usize::MAX as f64 => {
            Ok(Some(x as usize))
        }
        Some(Count::Float(x)) => Err(D::Error::custom(format!(
            "sample size must be a non-negative whole number, got {x}"
        ))),
    }
}

impl Situation {
    pub fn new(name: impl Into<String>, summary: BoxplotSummary, sample_size: usize) -> Self {
        Self {
            name: name.into(),
            summary,
            sample_size: Some(sample_size),
        }
    }

    /// A situation whose sample size was not reported
    pub fn without_sample_size(name: impl Into<String>, summary: BoxplotSummary) -> Self {
        Self {
            name: name.into(),
            summary,
            sample_size: None,
        }
    }

    /// Check that the situation can be estimated at all
    ///
    /// Requires valid quartiles, finite whiskers and outliers, and a positive
    /// sample size.
    pub fn validate(&self) -> Result<Quartiles> {
        let quartiles = self.summary.validate()?;
        match self.sample_size {
            Some(0) => Err(Error::invalid_sample_size(0)),
            Some(_) => Ok(quartiles),
            None => Err(Error::InvalidInput("missing sample size".to_string())),
        }
    }

    /// Data level, [`DataLevel::Incomplete`] whenever [`Situation::validate`] fails
    pub fn data_level(&self) -> DataLevel {
        match self.validate() {
            Ok(_) => classify_lenient(&self.summary),
            Err(_) => DataLevel::Incomplete,
        }
    }

    /// Populated fields in reporting order, with `sample_size` last when present
    pub fn available_fields(&self) -> Vec<&'static str> {
        let mut fields = self.summary.available_fields();
        if self.sample_size.is_some() {
            fields.push("sample_size");
        }
        fields
    }
}

/// A named group of situations estimated under a shared level policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupData {
    pub name: String,
    #[serde(default)]
    pub situations: Vec<Situation>,
}

impl GroupData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            situations: Vec::new(),
        }
    }

    pub fn with_situation(mut self, situation: Situation) -> Self {
        self.situations.push(situation);
        self
    }

    /// Parse a list of groups from JSON
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}
