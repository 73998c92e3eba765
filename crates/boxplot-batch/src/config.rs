//! Batch configuration

use boxplot_core::{Error, Result};
use boxplot_estimate::MethodRequest;
use serde::{Deserialize, Serialize};

/// Settings for a batch run
///
/// Every field has a default, so a JSON config only needs the keys it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Formula request applied to every situation
    pub method: MethodRequest,
    /// Estimate every situation at its group's worst level
    pub conservative: bool,
    /// Run situations on the rayon pool (needs the `parallel` feature)
    pub parallel: bool,
    /// Confidence level for [`BatchReport::compare_groups`](crate::BatchReport::compare_groups)
    pub confidence_level: f64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            method: MethodRequest::ByLevel,
            conservative: true,
            parallel: false,
            confidence_level: 0.95,
        }
    }
}

impl BatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_method(mut self, method: impl Into<MethodRequest>) -> Self {
        self.method = method.into();
        self
    }

    pub fn with_conservative(mut self, conservative: bool) -> Self {
        self.conservative = conservative;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    /// Check the settings that serde cannot
    pub fn validate(&self) -> Result<()> {
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(Error::invalid_confidence_level(self.confidence_level));
        }
        Ok(())
    }

    /// Load and validate a config from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
