//! Error types for boxplot summary analysis
//!
//! Provides a unified error type for all boxplot-stats crates.

use thiserror::Error;

/// Core error type for boxplot estimation operations
#[derive(Error, Debug)]
pub enum Error {
    /// One or more of the quartiles is missing
    #[error("Incomplete data: missing {}", .missing.join(", "))]
    IncompleteData { missing: Vec<&'static str> },

    /// Quartiles are not in non-decreasing order
    #[error("Quartile ordering violated: expected Q1 ({q1}) <= Q2 ({q2}) <= Q3 ({q3})")]
    Ordering { q1: f64, q2: f64, q3: f64 },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Method name not recognised
    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a non-positive sample size
    pub fn invalid_sample_size(n: usize) -> Self {
        Self::InvalidParameter(format!("Sample size must be positive, got {n}"))
    }

    /// Create an error for a confidence level outside (0, 1)
    pub fn invalid_confidence_level(level: f64) -> Self {
        Self::InvalidParameter(format!("Confidence level {level} must be in (0, 1)"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Whether this error means the summary lacked required quartiles
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::IncompleteData { .. })
    }
}
