//! Configuration errors
//!
//! The state engine itself never fails; only reading settings can.

/// Errors raised while reading landing page settings
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} is not a valid number: {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("unknown scroll metric {0:?} (expected \"percent\" or \"pixels\")")]
    UnknownMetric(String),

    #[error("{name} expects two comma-separated values, got {value:?}")]
    MalformedPair { name: &'static str, value: String },

    #[error("theme breakpoints must satisfy 0 <= lower < upper, got {lower} and {upper}")]
    InvertedBreakpoints { lower: f64, upper: f64 },

    #[error("navbar offset must be a finite number of pixels >= 0, got {0}")]
    InvalidOffset(f64),

    #[error("observer threshold must be within 0..=1, got {0}")]
    ThresholdOutOfRange(f64),

    #[error("embedded landing config is not valid JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err.to_string())
    }
}
