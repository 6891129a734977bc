//! Error types for the exercise engine.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while building an engine or ingesting provider data.
///
/// Per-frame problems (no person, low visibility, degenerate geometry) are
/// not errors: they flow through the pipeline as `ExerciseLabel::None`.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Threshold configuration is out of range or contradictory.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration text could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Flat landmark array does not match a known keypoint layout.
    #[error("invalid landmark data: {len} values (expected {expected})")]
    InvalidLandmarkData {
        /// Number of floats received.
        len: usize,
        /// Human-readable list of accepted lengths.
        expected: &'static str,
    },
}

impl EngineError {
    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }

    /// Creates an invalid landmark data error.
    #[must_use]
    pub const fn invalid_landmark_data(len: usize, expected: &'static str) -> Self {
        Self::InvalidLandmarkData { len, expected }
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

impl From<EngineError> for JsValue {
    fn from(err: EngineError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
