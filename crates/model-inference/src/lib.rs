//! ONNX Model Prediction
//!
//! Wraps an externally trained risk classifier artifact. Loading is attempted
//! once at process start; a failed load degrades the caller to the rule-based
//! path for the process lifetime.

mod predictor;

pub use predictor::ModelPredictor;

use thiserror::Error;

/// Errors during artifact loading and prediction
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Model load failed: {0}")]
    ModelLoad(String),

    #[error("Inference failed: {0}")]
    InferenceFailed(String),

    #[error("Model returned unknown class index {0}")]
    UnknownClass(i64),

    #[error("Model returned no output")]
    EmptyOutput,
}
