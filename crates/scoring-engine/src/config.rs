//! Engine configuration

use serde::{Deserialize, Serialize};

/// Scoring engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Path to the trained ONNX artifact. `None` serves the rule-based path.
    pub model_path: Option<String>,
}

impl EngineConfig {
    /// Config pointing at a trained artifact
    pub fn with_model(path: impl Into<String>) -> Self {
        Self {
            model_path: Some(path.into()),
        }
    }
}
