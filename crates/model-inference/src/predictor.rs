//! Artifact loading and forward-pass prediction

use crate::InferenceError;
use feature_set::{FeatureSet, FEATURE_DIMENSION};
use risk_rules::RiskLabel;
use tract_core::prelude::DatumType;
use tract_onnx::prelude::*;
use tracing::{debug, info};

/// Pre-trained risk classifier, loaded once and held read-only for the
/// process lifetime. `predict` takes `&self`, so one instance can serve any
/// number of concurrent scoring calls without locking.
#[derive(Debug)]
pub struct ModelPredictor {
    plan: TypedSimplePlan<TypedModel>,
    path: String,
}

impl ModelPredictor {
    /// Load an ONNX artifact expecting the ordered five-feature input vector.
    ///
    /// Attempted once at startup. On failure the caller degrades to the
    /// rule-based path; there is no retry and no mid-process reload.
    pub fn load(path: &str) -> Result<Self, InferenceError> {
        info!("Loading risk model from {}", path);
        let plan = tract_onnx::onnx()
            .model_for_path(path)
            .map_err(|e| InferenceError::ModelLoad(e.to_string()))?
            .with_input_fact(0, f32::fact([1, FEATURE_DIMENSION]).into())
            .map_err(|e| InferenceError::ModelLoad(e.to_string()))?
            .into_optimized()
            .map_err(|e| InferenceError::ModelLoad(e.to_string()))?
            .into_runnable()
            .map_err(|e| InferenceError::ModelLoad(e.to_string()))?;
        Ok(Self {
            plan,
            path: path.to_string(),
        })
    }

    /// Predict the risk label for one feature set.
    ///
    /// Assembles the ordered 1x5 input tensor with no scaling or derived
    /// features and runs a single forward pass.
    pub fn predict(&self, features: &FeatureSet) -> Result<RiskLabel, InferenceError> {
        let vector = features.to_vector();
        let input =
            tract_ndarray::Array2::from_shape_fn((1, FEATURE_DIMENSION), |(_, col)| {
                vector[col] as f32
            });
        let outputs = self
            .plan
            .run(tvec!(Tensor::from(input).into()))
            .map_err(|e| InferenceError::InferenceFailed(e.to_string()))?;
        let output = outputs.first().ok_or(InferenceError::EmptyOutput)?;
        let class_index = decode_class(output)?;
        debug!(class_index, "model forward pass complete");
        RiskLabel::from_class_index(class_index).ok_or(InferenceError::UnknownClass(class_index))
    }

    /// Predict labels for a batch of feature sets, in order
    pub fn predict_batch(
        &self,
        batch: &[FeatureSet],
    ) -> Result<Vec<RiskLabel>, InferenceError> {
        batch.iter().map(|features| self.predict(features)).collect()
    }

    /// Location the artifact was loaded from
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Decode the model's first output into a class index. Classifier artifacts
/// emit either an integer class label or a per-class score vector to arg-max.
fn decode_class(output: &Tensor) -> Result<i64, InferenceError> {
    match output.datum_type() {
        DatumType::I64 => {
            let view = output
                .to_array_view::<i64>()
                .map_err(|e| InferenceError::InferenceFailed(e.to_string()))?;
            view.iter().next().copied().ok_or(InferenceError::EmptyOutput)
        }
        DatumType::F32 => {
            let view = output
                .to_array_view::<f32>()
                .map_err(|e| InferenceError::InferenceFailed(e.to_string()))?;
            let mut best = None;
            let mut best_score = f32::NEG_INFINITY;
            for (index, &score) in view.iter().enumerate() {
                if score > best_score {
                    best = Some(index as i64);
                    best_score = score;
                }
            }
            best.ok_or(InferenceError::EmptyOutput)
        }
        other => Err(InferenceError::InferenceFailed(format!(
            "unsupported output type {:?}",
            other
        ))),
    }
}
