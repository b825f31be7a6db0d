//! Engine orchestration

use crate::EngineConfig;
use feature_set::FeatureSet;
use model_inference::{InferenceError, ModelPredictor};
use risk_rules::{ExplanationGenerator, RiskLabel, RuleBasedClassifier};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Label source consulted before the rule-based fallback.
///
/// [`ModelPredictor`] implements this; tests inject deterministic stubs.
pub trait Predictor: Send + Sync {
    /// Predict a label for one validated feature set
    fn predict(&self, features: &FeatureSet) -> Result<RiskLabel, InferenceError>;

    /// Short name used in logging
    fn name(&self) -> &str;
}

impl Predictor for ModelPredictor {
    fn predict(&self, features: &FeatureSet) -> Result<RiskLabel, InferenceError> {
        ModelPredictor::predict(self, features)
    }

    fn name(&self) -> &str {
        self.path()
    }
}

/// Final scoring outcome: the label plus ordered human-readable reasons.
///
/// Serializes to the wire shape `{"risk": "...", "explanations": [...]}`.
/// Carries no reference to the input and no identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub risk: RiskLabel,
    pub explanations: Vec<String>,
}

/// Orchestrator for one scoring call.
///
/// Path selection happens only here: the injected predictor picks the label
/// when present and its forward pass succeeds; the rule-based classifier
/// otherwise. Explanations always come from the threshold rules, so they stay
/// consistent even when the model and the rules disagree.
pub struct RiskScoringEngine {
    predictor: Option<Box<dyn Predictor>>,
}

impl RiskScoringEngine {
    /// Build from configuration, attempting the one-time artifact load.
    ///
    /// A missing or unloadable artifact is a degradation, not a failure: the
    /// engine logs the notice once and serves the rule-based path for the
    /// process lifetime.
    pub fn from_config(config: &EngineConfig) -> Self {
        let predictor = match &config.model_path {
            Some(path) => match ModelPredictor::load(path) {
                Ok(model) => {
                    info!("Risk model loaded from {}", model.path());
                    Some(Box::new(model) as Box<dyn Predictor>)
                }
                Err(e) => {
                    warn!("Risk model unavailable, serving rule-based fallback: {}", e);
                    None
                }
            },
            None => {
                info!("No risk model configured, serving rule-based path");
                None
            }
        };
        Self { predictor }
    }

    /// Engine with no trained predictor
    pub fn rules_only() -> Self {
        Self { predictor: None }
    }

    /// Engine with an injected predictor
    pub fn with_predictor(predictor: Box<dyn Predictor>) -> Self {
        Self {
            predictor: Some(predictor),
        }
    }

    /// Whether a trained predictor is serving the label path
    pub fn has_model(&self) -> bool {
        self.predictor.is_some()
    }

    /// Score one feature set
    pub fn score(&self, features: &FeatureSet) -> PredictionResult {
        let risk = self.label_for(features);
        let explanations = ExplanationGenerator::explain(features);
        PredictionResult { risk, explanations }
    }

    /// Score a batch of feature sets, preserving order
    pub fn score_batch(&self, batch: &[FeatureSet]) -> Vec<PredictionResult> {
        batch.iter().map(|features| self.score(features)).collect()
    }

    fn label_for(&self, features: &FeatureSet) -> RiskLabel {
        if let Some(predictor) = &self.predictor {
            match predictor.predict(features) {
                Ok(label) => return label,
                Err(e) => {
                    debug!(
                        "Predictor {} failed, using rule-based label: {}",
                        predictor.name(),
                        e
                    );
                }
            }
        }
        RuleBasedClassifier::classify(features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;
    use std::sync::Arc;

    struct FixedLabel(RiskLabel);

    impl Predictor for FixedLabel {
        fn predict(&self, _features: &FeatureSet) -> Result<RiskLabel, InferenceError> {
            Ok(self.0)
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    struct AlwaysFails;

    impl Predictor for AlwaysFails {
        fn predict(&self, _features: &FeatureSet) -> Result<RiskLabel, InferenceError> {
            Err(InferenceError::InferenceFailed("stub".to_string()))
        }

        fn name(&self) -> &str {
            "broken"
        }
    }

    fn risky_features() -> FeatureSet {
        FeatureSet::new(800.0, 2.0, 300.0, 2.1, 0.25).unwrap()
    }

    fn healthy_features() -> FeatureSet {
        FeatureSet::new(50.0, 40.0, 10.0, 4.8, 0.02).unwrap()
    }

    #[test]
    fn rules_only_scores_risky_product_high() {
        let result = RiskScoringEngine::rules_only().score(&risky_features());
        assert_eq!(result.risk, RiskLabel::High);
        assert!(result
            .explanations
            .contains(&"Very high stock level".to_string()));
        assert!(result
            .explanations
            .contains(&"Very low weekly sales".to_string()));
    }

    #[test]
    fn rules_only_scores_healthy_product_low() {
        let result = RiskScoringEngine::rules_only().score(&healthy_features());
        assert_eq!(result.risk, RiskLabel::Low);
        assert!(result.explanations.is_empty());
    }

    #[test]
    fn injected_predictor_picks_the_label_but_not_the_explanations() {
        let engine = RiskScoringEngine::with_predictor(Box::new(FixedLabel(RiskLabel::High)));
        let result = engine.score(&healthy_features());
        // Model and rules disagree: the model label wins, the explanations
        // still describe the feature-level signals (none here).
        assert_eq!(result.risk, RiskLabel::High);
        assert!(result.explanations.is_empty());
    }

    #[test]
    fn failing_predictor_falls_back_to_rule_label() {
        let engine = RiskScoringEngine::with_predictor(Box::new(AlwaysFails));
        let result = engine.score(&risky_features());
        assert_eq!(result.risk, RiskLabel::High);
    }

    #[test]
    fn unloadable_artifact_degrades_to_rules() {
        let config = EngineConfig::with_model("/nonexistent/risk_model.onnx");
        let engine = RiskScoringEngine::from_config(&config);
        assert!(!engine.has_model());
        assert_eq!(engine.score(&risky_features()).risk, RiskLabel::High);
        assert_eq!(engine.score(&healthy_features()).risk, RiskLabel::Low);
    }

    #[test]
    fn default_config_serves_rules_only() {
        let engine = RiskScoringEngine::from_config(&EngineConfig::default());
        assert!(!engine.has_model());
    }

    #[test]
    fn result_serializes_to_wire_shape() {
        let result = RiskScoringEngine::rules_only().score(&risky_features());
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["risk"], json!("High"));
        assert!(value["explanations"].is_array());
        assert_eq!(
            value["explanations"][0],
            json!("Very high stock level")
        );
    }

    #[test]
    fn batch_scoring_preserves_order() {
        let engine = RiskScoringEngine::rules_only();
        let batch = [risky_features(), healthy_features()];
        let results = engine.score_batch(&batch);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].risk, RiskLabel::High);
        assert_eq!(results[1].risk, RiskLabel::Low);
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        let engine = Arc::new(RiskScoringEngine::with_predictor(Box::new(FixedLabel(
            RiskLabel::Medium,
        ))));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = Arc::clone(&engine);
                std::thread::spawn(move || engine.score(&risky_features()).risk)
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), RiskLabel::Medium);
        }
    }

    proptest! {
        #[test]
        fn fallback_output_equals_rule_classifier(
            stock in 0.0f64..100_000.0,
            sales in 0.0f64..10_000.0,
            age in 0.0f64..10_000.0,
            rating in 0.0f64..=5.0,
            rate in 0.0f64..=1.0,
        ) {
            let features = FeatureSet::new(stock, sales, age, rating, rate).unwrap();
            let engine = RiskScoringEngine::rules_only();
            let result = engine.score(&features);
            prop_assert_eq!(result.risk, RuleBasedClassifier::classify(&features));
            // Identical input, identical result
            prop_assert_eq!(result, engine.score(&features));
            // Elevated labels always carry at least one reason
            if RuleBasedClassifier::classify(&features) != RiskLabel::Low {
                prop_assert!(!engine.score(&features).explanations.is_empty());
            }
        }
    }
}
