//! Feature-level risk explanations

use crate::thresholds;
use feature_set::FeatureSet;

/// Turns a feature set into ordered human-readable reasons.
///
/// Re-evaluates the shared threshold table, so any rule that added risk to
/// the score has a matching reason here and vice versa. Explanations describe
/// feature-level signals only and never consult the trained model, which
/// keeps them meaningful even when the model and the rules disagree on the
/// final label.
pub struct ExplanationGenerator;

impl ExplanationGenerator {
    /// One reason per triggered risk condition, in fixed feature order:
    /// stock level, sales velocity, product age, rating, return rate.
    /// A feature set with no triggered conditions yields an empty list.
    pub fn explain(features: &FeatureSet) -> Vec<String> {
        thresholds::evaluate(features)
            .iter()
            .filter_map(|hit| hit.reason.map(str::to_string))
            .collect()
    }
}
