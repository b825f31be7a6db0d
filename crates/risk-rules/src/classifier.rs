//! Rule-based classification

use crate::label::RiskLabel;
use crate::thresholds;
use feature_set::FeatureSet;
use tracing::debug;

/// Deterministic threshold classifier.
///
/// Pure function of the feature set: per-feature contributions from the
/// shared threshold table are summed and mapped to a label via the two cut
/// points.
pub struct RuleBasedClassifier;

impl RuleBasedClassifier {
    /// Classify one feature set
    pub fn classify(features: &FeatureSet) -> RiskLabel {
        let score = Self::risk_score(features);
        let label = if score >= thresholds::HIGH_CUTOFF {
            RiskLabel::High
        } else if score >= thresholds::MEDIUM_CUTOFF {
            RiskLabel::Medium
        } else {
            RiskLabel::Low
        };
        debug!(score, label = label.as_str(), "rule-based classification");
        label
    }

    /// Summed rule contributions before the label cut points are applied
    pub fn risk_score(features: &FeatureSet) -> i32 {
        thresholds::evaluate(features)
            .iter()
            .map(|hit| hit.contribution)
            .sum()
    }
}
