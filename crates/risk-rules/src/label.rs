//! Risk label enumeration

use serde::{Deserialize, Serialize};

/// Inventory risk level for one product.
///
/// Serializes to exactly `"Low"` / `"Medium"` / `"High"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLabel {
    Low,
    Medium,
    High,
}

impl RiskLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::Low => "Low",
            RiskLabel::Medium => "Medium",
            RiskLabel::High => "High",
        }
    }

    /// Severity ordering for UI mapping (Low < Medium < High)
    pub fn severity_level(&self) -> u8 {
        match self {
            RiskLabel::Low => 0,
            RiskLabel::Medium => 1,
            RiskLabel::High => 2,
        }
    }

    /// Map a trained artifact's class index to a label
    pub fn from_class_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(RiskLabel::Low),
            1 => Some(RiskLabel::Medium),
            2 => Some(RiskLabel::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_index_mapping() {
        assert_eq!(RiskLabel::from_class_index(0), Some(RiskLabel::Low));
        assert_eq!(RiskLabel::from_class_index(1), Some(RiskLabel::Medium));
        assert_eq!(RiskLabel::from_class_index(2), Some(RiskLabel::High));
        assert_eq!(RiskLabel::from_class_index(3), None);
        assert_eq!(RiskLabel::from_class_index(-1), None);
    }

    #[test]
    fn severity_is_ordered() {
        assert!(RiskLabel::Low.severity_level() < RiskLabel::Medium.severity_level());
        assert!(RiskLabel::Medium.severity_level() < RiskLabel::High.severity_level());
    }
}
