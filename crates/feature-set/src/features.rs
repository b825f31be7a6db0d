//! Feature record assembly and domain checking

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Number of features consumed by the scoring paths
pub const FEATURE_DIMENSION: usize = 5;

/// Field names in model input order
pub const REQUIRED_FIELDS: [&str; FEATURE_DIMENSION] = [
    "stock_amount",
    "weekly_sales",
    "product_age_days",
    "rating",
    "return_rate",
];

/// Validated product features for one scoring call.
///
/// Constructed through [`FeatureSet::new`] or [`FeatureSet::from_json`], which
/// enforce the documented domains. Out-of-domain values are rejected, not
/// clamped. The scoring engine assumes every `FeatureSet` it receives passed
/// this boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    /// Units on hand
    pub stock_amount: f64,
    /// Units sold per week
    pub weekly_sales: f64,
    /// Days since the product was listed
    pub product_age_days: f64,
    /// Customer rating on a 0-5 scale
    pub rating: f64,
    /// Fraction of sold units returned, in [0, 1]
    pub return_rate: f64,
}

impl FeatureSet {
    /// Build a feature set, validating every field against its domain
    pub fn new(
        stock_amount: f64,
        weekly_sales: f64,
        product_age_days: f64,
        rating: f64,
        return_rate: f64,
    ) -> Result<Self, ValidationError> {
        let features = Self {
            stock_amount,
            weekly_sales,
            product_age_days,
            rating,
            return_rate,
        };
        features.validate()?;
        Ok(features)
    }

    /// Parse the wire payload: a flat mapping of the five field names to
    /// numbers. Missing or non-numeric fields are rejected with the field
    /// name, then domains are checked as in [`FeatureSet::new`].
    pub fn from_json(payload: &serde_json::Value) -> Result<Self, ValidationError> {
        let mut values = [0.0f64; FEATURE_DIMENSION];
        for (slot, field) in values.iter_mut().zip(REQUIRED_FIELDS) {
            let raw = payload
                .get(field)
                .ok_or(ValidationError::MissingField(field))?;
            *slot = raw.as_f64().ok_or(ValidationError::NotNumeric { field })?;
        }
        Self::new(values[0], values[1], values[2], values[3], values[4])
    }

    /// Ordered feature vector expected by trained artifacts
    pub fn to_vector(&self) -> [f64; FEATURE_DIMENSION] {
        [
            self.stock_amount,
            self.weekly_sales,
            self.product_age_days,
            self.rating,
            self.return_rate,
        ]
    }

    fn validate(&self) -> Result<(), ValidationError> {
        check("stock_amount", self.stock_amount, 0.0, f64::INFINITY)?;
        check("weekly_sales", self.weekly_sales, 0.0, f64::INFINITY)?;
        check("product_age_days", self.product_age_days, 0.0, f64::INFINITY)?;
        check("rating", self.rating, 0.0, 5.0)?;
        check("return_rate", self.return_rate, 0.0, 1.0)?;
        Ok(())
    }
}

fn check(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotNumeric { field });
    }
    if value < min || value > max {
        return Err(ValidationError::OutOfDomain {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
