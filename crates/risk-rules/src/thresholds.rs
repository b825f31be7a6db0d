//! Shared threshold table
//!
//! Single source of truth for the per-feature rules: the classifier sums the
//! contributions, the explanation generator emits the reason attached to each
//! risk-adding contribution. A value exactly at a threshold lands on the
//! riskier side.

use feature_set::FeatureSet;

/// Stock on hand at or above this is a strong overstock signal
pub const STOCK_VERY_HIGH: f64 = 600.0;
/// Stock on hand at or above this is elevated
pub const STOCK_HIGH: f64 = 300.0;

/// Weekly sales at or below this signal near-dead demand
pub const SALES_VERY_LOW: f64 = 3.0;
/// Weekly sales at or below this signal slowing demand
pub const SALES_LOW: f64 = 10.0;

/// Days in inventory at or above this mark long-stale listings
pub const AGE_STALE_DAYS: f64 = 250.0;
/// Days in inventory at or above this mark mid-term shelf time
pub const AGE_AGING_DAYS: f64 = 120.0;

/// Ratings at or below this depress purchases
pub const RATING_LOW: f64 = 2.5;
/// Ratings at or below this are merely average
pub const RATING_AVERAGE: f64 = 3.5;

/// Return rate at or above this indicates quality issues
pub const RETURN_RATE_HIGH: f64 = 0.20;
/// Return rate at or above this is elevated
pub const RETURN_RATE_ELEVATED: f64 = 0.10;

/// Total score at or above this maps to High risk
pub const HIGH_CUTOFF: i32 = 6;
/// Total score at or above this (and below [`HIGH_CUTOFF`]) maps to Medium
pub const MEDIUM_CUTOFF: i32 = 3;

/// Outcome of one threshold rule: an integer risk contribution, plus the
/// human-readable reason whenever the rule adds risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleHit {
    pub contribution: i32,
    pub reason: Option<&'static str>,
}

impl RuleHit {
    const fn none() -> Self {
        Self {
            contribution: 0,
            reason: None,
        }
    }

    const fn healthy() -> Self {
        Self {
            contribution: -1,
            reason: None,
        }
    }

    const fn risk(contribution: i32, reason: &'static str) -> Self {
        Self {
            contribution,
            reason: Some(reason),
        }
    }
}

pub fn stock_rule(stock_amount: f64) -> RuleHit {
    if stock_amount >= STOCK_VERY_HIGH {
        RuleHit::risk(2, "Very high stock level")
    } else if stock_amount >= STOCK_HIGH {
        RuleHit::risk(1, "High stock level")
    } else {
        RuleHit::none()
    }
}

pub fn sales_rule(weekly_sales: f64) -> RuleHit {
    if weekly_sales <= SALES_VERY_LOW {
        RuleHit::risk(2, "Very low weekly sales")
    } else if weekly_sales <= SALES_LOW {
        RuleHit::risk(1, "Slowing demand / low weekly sales")
    } else {
        RuleHit::healthy()
    }
}

pub fn age_rule(product_age_days: f64) -> RuleHit {
    if product_age_days >= AGE_STALE_DAYS {
        RuleHit::risk(2, "Product has been in inventory for a long time")
    } else if product_age_days >= AGE_AGING_DAYS {
        RuleHit::risk(1, "Product age is increasing (mid-term shelf time)")
    } else {
        RuleHit::none()
    }
}

pub fn rating_rule(rating: f64) -> RuleHit {
    if rating <= RATING_LOW {
        RuleHit::risk(2, "Low customer rating (reduces purchase probability)")
    } else if rating <= RATING_AVERAGE {
        RuleHit::risk(1, "Average customer rating")
    } else {
        RuleHit::healthy()
    }
}

pub fn return_rate_rule(return_rate: f64) -> RuleHit {
    if return_rate >= RETURN_RATE_HIGH {
        RuleHit::risk(2, "High return rate (indicates product quality issues)")
    } else if return_rate >= RETURN_RATE_ELEVATED {
        RuleHit::risk(1, "Moderately high return rate")
    } else {
        RuleHit::none()
    }
}

/// Evaluate every rule in fixed feature order: stock level, sales velocity,
/// product age, rating, return rate.
pub fn evaluate(features: &FeatureSet) -> [RuleHit; 5] {
    [
        stock_rule(features.stock_amount),
        sales_rule(features.weekly_sales),
        age_rule(features.product_age_days),
        rating_rule(features.rating),
        return_rate_rule(features.return_rate),
    ]
}
