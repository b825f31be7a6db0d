//! Risk Scoring Engine
//!
//! Orchestrates one scoring call end to end:
//! - label from the trained model when an artifact was loaded at startup,
//!   otherwise from the deterministic rule-based classifier
//! - explanations from the shared threshold rules, regardless of path
//!
//! The engine is synchronous, stateless per call, and shareable across
//! threads; the loaded artifact is the only process-lifetime state.

mod config;
mod engine;

pub use config::EngineConfig;
pub use engine::{PredictionResult, Predictor, RiskScoringEngine};

pub use feature_set::{FeatureSet, ValidationError};
pub use risk_rules::RiskLabel;
