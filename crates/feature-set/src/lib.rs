//! Product Feature Validation
//!
//! Provides the validated five-field feature record consumed by the risk
//! scoring paths, plus boundary parsing from the flat field-name-to-number
//! mapping carried on the wire.

mod error;
mod features;

pub use error::ValidationError;
pub use features::{FeatureSet, FEATURE_DIMENSION, REQUIRED_FIELDS};
