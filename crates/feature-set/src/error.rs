//! Validation Error Types

use thiserror::Error;

/// Errors raised while building a feature set from raw input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Missing required field
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Value is not a finite number
    #[error("{field} must be a finite number")]
    NotNumeric { field: &'static str },

    /// Value outside the documented domain
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfDomain {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
