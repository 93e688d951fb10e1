//! Unified error types for the domain layer
//!
//! Data-shape problems in character documents are defaulted and never reach
//! this type. What remains are genuine configuration errors plus parse
//! failures from strict constructors.

use thiserror::Error;

use crate::calculation::CostError;
use crate::value_objects::DiceParseError;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// A stat code that names no known statistic
    #[error("Unknown stat code: {0}")]
    UnknownStat(String),

    /// Limitations add up to a non-positive or non-finite cost denominator
    #[error("Invalid modifier configuration: limitation sum {limitation_sum} cannot divide a cost")]
    InvalidModifierSum { limitation_sum: f64 },
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// # Example
    /// ```ignore
    /// if !(floor.is_finite() && floor > 0.0) {
    ///     return Err(DomainError::validation("limitation floor must be positive"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an unknown stat error
    pub fn unknown_stat(code: impl Into<String>) -> Self {
        Self::UnknownStat(code.into())
    }
}

impl From<DiceParseError> for DomainError {
    fn from(err: DiceParseError) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<CostError> for DomainError {
    fn from(err: CostError) -> Self {
        match err {
            CostError::InvalidModifierSum { limitation_sum } => {
                Self::InvalidModifierSum { limitation_sum }
            }
        }
    }
}
