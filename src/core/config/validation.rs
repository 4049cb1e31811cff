//! Validation helper functions for configuration types.

use crate::core::errors::{ErrknowError, Result};

/// Validate that a usize value is greater than zero.
pub fn validate_positive_usize(value: usize, field: &str) -> Result<()> {
    if value == 0 {
        return Err(ErrknowError::validation(
            format!("{field} must be greater than 0"),
            field,
        ));
    }
    Ok(())
}

/// Validate that an optional usize, when set, is greater than zero.
pub fn validate_optional_positive_usize(value: Option<usize>, field: &str) -> Result<()> {
    match value {
        Some(v) => validate_positive_usize(v, field),
        None => Ok(()),
    }
}
