//! Validation utilities for field primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        log::debug!("rejected parameter {}: {}", name, reason);
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a minimum length
#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        log::debug!("{}: input of {} bytes, need {}", context, actual, min);
        return Err(Error::BufferTooShort {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Validate that an operand is usable by an operation
#[inline(always)]
pub fn operand(is_valid: bool, operation: &'static str, reason: &'static str) -> Result<()> {
    if !is_valid {
        log::debug!("{} rejected its operand: {}", operation, reason);
        return Err(Error::operand(operation, reason));
    }
    Ok(())
}
