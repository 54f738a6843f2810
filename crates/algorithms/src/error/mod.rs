//! Error handling for field primitives

use core::fmt;

use pairfield_api::{Error as CoreError, Result as CoreResult};

/// The error type for field primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Input shorter than a fixed-width encoding
    BufferTooShort {
        /// Context where the length error occurred
        context: &'static str,
        /// Minimum length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Encoded base field coefficient is not below the modulus
    NonCanonical {
        /// Context where the encoding was rejected
        context: &'static str,
    },

    /// Operand outside the domain of an operation
    InvalidOperand {
        /// Operation that rejected the operand
        operation: &'static str,
        /// Why the operand is invalid
        reason: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }

    /// Shorthand to create an InvalidOperand error
    pub fn operand(operation: &'static str, reason: &'static str) -> Self {
        Error::InvalidOperand { operation, reason }
    }
}

/// Result type for field primitive operations
pub type Result<T> = core::result::Result<T, Error>;

// Display implementation for error formatting
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::BufferTooShort {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Buffer too short for {}: expected at least {}, got {}",
                    context, expected, actual
                )
            }
            Error::NonCanonical { context } => {
                write!(f, "Non-canonical field encoding in {}", context)
            }
            Error::InvalidOperand { operation, reason } => {
                write!(f, "Invalid operand for {}: {}", operation, reason)
            }
        }
    }
}

// Implement std::error::Error when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                reason,
            },
            Error::BufferTooShort {
                context,
                expected,
                actual,
            } => CoreError::BufferTooShort {
                context,
                expected,
                actual,
            },
            Error::NonCanonical { context } => CoreError::NonCanonical { context },
            Error::InvalidOperand { operation, reason } => CoreError::InvalidOperand {
                context: operation,
                reason,
            },
        }
    }
}

/// Convert a primitives result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

// Re-export core error handling traits for convenience
pub use pairfield_api::error::ResultExt;

// Include the validation submodule
pub mod validate;
