//! Error type definitions for field operations

/// Primary error type for pairfield operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An operand outside the domain of the operation (zero inverse,
    /// non-member of a subgroup)
    InvalidOperand {
        context: &'static str,
        reason: &'static str,
    },

    /// Input buffer shorter than the fixed encoding width
    BufferTooShort {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Encoded coefficient is not reduced modulo the field prime
    NonCanonical { context: &'static str },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        reason: &'static str,
    },
}

/// Result type for pairfield operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidOperand { reason, .. } => Self::InvalidOperand { context, reason },
            Self::BufferTooShort {
                expected, actual, ..
            } => Self::BufferTooShort {
                context,
                expected,
                actual,
            },
            Self::NonCanonical { .. } => Self::NonCanonical { context },
            Self::InvalidParameter { reason, .. } => Self::InvalidParameter { context, reason },
        }
    }

    /// The context the error was raised in
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidOperand { context, .. }
            | Self::BufferTooShort { context, .. }
            | Self::NonCanonical { context }
            | Self::InvalidParameter { context, .. } => context,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidOperand { context, reason } => {
                write!(f, "{}: invalid operand: {}", context, reason)
            }
            Self::BufferTooShort {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: buffer too short (expected at least {}, got {})",
                    context, expected, actual
                )
            }
            Self::NonCanonical { context } => {
                write!(f, "{}: encoding is not reduced modulo p", context)
            }
            Self::InvalidParameter { context, reason } => {
                write!(f, "{}: {}", context, reason)
            }
        }
    }
}
