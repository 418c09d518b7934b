// Copyright 2025 Cowboy AI, LLC.

//! Error types for combination operations

use thiserror::Error;

/// Errors that can occur when building or deriving values from combinations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombinationError {
    /// Negative universe size supplied to a constructor
    #[error("Invalid universe size: {size}")]
    InvalidSize {
        /// The rejected size
        size: i64,
    },

    /// Parts that do not form a composition of `n`
    #[error("Invalid composition of {n}: {reason}")]
    InvalidComposition {
        /// Universe size the parts were meant to cover
        n: usize,
        /// Why the parts were rejected
        reason: String,
    },

    /// Span requested for a combination with no members
    #[error("Span is undefined for an empty combination in a universe of size {n}")]
    UndefinedSpan {
        /// Universe size
        n: usize,
    },
}

/// Result type for combination operations
pub type CombinationResult<T> = Result<T, CombinationError>;

impl CombinationError {
    /// Check if this error rejects malformed input
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            CombinationError::InvalidSize { .. } | CombinationError::InvalidComposition { .. }
        )
    }

    /// Check if this error reports a derived value with no defined result
    pub fn is_undefined(&self) -> bool {
        matches!(self, CombinationError::UndefinedSpan { .. })
    }
}
