//! Error types for numeric kernel operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur when invoking a
//! kernel, including input validation, sample-count constraints, and scalar
//! division by zero.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual lengths).
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty inputs, mismatched lengths, non-finite values.
//! 2. **Parameter validation**: Zero sample counts for π approximation.
//! 3. **Arithmetic failures**: Scalar division by zero.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for numeric kernel operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// Input slices are empty; element-wise kernels require at least 1 element.
    EmptyInput,

    /// The two operand slices must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the left operand.
        left_len: usize,
        /// Number of elements in the right operand.
        right_len: usize,
    },

    /// Input contains NaN or infinite values.
    InvalidNumericValue(String),

    /// π approximation requires a strictly positive sample count.
    InvalidSampleCount(usize),

    /// Scalar division by zero.
    DivisionByZero,

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for KernelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input slices are empty"),
            Self::MismatchedInputs {
                left_len,
                right_len,
            } => {
                write!(
                    f,
                    "Length mismatch: left operand has {left_len} elements, right has {right_len}"
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidSampleCount(n) => {
                write!(f, "Invalid sample count: {n} (must be > 0)")
            }
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for KernelError {}
