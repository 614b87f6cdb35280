//! Input validation for kernel invocations.
//!
//! ## Purpose
//!
//! This module provides validation functions for kernel inputs and
//! parameters. It checks requirements such as operand lengths, finite
//! values, and positive sample counts.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Operand agreement**: element-wise kernels require equal-length,
//!   non-empty operands.
//! * **Finite checks**: Ensures all inputs are finite (no NaN/Inf).
//! * **Sample bounds**: π approximation requires a positive sample count.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or repair invalid inputs.
//! * This module does not perform the kernel computations themselves.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::KernelError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for kernel inputs and parameters.
///
/// Provides static methods for validating operands and configuration. All
/// methods return `Result<(), KernelError>` and fail fast upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Operand Validation
    // ========================================================================

    /// Validate a pair of operands for an element-wise kernel.
    pub fn validate_pair<T: Float>(a: &[T], b: &[T]) -> Result<(), KernelError> {
        // Check 1: Non-empty operands
        if a.is_empty() || b.is_empty() {
            return Err(KernelError::EmptyInput);
        }

        // Check 2: Matching lengths
        if a.len() != b.len() {
            return Err(KernelError::MismatchedInputs {
                left_len: a.len(),
                right_len: b.len(),
            });
        }

        // Check 3: All elements finite (combined loop for cache locality)
        for i in 0..a.len() {
            if !a[i].is_finite() {
                return Err(KernelError::InvalidNumericValue(format!(
                    "a[{}]={}",
                    i,
                    a[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !b[i].is_finite() {
                return Err(KernelError::InvalidNumericValue(format!(
                    "b[{}]={}",
                    i,
                    b[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate a single scalar operand for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), KernelError> {
        if !val.is_finite() {
            return Err(KernelError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the sample count for π approximation.
    pub fn validate_samples(samples: usize) -> Result<(), KernelError> {
        if samples == 0 {
            return Err(KernelError::InvalidSampleCount(samples));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), KernelError> {
        if let Some(param) = duplicate_param {
            return Err(KernelError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
