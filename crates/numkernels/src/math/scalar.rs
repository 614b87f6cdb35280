//! Scalar arithmetic operators.
//!
//! ## Purpose
//!
//! This module defines the basic scalar arithmetic operators (`add`, `sub`,
//! `mul`, `div`) as an enum with a single evaluation entry point, so callers
//! can select the operator at runtime.
//!
//! ## Design notes
//!
//! * **Dispatch**: Operator selection via enum match, like the scaling and
//!   weighting method enums elsewhere in this family of crates.
//! * **Typed failure**: Division by a zero divisor is reported as
//!   `KernelError::DivisionByZero` rather than producing an IEEE infinity,
//!   since a scalar quotient has no surrounding sequence to absorb it.
//!
//! ## Invariants
//!
//! * `evaluate` is a pure function of its operands.
//! * Only `Div` can fail.
//!
//! ## Non-goals
//!
//! * This module does not validate operand finiteness (engine validator).
//! * This module does not handle sequence operands (see `math::elementwise`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::KernelError;

// ============================================================================
// Arithmetic Operator Enum
// ============================================================================

/// Basic scalar arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArithmeticOp {
    /// Addition: `x + y`.
    #[default]
    Add,

    /// Subtraction: `x - y`.
    Sub,

    /// Multiplication: `x * y`.
    Mul,

    /// Division: `x / y`. Fails with `DivisionByZero` when `y == 0`.
    Div,
}

impl ArithmeticOp {
    // ========================================================================
    // Metadata Methods
    // ========================================================================

    /// Get the name of the operator.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            ArithmeticOp::Add => "Add",
            ArithmeticOp::Sub => "Sub",
            ArithmeticOp::Mul => "Mul",
            ArithmeticOp::Div => "Div",
        }
    }

    /// Get the conventional infix symbol for the operator.
    #[inline]
    pub const fn symbol(&self) -> char {
        match self {
            ArithmeticOp::Add => '+',
            ArithmeticOp::Sub => '-',
            ArithmeticOp::Mul => '*',
            ArithmeticOp::Div => '/',
        }
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Apply the operator to a pair of scalars.
    #[inline]
    pub fn evaluate<T: Float>(&self, x: T, y: T) -> Result<T, KernelError> {
        match self {
            ArithmeticOp::Add => Ok(x + y),
            ArithmeticOp::Sub => Ok(x - y),
            ArithmeticOp::Mul => Ok(x * y),
            ArithmeticOp::Div => {
                if y == T::zero() {
                    return Err(KernelError::DivisionByZero);
                }
                Ok(x / y)
            }
        }
    }
}
