//! Element-wise vector arithmetic kernels.
//!
//! ## Purpose
//!
//! This module provides the raw element-wise kernels over numeric slices:
//! addition, subtraction, multiplication, and division. Each kernel combines
//! corresponding elements of two equal-length operands into a fresh output.
//!
//! ## Design notes
//!
//! * **Pure**: Kernels never mutate their operands; output is freshly allocated.
//! * **Generics**: Kernels are generic over `Float` types (`f32`/`f64`).
//! * **Unchecked**: Length agreement is the caller's responsibility (enforced
//!   by the engine validator); kernels only debug-assert it.
//!
//! ## Key concepts
//!
//! * **Element-wise operation**: applied independently to each corresponding
//!   pair of elements, so output length always equals input length.
//! * **IEEE division**: a zero divisor element yields ±infinity or NaN per
//!   IEEE-754; element-wise division performs no divisor checks.
//!
//! ## Invariants
//!
//! * `output.len() == a.len() == b.len()` for every kernel.
//! * `output[i]` depends only on `a[i]` and `b[i]`.
//!
//! ## Non-goals
//!
//! * This module does not validate operand lengths or finiteness.
//! * This module does not handle scalar operands (see `math::scalar`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Core Combinator
// ============================================================================

/// Combine two equal-length slices element by element.
#[inline]
fn zip_with<T: Float>(a: &[T], b: &[T], f: impl Fn(T, T) -> T) -> Vec<T> {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(&x, &y)| f(x, y)).collect()
}

// ============================================================================
// Element-wise Kernels
// ============================================================================

/// Element-wise sum: `out[i] = a[i] + b[i]`.
#[inline]
pub fn add<T: Float>(a: &[T], b: &[T]) -> Vec<T> {
    zip_with(a, b, |x, y| x + y)
}

/// Element-wise difference: `out[i] = a[i] - b[i]`.
#[inline]
pub fn subtract<T: Float>(a: &[T], b: &[T]) -> Vec<T> {
    zip_with(a, b, |x, y| x - y)
}

/// Element-wise product: `out[i] = a[i] * b[i]`.
#[inline]
pub fn multiply<T: Float>(a: &[T], b: &[T]) -> Vec<T> {
    zip_with(a, b, |x, y| x * y)
}

/// Element-wise quotient: `out[i] = a[i] / b[i]`.
///
/// Follows IEEE-754 semantics: a zero divisor element yields ±infinity
/// (or NaN for `0/0`). No divisor checks are performed.
#[inline]
pub fn divide<T: Float>(a: &[T], b: &[T]) -> Vec<T> {
    zip_with(a, b, |x, y| x / y)
}
