//! High-level API for the numeric kernels.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: free functions
//! for the element-wise vector kernels and scalar arithmetic, and a fluent
//! builder for configuring π approximation.
//!
//! ## Design notes
//!
//! * **Validated**: Every entry point validates its inputs before touching
//!   the math layer; the math layer itself is unchecked.
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Vector kernels**: `add`, `subtract`, `multiply`, `divide` over
//!   equal-length slices.
//! * **Scalar kernel**: `arithmetic_op` with a runtime-selected operator.
//! * **Configuration Flow**: `Pi::new()` → chain setters → `.build()` →
//!   `.estimate()`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::elementwise;

// Publicly re-exported types
pub use crate::engine::output::PiEstimate;
pub use crate::math::pi::PiMethod;
pub use crate::math::scalar::ArithmeticOp;
pub use crate::primitives::errors::KernelError;

// ============================================================================
// Defaults
// ============================================================================

/// Default number of partitions/terms/draws for π approximation.
const DEFAULT_SAMPLES: usize = 10_000;

/// Default PRNG seed (PCG's reference initial state).
const DEFAULT_SEED: u64 = 0x853C_49E6_748F_EA9B;

// ============================================================================
// Vector Kernels
// ============================================================================

/// Element-wise sum of two equal-length slices.
///
/// Fails with [`KernelError::MismatchedInputs`] when the operand lengths
/// differ, [`KernelError::EmptyInput`] when either operand is empty, and
/// [`KernelError::InvalidNumericValue`] when an element is NaN or infinite.
///
/// # Examples
///
/// ```rust
/// use numkernels::prelude::*;
///
/// let sum = add(&[1.0, 2.0], &[3.0, 4.0])?;
/// assert_eq!(sum, vec![4.0, 6.0]);
/// # Result::<(), KernelError>::Ok(())
/// ```
pub fn add<T: Float>(a: &[T], b: &[T]) -> Result<Vec<T>, KernelError> {
    Validator::validate_pair(a, b)?;
    Ok(elementwise::add(a, b))
}

/// Element-wise difference of two equal-length slices.
///
/// Same preconditions as [`add`].
pub fn subtract<T: Float>(a: &[T], b: &[T]) -> Result<Vec<T>, KernelError> {
    Validator::validate_pair(a, b)?;
    Ok(elementwise::subtract(a, b))
}

/// Element-wise product of two equal-length slices.
///
/// Same preconditions as [`add`].
pub fn multiply<T: Float>(a: &[T], b: &[T]) -> Result<Vec<T>, KernelError> {
    Validator::validate_pair(a, b)?;
    Ok(elementwise::multiply(a, b))
}

/// Element-wise quotient of two equal-length slices.
///
/// Same preconditions as [`add`]. Division follows IEEE-754 semantics: a
/// zero divisor element yields ±infinity (or NaN for `0/0`) rather than an
/// error, matching the behavior of a raw floating-point loop.
pub fn divide<T: Float>(a: &[T], b: &[T]) -> Result<Vec<T>, KernelError> {
    Validator::validate_pair(a, b)?;
    Ok(elementwise::divide(a, b))
}

// ============================================================================
// Scalar Kernel
// ============================================================================

/// Apply a basic arithmetic operator to a pair of scalars.
///
/// Fails with [`KernelError::DivisionByZero`] when `op` is
/// [`ArithmeticOp::Div`] and `y == 0`, and with
/// [`KernelError::InvalidNumericValue`] when either operand is NaN or
/// infinite.
///
/// # Examples
///
/// ```rust
/// use numkernels::prelude::*;
///
/// assert_eq!(arithmetic_op(6.0, 3.0, Div)?, 2.0);
/// assert_eq!(arithmetic_op(2.0, 5.0, Mul)?, 10.0);
/// # Result::<(), KernelError>::Ok(())
/// ```
pub fn arithmetic_op<T: Float>(x: T, y: T, op: ArithmeticOp) -> Result<T, KernelError> {
    Validator::validate_scalar(x, "x")?;
    Validator::validate_scalar(y, "y")?;
    op.evaluate(x, y)
}

// ============================================================================
// Pi Approximation Builder
// ============================================================================

/// Fluent builder for configuring π approximation.
#[derive(Debug, Clone)]
pub struct PiBuilder {
    /// Number of partitions/terms/draws.
    pub samples: Option<usize>,

    /// Numeric method.
    pub method: Option<PiMethod>,

    /// PRNG seed for reproducible Monte Carlo estimates.
    pub seed: Option<u64>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl Default for PiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PiBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            samples: None,
            method: None,
            seed: None,
            duplicate_param: None,
        }
    }

    /// Set the number of partitions/terms/draws.
    pub fn samples(mut self, samples: usize) -> Self {
        if self.samples.is_some() {
            self.duplicate_param = Some("samples");
        }
        self.samples = Some(samples);
        self
    }

    /// Set the numeric method.
    pub fn method(mut self, method: PiMethod) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    /// Set the PRNG seed for reproducible Monte Carlo estimates.
    ///
    /// Deterministic methods ignore the seed. Using the same seed produces
    /// identical draw sequences across runs.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the π estimator.
    pub fn build(self) -> Result<PiKernel, KernelError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let samples = self.samples.unwrap_or(DEFAULT_SAMPLES);
        Validator::validate_samples(samples)?;

        Ok(PiKernel {
            samples,
            method: self.method.unwrap_or_default(),
            seed: self.seed.unwrap_or(DEFAULT_SEED),
        })
    }
}

// ============================================================================
// Pi Approximation Kernel
// ============================================================================

/// Configured π estimator.
#[derive(Debug, Clone)]
pub struct PiKernel {
    samples: usize,
    method: PiMethod,
    seed: u64,
}

impl PiKernel {
    /// Compute the π estimate.
    ///
    /// Each call is an independent, single-shot computation; nothing is
    /// retained between calls, so repeated calls on the same kernel yield
    /// identical estimates.
    pub fn estimate<T: Float>(&self) -> PiEstimate<T> {
        PiEstimate {
            value: self.method.estimate(self.samples, self.seed),
            samples: self.samples,
            method: self.method,
            seed: match self.method {
                PiMethod::MonteCarlo => Some(self.seed),
                _ => None,
            },
        }
    }
}

// ============================================================================
// Pi Approximation Convenience Function
// ============================================================================

/// Approximate π with the default (midpoint quadrature) method.
///
/// Fails with [`KernelError::InvalidSampleCount`] when `samples == 0`. The
/// result is exactly reproducible for a given `samples` value.
///
/// # Examples
///
/// ```rust
/// use numkernels::prelude::*;
///
/// let pi = approximate_pi::<f64>(1_000)?;
/// assert!((pi - core::f64::consts::PI).abs() < 1e-6);
/// # Result::<(), KernelError>::Ok(())
/// ```
pub fn approximate_pi<T: Float>(samples: usize) -> Result<T, KernelError> {
    let kernel = PiBuilder::new().samples(samples).build()?;
    Ok(kernel.estimate().value)
}
