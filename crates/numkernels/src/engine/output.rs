//! Output types for kernel results.
//!
//! ## Purpose
//!
//! This module defines the `PiEstimate` struct which carries a π
//! approximation together with the method and sample count that produced
//! it.
//!
//! ## Design notes
//!
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//! * **Self-describing**: Carrying the method and sample count lets callers
//!   reproduce the estimate exactly (deterministic methods) or in
//!   distribution (stochastic methods).
//!
//! ## Invariants
//!
//! * `samples` is the count actually used, strictly positive.
//! * `seed` is populated only for the stochastic method.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::math::pi::PiMethod;

// ============================================================================
// Result Structure
// ============================================================================

/// A π approximation together with the configuration that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct PiEstimate<T> {
    /// The approximated value of π.
    pub value: T,

    /// Number of partitions/terms/draws used.
    pub samples: usize,

    /// The numeric method that produced the estimate.
    pub method: PiMethod,

    /// PRNG seed (stochastic methods only).
    pub seed: Option<u64>,
}

impl<T: Float> PiEstimate<T> {
    /// Absolute error of the estimate against π.
    pub fn absolute_error(&self) -> T {
        let pi = T::from(core::f64::consts::PI).unwrap_or_else(T::zero);
        (self.value - pi).abs()
    }

    /// Check whether the estimate came from a deterministic method.
    pub fn is_deterministic(&self) -> bool {
        self.method.is_deterministic()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for PiEstimate<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Pi Approximation:")?;
        writeln!(f, "  Method:  {}", self.method.name())?;
        writeln!(f, "  Samples: {}", self.samples)?;
        if let Some(seed) = self.seed {
            writeln!(f, "  Seed:    {}", seed)?;
        }
        write!(f, "  Value:   {}", self.value)
    }
}
