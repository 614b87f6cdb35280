//! # numkernels — small, validated numeric kernels for Rust
//!
//! This crate exposes a handful of fixed numeric computations ("kernels")
//! behind a typed, validated API: element-wise vector arithmetic, scalar
//! arithmetic with typed division-by-zero handling, and π approximation via
//! a selectable numeric method.
//!
//! Every kernel is a pure, single-shot, synchronous computation: given the
//! same inputs it produces the same output, it never mutates its inputs, and
//! no state survives between calls. Concurrent invocations from multiple
//! callers are therefore independently safe without locking.
//!
//! ## Quick Start
//!
//! ### Vector kernels
//!
//! ```rust
//! use numkernels::prelude::*;
//!
//! let a = vec![1.0, 2.0, 3.0];
//! let b = vec![4.0, 5.0, 6.0];
//!
//! let sum = add(&a, &b)?;
//! assert_eq!(sum, vec![5.0, 7.0, 9.0]);
//!
//! let product = multiply(&a, &b)?;
//! assert_eq!(product, vec![4.0, 10.0, 18.0]);
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! ### Scalar arithmetic
//!
//! ```rust
//! use numkernels::prelude::*;
//!
//! assert_eq!(arithmetic_op(6.0, 3.0, Div)?, 2.0);
//! assert!(matches!(
//!     arithmetic_op(6.0, 0.0, Div),
//!     Err(KernelError::DivisionByZero)
//! ));
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! ### π approximation
//!
//! ```rust
//! use numkernels::prelude::*;
//!
//! // Build the estimator
//! let estimate = Pi::new()
//!     .samples(100_000)       // Number of partitions/terms/draws
//!     .method(Midpoint)       // Numeric method
//!     .build()?
//!     .estimate::<f64>();
//!
//! assert!((estimate.value - core::f64::consts::PI).abs() < 1e-9);
//! println!("{}", estimate);
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! ```text
//! Pi Approximation:
//!   Method:  Midpoint
//!   Samples: 100000
//!   Value:   3.141592653589787
//! ```
//!
//! ### Result and Error Handling
//!
//! Every fallible operation returns `Result<_, KernelError>`. Failures are
//! reported synchronously to the caller as typed errors; nothing is retried,
//! logged, or silently recovered, since each kernel is idempotent and
//! side-effect-free.
//!
//! ```rust
//! use numkernels::prelude::*;
//!
//! let a = vec![1.0, 2.0, 3.0];
//! let b = vec![1.0, 2.0];
//!
//! match add(&a, &b) {
//!     Ok(sum) => println!("{:?}", sum),
//!     Err(KernelError::MismatchedInputs { left_len, right_len }) => {
//!         eprintln!("length mismatch: {left_len} vs {right_len}");
//!     }
//!     Err(e) => eprintln!("kernel failed: {e}"),
//! }
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! numkernels = { version = "0.3", default-features = false }
//! ```
//!
//! All kernels remain available; float math routes through `libm` via
//! `num-traits`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - shared error types.
mod primitives;

// Layer 2: Math - pure numeric kernels.
mod math;

// Layer 3: Engine - validation and output types.
mod engine;

// High-level API for the numeric kernels.
mod api;

// Standard numkernels prelude.
pub mod prelude {
    pub use crate::api::{
        add, approximate_pi, arithmetic_op, divide, multiply, subtract, ArithmeticOp,
        ArithmeticOp::{Add, Div, Mul, Sub},
        KernelError, PiBuilder as Pi, PiEstimate, PiKernel, PiMethod,
        PiMethod::{Leibniz, Midpoint, MonteCarlo},
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
