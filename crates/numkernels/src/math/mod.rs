//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numeric kernels:
//! - Element-wise vector arithmetic
//! - Scalar arithmetic operators
//! - π approximation methods
//!
//! These are reusable numeric building blocks with no validation or
//! orchestration logic; callers are expected to have validated inputs.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Element-wise vector arithmetic kernels.
pub mod elementwise;

/// Scalar arithmetic operators.
pub mod scalar;

/// π approximation methods.
pub mod pi;
