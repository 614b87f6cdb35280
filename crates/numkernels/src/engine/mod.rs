//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer sits between the pure math kernels and the public API:
//! - Fail-fast validation of inputs and parameters
//! - Output/result types for kernel invocations
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input and parameter validation.
pub mod validator;

/// Output types for kernel results.
pub mod output;
