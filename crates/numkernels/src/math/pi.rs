//! π approximation methods.
//!
//! ## Purpose
//!
//! This module provides the numeric methods for approximating π. It defines
//! a method enum with a single estimation entry point, so callers can select
//! the method at runtime.
//!
//! ## Design notes
//!
//! * **Determinism**: Midpoint and Leibniz are exactly reproducible for a
//!   given sample count; Monte Carlo is reproducible for a given
//!   `(samples, seed)` pair via an internal seeded LCG.
//! * **Accumulation**: All methods accumulate in `f64` regardless of the
//!   output type, so `f32` results are not degraded by summation error.
//! * **Unchecked**: A positive sample count is the caller's responsibility
//!   (enforced by the engine validator); methods only debug-assert it.
//!
//! ## Key concepts
//!
//! * **Midpoint**: composite midpoint-rule integration of 4/(1 + x²) over
//!   [0, 1] (∫₀¹ 4/(1 + x²) dx = π exactly). Error O(1/n²).
//! * **Leibniz**: alternating series π/4 = 1 − 1/3 + 1/5 − …, truncation
//!   error bounded by the first omitted term, 1/(2n + 1). Error O(1/n).
//! * **MonteCarlo**: rejection sampling in the unit square; the hit
//!   fraction for the inscribed quarter circle times 4 estimates π.
//!   Standard error O(1/√n) in expectation.
//!
//! ## Invariants
//!
//! * Every method returns a value in [0, 4] for any positive sample count.
//! * Accuracy improves (in expectation, for Monte Carlo) as samples grow.
//!
//! ## Non-goals
//!
//! * This module does not validate sample counts.
//! * This module does not accelerate series convergence (no Euler transform).
//! * This module does not provide a cryptographic or general-purpose PRNG.

// External dependencies
use num_traits::Float;

// ============================================================================
// Internal PRNG
// ============================================================================

/// Minimal PRNG for no-std sampling.
///
/// Uses an LCG (Linear Congruential Generator) with constants from PCG/MQL.
#[derive(Debug, Clone)]
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u32(&mut self) -> u32 {
        // LCG constants for 64-bit state
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    /// Uniform draw in [0, 1).
    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0)
    }
}

// ============================================================================
// Method Properties
// ============================================================================

/// Convergence properties of a π approximation method.
///
/// | Method     | Error bound          | Deterministic |
/// |------------|----------------------|---------------|
/// | Midpoint   | O(1/n²)              | yes           |
/// | Leibniz    | 1/(2n + 1), O(1/n)   | yes           |
/// | MonteCarlo | O(1/√n) (std. error) | no            |
struct MethodProperties {
    /// Whether repeated runs with the same sample count agree exactly
    /// (ignoring the seed).
    deterministic: bool,

    /// Convergence exponent p such that the error shrinks as O(1/n^p).
    order: f64,
}

/// Precomputed properties for the Midpoint method.
const MIDPOINT_PROPERTIES: MethodProperties = MethodProperties {
    deterministic: true,
    order: 2.0,
};

/// Precomputed properties for the Leibniz method.
const LEIBNIZ_PROPERTIES: MethodProperties = MethodProperties {
    deterministic: true,
    order: 1.0,
};

/// Precomputed properties for the MonteCarlo method.
const MONTE_CARLO_PROPERTIES: MethodProperties = MethodProperties {
    deterministic: false,
    order: 0.5,
};

// ============================================================================
// Pi Method Enum
// ============================================================================

/// Numeric method for approximating π.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PiMethod {
    /// Composite midpoint-rule integration of 4/(1 + x²) over [0, 1].
    ///
    /// This is the default and recommended method.
    #[default]
    Midpoint,

    /// Leibniz alternating series: π/4 = 1 − 1/3 + 1/5 − 1/7 + ….
    Leibniz,

    /// Rejection sampling in the unit square with a seeded LCG.
    MonteCarlo,
}

impl PiMethod {
    // ========================================================================
    // Metadata Methods
    // ========================================================================

    /// Get the name of the method.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            PiMethod::Midpoint => "Midpoint",
            PiMethod::Leibniz => "Leibniz",
            PiMethod::MonteCarlo => "MonteCarlo",
        }
    }

    /// Get the method properties.
    const fn properties(&self) -> &'static MethodProperties {
        match self {
            PiMethod::Midpoint => &MIDPOINT_PROPERTIES,
            PiMethod::Leibniz => &LEIBNIZ_PROPERTIES,
            PiMethod::MonteCarlo => &MONTE_CARLO_PROPERTIES,
        }
    }

    /// Whether the method is exactly reproducible for a given sample count.
    #[inline]
    pub fn is_deterministic(&self) -> bool {
        self.properties().deterministic
    }

    /// Convergence exponent p: the error shrinks as O(1/n^p).
    #[inline]
    pub fn convergence_order(&self) -> f64 {
        self.properties().order
    }

    // ========================================================================
    // Estimation
    // ========================================================================

    /// Compute a π estimate over `samples` partitions/terms/draws.
    ///
    /// The seed is consumed only by the Monte Carlo method; deterministic
    /// methods ignore it.
    pub fn estimate<T: Float>(&self, samples: usize, seed: u64) -> T {
        debug_assert!(samples > 0);

        match self {
            PiMethod::Midpoint => integrate_pi(samples),
            PiMethod::Leibniz => leibniz_pi(samples),
            PiMethod::MonteCarlo => sample_pi(samples, seed),
        }
    }
}

// ============================================================================
// Method Implementations
// ============================================================================

/// Midpoint-rule integration of 4/(1 + x²) over [0, 1].
///
/// Each of the n partitions of width h = 1/n is sampled at its center
/// x_i = (i + 0.5)·h. 1000 partitions are already accurate to roughly 1e-7.
fn integrate_pi<T: Float>(partitions: usize) -> T {
    let h = 1.0 / partitions as f64;
    let mut area = 0.0_f64;

    for i in 0..partitions {
        let x = (i as f64 + 0.5) * h;
        area += 4.0 / (1.0 + x * x);
    }

    T::from(area * h).unwrap_or_else(T::zero)
}

/// Partial sum of the Leibniz series, truncated after `terms` terms.
///
/// One million terms yield roughly six correct digits.
fn leibniz_pi<T: Float>(terms: usize) -> T {
    let mut sum = 0.0_f64;
    let mut sign = 1.0_f64;

    for k in 0..terms {
        sum += sign / (2 * k + 1) as f64;
        sign = -sign;
    }

    T::from(4.0 * sum).unwrap_or_else(T::zero)
}

/// Rejection sampling in the unit square.
///
/// Draws `samples` points (x, y) uniform in [0, 1)², counts those with
/// x² + y² ≤ 1, and returns `4 · hits / samples`.
fn sample_pi<T: Float>(samples: usize, seed: u64) -> T {
    let mut rng = SimpleRng::new(seed);
    let mut hits = 0_usize;

    for _ in 0..samples {
        let x = rng.next_unit();
        let y = rng.next_unit();
        if x * x + y * y <= 1.0 {
            hits += 1;
        }
    }

    T::from(4.0 * hits as f64 / samples as f64).unwrap_or_else(T::zero)
}
