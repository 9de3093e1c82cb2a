//! One-sided tolerance factors for the 95th percentile at 70 % confidence.

/// Tolerance factors for 6 to 20 samples, indexed by `n - 6`.
const K_TABLE: [f64; 15] = [
    2.187, 2.120, 2.072, 2.035, 2.005, 1.981, 1.960, 1.942, 1.926, 1.912, 1.900, 1.889, 1.879,
    1.870, 1.861,
];

/// Factor used beyond the tabulated range.
///
/// Approximation toward the asymptotic 1.645; kept constant so results
/// stay comparable with earlier reports.
pub const K_FALLBACK: f64 = 1.8;

/// Standard normal quantile for the 95th percentile.
pub const Z_95: f64 = 1.645;

/// Smallest sample size for the statistical test.
pub const MIN_STATISTICAL_SAMPLES: usize = 6;

/// Tolerance factor for `n` samples, or `None` below the statistical range.
pub fn k_factor(n: usize) -> Option<f64> {
    match n {
        0..=5 => None,
        6..=20 => Some(K_TABLE[n - MIN_STATISTICAL_SAMPLES]),
        _ => Some(K_FALLBACK),
    }
}
