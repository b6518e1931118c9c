//! Standard normal distribution helpers.
//!
//! Built on the complementary error function from `statrs` so that tail
//! probabilities keep their precision for large |x|.

use std::f64::consts::SQRT_2;

use statrs::function::erf::{erfc, erfc_inv};

/// Standard normal CDF Φ(x).
#[inline]
pub fn cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Survival function 1 - Φ(x).
#[inline]
pub fn sf(x: f64) -> f64 {
    0.5 * erfc(x / SQRT_2)
}

/// Quantile function Φ⁻¹(p).
pub fn ppf(p: f64) -> f64 {
    if p.is_nan() {
        return f64::NAN;
    }
    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }
    -SQRT_2 * erfc_inv(2.0 * p)
}

/// Inverse survival function Φ⁻¹(1 - p).
pub fn isf(p: f64) -> f64 {
    if p.is_nan() {
        return f64::NAN;
    }
    if p <= 0.0 {
        return f64::INFINITY;
    }
    if p >= 1.0 {
        return f64::NEG_INFINITY;
    }
    SQRT_2 * erfc_inv(2.0 * p)
}
