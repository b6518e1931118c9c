//! Power of a two-independent-samples test under the normal approximation.
//!
//! The effect size is standardised (Cohen's h for proportions). With
//! `nobs2 = nobs1 · ratio`, the effective sample size is
//! `n = 1 / (1/nobs1 + 1/nobs2)` and, for a two-sided test,
//!
//! ```text
//! power = 1 - Φ(z_{1-α/2} - h√n) + Φ(-z_{1-α/2} - h√n)
//! ```

use super::normal;
use crate::constants::MAX_SOLVED_NOBS;
use crate::types::Alternative;

/// Power of a z-test with standardised effect `effect_size` and `nobs`
/// effective observations.
pub fn normal_power(effect_size: f64, nobs: f64, alpha: f64, alternative: Alternative) -> f64 {
    let shift = effect_size * nobs.sqrt();

    match alternative {
        Alternative::TwoSided => {
            let crit = normal::isf(alpha / 2.0);
            normal::sf(crit - shift) + normal::cdf(-crit - shift)
        }
        Alternative::Larger => normal::sf(normal::isf(alpha) - shift),
        Alternative::Smaller => normal::cdf(normal::ppf(alpha) - shift),
    }
}

/// Power for two independent samples of sizes `nobs1` and `nobs1 · ratio`.
pub fn ind_power(
    effect_size: f64,
    nobs1: f64,
    alpha: f64,
    ratio: f64,
    alternative: Alternative,
) -> f64 {
    let nobs2 = nobs1 * ratio;
    let nobs = 1.0 / (1.0 / nobs1 + 1.0 / nobs2);
    normal_power(effect_size, nobs, alpha, alternative)
}

/// Smallest integer `nobs1` for which [`ind_power`] reaches `target_power`.
///
/// Returns `None` when no sample size up to `MAX_SOLVED_NOBS` suffices,
/// which includes a zero effect and a one-sided alternative pointing away
/// from the effect.
pub fn solve_nobs1(
    effect_size: f64,
    alpha: f64,
    target_power: f64,
    ratio: f64,
    alternative: Alternative,
) -> Option<u64> {
    if !effect_size.is_finite() || !(0.0..1.0).contains(&target_power) {
        return None;
    }

    let power_at = |n: u64| ind_power(effect_size, n as f64, alpha, ratio, alternative);

    let mut lo = 1u64;
    let mut hi = MAX_SOLVED_NOBS as u64;
    if power_at(lo) >= target_power {
        return Some(lo);
    }
    if power_at(hi) < target_power {
        return None;
    }

    // power_at(lo) < target <= power_at(hi)
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if power_at(mid) >= target_power {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    tracing::debug!(nobs1 = hi, target_power, "solved sample size");
    Some(hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        let p = ind_power(0.1, 100.0, 0.05, 1.0, Alternative::TwoSided);
        assert!((p - 0.10895461755061568).abs() < 1e-9);

        let p = ind_power(0.2, 200.0, 0.05, 1.0, Alternative::TwoSided);
        assert!((p - 0.5160052739761751).abs() < 1e-9);
    }

    #[test]
    fn test_zero_effect_equals_alpha() {
        let p = ind_power(0.0, 100.0, 0.05, 1.0, Alternative::TwoSided);
        assert!((p - 0.05).abs() < 1e-12);

        let p = ind_power(0.0, 100.0, 0.08, 1.0, Alternative::Larger);
        assert!((p - 0.08).abs() < 1e-12);
    }

    #[test]
    fn test_sign_of_effect_does_not_matter_two_sided() {
        let pos = ind_power(0.15, 300.0, 0.05, 1.0, Alternative::TwoSided);
        let neg = ind_power(-0.15, 300.0, 0.05, 1.0, Alternative::TwoSided);
        assert!((pos - neg).abs() < 1e-12);
    }

    #[test]
    fn test_one_sided_direction() {
        let right = ind_power(0.2, 200.0, 0.05, 1.0, Alternative::Larger);
        let wrong = ind_power(0.2, 200.0, 0.05, 1.0, Alternative::Smaller);
        assert!(right > 0.5);
        assert!(wrong < 0.05);
    }

    #[test]
    fn test_reference_power_saturates() {
        let h = -0.04849829016396923;
        let p = ind_power(h, 88052.0, 0.08, 1.0, Alternative::TwoSided);
        assert!(p > 0.9999);
        assert!(p <= 1.0);
    }

    #[test]
    fn test_solve_nobs1_reaches_target() {
        let n = solve_nobs1(0.2, 0.05, 0.8, 1.0, Alternative::TwoSided).unwrap();
        assert!(ind_power(0.2, n as f64, 0.05, 1.0, Alternative::TwoSided) >= 0.8);
        assert!(ind_power(0.2, (n - 1) as f64, 0.05, 1.0, Alternative::TwoSided) < 0.8);
        // Textbook value for h = 0.2, α = 0.05, 80% power: ~393 per group.
        assert!((390..=395).contains(&n), "n = {}", n);
    }

    #[test]
    fn test_solve_nobs1_unreachable() {
        assert_eq!(solve_nobs1(0.0, 0.05, 0.8, 1.0, Alternative::TwoSided), None);
        assert_eq!(solve_nobs1(0.2, 0.05, 0.8, 1.0, Alternative::Smaller), None);
        assert_eq!(solve_nobs1(0.2, 0.05, 1.0, 1.0, Alternative::TwoSided), None);
    }
}
