//! Cohen's h effect size for two proportions.

use crate::types::RatePair;

/// `h = 2 (asin √rate_a - asin √rate_b)`.
pub fn cohens_h(rates: &RatePair) -> f64 {
    2.0 * (rates.a.sqrt().asin() - rates.b.sqrt().asin())
}
