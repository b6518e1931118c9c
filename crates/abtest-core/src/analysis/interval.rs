//! Wald confidence interval for the difference in conversion rates.

use super::{normal, ztest};
use crate::error::AnalysisError;
use crate::result::ConfidenceInterval;
use crate::types::GroupPair;

/// Two-sided interval `diff ± z_{1-α/2} · se` around `rate_a - rate_b`.
///
/// `se` is the pooled standard error of the z-test, not the unpooled one.
///
/// # Errors
///
/// Returns [`AnalysisError::DivisionByZero`] if either group is empty.
pub fn wald_interval(pair: &GroupPair, alpha: f64) -> Result<ConfidenceInterval, AnalysisError> {
    let diff = pair.rates()?.difference();
    let se = ztest::pooled_standard_error(pair)?;
    let z_critical = normal::isf(alpha / 2.0);
    let half_width = z_critical * se;

    Ok(ConfidenceInterval {
        lower: diff - half_width,
        upper: diff + half_width,
        diff,
        z_critical,
    })
}
