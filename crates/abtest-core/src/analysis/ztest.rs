//! Pooled two-proportion z-test.
//!
//! Under the null hypothesis both groups share one conversion rate, estimated
//! by pooling the counts:
//!
//! ```text
//! p  = (c_a + c_b) / (n_a + n_b)
//! se = sqrt(p (1 - p) (1/n_a + 1/n_b))
//! z  = (rate_a - rate_b) / se
//! ```

use super::normal;
use crate::error::AnalysisError;
use crate::result::ZTestResult;
use crate::types::{Alternative, GroupPair};

/// Pooled conversion rate across both groups.
///
/// # Errors
///
/// Returns [`AnalysisError::DivisionByZero`] if either group is empty.
pub fn pooled_proportion(pair: &GroupPair) -> Result<f64, AnalysisError> {
    pair.rates()?;
    Ok(pair.total_conversions() as f64 / pair.total_sessions() as f64)
}

/// Standard error of the rate difference under the pooled null.
///
/// The confidence interval reuses this same pooled value.
///
/// # Errors
///
/// Returns [`AnalysisError::DivisionByZero`] if either group is empty.
pub fn pooled_standard_error(pair: &GroupPair) -> Result<f64, AnalysisError> {
    let p = pooled_proportion(pair)?;
    let n_a = pair.a.sessions as f64;
    let n_b = pair.b.sessions as f64;
    Ok((p * (1.0 - p) * (1.0 / n_a + 1.0 / n_b)).sqrt())
}

/// Two-proportion z-test with pooled variance.
///
/// When the pooled standard error is zero (both groups at 0% or both at
/// 100%) or undefined (a pooled rate above 1) the statistic and p-value are
/// NaN.
///
/// # Errors
///
/// Returns [`AnalysisError::DivisionByZero`] if either group is empty.
pub fn proportions_ztest(
    pair: &GroupPair,
    alternative: Alternative,
) -> Result<ZTestResult, AnalysisError> {
    let rates = pair.rates()?;
    let se = pooled_standard_error(pair)?;

    let z_score = if se > 0.0 {
        rates.difference() / se
    } else if se == 0.0 {
        tracing::warn!("pooled standard error is zero; z-score is undefined");
        f64::NAN
    } else {
        tracing::warn!(se, "pooled standard error is undefined; z-score is undefined");
        f64::NAN
    };

    let p_value = match alternative {
        Alternative::TwoSided => 2.0 * normal::sf(z_score.abs()),
        Alternative::Larger => normal::sf(z_score),
        Alternative::Smaller => normal::cdf(z_score),
    };

    Ok(ZTestResult { z_score, p_value })
}
