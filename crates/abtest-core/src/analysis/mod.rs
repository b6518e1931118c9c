//! Statistical analysis of a two-group conversion experiment.
//!
//! - **z-test** (`ztest`): pooled two-proportion test
//! - **Interval** (`interval`): Wald interval for the rate difference
//! - **Effect size** (`effect`): Cohen's h
//! - **Power** (`power`): normal-approximation power and sample size
//! - **Normal helpers** (`normal`): Φ, Φ⁻¹ and tails

pub mod effect;
pub mod interval;
pub mod normal;
pub mod power;
pub mod ztest;

pub use effect::cohens_h;
pub use interval::wald_interval;
pub use power::{ind_power, normal_power, solve_nobs1};
pub use ztest::{pooled_proportion, pooled_standard_error, proportions_ztest};

use crate::error::AnalysisError;
use crate::result::{AnalysisParams, AnalysisReport, Decision, EffectPower, RequiredSessions};
use crate::types::GroupPair;

/// Run every stage on a validated pair of groups.
///
/// The power calculation is fed the combined session count of both groups
/// as its first-sample size, at `params.alpha_power`.
///
/// # Errors
///
/// Returns [`AnalysisError::DivisionByZero`] if either group is empty.
pub fn analyze_pair(
    pair: &GroupPair,
    params: &AnalysisParams,
    target_power: Option<f64>,
) -> Result<AnalysisReport, AnalysisError> {
    let rates = pair.rates()?;

    let test = proportions_ztest(pair, params.alternative)?;
    let decision = Decision::from_p_value(test.p_value, params.alpha_test);
    let interval = wald_interval(pair, params.alpha_test)?;

    let h = cohens_h(&rates);
    let nobs1 = pair.total_sessions() as f64;
    let power = ind_power(h, nobs1, params.alpha_power, params.power_ratio, params.alternative);

    let required_sessions = target_power.map(|target| RequiredSessions {
        target_power: target,
        nobs1: solve_nobs1(h, params.alpha_power, target, params.power_ratio, params.alternative),
    });

    tracing::debug!(
        z = test.z_score,
        p = test.p_value,
        %decision,
        cohens_h = h,
        power,
        "analysis complete"
    );

    Ok(AnalysisReport {
        groups: pair.clone(),
        rates,
        test,
        decision,
        interval,
        effect: EffectPower { cohens_h: h, power },
        required_sessions,
        params: *params,
    })
}
