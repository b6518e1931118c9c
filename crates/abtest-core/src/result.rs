//! Result records produced by the analysis stages.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Alternative, GroupPair, RatePair};

/// Outcome of the two-proportion z-test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZTestResult {
    /// Test statistic for `rate_a - rate_b`.
    pub z_score: f64,
    /// p-value under the chosen alternative.
    pub p_value: f64,
}

/// Decision on the null hypothesis of equal conversion rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// `p_value < alpha`.
    Reject,
    /// `p_value >= alpha`, or the p-value is undefined.
    FailToReject,
}

impl Decision {
    /// Compare a p-value against a significance level.
    pub fn from_p_value(p_value: f64, alpha: f64) -> Self {
        if p_value < alpha {
            Decision::Reject
        } else {
            Decision::FailToReject
        }
    }

    /// Whether the null hypothesis was rejected.
    pub fn is_reject(&self) -> bool {
        matches!(self, Decision::Reject)
    }

    /// Sentence printed in the report.
    pub fn sentence(&self) -> &'static str {
        match self {
            Decision::Reject => {
                "Reject the null hypothesis: There is a significant difference between the groups."
            }
            Decision::FailToReject => {
                "Fail to reject the null hypothesis: There is no significant difference between the groups."
            }
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Reject => write!(f, "reject"),
            Decision::FailToReject => write!(f, "fail to reject"),
        }
    }
}

/// Wald interval for `rate_a - rate_b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
    /// Point estimate the interval is centred on.
    pub diff: f64,
    /// Critical value multiplying the standard error.
    pub z_critical: f64,
}

impl ConfidenceInterval {
    /// Whether `value` lies within the closed interval.
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// `upper - lower`.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Cohen's h and the power of the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectPower {
    /// Arcsine-transformed effect size.
    pub cohens_h: f64,
    /// Probability of rejecting the null at `alpha_power` given `cohens_h`.
    pub power: f64,
}

/// Parameters the report was computed with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisParams {
    /// Significance level of the test and the interval.
    pub alpha_test: f64,
    /// Significance level of the power calculation.
    pub alpha_power: f64,
    /// Nominal confidence of the interval.
    pub confidence: f64,
    /// `nobs2 / nobs1` assumed by the power calculation.
    pub power_ratio: f64,
    /// Alternative hypothesis.
    pub alternative: Alternative,
}

/// Everything the reporter prints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Aggregated counts for the two groups.
    pub groups: GroupPair,
    /// Conversion rates.
    pub rates: RatePair,
    /// z-test outcome.
    pub test: ZTestResult,
    /// Decision at `alpha_test`.
    pub decision: Decision,
    /// Interval for the rate difference.
    pub interval: ConfidenceInterval,
    /// Effect size and power.
    pub effect: EffectPower,
    /// Combined sample size needed to reach `target_power`, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_sessions: Option<RequiredSessions>,
    /// Parameters used.
    pub params: AnalysisParams,
}

/// Sample size needed for a target power.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RequiredSessions {
    /// Requested power.
    pub target_power: f64,
    /// Smallest `nobs1` reaching it, or `None` if the effect is zero or the
    /// target is out of reach.
    pub nobs1: Option<u64>,
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::formatting::format_report_plain(self))
    }
}
