//! Default parameters for the analysis.
//!
//! The hypothesis test and the power calculation use different significance
//! levels. They are kept as two constants and must not be merged.

/// Significance level for the z-test decision and the confidence interval.
pub const DEFAULT_ALPHA_TEST: f64 = 0.05;

/// Significance level fed into the power calculation.
pub const DEFAULT_ALPHA_POWER: f64 = 0.08;

/// Nominal confidence level reported for the interval.
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Ratio `nobs2 / nobs1` assumed by the power calculation.
pub const DEFAULT_POWER_RATIO: f64 = 1.0;

/// Label of the first group (the minuend in every difference).
pub const DEFAULT_GROUP_A: &str = "A";

/// Label of the second group.
pub const DEFAULT_GROUP_B: &str = "B";

/// Column holding the group label.
pub const DEFAULT_GROUP_COLUMN: &str = "group_id";

/// Column holding the 0/1 conversion indicator.
pub const DEFAULT_RESULT_COLUMN: &str = "session_result";

/// Upper bound for the sample size search in [`crate::analysis::solve_nobs1`].
pub const MAX_SOLVED_NOBS: f64 = 1e12;
