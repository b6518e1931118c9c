//! Core statistics for two-group conversion experiments.
//!
//! This crate holds the pure part of an A/B analysis: types for per-group
//! summaries, aggregation of session records, and the statistical routines
//! applied to a pair of groups:
//!
//! - Pooled two-proportion z-test with a significance decision
//! - Wald confidence interval for the difference in conversion rates
//! - Cohen's h effect size
//! - Normal-approximation power for two independent proportions
//!
//! Loading data from files, configuration and terminal output live in the
//! `abtest` crate.
//!
//! ```ignore
//! use abtest_core::{analysis, Alternative, GroupPair, GroupSummary};
//!
//! let pair = GroupPair::new(
//!     GroupSummary::new("A", 31357, 42429),
//!     GroupSummary::new("B", 34676, 45623),
//! );
//! let test = analysis::proportions_ztest(&pair, Alternative::TwoSided)?;
//! println!("z = {:.3}, p = {:.3}", test.z_score, test.p_value);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod aggregate;
pub mod analysis;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod result;
pub mod types;

pub use aggregate::{aggregate, select_pair};
pub use error::AnalysisError;
pub use result::{
    AnalysisParams, AnalysisReport, ConfidenceInterval, Decision, EffectPower, RequiredSessions,
    ZTestResult,
};
pub use types::{Alternative, GroupPair, GroupSummary, RatePair, SessionRecord};
