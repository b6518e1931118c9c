//! # abtest
//!
//! Analyze two-group conversion experiments from session-level data.
//!
//! Reads a delimited file with one row per session, aggregates conversions
//! and sessions per group, and reports:
//! - Conversion rates per group
//! - Pooled two-proportion z-test and a reject / fail-to-reject decision
//! - Wald confidence interval for the rate difference
//! - Cohen's h and the power of the comparison
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::path::Path;
//! use abtest::AbTest;
//!
//! let report = AbTest::new().run_csv(Path::new("sessions.csv"))?;
//! print!("{}", abtest::output::format_report(&report, false));
//! ```
//!
//! The statistics themselves live in `abtest-core` and are re-exported here.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod runner;
mod config;
mod error;

pub mod data;
pub mod logging;
pub mod output;

pub use runner::AbTest;
pub use config::Config;
pub use error::{Error, Result};

pub use abtest_core::{
    analysis, constants, AnalysisError, AnalysisParams, AnalysisReport, Alternative,
    ConfidenceInterval, Decision, EffectPower, GroupPair, GroupSummary, RatePair,
    RequiredSessions, SessionRecord, ZTestResult,
};
