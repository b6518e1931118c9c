//! Value types passed between pipeline stages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// One row of the input: a single session and whether it converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    /// Experiment group the session was assigned to.
    pub group_id: String,
    /// Conversion indicator, normally 0 or 1. `None` for an empty cell,
    /// which is neither summed nor counted.
    pub session_result: Option<u64>,
}

impl SessionRecord {
    /// Create a record with a present session result.
    pub fn new(group_id: impl Into<String>, session_result: u64) -> Self {
        Self {
            group_id: group_id.into(),
            session_result: Some(session_result),
        }
    }
}

/// Aggregated counts for one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    /// Group label.
    pub group_id: String,
    /// Sum of the conversion indicator.
    pub conversions: u64,
    /// Number of sessions with a present result.
    pub sessions: u64,
}

impl GroupSummary {
    /// Create a summary from raw counts.
    pub fn new(group_id: impl Into<String>, conversions: u64, sessions: u64) -> Self {
        Self {
            group_id: group_id.into(),
            conversions,
            sessions,
        }
    }

    /// `conversions / sessions`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DivisionByZero`] when the group is empty.
    pub fn conversion_rate(&self) -> Result<f64, AnalysisError> {
        if self.sessions == 0 {
            return Err(AnalysisError::DivisionByZero {
                group: self.group_id.clone(),
            });
        }
        Ok(self.conversions as f64 / self.sessions as f64)
    }
}

/// The two groups under comparison. Every difference is `a - b`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupPair {
    /// First group (A).
    pub a: GroupSummary,
    /// Second group (B).
    pub b: GroupSummary,
}

impl GroupPair {
    /// Pair two summaries.
    pub fn new(a: GroupSummary, b: GroupSummary) -> Self {
        Self { a, b }
    }

    /// The same pair with A and B exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            a: self.b.clone(),
            b: self.a.clone(),
        }
    }

    /// Conversion rates of both groups.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DivisionByZero`] for the first empty group.
    pub fn rates(&self) -> Result<RatePair, AnalysisError> {
        Ok(RatePair {
            a: self.a.conversion_rate()?,
            b: self.b.conversion_rate()?,
        })
    }

    /// `sessions_a + sessions_b`, widened so the sum cannot overflow.
    pub fn total_sessions(&self) -> u128 {
        u128::from(self.a.sessions) + u128::from(self.b.sessions)
    }

    /// `conversions_a + conversions_b`, widened so the sum cannot overflow.
    pub fn total_conversions(&self) -> u128 {
        u128::from(self.a.conversions) + u128::from(self.b.conversions)
    }
}

/// Conversion rates of a [`GroupPair`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatePair {
    /// Rate of group A.
    pub a: f64,
    /// Rate of group B.
    pub b: f64,
}

impl RatePair {
    /// `rate_a - rate_b`.
    pub fn difference(&self) -> f64 {
        self.a - self.b
    }
}

/// Alternative hypothesis, stated for `rate_a - rate_b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alternative {
    /// The rates differ.
    #[default]
    TwoSided,
    /// Rate A is larger than rate B.
    Larger,
    /// Rate A is smaller than rate B.
    Smaller,
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alternative::TwoSided => write!(f, "two-sided"),
            Alternative::Larger => write!(f, "larger"),
            Alternative::Smaller => write!(f, "smaller"),
        }
    }
}

impl FromStr for Alternative {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "two-sided" | "two_sided" | "2s" => Ok(Alternative::TwoSided),
            "larger" => Ok(Alternative::Larger),
            "smaller" => Ok(Alternative::Smaller),
            other => Err(format!(
                "unknown alternative '{}', expected two-sided, larger or smaller",
                other
            )),
        }
    }
}
