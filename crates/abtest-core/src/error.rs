//! Errors raised while turning aggregated groups into statistics.

use thiserror::Error;

/// Failure of an analysis stage after the data was loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The data did not contain exactly two distinct groups.
    #[error("expected exactly two groups, found {}: {found:?}", found.len())]
    InsufficientGroups {
        /// Group labels present in the data, sorted.
        found: Vec<String>,
    },

    /// Two groups were present but one of the expected labels was not.
    #[error("missing group '{expected}' in data. Found groups: {found:?}")]
    MissingGroup {
        /// The label that was expected.
        expected: String,
        /// Group labels present in the data, sorted.
        found: Vec<String>,
    },

    /// A group's conversion or session count does not fit in a `u64`.
    #[error("group '{group}' overflows its conversion or session count")]
    CountOverflow {
        /// The offending group.
        group: String,
    },

    /// A group has no sessions, so its conversion rate is undefined.
    #[error("group '{group}' has zero sessions; conversion rate is undefined")]
    DivisionByZero {
        /// The offending group.
        group: String,
    },
}
