//! JSON serialization for analysis reports.

use abtest_core::AnalysisReport;

/// Serialize a report to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for reports).
pub fn to_json_pretty(report: &AnalysisReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
