//! Configuration for an A/B analysis run.

use abtest_core::constants::{
    DEFAULT_ALPHA_POWER, DEFAULT_ALPHA_TEST, DEFAULT_CONFIDENCE, DEFAULT_GROUP_A, DEFAULT_GROUP_B,
    DEFAULT_GROUP_COLUMN, DEFAULT_POWER_RATIO, DEFAULT_RESULT_COLUMN,
};
use abtest_core::{AnalysisParams, Alternative};

use crate::data::CsvOptions;

/// Configuration options for [`AbTest`](crate::AbTest).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // =========================================================================
    // Significance levels
    // =========================================================================

    /// Significance level of the z-test decision and of the interval's
    /// critical value. Default: 0.05.
    pub alpha_test: f64,

    /// Significance level used by the power calculation. Default: 0.08.
    ///
    /// Independent of `alpha_test`.
    pub alpha_power: f64,

    /// Nominal confidence level reported for the interval. Default: 0.95.
    pub confidence: f64,

    // =========================================================================
    // Power analysis
    // =========================================================================

    /// Ratio `nobs2 / nobs1` assumed by the power calculation. Default: 1.0.
    pub power_ratio: f64,

    /// Alternative hypothesis for the test and the power. Default: two-sided.
    pub alternative: Alternative,

    /// When set, also solve for the sample size reaching this power.
    pub target_power: Option<f64>,

    // =========================================================================
    // Input layout
    // =========================================================================

    /// Label of group A. Default: "A".
    pub group_a: String,

    /// Label of group B. Default: "B".
    pub group_b: String,

    /// Column holding group labels. Default: "group_id".
    pub group_column: String,

    /// Column holding the conversion indicator. Default: "session_result".
    pub result_column: String,

    /// Field delimiter. Default: `,`.
    pub delimiter: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alpha_test: DEFAULT_ALPHA_TEST,
            alpha_power: DEFAULT_ALPHA_POWER,
            confidence: DEFAULT_CONFIDENCE,
            power_ratio: DEFAULT_POWER_RATIO,
            alternative: Alternative::TwoSided,
            target_power: None,
            group_a: DEFAULT_GROUP_A.to_string(),
            group_b: DEFAULT_GROUP_B.to_string(),
            group_column: DEFAULT_GROUP_COLUMN.to_string(),
            result_column: DEFAULT_RESULT_COLUMN.to_string(),
            delimiter: b',',
        }
    }
}

impl Config {
    /// Parameters handed to the statistics stages.
    pub fn params(&self) -> AnalysisParams {
        AnalysisParams {
            alpha_test: self.alpha_test,
            alpha_power: self.alpha_power,
            confidence: self.confidence,
            power_ratio: self.power_ratio,
            alternative: self.alternative,
        }
    }

    /// Options handed to the CSV loader.
    pub fn csv_options(&self) -> CsvOptions {
        CsvOptions {
            delimiter: self.delimiter,
            group_column: self.group_column.clone(),
            result_column: self.result_column.clone(),
        }
    }

    /// Whether `confidence` agrees with the interval's `1 - alpha_test`.
    pub fn confidence_matches_alpha(&self) -> bool {
        ((1.0 - self.alpha_test) - self.confidence).abs() < 1e-12
    }
}
