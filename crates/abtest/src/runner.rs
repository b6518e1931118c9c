//! Builder and entry points for running an analysis.

use std::path::Path;

use abtest_core::{
    aggregate, analysis, select_pair, Alternative, AnalysisReport, GroupPair, GroupSummary,
};

use crate::config::Config;
use crate::data;
use crate::error::Result;

/// A/B analysis with builder-style configuration.
///
/// ```ignore
/// use abtest::AbTest;
///
/// let report = AbTest::new()
///     .alpha_test(0.05)
///     .alpha_power(0.08)
///     .run_csv(Path::new("sessions.csv"))?;
/// println!("{}", report);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AbTest {
    config: Config,
}

impl AbTest {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create from an existing configuration.
    ///
    /// # Panics
    ///
    /// Panics if any value is out of range, like the individual setters.
    pub fn with_config(config: Config) -> Self {
        let mut builder = Self::new()
            .alpha_test(config.alpha_test)
            .alpha_power(config.alpha_power)
            .confidence(config.confidence)
            .power_ratio(config.power_ratio)
            .alternative(config.alternative)
            .groups(config.group_a, config.group_b);
        if let Some(target) = config.target_power {
            builder = builder.target_power(target);
        }
        builder.config.group_column = config.group_column;
        builder.config.result_column = config.result_column;
        builder.config.delimiter = config.delimiter;
        builder
    }

    /// Set the significance level of the test and the interval.
    ///
    /// # Panics
    ///
    /// Panics if `alpha` is not in (0, 1).
    pub fn alpha_test(mut self, alpha: f64) -> Self {
        assert!(
            alpha > 0.0 && alpha < 1.0,
            "alpha_test must be in (0, 1), got {}",
            alpha
        );
        self.config.alpha_test = alpha;
        self
    }

    /// Set the significance level of the power calculation.
    ///
    /// # Panics
    ///
    /// Panics if `alpha` is not in (0, 1).
    pub fn alpha_power(mut self, alpha: f64) -> Self {
        assert!(
            alpha > 0.0 && alpha < 1.0,
            "alpha_power must be in (0, 1), got {}",
            alpha
        );
        self.config.alpha_power = alpha;
        self
    }

    /// Set the nominal confidence level of the interval.
    ///
    /// # Panics
    ///
    /// Panics if `confidence` is not in (0, 1).
    pub fn confidence(mut self, confidence: f64) -> Self {
        assert!(
            confidence > 0.0 && confidence < 1.0,
            "confidence must be in (0, 1), got {}",
            confidence
        );
        self.config.confidence = confidence;
        self
    }

    /// Set `nobs2 / nobs1` for the power calculation.
    ///
    /// # Panics
    ///
    /// Panics if `ratio` is not a positive finite number.
    pub fn power_ratio(mut self, ratio: f64) -> Self {
        assert!(
            ratio.is_finite() && ratio > 0.0,
            "power_ratio must be > 0, got {}",
            ratio
        );
        self.config.power_ratio = ratio;
        self
    }

    /// Set the alternative hypothesis.
    pub fn alternative(mut self, alternative: Alternative) -> Self {
        self.config.alternative = alternative;
        self
    }

    /// Also solve for the sample size reaching `power`.
    ///
    /// # Panics
    ///
    /// Panics if `power` is not in (0, 1).
    pub fn target_power(mut self, power: f64) -> Self {
        assert!(
            power > 0.0 && power < 1.0,
            "target_power must be in (0, 1), got {}",
            power
        );
        self.config.target_power = Some(power);
        self
    }

    /// Set the labels of groups A and B.
    ///
    /// # Panics
    ///
    /// Panics if both labels are the same.
    pub fn groups(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        assert!(a != b, "group_a and group_b must differ, got '{}' twice", a);
        self.config.group_a = a;
        self.config.group_b = b;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load, aggregate and analyze a delimited file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be loaded, the data does not hold exactly the
    /// two configured groups, or a group has no sessions.
    pub fn run_csv(&self, path: &Path) -> Result<AnalysisReport> {
        let records = data::load_sessions(path, &self.config.csv_options())?;
        let summaries = aggregate(&records)?;
        self.run_summaries(&summaries)
    }

    /// Analyze already aggregated groups.
    ///
    /// # Errors
    ///
    /// Fails unless `summaries` holds exactly the two configured groups, each
    /// with at least one session.
    pub fn run_summaries(&self, summaries: &[GroupSummary]) -> Result<AnalysisReport> {
        let pair = select_pair(summaries, &self.config.group_a, &self.config.group_b)?;
        self.run_pair(&pair)
    }

    /// Analyze a pair of groups.
    ///
    /// # Errors
    ///
    /// Fails if either group has no sessions.
    pub fn run_pair(&self, pair: &GroupPair) -> Result<AnalysisReport> {
        for group in [&pair.a, &pair.b] {
            if group.conversions > group.sessions {
                tracing::warn!(
                    group = %group.group_id,
                    conversions = group.conversions,
                    sessions = group.sessions,
                    "conversions exceed sessions; rate is above 1"
                );
            }
        }

        if !self.config.confidence_matches_alpha() {
            tracing::warn!(
                confidence = self.config.confidence,
                alpha_test = self.config.alpha_test,
                "interval uses 1 - alpha_test, not the nominal confidence"
            );
        }

        tracing::info!(
            a = %pair.a.group_id,
            b = %pair.b.group_id,
            sessions = %pair.total_sessions(),
            "running analysis"
        );

        let report =
            analysis::analyze_pair(pair, &self.config.params(), self.config.target_power)?;
        Ok(report)
    }
}
