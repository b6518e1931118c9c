//! Terminal output with optional colors.
//!
//! The layout is the plain report from `abtest-core`; styling only adds ANSI
//! codes to headings and to the decision line.

use colored::Colorize;

use abtest_core::formatting::{
    format_counts_table, format_interval_line, format_rates_table, format_report_plain,
    format_required_line, format_test_line, COUNTS_HEADING, RATES_HEADING,
};
use abtest_core::AnalysisReport;

/// Format a report for the terminal.
///
/// With `styled == false` the output is exactly
/// [`format_report_plain`].
pub fn format_report(report: &AnalysisReport, styled: bool) -> String {
    if !styled {
        return format_report_plain(report);
    }

    let groups = [&report.groups.a, &report.groups.b];
    let rated = [
        (&report.groups.a, report.rates.a),
        (&report.groups.b, report.rates.b),
    ];

    let sentence = report.decision.sentence();
    let decision = if report.decision.is_reject() {
        sentence.green().bold().to_string()
    } else {
        sentence.yellow().to_string()
    };

    let mut out = String::new();
    out.push_str(&format!("{}\n", COUNTS_HEADING.bold()));
    out.push_str(&format_counts_table(&groups));
    out.push('\n');
    out.push_str(&format!("{}\n", RATES_HEADING.bold()));
    out.push_str(&format_rates_table(&rated));
    out.push('\n');
    out.push_str(&format_test_line(report));
    out.push('\n');
    out.push_str(&decision);
    out.push('\n');
    out.push_str(&format_interval_line(report));
    out.push('\n');
    out.push_str(&format!(
        "Effect Size (Cohen's h): {}\n",
        format!("{:.3}", report.effect.cohens_h).cyan()
    ));
    out.push_str(&format!(
        "Power of the test: {}\n",
        format!("{:.3}", report.effect.power).cyan()
    ));
    if let Some(line) = format_required_line(report) {
        out.push_str(&line.dimmed().to_string());
        out.push('\n');
    }
    out
}
