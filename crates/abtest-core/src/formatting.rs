//! Plain-text rendering of an [`AnalysisReport`].
//!
//! Tables are right-aligned with two spaces between columns, each column as
//! wide as its longest cell.

use crate::result::AnalysisReport;
use crate::types::GroupSummary;

/// Heading above the counts table.
pub const COUNTS_HEADING: &str = "Total Conversions and Total Sessions";

/// Heading above the rates table.
pub const RATES_HEADING: &str = "Conversion Rate";

/// Render rows of cells under `headers`.
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let mut out = render_row(headers.iter().copied(), &widths);
    for row in rows {
        out.push('\n');
        out.push_str(&render_row(row.iter().map(String::as_str), &widths));
    }
    out
}

fn render_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, &w)| format!("{:>w$}", cell, w = w))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Counts table: `group_id  conversions  sessions`.
pub fn format_counts_table(groups: &[&GroupSummary]) -> String {
    let rows: Vec<Vec<String>> = groups
        .iter()
        .map(|g| {
            vec![
                g.group_id.clone(),
                g.conversions.to_string(),
                g.sessions.to_string(),
            ]
        })
        .collect();
    format_table(&["group_id", "conversions", "sessions"], &rows)
}

/// Counts table with a trailing `conversion_rate` column (6 decimals).
pub fn format_rates_table(groups: &[(&GroupSummary, f64)]) -> String {
    let rows: Vec<Vec<String>> = groups
        .iter()
        .map(|(g, rate)| {
            vec![
                g.group_id.clone(),
                g.conversions.to_string(),
                g.sessions.to_string(),
                format!("{:.6}", rate),
            ]
        })
        .collect();
    format_table(
        &["group_id", "conversions", "sessions", "conversion_rate"],
        &rows,
    )
}

/// Format an interval bound: 8 decimals, trailing zeros dropped.
pub fn format_bound(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    format!("{:.8}", value).trim_end_matches('0').to_string()
}

/// Bracketed bounds padded to a common width: integer parts right-aligned,
/// fractional parts left-aligned, one space between elements.
pub fn format_bounds(values: &[f64]) -> String {
    let cells: Vec<String> = values.iter().map(|&v| format_bound(v)).collect();

    let pad_left = cells
        .iter()
        .filter_map(|c| split_point(c))
        .map(|(int, _)| int.len())
        .max()
        .unwrap_or(0);
    let pad_right = cells
        .iter()
        .filter_map(|c| split_point(c))
        .map(|(_, frac)| frac.len())
        .max()
        .unwrap_or(0);

    let padded: Vec<String> = cells
        .iter()
        .map(|cell| match split_point(cell) {
            Some((int, frac)) => {
                format!("{:>l$}{:<r$}", int, frac, l = pad_left, r = pad_right)
            }
            // non-finite values take the whole width
            None => format!("{:>w$}", cell, w = pad_left + pad_right),
        })
        .collect();
    format!("[{}]", padded.join(" "))
}

fn split_point(cell: &str) -> Option<(&str, &str)> {
    cell.find('.').map(|dot| cell.split_at(dot))
}

/// `z-score = …, p-value = …`
pub fn format_test_line(report: &AnalysisReport) -> String {
    format!(
        "z-score = {:.3}, p-value = {:.3}",
        report.test.z_score, report.test.p_value
    )
}

/// `Confidence interval for the difference in conversion rates: [lower upper]`
pub fn format_interval_line(report: &AnalysisReport) -> String {
    format!(
        "Confidence interval for the difference in conversion rates: {}",
        format_bounds(&[report.interval.lower, report.interval.upper])
    )
}

/// Optional sample size line.
pub fn format_required_line(report: &AnalysisReport) -> Option<String> {
    let required = report.required_sessions?;
    Some(match required.nobs1 {
        Some(n) => format!(
            "Sample size (nobs1) for power {:.3}: {}",
            required.target_power, n
        ),
        None => format!(
            "Sample size (nobs1) for power {:.3}: unreachable for this effect size",
            required.target_power
        ),
    })
}

/// Full report, one stage after another.
pub fn format_report_plain(report: &AnalysisReport) -> String {
    let groups = [&report.groups.a, &report.groups.b];
    let rated = [
        (&report.groups.a, report.rates.a),
        (&report.groups.b, report.rates.b),
    ];

    let mut lines = vec![
        COUNTS_HEADING.to_string(),
        format_counts_table(&groups),
        RATES_HEADING.to_string(),
        format_rates_table(&rated),
        format_test_line(report),
        report.decision.sentence().to_string(),
        format_interval_line(report),
        format!("Effect Size (Cohen's h): {:.3}", report.effect.cohens_h),
        format!("Power of the test: {:.3}", report.effect.power),
    ];
    if let Some(line) = format_required_line(report) {
        lines.push(line);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
