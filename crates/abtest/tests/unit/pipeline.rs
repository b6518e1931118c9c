//! End-to-end runs from a session file to the printed report.

use std::io::Write;

use abtest::output::format_report;
use abtest::{AbTest, Alternative, Decision};
use tempfile::NamedTempFile;

/// Write `conversions` ones and `sessions - conversions` zeros per group,
/// interleaving the groups the way a real export would.
fn write_sessions(groups: &[(&str, u64, u64)]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "session_id,group_id,session_result").unwrap();

    let max = groups.iter().map(|g| g.2).max().unwrap_or(0);
    let mut id = 0u64;
    for i in 0..max {
        for &(label, conversions, sessions) in groups {
            if i < sessions {
                let result = u64::from(i < conversions);
                writeln!(file, "{},{},{}", id, label, result).unwrap();
                id += 1;
            }
        }
    }
    file.flush().unwrap();
    file
}

#[test]
fn reference_dataset_matches_published_results() {
    let file = write_sessions(&[("B", 34676, 45623), ("A", 31357, 42429)]);
    let report = AbTest::new().run_csv(file.path()).unwrap();

    assert_eq!(report.groups.a.conversions, 31357);
    assert_eq!(report.groups.a.sessions, 42429);
    assert_eq!(report.groups.b.conversions, 34676);
    assert_eq!(report.groups.b.sessions, 45623);
    assert!((report.rates.a - 0.739046).abs() < 1e-6);
    assert!((report.rates.b - 0.760055).abs() < 1e-6);
    assert!((report.test.z_score - (-7.193)).abs() < 1e-3);
    assert_eq!(format!("{:.3}", report.test.p_value), "0.000");
    assert_eq!(report.decision, Decision::Reject);
    assert!((report.interval.lower - (-0.02673)).abs() < 1e-5);
    assert!((report.interval.upper - (-0.01528)).abs() < 1e-5);
    assert_eq!(format!("{:.3}", report.effect.cohens_h), "-0.048");
    assert_eq!(format!("{:.3}", report.effect.power), "1.000");
}

#[test]
fn reference_dataset_report_text() {
    let file = write_sessions(&[("A", 31357, 42429), ("B", 34676, 45623)]);
    let report = AbTest::new().run_csv(file.path()).unwrap();
    let text = format_report(&report, false);

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Total Conversions and Total Sessions");
    assert_eq!(lines[4], "Conversion Rate");
    assert_eq!(lines[8], "z-score = -7.193, p-value = 0.000");
    assert_eq!(
        lines[9],
        "Reject the null hypothesis: There is a significant difference between the groups."
    );
    assert_eq!(
        lines[10],
        "Confidence interval for the difference in conversion rates: [-0.02673329 -0.01528437]"
    );
    assert_eq!(lines[11], "Effect Size (Cohen's h): -0.048");
    assert_eq!(lines[12], "Power of the test: 1.000");
    assert_eq!(lines.len(), 13);
}

#[test]
fn small_experiment_fails_to_reject() {
    let file = write_sessions(&[("A", 30, 100), ("B", 20, 100)]);
    let report = AbTest::new().run_csv(file.path()).unwrap();

    assert_eq!(report.decision, Decision::FailToReject);
    assert!((report.test.p_value - 0.1024704348597495).abs() < 1e-9);
    assert!(report.interval.contains(0.0));
    let text = format_report(&report, false);
    assert!(text.contains("Fail to reject the null hypothesis"));
    assert!(text.contains(
        "Confidence interval for the difference in conversion rates: [-0.02002279  0.22002279]\n"
    ));
}

#[test]
fn custom_labels_and_one_sided_test() {
    let file = write_sessions(&[("control", 20, 100), ("treatment", 30, 100)]);
    let report = AbTest::new()
        .groups("treatment", "control")
        .alternative(Alternative::Larger)
        .run_csv(file.path())
        .unwrap();

    assert_eq!(report.groups.a.group_id, "treatment");
    assert!(report.test.z_score > 0.0);
    assert!((report.test.p_value - 0.1024704348597495 / 2.0).abs() < 1e-9);
}

#[test]
fn target_power_line_is_printed() {
    let file = write_sessions(&[("A", 30, 100), ("B", 20, 100)]);
    let report = AbTest::new().target_power(0.8).run_csv(file.path()).unwrap();
    let text = format_report(&report, false);

    assert!(text.lines().last().unwrap().starts_with("Sample size (nobs1) for power 0.800: "));
}
