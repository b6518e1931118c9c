//! Failure modes surface as typed errors and abort the run.

use std::io::Write;
use std::path::Path;

use abtest::data::DataError;
use abtest::{AbTest, AnalysisError, Error, GroupPair, GroupSummary};
use tempfile::NamedTempFile;

fn csv_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn missing_file_is_data_error() {
    let err = AbTest::new()
        .run_csv(Path::new("/definitely/not/here.csv"))
        .unwrap_err();
    assert!(matches!(err, Error::Data(DataError::Io(_))));
}

#[test]
fn missing_column_is_data_error() {
    let file = csv_file("group_id,converted\nA,1\nB,0\n");
    let err = AbTest::new().run_csv(file.path()).unwrap_err();
    assert!(matches!(
        err,
        Error::Data(DataError::MissingColumn { ref column, .. }) if column == "session_result"
    ));
}

#[test]
fn single_group_is_insufficient() {
    let file = csv_file("group_id,session_result\nA,1\nA,0\n");
    let err = AbTest::new().run_csv(file.path()).unwrap_err();
    match err {
        Error::Analysis(AnalysisError::InsufficientGroups { found }) => {
            assert_eq!(found, vec!["A".to_string()]);
        }
        other => panic!("Expected InsufficientGroups, got {:?}", other),
    }
}

#[test]
fn third_group_is_insufficient() {
    let file = csv_file("group_id,session_result\nA,1\nB,0\nC,1\n");
    let err = AbTest::new().run_csv(file.path()).unwrap_err();
    assert!(matches!(
        err,
        Error::Analysis(AnalysisError::InsufficientGroups { .. })
    ));
}

#[test]
fn group_with_only_blank_results_divides_by_zero() {
    let file = csv_file("group_id,session_result\nA,1\nA,0\nB,\nB,\n");
    let err = AbTest::new().run_csv(file.path()).unwrap_err();
    assert!(matches!(
        err,
        Error::Analysis(AnalysisError::DivisionByZero { ref group }) if group == "B"
    ));
}

#[test]
fn zero_session_counts_divide_by_zero() {
    let summaries = [GroupSummary::new("A", 0, 0), GroupSummary::new("B", 5, 10)];
    let err = AbTest::new().run_summaries(&summaries).unwrap_err();
    assert_eq!(
        err.to_string(),
        "group 'A' has zero sessions; conversion rate is undefined"
    );
}

#[test]
fn overflowing_conversion_sum_is_analysis_error() {
    let file = csv_file("group_id,session_result\nA,1e19\nA,1e19\nB,1\n");
    let err = AbTest::new().run_csv(file.path()).unwrap_err();
    assert!(matches!(
        err,
        Error::Analysis(AnalysisError::CountOverflow { ref group }) if group == "A"
    ));
}

#[test]
fn result_beyond_u64_is_invalid_value() {
    let file = csv_file("group_id,session_result\nA,1\nB,2e19\n");
    let err = AbTest::new().run_csv(file.path()).unwrap_err();
    assert!(matches!(
        err,
        Error::Data(DataError::InvalidValue { line: 3, ref value }) if value == "2e19"
    ));
}

#[test]
fn extreme_session_counts_do_not_overflow_totals() {
    let pair = GroupPair::new(
        GroupSummary::new("A", 1, u64::MAX),
        GroupSummary::new("B", 1, 2),
    );
    let report = AbTest::new().run_pair(&pair).unwrap();
    assert!(report.test.z_score.is_finite());
    assert!((0.0..=1.0).contains(&report.effect.power));
}
