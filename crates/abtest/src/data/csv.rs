//! Delimited file parsing for session records.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use abtest_core::SessionRecord;

use super::{CsvOptions, DataError};

/// Load session records from a delimited file with a header row.
///
/// Rows with an empty group label are dropped. An empty result cell yields a
/// record with `session_result: None`.
///
/// # Errors
///
/// Returns `DataError` if the file cannot be read, a required column is
/// missing, or a result cell is not a non-negative integer.
pub fn load_sessions(path: &Path, options: &CsvOptions) -> Result<Vec<SessionRecord>, DataError> {
    let file = File::open(path)?;
    let records = read_sessions(BufReader::new(file), options)?;
    tracing::debug!(path = %path.display(), rows = records.len(), "loaded sessions");
    Ok(records)
}

/// Read session records from any reader.
///
/// # Errors
///
/// See [`load_sessions`].
pub fn read_sessions<R: Read>(
    reader: R,
    options: &CsvOptions,
) -> Result<Vec<SessionRecord>, DataError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let group_idx = column_index(&headers, &options.group_column)?;
    let result_idx = column_index(&headers, &options.result_column)?;

    let mut records = Vec::new();
    let mut dropped = 0usize;
    let mut out_of_range = 0usize;

    for row in reader.records() {
        let row = row?;
        let line = row.position().map(|p| p.line() as usize).unwrap_or(0);

        let group = row.get(group_idx).unwrap_or("");
        if group.is_empty() {
            dropped += 1;
            continue;
        }

        let session_result = parse_result(row.get(result_idx).unwrap_or(""), line)?;
        if matches!(session_result, Some(v) if v > 1) {
            out_of_range += 1;
        }

        records.push(SessionRecord {
            group_id: group.to_string(),
            session_result,
        });
    }

    if dropped > 0 {
        tracing::debug!(dropped, "skipped rows without a group label");
    }
    if out_of_range > 0 {
        tracing::warn!(
            rows = out_of_range,
            "session results outside {{0, 1}} are summed as-is"
        );
    }

    Ok(records)
}

fn column_index(headers: &StringRecord, column: &str) -> Result<usize, DataError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| DataError::MissingColumn {
            column: column.to_string(),
            found: headers.iter().map(String::from).collect(),
        })
}

/// Parse a result cell: empty is missing, integers and integral floats are
/// accepted.
fn parse_result(value: &str, line: usize) -> Result<Option<u64>, DataError> {
    if value.is_empty() {
        return Ok(None);
    }

    let invalid = || DataError::InvalidValue {
        line,
        value: value.to_string(),
    };

    if let Ok(v) = value.parse::<u64>() {
        return Ok(Some(v));
    }

    let float_val: f64 = value.parse().map_err(|_| invalid())?;
    if float_val.is_nan() {
        // pandas reads "nan" as a missing value
        return Ok(None);
    }
    // u64::MAX as f64 rounds up to 2^64, which is already out of range
    if float_val < 0.0
        || float_val.fract() != 0.0
        || !float_val.is_finite()
        || float_val >= u64::MAX as f64
    {
        return Err(invalid());
    }
    Ok(Some(float_val as u64))
}
