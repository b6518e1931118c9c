//! Loading session data from delimited files.
//!
//! The input has one row per session and a header naming at least the group
//! column and the result column:
//!
//! ```csv
//! user_id,group_id,session_result
//! 17,A,1
//! 18,B,0
//! ```
//!
//! Column order is free and extra columns are ignored.

mod csv;

pub use self::csv::{load_sessions, read_sessions};

use thiserror::Error;

use abtest_core::constants::{DEFAULT_GROUP_COLUMN, DEFAULT_RESULT_COLUMN};

/// Errors that can occur during data loading.
#[derive(Debug, Error)]
pub enum DataError {
    /// The file could not be opened or read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The delimited reader rejected the input.
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    /// A required column is absent from the header.
    #[error("missing column '{column}'. Found columns: {found:?}")]
    MissingColumn {
        /// The column that was expected.
        column: String,
        /// The header as read.
        found: Vec<String>,
    },

    /// A session result is neither empty nor a non-negative integer.
    #[error("invalid session result at line {line}: '{value}'")]
    InvalidValue {
        /// Line number where the invalid value was found (1-indexed).
        line: usize,
        /// The invalid value string.
        value: String,
    },
}

/// Layout of the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field delimiter.
    pub delimiter: u8,
    /// Column holding the group label.
    pub group_column: String,
    /// Column holding the conversion indicator.
    pub result_column: String,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            group_column: DEFAULT_GROUP_COLUMN.to_string(),
            result_column: DEFAULT_RESULT_COLUMN.to_string(),
        }
    }
}
