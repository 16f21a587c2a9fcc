// Dweve Benchplot - Benchmark comparison charts
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for reading benchmark tables.
//!
//! Every variant here is structural and fatal for a run. Individual rows with
//! non-numeric cells never produce an error; the core parser drops them.

use std::path::PathBuf;
use thiserror::Error;

/// Table decoding error types.
///
/// # Examples
///
/// ```
/// use benchplot_csv::CsvError;
///
/// let err = CsvError::MissingColumn {
///     column: "Time".to_string(),
///     table: "benchmark results".to_string(),
/// };
///
/// assert_eq!(
///     err.to_string(),
///     "Missing required column 'Time' in benchmark results table"
/// );
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// The input file could not be opened.
    #[error("Cannot open '{}': {source}", path.display())]
    Open {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A required header is absent.
    #[error("Missing required column '{column}' in {table} table")]
    MissingColumn {
        /// Name of the missing column.
        column: String,
        /// Which table was being read.
        table: String,
    },

    /// The data cannot be decoded as CSV at all (bad quoting, invalid UTF-8).
    ///
    /// # Examples
    ///
    /// ```
    /// use benchplot_csv::CsvError;
    ///
    /// let err = CsvError::ParseError {
    ///     line: 42,
    ///     message: "invalid UTF-8".to_string(),
    /// };
    /// assert!(err.to_string().contains("line 42"));
    /// ```
    #[error("CSV parse error at line {line}: {message}")]
    ParseError {
        /// Line number where the error occurred (1-based).
        line: usize,
        /// Detailed error message.
        message: String,
    },

    /// Row count exceeded the configured limit.
    #[error("Security limit exceeded: row count {actual} exceeds maximum {limit}")]
    SecurityLimit {
        /// Maximum allowed rows.
        limit: usize,
        /// Row count at which reading stopped.
        actual: usize,
    },
}

/// Convenience type alias for `Result` with `CsvError`.
pub type Result<T> = std::result::Result<T, CsvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = CsvError::ParseError {
            line: 3,
            message: "unterminated quote".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "CSV parse error at line 3: unterminated quote"
        );
    }

    #[test]
    fn test_security_limit_display() {
        let err = CsvError::SecurityLimit {
            limit: 10,
            actual: 11,
        };
        assert_eq!(
            err.to_string(),
            "Security limit exceeded: row count 11 exceeds maximum 10"
        );
    }

    #[test]
    fn test_open_error_keeps_source() {
        let err = CsvError::Open {
            path: PathBuf::from("timings.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("timings.csv"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CsvError>();
    }
}
