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

//! Read benchmark and scaling tables into parsed records.

use crate::error::{CsvError, Result};
use benchplot_core::{
    parse_records, parse_thread_records, Parsed, RawRecord, RawThreadRecord, Record,
    ThreadRecord,
};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Default maximum number of data rows per table.
///
/// Reading stops with [`CsvError::SecurityLimit`] beyond this.
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Columns of the benchmark results table.
pub const TIMINGS_COLUMNS: [&str; 4] = ["Function", "Method", "Time", "Result"];

/// Columns of the scaling results table.
pub const THREADS_COLUMNS: [&str; 3] = ["Method", "Workers", "Time"];

/// Configuration for table decoding.
///
/// # Examples
///
/// ```
/// use benchplot_csv::ReadConfig;
///
/// let config = ReadConfig::default();
/// assert_eq!(config.delimiter, b',');
/// assert!(config.trim);
/// assert_eq!(config.max_rows, 1_000_000);
///
/// let tsv = ReadConfig {
///     delimiter: b'\t',
///     ..Default::default()
/// };
/// assert_eq!(tsv.delimiter, b'\t');
/// ```
#[derive(Debug, Clone)]
pub struct ReadConfig {
    /// Field delimiter character (default: `,`).
    pub delimiter: u8,

    /// Whether to trim leading/trailing whitespace from headers and fields
    /// (default: `true`).
    pub trim: bool,

    /// Maximum number of data rows (default: 1,000,000).
    pub max_rows: usize,
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

/// Decode a CSV table, locate `columns` by header name, and hand each row's
/// cells (in `columns` order) to `build`.
///
/// Extra columns are ignored. Short rows yield empty cells, which the core
/// parser then treats as missing.
fn read_table<R, T, F>(
    reader: R,
    config: &ReadConfig,
    table: &str,
    columns: &[&str],
    build: F,
) -> Result<Vec<T>>
where
    R: Read,
    F: Fn(&[&str]) -> T,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(|e| CsvError::ParseError {
        line: 1,
        message: e.to_string(),
    })?;

    let indices = columns
        .iter()
        .map(|column| {
            headers
                .iter()
                .position(|h| h == *column)
                .ok_or_else(|| CsvError::MissingColumn {
                    column: column.to_string(),
                    table: table.to_string(),
                })
        })
        .collect::<Result<Vec<usize>>>()?;

    let mut rows = Vec::new();

    for (record_idx, result) in csv_reader.records().enumerate() {
        if record_idx >= config.max_rows {
            return Err(CsvError::SecurityLimit {
                limit: config.max_rows,
                actual: record_idx + 1,
            });
        }

        let record = result.map_err(|e| CsvError::ParseError {
            // Header is line 1.
            line: record_idx + 2,
            message: e.to_string(),
        })?;

        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let cells: Vec<&str> = indices.iter().map(|&i| record.get(i).unwrap_or("")).collect();
        rows.push(build(&cells));
    }

    debug!(table, rows = rows.len(), "decoded table");
    Ok(rows)
}

/// Read the benchmark results table (`Function,Method,Time,Result`) from a
/// reader and parse it into records.
///
/// # Errors
///
/// Fails only for structural problems: undecodable data, a missing header,
/// or too many rows. Rows with non-numeric `Time` or `Result` are dropped and
/// counted in the returned report.
///
/// # Examples
///
/// ```
/// use benchplot_csv::{read_timings, ReadConfig};
///
/// let csv = "Function,Method,Time,Result\n\
///            Func1,Serial,3.5,2.1\n\
///            Func1,MPI,abc,2.1\n";
/// let parsed = read_timings(csv.as_bytes(), &ReadConfig::default()).unwrap();
///
/// assert_eq!(parsed.records.len(), 1);
/// assert_eq!(parsed.records[0].time, 3.5);
/// assert_eq!(parsed.report.dropped, 1);
/// ```
pub fn read_timings<R: Read>(reader: R, config: &ReadConfig) -> Result<Parsed<Record>> {
    let rows = read_table(reader, config, "benchmark results", &TIMINGS_COLUMNS, |c| {
        RawRecord::new(c[0], c[1], c[2], c[3])
    })?;
    Ok(parse_records(rows))
}

/// Read the scaling results table (`Method,Workers,Time`) from a reader and
/// parse it into thread records.
///
/// Duplicate `(Method, Workers)` rows are kept here; deduplication is a
/// separate pipeline stage.
pub fn read_threads<R: Read>(reader: R, config: &ReadConfig) -> Result<Parsed<ThreadRecord>> {
    let rows = read_table(reader, config, "scaling results", &THREADS_COLUMNS, |c| {
        RawThreadRecord::new(c[0], c[1], c[2])
    })?;
    Ok(parse_thread_records(rows))
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| CsvError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Open and read a benchmark results file.
pub fn read_timings_file(path: impl AsRef<Path>, config: &ReadConfig) -> Result<Parsed<Record>> {
    read_timings(open(path.as_ref())?, config)
}

/// Open and read a scaling results file.
pub fn read_threads_file(
    path: impl AsRef<Path>,
    config: &ReadConfig,
) -> Result<Parsed<ThreadRecord>> {
    read_threads(open(path.as_ref())?, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_found_by_name() {
        let csv = "Result,Time,Method,Function\n2.5,1.0,MPI,Func2\n";
        let parsed = read_timings(csv.as_bytes(), &ReadConfig::default()).unwrap();
        assert_eq!(parsed.records, vec![Record::new("Func2", "MPI", 1.0, 2.5)]);
    }

    #[test]
    fn test_extra_columns_ignored() {
        let csv = "Function,Method,Threads,Time,Result\nFunc1,OpenMP,8,0.5,1.0\n";
        let parsed = read_timings(csv.as_bytes(), &ReadConfig::default()).unwrap();
        assert_eq!(parsed.records.len(), 1);
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let csv = "Function,Method,Time\nFunc1,Serial,1.0\n";
        let err = read_timings(csv.as_bytes(), &ReadConfig::default()).unwrap_err();
        match err {
            CsvError::MissingColumn { column, .. } => assert_eq!(column, "Result"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_input_is_fatal() {
        let err = read_timings("".as_bytes(), &ReadConfig::default()).unwrap_err();
        assert!(matches!(err, CsvError::MissingColumn { .. }));
    }

    #[test]
    fn test_short_row_is_dropped_not_fatal() {
        let csv = "Function,Method,Time,Result\nFunc1,Serial,1.0\nFunc1,MPI,0.5,1.0\n";
        let parsed = read_timings(csv.as_bytes(), &ReadConfig::default()).unwrap();
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].method, "MPI");
        assert_eq!(parsed.report.dropped, 1);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let csv = "Method,Workers,Time\n\nOpenMP,2,1.0\n,,\n";
        let parsed = read_threads(csv.as_bytes(), &ReadConfig::default()).unwrap();
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.report.dropped, 0);
    }

    #[test]
    fn test_row_limit() {
        let csv = "Method,Workers,Time\nA,1,1\nA,2,1\nA,3,1\n";
        let config = ReadConfig {
            max_rows: 2,
            ..Default::default()
        };
        let err = read_threads(csv.as_bytes(), &config).unwrap_err();
        assert!(matches!(err, CsvError::SecurityLimit { limit: 2, actual: 3 }));
    }

    #[test]
    fn test_invalid_utf8_is_fatal() {
        let mut bytes = b"Method,Workers,Time\nOpenMP,2,".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
        let err = read_threads(&bytes[..], &ReadConfig::default()).unwrap_err();
        assert!(matches!(err, CsvError::ParseError { line: 2, .. }));
    }

    #[test]
    fn test_invalid_utf8_header_reports_line_one() {
        let mut bytes = b"Method,Workers,".to_vec();
        bytes.extend_from_slice(&[0xff, b'\n']);
        bytes.extend_from_slice(b"OpenMP,2,1.0\n");
        let err = read_threads(&bytes[..], &ReadConfig::default()).unwrap_err();
        assert!(matches!(err, CsvError::ParseError { line: 1, .. }));
    }

    #[test]
    fn test_semicolon_delimiter() {
        let csv = "Method;Workers;Time\nMPI;4;2.5\n";
        let config = ReadConfig {
            delimiter: b';',
            ..Default::default()
        };
        let parsed = read_threads(csv.as_bytes(), &config).unwrap();
        assert_eq!(parsed.records[0].workers, 4);
    }

    #[test]
    fn test_missing_file() {
        let err = read_timings_file("/nonexistent/timings.csv", &ReadConfig::default()).unwrap_err();
        assert!(matches!(err, CsvError::Open { .. }));
    }
}
