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

//! Record Parser: numeric coercion of raw rows.
//!
//! Coercion is fail-soft. A field that does not coerce becomes
//! [`Slot::Missing`], and any row with a missing numeric field is dropped from
//! the output without raising an error. Structural failures (undecodable
//! tables, absent headers) belong to the tabular reader, not to this module.

use crate::record::{RawRecord, RawThreadRecord, Record, ThreadRecord};
use crate::slot::Slot;
use tracing::debug;

/// Counts of rows kept and dropped by a parse pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseReport {
    /// Rows that produced a record.
    pub kept: usize,
    /// Rows discarded because a numeric field did not coerce.
    pub dropped: usize,
}

impl ParseReport {
    /// Total number of rows seen.
    pub fn total(&self) -> usize {
        self.kept + self.dropped
    }
}

/// Records produced by a parse pass, along with its report.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    pub records: Vec<T>,
    pub report: ParseReport,
}

/// Coerce a cell to a finite float.
///
/// Leading and trailing whitespace is ignored. Empty cells, non-numeric text
/// and non-finite values (`NaN`, `inf`) all coerce to `Missing`.
///
/// # Examples
///
/// ```
/// use benchplot_core::{coerce_float, Slot};
///
/// assert_eq!(coerce_float(" -2.1 "), Slot::Value(-2.1));
/// assert_eq!(coerce_float("abc"), Slot::Missing);
/// assert_eq!(coerce_float(""), Slot::Missing);
/// assert_eq!(coerce_float("NaN"), Slot::Missing);
/// ```
pub fn coerce_float(raw: &str) -> Slot {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Slot::Value(v),
        _ => Slot::Missing,
    }
}

/// Coerce a duration cell: a finite float that is not negative.
pub fn coerce_time(raw: &str) -> Slot {
    match coerce_float(raw) {
        Slot::Value(v) if v >= 0.0 => Slot::Value(v),
        _ => Slot::Missing,
    }
}

/// Coerce a worker-count cell to a positive integer.
///
/// Integral floats such as `"4.0"` are accepted, since spreadsheet exports
/// often write counts that way.
///
/// # Examples
///
/// ```
/// use benchplot_core::coerce_workers;
///
/// assert_eq!(coerce_workers("8"), Some(8));
/// assert_eq!(coerce_workers("4.0"), Some(4));
/// assert_eq!(coerce_workers("0"), None);
/// assert_eq!(coerce_workers("2.5"), None);
/// ```
pub fn coerce_workers(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    let workers = match trimmed.parse::<u32>() {
        Ok(n) => n,
        Err(_) => {
            let v = coerce_float(trimmed).value()?;
            if v.fract() != 0.0 || v < 1.0 || v > f64::from(u32::MAX) {
                return None;
            }
            v as u32
        }
    };
    (workers >= 1).then_some(workers)
}

/// Parse benchmark result rows into records.
///
/// Rows whose `time` or `result` does not coerce are dropped. Identifier
/// fields are trimmed but otherwise kept verbatim.
///
/// # Examples
///
/// ```
/// use benchplot_core::{parse_records, RawRecord};
///
/// let parsed = parse_records(vec![
///     RawRecord::new("Func1", "Serial", "3.5", "2.1"),
///     RawRecord::new("Func1", "MPI", "abc", "2.1"),
/// ]);
/// assert_eq!(parsed.records.len(), 1);
/// assert_eq!(parsed.records[0].time, 3.5);
/// assert_eq!(parsed.report.dropped, 1);
/// ```
pub fn parse_records<I>(rows: I) -> Parsed<Record>
where
    I: IntoIterator<Item = RawRecord>,
{
    let mut records = Vec::new();
    let mut report = ParseReport::default();

    for (index, row) in rows.into_iter().enumerate() {
        match (coerce_time(&row.time), coerce_float(&row.result)) {
            (Slot::Value(time), Slot::Value(result)) => {
                records.push(Record::new(
                    row.function.trim(),
                    row.method.trim(),
                    time,
                    result,
                ));
                report.kept += 1;
            }
            _ => {
                debug!(
                    row = index + 1,
                    function = %row.function,
                    method = %row.method,
                    time = %row.time,
                    result = %row.result,
                    "dropping row with non-numeric time or result"
                );
                report.dropped += 1;
            }
        }
    }

    Parsed { records, report }
}

/// Parse scaling rows into thread records.
///
/// Rows whose `workers` is not a positive integer or whose `time` does not
/// coerce are dropped.
pub fn parse_thread_records<I>(rows: I) -> Parsed<ThreadRecord>
where
    I: IntoIterator<Item = RawThreadRecord>,
{
    let mut records = Vec::new();
    let mut report = ParseReport::default();

    for (index, row) in rows.into_iter().enumerate() {
        match (coerce_workers(&row.workers), coerce_time(&row.time)) {
            (Some(workers), Slot::Value(time)) => {
                records.push(ThreadRecord::new(row.method.trim(), workers, time));
                report.kept += 1;
            }
            _ => {
                debug!(
                    row = index + 1,
                    method = %row.method,
                    workers = %row.workers,
                    time = %row.time,
                    "dropping scaling row with invalid workers or time"
                );
                report.dropped += 1;
            }
        }
    }

    Parsed { records, report }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_numeric_row() {
        let parsed = parse_records(vec![RawRecord::new("Func1", "Serial", "3.5", "2.1")]);
        assert_eq!(parsed.records, vec![Record::new("Func1", "Serial", 3.5, 2.1)]);
        assert_eq!(parsed.report, ParseReport { kept: 1, dropped: 0 });
    }

    #[test]
    fn test_drops_non_numeric_time() {
        let parsed = parse_records(vec![RawRecord::new("Func1", "Serial", "abc", "2.1")]);
        assert!(parsed.records.is_empty());
        assert_eq!(parsed.report.dropped, 1);
    }

    #[test]
    fn test_drops_empty_result() {
        let parsed = parse_records(vec![RawRecord::new("Func2", "MPI", "1.0", "")]);
        assert!(parsed.records.is_empty());
    }

    #[test]
    fn test_drops_negative_time_but_keeps_negative_result() {
        let parsed = parse_records(vec![
            RawRecord::new("Func1", "OpenMP", "-1.0", "2.0"),
            RawRecord::new("Func1", "Hybrid", "1.0", "-2.0"),
        ]);
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].method, "Hybrid");
        assert_eq!(parsed.records[0].result, -2.0);
    }

    #[test]
    fn test_zero_time_is_kept() {
        let parsed = parse_records(vec![RawRecord::new("Func3", "MPI", "0", "1")]);
        assert_eq!(parsed.records[0].time, 0.0);
    }

    #[test]
    fn test_identifiers_are_trimmed() {
        let parsed = parse_records(vec![RawRecord::new(" Func1 ", " MPI", "1", "1")]);
        assert_eq!(parsed.records[0].function, "Func1");
        assert_eq!(parsed.records[0].method, "MPI");
    }

    #[test]
    fn test_non_finite_values_are_missing() {
        assert_eq!(coerce_float("inf"), Slot::Missing);
        assert_eq!(coerce_float("-Infinity"), Slot::Missing);
        assert_eq!(coerce_float("nan"), Slot::Missing);
    }

    #[test]
    fn test_thread_rows() {
        let parsed = parse_thread_records(vec![
            RawThreadRecord::new("OpenMP", "4", "10.0"),
            RawThreadRecord::new("OpenMP", "zero", "10.0"),
            RawThreadRecord::new("MPI", "2", ""),
            RawThreadRecord::new("MPI", "0", "1.0"),
        ]);
        assert_eq!(parsed.records, vec![ThreadRecord::new("OpenMP", 4, 10.0)]);
        assert_eq!(parsed.report, ParseReport { kept: 1, dropped: 3 });
        assert_eq!(parsed.report.total(), 4);
    }

    #[test]
    fn test_workers_rejects_fractional_and_negative() {
        assert_eq!(coerce_workers("-2"), None);
        assert_eq!(coerce_workers("1.5"), None);
        assert_eq!(coerce_workers(" 16 "), Some(16));
    }
}
