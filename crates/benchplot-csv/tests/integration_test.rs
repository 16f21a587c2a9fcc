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

//! File-level tests for reading the benchmark and scaling tables.

use benchplot_core::{dedup_thread_records, ThreadRecord};
use benchplot_csv::{read_threads_file, read_timings_file, CsvError, ReadConfig};
use benchplot_test::{fixtures, write_inputs};
use tempfile::TempDir;

fn inputs(timings: &str, threads: &str) -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let (t, p) = write_inputs(dir.path(), timings, threads).unwrap();
    (dir, t, p)
}

#[test]
fn test_complete_timings_file() {
    let (_dir, timings, _) = inputs(fixtures::TIMINGS_CSV, fixtures::THREADS_CSV);
    let parsed = read_timings_file(&timings, &ReadConfig::default()).unwrap();

    assert_eq!(parsed.records, fixtures::timing_records());
    assert_eq!(parsed.report.dropped, 0);
}

#[test]
fn test_defective_timings_file_drops_rows() {
    let (_dir, timings, _) = inputs(fixtures::TIMINGS_WITH_DEFECTS_CSV, fixtures::THREADS_CSV);
    let parsed = read_timings_file(&timings, &ReadConfig::default()).unwrap();

    assert_eq!(parsed.report.kept, fixtures::TIMINGS_WITH_DEFECTS_KEPT);
    assert_eq!(parsed.report.dropped, 2);
    assert!(!parsed
        .records
        .iter()
        .any(|r| r.function == "Func1" && r.method == "OpenMP"));
}

#[test]
fn test_threads_file_keeps_duplicates_until_dedup() {
    let (_dir, _, threads) = inputs(fixtures::TIMINGS_CSV, fixtures::THREADS_CSV);
    let parsed = read_threads_file(&threads, &ReadConfig::default()).unwrap();

    assert_eq!(parsed.records, fixtures::thread_records());
    assert_eq!(parsed.report.dropped, 1);

    let deduped = dedup_thread_records(&parsed.records);
    let openmp_4: Vec<&ThreadRecord> = deduped
        .iter()
        .filter(|r| r.method == "OpenMP" && r.workers == 4)
        .collect();
    assert_eq!(openmp_4.len(), 1);
    assert!((openmp_4[0].time - 15.0).abs() < 1e-12);
}

#[test]
fn test_missing_columns_name_the_column() {
    let (_dir, timings, threads) = inputs(
        fixtures::TIMINGS_MISSING_COLUMN_CSV,
        fixtures::THREADS_MISSING_COLUMN_CSV,
    );

    let err = read_timings_file(&timings, &ReadConfig::default()).unwrap_err();
    assert!(err.to_string().contains("'Result'"));

    let err = read_threads_file(&threads, &ReadConfig::default()).unwrap_err();
    assert!(matches!(err, CsvError::MissingColumn { ref column, .. } if column == "Workers"));
}

#[test]
fn test_open_error_carries_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.csv");
    let err = read_threads_file(&path, &ReadConfig::default()).unwrap_err();
    assert!(err.to_string().contains("absent.csv"));
}

#[test]
fn test_whitespace_around_fields_is_trimmed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("timings.csv");
    std::fs::write(
        &path,
        " Function , Method , Time , Result \n Func2 , OpenMP , 0.25 , 3.0 \n",
    )
    .unwrap();

    let parsed = read_timings_file(&path, &ReadConfig::default()).unwrap();
    assert_eq!(parsed.records.len(), 1);
    assert_eq!(parsed.records[0].function, "Func2");
    assert_eq!(parsed.records[0].method, "OpenMP");
}
