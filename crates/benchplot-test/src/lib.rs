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

//! Shared test fixtures for the benchplot crates.
//!
//! Provides the benchmark and scaling tables used across the CSV, render and
//! CLI test suites, so every crate exercises the same inputs.
//!
//! # Quick Start
//!
//! ```rust
//! use benchplot_test::fixtures;
//!
//! let csv = fixtures::TIMINGS_CSV;
//! let records = fixtures::timing_records();
//! assert_eq!(csv.lines().count(), records.len() + 1);
//! ```

use std::path::{Path, PathBuf};

/// Canonical benchmark fixtures.
pub mod fixtures;

pub use fixtures::*;

/// File name the binary reads benchmark results from.
pub const TIMINGS_FILE: &str = "timings.csv";

/// File name the binary reads scaling results from.
pub const THREADS_FILE: &str = "perf_threads.csv";

/// Write both input tables into `dir` under their fixed names.
///
/// Returns the paths written, timings first.
pub fn write_inputs(
    dir: &Path,
    timings: &str,
    threads: &str,
) -> std::io::Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(dir)?;
    let timings_path = dir.join(TIMINGS_FILE);
    let threads_path = dir.join(THREADS_FILE);
    std::fs::write(&timings_path, timings)?;
    std::fs::write(&threads_path, threads)?;
    Ok((timings_path, threads_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_match_table_rows() {
        let rows = TIMINGS_CSV.lines().skip(1).count();
        assert_eq!(rows, timing_records().len());
    }

    #[test]
    fn test_timing_tables_have_headers() {
        for (name, table) in timing_tables() {
            assert!(
                table.starts_with("Function,Method,Time,Result"),
                "table {} lacks the expected header",
                name
            );
        }
    }

    #[test]
    fn test_thread_records_have_duplicate_key() {
        let records = thread_records();
        let dupes = records
            .iter()
            .filter(|r| r.method == "OpenMP" && r.workers == 4)
            .count();
        assert_eq!(dupes, 2);
    }
}
