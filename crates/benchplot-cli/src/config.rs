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

//! Run configuration.

use crate::error::{CliError, Result};
use benchplot_core::{FunctionCatalog, MethodOrder, DEFAULT_BASELINE};
use benchplot_csv::ReadConfig;
use benchplot_render::ChartStyle;
use std::fs;
use std::path::{Path, PathBuf};

/// Benchmark results file read when no path is given.
pub const DEFAULT_TIMINGS_PATH: &str = "timings.csv";

/// Scaling results file read when no path is given.
pub const DEFAULT_THREADS_PATH: &str = "perf_threads.csv";

/// Directory charts are written to when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "plots";

/// Default maximum input file size (100 MB).
/// Can be overridden via the `BENCHPLOT_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`], in bytes.
pub const MAX_FILE_SIZE_ENV: &str = "BENCHPLOT_MAX_FILE_SIZE";

/// Everything a run needs. [`Default`] reproduces the fixed run: both
/// tables from the working directory, charts into `plots/`.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub timings_path: PathBuf,
    pub threads_path: PathBuf,
    pub output_dir: PathBuf,
    /// Method every speedup is relative to.
    pub baseline: String,
    pub methods: MethodOrder,
    pub catalog: FunctionCatalog,
    pub read: ReadConfig,
    pub style: ChartStyle,
    /// Inputs larger than this many bytes are rejected before reading.
    pub max_file_size: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            timings_path: PathBuf::from(DEFAULT_TIMINGS_PATH),
            threads_path: PathBuf::from(DEFAULT_THREADS_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            baseline: DEFAULT_BASELINE.to_string(),
            methods: MethodOrder::default(),
            catalog: FunctionCatalog::default(),
            read: ReadConfig::default(),
            style: ChartStyle::default(),
            max_file_size: max_file_size_from_env(),
        }
    }
}

/// Maximum input size from `BENCHPLOT_MAX_FILE_SIZE`, or the default when
/// the variable is unset or not a number.
pub fn max_file_size_from_env() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Reject `path` if it is larger than `max` bytes.
///
/// # Errors
///
/// Returns [`CliError::Io`] when the file's metadata cannot be read (for
/// example, the file does not exist) and [`CliError::FileTooLarge`] when it
/// exceeds the limit.
pub fn check_file_size(path: &Path, max: u64) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;
    if metadata.len() > max {
        return Err(CliError::file_too_large(path, metadata.len(), max));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_run() {
        let config = RunConfig::default();
        assert_eq!(config.timings_path, PathBuf::from("timings.csv"));
        assert_eq!(config.threads_path, PathBuf::from("perf_threads.csv"));
        assert_eq!(config.output_dir, PathBuf::from("plots"));
        assert_eq!(config.baseline, "Serial");
        assert_eq!(config.methods.len(), 4);
    }

    #[test]
    fn test_check_file_size() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("timings.csv");
        std::fs::write(&path, "0123456789").unwrap();

        assert!(check_file_size(&path, 10).is_ok());
        let err = check_file_size(&path, 9).unwrap_err();
        assert!(matches!(err, CliError::FileTooLarge { actual: 10, max: 9, .. }));
    }

    #[test]
    fn test_check_file_size_missing_file() {
        let err = check_file_size(Path::new("/nonexistent/timings.csv"), 10).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }
}
