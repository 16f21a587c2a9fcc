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

//! Structured error types for the benchplot CLI.
//!
//! Every error here is fatal for the run. `main` prints it as
//! `Error: <message>` and exits with a failure status.

use benchplot_core::CoreError;
use benchplot_csv::CsvError;
use benchplot_render::RenderError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for a benchplot run.
///
/// # Examples
///
/// ```rust
/// use benchplot_cli::CliError;
///
/// let err = CliError::file_too_large("timings.csv", 300 * 1024 * 1024, 100 * 1024 * 1024);
/// assert!(err.to_string().contains("timings.csv"));
/// assert!(err.to_string().contains("100 MB"));
/// ```
#[derive(Error, Debug)]
pub enum CliError {
    /// Metadata of an input file could not be read.
    #[error("I/O error for '{}': {source}", path.display())]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Input file exceeds the configured size limit.
    #[error("File '{}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)", path.display())]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
        /// The maximum allowed file size in MB (for display)
        max_mb: u64,
    },

    /// An input table could not be read.
    #[error(transparent)]
    Csv(#[from] CsvError),

    /// A pipeline stage pre-condition was violated.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A chart or the output directory could not be written.
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl CliError {
    /// Create an I/O error for `path`.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        CliError::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }
}

/// Convenience type alias for `Result` with `CliError`.
pub type Result<T> = std::result::Result<T, CliError>;
