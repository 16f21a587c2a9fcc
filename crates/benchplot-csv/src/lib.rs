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

//! CSV input for benchmark and scaling tables.
//!
//! Two tables feed the pipeline:
//!
//! - **Benchmark results** with columns `Function,Method,Time,Result`
//! - **Scaling results** with columns `Method,Workers,Time`
//!
//! Columns are located by header name, so their order is free and extra
//! columns are ignored. A missing required column or an undecodable file is
//! an error; a row whose numbers do not parse is dropped and counted.
//!
//! # Examples
//!
//! ```
//! use benchplot_csv::{read_threads, ReadConfig};
//!
//! let csv = "Method,Workers,Time\n\
//!            OpenMP,2,5.0\n\
//!            OpenMP,2,7.0\n\
//!            MPI,zero,1.0\n";
//!
//! let parsed = read_threads(csv.as_bytes(), &ReadConfig::default()).unwrap();
//! assert_eq!(parsed.records.len(), 2);
//! assert_eq!(parsed.report.dropped, 1);
//! ```

mod error;
mod reader;

pub use error::{CsvError, Result};
pub use reader::{
    read_threads, read_threads_file, read_timings, read_timings_file, ReadConfig,
    DEFAULT_MAX_ROWS, THREADS_COLUMNS, TIMINGS_COLUMNS,
};
