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

//! benchplot command-line library.
//!
//! Turns the benchmark results table (`timings.csv`) and the scaling results
//! table (`perf_threads.csv`) into the fixed set of comparison charts under
//! `plots/`. The binary is a thin wrapper around [`run`].

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::{
    check_file_size, max_file_size_from_env, RunConfig, DEFAULT_MAX_FILE_SIZE,
    DEFAULT_OUTPUT_DIR, DEFAULT_THREADS_PATH, DEFAULT_TIMINGS_PATH, MAX_FILE_SIZE_ENV,
};
pub use error::{CliError, Result};
pub use pipeline::{run, RunSummary};

/// Default log directive when neither `BENCHPLOT_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_DIRECTIVE: &str = "benchplot=info";
