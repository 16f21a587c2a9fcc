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

//! benchplot Command Line Interface

use benchplot_cli::{run, RunConfig, DEFAULT_LOG_DIRECTIVE};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// benchplot - Benchmark comparison charts
///
/// Reads benchmark results and scaling results and writes execution time,
/// result, speedup and scaling charts as SVG files.
///
/// # Examples
///
/// ```bash
/// # Fixed run: timings.csv + perf_threads.csv -> plots/
/// benchplot
///
/// # Custom locations
/// benchplot --timings out/timings.csv --threads out/perf_threads.csv --output-dir charts
/// ```
#[derive(Parser)]
#[command(name = "benchplot")]
#[command(author, version, about = "benchplot - Benchmark comparison charts", long_about = None)]
struct Cli {
    /// Benchmark results table (Function,Method,Time,Result)
    #[arg(long, value_name = "FILE", default_value = benchplot_cli::DEFAULT_TIMINGS_PATH)]
    timings: PathBuf,

    /// Scaling results table (Method,Workers,Time)
    #[arg(long, value_name = "FILE", default_value = benchplot_cli::DEFAULT_THREADS_PATH)]
    threads: PathBuf,

    /// Directory the charts are written to; replaced on every run
    #[arg(long, value_name = "DIR", default_value = benchplot_cli::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,
}

fn init_logging() {
    let filter = std::env::var("BENCHPLOT_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let config = RunConfig {
        timings_path: cli.timings,
        threads_path: cli.threads,
        output_dir: cli.output_dir,
        ..Default::default()
    };

    match run(&config) {
        Ok(summary) => {
            println!(
                "All plots saved in '{}/' folder.",
                summary.output_dir.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
