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

//! The benchmark charting pipeline.
//!
//! Parser → Deduplicator → Aligner → Speedup Deriver → Renderer. Both
//! input tables are read and validated before the output directory is
//! touched, so a structural failure leaves the previous charts in place.

use crate::config::{check_file_size, RunConfig};
use crate::error::Result;
use benchplot_core::{
    breakdown_all, dedup_records, scaling_lines, ComparisonMatrix, ParseReport, Record,
};
use benchplot_csv::{read_threads_file, read_timings_file};
use benchplot_render::{
    combined_speedup_chart, combined_time_chart, function_charts, scaling_chart, Renderer,
};
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub output_dir: PathBuf,
    /// Chart file names, in rendering order.
    pub artifacts: Vec<String>,
    pub timings: ParseReport,
    pub threads: ParseReport,
}

/// Merge duplicate `(function, method)` rows, warning when any exist.
fn dedup_primary(records: Vec<Record>) -> Vec<Record> {
    let merged = dedup_records(&records);
    if merged.len() < records.len() {
        warn!(
            duplicates = records.len() - merged.len(),
            "averaged duplicate benchmark rows"
        );
        merged
    } else {
        records
    }
}

/// Run the whole pipeline for `config`.
///
/// # Errors
///
/// Any structural failure: an input file that is absent, too large, not
/// decodable or lacking a required column, or an output directory that
/// cannot be written. Rows with bad numbers are dropped, not reported.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    check_file_size(&config.timings_path, config.max_file_size)?;
    check_file_size(&config.threads_path, config.max_file_size)?;

    let timings = read_timings_file(&config.timings_path, &config.read)?;
    info!(
        path = %config.timings_path.display(),
        kept = timings.report.kept,
        dropped = timings.report.dropped,
        "read benchmark results"
    );

    let threads = read_threads_file(&config.threads_path, &config.read)?;
    info!(
        path = %config.threads_path.display(),
        kept = threads.report.kept,
        dropped = threads.report.dropped,
        "read scaling results"
    );

    {
        let unknown: BTreeSet<&str> = timings
            .records
            .iter()
            .map(|r| r.function.as_str())
            .filter(|f| !config.catalog.contains(f))
            .collect();
        for function in unknown {
            warn!(function, "function not in catalog, not charted");
        }
    }

    let records = dedup_primary(timings.records);
    let breakdowns = breakdown_all(&records, &config.catalog, &config.methods, &config.baseline)?;
    let times = ComparisonMatrix::times(&breakdowns, &config.methods)?;
    let speedups = ComparisonMatrix::speedups(&breakdowns, &config.methods)?;
    let lines = scaling_lines(&threads.records, &config.methods);
    debug!(
        functions = breakdowns.len(),
        lines = lines.len(),
        "derived series"
    );

    let style = &config.style;
    let mut renderer = Renderer::new(&config.output_dir, style.clone())?;
    for breakdown in &breakdowns {
        let charts = function_charts(breakdown, &config.methods, &config.baseline, style);
        renderer.render_all(&charts)?;
    }
    renderer.render(&combined_time_chart(&times, &config.methods, style))?;
    renderer.render(&combined_speedup_chart(
        &speedups,
        &config.methods,
        &config.baseline,
        style,
    ))?;
    renderer.render(&scaling_chart(&lines, &config.methods))?;
    let artifacts = renderer.finish()?;

    info!(
        output_dir = %config.output_dir.display(),
        artifacts = ?artifacts,
        "charts written"
    );

    Ok(RunSummary {
        output_dir: config.output_dir.clone(),
        artifacts,
        timings: timings.report,
        threads: threads.report,
    })
}
