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

//! The fixed set of charts produced from a run's derived series.

use crate::chart::{BarChart, GroupedBarChart, Line, LineChart};
use crate::style::{method_color, ChartStyle, ValueFormat};
use benchplot_core::{AlignedSeries, ComparisonMatrix, FunctionBreakdown, MethodOrder, ScalingLine, Slot};
use tracing::warn;

pub const TIME_AXIS: &str = "Execution Time (seconds)";
pub const RESULT_AXIS: &str = "Integral Result";
pub const WORKERS_AXIS: &str = "Number of Threads / MPI Processes";

pub const COMBINED_TIME_FILE: &str = "combined_execution_time.svg";
pub const COMBINED_SPEEDUP_FILE: &str = "combined_speedup.svg";
pub const SCALING_FILE: &str = "threads_vs_time.svg";

/// Y axis description of speedup charts.
pub fn speedup_axis(baseline: &str) -> String {
    format!("Speedup (relative to {})", baseline)
}

/// Bar chart of one aligned series, colored by canonical method position.
pub fn bar_chart(
    file_name: String,
    title: String,
    y_desc: String,
    series: &AlignedSeries,
    order: &MethodOrder,
    format: ValueFormat,
) -> BarChart {
    BarChart {
        file_name,
        title,
        y_desc,
        categories: series.methods().to_vec(),
        values: series.slots().to_vec(),
        colors: series.methods().iter().map(|m| method_color(order, m)).collect(),
        format,
    }
}

/// Time, result and speedup charts of one function.
///
/// The speedup chart is left out when the function has no usable baseline
/// time.
pub fn function_charts(
    breakdown: &FunctionBreakdown,
    order: &MethodOrder,
    baseline: &str,
    style: &ChartStyle,
) -> Vec<BarChart> {
    let id = &breakdown.function;
    let label = &breakdown.label;

    let mut charts = vec![
        bar_chart(
            format!("{}_time.svg", id),
            format!("Execution Time - {}", label),
            TIME_AXIS.to_string(),
            &breakdown.time,
            order,
            style.time_format,
        ),
        bar_chart(
            format!("{}_result.svg", id),
            format!("Integral Result - {}", label),
            RESULT_AXIS.to_string(),
            &breakdown.result,
            order,
            style.result_format,
        ),
    ];

    if breakdown.has_speedup() {
        charts.push(bar_chart(
            format!("{}_speedup.svg", id),
            format!("Speedup - {}", label),
            speedup_axis(baseline),
            &breakdown.speedup,
            order,
            style.speedup_format,
        ));
    } else {
        warn!(function = %id, baseline, "no baseline time, skipping speedup chart");
    }

    charts
}

fn grouped_chart(
    file_name: &str,
    title: &str,
    y_desc: String,
    matrix: &ComparisonMatrix,
    order: &MethodOrder,
    format: ValueFormat,
) -> GroupedBarChart {
    let methods = matrix.methods();
    GroupedBarChart {
        file_name: file_name.to_string(),
        title: title.to_string(),
        y_desc,
        groups: matrix.labels().to_vec(),
        series: methods.to_vec(),
        values: (0..methods.len()).map(|i| matrix.row(i).to_vec()).collect(),
        colors: methods.iter().map(|m| method_color(order, m)).collect(),
        format,
    }
}

/// Execution times of every method, grouped by function.
pub fn combined_time_chart(
    matrix: &ComparisonMatrix,
    order: &MethodOrder,
    style: &ChartStyle,
) -> GroupedBarChart {
    grouped_chart(
        COMBINED_TIME_FILE,
        "Execution Time Comparison for Each Function",
        TIME_AXIS.to_string(),
        matrix,
        order,
        style.combined_time_format,
    )
}

/// Speedups of every method, grouped by function.
pub fn combined_speedup_chart(
    matrix: &ComparisonMatrix,
    order: &MethodOrder,
    baseline: &str,
    style: &ChartStyle,
) -> GroupedBarChart {
    grouped_chart(
        COMBINED_SPEEDUP_FILE,
        "Speedup Comparison Across Methods",
        speedup_axis(baseline),
        matrix,
        order,
        style.combined_speedup_format,
    )
}

/// Execution time against worker count, one line per method.
pub fn scaling_chart(lines: &[ScalingLine], order: &MethodOrder) -> LineChart {
    LineChart {
        file_name: SCALING_FILE.to_string(),
        title: "Execution Time vs Number of Threads / Processes".to_string(),
        x_desc: WORKERS_AXIS.to_string(),
        y_desc: TIME_AXIS.to_string(),
        lines: lines
            .iter()
            .map(|line| Line {
                name: line.method.clone(),
                color: method_color(order, &line.method),
                points: line
                    .points
                    .iter()
                    .map(|&(workers, time)| (f64::from(workers), Slot::Value(time)))
                    .collect(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{TAB10, UNKNOWN_METHOD_COLOR};
    use benchplot_core::{breakdown_all, FunctionCatalog, Record, DEFAULT_BASELINE};
    use benchplot_test::fixtures;

    fn breakdowns(records: &[Record]) -> Vec<FunctionBreakdown> {
        breakdown_all(
            records,
            &FunctionCatalog::default(),
            &MethodOrder::default(),
            DEFAULT_BASELINE,
        )
        .unwrap()
    }

    #[test]
    fn test_function_charts_names_and_titles() {
        let order = MethodOrder::default();
        let all = breakdowns(&fixtures::timing_records());
        let charts = function_charts(&all[1], &order, DEFAULT_BASELINE, &ChartStyle::default());

        let names: Vec<&str> = charts.iter().map(|c| c.file_name.as_str()).collect();
        assert_eq!(names, vec!["Func2_time.svg", "Func2_result.svg", "Func2_speedup.svg"]);
        assert_eq!(charts[0].title, "Execution Time - sin(x²)/(x+1)");
        assert_eq!(charts[2].y_desc, "Speedup (relative to Serial)");
        assert_eq!(charts[2].format, ValueFormat::Multiplier(2));
        assert_eq!(charts[0].colors, TAB10[..4].to_vec());
    }

    #[test]
    fn test_speedup_chart_skipped_without_baseline() {
        let order = MethodOrder::default();
        let records = vec![
            Record::new("Func1", "OpenMP", 1.0, 0.5),
            Record::new("Func1", "MPI", 2.0, 0.5),
        ];
        let all = breakdowns(&records);
        let charts = function_charts(&all[0], &order, DEFAULT_BASELINE, &ChartStyle::default());

        assert_eq!(charts.len(), 2);
        assert!(charts.iter().all(|c| !c.file_name.contains("speedup")));
    }

    #[test]
    fn test_missing_method_keeps_its_slot() {
        let order = MethodOrder::default();
        let all = breakdowns(&fixtures::serial_and_mpi_only());
        let charts = function_charts(&all[0], &order, DEFAULT_BASELINE, &ChartStyle::default());
        let time = &charts[0];

        assert_eq!(time.categories, order.methods().to_vec());
        assert_eq!(
            time.values,
            vec![Slot::Value(6.0), Slot::Missing, Slot::Value(1.5), Slot::Missing]
        );
    }

    #[test]
    fn test_combined_chart_groups_by_function() {
        let order = MethodOrder::default();
        let all = breakdowns(&fixtures::timing_records());
        let matrix = ComparisonMatrix::speedups(&all, &order).unwrap();
        let chart = combined_speedup_chart(&matrix, &order, DEFAULT_BASELINE, &ChartStyle::default());

        assert_eq!(chart.file_name, COMBINED_SPEEDUP_FILE);
        assert_eq!(chart.groups.len(), 3);
        assert_eq!(chart.series, order.methods().to_vec());
        // OpenMP on Func1: 8.0 / 2.0
        assert_eq!(chart.values[1][0], Slot::Value(4.0));
        assert_eq!(chart.format.format(4.0), "4.00x");
    }

    #[test]
    fn test_scaling_chart_colors_unknown_methods_gray() {
        let order = MethodOrder::default();
        let lines = vec![
            ScalingLine {
                method: "OpenMP".to_string(),
                points: vec![(1, 4.0), (2, 2.0)],
            },
            ScalingLine {
                method: "CUDA".to_string(),
                points: vec![(1, 1.0)],
            },
        ];
        let chart = scaling_chart(&lines, &order);

        assert_eq!(chart.lines[0].color, TAB10[1]);
        assert_eq!(chart.lines[1].color, UNKNOWN_METHOD_COLOR);
        assert_eq!(chart.lines[0].points[1], (2.0, Slot::Value(2.0)));
    }
}
