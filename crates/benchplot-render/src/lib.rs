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

//! SVG rendering of benchmark comparison charts.
//!
//! Charts are plain values ([`BarChart`], [`GroupedBarChart`], [`LineChart`])
//! built from the derived series of `benchplot-core` by the functions in the
//! chart catalogue, then drawn by a [`Renderer`].
//!
//! # Missing data
//!
//! A `Missing` slot never becomes a zero-height bar. Bars and value labels
//! are skipped at that position, which keeps every other bar in its
//! canonical slot, and a missing point breaks a line into separate runs.
//!
//! # Output
//!
//! The [`Renderer`] writes into a staging directory and only replaces the
//! output directory once every chart succeeded. Each run's output directory
//! therefore holds exactly that run's charts.

mod catalogue;
mod chart;
mod error;
mod output;
mod renderer;
mod style;

pub use catalogue::{
    bar_chart, combined_speedup_chart, combined_time_chart, function_charts, scaling_chart,
    speedup_axis, COMBINED_SPEEDUP_FILE, COMBINED_TIME_FILE, RESULT_AXIS, SCALING_FILE,
    TIME_AXIS, WORKERS_AXIS,
};
pub use chart::{BarChart, Chart, GroupedBarChart, Line, LineChart};
pub use error::{RenderError, Result};
pub use output::StagedOutput;
pub use renderer::Renderer;
pub use style::{method_color, ChartStyle, ValueFormat, TAB10, UNKNOWN_METHOD_COLOR};
