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

//! Writes charts into a staged output directory.

use crate::chart::Chart;
use crate::error::Result;
use crate::output::StagedOutput;
use crate::style::ChartStyle;
use std::path::PathBuf;

/// Renders charts one at a time into a staging directory, then swaps it in
/// place of the output directory on [`finish`](Renderer::finish).
///
/// Dropping a `Renderer` without finishing leaves the output directory as it
/// was.
///
/// # Examples
///
/// ```no_run
/// use benchplot_core::{AlignedSeries, MethodOrder, Slot};
/// use benchplot_render::{bar_chart, ChartStyle, Renderer, ValueFormat};
///
/// let order = MethodOrder::default();
/// let series = AlignedSeries::new(
///     &order,
///     vec![Slot::Value(2.0), Slot::Value(0.5), Slot::Missing, Slot::Value(0.25)],
/// )
/// .unwrap();
///
/// let mut renderer = Renderer::new("plots", ChartStyle::default()).unwrap();
/// renderer
///     .render(&bar_chart(
///         "Func1_time.svg".to_string(),
///         "Execution Time - f".to_string(),
///         "Execution Time (seconds)".to_string(),
///         &series,
///         &order,
///         ValueFormat::Decimal(6),
///     ))
///     .unwrap();
/// let written = renderer.finish().unwrap();
/// assert_eq!(written, vec!["Func1_time.svg".to_string()]);
/// ```
#[derive(Debug)]
pub struct Renderer {
    style: ChartStyle,
    output: StagedOutput,
}

impl Renderer {
    /// Start a run targeting `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>, style: ChartStyle) -> Result<Self> {
        Ok(Self {
            style,
            output: StagedOutput::begin(output_dir)?,
        })
    }

    /// Render one chart into the staging directory.
    pub fn render(&mut self, chart: &dyn Chart) -> Result<()> {
        let path = self.output.artifact_path(chart.file_name());
        chart.render(&path, &self.style)
    }

    /// Render every chart of `charts`, stopping at the first failure.
    pub fn render_all<'a, I, C>(&mut self, charts: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a C>,
        C: Chart + 'a,
    {
        for chart in charts {
            self.render(chart)?;
        }
        Ok(())
    }

    /// Publish the rendered charts as the output directory.
    ///
    /// Returns the file names written, in rendering order.
    pub fn finish(self) -> Result<Vec<String>> {
        self.output.commit()
    }
}
