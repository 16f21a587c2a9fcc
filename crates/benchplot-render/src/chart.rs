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

//! Chart definitions and their SVG drawing.
//!
//! Every chart is a self-contained value: it owns its title, axis text,
//! categories, colors and values. Drawing one chart never depends on state
//! left behind by another.

use crate::error::{RenderError, Result};
use crate::style::{ChartStyle, ValueFormat};
use benchplot_core::Slot;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::ops::Range;
use std::path::Path;
use tracing::debug;

type DrawResult<DB> = std::result::Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

/// Fraction of the value span kept free above the tallest bar for labels.
const HEADROOM: f64 = 0.15;

/// Width of a single bar in category units.
const BAR_WIDTH: f64 = 0.8;

/// Width of all bars of one group in a grouped chart.
const GROUP_WIDTH: f64 = 0.8;

/// Radius of line chart point markers.
const MARKER_SIZE: i32 = 4;

/// A chart that renders itself into one image file.
pub trait Chart {
    /// File name of the artifact, relative to the output directory.
    fn file_name(&self) -> &str;

    /// Draw the chart as SVG at `path`.
    fn render(&self, path: &Path, style: &ChartStyle) -> Result<()>;
}

/// Bar chart with one bar per category.
///
/// Categories are methods in canonical order; `Missing` values leave an
/// empty slot at their position.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub file_name: String,
    pub title: String,
    pub y_desc: String,
    pub categories: Vec<String>,
    pub values: Vec<Slot>,
    pub colors: Vec<RGBColor>,
    pub format: ValueFormat,
}

impl BarChart {
    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        style: &ChartStyle,
    ) -> DrawResult<DB> {
        root.fill(&WHITE)?;

        let n = self.categories.len().max(1);
        let y_range = value_range(self.values.iter().filter_map(|s| s.value()));

        let mut chart = ChartBuilder::on(root)
            .caption(&self.title, ("sans-serif", style.caption_font_size))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(90)
            .build_cartesian_2d(-0.5..(n as f64 - 0.5), y_range)?;

        let categories = &self.categories;
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(n)
            .x_label_formatter(&|x| category_label(categories, *x))
            .y_desc(self.y_desc.as_str())
            .label_style(("sans-serif", style.tick_font_size))
            .axis_desc_style(("sans-serif", style.axis_font_size))
            .draw()?;

        for (i, slot) in self.values.iter().enumerate() {
            let Some(value) = slot.value() else {
                continue;
            };
            let color = self.colors.get(i).copied().unwrap_or(BLACK);
            let x = i as f64;
            let (left, right) = (x - BAR_WIDTH / 2.0, x + BAR_WIDTH / 2.0);

            chart.draw_series(std::iter::once(Rectangle::new(
                [(left, 0.0), (right, value)],
                color.filled(),
            )))?;
            chart.draw_series(std::iter::once(value_label(
                self.format.format(value),
                (x, value),
                style.value_font_size,
            )))?;
        }

        root.present()?;
        Ok(())
    }
}

impl Chart for BarChart {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn render(&self, path: &Path, style: &ChartStyle) -> Result<()> {
        let root = SVGBackend::new(path, style.single_size).into_drawing_area();
        self.draw(&root, style).map_err(|e| draw_error(path, e))?;
        debug!(path = %path.display(), "wrote bar chart");
        Ok(())
    }
}

/// Grouped bar chart: one group per category on the x axis, one bar per
/// series inside each group, with a legend naming the series.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedBarChart {
    pub file_name: String,
    pub title: String,
    pub y_desc: String,
    /// Group labels along the x axis.
    pub groups: Vec<String>,
    /// Legend names, one per series.
    pub series: Vec<String>,
    /// Indexed `[series][group]`.
    pub values: Vec<Vec<Slot>>,
    pub colors: Vec<RGBColor>,
    pub format: ValueFormat,
}

impl GroupedBarChart {
    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        style: &ChartStyle,
    ) -> DrawResult<DB> {
        root.fill(&WHITE)?;

        let n_groups = self.groups.len().max(1);
        let n_series = self.series.len().max(1);
        let bar_width = GROUP_WIDTH / n_series as f64;
        let y_range = value_range(self.values.iter().flatten().filter_map(|s| s.value()));

        let mut chart = ChartBuilder::on(root)
            .caption(&self.title, ("sans-serif", style.caption_font_size))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(90)
            .build_cartesian_2d(-0.5..(n_groups as f64 - 0.5), y_range)?;

        let groups = &self.groups;
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(n_groups)
            .x_label_formatter(&|x| category_label(groups, *x))
            .y_desc(self.y_desc.as_str())
            .label_style(("sans-serif", style.tick_font_size))
            .axis_desc_style(("sans-serif", style.axis_font_size))
            .draw()?;

        for (s, name) in self.series.iter().enumerate() {
            let color = self.colors.get(s).copied().unwrap_or(BLACK);
            let offset = (s as f64 - (n_series as f64 - 1.0) / 2.0) * bar_width;
            let row = self.values.get(s).map(Vec::as_slice).unwrap_or(&[]);

            for (g, slot) in row.iter().enumerate() {
                let Some(value) = slot.value() else {
                    continue;
                };
                let center = g as f64 + offset;
                chart.draw_series(std::iter::once(Rectangle::new(
                    [(center - bar_width / 2.0, 0.0), (center + bar_width / 2.0, value)],
                    color.filled(),
                )))?;
                chart.draw_series(std::iter::once(value_label(
                    self.format.format(value),
                    (center, value),
                    style.value_font_size,
                )))?;
            }

            chart
                .draw_series(std::iter::empty::<Rectangle<(f64, f64)>>())?
                .label(name.as_str())
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled()));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", style.legend_font_size))
            .draw()?;

        root.present()?;
        Ok(())
    }
}

impl Chart for GroupedBarChart {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn render(&self, path: &Path, style: &ChartStyle) -> Result<()> {
        let root = SVGBackend::new(path, style.combined_size).into_drawing_area();
        self.draw(&root, style).map_err(|e| draw_error(path, e))?;
        debug!(path = %path.display(), "wrote grouped bar chart");
        Ok(())
    }
}

/// One named line of a [`LineChart`].
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub name: String,
    pub color: RGBColor,
    /// Points in drawing order; a `Missing` point breaks the line.
    pub points: Vec<(f64, Slot)>,
}

impl Line {
    /// Runs of consecutive present points, each drawn as its own polyline.
    pub fn segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for &(x, slot) in &self.points {
            match slot.value() {
                Some(y) => current.push((x, y)),
                None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
                None => {}
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}

/// Line chart with point markers and a legend.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub file_name: String,
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub lines: Vec<Line>,
}

impl LineChart {
    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        style: &ChartStyle,
    ) -> DrawResult<DB> {
        root.fill(&WHITE)?;

        let present = || {
            self.lines
                .iter()
                .flat_map(|l| l.points.iter())
                .filter_map(|&(x, slot)| slot.value().map(|y| (x, y)))
        };
        let x_range = padded_range(present().map(|(x, _)| x));
        let y_range = value_range(present().map(|(_, y)| y));

        let mut chart = ChartBuilder::on(root)
            .caption(&self.title, ("sans-serif", style.caption_font_size))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(90)
            .build_cartesian_2d(x_range, y_range)?;

        chart
            .configure_mesh()
            .x_desc(self.x_desc.as_str())
            .y_desc(self.y_desc.as_str())
            .label_style(("sans-serif", style.tick_font_size))
            .axis_desc_style(("sans-serif", style.axis_font_size))
            .draw()?;

        for line in &self.lines {
            let color = line.color;
            let segments = line.segments();

            for segment in &segments {
                chart.draw_series(LineSeries::new(segment.iter().copied(), color.stroke_width(2)))?;
                chart.draw_series(PointSeries::of_element(
                    segment.iter().copied(),
                    MARKER_SIZE,
                    color.filled(),
                    &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
                ))?;
            }

            chart
                .draw_series(std::iter::empty::<PathElement<(f64, f64)>>())?
                .label(line.name.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", style.legend_font_size))
            .draw()?;

        root.present()?;
        Ok(())
    }
}

impl Chart for LineChart {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn render(&self, path: &Path, style: &ChartStyle) -> Result<()> {
        let root = SVGBackend::new(path, style.combined_size).into_drawing_area();
        self.draw(&root, style).map_err(|e| draw_error(path, e))?;
        debug!(path = %path.display(), lines = self.lines.len(), "wrote line chart");
        Ok(())
    }
}

fn draw_error<E: std::fmt::Display>(path: &Path, err: E) -> RenderError {
    RenderError::Draw {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

fn value_label(text: String, at: (f64, f64), size: u32) -> Text<'static, (f64, f64), String> {
    let anchor = if at.1 < 0.0 { VPos::Top } else { VPos::Bottom };
    Text::new(
        text,
        at,
        ("sans-serif", size)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, anchor)),
    )
}

/// Name of the category at tick `x`, or nothing between categories.
fn category_label(names: &[String], x: f64) -> String {
    let idx = x.round();
    if idx < 0.0 || (x - idx).abs() > 0.3 {
        return String::new();
    }
    names.get(idx as usize).cloned().unwrap_or_default()
}

/// Value axis range including zero, with headroom on the sides that hold
/// data. Falls back to `0..1` when there is nothing to span.
fn value_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (lo, hi) = values.fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let span = hi - lo;
    if span <= 0.0 {
        return 0.0..1.0;
    }
    let pad = span * HEADROOM;
    let lo = if lo < 0.0 { lo - pad } else { 0.0 };
    let hi = if hi > 0.0 { hi + pad } else { 0.0 };
    lo..hi
}

/// Range covering `values` with half a unit on each side.
fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if lo > hi {
        return 0.0..1.0;
    }
    (lo - 0.5)..(hi + 0.5)
}
