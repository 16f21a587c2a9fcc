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

//! Chart styling: sizes, fonts, value labels and method colors.

use benchplot_core::MethodOrder;
use plotters::style::RGBColor;

/// The ten-color categorical palette, indexed by canonical method position.
pub const TAB10: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// Color for methods outside the canonical order.
pub const UNKNOWN_METHOD_COLOR: RGBColor = RGBColor(170, 170, 170);

/// Color of `method`, stable across every chart of a run.
///
/// # Examples
///
/// ```
/// use benchplot_core::MethodOrder;
/// use benchplot_render::{method_color, TAB10, UNKNOWN_METHOD_COLOR};
///
/// let order = MethodOrder::default();
/// assert_eq!(method_color(&order, "OpenMP"), TAB10[1]);
/// assert_eq!(method_color(&order, "CUDA"), UNKNOWN_METHOD_COLOR);
/// ```
pub fn method_color(order: &MethodOrder, method: &str) -> RGBColor {
    order
        .color_index(method)
        .map(|i| TAB10[i % TAB10.len()])
        .unwrap_or(UNKNOWN_METHOD_COLOR)
}

/// How a value label above a bar is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// Fixed decimals, e.g. `0.123457`.
    Decimal(usize),
    /// Fixed decimals with an `x` suffix, e.g. `4.00x`.
    Multiplier(usize),
}

impl ValueFormat {
    /// Render `value` for display.
    pub fn format(self, value: f64) -> String {
        match self {
            ValueFormat::Decimal(p) => format!("{:.*}", p, value),
            ValueFormat::Multiplier(p) => format!("{:.*}x", p, value),
        }
    }
}

/// Sizes, fonts and label formats shared by all charts of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    /// Pixel size of per-function charts.
    pub single_size: (u32, u32),
    /// Pixel size of combined and scaling charts.
    pub combined_size: (u32, u32),
    pub caption_font_size: u32,
    pub axis_font_size: u32,
    pub tick_font_size: u32,
    pub value_font_size: u32,
    pub legend_font_size: u32,
    pub time_format: ValueFormat,
    pub result_format: ValueFormat,
    pub speedup_format: ValueFormat,
    pub combined_time_format: ValueFormat,
    pub combined_speedup_format: ValueFormat,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            single_size: (800, 600),
            combined_size: (1000, 600),
            caption_font_size: 22,
            axis_font_size: 16,
            tick_font_size: 13,
            value_font_size: 12,
            legend_font_size: 14,
            time_format: ValueFormat::Decimal(6),
            result_format: ValueFormat::Decimal(6),
            speedup_format: ValueFormat::Multiplier(2),
            combined_time_format: ValueFormat::Decimal(2),
            combined_speedup_format: ValueFormat::Multiplier(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_formats() {
        assert_eq!(ValueFormat::Decimal(6).format(1.5), "1.500000");
        assert_eq!(ValueFormat::Decimal(2).format(0.126), "0.13");
        // Exact ties round to even.
        assert_eq!(ValueFormat::Decimal(2).format(0.125), "0.12");
        assert_eq!(ValueFormat::Multiplier(2).format(4.0), "4.00x");
    }

    #[test]
    fn test_colors_follow_canonical_position() {
        let order = MethodOrder::default();
        let colors: Vec<RGBColor> = order.iter().map(|m| method_color(&order, m)).collect();
        assert_eq!(colors, TAB10[..4].to_vec());
    }

    #[test]
    fn test_colors_wrap_past_palette() {
        let methods: Vec<String> = (0..12).map(|i| format!("M{}", i)).collect();
        let order = MethodOrder::new(methods).unwrap();
        assert_eq!(method_color(&order, "M10"), TAB10[0]);
        assert_eq!(method_color(&order, "M11"), TAB10[1]);
    }
}
