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

//! Per-function breakdowns and cross-function comparison matrices.
//!
//! This is the glue between the pipeline stages and the charts: one
//! [`FunctionBreakdown`] feeds the three per-function charts, and a
//! [`ComparisonMatrix`] feeds each combined chart.

use crate::align::{align_function, AlignedSeries, Field};
use crate::catalog::{FunctionCatalog, MethodOrder};
use crate::error::{CoreError, Result};
use crate::record::Record;
use crate::slot::Slot;
use crate::speedup::derive_speedup;

/// Aligned time, result and speedup series for one function.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionBreakdown {
    pub function: String,
    pub label: String,
    pub time: AlignedSeries,
    pub result: AlignedSeries,
    pub speedup: AlignedSeries,
}

impl FunctionBreakdown {
    /// Align and derive every series for `function`.
    ///
    /// `records` may contain other functions; only matching ones are used.
    pub fn build(
        records: &[Record],
        function: &str,
        label: &str,
        order: &MethodOrder,
        baseline: &str,
    ) -> Result<Self> {
        let time = align_function(records, function, order, Field::Time)?;
        let result = align_function(records, function, order, Field::Result)?;
        let speedup = derive_speedup(&time, baseline);
        Ok(Self {
            function: function.to_string(),
            label: label.to_string(),
            time,
            result,
            speedup,
        })
    }

    /// `false` when the speedup series is undefined for lack of a baseline.
    pub fn has_speedup(&self) -> bool {
        !self.speedup.all_missing()
    }
}

/// Build a breakdown for every function of `catalog`, in catalog order.
///
/// # Errors
///
/// Propagates [`CoreError::DuplicateMethod`] from alignment.
pub fn breakdown_all(
    records: &[Record],
    catalog: &FunctionCatalog,
    order: &MethodOrder,
    baseline: &str,
) -> Result<Vec<FunctionBreakdown>> {
    catalog
        .entries()
        .iter()
        .map(|entry| FunctionBreakdown::build(records, &entry.id, &entry.label, order, baseline))
        .collect()
}

/// Methods × functions grid of slots for a grouped comparison chart.
///
/// Each function is one group on the x axis; each method is one bar per group,
/// at its canonical position.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonMatrix {
    functions: Vec<String>,
    labels: Vec<String>,
    methods: Vec<String>,
    /// Indexed `[method][function]`.
    cells: Vec<Vec<Slot>>,
}

impl ComparisonMatrix {
    /// Assemble a matrix from one aligned series per function.
    ///
    /// `columns` pairs a function's id and label with its series.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::OrderMismatch`] if a series does not follow
    /// `order`.
    pub fn from_columns<'a, I>(order: &MethodOrder, columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str, &'a AlignedSeries)>,
    {
        let mut functions = Vec::new();
        let mut labels = Vec::new();
        let mut cells = vec![Vec::new(); order.len()];

        for (function, label, series) in columns {
            if !series.follows(order) {
                return Err(CoreError::OrderMismatch {
                    function: function.to_string(),
                });
            }
            functions.push(function.to_string());
            labels.push(label.to_string());
            for (row, slot) in cells.iter_mut().zip(series.slots()) {
                row.push(*slot);
            }
        }

        Ok(Self {
            functions,
            labels,
            methods: order.methods().to_vec(),
            cells,
        })
    }

    /// Combined execution-time matrix.
    pub fn times(breakdowns: &[FunctionBreakdown], order: &MethodOrder) -> Result<Self> {
        Self::from_columns(
            order,
            breakdowns
                .iter()
                .map(|b| (b.function.as_str(), b.label.as_str(), &b.time)),
        )
    }

    /// Combined speedup matrix.
    pub fn speedups(breakdowns: &[FunctionBreakdown], order: &MethodOrder) -> Result<Self> {
        Self::from_columns(
            order,
            breakdowns
                .iter()
                .map(|b| (b.function.as_str(), b.label.as_str(), &b.speedup)),
        )
    }

    pub fn functions(&self) -> &[String] {
        &self.functions
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// Slots of one method across all functions.
    pub fn row(&self, method_index: usize) -> &[Slot] {
        &self.cells[method_index]
    }
}
