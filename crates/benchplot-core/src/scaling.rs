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

//! Scaling lines: execution time against worker count, one line per method.

use crate::aggregate::dedup_thread_records;
use crate::catalog::MethodOrder;
use crate::record::ThreadRecord;
use std::collections::BTreeMap;

/// Averaged `(workers, time)` points of one method, ascending by `workers`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingLine {
    pub method: String,
    pub points: Vec<(u32, f64)>,
}

/// Group scaling records into one line per method.
///
/// Repeated `(method, workers)` trials are averaged first. Lines come out in
/// canonical order; methods outside the order follow, sorted by name.
///
/// # Examples
///
/// ```
/// use benchplot_core::{scaling_lines, MethodOrder, ThreadRecord};
///
/// let lines = scaling_lines(
///     &[
///         ThreadRecord::new("MPI", 4, 3.0),
///         ThreadRecord::new("OpenMP", 2, 5.0),
///         ThreadRecord::new("MPI", 2, 6.0),
///         ThreadRecord::new("MPI", 4, 5.0),
///     ],
///     &MethodOrder::default(),
/// );
/// assert_eq!(lines[0].method, "OpenMP");
/// assert_eq!(lines[1].points, vec![(2, 6.0), (4, 4.0)]);
/// ```
pub fn scaling_lines(records: &[ThreadRecord], order: &MethodOrder) -> Vec<ScalingLine> {
    let mut by_method: BTreeMap<String, Vec<(u32, f64)>> = BTreeMap::new();
    for record in dedup_thread_records(records) {
        by_method
            .entry(record.method)
            .or_default()
            .push((record.workers, record.time));
    }

    let mut lines: Vec<ScalingLine> = by_method
        .into_iter()
        .map(|(method, mut points)| {
            points.sort_by_key(|(workers, _)| *workers);
            ScalingLine { method, points }
        })
        .collect();

    // BTreeMap already sorted by name; a stable sort on position keeps that
    // order among unknown methods.
    lines.sort_by_key(|line| order.position(&line.method).unwrap_or(usize::MAX));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_follow_canonical_order() {
        let lines = scaling_lines(
            &[
                ThreadRecord::new("Hybrid", 2, 1.0),
                ThreadRecord::new("Zeta", 2, 1.0),
                ThreadRecord::new("Alpha", 2, 1.0),
                ThreadRecord::new("OpenMP", 2, 1.0),
            ],
            &MethodOrder::default(),
        );
        let methods: Vec<&str> = lines.iter().map(|l| l.method.as_str()).collect();
        assert_eq!(methods, vec!["OpenMP", "Hybrid", "Alpha", "Zeta"]);
    }

    #[test]
    fn test_points_sorted_by_workers() {
        let lines = scaling_lines(
            &[
                ThreadRecord::new("OpenMP", 8, 1.0),
                ThreadRecord::new("OpenMP", 1, 8.0),
                ThreadRecord::new("OpenMP", 4, 2.0),
            ],
            &MethodOrder::default(),
        );
        assert_eq!(lines[0].points, vec![(1, 8.0), (4, 2.0), (8, 1.0)]);
    }

    #[test]
    fn test_empty_records() {
        assert!(scaling_lines(&[], &MethodOrder::default()).is_empty());
    }
}
