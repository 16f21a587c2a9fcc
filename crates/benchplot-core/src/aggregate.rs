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

//! Deduplicator/Aggregator: collapse repeated trials by averaging.

use crate::record::{Record, ThreadRecord};
use std::collections::BTreeMap;

/// Records whose numeric fields can be averaged across a group.
///
/// `numeric_fields` and `with_numeric_fields` must agree on field order and
/// count. Non-numeric fields of the output are taken from the first record of
/// each group; they are identical across the group when they are part of the
/// key.
pub trait Numeric: Clone {
    /// The numeric fields of this record, in a fixed order.
    fn numeric_fields(&self) -> Vec<f64>;

    /// A copy of this record with its numeric fields replaced.
    fn with_numeric_fields(&self, fields: &[f64]) -> Self;
}

impl Numeric for Record {
    fn numeric_fields(&self) -> Vec<f64> {
        vec![self.time, self.result]
    }

    fn with_numeric_fields(&self, fields: &[f64]) -> Self {
        Self {
            time: fields[0],
            result: fields[1],
            ..self.clone()
        }
    }
}

impl Numeric for ThreadRecord {
    fn numeric_fields(&self) -> Vec<f64> {
        vec![self.time]
    }

    fn with_numeric_fields(&self, fields: &[f64]) -> Self {
        Self {
            time: fields[0],
            ..self.clone()
        }
    }
}

struct Group<T> {
    first: T,
    sums: Vec<f64>,
    count: usize,
}

/// Group `records` by `key` and average every numeric field per group.
///
/// Exactly one record is emitted per distinct key. Keys compare exactly. Groups
/// with one member pass through unchanged. Output is ordered by key, though
/// callers must not rely on any particular order.
///
/// # Examples
///
/// ```
/// use benchplot_core::{aggregate_by, ThreadRecord};
///
/// let trials = vec![
///     ThreadRecord::new("MethodA", 4, 10.0),
///     ThreadRecord::new("MethodA", 4, 20.0),
/// ];
/// let merged = aggregate_by(&trials, |r| (r.method.clone(), r.workers));
/// assert_eq!(merged, vec![ThreadRecord::new("MethodA", 4, 15.0)]);
/// ```
pub fn aggregate_by<T, K, F>(records: &[T], key: F) -> Vec<T>
where
    T: Numeric,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut groups: BTreeMap<K, Group<T>> = BTreeMap::new();

    for record in records {
        let fields = record.numeric_fields();
        groups
            .entry(key(record))
            .and_modify(|group| {
                for (sum, value) in group.sums.iter_mut().zip(&fields) {
                    *sum += value;
                }
                group.count += 1;
            })
            .or_insert_with(|| Group {
                first: record.clone(),
                sums: fields.clone(),
                count: 1,
            });
    }

    groups
        .into_values()
        .map(|group| {
            if group.count == 1 {
                return group.first;
            }
            let n = group.count as f64;
            let means: Vec<f64> = group.sums.iter().map(|sum| sum / n).collect();
            group.first.with_numeric_fields(&means)
        })
        .collect()
}

/// Merge repeated scaling trials into one record per `(method, workers)`.
pub fn dedup_thread_records(records: &[ThreadRecord]) -> Vec<ThreadRecord> {
    aggregate_by(records, |r| (r.method.clone(), r.workers))
}

/// Merge repeated benchmark rows into one record per `(function, method)`.
pub fn dedup_records(records: &[Record]) -> Vec<Record> {
    aggregate_by(records, |r| (r.function.clone(), r.method.clone()))
}
