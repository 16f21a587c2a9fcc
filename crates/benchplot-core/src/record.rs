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

//! Benchmark observations, before and after numeric coercion.

/// One benchmark observation: a method's timing and computed result for a
/// function.
///
/// A `Record` only exists once both `time` and `result` coerced successfully;
/// see [`parse_records`](crate::parse_records).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Function identifier (e.g. `Func1`).
    pub function: String,
    /// Parallelization method identifier (e.g. `OpenMP`).
    pub method: String,
    /// Execution time in seconds, finite and non-negative.
    pub time: f64,
    /// Computed value, any finite sign and magnitude.
    pub result: f64,
}

impl Record {
    /// Create a record from already-coerced values.
    pub fn new(
        function: impl Into<String>,
        method: impl Into<String>,
        time: f64,
        result: f64,
    ) -> Self {
        Self {
            function: function.into(),
            method: method.into(),
            time,
            result,
        }
    }
}

/// One scaling observation: a method's timing at a given worker count.
///
/// Several `ThreadRecord`s may share a `(method, workers)` key when a trial
/// was repeated; [`dedup_thread_records`](crate::dedup_thread_records) merges
/// them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThreadRecord {
    /// Parallelization method identifier.
    pub method: String,
    /// Thread or process count, at least 1.
    pub workers: u32,
    /// Execution time in seconds, finite and non-negative.
    pub time: f64,
}

impl ThreadRecord {
    /// Create a scaling record from already-coerced values.
    pub fn new(method: impl Into<String>, workers: u32, time: f64) -> Self {
        Self {
            method: method.into(),
            workers,
            time,
        }
    }
}

/// An undecoded row of the benchmark results table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawRecord {
    pub function: String,
    pub method: String,
    pub time: String,
    pub result: String,
}

impl RawRecord {
    pub fn new(
        function: impl Into<String>,
        method: impl Into<String>,
        time: impl Into<String>,
        result: impl Into<String>,
    ) -> Self {
        Self {
            function: function.into(),
            method: method.into(),
            time: time.into(),
            result: result.into(),
        }
    }
}

/// An undecoded row of the scaling results table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawThreadRecord {
    pub method: String,
    pub workers: String,
    pub time: String,
}

impl RawThreadRecord {
    pub fn new(
        method: impl Into<String>,
        workers: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            workers: workers.into(),
            time: time.into(),
        }
    }
}
