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

//! Normalization and metric derivation for benchmark comparison charts.
//!
//! This crate sits between raw tabular benchmark measurements and chart
//! rendering. It owns every data invariant of the pipeline:
//!
//! ```text
//! raw rows ─► parse ─► dedup ─► align ─► derive_speedup ─► charts
//! ```
//!
//! - **Parse**: coerce numeric fields; rows with a non-numeric time or result
//!   are dropped silently ([`parse_records`], [`parse_thread_records`]).
//! - **Deduplicate**: average repeated trials per key ([`aggregate_by`]).
//! - **Align**: reindex onto the canonical method order, marking absent
//!   methods as [`Slot::Missing`] ([`align`]).
//! - **Derive**: baseline-relative speedup ratios ([`derive_speedup`]).
//!
//! All stages are pure: inputs are borrowed and never modified.
//!
//! # Examples
//!
//! ```
//! use benchplot_core::{
//!     align, derive_speedup, parse_records, Field, MethodOrder, RawRecord, Slot,
//! };
//!
//! let parsed = parse_records(vec![
//!     RawRecord::new("Func1", "Serial", "8.0", "0.5"),
//!     RawRecord::new("Func1", "MPI", "2.0", "0.5"),
//!     RawRecord::new("Func1", "OpenMP", "n/a", "0.5"),
//! ]);
//!
//! let order = MethodOrder::default();
//! let times = align(&parsed.records, &order, Field::Time).unwrap();
//! let speedup = derive_speedup(&times, "Serial");
//!
//! assert_eq!(speedup.get("MPI"), Some(Slot::Value(4.0)));
//! assert_eq!(speedup.get("OpenMP"), Some(Slot::Missing));
//! ```

mod aggregate;
mod align;
mod breakdown;
mod catalog;
mod error;
mod parse;
mod record;
mod scaling;
mod slot;
mod speedup;

pub use aggregate::{aggregate_by, dedup_records, dedup_thread_records, Numeric};
pub use align::{align, align_function, AlignedSeries, Field};
pub use breakdown::{breakdown_all, ComparisonMatrix, FunctionBreakdown};
pub use catalog::{FunctionCatalog, FunctionEntry, MethodOrder, DEFAULT_BASELINE, DEFAULT_METHODS};
pub use error::{CoreError, Result};
pub use parse::{
    coerce_float, coerce_time, coerce_workers, parse_records, parse_thread_records, ParseReport,
    Parsed,
};
pub use record::{RawRecord, RawThreadRecord, Record, ThreadRecord};
pub use scaling::{scaling_lines, ScalingLine};
pub use slot::Slot;
pub use speedup::derive_speedup;
