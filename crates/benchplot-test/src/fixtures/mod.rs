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

//! Canonical fixtures for the benchmark pipeline.
//!
//! - **tables**: raw CSV inputs, clean and defective
//! - **records**: the parsed equivalents, for tests that skip decoding

mod records;
mod tables;

pub use records::*;
pub use tables::*;

/// Returns every well-formed timings table with its name.
pub fn timing_tables() -> Vec<(&'static str, &'static str)> {
    vec![
        ("complete", TIMINGS_CSV),
        ("with_defects", TIMINGS_WITH_DEFECTS_CSV),
    ]
}
