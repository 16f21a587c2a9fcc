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

//! Input tables as they arrive from the benchmark harness.

/// Complete benchmark results: three functions, four methods each.
///
/// Serial times are `8.0`, `4.0`, `2.0`; every parallel method is a clean
/// divisor so speedups are exact.
pub const TIMINGS_CSV: &str = "\
Function,Method,Time,Result
Func1,Serial,8.0,1.234567
Func1,OpenMP,2.0,1.234567
Func1,MPI,4.0,1.234567
Func1,Hybrid,1.0,1.234567
Func2,Serial,4.0,0.375
Func2,OpenMP,1.0,0.375
Func2,MPI,2.0,0.375
Func2,Hybrid,0.5,0.375
Func3,Serial,2.0,-0.125
Func3,OpenMP,0.5,-0.125
Func3,MPI,1.0,-0.125
Func3,Hybrid,0.25,-0.125
";

/// Benchmark results with row-level defects and gaps.
///
/// - `Func1/OpenMP` has a non-numeric time and is dropped.
/// - `Func1/Hybrid` has an empty result and is dropped.
/// - `Func2` has no `Serial` row, so its speedup is undefined.
/// - `Func3` only has `Serial` and `MPI`.
pub const TIMINGS_WITH_DEFECTS_CSV: &str = "\
Function,Method,Time,Result
Func1,Serial,8.0,1.5
Func1,OpenMP,abc,1.5
Func1,MPI,2.0,1.5
Func1,Hybrid,1.0,
Func2,OpenMP,1.0,0.5
Func2,MPI,2.0,0.5
Func3,Serial,3.0,0.25
Func3,MPI,1.5,0.25
";

/// Number of rows in [`TIMINGS_WITH_DEFECTS_CSV`] that survive parsing.
pub const TIMINGS_WITH_DEFECTS_KEPT: usize = 6;

/// Scaling results with repeated trials.
///
/// `OpenMP` at 4 workers appears twice (`10.0`, `20.0`) and averages to
/// `15.0`. One row has an invalid worker count.
pub const THREADS_CSV: &str = "\
Method,Workers,Time
OpenMP,1,40.0
OpenMP,2,22.0
OpenMP,4,10.0
OpenMP,4,20.0
MPI,1,41.0
MPI,2,21.0
MPI,4,11.0
Hybrid,2,20.0
Hybrid,4,9.5
Hybrid,many,1.0
";

/// Benchmark results missing the `Result` column.
pub const TIMINGS_MISSING_COLUMN_CSV: &str = "\
Function,Method,Time
Func1,Serial,8.0
";

/// Scaling results missing the `Workers` column.
pub const THREADS_MISSING_COLUMN_CSV: &str = "\
Method,Time
OpenMP,1.0
";
