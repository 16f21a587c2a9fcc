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

//! Already-parsed records matching the CSV fixtures.

use benchplot_core::{Record, ThreadRecord};

/// Records equivalent to [`TIMINGS_CSV`](super::TIMINGS_CSV).
pub fn timing_records() -> Vec<Record> {
    let rows: [(&str, &str, f64, f64); 12] = [
        ("Func1", "Serial", 8.0, 1.234567),
        ("Func1", "OpenMP", 2.0, 1.234567),
        ("Func1", "MPI", 4.0, 1.234567),
        ("Func1", "Hybrid", 1.0, 1.234567),
        ("Func2", "Serial", 4.0, 0.375),
        ("Func2", "OpenMP", 1.0, 0.375),
        ("Func2", "MPI", 2.0, 0.375),
        ("Func2", "Hybrid", 0.5, 0.375),
        ("Func3", "Serial", 2.0, -0.125),
        ("Func3", "OpenMP", 0.5, -0.125),
        ("Func3", "MPI", 1.0, -0.125),
        ("Func3", "Hybrid", 0.25, -0.125),
    ];
    rows.iter()
        .map(|(f, m, t, r)| Record::new(*f, *m, *t, *r))
        .collect()
}

/// Records for a single function where only `Serial` and `MPI` ran.
pub fn serial_and_mpi_only() -> Vec<Record> {
    vec![
        Record::new("Func1", "Serial", 6.0, 0.5),
        Record::new("Func1", "MPI", 1.5, 0.5),
    ]
}

/// Scaling records with one repeated `(OpenMP, 4)` trial.
pub fn thread_records() -> Vec<ThreadRecord> {
    vec![
        ThreadRecord::new("OpenMP", 1, 40.0),
        ThreadRecord::new("OpenMP", 2, 22.0),
        ThreadRecord::new("OpenMP", 4, 10.0),
        ThreadRecord::new("OpenMP", 4, 20.0),
        ThreadRecord::new("MPI", 1, 41.0),
        ThreadRecord::new("MPI", 2, 21.0),
        ThreadRecord::new("MPI", 4, 11.0),
        ThreadRecord::new("Hybrid", 2, 20.0),
        ThreadRecord::new("Hybrid", 4, 9.5),
    ]
}
