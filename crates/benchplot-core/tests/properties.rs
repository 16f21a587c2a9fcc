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

//! Property-based tests for the normalization pipeline.

use benchplot_core::{
    align, dedup_thread_records, derive_speedup, parse_records, AlignedSeries, Field,
    MethodOrder, RawRecord, Record, Slot, ThreadRecord,
};
use proptest::prelude::*;

fn method() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Serial", "OpenMP", "MPI", "Hybrid"]).prop_map(String::from)
}

fn slot() -> impl Strategy<Value = Slot> {
    prop_oneof![
        Just(Slot::Missing),
        Just(Slot::Value(0.0)),
        (1e-6_f64..1e6).prop_map(Slot::Value),
    ]
}

fn series() -> impl Strategy<Value = AlignedSeries> {
    prop::collection::vec(slot(), 4)
        .prop_map(|slots| AlignedSeries::new(&MethodOrder::default(), slots).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: the baseline's own speedup is exactly 1.0 when its time is non-zero.
    #[test]
    fn prop_baseline_speedup_is_one(time in 1e-9_f64..1e9, rest in prop::collection::vec(slot(), 3)) {
        let mut slots = vec![Slot::Value(time)];
        slots.extend(rest);
        let times = AlignedSeries::new(&MethodOrder::default(), slots).unwrap();

        let speedup = derive_speedup(&times, "Serial");
        prop_assert_eq!(speedup.get("Serial"), Some(Slot::Value(1.0)));
    }

    /// Property: a missing baseline leaves every derived value missing.
    #[test]
    fn prop_missing_baseline_blanks_all(rest in prop::collection::vec(slot(), 3)) {
        let mut slots = vec![Slot::Missing];
        slots.extend(rest);
        let times = AlignedSeries::new(&MethodOrder::default(), slots).unwrap();

        prop_assert!(derive_speedup(&times, "Serial").all_missing());
    }

    /// Property: a missing or zero method time never yields a speedup value.
    #[test]
    fn prop_missing_time_stays_missing(times in series()) {
        let speedup = derive_speedup(&times, "Serial");
        for ((method, time), (_, derived)) in times.iter().zip(speedup.iter()) {
            if method != "Serial" && time.value().map_or(true, |t| t == 0.0) {
                prop_assert_eq!(derived, Slot::Missing);
            }
        }
    }

    /// Property: aggregating a single-record group returns the record unchanged.
    #[test]
    fn prop_single_group_is_identity(
        method in method(),
        workers in 1_u32..256,
        time in 0.0_f64..1e6,
    ) {
        let record = ThreadRecord::new(method, workers, time);
        let merged = dedup_thread_records(std::slice::from_ref(&record));
        prop_assert_eq!(merged, vec![record]);
    }

    /// Property: aggregation emits exactly one record per distinct key.
    #[test]
    fn prop_one_record_per_key(
        rows in prop::collection::vec((method(), 1_u32..8, 0.0_f64..100.0), 0..40)
    ) {
        let records: Vec<ThreadRecord> = rows
            .iter()
            .map(|(m, w, t)| ThreadRecord::new(m.clone(), *w, *t))
            .collect();
        let mut keys: Vec<(String, u32)> = rows.iter().map(|(m, w, _)| (m.clone(), *w)).collect();
        keys.sort();
        keys.dedup();

        let merged = dedup_thread_records(&records);
        prop_assert_eq!(merged.len(), keys.len());
    }

    /// Property: alignment always yields one slot per canonical method.
    #[test]
    fn prop_alignment_has_fixed_width(
        methods in prop::sample::subsequence(vec!["Serial", "OpenMP", "MPI", "Hybrid"], 0..=4)
    ) {
        let records: Vec<Record> = methods
            .iter()
            .map(|m| Record::new("Func1", *m, 1.0, 2.0))
            .collect();
        let aligned = align(&records, &MethodOrder::default(), Field::Result).unwrap();

        prop_assert_eq!(aligned.len(), 4);
        prop_assert_eq!(aligned.present_count(), methods.len());
    }

    /// Property: numeric text always survives parsing with its value.
    #[test]
    fn prop_numeric_rows_are_kept(time in 0.0_f64..1e6, result in -1e6_f64..1e6) {
        let parsed = parse_records(vec![RawRecord::new(
            "Func1",
            "MPI",
            time.to_string(),
            result.to_string(),
        )]);
        prop_assert_eq!(parsed.records, vec![Record::new("Func1", "MPI", time, result)]);
    }
}

#[test]
fn test_aggregate_two_trials() {
    let merged = dedup_thread_records(&[
        ThreadRecord::new("MethodA", 4, 10.0),
        ThreadRecord::new("MethodA", 4, 20.0),
    ]);
    assert_eq!(merged, vec![ThreadRecord::new("MethodA", 4, 15.0)]);
}

#[test]
fn test_align_serial_and_mpi_only() {
    let records = vec![
        Record::new("Func1", "Serial", 2.0, 1.0),
        Record::new("Func1", "MPI", 0.5, 1.0),
    ];
    let aligned = align(&records, &MethodOrder::default(), Field::Time).unwrap();

    assert_eq!(aligned.get("Serial"), Some(Slot::Value(2.0)));
    assert_eq!(aligned.get("OpenMP"), Some(Slot::Missing));
    assert_eq!(aligned.get("MPI"), Some(Slot::Value(0.5)));
    assert_eq!(aligned.get("Hybrid"), Some(Slot::Missing));
}

#[test]
fn test_parse_keeps_and_drops() {
    let parsed = parse_records(vec![
        RawRecord::new("Func1", "Serial", "abc", "2.1"),
        RawRecord::new("Func1", "Serial", "3.5", "2.1"),
    ]);
    assert_eq!(parsed.records, vec![Record::new("Func1", "Serial", 3.5, 2.1)]);
}
