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

//! Speedup Deriver: baseline-relative time ratios.

use crate::align::AlignedSeries;
use crate::slot::Slot;

/// Derive `baseline_time / method_time` for every slot of `times`.
///
/// - A missing (or zero) baseline makes the whole series missing.
/// - The baseline's own slot is exactly `1.0`.
/// - A missing or zero method time yields a missing speedup.
/// - Everything else is the plain ratio, unrounded.
///
/// The input series is not modified.
///
/// # Examples
///
/// ```
/// use benchplot_core::{derive_speedup, AlignedSeries, MethodOrder, Slot};
///
/// let order = MethodOrder::default();
/// let times = AlignedSeries::new(
///     &order,
///     vec![Slot::Value(8.0), Slot::Value(2.0), Slot::Missing, Slot::Value(0.0)],
/// )
/// .unwrap();
///
/// let speedup = derive_speedup(&times, "Serial");
/// assert_eq!(
///     speedup.slots(),
///     &[Slot::Value(1.0), Slot::Value(4.0), Slot::Missing, Slot::Missing]
/// );
/// ```
pub fn derive_speedup(times: &AlignedSeries, baseline: &str) -> AlignedSeries {
    let baseline_time = match times.get(baseline) {
        Some(Slot::Value(t)) if t > 0.0 => t,
        _ => return times.map_slots(|_, _| Slot::Missing),
    };

    times.map_slots(|method, slot| {
        if method == baseline {
            return Slot::Value(1.0);
        }
        match slot {
            Slot::Value(t) if t != 0.0 => Slot::Value(baseline_time / t),
            _ => Slot::Missing,
        }
    })
}
