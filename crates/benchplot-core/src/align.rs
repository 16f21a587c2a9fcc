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

//! Aligner: reindex records onto the canonical method order.
//!
//! Every position of the order yields one slot. Methods with no record become
//! [`Slot::Missing`] so bars never shift when data is absent.

use crate::catalog::MethodOrder;
use crate::error::{CoreError, Result};
use crate::record::Record;
use crate::slot::Slot;
use tracing::trace;

/// Which numeric field of a [`Record`] a series carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Time,
    Result,
}

impl Field {
    /// Read this field from `record`.
    pub fn of(self, record: &Record) -> f64 {
        match self {
            Field::Time => record.time,
            Field::Result => record.result,
        }
    }
}

/// One slot per canonical method position.
///
/// # Examples
///
/// ```
/// use benchplot_core::{align, Field, MethodOrder, Record, Slot};
///
/// let records = vec![
///     Record::new("Func1", "Serial", 8.0, 1.0),
///     Record::new("Func1", "MPI", 2.0, 1.0),
/// ];
/// let series = align(&records, &MethodOrder::default(), Field::Time).unwrap();
///
/// assert_eq!(series.len(), 4);
/// assert_eq!(series.get("Serial"), Some(Slot::Value(8.0)));
/// assert_eq!(series.get("OpenMP"), Some(Slot::Missing));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignedSeries {
    methods: Vec<String>,
    slots: Vec<Slot>,
}

impl AlignedSeries {
    /// Build a series from explicit slots, one per method of `order`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ShapeMismatch`] when `slots.len()` differs from
    /// the order length.
    pub fn new(order: &MethodOrder, slots: Vec<Slot>) -> Result<Self> {
        if slots.len() != order.len() {
            return Err(CoreError::ShapeMismatch {
                expected: order.len(),
                actual: slots.len(),
            });
        }
        Ok(Self {
            methods: order.methods().to_vec(),
            slots,
        })
    }

    /// A series with every slot missing.
    pub fn missing(order: &MethodOrder) -> Self {
        Self {
            methods: order.methods().to_vec(),
            slots: vec![Slot::Missing; order.len()],
        }
    }

    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot for `method`, or `None` if the method is not part of the order.
    pub fn get(&self, method: &str) -> Option<Slot> {
        self.methods
            .iter()
            .position(|m| m == method)
            .map(|i| self.slots[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Slot)> {
        self.methods
            .iter()
            .map(String::as_str)
            .zip(self.slots.iter().copied())
    }

    /// Number of present (non-missing) slots.
    pub fn present_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_present()).count()
    }

    /// `true` when every slot is missing.
    pub fn all_missing(&self) -> bool {
        self.present_count() == 0
    }

    /// Build a new series by mapping each `(method, slot)` pair.
    pub fn map_slots<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&str, Slot) -> Slot,
    {
        Self {
            methods: self.methods.clone(),
            slots: self.iter().map(|(m, s)| f(m, s)).collect(),
        }
    }

    /// `true` when this series follows exactly the methods of `order`.
    pub fn follows(&self, order: &MethodOrder) -> bool {
        self.methods.as_slice() == order.methods()
    }
}

/// Align `records` onto `order`, reading `field` from each record.
///
/// The records are expected to belong to one function (or one comparison
/// axis). Records whose method is not in the order are ignored.
///
/// # Errors
///
/// Returns [`CoreError::DuplicateMethod`] if two records share a method. The
/// deduplicator must have merged such rows before alignment.
pub fn align<'a, I>(records: I, order: &MethodOrder, field: Field) -> Result<AlignedSeries>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut slots = vec![Slot::Missing; order.len()];

    for record in records {
        let Some(position) = order.position(&record.method) else {
            trace!(method = %record.method, "method outside canonical order");
            continue;
        };
        if slots[position].is_present() {
            return Err(CoreError::DuplicateMethod {
                function: record.function.clone(),
                method: record.method.clone(),
            });
        }
        slots[position] = Slot::Value(field.of(record));
    }

    Ok(AlignedSeries {
        methods: order.methods().to_vec(),
        slots,
    })
}

/// Align the records of one `function` out of a mixed record set.
pub fn align_function(
    records: &[Record],
    function: &str,
    order: &MethodOrder,
    field: Field,
) -> Result<AlignedSeries> {
    align(
        records.iter().filter(|r| r.function == function),
        order,
        field,
    )
}
