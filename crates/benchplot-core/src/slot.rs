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

//! The `Missing`-aware value carried through every derived series.

/// One position of an aligned series: either an observed value or `Missing`.
///
/// `Missing` is distinct from zero. It propagates through every derivation and
/// is rendered as absence, never as a zero-height bar.
///
/// # Examples
///
/// ```
/// use benchplot_core::Slot;
///
/// let present = Slot::Value(2.5);
/// assert_eq!(present.value(), Some(2.5));
///
/// let absent = Slot::Missing;
/// assert!(absent.is_missing());
/// assert_eq!(absent.map(|v| v * 2.0), Slot::Missing);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slot {
    /// An observed or derived value.
    Value(f64),
    /// No observation for this position.
    #[default]
    Missing,
}

impl Slot {
    /// Returns the contained value, or `None` when missing.
    pub fn value(self) -> Option<f64> {
        match self {
            Slot::Value(v) => Some(v),
            Slot::Missing => None,
        }
    }

    /// Returns `true` for [`Slot::Missing`].
    pub fn is_missing(self) -> bool {
        matches!(self, Slot::Missing)
    }

    /// Returns `true` for [`Slot::Value`].
    pub fn is_present(self) -> bool {
        !self.is_missing()
    }

    /// Applies `f` to a present value; `Missing` stays `Missing`.
    pub fn map<F: FnOnce(f64) -> f64>(self, f: F) -> Slot {
        match self {
            Slot::Value(v) => Slot::Value(f(v)),
            Slot::Missing => Slot::Missing,
        }
    }
}

impl From<Option<f64>> for Slot {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Slot::Missing, Slot::Value)
    }
}

impl From<f64> for Slot {
    fn from(value: f64) -> Self {
        Slot::Value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_missing() {
        assert_eq!(Slot::default(), Slot::Missing);
    }

    #[test]
    fn test_zero_is_not_missing() {
        let zero = Slot::Value(0.0);
        assert!(zero.is_present());
        assert_eq!(zero.value(), Some(0.0));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Slot::from(Some(1.5)), Slot::Value(1.5));
        assert_eq!(Slot::from(None), Slot::Missing);
    }
}
