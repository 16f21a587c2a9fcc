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

//! Canonical method ordering and the catalog of benchmarked functions.
//!
//! The method order fixes x-axis positions and color assignment for every
//! chart in a run: a method's color index is its position in the order.

use crate::error::{CoreError, Result};
use std::collections::HashSet;

/// Default canonical method order.
pub const DEFAULT_METHODS: [&str; 4] = ["Serial", "OpenMP", "MPI", "Hybrid"];

/// Default baseline method for speedup ratios.
pub const DEFAULT_BASELINE: &str = "Serial";

/// A fixed, duplicate-free sequence of method identifiers.
///
/// # Examples
///
/// ```
/// use benchplot_core::MethodOrder;
///
/// let order = MethodOrder::default();
/// assert_eq!(order.position("MPI"), Some(2));
/// assert_eq!(order.color_index("Hybrid"), Some(3));
/// assert_eq!(order.position("CUDA"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodOrder {
    methods: Vec<String>,
}

impl MethodOrder {
    /// Build an order from method identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidOrder`] if the order is empty or lists a
    /// method twice.
    pub fn new<I, S>(methods: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let methods: Vec<String> = methods.into_iter().map(Into::into).collect();
        if methods.is_empty() {
            return Err(CoreError::InvalidOrder("no methods given".to_string()));
        }
        let mut seen = HashSet::new();
        for method in &methods {
            if !seen.insert(method.as_str()) {
                return Err(CoreError::InvalidOrder(format!(
                    "method '{}' listed twice",
                    method
                )));
            }
        }
        Ok(Self { methods })
    }

    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    pub fn contains(&self, method: &str) -> bool {
        self.position(method).is_some()
    }

    /// Axis position of `method`, if it is part of the order.
    pub fn position(&self, method: &str) -> Option<usize> {
        self.methods.iter().position(|m| m == method)
    }

    /// Palette index for `method`. Stable across all charts of a run.
    pub fn color_index(&self, method: &str) -> Option<usize> {
        self.position(method)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.methods.iter().map(String::as_str)
    }
}

impl Default for MethodOrder {
    fn default() -> Self {
        Self {
            methods: DEFAULT_METHODS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// A benchmarked function and its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionEntry {
    pub id: String,
    pub label: String,
}

impl FunctionEntry {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// The known set of functions, in chart order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionCatalog {
    entries: Vec<FunctionEntry>,
}

impl FunctionCatalog {
    pub fn new(entries: Vec<FunctionEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[FunctionEntry] {
        &self.entries
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Display label for `id`, if known.
    pub fn label(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.label.as_str())
    }
}

impl Default for FunctionCatalog {
    fn default() -> Self {
        Self::new(vec![
            FunctionEntry::new("Func1", "exp(sin(x²)) * log(x + 2)"),
            FunctionEntry::new("Func2", "sin(x²)/(x+1)"),
            FunctionEntry::new("Func3", "sin(x³)"),
        ])
    }
}
