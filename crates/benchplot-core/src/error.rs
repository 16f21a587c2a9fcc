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

//! Error types for the normalization pipeline.
//!
//! Row-level data defects never surface here: the parser drops such rows
//! silently. These errors describe broken pre-conditions between stages.

use thiserror::Error;

/// Errors raised by the core pipeline stages.
///
/// # Examples
///
/// ```
/// use benchplot_core::CoreError;
///
/// let err = CoreError::DuplicateMethod {
///     function: "Func1".to_string(),
///     method: "MPI".to_string(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "Duplicate record for method 'MPI' in function 'Func1'"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// More than one record for the same `(function, method)` pair reached the
    /// aligner. The deduplicator must run first.
    #[error("Duplicate record for method '{method}' in function '{function}'")]
    DuplicateMethod {
        /// Function identifier of the offending records.
        function: String,
        /// Method identifier that appeared more than once.
        method: String,
    },

    /// A method order was empty or listed the same method twice.
    #[error("Invalid method order: {0}")]
    InvalidOrder(String),

    /// A series was built with a slot count that does not match its order.
    #[error("Series shape mismatch: expected {expected} slots, got {actual}")]
    ShapeMismatch {
        /// Number of slots the method order requires.
        expected: usize,
        /// Number of slots supplied.
        actual: usize,
    },

    /// Series combined into one comparison do not share the same method order.
    #[error("Series for function '{function}' does not follow the comparison method order")]
    OrderMismatch {
        /// Function whose series disagreed.
        function: String,
    },
}

/// Result type for core pipeline operations.
pub type Result<T> = std::result::Result<T, CoreError>;
