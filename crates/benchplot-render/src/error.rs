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

//! Error types for chart rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Chart rendering and output directory errors.
///
/// All variants are structural: a run that hits one produces no output
/// directory changes.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Filesystem operation on the output or staging directory failed.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// Path being created, written or removed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Plotting backend failed while drawing a chart.
    #[error("Failed to draw '{}': {message}", path.display())]
    Draw {
        /// Chart file being drawn.
        path: PathBuf,
        /// Backend error message.
        message: String,
    },

    /// The output directory path has no usable final component.
    #[error("Invalid output directory '{}'", path.display())]
    InvalidOutputDir {
        /// Path as given.
        path: PathBuf,
    },
}

impl RenderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RenderError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience type alias for `Result` with `RenderError`.
pub type Result<T> = std::result::Result<T, RenderError>;
