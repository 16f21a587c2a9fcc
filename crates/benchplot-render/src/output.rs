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

//! Output directory lifecycle.
//!
//! Charts are written into a staging directory beside the target. Only once
//! every chart has been written does [`StagedOutput::commit`] replace the
//! target, so the target holds either the previous run's artifacts or
//! exactly the current run's, never a mix and never a half-cleared state.
//! The previous target is moved aside to a backup path first and moved back
//! if the staging directory cannot take its place.

use crate::error::{RenderError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A staging directory that replaces `target` on commit and is removed on
/// drop otherwise.
#[derive(Debug)]
pub struct StagedOutput {
    target: PathBuf,
    staging: PathBuf,
    backup: PathBuf,
    artifacts: Vec<String>,
    committed: bool,
}

impl StagedOutput {
    /// Create a fresh, empty staging directory for `target`.
    ///
    /// A leftover staging directory from an interrupted run is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidOutputDir`] for paths such as `..` that
    /// have no final component, and [`RenderError::Io`] if the staging
    /// directory cannot be created.
    pub fn begin(target: impl Into<PathBuf>) -> Result<Self> {
        let target = target.into();
        let name = target
            .file_name()
            .ok_or_else(|| RenderError::InvalidOutputDir {
                path: target.clone(),
            })?
            .to_string_lossy()
            .into_owned();

        let parent = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let staging = parent.join(format!(".{}.staging", name));
        let backup = parent.join(format!(".{}.previous", name));

        if staging.exists() {
            std::fs::remove_dir_all(&staging).map_err(|e| RenderError::io(&staging, e))?;
        }
        std::fs::create_dir_all(&staging).map_err(|e| RenderError::io(&staging, e))?;
        debug!(staging = %staging.display(), "created staging directory");

        Ok(Self {
            target,
            staging,
            backup,
            artifacts: Vec::new(),
            committed: false,
        })
    }

    /// Directory charts are currently written into.
    pub fn staging(&self) -> &Path {
        &self.staging
    }

    /// Reserve `file_name` in the staging directory and return its path.
    pub fn artifact_path(&mut self, file_name: &str) -> PathBuf {
        self.artifacts.push(file_name.to_string());
        self.staging.join(file_name)
    }

    /// File names reserved so far, in order.
    pub fn artifacts(&self) -> &[String] {
        &self.artifacts
    }

    /// Replace the target with the staging directory.
    ///
    /// An existing target is renamed to a backup path before the swap. If the
    /// staging directory cannot be moved into place, the backup is renamed
    /// back so the previous output survives the failure.
    ///
    /// Returns the artifact file names now present in the target.
    pub fn commit(mut self) -> Result<Vec<String>> {
        if self.backup.exists() {
            remove_path(&self.backup).map_err(|e| RenderError::io(&self.backup, e))?;
        }

        let had_previous = self.target.exists();
        if had_previous {
            std::fs::rename(&self.target, &self.backup)
                .map_err(|e| RenderError::io(&self.target, e))?;
        }

        if let Err(e) = std::fs::rename(&self.staging, &self.target) {
            if had_previous {
                if let Err(restore) = std::fs::rename(&self.backup, &self.target) {
                    warn!(
                        backup = %self.backup.display(),
                        error = %restore,
                        "failed to restore previous output"
                    );
                }
            }
            return Err(RenderError::io(&self.target, e));
        }
        self.committed = true;

        if had_previous {
            if let Err(e) = remove_path(&self.backup) {
                warn!(backup = %self.backup.display(), error = %e, "failed to remove previous output");
            }
        }
        debug!(target = %self.target.display(), artifacts = self.artifacts.len(), "committed output");
        Ok(std::mem::take(&mut self.artifacts))
    }
}

fn remove_path(path: &Path) -> std::io::Result<()> {
    if path.is_dir() {
        std::fs::remove_dir_all(path)
    } else {
        std::fs::remove_file(path)
    }
}

impl Drop for StagedOutput {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        if let Err(e) = std::fs::remove_dir_all(&self.staging) {
            warn!(staging = %self.staging.display(), error = %e, "failed to remove staging directory");
        }
    }
}
