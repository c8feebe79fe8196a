// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Normalized health signals derived from command output.
//!
//! Status values are derived purely from an [`ExecutionResult`] and are
//! recomputed on every query — a signal is never cached, so it always
//! reflects the current external state.
//!
//! [`ExecutionResult`]: crate::ExecutionResult

use std::path::PathBuf;

use serde::Serialize;

/// Health of one compose stack.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StackStatus {
    /// Whether the stack appears in the compose listing at all.
    pub installed: bool,
    /// Whether the matched status text indicates a running stack.
    pub running: bool,
    /// Trimmed status field from the listing, or one of the fixed markers
    /// `not-installed`, `unknown`, `error`, `docker-not-found`.
    pub status_text: String,
}

/// Availability and summary of an auto-detected CLI tool.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ToolStatus {
    /// Whether any candidate binary was located.
    pub installed: bool,
    /// Absolute path of the located binary, when installed.
    pub binary: Option<PathBuf>,
    /// Trimmed output of the version query.
    pub version: String,
    /// Trimmed output of the summary query.
    pub summary: String,
    /// Summary lines that describe controllers, verbatim.
    pub controller_hints: Vec<String>,
    /// Newline-joined failure text from the underlying queries, or the
    /// install hint when the tool is absent. Empty on full success.
    pub error: String,
}
