// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Static per-tool configuration.
//!
//! Descriptors are constructed once at service registration and stay
//! immutable for the process lifetime. The façade for a tool owns its
//! descriptor; nothing here carries request state.

use std::path::PathBuf;

/// A lifecycle-managed container stack: one compose project controlled
/// through a fixed script, with a convention-based data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackDescriptor {
    /// Human-facing name (e.g. "Certbot").
    pub display_name: String,
    /// Compose project identifier matched against `docker compose ls` rows.
    pub project: String,
    /// Control script invoked as `/bin/bash <script> <action>`.
    pub control_script: PathBuf,
    /// Working directory for log retrieval (holds the compose file).
    pub data_dir: PathBuf,
}

impl StackDescriptor {
    pub fn new(
        display_name: impl Into<String>,
        project: impl Into<String>,
        control_script: impl Into<PathBuf>,
        data_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            project: project.into(),
            control_script: control_script.into(),
            data_dir: data_dir.into(),
        }
    }
}

/// An auto-detected vendor CLI tool, located by trying candidate binary
/// names in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliToolDescriptor {
    /// Human-facing name (e.g. "StoreCLI").
    pub display_name: String,
    /// Candidate binary names, earliest wins. Order is used to prefer a
    /// 64-bit binary over a 32-bit alias, or a renamed binary over its
    /// legacy name.
    pub candidates: Vec<String>,
    /// Guidance shown when no candidate is installed.
    pub install_hint: String,
}

impl CliToolDescriptor {
    pub fn new(
        display_name: impl Into<String>,
        candidates: impl IntoIterator<Item = impl Into<String>>,
        install_hint: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            candidates: candidates.into_iter().map(Into::into).collect(),
            install_hint: install_hint.into(),
        }
    }
}
