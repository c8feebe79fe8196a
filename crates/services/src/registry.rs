// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Convention-based descriptors for the built-in stacks.
//!
//! Every managed stack follows the same host layout: one control script
//! under the script root and one data directory (holding the compose
//! file) under the data root, both named after the stack identifier.

use std::path::PathBuf;

use opsgate_core::StackDescriptor;

/// Stack identifiers shipped with the console.
pub const KNOWN_STACKS: &[&str] = &["certbot", "drone", "gitea", "immich"];

/// Default root for stack control scripts.
const DEFAULT_SCRIPT_ROOT: &str = "/usr/share/opsgate/mkconf";

/// Default root for per-stack data directories.
const DEFAULT_DATA_ROOT: &str = "/srv/dev-disk-by-label-data";

/// Builds [`StackDescriptor`]s from the host's conventions.
#[derive(Debug, Clone)]
pub struct StackRegistry {
    script_root: PathBuf,
    data_root: PathBuf,
}

impl Default for StackRegistry {
    fn default() -> Self {
        Self {
            script_root: PathBuf::from(DEFAULT_SCRIPT_ROOT),
            data_root: PathBuf::from(DEFAULT_DATA_ROOT),
        }
    }
}

impl StackRegistry {
    pub fn new(script_root: impl Into<PathBuf>, data_root: impl Into<PathBuf>) -> Self {
        Self {
            script_root: script_root.into(),
            data_root: data_root.into(),
        }
    }

    /// Descriptor for a stack identifier under this registry's roots.
    pub fn descriptor(&self, stack: &str) -> StackDescriptor {
        StackDescriptor::new(
            display_name(stack),
            stack,
            self.script_root.join(stack),
            self.data_root.join(stack),
        )
    }

    /// Descriptors for all built-in stacks.
    pub fn known(&self) -> Vec<StackDescriptor> {
        KNOWN_STACKS.iter().map(|s| self.descriptor(s)).collect()
    }
}

fn display_name(stack: &str) -> String {
    let mut chars = stack.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
