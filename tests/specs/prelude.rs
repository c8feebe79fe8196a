// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.
//!
//! A [`ScriptHost`] is a temporary directory posing as the host system:
//! shell scripts stand in for the external binaries, and an environment
//! map points PATH at them.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use opsgate_gateway::EnvMap;
use tempfile::TempDir;

pub struct ScriptHost {
    tmp: TempDir,
    bin: PathBuf,
}

impl ScriptHost {
    pub fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        let bin = tmp.path().join("bin");
        fs::create_dir_all(&bin).unwrap();
        Self { tmp, bin }
    }

    /// Install an executable shell script under the host's bin directory.
    pub fn install(&self, name: &str, body: &str) -> PathBuf {
        let path = self.bin.join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// A scratch directory outside the bin dir.
    pub fn dir(&self, name: &str) -> PathBuf {
        let path = self.tmp.path().join(name);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// A scratch file path outside the bin dir (not created).
    pub fn file(&self, name: &str) -> PathBuf {
        self.tmp.path().join(name)
    }

    pub fn bin(&self) -> &Path {
        &self.bin
    }

    /// Child environment whose PATH leads with the host's bin directory.
    pub fn env(&self) -> EnvMap {
        let mut env = EnvMap::new();
        env.insert(
            "PATH".to_string(),
            format!("{}:/usr/bin:/bin", self.bin.display()),
        );
        env.insert("LC_ALL".to_string(), "C".to_string());
        env.insert("LANG".to_string(), "C".to_string());
        env
    }
}
