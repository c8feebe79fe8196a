// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Controlled process environment for privileged invocations.
//!
//! Children never inherit the ambient environment uncontrolled: the
//! resolver builds a fresh map with an administrator-shell PATH and a
//! pinned locale, and the executor applies it after `env_clear()`.

use std::collections::BTreeMap;
use std::path::Path;

use crate::runner::ExecError;

/// Environment variable name → value map passed to every child process.
pub type EnvMap = BTreeMap<String, String>;

/// Search-path directories an interactive administrator shell would have,
/// in precedence order. Sbin directories come first so vendor tooling
/// installed for root is found the same way it would be at a root prompt.
const ADMIN_PATH: &[&str] = &[
    "/usr/local/sbin",
    "/usr/local/bin",
    "/usr/sbin",
    "/usr/bin",
    "/sbin",
    "/bin",
];

/// Resolve the environment under which privileged commands run.
///
/// The PATH starts with [`ADMIN_PATH`] and appends any ambient PATH
/// entries not already present, so site-local tool directories still
/// resolve. `LC_ALL`/`LANG` are pinned to `C` so CLI output parses
/// deterministically.
///
/// Fails with [`ExecError::EnvironmentUnavailable`] when none of the
/// search-path directories exist on the host; an empty environment is
/// never substituted silently.
pub fn resolve() -> Result<EnvMap, ExecError> {
    let mut entries: Vec<String> = ADMIN_PATH.iter().map(|d| d.to_string()).collect();

    if let Some(ambient) = std::env::var_os("PATH") {
        for dir in std::env::split_paths(&ambient) {
            let dir = dir.display().to_string();
            if !dir.is_empty() && !entries.contains(&dir) {
                entries.push(dir);
            }
        }
    }

    if !entries.iter().any(|d| Path::new(d).is_dir()) {
        return Err(ExecError::EnvironmentUnavailable(
            "no search-path directory exists on this host".to_string(),
        ));
    }

    let mut env = EnvMap::new();
    env.insert("PATH".to_string(), entries.join(":"));
    env.insert("LC_ALL".to_string(), "C".to_string());
    env.insert("LANG".to_string(), "C".to_string());
    Ok(env)
}

#[cfg(test)]
#[path = "environ_tests.rs"]
mod tests;
