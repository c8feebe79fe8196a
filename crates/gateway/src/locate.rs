// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Candidate binary discovery on the resolved search path.

use std::path::{Path, PathBuf};

use crate::environ::EnvMap;

/// Find the first candidate resolvable on the environment's PATH.
///
/// Candidates are tried in order, so earlier names take priority. A
/// candidate containing a path separator is checked directly instead of
/// being searched. Returns `None` when nothing resolves — absence of a
/// vendor tool is an expected, reportable condition, not an error.
pub fn locate<S: AsRef<str>>(candidates: &[S], env: &EnvMap) -> Option<PathBuf> {
    let path = env.get("PATH")?;
    for candidate in candidates {
        let candidate = candidate.as_ref();
        if candidate.is_empty() {
            continue;
        }
        if candidate.contains('/') {
            let full = PathBuf::from(candidate);
            if is_executable(&full) {
                return Some(full);
            }
            continue;
        }
        for dir in path.split(':').filter(|d| !d.is_empty()) {
            let full = Path::new(dir).join(candidate);
            if is_executable(&full) {
                return Some(full);
            }
        }
    }
    None
}

/// Regular file with at least one execute bit set.
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    match path.metadata() {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(test)]
#[path = "locate_tests.rs"]
mod tests;
