// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parsers that turn captured CLI output into normalized status signals.
//!
//! The gateway depends on the observed textual formats of the external
//! tools: tab-separated `name\tstatus` rows for the compose listing, and
//! free-text version/summary output for the RAID tool. Both parsers are
//! total — any input shape yields a well-formed signal.

use std::path::PathBuf;

use opsgate_core::{ExecutionResult, StackStatus, ToolStatus};

use crate::runner::ExecError;

/// Fixed status text reported when the orchestration CLI is absent.
pub const DOCKER_MISSING: &str = "docker-not-found";

/// Interpret a `docker compose ls` listing for one stack.
///
/// Rows are `name<TAB>status`. The row whose trimmed name equals
/// `project` exactly decides the signal: `running` iff the status text
/// contains "running" case-insensitively, with `unknown` substituted for
/// an empty status field. No matching row means the stack is not
/// installed; a failed listing with no match reports `error` instead.
pub fn stack_status(project: &str, result: &ExecutionResult) -> StackStatus {
    let mut installed = false;
    let mut running = false;
    let mut status_text = "not-installed".to_string();

    for line in result.stdout().lines() {
        if line.is_empty() {
            continue;
        }
        let (name, status) = line.split_once('\t').unwrap_or((line, ""));
        if name.trim() == project {
            let status = status.trim();
            status_text = if status.is_empty() { "unknown" } else { status }.to_string();
            running = status_text.to_ascii_lowercase().contains("running");
            installed = true;
            break;
        }
    }

    if !result.success() && !installed {
        status_text = "error".to_string();
    }

    StackStatus {
        installed,
        running,
        status_text,
    }
}

/// Signal for a host where the orchestration CLI is not installed.
/// Returned without attempting any parsing.
pub fn stack_status_missing_docker() -> StackStatus {
    StackStatus {
        installed: false,
        running: false,
        status_text: DOCKER_MISSING.to_string(),
    }
}

/// Fold version and summary query outcomes into one tool signal.
///
/// Either query may have failed (non-zero exit folded into the tolerant
/// result, or a hard execution error); every failure contributes its text
/// to a single newline-joined `error` field, empty parts skipped. Summary
/// lines whose first word starts with "controller" or "ctl"
/// (case-insensitively) are extracted verbatim as controller hints.
pub fn tool_status(
    binary: PathBuf,
    version: Result<ExecutionResult, ExecError>,
    summary: Result<ExecutionResult, ExecError>,
) -> ToolStatus {
    let mut errors: Vec<String> = Vec::new();

    let version_text = match version {
        Ok(result) if result.success() => {
            let out = result.stdout().trim();
            // Some vendor builds print the version banner on stderr
            if out.is_empty() {
                result.stderr().trim().to_string()
            } else {
                out.to_string()
            }
        }
        Ok(result) => {
            errors.push(result.failure_text().to_string());
            String::new()
        }
        Err(err) => {
            errors.push(err.to_string());
            String::new()
        }
    };

    let summary_text = match summary {
        Ok(result) if result.success() => result.stdout().trim().to_string(),
        Ok(result) => {
            errors.push(result.failure_text().to_string());
            String::new()
        }
        Err(err) => {
            errors.push(err.to_string());
            String::new()
        }
    };

    let controller_hints = controller_hints(&summary_text);
    errors.retain(|e| !e.is_empty());

    ToolStatus {
        installed: true,
        binary: Some(binary),
        version: version_text,
        summary: summary_text,
        controller_hints,
        error: errors.join("\n"),
    }
}

/// Signal for a host where no candidate binary is installed. The install
/// hint becomes the error text; no query is ever attempted.
pub fn tool_status_missing(install_hint: &str) -> ToolStatus {
    ToolStatus {
        installed: false,
        binary: None,
        version: String::new(),
        summary: String::new(),
        controller_hints: Vec::new(),
        error: install_hint.to_string(),
    }
}

fn controller_hints(summary: &str) -> Vec<String> {
    summary
        .lines()
        .map(str::trim)
        .filter(|line| {
            let lower = line.to_ascii_lowercase();
            lower.starts_with("controller") || lower.starts_with("ctl")
        })
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "interpret_tests.rs"]
mod tests;
