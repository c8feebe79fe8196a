// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Captured outcome of a single command execution.

use serde::Serialize;

use crate::command::CommandSpec;

/// Everything captured from one child-process invocation.
///
/// Created once per invocation and read-only afterwards; never cached or
/// persisted, so every status query reflects the live external state.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExecutionResult {
    command: CommandSpec,
    exit_code: i32,
    stdout: String,
    stderr: String,
}

impl ExecutionResult {
    pub fn new(
        command: CommandSpec,
        exit_code: i32,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self {
            command,
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn command(&self) -> &CommandSpec {
        &self.command
    }

    /// Exit code of the child. `-1` when the child was terminated by a
    /// signal and no code was reported.
    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// The most useful text to report for a failed invocation: trimmed
    /// stderr, falling back to trimmed stdout when stderr is empty.
    pub fn failure_text(&self) -> &str {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            self.stdout.trim()
        } else {
            stderr
        }
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
