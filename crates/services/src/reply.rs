// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Serializable reply payloads returned to the host framework.

use opsgate_core::ExecutionResult;
use serde::Serialize;

/// Fixed acknowledgement for fire-and-forget lifecycle actions.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Ack {
    pub status: String,
}

impl Ack {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

/// Captured log output. `error` is empty unless retrieval reported a
/// problem — the UI always gets a well-formed object, never a transport
/// error, for the "tool absent" case.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LogsReply {
    pub logs: String,
    pub error: String,
}

impl LogsReply {
    pub fn new(logs: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            logs: logs.into(),
            error: error.into(),
        }
    }
}

/// Raw result of a validated read-only query: the shell-quoted command
/// echo (display-only) plus the captured streams and exit code.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct QueryReply {
    pub command: String,
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl From<ExecutionResult> for QueryReply {
    fn from(result: ExecutionResult) -> Self {
        Self {
            command: result.command().display_quoted(),
            stdout: result.stdout().to_string(),
            stderr: result.stderr().to_string(),
            exit_code: result.exit_code(),
        }
    }
}
