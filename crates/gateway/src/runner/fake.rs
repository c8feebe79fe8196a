// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake command runner for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use opsgate_core::{CommandSpec, ExecutionResult};
use parking_lot::Mutex;

use super::{finish, CommandRunner, ExecError, ExecMode, ExecOptions};
use crate::environ::EnvMap;

/// Recorded invocation.
#[derive(Debug, Clone)]
pub struct RunCall {
    pub spec: CommandSpec,
    pub env: EnvMap,
    pub mode: ExecMode,
    pub cwd: Option<PathBuf>,
}

/// Canned outcome for the next invocation.
#[derive(Debug, Clone)]
pub enum FakeResponse {
    Output {
        exit_code: i32,
        stdout: String,
        stderr: String,
    },
    NotFound,
    TimedOut,
}

impl FakeResponse {
    pub fn ok(stdout: impl Into<String>) -> Self {
        FakeResponse::Output {
            exit_code: 0,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failed(exit_code: i32, stderr: impl Into<String>) -> Self {
        FakeResponse::Output {
            exit_code,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

struct FakeRunnerState {
    calls: Vec<RunCall>,
    responses: VecDeque<FakeResponse>,
}

/// Fake command runner for testing.
///
/// Responses are consumed in FIFO order; when the queue is empty the
/// runner answers with a successful empty invocation. Strict/tolerant
/// handling goes through the same [`finish`] path as the real runner.
#[derive(Clone)]
pub struct FakeRunner {
    inner: Arc<Mutex<FakeRunnerState>>,
}

impl Default for FakeRunner {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeRunnerState {
                calls: Vec::new(),
                responses: VecDeque::new(),
            })),
        }
    }
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next invocation.
    pub fn push_response(&self, response: FakeResponse) {
        self.inner.lock().responses.push_back(response);
    }

    /// Get all recorded calls.
    pub fn calls(&self) -> Vec<RunCall> {
        self.inner.lock().calls.clone()
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(
        &self,
        spec: CommandSpec,
        env: &EnvMap,
        opts: ExecOptions,
    ) -> Result<ExecutionResult, ExecError> {
        let response = {
            let mut inner = self.inner.lock();
            inner.calls.push(RunCall {
                spec: spec.clone(),
                env: env.clone(),
                mode: opts.mode,
                cwd: opts.cwd.clone(),
            });
            inner.responses.pop_front()
        };

        match response.unwrap_or_else(|| FakeResponse::ok("")) {
            FakeResponse::Output {
                exit_code,
                stdout,
                stderr,
            } => finish(spec, exit_code, stdout, stderr, opts.mode),
            FakeResponse::NotFound => Err(ExecError::ExecutableNotFound(
                spec.program().display().to_string(),
            )),
            FakeResponse::TimedOut => Err(ExecError::CommandTimedOut {
                timeout: opts.timeout,
            }),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
