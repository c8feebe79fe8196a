// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command execution adapters.
//!
//! The [`CommandRunner`] trait is the seam between the façades and the
//! operating system: the real [`ProcessRunner`] spawns children via
//! [`tokio::process::Command`], [`TracedRunner`] adds span-scoped
//! observability, and the feature-gated [`FakeRunner`] records calls for
//! tests.

mod process;
mod traced;

pub use process::ProcessRunner;
pub use traced::TracedRunner;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeResponse, FakeRunner, RunCall};

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use opsgate_core::{CommandSpec, ExecutionResult};
use thiserror::Error;

use crate::environ::EnvMap;

/// Deadline for status listing queries.
pub const STATUS_TIMEOUT: Duration = Duration::from_secs(30);

/// Deadline for log retrieval.
pub const LOG_TIMEOUT: Duration = Duration::from_secs(30);

/// Deadline for validated read-only tool queries.
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(60);

/// Deadline for lifecycle actions (install/remove/restart).
/// Generous because install may pull container images.
pub const LIFECYCLE_TIMEOUT: Duration = Duration::from_secs(600);

/// Errors from command execution.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("host environment unavailable: {0}")]
    EnvironmentUnavailable(String),

    #[error("executable not found: {0}")]
    ExecutableNotFound(String),

    #[error("command failed with exit code {code}: {stderr}")]
    CommandFailed { code: i32, stderr: String },

    #[error("command timed out after {}s", .timeout.as_secs())]
    CommandTimedOut { timeout: Duration },

    #[error("spawn failed: {0}")]
    Spawn(#[from] std::io::Error),
}

/// How a non-zero exit is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecMode {
    /// Non-zero exit is a hard failure (`CommandFailed`). Used for
    /// lifecycle actions.
    Strict,
    /// Non-zero exit is captured in the result for the caller to
    /// interpret. Used for status and diagnostic queries.
    Tolerant,
}

/// Per-invocation execution options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOptions {
    pub mode: ExecMode,
    pub timeout: Duration,
    pub cwd: Option<PathBuf>,
}

impl ExecOptions {
    pub fn strict(timeout: Duration) -> Self {
        Self {
            mode: ExecMode::Strict,
            timeout,
            cwd: None,
        }
    }

    pub fn tolerant(timeout: Duration) -> Self {
        Self {
            mode: ExecMode::Tolerant,
            timeout,
            cwd: None,
        }
    }

    /// Set the working directory for the child process.
    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }
}

/// Adapter for executing an assembled argument vector as a child process.
#[async_trait]
pub trait CommandRunner: Clone + Send + Sync + 'static {
    /// Run `spec` under `env` with the given options.
    ///
    /// The argument vector is passed as discrete values — implementations
    /// must never join it into a shell-interpreted string, and must never
    /// widen privileges (no implicit shell, no sudo).
    async fn run(
        &self,
        spec: CommandSpec,
        env: &EnvMap,
        opts: ExecOptions,
    ) -> Result<ExecutionResult, ExecError>;
}

/// Apply strict/tolerant exit handling to a captured invocation.
/// Shared by the real and fake runners so both enforce the same contract.
pub(crate) fn finish(
    spec: CommandSpec,
    exit_code: i32,
    stdout: String,
    stderr: String,
    mode: ExecMode,
) -> Result<ExecutionResult, ExecError> {
    let result = ExecutionResult::new(spec, exit_code, stdout, stderr);
    if mode == ExecMode::Strict && !result.success() {
        return Err(ExecError::CommandFailed {
            code: result.exit_code(),
            stderr: result.failure_text().to_string(),
        });
    }
    Ok(result)
}
