// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Real child-process runner.

use std::process::Stdio;

use async_trait::async_trait;
use opsgate_core::{CommandSpec, ExecutionResult};
use tokio::process::Command;

use super::{finish, CommandRunner, ExecError, ExecOptions};
use crate::environ::EnvMap;

/// Runs commands via [`tokio::process::Command`].
///
/// The child gets a cleared environment with only the resolved map
/// applied, a null stdin, and separate stdout/stderr capture. The
/// request blocks until the child terminates or the deadline elapses;
/// `kill_on_drop` ensures a timed-out or cancelled invocation does not
/// leave an orphaned child behind.
#[derive(Clone, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(
        &self,
        spec: CommandSpec,
        env: &EnvMap,
        opts: ExecOptions,
    ) -> Result<ExecutionResult, ExecError> {
        let mut cmd = Command::new(spec.program());
        cmd.args(spec.argv())
            .env_clear()
            .envs(env)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &opts.cwd {
            cmd.current_dir(dir);
        }

        tracing::debug!(command = %spec, cwd = ?opts.cwd, "executing");

        let output = match tokio::time::timeout(opts.timeout, cmd.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(ExecError::ExecutableNotFound(
                    spec.program().display().to_string(),
                ));
            }
            Ok(Err(err)) => return Err(ExecError::Spawn(err)),
            Err(_elapsed) => {
                tracing::warn!(command = %spec, timeout_s = opts.timeout.as_secs(), "killed after deadline");
                return Err(ExecError::CommandTimedOut {
                    timeout: opts.timeout,
                });
            }
        };

        let exit_code = output.status.code().unwrap_or(-1);
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        tracing::debug!(
            command = %spec,
            exit_code,
            stdout = stdout.trim(),
            stderr = stderr.trim(),
            "command finished"
        );

        finish(spec, exit_code, stdout, stderr, opts.mode)
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
