// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lifecycle façade for one compose-managed container stack.

use opsgate_core::{CommandSpec, ExecutionResult, StackDescriptor, StackStatus};
use opsgate_gateway::{
    environ, interpret, locate::locate, sanitize, CommandRunner, EnvMap, ExecError, ExecOptions,
    LIFECYCLE_TIMEOUT, LOG_TIMEOUT, STATUS_TIMEOUT,
};

use crate::error::ServiceError;
use crate::reply::{Ack, LogsReply};

/// Candidate names for the container-orchestration CLI.
const DOCKER_CANDIDATES: &[&str] = &["docker"];

/// How many trailing log lines to retrieve.
const LOG_TAIL: u32 = 100;

/// Façade for one managed stack.
///
/// Owns the stack's immutable descriptor; every operation resolves the
/// environment and runs its own child process, so concurrent calls need
/// no coordination and a status query always reflects the live host.
#[derive(Clone)]
pub struct StackService<R> {
    descriptor: StackDescriptor,
    runner: R,
    env_override: Option<EnvMap>,
}

impl<R: CommandRunner> StackService<R> {
    pub fn new(descriptor: StackDescriptor, runner: R) -> Self {
        Self {
            descriptor,
            runner,
            env_override: None,
        }
    }

    /// Pin the child environment instead of resolving it per call.
    pub fn with_environment(mut self, env: EnvMap) -> Self {
        self.env_override = Some(env);
        self
    }

    pub fn descriptor(&self) -> &StackDescriptor {
        &self.descriptor
    }

    fn environment(&self) -> Result<EnvMap, ExecError> {
        match &self.env_override {
            Some(env) => Ok(env.clone()),
            None => environ::resolve(),
        }
    }

    /// Running status of the stack, derived from the compose listing.
    ///
    /// An absent orchestration CLI is a displayable state, not an error:
    /// the signal short-circuits to `docker-not-found` without parsing.
    pub async fn status(&self) -> Result<StackStatus, ServiceError> {
        let env = self.environment()?;
        let Some(docker) = locate(DOCKER_CANDIDATES, &env) else {
            return Ok(interpret::stack_status_missing_docker());
        };

        let spec = CommandSpec::new(docker).args([
            "compose",
            "ls",
            "--all",
            "--format",
            "{{.Name}}\t{{.Status}}",
        ]);
        match self
            .runner
            .run(spec, &env, ExecOptions::tolerant(STATUS_TIMEOUT))
            .await
        {
            Ok(result) => Ok(interpret::stack_status(&self.descriptor.project, &result)),
            // The binary disappeared between location and execution
            Err(ExecError::ExecutableNotFound(_)) => Ok(interpret::stack_status_missing_docker()),
            Err(err) => Err(err.into()),
        }
    }

    /// Install and start the stack.
    pub async fn install(&self) -> Result<Ack, ServiceError> {
        self.lifecycle("install", "installed").await
    }

    /// Remove the stack.
    pub async fn remove(&self) -> Result<Ack, ServiceError> {
        self.lifecycle("remove", "removed").await
    }

    /// Restart the stack.
    pub async fn restart(&self) -> Result<Ack, ServiceError> {
        self.lifecycle("restart", "restarted").await
    }

    /// Run the control script with a literal action keyword, strict mode.
    ///
    /// Fire-and-forget: the acknowledgement reports that the action was
    /// dispatched, not that the stack has converged.
    async fn lifecycle(&self, action: &str, ack: &str) -> Result<Ack, ServiceError> {
        let env = self.environment()?;
        if !self.descriptor.control_script.is_file() {
            return Err(ServiceError::ToolUnavailable {
                tool: format!("{} control script", self.descriptor.display_name),
            });
        }

        let spec = CommandSpec::new("/bin/bash")
            .arg(self.descriptor.control_script.display().to_string())
            .arg(action);
        tracing::info!(stack = %self.descriptor.project, action, "running lifecycle action");
        self.runner
            .run(spec, &env, ExecOptions::strict(LIFECYCLE_TIMEOUT))
            .await?;
        Ok(Ack::new(ack))
    }

    /// Recent logs for the stack, optionally narrowed to one sub-service.
    ///
    /// The sub-service name passes the same character allow-list as query
    /// arguments before it may appear on the command line.
    pub async fn logs(&self, service: Option<&str>) -> Result<LogsReply, ServiceError> {
        let env = self.environment()?;

        let service = match service.map(str::trim) {
            Some("") | None => None,
            Some(name) if sanitize::is_safe_token(name) => Some(name),
            Some(name) => {
                return Err(ServiceError::Sanitize(
                    opsgate_gateway::SanitizeError::InvalidArguments {
                        reason: format!("invalid characters in {name:?}"),
                    },
                ));
            }
        };

        let Some(docker) = locate(DOCKER_CANDIDATES, &env) else {
            return Ok(LogsReply::new("", interpret::DOCKER_MISSING));
        };

        let tail = format!("--tail={LOG_TAIL}");
        let mut spec = CommandSpec::new(docker).args(["compose", "logs", tail.as_str()]);
        if let Some(name) = service {
            spec = spec.arg(name);
        }

        let opts = ExecOptions::tolerant(LOG_TIMEOUT).cwd(&self.descriptor.data_dir);
        match self.runner.run(spec, &env, opts).await {
            Ok(result) => Ok(logs_reply(result)),
            Err(ExecError::ExecutableNotFound(_)) => {
                Ok(LogsReply::new("", interpret::DOCKER_MISSING))
            }
            Err(err) => Err(err.into()),
        }
    }
}

fn logs_reply(result: ExecutionResult) -> LogsReply {
    let error = if result.success() {
        String::new()
    } else {
        result.stderr().to_string()
    };
    LogsReply::new(result.stdout(), error)
}

#[cfg(test)]
#[path = "stack_tests.rs"]
mod tests;
