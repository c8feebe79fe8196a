// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Façade for the vendor RAID-management CLI.
//!
//! The tool ships under several names depending on the package
//! generation; the façade probes the candidates in order and only ever
//! runs validated read-only `show` queries against the located binary.

use opsgate_core::{CliToolDescriptor, CommandSpec, ToolStatus};
use opsgate_gateway::{
    environ, interpret, locate::locate, sanitize, CommandRunner, EnvMap, ExecError, ExecOptions,
    QUERY_TIMEOUT,
};
use serde_json::Value;

use crate::error::ServiceError;
use crate::reply::{LogsReply, QueryReply};
use crate::request::ShowCommandRequest;

/// Binary names probed in order, newest branding first.
const RAIDCLI_CANDIDATES: &[&str] = &["storecli", "storecli64", "storcli", "storcli64"];

const INSTALL_HINT: &str = "No storecli/storcli binary found. Install Broadcom's StoreCLI \
     package and ensure it is available in the system PATH.";

/// Façade for the RAID CLI. Stateless: every call re-locates the binary
/// so package installs and removals take effect immediately.
#[derive(Clone)]
pub struct RaidCliService<R> {
    descriptor: CliToolDescriptor,
    runner: R,
    env_override: Option<EnvMap>,
}

impl<R: CommandRunner> RaidCliService<R> {
    pub fn new(runner: R) -> Self {
        let descriptor =
            CliToolDescriptor::new("StoreCLI", RAIDCLI_CANDIDATES.iter().copied(), INSTALL_HINT);
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

    pub fn descriptor(&self) -> &CliToolDescriptor {
        &self.descriptor
    }

    fn environment(&self) -> Result<EnvMap, ExecError> {
        match &self.env_override {
            Some(env) => Ok(env.clone()),
            None => environ::resolve(),
        }
    }

    /// Availability, version and controller summary of the tool.
    ///
    /// An absent binary is a displayable state: the reply carries the
    /// install hint and no process is spawned. Individual query failures
    /// fold into the signal's error field rather than aborting.
    pub async fn status(&self) -> Result<ToolStatus, ServiceError> {
        let env = self.environment()?;
        let Some(binary) = locate(&self.descriptor.candidates, &env) else {
            return Ok(interpret::tool_status_missing(&self.descriptor.install_hint));
        };

        let version = self
            .runner
            .run(
                CommandSpec::new(&binary).arg("-v"),
                &env,
                ExecOptions::tolerant(QUERY_TIMEOUT),
            )
            .await;
        let summary = self
            .runner
            .run(
                CommandSpec::new(&binary).args(["show", "summary"]),
                &env,
                ExecOptions::tolerant(QUERY_TIMEOUT),
            )
            .await;

        Ok(interpret::tool_status(binary, version, summary))
    }

    /// Run a caller-supplied read-only `show` query.
    pub async fn run_show_command(&self, params: Value) -> Result<QueryReply, ServiceError> {
        let request = ShowCommandRequest::from_params(params)?;
        self.execute_show(&request.controller, &request.arguments)
            .await
    }

    /// Detailed view of one controller. An empty argument list defaults
    /// to `show all`.
    pub async fn controller_details(&self, params: Value) -> Result<QueryReply, ServiceError> {
        let mut request = ShowCommandRequest::from_params(params)?;
        if request.arguments.is_empty() {
            request.arguments = vec![Value::from("show"), Value::from("all")];
        }
        self.execute_show(&request.controller, &request.arguments)
            .await
    }

    /// Recent controller event log, as a log reply. Failures fold into
    /// the reply's error field so the UI never sees a transport error for
    /// an absent or unhealthy tool.
    pub async fn logs(&self) -> Result<LogsReply, ServiceError> {
        let arguments = [Value::from("show"), Value::from("events")];
        match self.execute_show("all", &arguments).await {
            Ok(reply) => {
                let error = if reply.exit_code == 0 {
                    String::new()
                } else {
                    reply.stderr
                };
                Ok(LogsReply::new(reply.stdout, error))
            }
            Err(err) => Ok(LogsReply::new("", err.to_string())),
        }
    }

    /// Sanitize, locate, assemble and run one read-only query.
    ///
    /// Validation happens first: a rejected selector or argument list
    /// returns before the environment is resolved or any process starts.
    async fn execute_show(
        &self,
        controller: &str,
        arguments: &[Value],
    ) -> Result<QueryReply, ServiceError> {
        let target = sanitize::controller_target(controller)?;
        let arguments = sanitize::show_arguments(arguments)?;

        let env = self.environment()?;
        let Some(binary) = locate(&self.descriptor.candidates, &env) else {
            return Err(ServiceError::ToolUnavailable {
                tool: self.descriptor.display_name.clone(),
            });
        };

        let spec = CommandSpec::new(binary)
            .arg(target.as_token())
            .args(arguments);
        tracing::debug!(command = %spec, "running raid query");
        match self
            .runner
            .run(spec, &env, ExecOptions::tolerant(QUERY_TIMEOUT))
            .await
        {
            Ok(result) => Ok(QueryReply::from(result)),
            Err(ExecError::ExecutableNotFound(_)) => Err(ServiceError::ToolUnavailable {
                tool: self.descriptor.display_name.clone(),
            }),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
#[path = "raidcli_tests.rs"]
mod tests;
