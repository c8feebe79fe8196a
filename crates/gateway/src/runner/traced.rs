// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced runner wrapper for consistent observability

use async_trait::async_trait;
use opsgate_core::{CommandSpec, ExecutionResult};
use tracing::Instrument;

use super::{CommandRunner, ExecError, ExecOptions};
use crate::environ::EnvMap;

/// Wrapper that adds tracing to any CommandRunner
#[derive(Clone)]
pub struct TracedRunner<R> {
    inner: R,
}

impl<R> TracedRunner<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<R: CommandRunner> CommandRunner for TracedRunner<R> {
    async fn run(
        &self,
        spec: CommandSpec,
        env: &EnvMap,
        opts: ExecOptions,
    ) -> Result<ExecutionResult, ExecError> {
        let span = tracing::info_span!("gateway.run", program = %spec.program().display());
        async {
            tracing::debug!(command = %spec, mode = ?opts.mode, "starting");
            let start = std::time::Instant::now();
            let result = self.inner.run(spec, env, opts).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(r) => tracing::info!(exit_code = r.exit_code(), elapsed_ms, "command finished"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "command failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
