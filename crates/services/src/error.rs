// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors surfaced by the service façades.

use opsgate_gateway::{ExecError, SanitizeError};
use thiserror::Error;

/// Errors from façade operations.
///
/// Validation failures reject before any process is spawned. Absent
/// tooling becomes `ToolUnavailable` only for operations the caller
/// explicitly requested an action from; status queries report absence as
/// a normal, displayable signal instead.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{tool} is not available on this system")]
    ToolUnavailable { tool: String },

    #[error("invalid request parameters: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Sanitize(#[from] SanitizeError),

    #[error(transparent)]
    Exec(#[from] ExecError),
}
