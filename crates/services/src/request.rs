// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed boundary for loosely-typed RPC parameters.
//!
//! The host framework delivers operation parameters as JSON maps. They
//! are mapped into typed request structs here, before anything reaches
//! the gateway — the gateway's internal contracts stay fully typed.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ServiceError;

/// Parameters for a validated read-only tool query.
///
/// `controller` defaults to `"all"` when the parameter is absent; an
/// explicitly empty selector is still rejected by the sanitizer. The
/// argument values stay loosely typed here on purpose: the sanitizer is
/// the sole authority on which values are acceptable.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ShowCommandRequest {
    #[serde(default = "default_controller")]
    pub controller: String,
    #[serde(default)]
    pub arguments: Vec<Value>,
}

fn default_controller() -> String {
    "all".to_string()
}

impl ShowCommandRequest {
    /// Decode a loose parameter map into a typed request.
    pub fn from_params(params: Value) -> Result<Self, ServiceError> {
        serde_json::from_value(params).map_err(|e| ServiceError::BadRequest(e.to_string()))
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
