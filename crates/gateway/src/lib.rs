// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! opsgate-gateway: the privileged command-execution gateway.
//!
//! Pipeline, leaf-first:
//!
//! 1. [`environ`] resolves the controlled child environment
//! 2. [`locate`] finds the first installed candidate binary on that PATH
//! 3. [`sanitize`] validates caller-supplied parameters against closed,
//!    allow-list grammars — the sole path from untrusted input to an argv
//! 4. [`runner`] executes the assembled argument vector directly (no
//!    shell), with capture, deadline, and strict/tolerant exit handling
//! 5. [`interpret`] parses captured output into normalized status signals
//!
//! A flaw in 3 or 4 is a command-injection or privilege-escalation bug;
//! everything else in the workspace composes these pieces.

pub mod environ;
pub mod interpret;
pub mod locate;
pub mod runner;
pub mod sanitize;

pub use environ::EnvMap;
pub use runner::{
    CommandRunner, ExecError, ExecMode, ExecOptions, ProcessRunner, TracedRunner,
    LIFECYCLE_TIMEOUT, LOG_TIMEOUT, QUERY_TIMEOUT, STATUS_TIMEOUT,
};
pub use sanitize::{ControllerTarget, SanitizeError};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use runner::{FakeResponse, FakeRunner, RunCall};
