// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! opsgate-core: domain types for the privileged command-execution gateway

pub mod command;
pub mod descriptor;
pub mod result;
pub mod status;

pub use command::CommandSpec;
pub use descriptor::{CliToolDescriptor, StackDescriptor};
pub use result::ExecutionResult;
pub use status::{StackStatus, ToolStatus};
