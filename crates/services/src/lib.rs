// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! opsgate-services: per-tool façades over the command-execution gateway.
//!
//! Each façade owns its static descriptor and composes the gateway
//! pipeline (resolve → locate → sanitize → run → interpret) into the
//! handful of operations the management console exposes. Façades carry no
//! state between calls; every status query reruns the pipeline against
//! the live host.

mod error;
pub mod raidcli;
pub mod registry;
pub mod reply;
pub mod request;
pub mod stack;

pub use error::ServiceError;
pub use raidcli::RaidCliService;
pub use registry::StackRegistry;
pub use reply::{Ack, LogsReply, QueryReply};
pub use request::ShowCommandRequest;
pub use stack::StackService;
