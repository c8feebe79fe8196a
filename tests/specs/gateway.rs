// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end checks of the execution pipeline with real child processes.

use std::time::Duration;

use opsgate_core::CommandSpec;
use opsgate_gateway::{
    environ, locate::locate, CommandRunner, ExecError, ExecOptions, ProcessRunner,
};

use crate::prelude::ScriptHost;

#[test]
fn resolved_environment_pins_locale_and_leads_with_sbin() {
    let env = environ::resolve().unwrap();
    assert_eq!(env.get("LC_ALL").map(String::as_str), Some("C"));
    assert_eq!(env.get("LANG").map(String::as_str), Some("C"));
    let path = env.get("PATH").unwrap();
    assert!(path.starts_with("/usr/local/sbin:"));
}

#[test]
fn locate_probes_candidates_in_order_on_the_given_path() {
    let host = ScriptHost::new();
    host.install("tool-b", "exit 0\n");
    let found = locate(&["tool-a", "tool-b"], &host.env()).unwrap();
    assert_eq!(found, host.bin().join("tool-b"));

    assert!(locate(&["tool-a"], &host.env()).is_none());
}

#[tokio::test]
async fn tolerant_runs_capture_both_streams_and_the_exit_code() {
    let host = ScriptHost::new();
    let tool = host.install("chatty", "echo out\necho err >&2\nexit 3\n");

    let result = ProcessRunner
        .run(
            CommandSpec::new(tool),
            &host.env(),
            ExecOptions::tolerant(Duration::from_secs(5)),
        )
        .await
        .unwrap();
    assert_eq!(result.exit_code(), 3);
    assert_eq!(result.stdout(), "out\n");
    assert_eq!(result.stderr(), "err\n");
    assert!(!result.success());
}

#[tokio::test]
async fn strict_runs_turn_nonzero_exits_into_errors() {
    let host = ScriptHost::new();
    let tool = host.install("failing", "echo broken >&2\nexit 2\n");

    let err = ProcessRunner
        .run(
            CommandSpec::new(tool),
            &host.env(),
            ExecOptions::strict(Duration::from_secs(5)),
        )
        .await
        .unwrap_err();
    match err {
        ExecError::CommandFailed { code, stderr } => {
            assert_eq!(code, 2);
            assert_eq!(stderr, "broken");
        }
        other => panic!("expected CommandFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn children_run_under_the_resolved_environment_only() {
    let host = ScriptHost::new();
    let tool = host.install("show-env", "echo \"lc=$LC_ALL home=$HOME\"\n");

    let result = ProcessRunner
        .run(
            CommandSpec::new(tool),
            &host.env(),
            ExecOptions::tolerant(Duration::from_secs(5)),
        )
        .await
        .unwrap();
    assert_eq!(result.stdout().trim(), "lc=C home=");
}

#[tokio::test]
async fn deadline_overruns_are_reported_as_timeouts() {
    let host = ScriptHost::new();
    let tool = host.install("sleeper", "sleep 5\n");

    let err = ProcessRunner
        .run(
            CommandSpec::new(tool),
            &host.env(),
            ExecOptions::tolerant(Duration::from_millis(100)),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ExecError::CommandTimedOut { .. }));
}
