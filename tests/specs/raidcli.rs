// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end RAID façade behavior against a scripted `storcli64`.

use opsgate_gateway::ProcessRunner;
use opsgate_services::{RaidCliService, ServiceError};
use serde_json::json;

use crate::prelude::ScriptHost;

const STORCLI_SCRIPT: &str = r#"if [ "$1" = "-v" ]; then
    echo "StorCLI64 007.1912.0000.0000"
    exit 0
fi
echo "args: $*"
"#;

fn service(host: &ScriptHost) -> RaidCliService<ProcessRunner> {
    RaidCliService::new(ProcessRunner).with_environment(host.env())
}

#[tokio::test]
async fn status_probes_version_and_summary() {
    let host = ScriptHost::new();
    host.install(
        "storcli64",
        r#"if [ "$1" = "-v" ]; then
    echo "StorCLI64 007.1912.0000.0000"
elif [ "$1" = "show" ] && [ "$2" = "summary" ]; then
    echo "System Overview :"
    echo "Controller = 0  Model = PERC H730P"
fi
exit 0
"#,
    );

    let status = service(&host).status().await.unwrap();
    assert!(status.installed);
    assert_eq!(status.binary, Some(host.bin().join("storcli64")));
    assert_eq!(status.version, "StorCLI64 007.1912.0000.0000");
    assert_eq!(status.controller_hints, ["Controller = 0  Model = PERC H730P"]);
    assert!(status.error.is_empty());
}

#[tokio::test]
async fn status_without_any_candidate_reports_the_install_hint() {
    let host = ScriptHost::new();
    let status = service(&host).status().await.unwrap();
    assert!(!status.installed);
    assert!(status.error.contains("StoreCLI"));
}

#[tokio::test]
async fn show_commands_reach_the_binary_with_a_built_argv() {
    let host = ScriptHost::new();
    host.install("storcli64", STORCLI_SCRIPT);

    let reply = service(&host)
        .run_show_command(json!({ "controller": "0", "arguments": ["show", "all"] }))
        .await
        .unwrap();
    assert_eq!(reply.exit_code, 0);
    assert_eq!(reply.stdout.trim(), "args: /c0 show all");
    assert!(reply.command.ends_with("storcli64 /c0 show all"));
}

#[tokio::test]
async fn injection_attempts_never_reach_the_binary() {
    let host = ScriptHost::new();
    host.install("storcli64", STORCLI_SCRIPT);
    let svc = service(&host);

    let err = svc
        .run_show_command(json!({ "arguments": ["show", "all && reboot"] }))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Sanitize(_)));

    let err = svc
        .run_show_command(json!({ "arguments": ["delete", "vd0"] }))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Sanitize(_)));
}

#[tokio::test]
async fn logs_read_the_event_log_across_all_controllers() {
    let host = ScriptHost::new();
    host.install("storcli64", STORCLI_SCRIPT);

    let reply = service(&host).logs().await.unwrap();
    assert_eq!(reply.logs.trim(), "args: /call show events");
    assert!(reply.error.is_empty());
}
