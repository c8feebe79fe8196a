// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end stack façade behavior against a scripted `docker`.

use std::fs;

use opsgate_core::StackDescriptor;
use opsgate_gateway::ProcessRunner;
use opsgate_services::{Ack, LogsReply, ServiceError, StackService};

use crate::prelude::ScriptHost;

const DOCKER_SCRIPT: &str = r#"if [ "$1" = "compose" ] && [ "$2" = "ls" ]; then
    printf 'certbot\trunning(2)\n'
    printf 'gitea\texited(1)\n'
    exit 0
fi
if [ "$1" = "compose" ] && [ "$2" = "logs" ]; then
    echo "cwd=$PWD tail=$3 service=$4"
    exit 0
fi
exit 64
"#;

fn service(host: &ScriptHost, project: &str) -> StackService<ProcessRunner> {
    let script = host.install(&format!("mkconf-{project}"), "printf '%s' \"$1\" > \"$0.marker\"\n");
    let descriptor = StackDescriptor::new(project, project, script, host.dir("data"));
    StackService::new(descriptor, ProcessRunner).with_environment(host.env())
}

#[tokio::test]
async fn status_reflects_the_live_compose_listing() {
    let host = ScriptHost::new();
    host.install("docker", DOCKER_SCRIPT);

    let status = service(&host, "certbot").status().await.unwrap();
    assert!(status.installed);
    assert!(status.running);
    assert_eq!(status.status_text, "running(2)");

    let status = service(&host, "gitea").status().await.unwrap();
    assert!(status.installed);
    assert!(!status.running);

    let status = service(&host, "immich").status().await.unwrap();
    assert!(!status.installed);
    assert_eq!(status.status_text, "not-installed");
}

#[tokio::test]
async fn status_without_docker_is_a_displayable_signal() {
    let host = ScriptHost::new();

    let status = service(&host, "certbot").status().await.unwrap();
    assert!(!status.installed);
    assert_eq!(status.status_text, "docker-not-found");
}

#[tokio::test]
async fn lifecycle_actions_run_the_control_script() {
    let host = ScriptHost::new();
    host.install("docker", DOCKER_SCRIPT);
    let svc = service(&host, "certbot");

    let ack = svc.install().await.unwrap();
    assert_eq!(ack, Ack::new("installed"));
    let marker = host.bin().join("mkconf-certbot.marker");
    assert_eq!(fs::read_to_string(marker).unwrap(), "install");
}

#[tokio::test]
async fn lifecycle_without_a_control_script_is_tool_unavailable() {
    let host = ScriptHost::new();
    host.install("docker", DOCKER_SCRIPT);
    let descriptor = StackDescriptor::new(
        "certbot",
        "certbot",
        host.file("missing-script"),
        host.dir("data"),
    );
    let svc = StackService::new(descriptor, ProcessRunner).with_environment(host.env());

    let err = svc.restart().await.unwrap_err();
    assert!(matches!(err, ServiceError::ToolUnavailable { .. }));
}

#[tokio::test]
async fn logs_run_from_the_stack_data_directory() {
    let host = ScriptHost::new();
    host.install("docker", DOCKER_SCRIPT);
    let svc = service(&host, "certbot");

    let reply = svc.logs(Some("web")).await.unwrap();
    let data = host.dir("data");
    assert_eq!(
        reply.logs.trim(),
        format!("cwd={} tail=--tail=100 service=web", data.display())
    );
    assert!(reply.error.is_empty());
}

#[tokio::test]
async fn logs_without_docker_fold_into_the_reply() {
    let host = ScriptHost::new();
    let reply = service(&host, "certbot").logs(None).await.unwrap();
    assert_eq!(reply, LogsReply::new("", "docker-not-found"));
}
