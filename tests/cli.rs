//
//  clumio-sdk
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use std::path::Path;

use assert_cmd::Command;
use mockito::Server;
use predicates::prelude::*;
use tempfile::TempDir;

/// `clumio` with an isolated config file and no ambient Clumio settings.
fn clumio(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("clumio").unwrap();
    cmd.env("CLUMIO_CONFIG", config_dir.join("config.toml"))
        .env_remove("CLUMIO_API_TOKEN")
        .env_remove("CLUMIO_API_BASE_PATH")
        .env_remove("CLUMIO_ORGANIZATIONAL_UNIT_CONTEXT")
        .env_remove("CLUMIO_RAW_RESPONSE")
        .env_remove("CLUMIO_DEBUG");
    cmd
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    clumio(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_schema_shows_wire_keys() {
    let dir = TempDir::new().unwrap();
    clumio(dir.path())
        .args(["schema", "reportdownload"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ReportDownload"))
        .stdout(predicate::str::contains("report_type"))
        .stdout(predicate::str::contains("download_link"));
}

#[test]
fn test_schema_unknown_model() {
    let dir = TempDir::new().unwrap();
    clumio(dir.path())
        .args(["schema", "Repository"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown model 'Repository'"));
}

#[test]
fn test_config_round_trip() {
    let dir = TempDir::new().unwrap();

    clumio(dir.path())
        .args(["config", "set", "region", "us-east-1"])
        .assert()
        .success();
    clumio(dir.path())
        .args(["config", "set", "header.X-Request-Source", "nightly"])
        .assert()
        .success();

    clumio(dir.path())
        .args(["config", "get", "base_path"])
        .assert()
        .success()
        .stdout("https://us-east-1.api.clumio.com\n");
    clumio(dir.path())
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("header.x-request-source=nightly"));

    let saved = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(saved.contains("us-east-1.api.clumio.com"));
    assert!(!saved.contains("token"));
}

#[test]
fn test_config_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    clumio(dir.path())
        .args(["config", "set", "editor", "vim"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: editor"));
}

#[test]
fn test_missing_token_exits_with_auth_code() {
    let dir = TempDir::new().unwrap();
    clumio(dir.path())
        .args(["--base-path", "http://127.0.0.1:1", "task", "view", "t-1"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("clumio auth login"));
}

#[test]
fn test_auth_status_reports_env_token() {
    let dir = TempDir::new().unwrap();
    clumio(dir.path())
        .env("CLUMIO_API_TOKEN", "abcd1234efgh")
        .args(["--json", "auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""authenticated": true"#))
        .stdout(predicate::str::contains(r#""source": "CLUMIO_API_TOKEN""#))
        .stdout(predicate::str::contains("abcd1234efgh").not());
}

#[test]
fn test_api_prints_json_body() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/tasks/t-1")
        .match_header("authorization", "Bearer secret")
        .match_header("accept", "application/api.clumio.tasks=v1+json")
        .with_status(200)
        .with_body(r#"{"id":"t-1","status":"completed"}"#)
        .create();

    clumio(dir.path())
        .env("CLUMIO_API_TOKEN", "secret")
        .args(["--base-path", &server.url(), "api", "/tasks/t-1"])
        .args(["-H", "accept: application/api.clumio.tasks=v1+json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""status": "completed""#));

    mock.assert();
}

#[test]
fn test_api_sends_fields_as_json() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/organizational-units")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "name": "finance",
            "users": ["u-1"]
        })))
        .with_status(202)
        .with_body(r#"{"id":"ou-1","task_id":"t-2"}"#)
        .create();

    clumio(dir.path())
        .env("CLUMIO_API_TOKEN", "secret")
        .args(["--base-path", &server.url(), "api", "-X", "post", "/organizational-units"])
        .args(["-F", "name=finance", "-F", r#"users=["u-1"]"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("t-2"));

    mock.assert();
}

#[test]
fn test_not_found_exit_code() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    server
        .mock("GET", "/tasks/missing")
        .with_status(404)
        .with_body(r#"{"errors":[{"error_code":404,"error_message":"Task not found."}]}"#)
        .create();

    clumio(dir.path())
        .env("CLUMIO_API_TOKEN", "secret")
        .args(["--base-path", &server.url(), "task", "view", "missing"])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("read_task failed"))
        .stderr(predicate::str::contains("Task not found."));
}

#[test]
fn test_raw_mode_prints_error_body() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    server
        .mock("GET", "/tasks/t-1")
        .with_status(503)
        .with_body("maintenance")
        .create();

    clumio(dir.path())
        .env("CLUMIO_API_TOKEN", "secret")
        .args(["--base-path", &server.url(), "--raw", "task", "view", "t-1"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("maintenance"))
        .stderr(predicate::str::contains("503"));
}

#[test]
fn test_task_list_json() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    server
        .mock("GET", "/tasks")
        .match_query(mockito::Matcher::UrlEncoded("limit".into(), "1".into()))
        .with_status(200)
        .with_body(
            serde_json::json!({
                "_embedded": {"items": [{"id": "t-1", "status": "queued"}]},
                "current_count": 1,
                "total_count": 1
            })
            .to_string(),
        )
        .create();

    clumio(dir.path())
        .env("CLUMIO_API_TOKEN", "secret")
        .args(["--base-path", &server.url(), "--json", "task", "list", "-L", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": "t-1""#));
}
