//! Integration tests for the `fsremote` CLI binary.
//!
//! Argument parsing, help output, and shell completions run without a
//! device; device-bound commands run against a wiremock facade.
#![allow(clippy::unwrap_used)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `fsremote` binary with env isolation.
///
/// Clears all `FSREMOTE_*` env vars and points config directories at
/// `home` so tests never touch the user's real configuration.
fn fsremote_cmd_in(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("fsremote");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("FSREMOTE_PROFILE")
        .env_remove("FSREMOTE_DEVICE")
        .env_remove("FSREMOTE_OUTPUT")
        .env_remove("FSREMOTE_TIMEOUT");
    cmd
}

fn fsremote_cmd() -> assert_cmd::Command {
    fsremote_cmd_in(Path::new("/tmp/fsremote-cli-test-nonexistent"))
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

/// Run the binary off the async runtime so the mock server keeps serving.
async fn run(args: Vec<String>) -> std::process::Output {
    tokio::task::spawn_blocking(move || fsremote_cmd().args(args).output().unwrap())
        .await
        .unwrap()
}

fn device_args(server: &MockServer, rest: &[&str]) -> Vec<String> {
    let mut args = vec!["--device".to_owned(), server.uri()];
    args.extend(rest.iter().map(|s| (*s).to_owned()));
    args
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = fsremote_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    fsremote_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("FSAPI")
            .and(predicate::str::contains("status"))
            .and(predicate::str::contains("volume"))
            .and(predicate::str::contains("presets")),
    );
}

#[test]
fn test_version_flag() {
    fsremote_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fsremote"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    fsremote_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    fsremote_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = fsremote_cmd().arg("foobar").output().unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_status_without_device_is_usage_error() {
    fsremote_cmd()
        .arg("status")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No device configured"));
}

#[test]
fn test_unknown_profile() {
    fsremote_cmd()
        .args(["--profile", "attic", "status"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("attic"));
}

#[test]
fn test_invalid_volume_level_is_rejected_by_parser() {
    fsremote_cmd()
        .args(["volume", "set", "loud"])
        .assert()
        .code(2);
}

#[test]
fn test_unreachable_device_is_connection_error() {
    fsremote_cmd()
        .args(["--device", "http://127.0.0.1:9/", "--timeout", "2", "status"])
        .assert()
        .code(7);
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_config_subcommands_exist() {
    fsremote_cmd()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("init")
                .and(predicate::str::contains("show"))
                .and(predicate::str::contains("set-device"))
                .and(predicate::str::contains("use")),
        );
}

#[test]
fn test_volume_subcommands_exist() {
    fsremote_cmd()
        .args(["volume", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("up")
                .and(predicate::str::contains("down"))
                .and(predicate::str::contains("set")),
        );
}

// ── Config round trip ───────────────────────────────────────────────

#[test]
fn test_set_device_then_show() {
    let home = tempfile::tempdir().unwrap();

    fsremote_cmd_in(home.path())
        .args(["config", "set-device", "kitchen", "http://192.168.1.40/"])
        .assert()
        .success()
        .stderr(predicate::str::contains("kitchen"));

    fsremote_cmd_in(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("default_profile = \"kitchen\"")
                .and(predicate::str::contains("device = \"http://192.168.1.40/\"")),
        );
}

#[test]
fn test_use_unknown_profile_fails() {
    let home = tempfile::tempdir().unwrap();
    fsremote_cmd_in(home.path())
        .args(["config", "use", "attic"])
        .assert()
        .code(4);
}

#[test]
fn test_malformed_config_is_reported() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join("fsremote");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[profiles.kitchen\ndevice = ").unwrap();

    let output = fsremote_cmd_in(home.path()).arg("status").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config loading failed"), "{stderr}");
    assert!(!stderr.contains("No device configured"), "{stderr}");
}

#[test]
fn test_malformed_config_is_not_overwritten() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join("fsremote");
    let file = dir.join("config.toml");
    let broken = "[profiles.kitchen\ndevice = ";
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(&file, broken).unwrap();

    fsremote_cmd_in(home.path())
        .args(["config", "set-device", "lounge", "http://10.0.0.9/"])
        .assert()
        .code(1);
    assert_eq!(std::fs::read_to_string(&file).unwrap(), broken);
}

// ── Device round trips ──────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_status_json_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/fsapi/get-multiple"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "node": "netRemote.sys.power", "value": 1 },
            { "node": "netRemote.sys.audio.volume", "value": 20 },
            { "node": "netRemote.sys.info.friendlyName", "value": "Kitchen" },
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let output = run(device_args(&server, &["-o", "json", "status"])).await;
    assert!(output.status.success(), "{}", combined_output(&output));

    let state: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(state["on"], json!(true));
    assert_eq!(state["volume"], json!(20));
    assert_eq!(state["name"], json!("Kitchen"));
    assert_eq!(state["muted"], json!(false));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_rejected_set_exits_with_rejected_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/fsapi/netRemote.sys.power/set"))
        .and(body_string("1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": false, "status": 42 })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let output = run(device_args(&server, &["set", "netRemote.sys.power", "1"])).await;
    assert_eq!(output.status.code(), Some(9));
    assert!(combined_output(&output).contains("status 42"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_volume_set_confirms_on_stderr() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/fsapi/netRemote.sys.audio.volume/set"))
        .and(body_string("37"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run(device_args(&server, &["volume", "set", "37"])).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Volume 37"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_get_prints_plain_values() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/fsapi/get-multiple"))
        .and(body_string(r#"["netRemote.sys.audio.volume","netRemote.sys.mode"]"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "node": "netRemote.sys.audio.volume", "value": 12 },
            { "node": "netRemote.sys.mode" },
        ])))
        .mount(&server)
        .await;

    let output = run(device_args(
        &server,
        &["-o", "plain", "get", "netRemote.sys.audio.volume", "netRemote.sys.mode"],
    ))
    .await;
    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "12\n-\n");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_http_failure_is_general_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/fsapi/netRemote.sys.audio.mute/set"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad</html>"))
        .mount(&server)
        .await;

    let output = run(device_args(&server, &["mute", "on"])).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(combined_output(&output).contains("Bad Gateway"));
}
