//! End-to-end tests for the `fakeseek` binary.
//!
//! Each test runs the built binary as a subprocess. Scans point the binary at
//! a `wiremock` server through a temporary config file, so no real provider
//! is contacted.

use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::Output;
use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HIT_PAGE: &str = r#"<html><body>
<div class="g"><a href="https://a.example/clip"><h3>John Doe deepfake video</h3></a>
<div class="VwiC3b">A manipulated video of John Doe.</div></div>
</body></html>"#;

async fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fakeseek"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .await
        .unwrap_or_else(|e| panic!("failed to run fakeseek: {e}"))
}

fn write_config(dir: &Path, base_url: &str) -> PathBuf {
    let path = dir.join("config.toml");
    let content = format!(
        "[scan.client]\nbase_url = \"{base_url}\"\nmin_request_delay_ms = 0\ntimeout_seconds = 2\n"
    );
    std::fs::write(&path, content).expect("write config");
    path
}

async fn mock_provider(status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn single_name_part_fails() {
    let output = run(&["John"]).await;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("last name"), "stderr: {stderr}");
}

#[tokio::test]
async fn blank_name_fails_with_invalid_input() {
    let output = run(&["  ", "Doe"]).await;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid input"), "stderr: {stderr}");
}

#[tokio::test]
async fn init_config_writes_loadable_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("fakeseek").join("config.toml");
    let path_str = path.to_str().expect("utf-8 path");

    let output = run(&["--init-config", "--config", path_str]).await;
    assert!(output.status.success());
    assert!(path.is_file());

    let loaded = fakeseek::AppConfig::from_file(&path).expect("load written config");
    assert_eq!(loaded, fakeseek::AppConfig::default());
}

#[tokio::test]
async fn found_scan_prints_json_report_and_succeeds() {
    let server = mock_provider(200, HIT_PAGE).await;
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_config(dir.path(), &server.uri());

    let output = run(&["--config", config.to_str().expect("utf-8"), "John", "Doe"]).await;
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(report["status"], "found");
    assert_eq!(report["full_name"], "John Doe");
    assert_eq!(report["total_results"], 6);
    assert_eq!(report["deepfake_related_count"], 6);
}

#[tokio::test]
async fn dedup_flag_counts_link_once() {
    let server = mock_provider(200, HIT_PAGE).await;
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_config(dir.path(), &server.uri());

    let output = run(&[
        "--config",
        config.to_str().expect("utf-8"),
        "--dedup-by-link",
        "John",
        "Doe",
    ])
    .await;
    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(report["total_results"], 1);
}

#[tokio::test]
async fn failing_provider_still_exits_cleanly() {
    let server = mock_provider(500, "").await;
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_config(dir.path(), &server.uri());

    let output = run(&["--config", config.to_str().expect("utf-8"), "John", "Doe"]).await;
    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(report["status"], "clean");
    assert_eq!(report["total_results"], 0);
}

#[tokio::test]
async fn text_format_prints_summary() {
    let server = mock_provider(200, HIT_PAGE).await;
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_config(dir.path(), &server.uri());

    let output = run(&[
        "--config",
        config.to_str().expect("utf-8"),
        "--format",
        "text",
        "John",
        "Doe",
    ])
    .await;
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Status: found"), "stdout: {stdout}");
    assert!(stdout.contains("Deepfake Related: 6"));
}

#[tokio::test]
async fn no_names_runs_demo_summaries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(HIT_PAGE))
        .expect(12)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_config(dir.path(), &server.uri());

    let output = run(&["--config", config.to_str().expect("utf-8")]).await;
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Scan Result for John Doe:"), "stdout: {stdout}");
    assert!(stdout.contains("Scan Result for Taylor Swift:"), "stdout: {stdout}");
    server.verify().await;
}

#[tokio::test]
async fn invalid_threshold_override_fails() {
    let server = mock_provider(200, "").await;
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_config(dir.path(), &server.uri());

    let output = run(&[
        "--config",
        config.to_str().expect("utf-8"),
        "--threshold",
        "1.5",
        "John",
        "Doe",
    ])
    .await;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("confidence_threshold"), "stderr: {stderr}");
}
