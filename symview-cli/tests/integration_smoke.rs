//! Smoke tests for the symview binary (non-interactive paths only)

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use tempfile::TempDir;

const ICONS: &str = r#"<svg style="display:none">
  <symbol id="home" viewBox="0 0 24 24"><path d="M3 12l9-9 9 9"/></symbol>
  <symbol id="cart" viewBox="0 0 24 24"><path d="M6 6h15l-2 9H8z"/></symbol>
</svg>"#;

/// Command isolated from the user's home config and .env files
fn symview(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("symview").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("SYMVIEW_QUIET", "1")
        .env_remove("SYMVIEW_WORKSPACE")
        .env_remove("RUST_LOG");
    cmd
}

// === Help wiring ===

#[test]
fn test_pick_help() {
    let dir = TempDir::new().unwrap();
    symview(&dir)
        .arg("pick")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Workspace root to scan"));
}

#[test]
fn test_pick_url_help() {
    let dir = TempDir::new().unwrap();
    symview(&dir)
        .arg("pick-url")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("URL to fetch instead of prompting"));
}

// === List ===

#[test]
fn test_list_prints_ids_in_order() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("icons.svg"), ICONS).unwrap();

    symview(&dir)
        .arg("list")
        .arg("icons.svg")
        .assert()
        .success()
        .stdout("home\ncart\n");
}

#[test]
fn test_list_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("icons.svg"), ICONS).unwrap();

    let output = symview(&dir)
        .arg("list")
        .arg("icons.svg")
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["count"], 2);
    assert_eq!(json["symbols"][0]["id"], "home");
    assert_eq!(json["symbols"][1]["id"], "cart");
}

#[test]
fn test_list_without_symbols_is_informational() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("plain.txt"), "no icons here").unwrap();

    symview(&dir)
        .arg("list")
        .arg("plain.txt")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("doesn't have icon symbols"));
}

// === Render ===

#[test]
fn test_render_writes_standalone_page() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("icons.svg"), ICONS).unwrap();

    symview(&dir)
        .args(["render", "icons.svg", "--out", "preview.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2 symbols"));

    let html = fs::read_to_string(dir.path().join("preview.html")).unwrap();
    assert!(html.contains(r#"data-id="home""#));
    assert!(html.contains(r#"data-id="cart""#));
    assert!(html.contains("<style>"));
}

// === Error surfaces ===

#[test]
fn test_pick_without_workspace_fails() {
    let dir = TempDir::new().unwrap();

    symview(&dir)
        .arg("pick")
        .arg("--workspace")
        .arg(dir.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No workspace is opened"));
}

#[test]
fn test_pick_url_unreachable_fails_once() {
    let dir = TempDir::new().unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    symview(&dir)
        .arg("pick-url")
        .arg("--url")
        .arg(format!("http://{}/icons.svg", addr))
        .arg("--no-open")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Previewing").not())
        .stderr(predicate::str::contains("Failed to fetch").count(1));
}

/// Answer one request with 404, then close
fn serve_404_once() -> std::net::SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(
                b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            );
        }
    });
    addr
}

#[test]
fn test_pick_url_404_reports_single_error_line() {
    let dir = TempDir::new().unwrap();
    let addr = serve_404_once();

    let output = symview(&dir)
        .env_remove("SYMVIEW_QUIET")
        .arg("pick-url")
        .arg("--url")
        .arg(format!("http://{}/icons.svg", addr))
        .arg("--no-open")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches('✗').count(), 1, "stderr: {}", stderr);
    assert!(stderr.contains("HTTP 404"));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Previewing"));
}

// === Config ===

#[test]
fn test_config_init_then_show() {
    let dir = TempDir::new().unwrap();

    symview(&dir).args(["config", "init"]).assert().success();
    assert!(dir.path().join(".symview/config.toml").exists());

    symview(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    symview(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[preview]"));
}
