//! Tests for the `check` executable: request on stdin, response on stdout

use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

fn check_cmd(log_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("check").expect("Failed to find check binary");
    cmd.arg("--log-dir").arg(log_dir.path());
    cmd
}

fn request(url: &str, regexp: &str, previous: Option<&str>) -> String {
    let mut request = json!({
        "source": {
            "url": url,
            "repository": "raw",
            "username": "user",
            "password": "password",
            "directory": "/files",
            "regexp": regexp,
        }
    });
    if let Some(path) = previous {
        request["version"] = json!({ "path": path });
    }
    request.to_string()
}

fn search_mock(server: &mut Server, status: usize, body: &str) -> mockito::Mock {
    server
        .mock("GET", "/service/rest/v1/search")
        .match_query(Matcher::Any)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create()
}

const LISTING: &str = r#"{
    "items": [
        {"name": "files/abc-0.0.1.tgz"},
        {"name": "files/abc-2.33.333.tgz"},
        {"name": "files/abc-2.4.3.tgz"},
        {"name": "files/abc-3.53.tgz"}
    ],
    "continuationToken": null
}"#;

#[test]
fn check_writes_latest_version_to_stdout() {
    let log_dir = TempDir::new().unwrap();
    let mut server = Server::new();
    let mock = search_mock(&mut server, 200, LISTING);

    check_cmd(&log_dir)
        .write_stdin(request(&server.url(), "files/abc-(.*).tgz", None))
        .assert()
        .success()
        .stdout("[{\"path\":\"files/abc-3.53.tgz\"}]\n");

    mock.assert();
}

#[test]
fn check_writes_versions_from_previous_onwards() {
    let log_dir = TempDir::new().unwrap();
    let mut server = Server::new();
    let _mock = search_mock(&mut server, 200, LISTING);

    let output = check_cmd(&log_dir)
        .write_stdin(request(
            &server.url(),
            "files/abc-(.*).tgz",
            Some("files/abc-2.4.3.tgz"),
        ))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let response: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(
        response,
        json!([
            {"path": "files/abc-2.4.3.tgz"},
            {"path": "files/abc-2.33.333.tgz"},
            {"path": "files/abc-3.53.tgz"}
        ])
    );
}

#[test]
fn check_rejects_invalid_source_without_output() {
    let log_dir = TempDir::new().unwrap();

    // Validation fails before any request is sent, so the url is never used
    check_cmd(&log_dir)
        .write_stdin(request("http://127.0.0.1:1", "/files/abc-(.*).tgz", None))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("error running command: regexp should not start with '/'\n");
}

#[test]
fn check_rejects_malformed_request_without_output() {
    let log_dir = TempDir::new().unwrap();

    check_cmd(&log_dir)
        .write_stdin("{\"source\": ")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with(
            "error reading request from stdin: ",
        ));
}

#[test]
fn check_reports_listing_failure_once() {
    let log_dir = TempDir::new().unwrap();
    let mut server = Server::new();
    let _mock = search_mock(&mut server, 404, "");

    check_cmd(&log_dir)
        .write_stdin(request(&server.url(), "files/abc-(.*).tgz", None))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("error running command: listing files: Repository not found: raw\n");
}

#[test]
fn check_fails_on_unparsable_version_token() {
    let log_dir = TempDir::new().unwrap();
    let mut server = Server::new();
    let _mock = search_mock(
        &mut server,
        200,
        r#"{"items": [{"name": "files/abc-latest..tgz"}], "continuationToken": null}"#,
    );

    check_cmd(&log_dir)
        .write_stdin(request(&server.url(), "files/abc-(.*).tgz", None))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with(
            "error running command: version number was not valid: 'latest.'",
        ));
}
