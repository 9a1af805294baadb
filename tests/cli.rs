//
//  teamcity-client
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use tempfile::TempDir;

/// A `tc` invocation isolated from the user's config and environment.
fn tc(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tc").unwrap();
    cmd.env("TC_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("TC_URL")
        .env_remove("TC_USERNAME")
        .env_remove("TC_PASSWORD")
        .env_remove("TC_TIMEOUT")
        .env_remove("TC_DEBUG");
    cmd
}

#[test]
fn test_version_flag() {
    let dir = TempDir::new().unwrap();
    tc(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_config_path_honours_override() {
    let dir = TempDir::new().unwrap();
    tc(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_set_then_get() {
    let dir = TempDir::new().unwrap();
    tc(&dir)
        .args(["config", "set", "url", "ci.example.com/"])
        .assert()
        .success();
    tc(&dir)
        .args(["config", "get", "url"])
        .assert()
        .success()
        .stdout("https://ci.example.com\n");
}

#[test]
fn test_config_set_rejects_bad_value() {
    let dir = TempDir::new().unwrap();
    tc(&dir)
        .args(["config", "set", "timeout", "soon"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("timeout must be a number"));
}

#[test]
fn test_missing_server_url() {
    let dir = TempDir::new().unwrap();
    tc(&dir)
        .args(["project", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No TeamCity server configured"));
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    let dir = TempDir::new().unwrap();
    tc(&dir).args(["pipeline", "list"]).assert().code(2);
}

#[test]
fn test_project_list_as_json() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/guestAuth/app/rest/projects")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"count":1,"project":[{"id":"Backend","name":"Backend services"}]}"#)
        .create();

    tc(&dir)
        .args(["project", "list", "--json", "--url", &server.url()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Backend services\""));
    mock.assert();
}

#[test]
fn test_change_list_pending() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/guestAuth/app/rest/changes")
        .match_query(Matcher::UrlEncoded("locator".into(), "buildType:Bt1,pending:true".into()))
        .with_status(200)
        .with_body(r#"{"change":[{"id":11,"version":"cafe","username":"jdoe"}]}"#)
        .create();

    tc(&dir)
        .args(["change", "list", "--build-type", "Bt1", "--pending", "--json", "--url", &server.url()])
        .assert()
        .success()
        .stdout(predicate::str::contains("cafe"));
    mock.assert();
}

#[test]
fn test_not_found_exit_code() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    server
        .mock("GET", "/guestAuth/app/rest/builds/id:999")
        .with_status(404)
        .with_body("Nothing is found by locator 'id:999'.")
        .create();

    tc(&dir)
        .args(["build", "view", "999", "--url", &server.url()])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("Nothing is found"));
}

#[test]
fn test_http_auth_failure_exit_code() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    server
        .mock("GET", "/httpAuth/app/rest/server/licensingData")
        .with_status(401)
        .with_body("Authentication required")
        .create();

    tc(&dir)
        .args(["server", "license", "--url", &server.url(), "-u", "jdoe", "--password", "wrong"])
        .assert()
        .code(4);
}
