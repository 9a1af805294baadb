//
//  teamcity-client
//  tests/api_client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use std::time::{Duration, Instant};

use base64::Engine;
use mockito::{Matcher, Server};
use serde_json::json;

use teamcity_client::api::{ApiError, BuildStatus, UserGroup};
use teamcity_client::{Authorizer, TeamCityClient};

const GUEST: &str = "/guestAuth/app/rest";
const HTTP: &str = "/httpAuth/app/rest";

fn guest_client(server: &Server) -> TeamCityClient {
    TeamCityClient::guest(&server.url()).unwrap()
}

fn http_client(server: &Server) -> TeamCityClient {
    TeamCityClient::new(&server.url(), Authorizer::http("jdoe", "secret")).unwrap()
}

fn basic_auth(user: &str, password: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(format!("{}:{}", user, password));
    format!("Basic {}", encoded)
}

#[test]
fn test_guest_requests_carry_no_credentials() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", format!("{}/projects/id:Backend", GUEST).as_str())
        .match_header("authorization", Matcher::Missing)
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"Backend","name":"Backend","parentProjectId":"_Root"}"#)
        .create();

    let project = guest_client(&server).get_project_by_id("Backend").unwrap();

    mock.assert();
    assert_eq!(project.id, "Backend");
    assert_eq!(project.parent_project_id, "_Root");
}

#[test]
fn test_http_requests_use_basic_auth() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", format!("{}/projects", HTTP).as_str())
        .match_header("authorization", basic_auth("jdoe", "secret").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"count":2,"project":[{"id":"_Root","name":"<Root project>"},{"id":"Backend","name":"Backend"}]}"#)
        .create();

    let projects = http_client(&server).get_projects().unwrap();

    mock.assert();
    assert_eq!(projects.len(), 2);
    assert!(projects[0].is_root());
    assert_eq!(projects[1].name, "Backend");
}

#[test]
fn test_get_project_by_name_returns_first_match() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", format!("{}/projects", GUEST).as_str())
        .match_query(Matcher::UrlEncoded("locator".into(), "name:My+Project".into()))
        .with_status(200)
        .with_body(r#"{"project":[{"id":"MyProject","name":"My Project"}]}"#)
        .create();

    let project = guest_client(&server).get_project_by_name("My Project").unwrap();

    mock.assert();
    assert_eq!(project.id, "MyProject");
}

#[test]
fn test_get_project_by_name_without_match_is_not_found() {
    let mut server = Server::new();
    server
        .mock("GET", format!("{}/projects", GUEST).as_str())
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"count":0}"#)
        .create();

    let err = guest_client(&server).get_project_by_name("Nope").unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
    assert!(err.is_not_found());
}

#[test]
fn test_build_types_for_project_uses_locator() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", format!("{}/buildTypes", GUEST).as_str())
        .match_query(Matcher::UrlEncoded("locator".into(), "project:Backend".into()))
        .with_status(200)
        .with_body(r#"{"count":1,"buildType":[{"id":"Backend_Build","name":"Build","projectId":"Backend"}]}"#)
        .create();

    let build_types = guest_client(&server).get_build_types_for_project("Backend").unwrap();

    mock.assert();
    assert_eq!(build_types.len(), 1);
    assert_eq!(build_types[0].project_id, "Backend");
}

#[test]
fn test_get_build_type_by_id_and_statistics() {
    let mut server = Server::new();
    let bt = server
        .mock("GET", format!("{}/buildTypes/id:Backend_Build", GUEST).as_str())
        .with_status(200)
        .with_body(r#"{"id":"Backend_Build","name":"Build","description":"Compile","projectId":"Backend"}"#)
        .create();
    let stats = server
        .mock("GET", format!("{}/builds/42/statistics", GUEST).as_str())
        .with_status(200)
        .with_body(r#"{"count":2,"property":[{"name":"BuildDuration","value":"61000"},{"name":"SuccessRate","value":"1"}]}"#)
        .create();

    let client = guest_client(&server);
    let build_type = client.get_build_type_by_id("Backend_Build").unwrap();
    let statistics = client.get_build_type_statistics(42).unwrap();

    bt.assert();
    stats.assert();
    assert_eq!(build_type.description, "Compile");
    assert_eq!(statistics.properties.len(), 2);
    assert_eq!(statistics.value("BuildDuration"), Some("61000"));
    assert_eq!(statistics.value("Missing"), None);
}

#[test]
fn test_get_build_by_id_decodes_status_and_dates() {
    let mut server = Server::new();
    server
        .mock("GET", format!("{}/builds/id:42", GUEST).as_str())
        .with_status(200)
        .with_body(
            json!({
                "id": 42,
                "number": "17",
                "status": "SUCCESS",
                "statusText": "Tests passed: 120",
                "buildTypeId": "Backend_Build",
                "queuedDate": "20230115T115900+0000",
                "startDate": "20230115T120000+0200",
                "finishDate": "20230115T121000+0200"
            })
            .to_string(),
        )
        .create();

    let build = guest_client(&server).get_build_by_id(42).unwrap();

    assert_eq!(build.id, 42);
    assert_eq!(build.status, BuildStatus::Success);
    let start = build.start_date().unwrap();
    assert_eq!(start.offset().local_minus_utc(), 2 * 3600);
    assert_eq!(start.to_rfc3339(), "2023-01-15T12:00:00+02:00");
    let elapsed = build.finish_date().unwrap() - start;
    assert_eq!(elapsed.num_minutes(), 10);
}

#[test]
fn test_malformed_date_is_reported_on_access() {
    let mut server = Server::new();
    server
        .mock("GET", format!("{}/builds/id:7", GUEST).as_str())
        .with_status(200)
        .with_body(r#"{"id":7,"status":"RUNNING","startDate":"yesterday"}"#)
        .create();

    let build = guest_client(&server).get_build_by_id(7).unwrap();

    assert_eq!(build.status, BuildStatus::Running);
    assert!(matches!(build.start_date(), Err(ApiError::DateParse { .. })));
    assert!(build.finish_date().is_err());
}

#[test]
fn test_builds_for_build_type_sends_count() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", format!("{}/builds", GUEST).as_str())
        .match_query(Matcher::UrlEncoded("locator".into(), "buildType:Backend_Build,count:5".into()))
        .with_status(200)
        .with_body(r#"{"count":1,"build":[{"id":1,"status":"FAILURE"}]}"#)
        .create();

    let builds = guest_client(&server).get_builds_for_build_type("Backend_Build", 5).unwrap();

    mock.assert();
    assert_eq!(builds[0].status, BuildStatus::Failure);
}

#[test]
fn test_latest_builds() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", format!("{}/builds", GUEST).as_str())
        .match_query(Matcher::UrlEncoded("locator".into(), "count:3".into()))
        .with_status(200)
        .with_body(r#"{"build":[{"id":3},{"id":2},{"id":1}]}"#)
        .create();

    let builds = guest_client(&server).get_builds(3).unwrap();

    mock.assert();
    assert_eq!(builds.iter().map(|b| b.id).collect::<Vec<_>>(), vec![3, 2, 1]);
}

#[test]
fn test_change_locators() {
    let mut server = Server::new();
    let since = server
        .mock("GET", format!("{}/changes", GUEST).as_str())
        .match_query(Matcher::UrlEncoded("locator".into(), "buildType:Bt1,sinceChange:100".into()))
        .with_status(200)
        .with_body(r#"{"change":[{"id":101,"version":"abc","username":"jdoe","date":"20230115T120000+0000"}]}"#)
        .expect(1)
        .create();
    let pending = server
        .mock("GET", format!("{}/changes", GUEST).as_str())
        .match_query(Matcher::UrlEncoded("locator".into(), "buildType:Bt1,pending:true".into()))
        .with_status(200)
        .with_body(r#"{"change":[]}"#)
        .expect(1)
        .create();
    let by_build = server
        .mock("GET", format!("{}/changes", GUEST).as_str())
        .match_query(Matcher::UrlEncoded("locator".into(), "build:(id:42)".into()))
        .with_status(200)
        .with_body(r#"{"count":0}"#)
        .expect(1)
        .create();

    let client = guest_client(&server);
    let changes = client.get_changes_for_build_type_since_change("Bt1", 100).unwrap();
    assert!(client.get_changes_for_build_type_pending("Bt1").unwrap().is_empty());
    assert!(client.get_changes_for_build(42).unwrap().is_empty());

    since.assert();
    pending.assert();
    by_build.assert();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].version, "abc");
    assert_eq!(changes[0].username, "jdoe");
}

#[test]
fn test_change_by_id_and_project_changes() {
    let mut server = Server::new();
    server
        .mock("GET", format!("{}/changes/id:5", GUEST).as_str())
        .with_status(200)
        .with_body(r#"{"id":5,"version":"deadbeef"}"#)
        .create();
    let project = server
        .mock("GET", format!("{}/changes", GUEST).as_str())
        .match_query(Matcher::UrlEncoded("locator".into(), "project:Backend,count:2".into()))
        .with_status(200)
        .with_body(r#"{"change":[{"id":9},{"id":8}]}"#)
        .create();

    let client = guest_client(&server);
    assert_eq!(client.get_change_by_id(5).unwrap().version, "deadbeef");
    assert_eq!(client.get_changes_for_project("Backend", 2).unwrap().len(), 2);
    project.assert();
}

#[test]
fn test_get_user_passes_locator_verbatim() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", format!("{}/users/current", HTTP).as_str())
        .match_header("authorization", basic_auth("jdoe", "secret").as_str())
        .with_status(200)
        .with_body(
            json!({
                "id": 1,
                "username": "jdoe",
                "name": "Jane Doe",
                "email": "jdoe@example.com",
                "roles": [{"roleId": "SYSTEM_ADMIN", "scope": "g"}],
                "groups": [{"key": "ALL_USERS_GROUP", "name": "All Users"}]
            })
            .to_string(),
        )
        .create();

    let user = http_client(&server).get_user("current").unwrap();

    mock.assert();
    assert_eq!(user.username, "jdoe");
    assert_eq!(user.name, "Jane Doe");
    assert_eq!(user.roles[0].role_id, "SYSTEM_ADMIN");
    assert_eq!(user.groups[0].key, "ALL_USERS_GROUP");
}

#[test]
fn test_get_user_by_username_escapes() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", format!("{}/users/username:j+doe", HTTP).as_str())
        .with_status(200)
        .with_body(r#"{"username":"j doe"}"#)
        .create();

    let user = http_client(&server).get_user_by_username("j doe").unwrap();

    mock.assert();
    assert_eq!(user.username, "j doe");
}

fn developer_groups() -> Vec<UserGroup> {
    vec![
        UserGroup {
            key: "DEVS".to_string(),
            ..Default::default()
        },
        UserGroup {
            key: "OPS".to_string(),
            ..Default::default()
        },
    ]
}

#[test]
fn test_update_user_groups_posts_bare_array() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", format!("{}/users/username:jdoe/groups", HTTP).as_str())
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!([
            {"key": "DEVS", "name": ""},
            {"key": "OPS", "name": ""}
        ])))
        .with_status(200)
        .with_body(r#"[{"key":"DEVS","name":"Developers"},{"key":"OPS","name":"Operations"}]"#)
        .create();

    let updated = http_client(&server)
        .update_user_groups("username:jdoe", &developer_groups())
        .unwrap();

    mock.assert();
    assert_eq!(updated.len(), 2);
    assert_eq!(updated[1].name, "Operations");
}

#[test]
fn test_update_user_groups_accepts_envelope_response() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", format!("{}/users/username:jdoe/groups", HTTP).as_str())
        .with_status(200)
        .with_body(r#"{"count":1,"group":[{"key":"DEVS","name":"Developers"}]}"#)
        .create();

    let updated = http_client(&server)
        .update_user_groups("username:jdoe", &developer_groups())
        .unwrap();

    mock.assert();
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].name, "Developers");
}

#[test]
fn test_user_groups() {
    let mut server = Server::new();
    server
        .mock("GET", format!("{}/userGroups", HTTP).as_str())
        .with_status(200)
        .with_body(r#"{"count":1,"group":[{"key":"ALL_USERS_GROUP","name":"All Users"}]}"#)
        .create();
    let single = server
        .mock("GET", format!("{}/userGroups/key:DEVS", HTTP).as_str())
        .with_status(200)
        .with_body(r#"{"key":"DEVS","name":"Developers","parent-groups":[{"key":"ALL_USERS_GROUP"}]}"#)
        .create();

    let client = http_client(&server);
    let groups = client.get_user_groups().unwrap();
    let devs = client.get_user_group("DEVS").unwrap();

    single.assert();
    assert_eq!(groups[0].key, "ALL_USERS_GROUP");
    assert_eq!(devs.name, "Developers");
    assert_eq!(devs.parent_groups[0].key, "ALL_USERS_GROUP");
}

#[test]
fn test_create_user_group_returns_server_copy() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", format!("{}/userGroups", HTTP).as_str())
        .match_body(Matcher::PartialJson(json!({"key": "QA", "name": "QA"})))
        .with_status(200)
        .with_body(r#"{"key":"QA","name":"QA","description":"Assigned by server"}"#)
        .create();

    let group = UserGroup {
        key: "QA".to_string(),
        name: "QA".to_string(),
        ..Default::default()
    };
    let created = http_client(&server).create_user_group(&group).unwrap();

    mock.assert();
    assert_eq!(created.description, "Assigned by server");
    assert_eq!(group.description, "");
}

#[test]
fn test_server_licensing_data() {
    let mut server = Server::new();
    server
        .mock("GET", format!("{}/server/licensingData", HTTP).as_str())
        .with_status(200)
        .with_body(r#"{"maxAgents":3,"agentsLeft":1,"maxBuildTypes":100,"buildTypesLeft":-1,"serverLicenseType":"professional"}"#)
        .create();

    let data = http_client(&server).get_server_licensing_data().unwrap();

    assert_eq!(data.max_agents, 3);
    assert_eq!(data.agents_left, 1);
    assert_eq!(data.build_types_left, -1);
    assert_eq!(data.server_license_type, "professional");
}

#[test]
fn test_error_status_keeps_server_message() {
    let mut server = Server::new();
    server
        .mock("GET", format!("{}/projects/id:Missing", HTTP).as_str())
        .with_status(404)
        .with_body("No project found by locator 'Missing'.")
        .create();

    let err = http_client(&server).get_project_by_id("Missing").unwrap_err();

    match &err {
        ApiError::Status { status, message, .. } => {
            assert_eq!(status.as_u16(), 404);
            assert!(message.contains("No project found"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.is_not_found());
    assert!(!err.is_auth_error());
}

#[test]
fn test_unauthorized_is_auth_error() {
    let mut server = Server::new();
    server
        .mock("GET", format!("{}/users/current", HTTP).as_str())
        .with_status(401)
        .with_body("")
        .create();

    let err = http_client(&server).get_user("current").unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(401));
    assert!(err.is_auth_error());
}

#[test]
fn test_invalid_json_is_decode_error() {
    let mut server = Server::new();
    server
        .mock("GET", format!("{}/builds/id:1", GUEST).as_str())
        .with_status(200)
        .with_body("<html>not json</html>")
        .create();

    let err = guest_client(&server).get_build_by_id(1).unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
}

#[test]
fn test_post_error_status_is_reported() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", format!("{}/userGroups", HTTP).as_str())
        .with_status(403)
        .with_body(r#"{"errors":[{"message":"You do not have enough permissions"}]}"#)
        .create();

    let group = UserGroup {
        key: "QA".to_string(),
        name: "QA".to_string(),
        ..Default::default()
    };
    let err = http_client(&server).create_user_group(&group).unwrap_err();

    mock.assert();
    match &err {
        ApiError::Status { context, status, message } => {
            assert!(context.starts_with("POST /userGroups"));
            assert_eq!(status.as_u16(), 403);
            assert_eq!(message, "You do not have enough permissions");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.is_auth_error());
}

#[test]
fn test_requests_send_user_agent() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", format!("{}/server/licensingData", GUEST).as_str())
        .match_header("user-agent", format!("tc/{}", env!("CARGO_PKG_VERSION")).as_str())
        .with_status(200)
        .with_body(r#"{"maxAgents":3}"#)
        .create();

    guest_client(&server).get_server_licensing_data().unwrap();
    mock.assert();
}

#[test]
fn test_timeout_is_transport_error() {
    // Accepts the connection through the backlog but never answers.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());

    let client = TeamCityClient::builder(&url, Authorizer::guest())
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let started = Instant::now();
    let err = client.get_projects().unwrap_err();

    assert!(matches!(err, ApiError::Transport { .. }));
    assert!(started.elapsed() < Duration::from_secs(5));
    drop(listener);
}

#[test]
fn test_unreachable_server_is_transport_error() {
    // Nothing listens on port 9 of localhost.
    let client = TeamCityClient::guest("http://127.0.0.1:9").unwrap();
    let err = client.get_projects().unwrap_err();
    assert!(matches!(err, ApiError::Transport { .. }));
}
