//! Shared helpers for the mock-server integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};
use trello_api_rs::TrelloClient;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockBuilder, MockServer};

pub const KEY: &str = "test-key";
pub const TOKEN: &str = "test-token";

/// Returns a client pointed at the mock server.
pub fn client(server: &MockServer) -> TrelloClient {
    TrelloClient::with_base_url(KEY, TOKEN, server.uri())
}

/// Starts a mock matching method and path, plus the credential query parameters.
pub fn authed(http_method: &str, request_path: &str) -> MockBuilder {
    Mock::given(method(http_method))
        .and(path(request_path))
        .and(query_param("key", KEY))
        .and(query_param("token", TOKEN))
}

pub fn board_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Roadmap",
        "desc": "",
        "closed": false,
        "url": format!("https://trello.com/b/{id}/roadmap"),
        "shortUrl": format!("https://trello.com/b/{id}"),
        "prefs": {"permissionLevel": "private", "background": "blue"},
        "labelNames": {"green": "done"}
    })
}

pub fn list_json(id: &str, board_id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "closed": false,
        "idBoard": board_id,
        "pos": 16384
    })
}

pub fn card_json(id: &str, list_id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "desc": "",
        "idBoard": "b1",
        "idList": list_id,
        "idShort": 1,
        "pos": 65535,
        "closed": false,
        "labels": [{"id": "lbl1", "idBoard": "b1", "name": "bug", "color": "red"}],
        "badges": {"checkItems": 0, "comments": 0}
    })
}

pub fn member_json(id: &str, username: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "fullName": "Sam Doe",
        "initials": "SD",
        "avatarHash": "abc123"
    })
}

pub fn membership_json(id: &str, member_id: &str, member_type: &str) -> Value {
    json!({
        "id": id,
        "idMember": member_id,
        "memberType": member_type,
        "unconfirmed": false,
        "deactivated": false
    })
}

pub fn label_json(id: &str, name: &str, color: Option<&str>) -> Value {
    json!({
        "id": id,
        "idBoard": "b1",
        "name": name,
        "color": color,
        "uses": 0
    })
}

pub fn checklist_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Launch",
        "idBoard": "b1",
        "idCard": "c1",
        "pos": 16384,
        "checkItems": [
            {"id": "i1", "name": "Docs", "state": "complete", "pos": 1},
            {"id": "i2", "name": "Tests", "state": "incomplete", "pos": 2}
        ]
    })
}

pub fn webhook_json(id: &str, description: &str, active: bool) -> Value {
    json!({
        "id": id,
        "description": description,
        "idModel": "b1",
        "callbackURL": "https://example.com/hook",
        "active": active,
        "consecutiveFailures": 0
    })
}
