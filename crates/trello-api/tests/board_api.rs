//! Integration tests for board operations.
//!
//! These tests use wiremock to mock the Trello API responses.

mod common;

use common::*;
use serde_json::json;
use trello_api_rs::args::Argument;
use trello_api_rs::models::{Member, Position};
use trello_api_rs::{ApiError, Error};
use wiremock::matchers::{body_string, query_param};
use wiremock::{MockServer, ResponseTemplate};

fn member(id: &str) -> Member {
    serde_json::from_value(member_json(id, "someone")).unwrap()
}

/// Test: fetching a board binds it and its embedded resources
#[tokio::test]
async fn test_get_board() {
    let mock_server = MockServer::start().await;

    let mut body = board_json("b1");
    body["members"] = json!([member_json("m1", "samdoe")]);
    body["memberships"] = json!([membership_json("ms1", "m1", "admin")]);

    authed("GET", "/boards/b1")
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let board = client.board("b1").await.unwrap();

    assert_eq!(board.name, "Roadmap");
    assert_eq!(board.label_names.green, "done");
    assert!(board.client().is_some());
    assert!(board.members[0].client().is_some());
    assert_eq!(board.memberships[0].board_id(), "b1");
}

/// Test: creating a board posts its name
#[tokio::test]
async fn test_create_board() {
    let mock_server = MockServer::start().await;

    authed("POST", "/boards")
        .and(body_string("name=Q3+Planning"))
        .respond_with(ResponseTemplate::new(200).set_body_json(board_json("b2")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let board = client(&mock_server).create_board("Q3 Planning").await.unwrap();
    assert_eq!(board.id, "b2");
    assert!(board.client().is_some());
}

/// Test: duplicating a board names its source and what to keep
#[tokio::test]
async fn test_duplicate_board() {
    let mock_server = MockServer::start().await;

    authed("GET", "/boards/b1")
        .respond_with(ResponseTemplate::new(200).set_body_json(board_json("b1")))
        .mount(&mock_server)
        .await;
    authed("POST", "/boards")
        .and(body_string("idBoardSource=b1&keepFromSource=none&name=Copy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(board_json("b3")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let board = client(&mock_server).board("b1").await.unwrap();
    let copy = board.duplicate("Copy", false).await.unwrap();
    assert_eq!(copy.id, "b3");
}

/// Test: updating a field reloads the board from the response
#[tokio::test]
async fn test_set_description_overwrites_board() {
    let mock_server = MockServer::start().await;

    authed("GET", "/boards/b1")
        .respond_with(ResponseTemplate::new(200).set_body_json(board_json("b1")))
        .mount(&mock_server)
        .await;

    let mut updated = board_json("b1");
    updated["desc"] = json!("Quarterly goals");
    authed("PUT", "/boards/b1/desc")
        .and(body_string("value=Quarterly+goals"))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut board = client(&mock_server).board("b1").await.unwrap();
    board.set_description("Quarterly goals").await.unwrap();

    assert_eq!(board.desc, "Quarterly goals");
    assert!(board.client().is_some());
}

/// Test: background goes through the prefs path
#[tokio::test]
async fn test_set_background() {
    let mock_server = MockServer::start().await;

    authed("GET", "/boards/b1")
        .respond_with(ResponseTemplate::new(200).set_body_json(board_json("b1")))
        .mount(&mock_server)
        .await;

    let mut updated = board_json("b1");
    updated["prefs"]["background"] = json!("green");
    authed("PUT", "/boards/b1/prefs/background")
        .and(body_string("value=green"))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut board = client(&mock_server).board("b1").await.unwrap();
    board.set_background("green").await.unwrap();
    assert_eq!(board.prefs.background, "green");
}

/// Test: lists on a board are bound
#[tokio::test]
async fn test_board_lists() {
    let mock_server = MockServer::start().await;

    authed("GET", "/boards/b1")
        .respond_with(ResponseTemplate::new(200).set_body_json(board_json("b1")))
        .mount(&mock_server)
        .await;
    authed("GET", "/boards/b1/lists")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            list_json("l1", "b1", "To Do"),
            list_json("l2", "b1", "Done")
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let board = client(&mock_server).board("b1").await.unwrap();
    let lists = board.lists().await.unwrap();

    assert_eq!(lists.len(), 2);
    assert_eq!(lists[1].name, "Done");
    assert!(lists.iter().all(|l| l.client().is_some()));
}

/// Test: without embedded members the board fetches them
#[tokio::test]
async fn test_board_members_fetched_when_not_embedded() {
    let mock_server = MockServer::start().await;

    authed("GET", "/boards/b1")
        .respond_with(ResponseTemplate::new(200).set_body_json(board_json("b1")))
        .mount(&mock_server)
        .await;
    authed("GET", "/boards/b1/members")
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([member_json("m1", "samdoe")])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let board = client(&mock_server).board("b1").await.unwrap();
    let members = board.members().await.unwrap();

    assert_eq!(members[0].username, "samdoe");
    assert!(members[0].client().is_some());
}

/// Test: without embedded memberships the board fetches them and tags each with the board
#[tokio::test]
async fn test_board_memberships_fetched_when_not_embedded() {
    let mock_server = MockServer::start().await;

    authed("GET", "/boards/b1")
        .respond_with(ResponseTemplate::new(200).set_body_json(board_json("b1")))
        .mount(&mock_server)
        .await;
    authed("GET", "/boards/b1/memberships")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            membership_json("ms1", "m1", "admin"),
            membership_json("ms2", "m2", "observer")
        ])))
        .expect(2)
        .mount(&mock_server)
        .await;

    let board = client(&mock_server).board("b1").await.unwrap();
    let memberships = board.memberships().await.unwrap();
    assert!(memberships.iter().all(|m| m.board_id() == "b1"));

    assert!(board.is_admin(&member("m1")).await);
}

/// Test: a single membership is tagged with the board
#[tokio::test]
async fn test_board_membership_by_id() {
    let mock_server = MockServer::start().await;

    authed("GET", "/boards/b1")
        .respond_with(ResponseTemplate::new(200).set_body_json(board_json("b1")))
        .mount(&mock_server)
        .await;
    authed("GET", "/boards/b1/memberships/ms1")
        .respond_with(
            ResponseTemplate::new(200).set_body_json(membership_json("ms1", "m1", "normal")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let board = client(&mock_server).board("b1").await.unwrap();
    let membership = board.membership("ms1").await.unwrap();

    assert_eq!(membership.board_id(), "b1");
    assert!(!membership.is_admin());
}

/// Test: a member without membership is reported as not found
#[tokio::test]
async fn test_membership_for_unknown_member() {
    let mock_server = MockServer::start().await;

    let mut body = board_json("b1");
    body["memberships"] = json!([membership_json("ms1", "m1", "admin")]);
    authed("GET", "/boards/b1")
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let board = client(&mock_server).board("b1").await.unwrap();
    let err = board.membership_for_member(&member("m7")).await.unwrap_err();

    assert!(matches!(err, Error::Api(ApiError::NotFound { .. })));
    assert!(!board.is_admin(&member("m7")).await);
}

/// Test: adding a member defaults the type to normal and applies the response
#[tokio::test]
async fn test_add_member_defaults_to_normal() {
    let mock_server = MockServer::start().await;

    authed("GET", "/boards/b1")
        .respond_with(ResponseTemplate::new(200).set_body_json(board_json("b1")))
        .mount(&mock_server)
        .await;

    let mut updated = board_json("b1");
    updated["members"] = json!([member_json("m2", "alex")]);
    updated["memberships"] = json!([membership_json("ms2", "m2", "normal")]);
    authed("PUT", "/boards/b1/members/m2")
        .and(body_string("type=normal"))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut board = client(&mock_server).board("b1").await.unwrap();
    board.add_member(&member("m2"), "").await.unwrap();

    assert_eq!(board.members.len(), 1);
    assert_eq!(board.memberships[0].board_id(), "b1");
}

/// Test: removing a member applies the response
#[tokio::test]
async fn test_remove_member() {
    let mock_server = MockServer::start().await;

    let mut body = board_json("b1");
    body["members"] = json!([member_json("m1", "samdoe"), member_json("m2", "alex")]);
    authed("GET", "/boards/b1")
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let mut updated = board_json("b1");
    updated["members"] = json!([member_json("m1", "samdoe")]);
    authed("DELETE", "/boards/b1/members/m2")
        .respond_with(ResponseTemplate::new(200).set_body_json(updated))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut board = client(&mock_server).board("b1").await.unwrap();
    board.remove_member(&member("m2")).await.unwrap();

    assert_eq!(board.members.len(), 1);
    assert_eq!(board.members[0].id, "m1");
}

/// Test: adding a member keeps board fields missing from Trello's trimmed reply
#[tokio::test]
async fn test_add_member_partial_response_keeps_board_fields() {
    let mock_server = MockServer::start().await;

    authed("GET", "/boards/b1")
        .respond_with(ResponseTemplate::new(200).set_body_json(board_json("b1")))
        .mount(&mock_server)
        .await;
    authed("PUT", "/boards/b1/members/m2")
        .and(body_string("type=admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "b1",
            "members": [member_json("m2", "alex")],
            "memberships": [membership_json("ms2", "m2", "admin")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut board = client(&mock_server).board("b1").await.unwrap();
    board.add_member(&member("m2"), "admin").await.unwrap();

    assert_eq!(board.name, "Roadmap");
    assert_eq!(board.url, "https://trello.com/b/b1/roadmap");
    assert_eq!(board.prefs.permission_level, "private");
    assert_eq!(board.label_names.green, "done");
    assert_eq!(board.members[0].username, "alex");
    assert!(board.is_admin(&member("m2")).await);
    assert!(board.client().is_some());
}

/// Test: a field update only touches what the response carries
#[tokio::test]
async fn test_update_partial_response_merges_prefs() {
    let mock_server = MockServer::start().await;

    authed("GET", "/boards/b1")
        .respond_with(ResponseTemplate::new(200).set_body_json(board_json("b1")))
        .mount(&mock_server)
        .await;
    authed("PUT", "/boards/b1/prefs/permissionLevel")
        .and(body_string("value=org"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "b1",
            "prefs": {"permissionLevel": "org"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut board = client(&mock_server).board("b1").await.unwrap();
    board.update("prefs/permissionLevel", "org").await.unwrap();

    assert_eq!(board.prefs.permission_level, "org");
    assert_eq!(board.prefs.background, "blue");
    assert_eq!(board.name, "Roadmap");
}

/// Test: board cards, a single card and member cards
#[tokio::test]
async fn test_board_cards() {
    let mock_server = MockServer::start().await;

    authed("GET", "/boards/b1")
        .respond_with(ResponseTemplate::new(200).set_body_json(board_json("b1")))
        .mount(&mock_server)
        .await;
    authed("GET", "/boards/b1/cards")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            card_json("c1", "l1", "One"),
            card_json("c2", "l1", "Two")
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;
    authed("GET", "/boards/b1/cards/c2")
        .respond_with(ResponseTemplate::new(200).set_body_json(card_json("c2", "l1", "Two")))
        .expect(1)
        .mount(&mock_server)
        .await;
    authed("GET", "/boards/b1/members/m1/cards")
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([card_json("c1", "l1", "One")])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let board = client(&mock_server).board("b1").await.unwrap();

    let cards = board.cards().await.unwrap();
    assert_eq!(cards.len(), 2);
    assert!(cards.iter().all(|c| c.client().is_some()));
    assert!(cards[0].labels[0].client().is_some());

    let card = board.card("c2").await.unwrap();
    assert_eq!(card.name, "Two");

    let mine = board.member_cards("m1").await.unwrap();
    assert_eq!(mine.len(), 1);
}

/// Test: board checklists bind their items
#[tokio::test]
async fn test_board_checklists() {
    let mock_server = MockServer::start().await;

    authed("GET", "/boards/b1")
        .respond_with(ResponseTemplate::new(200).set_body_json(board_json("b1")))
        .mount(&mock_server)
        .await;
    authed("GET", "/boards/b1/checklists")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([checklist_json("cl1")])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let board = client(&mock_server).board("b1").await.unwrap();
    let checklists = board.checklists().await.unwrap();

    assert_eq!(checklists[0].check_items[1].checklist_id(), "cl1");
}

/// Test: action arguments become the query string
#[tokio::test]
async fn test_board_actions_with_args() {
    let mock_server = MockServer::start().await;

    authed("GET", "/boards/b1")
        .respond_with(ResponseTemplate::new(200).set_body_json(board_json("b1")))
        .mount(&mock_server)
        .await;
    authed("GET", "/boards/b1/actions")
        .and(query_param("filter", "commentCard"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "a1",
            "idMemberCreator": "m1",
            "type": "commentCard",
            "date": "2026-03-01T12:00:00.000Z",
            "data": {"text": "Looks good"},
            "memberCreator": {"id": "m1", "fullName": "Sam Doe", "initials": "SD", "username": "samdoe"}
        }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let board = client(&mock_server).board("b1").await.unwrap();
    let actions = board
        .actions(&[
            Argument::new("filter", "commentCard"),
            Argument::new("limit", "5"),
        ])
        .await
        .unwrap();

    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].action_type, "commentCard");
    assert_eq!(actions[0].comment_text(), Some("Looks good"));
}

/// Test: adding a list posts name, board and position
#[tokio::test]
async fn test_add_list() {
    let mock_server = MockServer::start().await;

    authed("GET", "/boards/b1")
        .respond_with(ResponseTemplate::new(200).set_body_json(board_json("b1")))
        .mount(&mock_server)
        .await;
    authed("POST", "/lists")
        .and(body_string("name=Review&idBoard=b1&pos=top"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json("l9", "b1", "Review")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let board = client(&mock_server).board("b1").await.unwrap();
    let list = board.add_list("Review", Position::Top).await.unwrap();

    assert_eq!(list.id, "l9");
    assert!(list.client().is_some());
}

/// Test: labels can be listed and created, with or without a color
#[tokio::test]
async fn test_board_labels() {
    let mock_server = MockServer::start().await;

    authed("GET", "/boards/b1")
        .respond_with(ResponseTemplate::new(200).set_body_json(board_json("b1")))
        .mount(&mock_server)
        .await;
    authed("GET", "/boards/b1/labels")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            label_json("lbl1", "bug", Some("red")),
            label_json("lbl2", "later", None)
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;
    authed("POST", "/boards/b1/labels")
        .and(body_string("name=misc&color="))
        .respond_with(ResponseTemplate::new(200).set_body_json(label_json("lbl3", "misc", None)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let board = client(&mock_server).board("b1").await.unwrap();

    let labels = board.labels().await.unwrap();
    assert_eq!(labels[0].color.as_deref(), Some("red"));
    assert_eq!(labels[1].color, None);

    let label = board.add_label("misc", "").await.unwrap();
    assert_eq!(label.id, "lbl3");
    assert!(label.client().is_some());
}

/// Test: deleting a board issues a DELETE
#[tokio::test]
async fn test_delete_board() {
    let mock_server = MockServer::start().await;

    authed("GET", "/boards/b1")
        .respond_with(ResponseTemplate::new(200).set_body_json(board_json("b1")))
        .mount(&mock_server)
        .await;
    authed("DELETE", "/boards/b1")
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"_value":null}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let board = client(&mock_server).board("b1").await.unwrap();
    board.delete().await.unwrap();
}

/// Test: a missing board maps to NotFound
#[tokio::test]
async fn test_get_missing_board() {
    let mock_server = MockServer::start().await;

    authed("GET", "/boards/nope")
        .respond_with(ResponseTemplate::new(404).set_body_string("The requested resource was not found."))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client(&mock_server).board("nope").await.unwrap_err();
    match err {
        Error::Api(ApiError::NotFound { path }) => assert_eq!(path, "/boards/nope"),
        e => panic!("Expected NotFound error, got: {:?}", e),
    }
}
