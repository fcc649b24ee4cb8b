//! Actions: the activity log entries Trello records for boards, lists and cards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::TrelloClient;
use crate::resource::Bind;

/// An entry in a board, list or card activity feed (comments included).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Action {
    #[serde(skip)]
    client: Option<TrelloClient>,

    pub id: String,
    pub id_member_creator: String,

    /// Action type, e.g. `commentCard`, `createCard`, `addMemberToCard`.
    #[serde(rename = "type")]
    pub action_type: String,

    pub date: Option<DateTime<Utc>>,

    /// Type-specific payload, kept as raw JSON.
    pub data: serde_json::Value,

    pub member_creator: Option<MemberCreator>,
}

/// The member who triggered an action or notification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MemberCreator {
    pub id: String,
    pub avatar_hash: Option<String>,
    pub full_name: String,
    pub initials: String,
    pub username: String,
}

impl Bind for Action {
    fn bind(&mut self, client: &TrelloClient) {
        self.client = Some(client.clone());
    }
}

impl Action {
    /// Returns the client this action is bound to.
    pub fn client(&self) -> Option<&TrelloClient> {
        self.client.as_ref()
    }

    /// Returns the comment text for `commentCard` actions.
    pub fn comment_text(&self) -> Option<&str> {
        if self.action_type != "commentCard" {
            return None;
        }
        self.data.get("text").and_then(|t| t.as_str())
    }
}
