//! Member notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::TrelloClient;
use crate::error::Result;
use crate::models::MemberCreator;
use crate::resource::Bind;

/// A notification delivered to a member.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Notification {
    #[serde(skip)]
    client: Option<TrelloClient>,

    pub id: String,
    pub unread: bool,

    /// Notification type, e.g. `addedToCard`, `changeCard`, `mentionedOnCard`.
    #[serde(rename = "type")]
    pub notification_type: String,

    pub date: Option<DateTime<Utc>>,
    pub data: NotificationData,
    pub id_member_creator: Option<String>,
    pub member_creator: Option<MemberCreator>,
}

/// The objects a notification refers to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationData {
    pub list_before: Option<ListRef>,
    pub list_after: Option<ListRef>,
    pub board: Option<BoardRef>,
    pub card: Option<CardRef>,
    pub old: Option<OldValues>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardRef {
    pub id: String,
    pub name: String,
    pub short_link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardRef {
    pub id: String,
    pub name: String,
    pub short_link: String,
    pub id_short: u64,
}

/// Previous values of the fields a `changeCard` notification reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OldValues {
    pub id_list: Option<String>,
}

impl Bind for Notification {
    fn bind(&mut self, client: &TrelloClient) {
        self.client = Some(client.clone());
    }
}

impl Notification {
    /// Returns the client this notification is bound to.
    pub fn client(&self) -> Option<&TrelloClient> {
        self.client.as_ref()
    }

    /// Returns true if the notification reports a card moving between lists.
    pub fn is_list_move(&self) -> bool {
        self.data.list_before.is_some() && self.data.list_after.is_some()
    }
}

impl TrelloClient {
    /// Fetches a notification by ID.
    pub async fn notification(&self, notification_id: &str) -> Result<Notification> {
        self.get_resource(&format!("/notifications/{}", notification_id))
            .await
    }
}
