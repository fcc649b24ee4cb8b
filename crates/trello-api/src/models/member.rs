//! Trello members (users).

use serde::{Deserialize, Serialize};

use crate::client::TrelloClient;
use crate::error::Result;
use crate::models::{Board, Notification};
use crate::resource::{bound, Bind};

/// Host serving member avatars.
const AVATAR_BASE_URL: &str = "https://trello-avatars.s3.amazonaws.com";

/// A Trello member.
///
/// Which fields are populated depends on the endpoint: the full profile comes
/// from [`TrelloClient::member`], while board and card member lists only carry
/// the summary fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Member {
    #[serde(skip)]
    client: Option<TrelloClient>,

    pub id: String,
    pub avatar_hash: Option<String>,
    pub avatar_source: Option<String>,
    pub bio: String,
    pub bio_data: Option<serde_json::Value>,
    pub confirmed: bool,
    pub full_name: String,
    pub initials: String,
    pub member_type: String,
    pub status: Option<String>,
    pub url: String,
    pub username: String,
    pub email: Option<String>,
    pub new_email: Option<String>,
    pub gravatar_hash: Option<String>,
    pub uploaded_avatar_hash: Option<String>,
    pub id_boards: Vec<String>,
    pub id_boards_pinned: Option<Vec<String>>,
    pub id_organizations: Vec<String>,
    pub id_prem_orgs_admin: Vec<String>,
    pub login_types: Option<Vec<String>>,
    pub one_time_messages_dismissed: Option<Vec<String>>,
    pub products: Vec<u32>,
    pub trophies: Vec<String>,
    pub premium_features: Vec<String>,
    pub prefs: Option<MemberPrefs>,
}

/// Account preferences; only present on the authenticated member's own profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MemberPrefs {
    pub send_summaries: bool,
    pub minutes_between_summaries: i32,
    pub minutes_before_deadline_to_notify: i32,
    pub color_blind: bool,
    pub locale: String,
}

impl Bind for Member {
    fn bind(&mut self, client: &TrelloClient) {
        self.client = Some(client.clone());
    }
}

impl Member {
    /// Returns the client this member is bound to.
    pub fn client(&self) -> Option<&TrelloClient> {
        self.client.as_ref()
    }

    /// Returns the boards the member belongs to.
    ///
    /// `fields` limits the board fields Trello returns; all fields when empty.
    pub async fn boards(&self, fields: &[&str]) -> Result<Vec<Board>> {
        let client = bound(&self.client, "member")?;
        let fields = if fields.is_empty() {
            "all".to_string()
        } else {
            fields.join(",")
        };
        client
            .get_resource_with_query(
                &format!("/members/{}/boards", self.id),
                &[("fields", fields.as_str())],
            )
            .await
    }

    /// Creates a new board owned by the authenticated member.
    pub async fn add_board(&self, name: &str) -> Result<Board> {
        bound(&self.client, "member")?.create_board(name).await
    }

    /// Returns the member's notifications.
    pub async fn notifications(&self) -> Result<Vec<Notification>> {
        let client = bound(&self.client, "member")?;
        client
            .get_resource(&format!("/members/{}/notifications", self.id))
            .await
    }

    /// Returns the URL of the member's 170px avatar, if the member has one.
    pub fn avatar_url(&self) -> Option<String> {
        self.avatar_hash
            .as_deref()
            .filter(|hash| !hash.is_empty())
            .map(|hash| format!("{}/{}/170.png", AVATAR_BASE_URL, hash))
    }
}

impl TrelloClient {
    /// Fetches a member by ID or username. `"me"` is the token's owner.
    pub async fn member(&self, id_or_username: &str) -> Result<Member> {
        self.get_resource(&format!("/members/{}", id_or_username))
            .await
    }
}
