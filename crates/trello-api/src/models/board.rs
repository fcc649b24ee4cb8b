//! Boards and everything reachable from them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::args::{with_args, Argument};
use crate::client::TrelloClient;
use crate::error::{ApiError, Result};
use crate::models::membership::DEFAULT_MEMBER_TYPE;
use crate::models::{Action, Card, Checklist, Label, List, Member, Membership, Position};
use crate::resource::{bound, Bind};

/// A Trello board.
///
/// Boards fetched with [`TrelloClient::board`] usually embed their members and
/// memberships; [`Board::members`] and [`Board::memberships`] answer from those
/// when present and fall back to a request otherwise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Board {
    #[serde(skip)]
    client: Option<TrelloClient>,

    pub id: String,
    pub name: String,
    pub desc: String,
    pub desc_data: Option<serde_json::Value>,
    pub closed: bool,
    pub id_member_creator: Option<String>,
    pub id_organization: Option<String>,
    pub members: Vec<Member>,
    pub memberships: Vec<Membership>,
    pub pinned: Option<bool>,
    pub url: String,
    pub short_url: String,
    pub prefs: BoardPrefs,
    pub label_names: LabelNames,
}

/// Board preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardPrefs {
    pub permission_level: String,
    pub voting: String,
    pub comments: String,
    pub invitations: String,
    pub self_join: bool,
    pub card_covers: bool,
    pub card_aging: String,
    pub calendar_feed_enabled: bool,
    pub background: String,
    pub background_color: Option<String>,
    pub background_image: Option<String>,
    pub background_image_scaled: Option<Vec<BoardBackground>>,
    pub background_tile: bool,
    pub background_brightness: String,
    pub can_be_public: bool,
    pub can_be_org: bool,
    pub can_be_private: bool,
    pub can_invite: bool,
}

/// One scaled rendition of a board's background image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardBackground {
    pub width: u32,
    pub height: u32,
    pub url: String,
}

/// Display names of the board's color labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelNames {
    pub red: String,
    pub orange: String,
    pub yellow: String,
    pub green: String,
    pub blue: String,
    pub purple: String,
    pub sky: String,
    pub lime: String,
    pub pink: String,
    pub black: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DuplicateBoardForm<'a> {
    id_board_source: &'a str,
    keep_from_source: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateListForm<'a> {
    name: &'a str,
    id_board: &'a str,
    pos: Position,
}

impl Bind for Board {
    fn bind(&mut self, client: &TrelloClient) {
        self.client = Some(client.clone());
        self.members.bind(client);
        for membership in &mut self.memberships {
            membership.bind(client);
            membership.set_board(&self.id);
        }
    }
}

impl Board {
    /// Returns the client this board is bound to.
    pub fn client(&self) -> Option<&TrelloClient> {
        self.client.as_ref()
    }

    fn path(&self, suffix: &str) -> String {
        format!("/boards/{}{}", self.id, suffix)
    }

    /// Copies the board under a new name.
    ///
    /// With `keep_cards` the copy includes the cards, otherwise only the lists.
    pub async fn duplicate(&self, name: &str, keep_cards: bool) -> Result<Board> {
        let client = bound(&self.client, "board")?;
        let form = DuplicateBoardForm {
            id_board_source: &self.id,
            keep_from_source: if keep_cards { "cards" } else { "none" },
            name,
        };
        client.post_resource("/boards", &form).await
    }

    /// Sets the background to a color name or background ID.
    pub async fn set_background(&mut self, background: &str) -> Result<()> {
        self.update("prefs/background", background).await
    }

    /// Replaces the description.
    pub async fn set_description(&mut self, desc: &str) -> Result<()> {
        self.update("desc", desc).await
    }

    /// Sets a single board field, e.g. `name` or `prefs/permissionLevel`, and
    /// applies the fields the response carries to this board.
    pub async fn update(&mut self, path: &str, value: &str) -> Result<()> {
        let client = bound(&self.client, "board")?;
        let updated = client
            .put_merged(&*self, &self.path(&format!("/{}", path)), &[("value", value)])
            .await?;
        *self = updated;
        Ok(())
    }

    /// Deletes the board. This cannot be undone.
    pub async fn delete(&self) -> Result<()> {
        let client = bound(&self.client, "board")?;
        client.delete(&self.path("")).await?;
        Ok(())
    }

    pub async fn lists(&self) -> Result<Vec<List>> {
        let client = bound(&self.client, "board")?;
        client.get_resource(&self.path("/lists")).await
    }

    /// Returns the board's members.
    pub async fn members(&self) -> Result<Vec<Member>> {
        if !self.members.is_empty() {
            return Ok(self.members.clone());
        }
        let client = bound(&self.client, "board")?;
        client.get_resource(&self.path("/members")).await
    }

    /// Adds a member to the board.
    ///
    /// Trello answers with the board's new members and memberships only; the
    /// rest of the board is left as it was.
    ///
    /// `member_type` is `admin`, `normal` or `observer` (empty means `normal`).
    pub async fn add_member(&mut self, member: &Member, member_type: &str) -> Result<()> {
        let client = bound(&self.client, "board")?;
        let member_type = if member_type.is_empty() {
            DEFAULT_MEMBER_TYPE
        } else {
            member_type
        };
        let updated = client
            .put_merged(
                &*self,
                &self.path(&format!("/members/{}", member.id)),
                &[("type", member_type)],
            )
            .await?;
        *self = updated;
        Ok(())
    }

    /// Removes a member from the board, applying the response like
    /// [`Board::add_member`].
    pub async fn remove_member(&mut self, member: &Member) -> Result<()> {
        let client = bound(&self.client, "board")?;
        let updated = client
            .delete_merged(&*self, &self.path(&format!("/members/{}", member.id)))
            .await?;
        *self = updated;
        Ok(())
    }

    /// Fetches one membership of the board.
    pub async fn membership(&self, membership_id: &str) -> Result<Membership> {
        let client = bound(&self.client, "board")?;
        let mut membership: Membership = client
            .get_resource(&self.path(&format!("/memberships/{}", membership_id)))
            .await?;
        membership.set_board(&self.id);
        Ok(membership)
    }

    /// Returns the board's memberships.
    pub async fn memberships(&self) -> Result<Vec<Membership>> {
        if !self.memberships.is_empty() {
            return Ok(self.memberships.clone());
        }
        let client = bound(&self.client, "board")?;
        let mut memberships: Vec<Membership> =
            client.get_resource(&self.path("/memberships")).await?;
        for membership in &mut memberships {
            membership.set_board(&self.id);
        }
        Ok(memberships)
    }

    /// Returns the membership held by `member`.
    pub async fn membership_for_member(&self, member: &Member) -> Result<Membership> {
        self.memberships()
            .await?
            .into_iter()
            .find(|membership| membership.id_member == member.id)
            .ok_or_else(|| {
                ApiError::NotFound {
                    path: self.path(&format!("/memberships?idMember={}", member.id)),
                }
                .into()
            })
    }

    /// Returns true if `member` administers the board.
    ///
    /// Any failure to look up the membership counts as not an admin.
    pub async fn is_admin(&self, member: &Member) -> bool {
        match self.membership_for_member(member).await {
            Ok(membership) => membership.is_admin(),
            Err(e) => {
                debug!(board = %self.id, member = %member.id, error = %e, "admin check failed");
                false
            }
        }
    }

    pub async fn cards(&self) -> Result<Vec<Card>> {
        let client = bound(&self.client, "board")?;
        client.get_resource(&self.path("/cards")).await
    }

    /// Fetches a card on this board.
    pub async fn card(&self, card_id: &str) -> Result<Card> {
        let client = bound(&self.client, "board")?;
        client
            .get_resource(&self.path(&format!("/cards/{}", card_id)))
            .await
    }

    pub async fn checklists(&self) -> Result<Vec<Checklist>> {
        let client = bound(&self.client, "board")?;
        client.get_resource(&self.path("/checklists")).await
    }

    /// Returns the cards on this board assigned to a member.
    pub async fn member_cards(&self, member_id: &str) -> Result<Vec<Card>> {
        let client = bound(&self.client, "board")?;
        client
            .get_resource(&self.path(&format!("/members/{}/cards", member_id)))
            .await
    }

    /// Returns the board's activity, filtered by `args` (`filter`, `since`, `limit`, ...).
    pub async fn actions(&self, args: &[Argument]) -> Result<Vec<Action>> {
        let client = bound(&self.client, "board")?;
        client
            .get_resource(&with_args(self.path("/actions"), args))
            .await
    }

    /// Creates a list on the board.
    pub async fn add_list(&self, name: &str, pos: Position) -> Result<List> {
        let client = bound(&self.client, "board")?;
        let form = CreateListForm {
            name,
            id_board: &self.id,
            pos,
        };
        client.post_resource("/lists", &form).await
    }

    pub async fn labels(&self) -> Result<Vec<Label>> {
        let client = bound(&self.client, "board")?;
        client.get_resource(&self.path("/labels")).await
    }

    /// Creates a label on the board. `color` may be empty for a colorless label.
    pub async fn add_label(&self, name: &str, color: &str) -> Result<Label> {
        let client = bound(&self.client, "board")?;
        client
            .post_resource(&self.path("/labels"), &[("name", name), ("color", color)])
            .await
    }
}

impl TrelloClient {
    /// Fetches a board by ID.
    pub async fn board(&self, board_id: &str) -> Result<Board> {
        self.get_resource(&format!("/boards/{}", board_id)).await
    }

    /// Creates a board owned by the token's member.
    pub async fn create_board(&self, name: &str) -> Result<Board> {
        self.post_resource("/boards", &[("name", name)]).await
    }
}
