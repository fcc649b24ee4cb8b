//! Board memberships.

use serde::{Deserialize, Serialize};

use crate::client::TrelloClient;
use crate::error::Result;
use crate::resource::{bound, Bind};

/// Default membership type when none is given.
pub(crate) const DEFAULT_MEMBER_TYPE: &str = "normal";

/// A member's relationship to a board (admin, normal or observer).
///
/// A membership remembers the board it belongs to so it can be updated in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Membership {
    #[serde(skip)]
    client: Option<TrelloClient>,
    #[serde(skip)]
    board_id: String,

    pub id: String,
    pub id_member: String,
    pub member_type: String,
    pub unconfirmed: bool,
    pub deactivated: bool,
}

impl Bind for Membership {
    fn bind(&mut self, client: &TrelloClient) {
        self.client = Some(client.clone());
    }
}

impl Membership {
    /// Returns the client this membership is bound to.
    pub fn client(&self) -> Option<&TrelloClient> {
        self.client.as_ref()
    }

    /// Returns the ID of the board this membership belongs to.
    pub fn board_id(&self) -> &str {
        &self.board_id
    }

    pub(crate) fn set_board(&mut self, board_id: &str) {
        self.board_id = board_id.to_string();
    }

    /// Returns true for board admins.
    pub fn is_admin(&self) -> bool {
        self.member_type == "admin"
    }

    /// Changes the membership type and applies the response to this membership.
    ///
    /// `member_type` is `admin`, `normal` or `observer` (empty means `normal`).
    /// `member_fields` selects the member fields Trello includes in the response;
    /// it is omitted when empty.
    pub async fn update(&mut self, member_type: &str, member_fields: &str) -> Result<()> {
        let client = bound(&self.client, "membership")?;
        let member_type = if member_type.is_empty() {
            DEFAULT_MEMBER_TYPE
        } else {
            member_type
        };

        let mut form = vec![("type", member_type)];
        if !member_fields.is_empty() {
            form.push(("member_fields", member_fields));
        }

        let mut updated = client
            .put_merged(
                &*self,
                &format!("/boards/{}/memberships/{}", self.board_id, self.id),
                &form,
            )
            .await?;
        updated.board_id = std::mem::take(&mut self.board_id);
        *self = updated;
        Ok(())
    }
}
