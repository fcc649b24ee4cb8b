//! Cards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::TrelloClient;
use crate::error::Result;
use crate::models::{Action, Attachment, Checklist, Label, List, Member, Position};
use crate::resource::{bound, decode, Bind};

/// A card on a list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Card {
    #[serde(skip)]
    client: Option<TrelloClient>,

    pub id: String,
    pub name: String,
    pub desc: String,
    pub desc_data: Option<serde_json::Value>,
    pub email: Option<String>,
    pub id_short: u64,
    pub id_attachment_cover: Option<String>,
    pub id_checklists: Vec<String>,
    pub id_board: String,
    pub id_list: String,
    pub id_labels: Vec<String>,
    pub id_members: Vec<String>,
    pub id_members_voted: Vec<String>,
    pub manual_cover_attachment: bool,
    pub closed: bool,
    pub pos: f64,
    pub short_link: String,
    pub short_url: String,
    pub url: String,
    pub subscribed: bool,
    pub date_last_activity: Option<DateTime<Utc>>,
    pub due: Option<DateTime<Utc>>,
    pub due_complete: bool,
    pub check_item_states: Option<Vec<CheckItemState>>,
    pub badges: CardBadges,
    pub labels: Vec<Label>,
}

/// Completion state of a checklist item as reported on the card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckItemState {
    pub id_check_item: String,
    pub state: String,
}

/// Summary counters shown on the card front.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardBadges {
    pub votes: u32,
    pub viewing_member_voted: bool,
    pub subscribed: bool,
    pub fogbugz: String,
    pub check_items: u32,
    pub check_items_checked: u32,
    pub comments: u32,
    pub attachments: u32,
    pub description: bool,
    pub due: Option<DateTime<Utc>>,
}

impl Bind for Card {
    fn bind(&mut self, client: &TrelloClient) {
        self.client = Some(client.clone());
        self.labels.bind(client);
    }
}

impl Card {
    /// Returns the client this card is bound to.
    pub fn client(&self) -> Option<&TrelloClient> {
        self.client.as_ref()
    }

    fn path(&self, suffix: &str) -> String {
        format!("/cards/{}{}", self.id, suffix)
    }

    /// Returns the checklists on the card.
    pub async fn checklists(&self) -> Result<Vec<Checklist>> {
        let client = bound(&self.client, "card")?;
        client.get_resource(&self.path("/checklists")).await
    }

    /// Returns the members assigned to the card.
    pub async fn members(&self) -> Result<Vec<Member>> {
        let client = bound(&self.client, "card")?;
        client.get_resource(&self.path("/members")).await
    }

    /// Assigns a member and returns the card's resulting members.
    pub async fn add_member(&self, member: &Member) -> Result<Vec<Member>> {
        let client = bound(&self.client, "card")?;
        client
            .post_resource(&self.path("/idMembers"), &[("value", member.id.as_str())])
            .await
    }

    /// Unassigns a member and returns the card's resulting members.
    pub async fn remove_member(&self, member: &Member) -> Result<Vec<Member>> {
        let client = bound(&self.client, "card")?;
        client
            .delete_resource(&self.path(&format!("/idMembers/{}", member.id)))
            .await
    }

    /// Returns the attachments on the card.
    pub async fn attachments(&self) -> Result<Vec<Attachment>> {
        let client = bound(&self.client, "card")?;
        client.get_resource(&self.path("/attachments")).await
    }

    /// Returns one attachment of the card.
    pub async fn attachment(&self, attachment_id: &str) -> Result<Attachment> {
        let client = bound(&self.client, "card")?;
        client
            .get_resource(&self.path(&format!("/attachments/{}", attachment_id)))
            .await
    }

    /// Returns the card's activity, comments included.
    pub async fn actions(&self) -> Result<Vec<Action>> {
        let client = bound(&self.client, "card")?;
        client.get_resource(&self.path("/actions")).await
    }

    /// Creates an empty checklist on the card.
    pub async fn add_checklist(&self, name: &str) -> Result<Checklist> {
        let client = bound(&self.client, "card")?;
        client
            .post_resource(&self.path("/checklists"), &[("name", name)])
            .await
    }

    /// Comments on the card and returns the comment action.
    pub async fn add_comment(&self, text: &str) -> Result<Action> {
        let client = bound(&self.client, "card")?;
        client
            .post_resource(&self.path("/actions/comments"), &[("text", text)])
            .await
    }

    /// Moves the card to another list and returns the moved card.
    pub async fn move_to_list(&self, list: &List) -> Result<Card> {
        self.put_field("idList", &list.id).await
    }

    /// Moves the card within its list and returns the moved card.
    pub async fn move_to(&self, pos: Position) -> Result<Card> {
        self.put_field("pos", &pos.to_string()).await
    }

    /// Renames the card and returns the updated card.
    pub async fn set_name(&self, name: &str) -> Result<Card> {
        self.put_field("name", name).await
    }

    /// Replaces the description and returns the updated card.
    pub async fn set_description(&self, desc: &str) -> Result<Card> {
        self.put_field("desc", desc).await
    }

    /// Archives (`true`) or restores (`false`) the card in place.
    pub async fn archive(&mut self, closed: bool) -> Result<()> {
        let client = bound(&self.client, "card")?;
        let value = if closed { "true" } else { "false" };
        let updated = client
            .put_merged(&*self, &self.path("/closed"), &[("value", value)])
            .await?;
        *self = updated;
        Ok(())
    }

    async fn put_field(&self, field: &str, value: &str) -> Result<Card> {
        let client = bound(&self.client, "card")?;
        client
            .put_resource(&self.path(&format!("/{}", field)), &[("value", value)])
            .await
    }

    /// Attaches an existing board label and returns the card's label IDs.
    pub async fn add_label(&self, label_id: &str) -> Result<Vec<String>> {
        let client = bound(&self.client, "card")?;
        let body = client
            .post(&self.path("/idLabels"), &[("value", label_id)])
            .await?;
        decode(&body)
    }

    /// Creates a new label on the card's board and attaches it.
    pub async fn add_new_label(&self, name: &str, color: &str) -> Result<Label> {
        let client = bound(&self.client, "card")?;
        client
            .post_resource(&self.path("/labels"), &[("name", name), ("color", color)])
            .await
    }

    /// Deletes the card permanently.
    pub async fn delete(&self) -> Result<()> {
        let client = bound(&self.client, "card")?;
        client.delete(&self.path("")).await?;
        Ok(())
    }

    /// Returns true if the card has a due date that is not marked complete.
    pub fn is_due_pending(&self) -> bool {
        self.due.is_some() && !self.due_complete
    }
}

impl TrelloClient {
    /// Fetches a card by ID or short link.
    pub async fn card(&self, card_id: &str) -> Result<Card> {
        self.get_resource(&format!("/cards/{}", card_id)).await
    }
}
