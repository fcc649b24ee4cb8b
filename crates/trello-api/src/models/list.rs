//! Board lists.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::client::TrelloClient;
use crate::error::Result;
use crate::models::{Action, Card, Position};
use crate::resource::{bound, Bind};

/// A list (column) on a board.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct List {
    #[serde(skip)]
    client: Option<TrelloClient>,

    pub id: String,
    pub name: String,
    pub closed: bool,
    pub id_board: String,
    pub pos: f64,
    pub subscribed: Option<bool>,
}

/// Parameters for creating a card in a list.
///
/// ```
/// use trello_api_rs::models::{NewCard, Position};
///
/// let card = NewCard::new("Write release notes")
///     .with_desc("Cover the breaking changes")
///     .with_pos(Position::Top)
///     .with_members(["5f1b", "5f1c"]);
/// assert_eq!(card.id_members.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewCard {
    pub name: String,
    pub desc: String,
    /// Defaults to the bottom of the list.
    pub pos: Option<Position>,
    pub due: Option<DateTime<Utc>>,
    pub id_members: Vec<String>,
}

impl NewCard {
    /// Creates card parameters with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the description.
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    /// Sets the position in the list.
    pub fn with_pos(mut self, pos: Position) -> Self {
        self.pos = Some(pos);
        self
    }

    /// Sets the due date.
    pub fn with_due(mut self, due: DateTime<Utc>) -> Self {
        self.due = Some(due);
        self
    }

    /// Assigns members to the card.
    pub fn with_members<I, S>(mut self, id_members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.id_members = id_members.into_iter().map(Into::into).collect();
        self
    }
}

/// Form body for `POST /cards`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateCardForm<'a> {
    name: &'a str,
    desc: &'a str,
    pos: Position,
    #[serde(skip_serializing_if = "Option::is_none")]
    due: Option<String>,
    id_list: &'a str,
    #[serde(skip_serializing_if = "String::is_empty")]
    id_members: String,
}

impl<'a> CreateCardForm<'a> {
    fn new(card: &'a NewCard, id_list: &'a str) -> Self {
        Self {
            name: &card.name,
            desc: &card.desc,
            pos: card.pos.unwrap_or_default(),
            due: card
                .due
                .map(|due| due.to_rfc3339_opts(SecondsFormat::Millis, true)),
            id_list,
            id_members: card.id_members.join(","),
        }
    }
}

impl Bind for List {
    fn bind(&mut self, client: &TrelloClient) {
        self.client = Some(client.clone());
    }
}

impl List {
    /// Returns the client this list is bound to.
    pub fn client(&self) -> Option<&TrelloClient> {
        self.client.as_ref()
    }

    /// Returns the open cards in the list.
    pub async fn cards(&self) -> Result<Vec<Card>> {
        let client = bound(&self.client, "list")?;
        client
            .get_resource(&format!("/lists/{}/cards", self.id))
            .await
    }

    /// Returns the list's activity.
    pub async fn actions(&self) -> Result<Vec<Action>> {
        let client = bound(&self.client, "list")?;
        client
            .get_resource(&format!("/lists/{}/actions", self.id))
            .await
    }

    /// Creates a card in this list.
    pub async fn add_card(&self, card: &NewCard) -> Result<Card> {
        let client = bound(&self.client, "list")?;
        client
            .post_resource("/cards", &CreateCardForm::new(card, &self.id))
            .await
    }

    /// Archives (`true`) or restores (`false`) the list.
    pub async fn archive(&mut self, closed: bool) -> Result<()> {
        let client = bound(&self.client, "list")?;
        let value = if closed { "true" } else { "false" };
        let updated = client
            .put_merged(&*self, &format!("/lists/{}/closed", self.id), &[("value", value)])
            .await?;
        *self = updated;
        Ok(())
    }

    /// Moves the list within its board and returns it as Trello reports it.
    pub async fn move_to(&self, pos: Position) -> Result<List> {
        let client = bound(&self.client, "list")?;
        client
            .put_resource(&format!("/lists/{}/pos", self.id), &[("value", pos)])
            .await
    }
}

impl TrelloClient {
    /// Fetches a list by ID.
    pub async fn list(&self, list_id: &str) -> Result<List> {
        self.get_resource(&format!("/lists/{}", list_id)).await
    }
}
