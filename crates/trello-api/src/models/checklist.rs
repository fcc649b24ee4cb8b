//! Checklists and their items.

use serde::{Deserialize, Serialize};

use crate::client::TrelloClient;
use crate::error::{ApiError, Result};
use crate::resource::{bound, Bind};

/// Longest checklist item name Trello accepts, in bytes.
pub const MAX_CHECK_ITEM_NAME_LEN: usize = 16384;

/// A checklist on a card.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Checklist {
    #[serde(skip)]
    client: Option<TrelloClient>,

    pub id: String,
    pub name: String,
    pub id_board: String,
    pub id_card: String,
    pub pos: f64,
    pub check_items: Vec<ChecklistItem>,
}

/// An item of a checklist. It remembers its checklist so it can delete itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChecklistItem {
    #[serde(skip)]
    client: Option<TrelloClient>,
    #[serde(skip)]
    checklist_id: String,

    pub id: String,
    pub name: String,

    /// `complete` or `incomplete`.
    pub state: String,

    pub pos: f64,
}

impl Bind for Checklist {
    fn bind(&mut self, client: &TrelloClient) {
        self.client = Some(client.clone());
        for item in &mut self.check_items {
            item.bind_to(client, &self.id);
        }
    }
}

impl Checklist {
    /// Returns the client this checklist is bound to.
    pub fn client(&self) -> Option<&TrelloClient> {
        self.client.as_ref()
    }

    /// Deletes the checklist.
    pub async fn delete(&self) -> Result<()> {
        let client = bound(&self.client, "checklist")?;
        client.delete(&format!("/checklists/{}", self.id)).await?;
        Ok(())
    }

    /// Adds an item to the checklist.
    ///
    /// `name` must be 1 to 16384 bytes long. `pos` is `top`, `bottom` or a
    /// positive integer; when empty Trello appends the item at the bottom.
    /// Both are checked before any request is made.
    pub async fn add_item(&self, name: &str, pos: &str, checked: bool) -> Result<ChecklistItem> {
        validate_item(name, pos)?;
        let client = bound(&self.client, "checklist")?;

        let mut form = vec![("name", name)];
        if !pos.is_empty() {
            form.push(("pos", pos));
        }
        form.push(("checked", if checked { "true" } else { "false" }));

        let body = client
            .post(&format!("/checklists/{}/checkItems", self.id), &form)
            .await?;
        let mut item: ChecklistItem = crate::resource::decode(&body)?;
        item.bind_to(client, &self.id);
        Ok(item)
    }
}

fn validate_item(name: &str, pos: &str) -> std::result::Result<(), ApiError> {
    if name.is_empty() || name.len() > MAX_CHECK_ITEM_NAME_LEN {
        return Err(ApiError::validation(
            "name",
            format!(
                "checklist item name has invalid length {} (expected 1 to {})",
                name.len(),
                MAX_CHECK_ITEM_NAME_LEN
            ),
        ));
    }

    if pos.is_empty() || pos == "top" || pos == "bottom" {
        return Ok(());
    }

    match pos.parse::<i64>() {
        Ok(n) if n >= 1 => Ok(()),
        _ => Err(ApiError::validation(
            "pos",
            format!("checklist item position {pos:?} is invalid, expected top, bottom or a positive integer"),
        )),
    }
}

impl ChecklistItem {
    fn bind_to(&mut self, client: &TrelloClient, checklist_id: &str) {
        self.client = Some(client.clone());
        self.checklist_id = checklist_id.to_string();
    }

    /// Returns the client this item is bound to.
    pub fn client(&self) -> Option<&TrelloClient> {
        self.client.as_ref()
    }

    /// Returns the ID of the checklist holding this item.
    pub fn checklist_id(&self) -> &str {
        &self.checklist_id
    }

    /// Returns true if the item is checked.
    pub fn is_complete(&self) -> bool {
        self.state == "complete"
    }

    /// Removes the item from its checklist.
    pub async fn delete(&self) -> Result<()> {
        let client = bound(&self.client, "checklist item")?;
        client
            .delete(&format!(
                "/checklists/{}/checkItems/{}",
                self.checklist_id, self.id
            ))
            .await?;
        Ok(())
    }
}
