//! Board labels.

use serde::{Deserialize, Serialize};

use crate::client::TrelloClient;
use crate::error::Result;
use crate::resource::{bound, Bind};

/// A label defined on a board and attached to cards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Label {
    #[serde(skip)]
    client: Option<TrelloClient>,

    pub id: String,
    pub id_board: String,
    pub name: String,

    /// Label color; `None` for colorless labels.
    pub color: Option<String>,

    /// Number of cards using the label.
    pub uses: u32,
}

impl Bind for Label {
    fn bind(&mut self, client: &TrelloClient) {
        self.client = Some(client.clone());
    }
}

impl Label {
    /// Returns the client this label is bound to.
    pub fn client(&self) -> Option<&TrelloClient> {
        self.client.as_ref()
    }

    /// Renames the label.
    pub async fn set_name(&mut self, name: &str) -> Result<()> {
        self.update("name", name).await
    }

    /// Changes the label color. An empty string removes the color.
    pub async fn set_color(&mut self, color: &str) -> Result<()> {
        self.update("color", color).await
    }

    /// Updates one label field (`PUT /labels/{id}/{path}`) and applies the
    /// response to this label.
    pub async fn update(&mut self, path: &str, value: &str) -> Result<()> {
        let client = bound(&self.client, "label")?;
        let updated = client
            .put_merged(&*self, &format!("/labels/{}/{}", self.id, path), &[("value", value)])
            .await?;
        *self = updated;
        Ok(())
    }

    /// Deletes the label from its board.
    pub async fn delete(&self) -> Result<()> {
        let client = bound(&self.client, "label")?;
        client.delete(&format!("/labels/{}", self.id)).await?;
        Ok(())
    }
}
