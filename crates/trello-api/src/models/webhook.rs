//! Webhooks registered against a token.

use serde::{Deserialize, Serialize};

use crate::client::TrelloClient;
use crate::error::Result;
use crate::resource::{bound, Bind};

/// A webhook that posts model changes to a callback URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Webhook {
    #[serde(skip)]
    client: Option<TrelloClient>,

    pub id: String,
    pub description: String,

    /// ID of the watched model (board, list, card, member, ...).
    pub id_model: String,

    #[serde(rename = "callbackURL")]
    pub callback_url: String,

    pub active: bool,
    pub consecutive_failures: u32,
}

/// Parameters for creating a webhook.
///
/// ```
/// use trello_api_rs::models::NewWebhook;
///
/// let hook = NewWebhook::new("https://example.com/hooks/trello", "5f1b...")
///     .with_description("board watcher");
/// assert_eq!(hook.description, "board watcher");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewWebhook {
    pub description: String,
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
    #[serde(rename = "idModel")]
    pub id_model: String,
}

impl NewWebhook {
    /// Creates webhook parameters for a callback URL and model ID.
    pub fn new(callback_url: impl Into<String>, id_model: impl Into<String>) -> Self {
        Self {
            description: String::new(),
            callback_url: callback_url.into(),
            id_model: id_model.into(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl Bind for Webhook {
    fn bind(&mut self, client: &TrelloClient) {
        self.client = Some(client.clone());
    }
}

impl Webhook {
    /// Returns the client this webhook is bound to.
    pub fn client(&self) -> Option<&TrelloClient> {
        self.client.as_ref()
    }

    /// Activates or deactivates the webhook.
    pub async fn set_active(&mut self, active: bool) -> Result<()> {
        let value = if active { "true" } else { "false" };
        self.update(&[("active", value)]).await
    }

    /// Points the webhook at a new callback URL.
    pub async fn set_callback_url(&mut self, callback_url: &str) -> Result<()> {
        self.update(&[("callbackURL", callback_url)]).await
    }

    /// Changes the webhook description.
    pub async fn set_description(&mut self, description: &str) -> Result<()> {
        self.update(&[("description", description)]).await
    }

    /// Watches a different model.
    pub async fn set_id_model(&mut self, id_model: &str) -> Result<()> {
        self.update(&[("idModel", id_model)]).await
    }

    async fn update(&mut self, form: &[(&str, &str)]) -> Result<()> {
        let client = bound(&self.client, "webhook")?;
        let updated = client
            .put_merged(&*self, &format!("/webhooks/{}", self.id), form)
            .await?;
        *self = updated;
        Ok(())
    }

    /// Deletes the webhook.
    pub async fn delete(&self) -> Result<()> {
        bound(&self.client, "webhook")?
            .delete_webhook(&self.id)
            .await
    }
}

impl TrelloClient {
    /// Lists the webhooks registered for a token.
    pub async fn webhooks(&self, token: &str) -> Result<Vec<Webhook>> {
        self.get_resource(&format!("/tokens/{}/webhooks/", token))
            .await
    }

    /// Fetches a webhook by ID.
    pub async fn webhook(&self, webhook_id: &str) -> Result<Webhook> {
        self.get_resource(&format!("/webhooks/{}/", webhook_id))
            .await
    }

    /// Creates a webhook.
    pub async fn create_webhook(&self, hook: &NewWebhook) -> Result<Webhook> {
        self.post_resource("/webhooks/", hook).await
    }

    /// Deletes a webhook by ID.
    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<()> {
        self.delete(&format!("/webhooks/{}/", webhook_id)).await?;
        Ok(())
    }
}
