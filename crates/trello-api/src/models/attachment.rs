//! Card attachments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::TrelloClient;
use crate::resource::Bind;

/// A file or link attached to a card.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Attachment {
    #[serde(skip)]
    client: Option<TrelloClient>,

    pub id: String,
    pub bytes: Option<u64>,
    pub date: Option<DateTime<Utc>>,
    pub edge_color: Option<String>,
    pub id_member: String,
    pub is_upload: bool,
    pub mime_type: Option<String>,
    pub name: String,
    pub previews: Vec<AttachmentPreview>,
    pub url: String,
}

/// A scaled preview image of an attachment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachmentPreview {
    #[serde(rename = "_id")]
    pub id: String,
    pub width: u32,
    pub height: u32,
    pub url: String,
    pub bytes: u64,
    pub scaled: bool,
}

impl Bind for Attachment {
    fn bind(&mut self, client: &TrelloClient) {
        self.client = Some(client.clone());
    }
}

impl Attachment {
    /// Returns the client this attachment is bound to.
    pub fn client(&self) -> Option<&TrelloClient> {
        self.client.as_ref()
    }

    /// Returns the largest preview, if any.
    pub fn largest_preview(&self) -> Option<&AttachmentPreview> {
        self.previews.iter().max_by_key(|p| u64::from(p.width) * u64::from(p.height))
    }
}
