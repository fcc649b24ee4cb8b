//! Organizations (workspaces).

use serde::{Deserialize, Serialize};

use crate::client::TrelloClient;
use crate::error::Result;
use crate::models::{Board, Member};
use crate::resource::{bound, Bind};

/// A Trello organization (shown as a "Workspace" in the UI).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Organization {
    #[serde(skip)]
    client: Option<TrelloClient>,

    pub id: String,
    pub name: String,
    pub display_name: String,
    pub desc: String,
    pub desc_data: Option<serde_json::Value>,
    pub url: String,
    pub website: Option<String>,
    pub logo_hash: Option<String>,
    pub products: Vec<serde_json::Value>,
    pub power_ups: Vec<serde_json::Value>,
}

impl Bind for Organization {
    fn bind(&mut self, client: &TrelloClient) {
        self.client = Some(client.clone());
    }
}

impl Organization {
    /// Returns the client this organization is bound to.
    pub fn client(&self) -> Option<&TrelloClient> {
        self.client.as_ref()
    }

    /// Returns the members of the organization.
    pub async fn members(&self) -> Result<Vec<Member>> {
        let client = bound(&self.client, "organization")?;
        client
            .get_resource(&format!("/organizations/{}/members", self.id))
            .await
    }

    /// Returns the boards in the organization.
    pub async fn boards(&self) -> Result<Vec<Board>> {
        let client = bound(&self.client, "organization")?;
        client
            .get_resource(&format!("/organizations/{}/boards", self.id))
            .await
    }

    /// Creates a board inside the organization.
    pub async fn add_board(&self, name: &str) -> Result<Board> {
        let client = bound(&self.client, "organization")?;
        client
            .post_resource(
                "/boards",
                &[("name", name), ("idOrganization", self.id.as_str())],
            )
            .await
    }
}

impl TrelloClient {
    /// Fetches an organization by ID or name.
    pub async fn organization(&self, organization_id: &str) -> Result<Organization> {
        self.get_resource(&format!("/organizations/{}", organization_id))
            .await
    }
}
