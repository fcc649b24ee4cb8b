//! Trello REST API client library
//!
//! # Quick Start
//!
//! ```no_run
//! use trello_api_rs::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let client = TrelloClient::from_env()?;
//! let me = client.member("me").await?;
//! for board in me.boards(&[]).await? {
//!     for list in board.lists().await? {
//!         println!("{} / {}: {} cards", board.name, list.name, list.cards().await?.len());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Resources returned by the client keep a handle to it, so follow-up calls are
//! made directly on the returned values.

pub mod args;
pub mod client;
pub mod error;
pub mod models;
pub mod prelude;
pub(crate) mod resource;

pub use client::{TrelloClient, TrelloClientBuilder};
pub use error::{ApiError, Error, Result};
