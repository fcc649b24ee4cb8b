//! Prelude module for convenient imports.
//!
//! Re-exports the client, the error types and every resource model.
//!
//! # Example
//!
//! ```
//! use trello_api_rs::prelude::*;
//!
//! // Now you have access to:
//! // - TrelloClient, TrelloClientBuilder (API client)
//! // - Error, ApiError, Result (error handling)
//! // - Argument, encode_args (action filters)
//! // - Board, Card, List, Member, ... (resources)
//! ```

// Client types
pub use crate::client::{TrelloClient, TrelloClientBuilder};

// Error types
pub use crate::error::{ApiError, Error, Result};

// Query arguments
pub use crate::args::{encode_args, Argument};

// Resources
pub use crate::models::{
    Action, Attachment, AttachmentPreview, Board, BoardBackground, BoardPrefs, Card, CardBadges,
    CheckItemState, Checklist, ChecklistItem, Label, LabelNames, List, Member, MemberCreator,
    MemberPrefs, Membership, NewCard, NewWebhook, Notification, NotificationData, Organization,
    Position, Webhook,
};
