//! Trello resources.
//!
//! Every resource decoded from a response is bound to the client that fetched
//! it, so its methods can issue further requests. Resources built by hand (or
//! deserialized directly) are unbound and their request methods return
//! [`Error::Unbound`](crate::error::Error::Unbound).

mod action;
mod attachment;
mod board;
mod card;
mod checklist;
mod label;
mod list;
mod member;
pub(crate) mod membership;
mod notification;
mod organization;
mod position;
mod webhook;

pub use action::*;
pub use attachment::*;
pub use board::*;
pub use card::*;
pub use checklist::*;
pub use label::*;
pub use list::*;
pub use member::*;
pub use membership::Membership;
pub use notification::*;
pub use organization::*;
pub use position::*;
pub use webhook::*;
