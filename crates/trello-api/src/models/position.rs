//! Position of a list in a board, a card in a list, or an item in a checklist.

use std::fmt;

use serde::{Serialize, Serializer};

/// Where to place a list, card or checklist item.
///
/// Trello accepts `top`, `bottom`, or a positive number.
///
/// ```
/// use trello_api_rs::models::Position;
///
/// assert_eq!(Position::Top.to_string(), "top");
/// assert_eq!(Position::Value(16384.0).to_string(), "16384");
/// assert_eq!(Position::Value(1.5).to_string(), "1.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Position {
    Top,
    #[default]
    Bottom,
    Value(f64),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Top => write!(f, "top"),
            Position::Bottom => write!(f, "bottom"),
            Position::Value(pos) => write!(f, "{}", pos),
        }
    }
}

impl From<f64> for Position {
    fn from(pos: f64) -> Self {
        Position::Value(pos)
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
