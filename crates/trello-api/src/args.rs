//! Query arguments for list-like endpoints such as actions.

use serde::Serialize;

/// A single `name=value` query argument.
///
/// ```
/// use trello_api_rs::args::{encode_args, Argument};
///
/// let args = [Argument::new("filter", "addMemberToCard"), Argument::new("limit", "50")];
/// assert_eq!(encode_args(&args), "filter=addMemberToCard&limit=50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Argument {
    pub name: String,
    pub value: String,
}

impl Argument {
    /// Creates a new argument.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Encodes arguments as a URL query string, in order.
///
/// Returns an empty string when there are no arguments.
pub fn encode_args(args: &[Argument]) -> String {
    let pairs: Vec<(&str, &str)> = args
        .iter()
        .map(|arg| (arg.name.as_str(), arg.value.as_str()))
        .collect();
    serde_urlencoded::to_string(pairs).unwrap_or_default()
}

/// Appends encoded arguments to `path`, if there are any.
pub(crate) fn with_args(path: String, args: &[Argument]) -> String {
    let query = encode_args(args);
    if query.is_empty() {
        path
    } else {
        format!("{path}?{query}")
    }
}
