//! Normalized Slack message type.
//!
//! Every record of an export file becomes one [`Message`], no matter how
//! incomplete the record is. Missing fields are represented explicitly:
//! an empty `author`, or `text == None`.
//!
//! # Examples
//!
//! ```
//! use slackpick::Message;
//!
//! let msg = Message::new("Alice", "Hello, world!");
//! assert_eq!(msg.author(), "Alice");
//! assert_eq!(msg.text(), Some("Hello, world!"));
//! assert_eq!(msg.to_string(), "Hello, world!");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::parsing::slack::normalize_record;

/// A message normalized from a Slack export record.
///
/// | Field | Type | Source key |
/// |-------|------|------------|
/// | `author` | `String` | `user_profile.display_name`, `""` when absent |
/// | `text` | `Option<String>` | `text`, `None` when absent or not a string |
///
/// Messages are plain values; two messages are the same if their fields are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// Display name of the author.
    pub author: String,

    /// Message body.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub text: Option<String>,
}

impl Message {
    /// Creates a message with an author and a body.
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: Some(text.into()),
        }
    }

    /// Creates a message whose body is missing.
    ///
    /// ```
    /// use slackpick::Message;
    ///
    /// let msg = Message::without_text("Alice");
    /// assert_eq!(msg.text(), None);
    /// assert_eq!(msg.to_string(), "");
    /// ```
    pub fn without_text(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: None,
        }
    }

    /// Normalizes one raw export record.
    ///
    /// See [`normalize_record`] for the fallback rules.
    pub fn from_exported(record: &Value) -> Self {
        normalize_record(record)
    }

    /// Normalizes every record of an export, preserving order.
    pub fn from_exported_list(records: &[Value]) -> Vec<Self> {
        records.iter().map(normalize_record).collect()
    }

    /// Returns the author display name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the message body, if the record had one.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// Prints the message body; a missing body prints nothing.
impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text().unwrap_or_default())
    }
}
