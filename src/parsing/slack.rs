//! Slack record normalization.
//!
//! A Slack export record looks like this (unrelated keys omitted):
//!
//! ```json
//! {
//!   "user_profile": { "display_name": "Alice" },
//!   "text": "Hello!"
//! }
//! ```
//!
//! Records are read as loose [`Value`]s and each field is extracted on its own,
//! so a wrong type in one field never discards the other.

use serde_json::Value;
use tracing::trace;

use crate::Message;

/// Key holding the author's profile object.
pub const USER_PROFILE_KEY: &str = "user_profile";

/// Key inside the profile holding the display name.
pub const DISPLAY_NAME_KEY: &str = "display_name";

/// Key holding the message body.
pub const TEXT_KEY: &str = "text";

/// Extracts `user_profile.display_name`.
///
/// Returns `""` when the profile is missing, is not an object, or its display
/// name is missing or not a string.
pub fn extract_author(record: &Value) -> String {
    record
        .get(USER_PROFILE_KEY)
        .and_then(|profile| profile.get(DISPLAY_NAME_KEY))
        .and_then(Value::as_str)
        .map(ToString::to_string)
        .unwrap_or_default()
}

/// Extracts `text`.
///
/// Returns `None` when the key is missing or holds anything but a string.
pub fn extract_text(record: &Value) -> Option<String> {
    record
        .get(TEXT_KEY)
        .and_then(Value::as_str)
        .map(ToString::to_string)
}

/// Normalizes one raw record into a [`Message`].
///
/// Never fails. Non-object records become [`Message::default`].
pub fn normalize_record(record: &Value) -> Message {
    if !record.is_object() {
        return Message::default();
    }

    let author = extract_author(record);
    let text = extract_text(record);

    if text.is_none() {
        trace!(author = %author, "record has no string text");
    }

    Message { author, text }
}

/// Returns the JSON type name of `value`, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
