//! Record-level parsing utilities.
//!
//! Field extraction lives here so both the file parser and
//! [`Message::from_exported`](crate::Message::from_exported) share one set of
//! fallback rules.

pub mod slack;

pub use slack::{extract_author, extract_text, json_type_name, normalize_record};
