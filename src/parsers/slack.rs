//! Slack JSON export parser.
//!
//! A Slack workspace export stores each channel as a directory of daily files,
//! and every file is a JSON array of message records. This parser reads one
//! such file and normalizes each element into a [`Message`].

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::Message;
use crate::config::SlackConfig;
use crate::error::SlackpickError;
use crate::parser::Parser;
use crate::parsing::slack::{json_type_name, normalize_record};

/// Parser for Slack JSON exports.
///
/// # Example
///
/// ```rust
/// use slackpick::parser::Parser;
/// use slackpick::parsers::SlackParser;
///
/// let parser = SlackParser::new();
/// let messages = parser.parse_str(
///     r#"[{"user_profile": {"display_name": "Alice"}, "text": "hi"}]"#,
/// )?;
/// assert_eq!(messages[0].author(), "Alice");
/// # Ok::<(), slackpick::SlackpickError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SlackParser {
    config: SlackConfig,
}

impl SlackParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: SlackConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &SlackConfig {
        &self.config
    }

    /// Decodes raw bytes; invalid UTF-8 is a JSON error like any other.
    fn parse_content(&self, content: &[u8]) -> Result<Vec<Message>, SlackpickError> {
        let value: Value =
            serde_json::from_slice(content).map_err(|e| SlackpickError::json_parse(e, None))?;

        let records = match value {
            Value::Array(records) => records,
            other => return Err(SlackpickError::not_an_array(json_type_name(&other), None)),
        };

        let messages = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                if self.config.warn_on_malformed && !record.is_object() {
                    warn!(
                        index,
                        found = json_type_name(record),
                        "record is not an object, using empty message"
                    );
                }
                normalize_record(record)
            })
            .collect();

        Ok(messages)
    }
}

impl Parser for SlackParser {
    fn name(&self) -> &'static str {
        "Slack"
    }

    fn parse(&self, path: &Path) -> Result<Vec<Message>, SlackpickError> {
        let content = fs::read(path).map_err(|e| SlackpickError::file_access(path, e))?;
        let messages = self
            .parse_content(&content)
            .map_err(|e| e.with_path(path))?;
        debug!(path = %path.display(), count = messages.len(), "parsed export file");
        Ok(messages)
    }

    fn parse_str(&self, content: &str) -> Result<Vec<Message>, SlackpickError> {
        self.parse_content(content.as_bytes())
    }
}
