//! Configuration types for parsing.
//!
//! There are no config files; these structs exist so library users can tune
//! behavior without going through the CLI. Filter settings live in
//! [`FilterConfig`](crate::core::filter::FilterConfig).
//!
//! # Example
//!
//! ```rust
//! use slackpick::config::SlackConfig;
//! use slackpick::parsers::SlackParser;
//!
//! let config = SlackConfig::new().with_warn_on_malformed(false);
//! let parser = SlackParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for Slack export parsing.
///
/// Slack exports are JSON files holding one array of message records per
/// channel per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackConfig {
    /// Log a warning for each record that is not a JSON object (default: true)
    pub warn_on_malformed: bool,
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            warn_on_malformed: true,
        }
    }
}

impl SlackConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether non-object records are logged at warn level.
    #[must_use]
    pub fn with_warn_on_malformed(mut self, warn: bool) -> Self {
        self.warn_on_malformed = warn;
        self
    }
}
