//! Parser trait for chat exports.
//!
//! # Example
//!
//! ```rust,no_run
//! use slackpick::parser::Parser;
//! use slackpick::parsers::SlackParser;
//! use std::path::Path;
//!
//! let parser = SlackParser::new();
//! let messages = parser.parse(Path::new("general/2024-01-15.json"))?;
//! println!("{} messages", messages.len());
//! # Ok::<(), slackpick::SlackpickError>(())
//! ```

use std::path::Path;

use crate::Message;
use crate::error::SlackpickError;

/// Turns one export file into normalized messages.
///
/// Implementations read the whole file, then return every record in file
/// order. A file that cannot be read or parsed is an error; a malformed
/// record inside it is not.
pub trait Parser: Send + Sync {
    /// Returns the human-readable name of the export format.
    fn name(&self) -> &'static str;

    /// Parses an export file.
    ///
    /// # Errors
    ///
    /// Returns [`SlackpickError::FileAccess`] if the file cannot be read and
    /// [`SlackpickError::Parse`] if its content is rejected. Both carry `path`.
    fn parse(&self, path: &Path) -> Result<Vec<Message>, SlackpickError>;

    /// Parses export content already held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`SlackpickError::Parse`] without a path.
    fn parse_str(&self, content: &str) -> Result<Vec<Message>, SlackpickError>;
}
