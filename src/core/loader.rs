//! Loading several export files into one ordered message sequence.
//!
//! Files are read one after another; all messages of file N come before all
//! messages of file N + 1. The first failing file aborts the whole load.

use std::path::Path;

use tracing::debug;

use crate::Message;
use crate::error::Result;
use crate::parser::Parser;
use crate::parsers::SlackParser;

/// Loads every file in `paths` with the default [`SlackParser`].
///
/// # Example
///
/// ```rust,no_run
/// use slackpick::core::load_exports;
///
/// let messages = load_exports(["general/2024-01-15.json", "general/2024-01-16.json"])?;
/// # Ok::<(), slackpick::SlackpickError>(())
/// ```
pub fn load_exports<I, P>(paths: I) -> Result<Vec<Message>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    load_exports_with(&SlackParser::new(), paths)
}

/// Loads every file in `paths` with `parser`, concatenating in order.
pub fn load_exports_with<I, P>(parser: &dyn Parser, paths: I) -> Result<Vec<Message>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut messages = Vec::new();
    let mut files = 0usize;

    for path in paths {
        messages.extend(parser.parse(path.as_ref())?);
        files += 1;
    }

    debug!(files, messages = messages.len(), parser = parser.name(), "loaded exports");
    Ok(messages)
}

/// Parses in-memory export contents, concatenating in order.
///
/// The pure counterpart of [`load_exports`]. Parse errors carry no path.
pub fn load_contents<I, S>(parser: &dyn Parser, contents: I) -> Result<Vec<Message>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut messages = Vec::new();
    for content in contents {
        messages.extend(parser.parse_str(content.as_ref())?);
    }
    Ok(messages)
}
